use async_trait::async_trait;
use docsign_core::utils::Redact;
use docsign_core::{Context, ProvideCredential};
use std::fmt::{self, Debug};

use crate::{Config, Credential};

/// Provide credential from a [`Config`] object.
#[derive(Clone)]
pub struct ConfigCredentialProvider {
    config: Config,
}

impl ConfigCredentialProvider {
    /// Create a new provider backed by the given config.
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl Debug for ConfigCredentialProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigCredentialProvider")
            .field("endpoint", &self.config.endpoint)
            .field("master_key", &Redact::from(&self.config.master_key))
            .finish()
    }
}

#[async_trait]
impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(
        &self,
        _ctx: &Context,
    ) -> docsign_core::Result<Option<Self::Credential>> {
        match self.config.master_key.as_deref() {
            Some(key) if !key.is_empty() => Ok(Some(Credential::with_master_key(key))),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_config_credential_provider() {
        let ctx = Context::new();

        let provider = ConfigCredentialProvider::new(Config {
            master_key: Some("dGVzdF9rZXk=".to_string()),
            ..Default::default()
        });
        let cred = provider.provide_credential(&ctx).await.unwrap().unwrap();
        assert_eq!(cred.master_key, "dGVzdF9rZXk=");
    }

    #[tokio::test]
    async fn test_config_credential_provider_empty() {
        let ctx = Context::new();

        let provider = ConfigCredentialProvider::new(Config::default());
        assert!(provider.provide_credential(&ctx).await.unwrap().is_none());

        let provider = ConfigCredentialProvider::new(Config {
            master_key: Some("".to_string()),
            ..Default::default()
        });
        assert!(provider.provide_credential(&ctx).await.unwrap().is_none());
    }

    #[test]
    fn test_debug_redacts_master_key() {
        let provider = ConfigCredentialProvider::new(Config {
            endpoint: Some("https://localhost:8081".to_string()),
            master_key: Some("dGVzdF9zZWNyZXRfa2V5".to_string()),
        });
        let out = format!("{provider:?}");
        assert!(out.contains("https://localhost:8081"));
        assert!(!out.contains("dGVzdF9zZWNyZXRfa2V5"));
    }
}

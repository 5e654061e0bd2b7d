use crate::provide_credential::{ConfigCredentialProvider, EnvCredentialProvider};
use crate::{Config, Credential};
use async_trait::async_trait;
use docsign_core::{Context, ProvideCredential, ProvideCredentialChain};

/// Default provider that tries multiple credential sources in order.
///
/// The default provider attempts to load the master key from the following
/// sources in order:
/// 1. Configuration (explicit master key)
/// 2. Environment (master key or connection string variables)
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    chain: ProvideCredentialChain<Credential>,
}

impl Default for DefaultCredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultCredentialProvider {
    /// Create a new default provider reading from the environment only.
    pub fn new() -> Self {
        let chain = ProvideCredentialChain::new().push(EnvCredentialProvider::new());

        Self { chain }
    }

    /// Create a default provider that consults the given config before the
    /// environment.
    pub fn with_config(config: Config) -> Self {
        let chain = ProvideCredentialChain::new()
            .push(ConfigCredentialProvider::new(config))
            .push(EnvCredentialProvider::new());

        Self { chain }
    }
}

#[async_trait]
impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(
        &self,
        ctx: &Context,
    ) -> docsign_core::Result<Option<Self::Credential>> {
        self.chain.provide_credential(ctx).await
    }
}

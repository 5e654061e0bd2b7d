use docsign_core::{Context, Result};
use log::warn;

use crate::connection_string;
use crate::constants::{
    AZURE_COSMOS_CONNECTION_STRING, AZURE_COSMOS_ENDPOINT, AZURE_COSMOS_MASTER_KEY,
    COSMOSDB_CONNECTION_STRING, COSMOSDB_EMULATOR_ENDPOINT, COSMOSDB_EMULATOR_MASTER_KEY,
    COSMOSDB_ENDPOINT, COSMOSDB_MASTER_KEY,
};

/// Config carries all the configuration for CosmosDB request signing.
#[derive(Clone, Default)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Config {
    /// `endpoint` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `COSMOSDB_ENDPOINT`, falling back to `AZURE_COSMOS_ENDPOINT`
    pub endpoint: Option<String>,
    /// `master_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `COSMOSDB_MASTER_KEY`, falling back to `AZURE_COSMOS_MASTER_KEY`
    pub master_key: Option<String>,
}

impl Config {
    /// Load config from env.
    ///
    /// Values found in the environment replace the corresponding fields. When
    /// endpoint or master key are still missing afterwards, a connection
    /// string env var is parsed to fill the gaps.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx
            .env_var(COSMOSDB_ENDPOINT)
            .or_else(|| ctx.env_var(AZURE_COSMOS_ENDPOINT))
        {
            self.endpoint = Some(v);
        }

        if let Some(v) = ctx
            .env_var(COSMOSDB_MASTER_KEY)
            .or_else(|| ctx.env_var(AZURE_COSMOS_MASTER_KEY))
        {
            self.master_key = Some(v);
        }

        if self.endpoint.is_none() || self.master_key.is_none() {
            if let Some(conn_str) = ctx
                .env_var(COSMOSDB_CONNECTION_STRING)
                .or_else(|| ctx.env_var(AZURE_COSMOS_CONNECTION_STRING))
            {
                match connection_string::parse(&conn_str) {
                    Ok(parsed) => {
                        self.endpoint = self.endpoint.or(parsed.endpoint);
                        self.master_key = self.master_key.or(parsed.master_key);
                    }
                    Err(e) => {
                        warn!("ignoring unparsable connection string from env: {e:?}");
                    }
                }
            }
        }

        self
    }

    /// Parses a CosmosDB connection string into a configuration object.
    ///
    /// The connection string doesn't have to specify all required parameters
    /// because the user is still allowed to set them later directly on the object.
    ///
    /// An example of a connection string looks like:
    ///
    /// ```txt
    /// AccountEndpoint=https://myaccount.documents.azure.com:443/;
    /// AccountKey=C2y6yDjf5/R+ob0N8A7Cgv30VRDJIWEHLM+4QDU5DE2nQ9nDuVTqobD4b8mGGyPMbIZnqyMsEcaGQy67XIw/Jw==
    /// ```
    pub fn try_from_connection_string(conn_str: &str) -> Result<Self> {
        connection_string::parse(conn_str)
    }

    /// Config preconfigured for the local CosmosDB emulator using its well
    /// known endpoint and fixed master key.
    pub fn emulator() -> Self {
        Self {
            endpoint: Some(COSMOSDB_EMULATOR_ENDPOINT.to_string()),
            master_key: Some(COSMOSDB_EMULATOR_MASTER_KEY.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsign_core::StaticEnv;
    use std::collections::HashMap;

    #[test]
    fn test_from_env() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([
                (
                    COSMOSDB_ENDPOINT.to_string(),
                    "https://localhost:8081".to_string(),
                ),
                (COSMOSDB_MASTER_KEY.to_string(), "dGVzdF9rZXk=".to_string()),
            ]),
        });

        let config = Config::default().from_env(&ctx);
        assert_eq!(config.endpoint.as_deref(), Some("https://localhost:8081"));
        assert_eq!(config.master_key.as_deref(), Some("dGVzdF9rZXk="));
    }

    #[test]
    fn test_from_env_azure_names() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([
                (
                    AZURE_COSMOS_ENDPOINT.to_string(),
                    "https://myaccount.documents.azure.com:443/".to_string(),
                ),
                (
                    AZURE_COSMOS_MASTER_KEY.to_string(),
                    "dGVzdF9rZXk=".to_string(),
                ),
            ]),
        });

        let config = Config::default().from_env(&ctx);
        assert_eq!(
            config.endpoint.as_deref(),
            Some("https://myaccount.documents.azure.com:443/")
        );
        assert_eq!(config.master_key.as_deref(), Some("dGVzdF9rZXk="));
    }

    #[test]
    fn test_from_env_connection_string_fills_missing() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([(
                COSMOSDB_CONNECTION_STRING.to_string(),
                "AccountEndpoint=https://localhost:8081/;AccountKey=dGVzdF9rZXk=;".to_string(),
            )]),
        });

        let config = Config::default().from_env(&ctx);
        assert_eq!(config.endpoint.as_deref(), Some("https://localhost:8081/"));
        assert_eq!(config.master_key.as_deref(), Some("dGVzdF9rZXk="));
    }

    #[test]
    fn test_explicit_key_wins_over_connection_string() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([(
                COSMOSDB_CONNECTION_STRING.to_string(),
                "AccountEndpoint=https://localhost:8081/;AccountKey=ZnJvbV9jb25uX3N0cg==".to_string(),
            )]),
        });

        let config = Config {
            master_key: Some("ZXhwbGljaXQ=".to_string()),
            ..Default::default()
        }
        .from_env(&ctx);

        assert_eq!(config.master_key.as_deref(), Some("ZXhwbGljaXQ="));
        assert_eq!(config.endpoint.as_deref(), Some("https://localhost:8081/"));
    }

    #[test]
    fn test_emulator() {
        let config = Config::emulator();
        assert_eq!(config.endpoint.as_deref(), Some(COSMOSDB_EMULATOR_ENDPOINT));
        assert_eq!(
            config.master_key.as_deref(),
            Some(COSMOSDB_EMULATOR_MASTER_KEY)
        );
    }
}

use async_trait::async_trait;
use docsign_core::{Context, ProvideCredential};

use crate::connection_string;
use crate::constants::{
    AZURE_COSMOS_CONNECTION_STRING, AZURE_COSMOS_MASTER_KEY, COSMOSDB_CONNECTION_STRING,
    COSMOSDB_MASTER_KEY,
};
use crate::credential::Credential;

#[derive(Clone, Debug, Default)]
pub struct EnvCredentialProvider {}

impl EnvCredentialProvider {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(
        &self,
        ctx: &Context,
    ) -> Result<Option<Self::Credential>, docsign_core::Error> {
        let envs = ctx.env_vars();

        // Try to get the master key from multiple possible env vars
        if let Some(master_key) = envs
            .get(COSMOSDB_MASTER_KEY)
            .or_else(|| envs.get(AZURE_COSMOS_MASTER_KEY))
        {
            return Ok(Some(Credential::with_master_key(master_key)));
        }

        // Fall back to a connection string if one is present
        if let Some(conn_str) = envs
            .get(COSMOSDB_CONNECTION_STRING)
            .or_else(|| envs.get(AZURE_COSMOS_CONNECTION_STRING))
        {
            if let Some(master_key) = connection_string::parse(conn_str)?.master_key {
                return Ok(Some(Credential::with_master_key(&master_key)));
            }
        }

        Ok(None)
    }
}

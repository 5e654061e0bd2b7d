use std::collections::HashMap;

use docsign_core::{Error, Result};

use crate::Config;

/// Parses a [CosmosDB connection string][1] of the form
/// `AccountEndpoint=https://myaccount.documents.azure.com:443/;AccountKey=...;`.
///
/// [1]: https://learn.microsoft.com/en-us/azure/cosmos-db/how-to-connect
pub(crate) fn parse(conn_str: &str) -> Result<Config> {
    let key_values = parse_into_key_values(conn_str)?;

    Ok(Config {
        endpoint: key_values.get("AccountEndpoint").cloned(),
        master_key: key_values.get("AccountKey").cloned(),
    })
}

fn parse_into_key_values(conn_str: &str) -> Result<HashMap<String, String>> {
    conn_str
        .trim()
        .replace("\n", "")
        .split(';')
        .filter(|&field| !field.is_empty())
        .map(|field| {
            // Split on the first '=' only: the base64 key ends with padding.
            let (key, value) = field.trim().split_once('=').ok_or_else(|| {
                Error::config_invalid(format!(
                    "invalid connection string, expected '=' in field: {field}"
                ))
            })?;
            Ok((key.to_string(), value.to_string()))
        })
        .collect()
}

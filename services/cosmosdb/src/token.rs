use crate::constants::{AUTH_TOKEN_ENCODE_SET, AUTH_TOKEN_TYPE_MASTER, AUTH_TOKEN_VERSION};
use docsign_core::hash::{base64_decode, base64_hmac_sha256};
use docsign_core::{Error, Result};
use log::debug;
use percent_encoding::percent_encode;

/// The two values a signing operation hands back to the caller.
///
/// The `date` is the exact string that was folded into the signature, so it
/// must be sent as the `x-ms-date` header unchanged or the gateway will
/// reconstruct a different string to sign and reject the request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedAuthorization {
    /// URL encoded `type=master&ver=1.0&sig=<signature>` token.
    pub authorization: String,
    /// The timestamp covered by the signature.
    pub date: String,
}

/// Construct string to sign.
///
/// ## Format
///
/// ```text
/// lower(VERB) + "\n" +
/// lower(ResourceType) + "\n" +
/// ResourceId + "\n" +
/// lower(Date) + "\n" +
/// "" + "\n"
/// ```
///
/// The fifth line is reserved by the protocol and always empty. The resource
/// id keeps its original case while everything else is folded to lowercase.
///
/// ## Reference
///
/// - [Access control in the Azure Cosmos DB SQL API](https://learn.microsoft.com/en-us/rest/api/cosmos-db/access-control-on-cosmosdb-resources)
pub fn string_to_sign(verb: &str, resource_type: &str, resource_id: &str, date: &str) -> String {
    let s = format!(
        "{}\n{}\n{}\n{}\n\n",
        verb.to_lowercase(),
        resource_type.to_lowercase(),
        resource_id,
        date.to_lowercase()
    );

    debug!("string to sign: {}", &s);

    s
}

/// Compute the base64 HMAC-SHA256 signature over the given string to sign.
///
/// The master key is the base64 secret distributed by the service. It is
/// decoded fresh on every call; an empty or undecodable key fails with
/// `KeyDecodeFailed` instead of silently signing with a default key.
pub fn signature(master_key: &str, string_to_sign: &str) -> Result<String> {
    if master_key.is_empty() {
        return Err(Error::key_decode_failed("master key is empty"));
    }

    let key = base64_decode(master_key)?;
    Ok(base64_hmac_sha256(&key, string_to_sign.as_bytes()))
}

/// Compose and URL encode the authorization token for the given signature.
///
/// The token reads `type=master&ver=1.0&sig=<signature>` before encoding and
/// is percent encoded as a whole, so `=`, `&` and the base64 payload are all
/// escaped.
pub fn authorization_token(signature: &str) -> String {
    let token = format!("type={AUTH_TOKEN_TYPE_MASTER}&ver={AUTH_TOKEN_VERSION}&sig={signature}");
    percent_encode(token.as_bytes(), &AUTH_TOKEN_ENCODE_SET).to_string()
}

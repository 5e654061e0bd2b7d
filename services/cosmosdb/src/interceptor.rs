use crate::Credential;
use docsign_core::Signer;
use http::request::Parts;
use log::error;

/// AuthorizationInterceptor stamps CosmosDB authorization headers onto
/// outgoing request parts.
///
/// Signing failures are logged at error level and otherwise swallowed: the
/// request goes out unsigned and the gateway's 401 response surfaces the
/// problem to the caller. Aborting the request here would turn a local
/// configuration mistake into a hang for pipelines that cannot observe
/// interceptor errors.
#[derive(Clone, Debug)]
pub struct AuthorizationInterceptor {
    signer: Signer<Credential>,
}

impl AuthorizationInterceptor {
    /// Create a new interceptor around the given signer.
    pub fn new(signer: Signer<Credential>) -> Self {
        Self { signer }
    }

    /// Sign the request parts in place.
    ///
    /// The resource coordinate is derived from the request URL, so callers
    /// only need to route their requests through this method.
    pub async fn process(&self, parts: &mut Parts) {
        if let Err(err) = self.signer.sign(parts).await {
            error!("failed to sign cosmosdb request: {err:?}");
        }
    }
}

use crate::{Context, Result};
use std::fmt::Debug;

/// SigningCredential is the trait used by signer as the signing credential.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential is valid.
    fn is_valid(&self) -> bool;
}

impl<T: SigningCredential> SigningCredential for Option<T> {
    fn is_valid(&self) -> bool {
        let Some(cred) = self else {
            return false;
        };

        cred.is_valid()
    }
}

/// ProvideCredential is the trait used by signer to load the credential from the environment.
///
/// Service may require different credential to sign the request, for example, CosmosDB
/// requires an account master key, while other services may use token pairs.
#[async_trait::async_trait]
pub trait ProvideCredential: Debug + Send + Sync + Unpin + 'static {
    /// Credential returned by this provider.
    type Credential: Send + Sync + Unpin + 'static;

    /// Load credential from current env.
    ///
    /// - Returns `Ok(Some(cred))` if the credential could be resolved.
    /// - Returns `Ok(None)` if this provider has nothing to offer; callers may
    ///   try another source.
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}

/// SignRequest is the trait used by signer to sign the request.
#[async_trait::async_trait]
pub trait SignRequest: Debug + Send + Sync + Unpin + 'static {
    /// Credential used by this builder.
    type Credential: Send + Sync + Unpin + 'static;

    /// Sign the request parts in place.
    ///
    /// ## Credential
    ///
    /// The `credential` parameter is the credential required to sign the request.
    /// Implementations decide whether a missing credential is an error.
    async fn sign_request(
        &self,
        ctx: &Context,
        req: &mut http::request::Parts,
        credential: Option<&Self::Credential>,
    ) -> Result<()>;
}

/// A chain of credential providers that will be tried in order.
///
/// The first provider that returns a credential wins. Providers that fail are
/// logged and skipped so that one misconfigured source never blocks the rest.
pub struct ProvideCredentialChain<C> {
    providers: Vec<Box<dyn ProvideCredential<Credential = C>>>,
}

impl<C: Send + Sync + Unpin + 'static> ProvideCredentialChain<C> {
    /// Create a new empty credential provider chain.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Add a credential provider to the chain.
    pub fn push(mut self, provider: impl ProvideCredential<Credential = C> + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Create a credential provider chain from a vector of providers.
    pub fn from_vec(providers: Vec<Box<dyn ProvideCredential<Credential = C>>>) -> Self {
        Self { providers }
    }
}

impl<C: Send + Sync + Unpin + 'static> Default for ProvideCredentialChain<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Debug for ProvideCredentialChain<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProvideCredentialChain")
            .field("providers_count", &self.providers.len())
            .finish()
    }
}

#[async_trait::async_trait]
impl<C: Send + Sync + Unpin + 'static> ProvideCredential for ProvideCredentialChain<C> {
    type Credential = C;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        for provider in &self.providers {
            log::debug!("Trying credential provider: {:?}", provider);

            match provider.provide_credential(ctx).await {
                Ok(Some(cred)) => {
                    log::debug!("Successfully loaded credential from provider: {:?}", provider);
                    return Ok(Some(cred));
                }
                Ok(None) => {
                    log::debug!("No credential found in provider: {:?}", provider);
                    continue;
                }
                Err(e) => {
                    log::warn!(
                        "Error loading credential from provider {:?}: {:?}",
                        provider,
                        e
                    );
                    // Continue to next provider on error
                    continue;
                }
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::fmt;

    #[derive(Clone, Debug)]
    struct MockCredential {
        secret: String,
    }

    impl SigningCredential for MockCredential {
        fn is_valid(&self) -> bool {
            !self.secret.is_empty()
        }
    }

    struct MockSuccessProvider {
        secret: String,
    }

    #[async_trait::async_trait]
    impl ProvideCredential for MockSuccessProvider {
        type Credential = MockCredential;

        async fn provide_credential(&self, _ctx: &Context) -> Result<Option<Self::Credential>> {
            Ok(Some(MockCredential {
                secret: self.secret.clone(),
            }))
        }
    }

    impl Debug for MockSuccessProvider {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("MockSuccessProvider").finish()
        }
    }

    struct MockFailProvider;

    #[async_trait::async_trait]
    impl ProvideCredential for MockFailProvider {
        type Credential = MockCredential;

        async fn provide_credential(&self, _ctx: &Context) -> Result<Option<Self::Credential>> {
            Err(Error::unexpected("mock provider failed"))
        }
    }

    impl Debug for MockFailProvider {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("MockFailProvider").finish()
        }
    }

    struct MockEmptyProvider;

    #[async_trait::async_trait]
    impl ProvideCredential for MockEmptyProvider {
        type Credential = MockCredential;

        async fn provide_credential(&self, _ctx: &Context) -> Result<Option<Self::Credential>> {
            Ok(None)
        }
    }

    impl Debug for MockEmptyProvider {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("MockEmptyProvider").finish()
        }
    }

    #[tokio::test]
    async fn test_chain_returns_first_success() {
        let ctx = Context::new();

        let chain = ProvideCredentialChain::new()
            .push(MockFailProvider)
            .push(MockEmptyProvider)
            .push(MockSuccessProvider {
                secret: "test_secret".to_string(),
            })
            .push(MockSuccessProvider {
                secret: "should_not_be_used".to_string(),
            });

        let result = chain.provide_credential(&ctx).await.unwrap();
        assert!(result.is_some());

        let cred = result.unwrap();
        assert_eq!(cred.secret, "test_secret");
    }

    #[tokio::test]
    async fn test_chain_returns_none_when_all_fail() {
        let ctx = Context::new();

        let chain = ProvideCredentialChain::new()
            .push(MockFailProvider)
            .push(MockEmptyProvider)
            .push(MockFailProvider);

        let result = chain.provide_credential(&ctx).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_empty_chain_returns_none() {
        let ctx = Context::new();

        let chain: ProvideCredentialChain<MockCredential> = ProvideCredentialChain::new();

        let result = chain.provide_credential(&ctx).await.unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_option_credential_validity() {
        let some_valid: Option<MockCredential> = Some(MockCredential {
            secret: "s".to_string(),
        });
        assert!(some_valid.is_valid());

        let some_invalid: Option<MockCredential> = Some(MockCredential {
            secret: "".to_string(),
        });
        assert!(!some_invalid.is_valid());

        let none: Option<MockCredential> = None;
        assert!(!none.is_valid());
    }
}

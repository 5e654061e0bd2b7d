use crate::{Context, ProvideCredential, Result, SignRequest, SigningCredential};
use std::sync::Arc;

/// Signer is the main struct used to sign the request.
///
/// The credential is resolved through the provider on every `sign` call: keys
/// may be rotated externally at any time, so nothing is cached across calls.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    ctx: Context,
    loader: Arc<dyn ProvideCredential<Credential = K>>,
    builder: Arc<dyn SignRequest<Credential = K>>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        loader: impl ProvideCredential<Credential = K>,
        builder: impl SignRequest<Credential = K>,
    ) -> Self {
        Self {
            ctx,
            loader: Arc::new(loader),
            builder: Arc::new(builder),
        }
    }

    /// Signing request.
    pub async fn sign(&self, req: &mut http::request::Parts) -> Result<()> {
        let cred = self.loader.provide_credential(&self.ctx).await?;

        self.builder
            .sign_request(&self.ctx, req, cred.as_ref())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone, Debug)]
    struct TokenCredential {
        token: String,
    }

    impl SigningCredential for TokenCredential {
        fn is_valid(&self) -> bool {
            !self.token.is_empty()
        }
    }

    struct CountingProvider {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait::async_trait]
    impl ProvideCredential for CountingProvider {
        type Credential = TokenCredential;

        async fn provide_credential(&self, _ctx: &Context) -> Result<Option<Self::Credential>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Some(TokenCredential {
                token: "secret".to_string(),
            }))
        }
    }

    impl fmt::Debug for CountingProvider {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("CountingProvider").finish()
        }
    }

    #[derive(Debug)]
    struct HeaderBuilder;

    #[async_trait::async_trait]
    impl SignRequest for HeaderBuilder {
        type Credential = TokenCredential;

        async fn sign_request(
            &self,
            _ctx: &Context,
            req: &mut http::request::Parts,
            credential: Option<&Self::Credential>,
        ) -> Result<()> {
            let cred = credential
                .ok_or_else(|| crate::Error::credential_invalid("credential is missing"))?;
            req.headers
                .insert("x-test-token", cred.token.parse().unwrap());
            Ok(())
        }
    }

    fn request_parts() -> http::request::Parts {
        http::Request::builder()
            .method("GET")
            .uri("https://example.com/dbs")
            .body(())
            .unwrap()
            .into_parts()
            .0
    }

    #[tokio::test]
    async fn test_signer_signs_request() {
        let calls = Arc::new(AtomicUsize::new(0));
        let signer = Signer::new(
            Context::new(),
            CountingProvider {
                calls: calls.clone(),
            },
            HeaderBuilder,
        );

        let mut parts = request_parts();
        signer.sign(&mut parts).await.unwrap();

        assert_eq!(parts.headers.get("x-test-token").unwrap(), "secret");
    }

    #[tokio::test]
    async fn test_signer_resolves_credential_every_call() {
        let calls = Arc::new(AtomicUsize::new(0));
        let signer = Signer::new(
            Context::new(),
            CountingProvider {
                calls: calls.clone(),
            },
            HeaderBuilder,
        );

        for _ in 0..3 {
            let mut parts = request_parts();
            signer.sign(&mut parts).await.unwrap();
        }

        // No caching between calls: rotated keys must take effect immediately.
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}

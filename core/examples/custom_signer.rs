use std::collections::HashMap;

use async_trait::async_trait;
use docsign_core::hash::base64_hmac_sha256;
use docsign_core::{
    Context, Error, OsEnv, ProvideCredential, Result, SignRequest, Signer, SigningCredential,
    StaticEnv,
};
use http::request::Parts;
use http::HeaderValue;

// Key pair for a fictional webhook endpoint: the key id names the key, the
// secret signs each delivery.
#[derive(Clone, Debug)]
struct WebhookCredential {
    key_id: String,
    secret: String,
}

impl SigningCredential for WebhookCredential {
    fn is_valid(&self) -> bool {
        !self.key_id.is_empty() && !self.secret.is_empty()
    }
}

#[derive(Debug)]
struct EnvWebhookKeys;

#[async_trait]
impl ProvideCredential for EnvWebhookKeys {
    type Credential = WebhookCredential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        match (ctx.env_var("WEBHOOK_KEY_ID"), ctx.env_var("WEBHOOK_SECRET")) {
            (Some(key_id), Some(secret)) => Ok(Some(WebhookCredential { key_id, secret })),
            _ => Ok(None),
        }
    }
}

// Signs the verb and path of each delivery so the receiver can verify the
// request was not tampered with in transit.
#[derive(Debug)]
struct DeliverySigner;

#[async_trait]
impl SignRequest for DeliverySigner {
    type Credential = WebhookCredential;

    async fn sign_request(
        &self,
        _ctx: &Context,
        req: &mut Parts,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let Some(cred) = credential else {
            return Err(Error::credential_invalid("webhook key pair is missing"));
        };

        let string_to_sign = format!("{}\n{}", req.method.as_str().to_lowercase(), req.uri.path());
        let signature = base64_hmac_sha256(cred.secret.as_bytes(), string_to_sign.as_bytes());

        req.headers.insert(
            "x-webhook-key",
            cred.key_id
                .parse()
                .map_err(|e| Error::unexpected("failed to build key header").with_source(e))?,
        );
        req.headers.insert("x-webhook-signature", {
            let mut value: HeaderValue = signature.parse().map_err(|e| {
                Error::unexpected("failed to build signature header").with_source(e)
            })?;
            value.set_sensitive(true);
            value
        });

        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut ctx = Context::new().with_env(OsEnv);

    // Swap in a canned key pair so the example runs without any setup.
    if ctx.env_var("WEBHOOK_KEY_ID").is_none() {
        println!("WEBHOOK_KEY_ID is not set, signing with a demo key pair");
        ctx = ctx.with_env(StaticEnv {
            envs: HashMap::from([
                ("WEBHOOK_KEY_ID".to_string(), "demo".to_string()),
                ("WEBHOOK_SECRET".to_string(), "demo-secret".to_string()),
            ]),
        });
    }

    let signer = Signer::new(ctx, EnvWebhookKeys, DeliverySigner);

    let mut parts = http::Request::builder()
        .method("POST")
        .uri("https://hooks.example.com/v1/deliveries")
        .body(())
        .unwrap()
        .into_parts()
        .0;

    signer.sign(&mut parts).await?;

    println!("delivery signed");
    println!("x-webhook-key: {:?}", parts.headers.get("x-webhook-key"));
    println!(
        "x-webhook-signature: {:?}",
        parts.headers.get("x-webhook-signature")
    );

    Ok(())
}

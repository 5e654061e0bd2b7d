//! Azure CosmosDB service signer
//!
//! This crate signs CosmosDB REST API requests with master key tokens:
//! - explicit signing for callers that already know the resource type and id
//! - URL based signing that derives both from the endpoint path
//! - an interceptor that stamps headers onto outgoing request parts
//!
//! # Example
//!
//! ```rust,no_run
//! use anyhow::Result;
//! use docsign_core::{Context, OsEnv, Signer};
//! use docsign_cosmosdb::{DefaultCredentialProvider, RequestSigner};
//! use reqwest::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // Credentials are read from the environment or a connection string.
//!     let ctx = Context::new().with_env(OsEnv);
//!
//!     let loader = DefaultCredentialProvider::new();
//!     let builder = RequestSigner::new();
//!     let signer = Signer::new(ctx, loader, builder);
//!
//!     // Build and sign your request.
//!     let req = http::Request::get("https://myaccount.documents.azure.com/dbs").body("")?;
//!     let (mut parts, body) = req.into_parts();
//!     signer.sign(&mut parts).await?;
//!     let req = http::Request::from_parts(parts, body);
//!
//!     // Send the signed request.
//!     let resp = Client::new().execute(req.try_into()?).await?;
//!     println!("Response: {}", resp.status());
//!
//!     Ok(())
//! }
//! ```

mod config;
pub use config::Config;

mod connection_string;

mod constants;
pub use constants::RESOURCE_TYPES;

mod credential;
pub use credential::Credential;

mod interceptor;
pub use interceptor::AuthorizationInterceptor;

mod provide_credential;
pub use provide_credential::*;

mod resource;
pub use resource::ResourceCoordinate;

mod sign_request;
pub use sign_request::RequestSigner;

mod token;
pub use token::SignedAuthorization;

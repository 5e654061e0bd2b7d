//! Azure CosmosDB support with convenience APIs
//!
//! This module provides CosmosDB signing functionality along with convenience
//! functions for common use cases.

// Re-export all CosmosDB signing types
pub use docsign_cosmosdb::*;

#[cfg(feature = "default-context")]
use crate::{default_context, Signer};

/// Default CosmosDB Signer type with commonly used components
#[cfg(feature = "default-context")]
pub type DefaultSigner = Signer<Credential>;

/// Create a default CosmosDB signer with standard configuration
///
/// This function creates a signer with:
/// - Default context (OS environment)
/// - Default credential provider (reads master keys and connection strings from env vars)
/// - Request signer for CosmosDB master key tokens
///
/// # Example
///
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> docsign_core::Result<()> {
/// // Create a signer for CosmosDB
/// let signer = docsign::cosmosdb::default_signer();
///
/// // Sign a request
/// let mut req = http::Request::builder()
///     .method("GET")
///     .uri("https://myaccount.documents.azure.com/dbs/ToDoList/colls/Items")
///     .body(())
///     .unwrap()
///     .into_parts()
///     .0;
///
/// signer.sign(&mut req).await?;
/// # Ok(())
/// # }
/// ```
///
/// # Customization
///
/// Bring your own credential source by assembling the signer directly:
///
/// ```no_run
/// use docsign::cosmosdb::{RequestSigner, StaticCredentialProvider};
/// use docsign::Signer;
///
/// let signer = Signer::new(
///     docsign::default_context(),
///     StaticCredentialProvider::new("base64-master-key"),
///     RequestSigner::new(),
/// );
/// ```
#[cfg(feature = "default-context")]
pub fn default_signer() -> DefaultSigner {
    let ctx = default_context();
    let provider = DefaultCredentialProvider::new();
    let signer = RequestSigner::new();
    Signer::new(ctx, provider, signer)
}

use anyhow::Result;
use docsign::cosmosdb::{DefaultCredentialProvider, RequestSigner};
use docsign::{default_context, Signer};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    // Create a context backed by the OS environment
    let ctx = default_context();

    // Create credential loader - tries master key env vars, then connection strings
    let loader = DefaultCredentialProvider::new();

    // Create request builder
    let builder = RequestSigner::new();

    // Create the signer
    let signer = Signer::new(ctx, loader, builder);

    // Build a request
    let mut req = http::Request::builder()
        .method(http::Method::GET)
        .uri("https://myaccount.documents.azure.com/dbs/ToDoList/colls/Items")
        .body(())
        .unwrap()
        .into_parts()
        .0;

    // Sign the request
    signer.sign(&mut req).await?;

    println!("authorization: {:?}", req.headers.get("authorization"));
    println!("x-ms-date: {:?}", req.headers.get("x-ms-date"));

    Ok(())
}

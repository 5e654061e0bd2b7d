use anyhow::Result;
use docsign_core::{Context, OsEnv, Signer};
use docsign_cosmosdb::{
    AuthorizationInterceptor, Config, ConfigCredentialProvider, Credential,
    DefaultCredentialProvider, RequestSigner, ResourceCoordinate,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let _ = env_logger::builder().is_test(true).try_init();

    // Create context
    let ctx = Context::new().with_env(OsEnv);

    // The DefaultCredentialProvider will try multiple sources:
    // 1. Environment variables (COSMOSDB_MASTER_KEY, AZURE_COSMOS_MASTER_KEY)
    // 2. Connection strings (COSMOSDB_CONNECTION_STRING, AZURE_COSMOS_CONNECTION_STRING)
    let has_real_creds = ctx.env_var("COSMOSDB_MASTER_KEY").is_some()
        || ctx.env_var("COSMOSDB_CONNECTION_STRING").is_some();

    let signer = if has_real_creds {
        Signer::new(
            ctx.clone(),
            DefaultCredentialProvider::new(),
            RequestSigner::new(),
        )
    } else {
        println!("No CosmosDB credentials found, falling back to the emulator key");
        println!("To use real credentials, set COSMOSDB_MASTER_KEY or COSMOSDB_CONNECTION_STRING");
        println!();
        Signer::new(
            ctx.clone(),
            ConfigCredentialProvider::new(Config::emulator()),
            RequestSigner::new(),
        )
    };

    let endpoint = ctx
        .env_var("COSMOSDB_ENDPOINT")
        .unwrap_or_else(|| "https://localhost:8081".to_string());

    // Example 1: List databases
    println!("Example 1: List databases");
    let req = http::Request::get(format!("{endpoint}/dbs"))
        .header("x-ms-version", "2018-12-31")
        .body(())
        .unwrap();

    let (mut parts, _) = req.into_parts();
    signer.sign(&mut parts).await?;

    println!("List databases request signed successfully!");
    println!(
        "Authorization header: {:?}",
        parts.headers.get("authorization")
    );
    println!("x-ms-date header: {:?}", parts.headers.get("x-ms-date"));

    // Example 2: Sign an explicit resource coordinate
    println!("\nExample 2: Sign an explicit resource coordinate");
    let emulator_key = Config::emulator().master_key.unwrap_or_default();
    let credential = Credential::with_master_key(&emulator_key);

    let builder = RequestSigner::new();
    let coordinate = ResourceCoordinate::new("docs", "dbs/ToDoList/colls/Items");
    let signed = builder.sign_coordinate("POST", &coordinate, &credential)?;

    println!("Authorization token: {}", signed.authorization);
    println!("Covered date: {}", signed.date);

    // Example 3: Sign straight from a request URL
    println!("\nExample 3: Sign straight from a request URL");
    let signed = builder.sign_url(
        "GET",
        &format!("{endpoint}/dbs/ToDoList/colls/Items/docs/SalesOrder1"),
        &credential,
    )?;

    println!("Authorization token: {}", signed.authorization);

    // Example 4: Intercept outgoing requests
    println!("\nExample 4: Intercept outgoing requests");
    let interceptor = AuthorizationInterceptor::new(signer);

    let req = http::Request::put(format!("{endpoint}/dbs/ToDoList/colls/Items/docs"))
        .header("x-ms-version", "2018-12-31")
        .body(())
        .unwrap();

    let (mut parts, _) = req.into_parts();
    interceptor.process(&mut parts).await;

    println!(
        "Headers after interception: authorization={:?} x-ms-date={:?}",
        parts.headers.get("authorization"),
        parts.headers.get("x-ms-date")
    );

    Ok(())
}

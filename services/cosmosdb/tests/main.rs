use std::env;

use anyhow::Result;
use docsign_core::{Context, OsEnv, Signer};
use docsign_cosmosdb::{Credential, RequestSigner, StaticCredentialProvider};
use http::Request;
use http::StatusCode;
use log::debug;
use log::warn;
use reqwest::Client;

fn init_signer() -> Option<(Context, Signer<Credential>)> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("DOCSIGN_COSMOSDB_TEST").is_err()
        || env::var("DOCSIGN_COSMOSDB_TEST").unwrap() != "on"
    {
        return None;
    }

    let ctx = Context::new().with_env(OsEnv);

    let loader = StaticCredentialProvider::new(
        &env::var("COSMOSDB_MASTER_KEY").expect("env COSMOSDB_MASTER_KEY must set"),
    );

    let builder = RequestSigner::new();
    let signer = Signer::new(ctx.clone(), loader, builder);

    Some((ctx, signer))
}

fn endpoint() -> String {
    env::var("COSMOSDB_ENDPOINT")
        .expect("env COSMOSDB_ENDPOINT must set")
        .trim_end_matches('/')
        .to_string()
}

#[tokio::test]
async fn test_list_databases() -> Result<()> {
    let signer = init_signer();
    if signer.is_none() {
        warn!("DOCSIGN_COSMOSDB_TEST is not set, skipped");
        return Ok(());
    }
    let (_ctx, signer) = signer.unwrap();

    let mut req = Request::builder()
        .method(http::Method::GET)
        .uri(format!("{}/dbs", endpoint()))
        .header("x-ms-version", "2018-12-31")
        .body(reqwest::Body::default())?;

    let (mut parts, body) = req.into_parts();
    signer.sign(&mut parts).await?;
    req = Request::from_parts(parts, body);

    debug!("signed request: {:?}", req);

    let client = Client::new();
    let resp = client
        .execute(req.try_into().map_err(|e| {
            docsign_core::Error::unexpected("failed to convert request")
                .with_source(anyhow::Error::new(e))
        })?)
        .await
        .map_err(|e| {
            docsign_core::Error::unexpected("failed to execute request")
                .with_source(anyhow::Error::new(e))
        })?;

    debug!("got response: {:?}", resp);
    assert_eq!(StatusCode::OK, resp.status());
    Ok(())
}

#[tokio::test]
async fn test_get_database_not_exist() -> Result<()> {
    let signer = init_signer();
    if signer.is_none() {
        warn!("DOCSIGN_COSMOSDB_TEST is not set, skipped");
        return Ok(());
    }
    let (_ctx, signer) = signer.unwrap();

    // An authenticated 404 proves the token passed the gateway.
    let mut req = Request::builder()
        .method(http::Method::GET)
        .uri(format!("{}/dbs/not_exist_db", endpoint()))
        .header("x-ms-version", "2018-12-31")
        .body(reqwest::Body::default())?;

    let (mut parts, body) = req.into_parts();
    signer.sign(&mut parts).await?;
    req = Request::from_parts(parts, body);

    debug!("signed request: {:?}", req);

    let client = Client::new();
    let resp = client
        .execute(req.try_into().map_err(|e| {
            docsign_core::Error::unexpected("failed to convert request")
                .with_source(anyhow::Error::new(e))
        })?)
        .await
        .map_err(|e| {
            docsign_core::Error::unexpected("failed to execute request")
                .with_source(anyhow::Error::new(e))
        })?;

    debug!("got response: {:?}", resp);
    assert_eq!(StatusCode::NOT_FOUND, resp.status());
    Ok(())
}

#[tokio::test]
async fn test_get_account_properties() -> Result<()> {
    let signer = init_signer();
    if signer.is_none() {
        warn!("DOCSIGN_COSMOSDB_TEST is not set, skipped");
        return Ok(());
    }
    let (_ctx, signer) = signer.unwrap();

    // Account root requests sign with an empty resource coordinate.
    let mut req = Request::builder()
        .method(http::Method::GET)
        .uri(format!("{}/", endpoint()))
        .header("x-ms-version", "2018-12-31")
        .body(reqwest::Body::default())?;

    let (mut parts, body) = req.into_parts();
    signer.sign(&mut parts).await?;
    req = Request::from_parts(parts, body);

    debug!("signed request: {:?}", req);

    let client = Client::new();
    let resp = client
        .execute(req.try_into().map_err(|e| {
            docsign_core::Error::unexpected("failed to convert request")
                .with_source(anyhow::Error::new(e))
        })?)
        .await
        .map_err(|e| {
            docsign_core::Error::unexpected("failed to execute request")
                .with_source(anyhow::Error::new(e))
        })?;

    debug!("got response: {:?}", resp);
    assert_eq!(StatusCode::OK, resp.status());
    Ok(())
}

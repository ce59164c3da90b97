use anyhow::Result;
use log::warn;
use s3sig_core::{Context, ErrorKind, Signer};
use s3sig_http_send_reqwest::ReqwestHttpSend;
use s3sig_s3_v4::{Credential, ObjectDownloader, RequestSigner};
use std::env;

/// Initialize live test environment.
fn init_live_test() -> Option<(ObjectDownloader, String)> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("S3SIG_V4_TEST").ok().as_deref() != Some("on") {
        return None;
    }

    let region = env::var("S3SIG_V4_REGION").expect("env S3SIG_V4_REGION must set");
    let access_key = env::var("S3SIG_V4_ACCESS_KEY").expect("env S3SIG_V4_ACCESS_KEY must set");
    let secret_key = env::var("S3SIG_V4_SECRET_KEY").expect("env S3SIG_V4_SECRET_KEY must set");
    let url = env::var("S3SIG_V4_URL").expect("env S3SIG_V4_URL must set");

    let ctx = Context::new().with_http_send(ReqwestHttpSend::default());
    let mut signer = RequestSigner::new(&region);
    if let Ok(content_type) = env::var("S3SIG_V4_CONTENT_TYPE") {
        signer = signer.with_content_type(&content_type);
    }
    let signer = Signer::new(ctx, Credential::new(&access_key, &secret_key), signer)
        .expect("credential must be valid");

    Some((ObjectDownloader::new(signer), url))
}

#[tokio::test]
async fn test_download_object() -> Result<()> {
    let Some((downloader, url)) = init_live_test() else {
        warn!("S3SIG_V4_TEST is not set, skipped");
        return Ok(());
    };

    let object = env::var("S3SIG_V4_OBJECT").expect("env S3SIG_V4_OBJECT must set");
    let body = downloader.download(&format!("{url}/{object}")).await?;
    assert!(!body.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_download_not_exist_object() -> Result<()> {
    let Some((downloader, url)) = init_live_test() else {
        warn!("S3SIG_V4_TEST is not set, skipped");
        return Ok(());
    };

    let err = downloader
        .download(&format!("{url}/not_exist_file"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedStatus);
    Ok(())
}

use anyhow::Result;
use s3sig_core::{Context, OsEnv, Signer};
use s3sig_http_send_reqwest::ReqwestHttpSend;
use s3sig_s3_v4::{Config, EnvCredentialProvider, ObjectDownloader, RequestSigner};
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::builder().try_init();

    // Usage: download_image <url> [output]
    let mut args = env::args().skip(1);
    let Some(url) = args.next() else {
        eprintln!("usage: download_image <url> [output]");
        return Ok(());
    };
    let output = args.next().unwrap_or_else(|| "image.png".to_string());

    let ctx = Context::new()
        .with_env(OsEnv)
        .with_http_send(ReqwestHttpSend::default());
    let config = Config::default().from_env(&ctx);
    println!("Using region: {:?}", config.region);

    let signer = Signer::from_provider(
        ctx,
        EnvCredentialProvider::new(),
        RequestSigner::from_config(&config)?,
    )?;
    let downloader = ObjectDownloader::new(signer);

    let body = downloader.download(&url).await?;
    std::fs::write(&output, &body)?;
    println!("Saved {} bytes to {output}", body.len());

    Ok(())
}

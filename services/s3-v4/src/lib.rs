//! AWS SigV4 signing for s3 object downloads.
//!
//! ```no_run
//! use s3sig_core::{Context, OsEnv, Signer};
//! use s3sig_http_send_reqwest::ReqwestHttpSend;
//! use s3sig_s3_v4::{Config, EnvCredentialProvider, ObjectDownloader, RequestSigner};
//!
//! # async fn run() -> s3sig_core::Result<()> {
//! let ctx = Context::new()
//!     .with_env(OsEnv)
//!     .with_http_send(ReqwestHttpSend::default());
//! let config = Config::default().from_env(&ctx);
//!
//! let signer = Signer::from_provider(
//!     ctx,
//!     EnvCredentialProvider::new(),
//!     RequestSigner::from_config(&config)?,
//! )?;
//! let downloader = ObjectDownloader::new(signer);
//! let image = downloader
//!     .download("https://s3.amazonaws.com/myBucket/myImage.png")
//!     .await?;
//! # let _ = image;
//! # Ok(())
//! # }
//! ```

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod provide_credential;
pub use provide_credential::*;

mod sign_request;
pub use sign_request::RequestSigner;

mod download;
pub use download::ObjectDownloader;

mod constants;

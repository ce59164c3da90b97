mod golden;
mod live;

use anyhow::Result;
use s3sig_core::time::{parse_rfc3339, FixedClock};
use s3sig_core::{Context, Signer};
use s3sig_s3_v4::{Credential, RequestSigner};

pub const ACCESS_KEY_ID: &str = "AKIDEXAMPLE";
pub const SECRET_ACCESS_KEY: &str = "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY";

/// Build a signer pinned to the given RFC 3339 instant.
pub fn fixed_signer(region: &str, time: &str) -> Result<Signer<Credential>> {
    let _ = env_logger::builder().is_test(true).try_init();

    let ctx = Context::new().with_clock(FixedClock(parse_rfc3339(time)?));
    let signer = Signer::new(
        ctx,
        Credential::new(ACCESS_KEY_ID, SECRET_ACCESS_KEY),
        RequestSigner::new(region),
    )?;
    Ok(signer)
}

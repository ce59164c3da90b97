// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::constants::*;
use crate::{Config, Credential};
use http::request::Parts;
use http::{header, HeaderValue, Method};
use log::debug;
use percent_encoding::{percent_decode_str, utf8_percent_encode};
use s3sig_core::hash::{hex_hmac_sha256, hex_sha256, hmac_sha256};
use s3sig_core::time::{format_date, format_iso8601, DateTime};
use s3sig_core::{CachePolicy, Context, Error, Result, SignRequest, SigningRequest};
use std::fmt::Write;

/// RequestSigner that implement AWS SigV4 for s3 object retrieval.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/AmazonS3/latest/API/sig-v4-header-based-auth.html)
///
/// Every signed request is a `GET` carrying exactly these signed headers on
/// top of the caller's own: `x-amz-content-sha256`, `content-type`, `host`
/// and `x-amz-date`.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    region: String,
    host: Option<String>,
    content_type: String,
}

impl RequestSigner {
    /// Create a new signer for the given region.
    pub fn new(region: &str) -> Self {
        Self {
            region: region.to_string(),
            host: None,
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
        }
    }

    /// Create a new signer from config.
    ///
    /// Returns a [`s3sig_core::ErrorKind::ConfigInvalid`] error if no region is set.
    pub fn from_config(config: &Config) -> Result<Self> {
        let region = config
            .region
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::config_invalid("region is required for signing"))?;

        let mut signer = Self::new(region);
        if let Some(host) = &config.endpoint_host {
            signer = signer.with_host(host);
        }
        if let Some(content_type) = &config.content_type {
            signer = signer.with_content_type(content_type);
        }
        Ok(signer)
    }

    /// Specify the value of the signed `Host` header.
    pub fn with_host(mut self, host: &str) -> Self {
        self.host = Some(host.to_string());
        self
    }

    /// Specify the value of the signed `Content-Type` header.
    pub fn with_content_type(mut self, content_type: &str) -> Self {
        self.content_type = content_type.to_string();
        self
    }

    fn resolve_host(&self, req: &SigningRequest) -> String {
        if let Some(host) = &self.host {
            return host.clone();
        }

        match &req.authority {
            Some(authority) => match authority.port() {
                Some(port) => format!("{}:{}", authority.host(), port),
                None => authority.host().to_string(),
            },
            None => DEFAULT_HOST.to_string(),
        }
    }
}

impl SignRequest for RequestSigner {
    type Credential = Credential;

    fn sign_request(
        &self,
        ctx: &Context,
        req: &mut Parts,
        body: &[u8],
        cred: &Self::Credential,
    ) -> Result<()> {
        // Capture the time once, everything below derives from it.
        let now = ctx.now();
        let mut signed_req = SigningRequest::build(req)?;
        let original = (signed_req.method.clone(), signed_req.headers.clone());

        match self.sign_signing_request(&mut signed_req, body, now, cred) {
            Ok(()) => {
                req.extensions.insert(CachePolicy::ReloadIgnoringLocalCache);
                signed_req.apply(req)
            }
            Err(err) => {
                // Hand the request back as it came in.
                (signed_req.method, signed_req.headers) = original;
                signed_req.apply(req)?;
                Err(err)
            }
        }
    }
}

impl RequestSigner {
    fn sign_signing_request(
        &self,
        signed_req: &mut SigningRequest,
        body: &[u8],
        now: DateTime,
        cred: &Credential,
    ) -> Result<()> {
        if signed_req.method != Method::GET {
            debug!("signing forces method {} to GET", signed_req.method);
            signed_req.method = Method::GET;
        }

        // canonicalize context
        let host = self.resolve_host(signed_req);
        let content_sha256 =
            canonicalize_header(signed_req, body, now, &host, &self.content_type)?;
        let signed_headers = signed_req.header_name_to_vec_sorted().join(";");

        // build canonical request and string to sign.
        let creq = canonical_request_string(signed_req, &signed_headers, &content_sha256)?;
        debug!("calculated canonical request: {creq}");
        let encoded_req = hex_sha256(creq.as_bytes());

        // Scope: "20220313/<region>/s3/aws4_request"
        let scope = format!(
            "{}/{}/{}/{}",
            format_date(now),
            self.region,
            SERVICE_NAME,
            SIGNATURE_V4_TERMINATOR
        );
        debug!("calculated scope: {scope}");

        let string_to_sign = string_to_sign(now, &scope, &encoded_req)?;
        debug!("calculated string to sign: {string_to_sign}");

        let signing_key =
            generate_signing_key(&cred.secret_access_key, now, &self.region, SERVICE_NAME);
        let signature = hex_hmac_sha256(&signing_key, string_to_sign.as_bytes());

        let mut authorization = HeaderValue::from_str(&format!(
            "{} Credential={}/{}, SignedHeaders={}, Signature={}",
            SIGNATURE_V4_ALGORITHM, cred.access_key_id, scope, signed_headers, signature
        ))?;
        authorization.set_sensitive(true);
        signed_req
            .headers
            .insert(header::AUTHORIZATION, authorization);

        Ok(())
    }
}

/// Set all headers covered by the signature and return the hex body digest.
///
/// An `Authorization` left by an earlier signing is dropped so that it never
/// becomes part of the signed headers.
fn canonicalize_header(
    ctx: &mut SigningRequest,
    body: &[u8],
    now: DateTime,
    host: &str,
    content_type: &str,
) -> Result<String> {
    ctx.headers.remove(header::AUTHORIZATION);

    let content_sha256 = hex_sha256(body);
    ctx.headers.insert(
        X_AMZ_CONTENT_SHA_256,
        HeaderValue::from_str(&content_sha256)?,
    );
    ctx.headers
        .insert(header::CONTENT_TYPE, HeaderValue::from_str(content_type)?);
    ctx.headers.insert(header::HOST, HeaderValue::from_str(host)?);
    ctx.headers
        .insert(X_AMZ_DATE, HeaderValue::from_str(&format_iso8601(now))?);

    Ok(content_sha256)
}

fn canonical_request_string(
    ctx: &SigningRequest,
    signed_headers: &str,
    content_sha256: &str,
) -> Result<String> {
    // 256 is specially chosen to avoid reallocation for most requests.
    let mut f = String::with_capacity(256);

    // Insert method
    writeln!(f, "{}", ctx.method)?;
    // Insert encoded path
    writeln!(f, "{}", canonical_path(&ctx.path))?;
    // Query string is never signed.
    writeln!(f)?;
    // Insert canonical headers, the block carries its own trailing newline.
    writeln!(f, "{}", canonical_headers(ctx)?)?;
    // Insert signed headers
    writeln!(f, "{signed_headers}")?;
    write!(f, "{content_sha256}")?;

    Ok(f)
}

/// Percent decode the path, then encode it again with [`PATH_ENCODE_SET`].
///
/// A path with a malformed escape, or one that doesn't decode into valid
/// utf-8, is used as is.
fn canonical_path(path: &str) -> String {
    if has_malformed_escape(path) {
        return path.to_string();
    }

    match percent_decode_str(path).decode_utf8() {
        Ok(decoded) => utf8_percent_encode(&decoded, &PATH_ENCODE_SET).to_string(),
        Err(_) => path.to_string(),
    }
}

/// Check whether any `%` is not followed by two hex digits.
fn has_malformed_escape(path: &str) -> bool {
    let bs = path.as_bytes();
    bs.iter().enumerate().any(|(idx, &b)| {
        b == b'%'
            && !matches!(
                bs.get(idx + 1..idx + 3),
                Some([h, l]) if h.is_ascii_hexdigit() && l.is_ascii_hexdigit()
            )
    })
}

/// Render every header as `name:value\n` sorted by lowercased name.
///
/// Runs of spaces and tabs are collapsed over the whole block, not per line.
/// Newlines don't count as whitespace here, so lines stay apart.
fn canonical_headers(ctx: &SigningRequest) -> Result<String> {
    let mut s = String::with_capacity(128);
    for name in ctx.header_name_to_vec_sorted() {
        s.push_str(&name);
        s.push(':');
        s.push_str(&ctx.header_value_joined(&name)?);
        s.push('\n');
    }

    Ok(s
        .split(|c: char| c == ' ' || c == '\t')
        .filter(|v| !v.is_empty())
        .collect::<Vec<_>>()
        .join(" "))
}

fn string_to_sign(now: DateTime, scope: &str, encoded_req: &str) -> Result<String> {
    // StringToSign:
    //
    // AWS4-HMAC-SHA256
    // 20220313T072004Z
    // 20220313/<region>/s3/aws4_request
    // <hashed_canonical_request>
    let mut f = String::new();
    writeln!(f, "{SIGNATURE_V4_ALGORITHM}")?;
    writeln!(f, "{}", format_iso8601(now))?;
    writeln!(f, "{scope}")?;
    write!(f, "{encoded_req}")?;
    Ok(f)
}

fn generate_signing_key(secret: &str, time: DateTime, region: &str, service: &str) -> Vec<u8> {
    // Sign secret
    let secret = format!("{SIGNATURE_V4_MARKER}{secret}");
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), format_date(time).as_bytes());
    // Sign region
    let sign_region = hmac_sha256(sign_date.as_slice(), region.as_bytes());
    // Sign service
    let sign_service = hmac_sha256(sign_region.as_slice(), service.as_bytes());
    // Sign request
    hmac_sha256(sign_service.as_slice(), SIGNATURE_V4_TERMINATOR.as_bytes())
}

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

use std::mem;
use std::str::FromStr;

use crate::{Error, Result};
use http::uri::Authority;
use http::uri::PathAndQuery;
use http::uri::Scheme;
use http::HeaderMap;
use http::Method;
use http::Uri;

/// Signing context for request.
#[derive(Debug)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// HTTP scheme, absent for origin-form URIs.
    pub scheme: Option<Scheme>,
    /// HTTP authority, absent for origin-form URIs.
    pub authority: Option<Authority>,
    /// HTTP path, still percent encoded as the caller wrote it.
    pub path: String,
    /// Raw HTTP query, carried back untouched.
    pub query: Option<String>,
    /// HTTP headers.
    pub headers: HeaderMap,
}

impl SigningRequest {
    /// Build a signing context from http::request::Parts.
    ///
    /// Returns a [`crate::ErrorKind::RequestInvalid`] error without touching
    /// `parts` if the request has no path.
    pub fn build(parts: &mut http::request::Parts) -> Result<Self> {
        if parts.uri.path_and_query().is_none() {
            return Err(Error::request_invalid(format!(
                "request without path is invalid for signing: {}",
                parts.uri
            )));
        }

        let uri = mem::take(&mut parts.uri).into_parts();
        let paq = uri
            .path_and_query
            .ok_or_else(|| Error::request_invalid("request without path is invalid for signing"))?;

        Ok(SigningRequest {
            method: parts.method.clone(),
            scheme: uri.scheme,
            authority: uri.authority,
            path: paq.path().to_string(),
            query: paq.query().map(|v| v.to_string()),

            // Take the headers out of the request to avoid copy.
            // We will return it back when apply the context.
            headers: mem::take(&mut parts.headers),
        })
    }

    /// Apply the signing context back to http::request::Parts.
    pub fn apply(mut self, parts: &mut http::request::Parts) -> Result<()> {
        // Return headers back.
        mem::swap(&mut parts.headers, &mut self.headers);
        parts.method = self.method;
        parts.uri = {
            let mut uri_parts = mem::take(&mut parts.uri).into_parts();
            uri_parts.scheme = self.scheme;
            uri_parts.authority = self.authority;
            uri_parts.path_and_query = {
                let paq = match self.query {
                    None => self.path,
                    Some(query) => {
                        let mut s = self.path;
                        s.reserve(query.len() + 1);
                        s.push('?');
                        s.push_str(&query);
                        s
                    }
                };

                Some(PathAndQuery::from_str(&paq)?)
            };
            Uri::from_parts(uri_parts)?
        };

        Ok(())
    }

    /// Get header names lowercased and sorted.
    ///
    /// Names are lowercased here explicitly instead of relying on the map type.
    pub fn header_name_to_vec_sorted(&self) -> Vec<String> {
        let mut h = self
            .headers
            .keys()
            .map(|k| k.as_str().to_ascii_lowercase())
            .collect::<Vec<String>>();
        h.sort_unstable();
        h.dedup();

        h
    }

    /// Get all values of a header joined with `,`.
    ///
    /// Returns empty string if header not found.
    pub fn header_value_joined(&self, key: &str) -> Result<String> {
        let mut s = String::new();
        for (idx, v) in self.headers.get_all(key).iter().enumerate() {
            if idx != 0 {
                s.push(',');
            }
            s.push_str(v.to_str()?);
        }

        Ok(s)
    }
}

/// CachePolicy tells the transport how to treat locally cached responses.
///
/// Signers store it in the request extensions: it is not a header, so it never
/// becomes part of the signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CachePolicy {
    /// Let the transport follow the protocol's caching rules.
    #[default]
    UseProtocolCachePolicy,
    /// Always fetch a fresh response, never serve one from a local cache.
    ReloadIgnoringLocalCache,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use http::header;
    use http::HeaderName;
    use pretty_assertions::assert_eq;

    fn parts(uri: &str) -> http::request::Parts {
        http::Request::get(uri)
            .body(())
            .expect("request must be valid")
            .into_parts()
            .0
    }

    #[test]
    fn test_build_and_apply() -> Result<()> {
        let mut p = parts("https://s3.amazonaws.com/myBucket/my%20image.png?versionId=1");
        p.headers.insert(header::CONTENT_TYPE, "image/png".parse()?);

        let req = SigningRequest::build(&mut p)?;
        assert_eq!(req.path, "/myBucket/my%20image.png");
        assert_eq!(req.query.as_deref(), Some("versionId=1"));
        assert_eq!(
            req.authority.as_ref().map(|v| v.as_str()),
            Some("s3.amazonaws.com")
        );
        assert!(p.headers.is_empty());

        req.apply(&mut p)?;
        assert_eq!(
            p.uri.to_string(),
            "https://s3.amazonaws.com/myBucket/my%20image.png?versionId=1"
        );
        assert_eq!(p.headers[header::CONTENT_TYPE], "image/png");
        Ok(())
    }

    #[test]
    fn test_build_origin_form() -> Result<()> {
        let mut p = parts("/myBucket/myImage.png");

        let req = SigningRequest::build(&mut p)?;
        assert!(req.scheme.is_none());
        assert!(req.authority.is_none());

        req.apply(&mut p)?;
        assert_eq!(p.uri.to_string(), "/myBucket/myImage.png");
        Ok(())
    }

    #[test]
    fn test_build_without_path() {
        let mut p = parts("s3.amazonaws.com:443");

        let err = SigningRequest::build(&mut p).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
        // The request is left untouched.
        assert_eq!(p.uri.to_string(), "s3.amazonaws.com:443");
    }

    #[test]
    fn test_header_helpers() -> Result<()> {
        let mut p = parts("https://s3.amazonaws.com/hello");
        p.headers.insert(
            HeaderName::from_bytes(b"X-Amz-Date")?,
            "20180101T000000Z".parse()?,
        );
        p.headers.insert(header::HOST, "s3.amazonaws.com".parse()?);
        p.headers.append("x-amz-meta-tag", "a".parse()?);
        p.headers.append("x-amz-meta-tag", "b".parse()?);

        let req = SigningRequest::build(&mut p)?;
        assert_eq!(
            req.header_name_to_vec_sorted(),
            vec!["host", "x-amz-date", "x-amz-meta-tag"]
        );
        assert_eq!(req.header_value_joined("x-amz-meta-tag")?, "a,b");
        assert_eq!(req.header_value_joined("x-amz-missing")?, "");
        Ok(())
    }
}

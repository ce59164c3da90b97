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

use crate::Credential;
use bytes::Bytes;
use http::StatusCode;
use log::{debug, warn};
use s3sig_core::{Error, Result, Signer};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// ObjectDownloader fetches objects with signed GET requests.
///
/// At most one download is outstanding per downloader, clones included. A
/// call made while another one is still running fails with
/// [`s3sig_core::ErrorKind::Busy`] instead of waiting.
#[derive(Clone, Debug)]
pub struct ObjectDownloader {
    signer: Signer<Credential>,
    in_flight: Arc<AtomicBool>,
}

impl ObjectDownloader {
    /// Create a new downloader that signs with the given signer and sends
    /// through the signer's context.
    pub fn new(signer: Signer<Credential>) -> Self {
        Self {
            signer,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Check whether a download is running right now.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Download the object at `uri` and return its body.
    ///
    /// The body is returned as is, decoding it is up to the caller. Failed
    /// downloads are never retried.
    ///
    /// [`s3sig_core::HttpSend`] hands back fully buffered responses, so the body
    /// of a non-200 response has already been read when the status is checked.
    /// It is dropped right away and never reaches the caller, not even inside
    /// the error.
    pub async fn download(&self, uri: &str) -> Result<Bytes> {
        let _guard = InFlight::acquire(&self.in_flight)?;

        let req = http::Request::get(uri).body(Bytes::new())?;
        let req = self.signer.sign_http(req)?;
        debug!("downloading object: {}", req.uri());

        let resp = self.signer.context().http_send(req).await?;
        if resp.status() != StatusCode::OK {
            warn!("download of {uri} rejected with status {}", resp.status());
            return Err(Error::unexpected_status(format!(
                "download of {uri} returned status {}",
                resp.status()
            )));
        }

        Ok(resp.into_body())
    }
}

/// Marks the downloader busy until dropped.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| Error::busy("another download is still in flight"))?;
        Ok(Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

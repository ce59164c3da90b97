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

use crate::{Context, Error, ProvideCredential, Result, SignRequest, SigningCredential};
use std::sync::Arc;

/// Signer is the main struct used to sign the request.
///
/// The credential is fixed at construction and never changes afterwards, so a
/// single signer can be shared by concurrent callers.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    ctx: Context,
    credential: Arc<K>,
    builder: Arc<dyn SignRequest<Credential = K>>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer with the given credential.
    ///
    /// Returns a [`crate::ErrorKind::CredentialInvalid`] error if the
    /// credential is not valid.
    pub fn new(
        ctx: Context,
        credential: K,
        builder: impl SignRequest<Credential = K>,
    ) -> Result<Self> {
        if !credential.is_valid() {
            return Err(Error::credential_invalid(
                "credential is not valid for signing",
            ));
        }

        Ok(Self {
            ctx,
            credential: Arc::new(credential),
            builder: Arc::new(builder),
        })
    }

    /// Create a new signer with the credential loaded from provider.
    ///
    /// The provider is asked exactly once.
    pub fn from_provider(
        ctx: Context,
        provider: impl ProvideCredential<Credential = K>,
        builder: impl SignRequest<Credential = K>,
    ) -> Result<Self> {
        let Some(credential) = provider.provide_credential(&ctx)? else {
            return Err(Error::credential_invalid(format!(
                "no credential loaded from {provider:?}"
            )));
        };

        Self::new(ctx, credential, builder)
    }

    /// Get the context used by this signer.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Signing request parts with the given body.
    pub fn sign(&self, req: &mut http::request::Parts, body: &[u8]) -> Result<()> {
        self.builder
            .sign_request(&self.ctx, req, body, self.credential.as_ref())
    }

    /// Signing a whole http request.
    pub fn sign_http<B: AsRef<[u8]>>(&self, req: http::Request<B>) -> Result<http::Request<B>> {
        let (mut parts, body) = req.into_parts();
        self.sign(&mut parts, body.as_ref())?;
        Ok(http::Request::from_parts(parts, body))
    }
}

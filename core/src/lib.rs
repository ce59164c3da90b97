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

//! Core components for signing object storage requests.
//!
//! This crate provides the foundational types and traits shared by the s3sig
//! workspace. Service crates (like `s3sig-s3-v4`) build on top of it.
//!
//! ## Overview
//!
//! - **Context**: A container that holds implementations for environment access,
//!   HTTP sending and the clock used to timestamp signatures.
//! - **Traits**: Abstract interfaces for credential loading (`ProvideCredential`)
//!   and request signing (`SignRequest`).
//! - **Signer**: Binds a context, one immutable credential and a request signer.
//!
//! ## Example
//!
//! ```
//! use http::request::Parts;
//! use s3sig_core::{Context, Result, SignRequest, Signer, SigningCredential};
//!
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     key: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.key.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MySigner;
//!
//! impl SignRequest for MySigner {
//!     type Credential = MyCredential;
//!
//!     fn sign_request(
//!         &self,
//!         _: &Context,
//!         req: &mut Parts,
//!         _: &[u8],
//!         cred: &Self::Credential,
//!     ) -> Result<()> {
//!         req.headers.insert("x-my-key", cred.key.parse()?);
//!         Ok(())
//!     }
//! }
//!
//! # fn main() -> Result<()> {
//! let signer = Signer::new(
//!     Context::new(),
//!     MyCredential { key: "my-key".to_string() },
//!     MySigner,
//! )?;
//!
//! let req = http::Request::get("https://example.com/hello").body(Vec::<u8>::new())?;
//! let req = signer.sign_http(req)?;
//! assert_eq!(req.headers()["x-my-key"], "my-key");
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time formatting and the injectable clock
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::Context;
pub use context::Env;
pub use context::HttpSend;
pub use context::NoopEnv;
pub use context::NoopHttpSend;
pub use context::OsEnv;
pub use context::StaticEnv;

mod error;
pub use error::{Error, ErrorKind, Result};

mod api;
pub use api::{ProvideCredential, SignRequest, SigningCredential};
mod request;
pub use request::{CachePolicy, SigningRequest};
mod signer;
pub use signer::Signer;

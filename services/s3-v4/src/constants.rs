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

use percent_encoding::AsciiSet;
use percent_encoding::CONTROLS;

// Headers used in s3 requests.
pub const X_AMZ_CONTENT_SHA_256: &str = "x-amz-content-sha256";
pub const X_AMZ_DATE: &str = "x-amz-date";

// Env values used to configure the signer.
pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
pub const AWS_REGION: &str = "AWS_REGION";
pub const AWS_DEFAULT_REGION: &str = "AWS_DEFAULT_REGION";

// Signature V4 building blocks.
pub const SIGNATURE_V4_MARKER: &str = "AWS4";
pub const SIGNATURE_V4_ALGORITHM: &str = "AWS4-HMAC-SHA256";
pub const SIGNATURE_V4_TERMINATOR: &str = "aws4_request";
pub const SERVICE_NAME: &str = "s3";

pub const DEFAULT_HOST: &str = "s3.amazonaws.com";
pub const DEFAULT_CONTENT_TYPE: &str = "image/png";

/// AsciiSet for the canonical path.
///
/// Percent encode `\ ! * ' ( ) ; : @ & = + $ , ? % # [ ]`, space and control
/// bytes. Every other ASCII byte stays as-is; non-ASCII bytes are always
/// encoded by `utf8_percent_encode`.
pub static PATH_ENCODE_SET: AsciiSet = CONTROLS
    .add(b'\\')
    .add(b'!')
    .add(b'*')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b';')
    .add(b':')
    .add(b'@')
    .add(b'&')
    .add(b'=')
    .add(b'+')
    .add(b'$')
    .add(b',')
    .add(b'?')
    .add(b'%')
    .add(b'#')
    .add(b'[')
    .add(b']')
    .add(b' ');

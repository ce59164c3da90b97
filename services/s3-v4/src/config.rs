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
use s3sig_core::Context;

/// Config for the s3 request signer.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// `region` will be loaded from:
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_REGION`]
    /// - env value: [`AWS_DEFAULT_REGION`]
    pub region: Option<String>,
    /// `endpoint_host` is the value of the signed `Host` header.
    ///
    /// Falls back to the request's authority, then to `s3.amazonaws.com`.
    pub endpoint_host: Option<String>,
    /// `content_type` is the value of the signed `Content-Type` header.
    ///
    /// Default to `image/png`.
    pub content_type: Option<String>,
}

impl Config {
    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if self.region.is_none() {
            self.region = [AWS_REGION, AWS_DEFAULT_REGION]
                .into_iter()
                .filter_map(|k| ctx.env_var(k))
                .find(|v| !v.is_empty());
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use s3sig_core::StaticEnv;
    use std::collections::HashMap;

    fn ctx(envs: &[(&str, &str)]) -> Context {
        Context::new().with_env(StaticEnv {
            envs: envs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        })
    }

    #[test]
    fn test_region_from_env() {
        let cfg = Config::default().from_env(&ctx(&[(AWS_REGION, "eu-west-1")]));
        assert_eq!(cfg.region.as_deref(), Some("eu-west-1"));
    }

    #[test]
    fn test_region_from_default_region() {
        let cfg = Config::default().from_env(&ctx(&[(AWS_DEFAULT_REGION, "us-west-2")]));
        assert_eq!(cfg.region.as_deref(), Some("us-west-2"));

        let cfg = Config::default().from_env(&ctx(&[
            (AWS_REGION, "eu-west-1"),
            (AWS_DEFAULT_REGION, "us-west-2"),
        ]));
        assert_eq!(cfg.region.as_deref(), Some("eu-west-1"));
    }

    #[test]
    fn test_region_field_wins() {
        let cfg = Config {
            region: Some("ap-south-1".to_string()),
            ..Default::default()
        }
        .from_env(&ctx(&[(AWS_REGION, "eu-west-1")]));
        assert_eq!(cfg.region.as_deref(), Some("ap-south-1"));
    }

    #[test]
    fn test_empty_region_is_ignored() {
        let cfg = Config::default().from_env(&ctx(&[(AWS_REGION, "")]));
        assert_eq!(cfg.region, None);
    }
}

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::idempotency_token::MakeIdempotencyToken;
use std::sync::Arc;

/// Service config.
///
/// Holds the endpoint requests are addressed to and the provider used to fill idempotency
/// tokens. Credentials, signing and region resolution belong to the connector.
#[derive(Clone)]
pub struct Config {
    pub(crate) endpoint: Option<http::Uri>,
    pub(crate) make_token: Arc<dyn MakeIdempotencyToken>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut config = f.debug_struct("Config");
        config.field("endpoint", &self.endpoint);
        config.finish()
    }
}

impl Config {
    /// Constructs a config builder.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// The endpoint requests are sent to, if one was configured. Without one, requests
    /// target `/` and the connector is expected to route them.
    pub fn endpoint(&self) -> Option<&http::Uri> {
        self.endpoint.as_ref()
    }

    /// Returns a token from the configured idempotency token provider.
    pub fn make_idempotency_token(&self) -> String {
        self.make_token.make_idempotency_token()
    }
}

/// Builder for creating a `Config`.
#[derive(Default)]
pub struct Builder {
    endpoint: Option<http::Uri>,
    make_token: Option<Arc<dyn MakeIdempotencyToken>>,
}

impl Builder {
    /// Constructs a config builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a static endpoint, eg. `https://cloudformation.us-east-1.amazonaws.com/`.
    pub fn endpoint(mut self, endpoint: http::Uri) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    pub fn set_endpoint(mut self, endpoint: Option<http::Uri>) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Sets the idempotency token provider to use for service calls that require tokens.
    pub fn make_token(mut self, make_token: impl MakeIdempotencyToken + 'static) -> Self {
        self.make_token = Some(Arc::new(make_token));
        self
    }

    /// Builds a [`Config`].
    pub fn build(self) -> Config {
        let make_token: Arc<dyn MakeIdempotencyToken> = match self.make_token {
            Some(make_token) => make_token,
            None => Arc::new(crate::idempotency_token::default_provider()),
        };
        Config {
            endpoint: self.endpoint,
            make_token,
        }
    }
}

impl std::fmt::Debug for Builder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut builder = f.debug_struct("Builder");
        builder.field("endpoint", &self.endpoint);
        builder.finish()
    }
}

#[cfg(test)]
mod test {
    use super::Config;

    #[test]
    fn endpoint_is_optional() {
        assert_eq!(Config::builder().build().endpoint(), None);
        let config = Config::builder()
            .endpoint(http::Uri::from_static("https://cloudformation.us-west-2.amazonaws.com/"))
            .build();
        assert_eq!(
            config.endpoint().map(|uri| uri.to_string()),
            Some("https://cloudformation.us-west-2.amazonaws.com/".to_string())
        );
    }

    #[test]
    fn configured_token_provider_is_used() {
        let config = Config::builder().make_token("fixed-token").build();
        assert_eq!(config.make_idempotency_token(), "fixed-token");
        let config = Config::builder().build();
        assert_ne!(config.make_idempotency_token(), config.make_idempotency_token());
    }
}

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Client configuration: the region requests are sent to and an optional endpoint override.

use crate::os_shim_internal::Env;
use http::Uri;
use std::borrow::Cow;
use std::fmt::{Display, Formatter};

const AWS_REGION: &str = "AWS_REGION";
const AWS_DEFAULT_REGION: &str = "AWS_DEFAULT_REGION";
const AWS_ENDPOINT_URL_RDS: &str = "AWS_ENDPOINT_URL_RDS";
const AWS_ENDPOINT_URL: &str = "AWS_ENDPOINT_URL";

/// The region to send requests to.
///
/// The region MUST be specified on a request. See
/// <http://docs.aws.amazon.com/general/latest/gr/rande.html> for the list of regions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Region(
    // Regions are almost always known statically. However, as an escape hatch for when they
    // are not, allow for an owned region
    Cow<'static, str>,
);

impl AsRef<str> for Region {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Region {
    pub fn new(region: impl Into<Cow<'static, str>>) -> Self {
        Self(region.into())
    }

    pub const fn from_static(region: &'static str) -> Self {
        Self(Cow::Borrowed(region))
    }
}

/// Failure to load configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid endpoint URL `{url}`")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: http::uri::InvalidUri,
    },
    #[error("endpoint URL `{0}` must be absolute (scheme and host)")]
    RelativeEndpoint(String),
}

/// Parses an endpoint override, requiring an absolute URL.
pub(crate) fn parse_endpoint(url: &str) -> Result<Uri, ConfigError> {
    let uri: Uri = url.parse().map_err(|source| ConfigError::InvalidEndpoint {
        url: url.to_owned(),
        source,
    })?;
    if uri.scheme().is_none() || uri.authority().is_none() {
        return Err(ConfigError::RelativeEndpoint(url.to_owned()));
    }
    Ok(uri)
}

/// Configuration for an RDS [`Client`](crate::Client).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    region: Option<Region>,
    endpoint_url: Option<String>,
}

impl Config {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Loads configuration from environment variables.
    ///
    /// The region comes from `AWS_REGION`, falling back to `AWS_DEFAULT_REGION`. The endpoint
    /// override comes from `AWS_ENDPOINT_URL_RDS`, falling back to `AWS_ENDPOINT_URL`. Empty
    /// values are treated as unset.
    pub fn from_env(env: &Env) -> Result<Config, ConfigError> {
        let var = |key: &str| env.get(key).ok().filter(|v| !v.trim().is_empty());
        let region = var(AWS_REGION)
            .or_else(|| var(AWS_DEFAULT_REGION))
            .map(|r| Region::new(r.trim().to_owned()));
        let endpoint_url = var(AWS_ENDPOINT_URL_RDS).or_else(|| var(AWS_ENDPOINT_URL));
        if let Some(url) = &endpoint_url {
            parse_endpoint(url)?;
        }
        Ok(Config {
            region,
            endpoint_url,
        })
    }

    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    pub fn endpoint_url(&self) -> Option<&str> {
        self.endpoint_url.as_deref()
    }

    /// Converts this configuration back into a builder so individual settings can be changed.
    pub fn to_builder(&self) -> Builder {
        Builder {
            region: self.region.clone(),
            endpoint_url: self.endpoint_url.clone(),
        }
    }
}

/// Builder for [`Config`].
#[derive(Clone, Debug, Default)]
pub struct Builder {
    region: Option<Region>,
    endpoint_url: Option<String>,
}

impl Builder {
    /// Set the region requests are sent to.
    ///
    /// # Example
    /// ```rust
    /// use rds::config::{Config, Region};
    /// let config = Config::builder().region(Region::new("us-east-1")).build();
    /// assert_eq!(config.region().map(|r| r.as_ref()), Some("us-east-1"));
    /// ```
    pub fn region(mut self, region: impl Into<Option<Region>>) -> Self {
        self.set_region(region);
        self
    }

    pub fn set_region(&mut self, region: impl Into<Option<Region>>) -> &mut Self {
        self.region = region.into();
        self
    }

    /// Override the endpoint requests are sent to, e.g. a local test endpoint.
    pub fn endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.set_endpoint_url(Some(endpoint_url.into()));
        self
    }

    pub fn set_endpoint_url(&mut self, endpoint_url: Option<String>) -> &mut Self {
        self.endpoint_url = endpoint_url;
        self
    }

    pub fn build(self) -> Config {
        Config {
            region: self.region,
            endpoint_url: self.endpoint_url,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Config, ConfigError, Region};
    use crate::os_shim_internal::Env;

    #[test]
    fn region_prefers_aws_region() {
        let env = Env::from_slice(&[
            ("AWS_REGION", "us-west-2"),
            ("AWS_DEFAULT_REGION", "eu-west-1"),
        ]);
        let config = Config::from_env(&env).unwrap();
        assert_eq!(config.region(), Some(&Region::from_static("us-west-2")));
        assert_eq!(config.endpoint_url(), None);
    }

    #[test]
    fn region_falls_back_to_default_region() {
        let env = Env::from_slice(&[("AWS_REGION", ""), ("AWS_DEFAULT_REGION", "eu-west-1")]);
        let config = Config::from_env(&env).unwrap();
        assert_eq!(config.region().map(|r| r.as_ref()), Some("eu-west-1"));
    }

    #[test]
    fn empty_env_yields_empty_config() {
        let config = Config::from_env(&Env::from_slice(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn service_specific_endpoint_wins() {
        let env = Env::from_slice(&[
            ("AWS_ENDPOINT_URL", "http://localhost:4566"),
            ("AWS_ENDPOINT_URL_RDS", "http://localhost:4510"),
        ]);
        let config = Config::from_env(&env).unwrap();
        assert_eq!(config.endpoint_url(), Some("http://localhost:4510"));
    }

    #[test]
    fn invalid_endpoint_is_rejected() {
        let env = Env::from_slice(&[("AWS_ENDPOINT_URL", "not a url")]);
        assert!(matches!(
            Config::from_env(&env),
            Err(ConfigError::InvalidEndpoint { .. })
        ));

        let env = Env::from_slice(&[("AWS_ENDPOINT_URL", "/just/a/path")]);
        let err = Config::from_env(&env).unwrap_err();
        assert!(matches!(err, ConfigError::RelativeEndpoint(_)));
        assert!(err.to_string().contains("/just/a/path"));
    }

    #[test]
    fn to_builder_preserves_settings() {
        let config = Config::builder()
            .region(Region::new("us-east-1"))
            .endpoint_url("https://rds.example.com")
            .build();
        let changed = config.to_builder().region(None::<Region>).build();
        assert_eq!(changed.region(), None);
        assert_eq!(changed.endpoint_url(), Some("https://rds.example.com"));
    }
}

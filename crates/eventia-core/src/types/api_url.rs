//! API base URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// A validated base URL for the Eventia API (or its gateway).
///
/// # Example
///
/// ```
/// use eventia_core::ApiUrl;
///
/// let api = ApiUrl::new("http://localhost:8000/").unwrap();
/// assert_eq!(api.endpoint("/auth/login"), "http://localhost:8000/auth/login");
///
/// let gateway = ApiUrl::new("https://gateway.example.com/api/v1").unwrap();
/// assert_eq!(gateway.endpoint("events"), "https://gateway.example.com/api/v1/events");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiUrl(Url);

impl ApiUrl {
    /// Parse and validate a base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not parse, is not http(s), or has no host.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::ApiUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        // Normalize: drop a trailing slash from a base path
        let normalized = if url.path().len() > 1 && url.path().ends_with('/') {
            let mut u = url.clone();
            let path = u.path().trim_end_matches('/').to_string();
            u.set_path(&path);
            u
        } else {
            url
        };

        Ok(Self(normalized))
    }

    /// Full URL for an endpoint path, with exactly one `/` at the join.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.as_str(), path.trim_start_matches('/'))
    }

    /// Returns the base URL as a string, without a trailing slash.
    ///
    /// The URL crate always serializes a root path as `/`, so it is trimmed
    /// here rather than at construction.
    pub fn as_str(&self) -> &str {
        self.0.as_str().trim_end_matches('/')
    }

    /// Returns the inner URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        let reject = |reason: &str| -> Error {
            InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: reason.to_string(),
            }
            .into()
        };

        if url.cannot_be_a_base() {
            return Err(reject("must be an absolute URL"));
        }

        if !matches!(url.scheme(), "http" | "https") {
            return Err(reject("must use http or https"));
        }

        if url.host_str().is_none() {
            return Err(reject("must have a host"));
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(reject("must not carry a query or fragment"));
        }

        Ok(())
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ApiUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ApiUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ApiUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_localhost_http() {
        let api = ApiUrl::new("http://localhost:8000").unwrap();
        assert_eq!(api.host(), Some("localhost"));
    }

    #[test]
    fn endpoint_joins_with_single_slash() {
        let api = ApiUrl::new("http://localhost:8000").unwrap();
        assert_eq!(
            api.endpoint("/proveedor/listar"),
            "http://localhost:8000/proveedor/listar"
        );
        assert_eq!(api.endpoint("events"), "http://localhost:8000/events");
    }

    #[test]
    fn endpoint_keeps_base_path() {
        let api = ApiUrl::new("https://gateway.example.com/api/v1/").unwrap();
        assert_eq!(
            api.endpoint("/auth/refresh"),
            "https://gateway.example.com/api/v1/auth/refresh"
        );
    }

    #[test]
    fn trailing_slash_is_normalized() {
        let root = ApiUrl::new("http://localhost:8000/").unwrap();
        assert_eq!(root.as_str(), "http://localhost:8000");
        assert_eq!(root.to_string(), "http://localhost:8000");

        let gateway = ApiUrl::new("https://gateway.example.com/api/v1/").unwrap();
        assert_eq!(gateway.as_str(), "https://gateway.example.com/api/v1");
        assert_eq!(
            serde_json::to_string(&gateway).unwrap(),
            "\"https://gateway.example.com/api/v1\""
        );
        assert_eq!(gateway, ApiUrl::new("https://gateway.example.com/api/v1").unwrap());
    }

    #[test]
    fn rejects_other_schemes() {
        assert!(ApiUrl::new("ftp://example.com").is_err());
        assert!(ApiUrl::new("file:///tmp/api").is_err());
    }

    #[test]
    fn rejects_relative_url() {
        assert!(ApiUrl::new("/auth/login").is_err());
    }

    #[test]
    fn rejects_query() {
        assert!(ApiUrl::new("http://localhost:8000/?debug=1").is_err());
    }

    #[test]
    fn serde_roundtrip_validates() {
        let api: ApiUrl = serde_json::from_str("\"http://localhost:8000\"").unwrap();
        assert_eq!(api.host(), Some("localhost"));
        assert!(serde_json::from_str::<ApiUrl>("\"mailto:a@b.com\"").is_err());
    }
}

//! Request descriptors and parameter sets.

use std::time::Duration;

use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use url::form_urlencoded;

use crate::error::StakingError;

/// Security classification of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecurityType {
    /// Public endpoint, no authentication.
    None,
    /// Requires the `X-MBX-APIKEY` header only.
    ApiKey,
    /// Requires the API key header plus `timestamp` and `signature` parameters.
    Signed,
}

/// Where an endpoint expects its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParamsLocation {
    /// URL query string.
    #[default]
    Query,
    /// `application/x-www-form-urlencoded` request body.
    Form,
}

/// An ordered, URL-encoded parameter set.
///
/// Keys keep the order in which they were added; values are stored encoded, exactly as they
/// go over the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    encoded: String,
}

impl Params {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a serializable request into parameters.
    ///
    /// Fields serialized as `None` (skipped) do not appear in the result.
    pub fn from_serialize<T>(value: &T) -> Result<Self, StakingError>
    where
        T: Serialize + ?Sized,
    {
        let encoded = serde_urlencoded::to_string(value)
            .map_err(|e| StakingError::InvalidRequest(e.to_string()))?;
        Ok(Self { encoded })
    }

    /// Append a parameter after the existing ones.
    pub fn append(&mut self, key: &str, value: impl AsRef<str>) {
        let mut serializer = form_urlencoded::Serializer::for_suffix(std::mem::take(&mut self.encoded), 0);
        serializer.append_pair(key, value.as_ref());
        self.encoded = serializer.finish();
    }

    /// Decoded value of the first parameter named `key`.
    pub fn get(&self, key: &str) -> Option<String> {
        self.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Whether a parameter named `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.iter().any(|(k, _)| k == key)
    }

    /// Parameter names in order.
    pub fn keys(&self) -> Vec<String> {
        self.iter().map(|(k, _)| k).collect()
    }

    /// Decoded `(key, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (String, String)> + '_ {
        form_urlencoded::parse(self.encoded.as_bytes()).map(|(k, v)| (k.into_owned(), v.into_owned()))
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.encoded.is_empty()
    }

    /// The encoded `key=value&...` form.
    pub fn as_str(&self) -> &str {
        &self.encoded
    }
}

impl std::fmt::Display for Params {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.encoded)
    }
}

/// Everything the transport needs to issue one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    method: Method,
    path: &'static str,
    security: SecurityType,
    location: ParamsLocation,
    params: Params,
}

impl RequestDescriptor {
    /// Create a descriptor with query-string parameters.
    pub fn new(method: Method, path: &'static str, security: SecurityType, params: Params) -> Self {
        Self {
            method,
            path,
            security,
            location: ParamsLocation::Query,
            params,
        }
    }

    /// Send the parameters in a form-encoded body instead of the query string.
    pub fn in_form(mut self) -> Self {
        self.location = ParamsLocation::Form;
        self
    }

    /// Place the parameters explicitly.
    pub fn with_location(mut self, location: ParamsLocation) -> Self {
        self.location = location;
        self
    }

    /// HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Endpoint path relative to the base URL.
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Security classification.
    pub fn security(&self) -> SecurityType {
        self.security
    }

    /// Parameter placement.
    pub fn location(&self) -> ParamsLocation {
        self.location
    }

    /// Endpoint parameters (without `timestamp`/`signature`).
    pub fn params(&self) -> &Params {
        &self.params
    }
}

/// Per-request overrides applied by the transport.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// `recvWindow` in milliseconds, overriding the client default.
    pub recv_window: Option<u64>,
    /// Extra headers, replacing client defaults with the same name.
    pub headers: HeaderMap,
    /// Abort the request if it takes longer than this.
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override `recvWindow` for this request.
    pub fn recv_window(mut self, millis: u64) -> Self {
        self.recv_window = Some(millis);
        self
    }

    /// Add or replace a header.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Set a deadline for this request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

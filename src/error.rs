//! Error types for the Binance staking client library.

use serde::Deserialize;
use thiserror::Error;

/// The main error type for all staking client operations.
///
/// Every variant except [`StakingError::Decode`] originates in the transport layer
/// and is passed through the endpoint layer unchanged.
#[derive(Error, Debug)]
pub enum StakingError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Binance API rejected the request
    #[error("Binance API error: {0}")]
    Api(ApiError),

    /// Request parameters could not be encoded
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Non-success response without a recognizable error body
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The response body did not match the expected shape
    #[error("Failed to decode response: {source}. Body: {body}")]
    Decode {
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
        /// Raw response body (lossy UTF-8)
        body: String,
    },

    /// Authentication error
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Missing required credentials
    #[error("Missing credentials: API key and secret required for signed endpoints")]
    MissingCredentials,
}

impl StakingError {
    /// True when the server answered but the body could not be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(self, StakingError::Decode { .. })
    }

    /// True for every failure raised before a response body reached the decoder.
    pub fn is_transport(&self) -> bool {
        !self.is_decode()
    }

    /// The Binance API error, if the server rejected the request.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            StakingError::Api(err) => Some(err),
            _ => None,
        }
    }
}

/// Error payload returned by Binance on rejected requests.
///
/// Binance reports errors as `{"code": -1121, "msg": "Invalid symbol."}` together with a
/// non-2xx HTTP status.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiError {
    /// Numeric Binance error code (negative)
    pub code: i64,
    /// Human-readable error message
    #[serde(rename = "msg")]
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<APIError> code={}, msg={}", self.code, self.message)
    }
}

impl ApiError {
    /// Create a new API error from code and message.
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Parse an API error from a response body.
    ///
    /// Returns `None` if the body is not a Binance error object.
    pub fn from_body(body: &[u8]) -> Option<Self> {
        serde_json::from_slice(body).ok()
    }

    /// Check if this is a rate limit error.
    pub fn is_rate_limit(&self) -> bool {
        self.code == error_codes::TOO_MANY_REQUESTS || self.code == error_codes::REQUEST_FREQUENCY_TOO_HIGH
    }

    /// Check if the request timestamp fell outside the receive window.
    pub fn is_invalid_timestamp(&self) -> bool {
        self.code == error_codes::INVALID_TIMESTAMP
    }

    /// Check if this is an invalid signature error.
    pub fn is_invalid_signature(&self) -> bool {
        self.code == error_codes::INVALID_SIGNATURE
    }

    /// Check if the API key was rejected.
    pub fn is_invalid_key(&self) -> bool {
        self.code == error_codes::BAD_API_KEY_FORMAT || self.code == error_codes::REJECTED_API_KEY
    }

    /// Check if the account cannot cover the requested amount.
    pub fn is_insufficient_balance(&self) -> bool {
        self.code == error_codes::BALANCE_NOT_ENOUGH || self.code == error_codes::ASSET_NOT_ENOUGH
    }
}

/// Known Binance error codes for pattern matching.
pub mod error_codes {
    /// General errors
    pub const UNKNOWN: i64 = -1000;
    pub const DISCONNECTED: i64 = -1001;
    pub const UNAUTHORIZED: i64 = -1002;
    pub const TOO_MANY_REQUESTS: i64 = -1003;
    pub const INVALID_TIMESTAMP: i64 = -1021;
    pub const INVALID_SIGNATURE: i64 = -1022;

    /// Request errors
    pub const MANDATORY_PARAM_EMPTY_OR_MALFORMED: i64 = -1102;
    pub const BAD_API_KEY_FORMAT: i64 = -2014;
    pub const REJECTED_API_KEY: i64 = -2015;

    /// Savings and staking errors
    pub const PRODUCT_NOT_EXIST: i64 = -6001;
    pub const PRODUCT_NOT_ACCESSIBLE: i64 = -6003;
    pub const PRODUCT_NOT_PURCHASABLE: i64 = -6004;
    pub const LOWER_THAN_MIN_PURCHASE_LIMIT: i64 = -6005;
    pub const REDEEM_AMOUNT_ERROR: i64 = -6006;
    pub const REQUEST_FREQUENCY_TOO_HIGH: i64 = -6009;
    pub const EXCEEDED_USER_PURCHASE_LIMIT: i64 = -6011;
    pub const BALANCE_NOT_ENOUGH: i64 = -6012;
    pub const ASSET_NOT_ENOUGH: i64 = -6018;
}

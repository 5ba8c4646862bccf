//! Authentication module for the Binance API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - Request timestamps corrected for server clock drift
//! - HMAC-SHA256 signature generation for signed requests

mod credentials;
mod signature;
mod timestamp;

pub use credentials::{
    API_KEY_ENV, API_SECRET_ENV, Credentials, CredentialsProvider, EnvCredentials, StaticCredentials,
};
pub use signature::sign_request;
pub use timestamp::{FixedTimestamp, SystemClock, TimestampProvider};

//! HMAC-SHA256 signature generation for Binance signed endpoints.
//!
//! Binance signed endpoints require a signature computed as:
//! ```text
//! hex(HMAC-SHA256(api_secret, query_string + request_body))
//! ```
//!
//! The signature is appended to the query string as the `signature` parameter.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::auth::Credentials;
use crate::error::StakingError;

type HmacSha256 = Hmac<Sha256>;

/// Sign a request payload for Binance's signed API.
///
/// # Arguments
///
/// * `credentials` - API credentials containing the secret
/// * `payload` - The URL-encoded query string followed by the URL-encoded form body
///
/// # Returns
///
/// Lowercase hex-encoded HMAC-SHA256 signature.
///
/// # Example
///
/// ```rust
/// use binance_staking_client::auth::{Credentials, sign_request};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials::new("api_key", "api_secret");
/// let signature = sign_request(&credentials, "product=STAKING&timestamp=1499827319559")?;
/// assert_eq!(signature.len(), 64);
/// # Ok(())
/// # }
/// ```
pub fn sign_request(credentials: &Credentials, payload: &str) -> Result<String, StakingError> {
    let mut mac = HmacSha256::new_from_slice(credentials.expose_secret().as_bytes())
        .map_err(|e| StakingError::Auth(format!("Invalid HMAC key: {e}")))?;
    mac.update(payload.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

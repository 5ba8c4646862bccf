//! # Binance Staking Client
//!
//! An async Rust client library for the Binance staking REST API.
//!
//! ## Features
//!
//! - Typed requests for every staking endpoint, with explicit optional parameters
//! - HMAC-SHA256 request signing with server-time offset and `recvWindow` support
//! - Transport abstraction so endpoints can run against mocks or decorators
//! - Financial precision with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use binance_staking_client::auth::StaticCredentials;
//! use binance_staking_client::rest::staking::ListStakingProductsRequest;
//! use binance_staking_client::rest::{BinanceRestClient, StakingApi};
//! use binance_staking_client::StakingProductType;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = Arc::new(StaticCredentials::new("api_key", "api_secret"));
//!     let client = BinanceRestClient::builder().credentials(credentials).build();
//!
//!     let request = ListStakingProductsRequest::new()
//!         .product(StakingProductType::Staking)
//!         .asset("BNB");
//!     let products = client.list_staking_products(&request).await?;
//!     println!("Products: {}", products.len());
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::StakingError;
pub use types::common::{StakingProductType, StakingTxnType};

/// Result type alias using StakingError
pub type Result<T> = std::result::Result<T, StakingError>;

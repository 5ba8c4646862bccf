//! Binance REST API client.
//!
//! The layers, from the wire up:
//! - [`BinanceRestClient`] signs and sends requests ([`Transport`])
//! - [`request`] describes a request: method, path, security and [`Params`]
//! - [`Endpoint`] binds a typed request to its path and response shape
//! - [`StakingApi`] exposes one method per staking endpoint on any transport
//!
//! ```rust,ignore
//! use binance_staking_client::rest::{BinanceRestClient, StakingApi};
//! use binance_staking_client::rest::staking::ListStakingProductsRequest;
//!
//! async fn products(client: &BinanceRestClient) -> binance_staking_client::Result<()> {
//!     let products = client
//!         .list_staking_products(&ListStakingProductsRequest::new().asset("BNB"))
//!         .await?;
//!     println!("{} products", products.len());
//!     Ok(())
//! }
//! ```

mod client;
pub mod endpoint;
mod endpoints;
pub mod request;
pub mod staking;
mod traits;

pub use client::{BinanceRestClient, BinanceRestClientBuilder};
pub use endpoint::{Endpoint, decode, execute};
pub use endpoints::*;
pub use request::{Params, ParamsLocation, RequestDescriptor, RequestOptions, SecurityType};
pub use traits::{StakingApi, Transport};

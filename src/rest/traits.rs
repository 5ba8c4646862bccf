//! Transport abstraction and the staking API surface built on it.
//!
//! [`Transport`] is the seam between endpoint logic and HTTP. It enables:
//! - Mock implementations for testing
//! - Decorators (e.g. request accounting) around [`BinanceRestClient`](crate::rest::BinanceRestClient)
//! - Alternative HTTP stacks
//!
//! [`StakingApi`] is implemented for every transport and exposes one method per endpoint.
//!
//! # Example
//!
//! ```rust,ignore
//! use binance_staking_client::rest::{StakingApi, Transport};
//! use binance_staking_client::rest::staking::LeftDailyPurchaseQuotaRequest;
//!
//! async fn quota<T: Transport>(transport: &T) -> binance_staking_client::Result<()> {
//!     let left = transport
//!         .get_left_daily_purchase_quota(&LeftDailyPurchaseQuotaRequest::new("USDT001"))
//!         .await?;
//!     println!("Left today: {left}");
//!     Ok(())
//! }
//! ```

use std::future::Future;
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::error::StakingError;
use crate::rest::endpoint::{self, Endpoint};
use crate::rest::request::{RequestDescriptor, RequestOptions};
use crate::rest::staking::{
    LeftDailyPurchaseQuotaRequest, ListStakingProductsRequest, PersonalLeftQuotaRequest,
    PurchaseStakingProductRequest, RedeemStakingProductRequest, SetAutoStakingRequest,
    StakingHistoryRequest, StakingPosition, StakingPositionRequest, StakingProduct, StakingRecord,
};

/// Executes request descriptors against the remote service.
///
/// Implementations attach authentication, send the request and return the raw body of a
/// successful response. Rejections, network failures and signing problems are reported as
/// errors; callers pass them on untouched.
pub trait Transport: Send + Sync {
    /// Perform one request.
    fn call_api(
        &self,
        request: &RequestDescriptor,
        options: &RequestOptions,
    ) -> impl Future<Output = Result<Vec<u8>, StakingError>> + Send;
}

impl<T: Transport> Transport for Arc<T> {
    fn call_api(
        &self,
        request: &RequestDescriptor,
        options: &RequestOptions,
    ) -> impl Future<Output = Result<Vec<u8>, StakingError>> + Send {
        self.as_ref().call_api(request, options)
    }
}

impl<T: Transport> Transport for &T {
    fn call_api(
        &self,
        request: &RequestDescriptor,
        options: &RequestOptions,
    ) -> impl Future<Output = Result<Vec<u8>, StakingError>> + Send {
        (**self).call_api(request, options)
    }
}

/// Staking operations, available on every [`Transport`].
///
/// Each method performs exactly one request with default [`RequestOptions`]; use
/// [`StakingApi::execute_with`] to override `recvWindow`, headers or the timeout.
#[allow(async_fn_in_trait)]
pub trait StakingApi: Transport + Sized {
    /// Run any endpoint with explicit options.
    async fn execute_with<E: Endpoint>(
        &self,
        request: &E,
        options: &RequestOptions,
    ) -> Result<E::Output, StakingError> {
        endpoint::execute(self, request, options).await
    }

    /// List staking products.
    async fn list_staking_products(
        &self,
        request: &ListStakingProductsRequest,
    ) -> Result<Vec<StakingProduct>, StakingError> {
        self.execute_with(request, &RequestOptions::default()).await
    }

    /// Purchase a staking product. Returns the purchase id.
    async fn purchase_staking_product(
        &self,
        request: &PurchaseStakingProductRequest,
    ) -> Result<u64, StakingError> {
        self.execute_with(request, &RequestOptions::default()).await
    }

    /// Redeem a staking product. Returns whether Binance accepted the redemption.
    async fn redeem_staking_product(
        &self,
        request: &RedeemStakingProductRequest,
    ) -> Result<bool, StakingError> {
        self.execute_with(request, &RequestOptions::default()).await
    }

    /// Get the amount the user can still purchase of a product.
    async fn get_personal_left_quota(
        &self,
        request: &PersonalLeftQuotaRequest,
    ) -> Result<Decimal, StakingError> {
        self.execute_with(request, &RequestOptions::default()).await
    }

    /// Get staking positions.
    async fn get_staking_positions(
        &self,
        request: &StakingPositionRequest,
    ) -> Result<Vec<StakingPosition>, StakingError> {
        self.execute_with(request, &RequestOptions::default()).await
    }

    /// Get the staking history.
    async fn get_staking_history(
        &self,
        request: &StakingHistoryRequest,
    ) -> Result<Vec<StakingRecord>, StakingError> {
        self.execute_with(request, &RequestOptions::default()).await
    }

    /// Toggle auto-renewal of a position.
    async fn set_auto_staking(&self, request: &SetAutoStakingRequest) -> Result<bool, StakingError> {
        self.execute_with(request, &RequestOptions::default()).await
    }

    /// Get the amount the user can still purchase today.
    async fn get_left_daily_purchase_quota(
        &self,
        request: &LeftDailyPurchaseQuotaRequest,
    ) -> Result<Decimal, StakingError> {
        self.execute_with(request, &RequestOptions::default()).await
    }
}

impl<T: Transport> StakingApi for T {}

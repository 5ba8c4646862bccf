//! Staking REST API endpoints (signed).
//!
//! Each request type implements [`Endpoint`]; run it through
//! [`StakingApi`](crate::rest::StakingApi) on any [`Transport`](crate::rest::Transport).

mod types;

pub use types::*;

use reqwest::Method;
use rust_decimal::Decimal;

use crate::rest::endpoint::Endpoint;
use crate::rest::endpoints::paths;
use crate::rest::request::{ParamsLocation, SecurityType};

impl Endpoint for ListStakingProductsRequest {
    const METHOD: Method = Method::GET;
    const PATH: &'static str = paths::PRODUCT_LIST;
    const SECURITY: SecurityType = SecurityType::Signed;

    type Response = Vec<StakingProduct>;
    type Output = Vec<StakingProduct>;

    fn extract(response: Self::Response) -> Self::Output {
        response
    }
}

impl Endpoint for PurchaseStakingProductRequest {
    const METHOD: Method = Method::POST;
    const PATH: &'static str = paths::PURCHASE;
    const SECURITY: SecurityType = SecurityType::Signed;

    type Response = PurchaseStakingProductResponse;
    type Output = u64;

    fn extract(response: Self::Response) -> Self::Output {
        response.purchase_id
    }
}

impl Endpoint for RedeemStakingProductRequest {
    const METHOD: Method = Method::POST;
    const PATH: &'static str = paths::REDEEM;
    const SECURITY: SecurityType = SecurityType::Signed;

    type Response = SuccessResponse;
    type Output = bool;

    fn extract(response: Self::Response) -> Self::Output {
        response.success
    }
}

// Binance reads this endpoint's parameters from a form body even though it is a GET.
impl Endpoint for PersonalLeftQuotaRequest {
    const METHOD: Method = Method::GET;
    const PATH: &'static str = paths::PERSONAL_LEFT_QUOTA;
    const SECURITY: SecurityType = SecurityType::Signed;
    const LOCATION: ParamsLocation = ParamsLocation::Form;

    type Response = PersonalLeftQuotaResponse;
    type Output = Decimal;

    fn extract(response: Self::Response) -> Self::Output {
        response.left_personal_quota
    }
}

impl Endpoint for StakingPositionRequest {
    const METHOD: Method = Method::GET;
    const PATH: &'static str = paths::POSITION;
    const SECURITY: SecurityType = SecurityType::Signed;

    type Response = Vec<StakingPosition>;
    type Output = Vec<StakingPosition>;

    fn extract(response: Self::Response) -> Self::Output {
        response
    }
}

impl Endpoint for StakingHistoryRequest {
    const METHOD: Method = Method::GET;
    const PATH: &'static str = paths::STAKING_RECORD;
    const SECURITY: SecurityType = SecurityType::Signed;

    type Response = Vec<StakingRecord>;
    type Output = Vec<StakingRecord>;

    fn extract(response: Self::Response) -> Self::Output {
        response
    }
}

impl Endpoint for SetAutoStakingRequest {
    const METHOD: Method = Method::POST;
    const PATH: &'static str = paths::SET_AUTO_STAKING;
    const SECURITY: SecurityType = SecurityType::Signed;

    type Response = SuccessResponse;
    type Output = bool;

    fn extract(response: Self::Response) -> Self::Output {
        response.success
    }
}

impl Endpoint for LeftDailyPurchaseQuotaRequest {
    const METHOD: Method = Method::GET;
    const PATH: &'static str = paths::DAILY_LEFT_QUOTA;
    const SECURITY: SecurityType = SecurityType::Signed;

    type Response = LeftDailyQuotaResponse;
    type Output = Decimal;

    fn extract(response: Self::Response) -> Self::Output {
        response.left_quota
    }
}

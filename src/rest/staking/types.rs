//! Types for the staking REST endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::types::serde_helpers::decimal_or_zero;
use crate::types::{StakingProductType, StakingTxnType, millis_to_datetime};

fn datetime_to_millis(at: OffsetDateTime) -> i64 {
    (at.unix_timestamp_nanos() / 1_000_000) as i64
}

// ========== Requests ==========

/// Request for the staking product list.
///
/// Every parameter is optional; unset parameters mean "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListStakingProductsRequest {
    /// Product family.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<StakingProductType>,
    /// Asset filter, e.g. `BNB`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<String>,
    /// Page number (server default 1).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<u32>,
    /// Page size (server default 10, max 100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

impl ListStakingProductsRequest {
    /// Create a request without filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by product family.
    pub fn product(mut self, product: StakingProductType) -> Self {
        self.product = Some(product);
        self
    }

    /// Filter by asset.
    pub fn asset(mut self, asset: impl Into<String>) -> Self {
        self.asset = Some(asset.into());
        self
    }

    /// Page number.
    pub fn current(mut self, current: u32) -> Self {
        self.current = Some(current);
        self
    }

    /// Page size.
    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }
}

/// Request to purchase a staking product.
///
/// All three parameters are mandatory and always sent, including zero values.
///
/// `amount` is an `f64` and goes over the wire as a floating-point literal, unlike every
/// other monetary value in this crate. Binance accepts it in that form; keep amounts within
/// what an `f64` represents exactly.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseStakingProductRequest {
    /// Product family.
    pub product: StakingProductType,
    /// Product id, from [`StakingProduct::project_id`].
    pub product_id: String,
    /// Quantity to purchase.
    pub amount: f64,
}

impl PurchaseStakingProductRequest {
    /// Create a purchase request.
    pub fn new(product: StakingProductType, product_id: impl Into<String>, amount: f64) -> Self {
        Self {
            product,
            product_id: product_id.into(),
            amount,
        }
    }
}

/// Request to redeem a staking position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedeemStakingProductRequest {
    /// Product family.
    pub product: StakingProductType,
    /// Product id.
    pub product_id: String,
    /// Position to redeem; Binance requires it for `STAKING` and `L_DEFI`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_id: Option<String>,
    /// Amount to redeem; Binance requires it for `F_DEFI`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
}

impl RedeemStakingProductRequest {
    /// Create a redeem request.
    pub fn new(product: StakingProductType, product_id: impl Into<String>) -> Self {
        Self {
            product,
            product_id: product_id.into(),
            position_id: None,
            amount: None,
        }
    }

    /// Redeem a specific position.
    pub fn position_id(mut self, position_id: impl Into<String>) -> Self {
        self.position_id = Some(position_id.into());
        self
    }

    /// Redeem a partial amount.
    pub fn amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }
}

/// Request for the personal left quota of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalLeftQuotaRequest {
    /// Product family.
    pub product: StakingProductType,
    /// Product id.
    pub product_id: String,
}

impl PersonalLeftQuotaRequest {
    /// Create a quota request.
    pub fn new(product: StakingProductType, product_id: impl Into<String>) -> Self {
        Self {
            product,
            product_id: product_id.into(),
        }
    }
}

/// Request for staking positions.
///
/// Every parameter is optional; `product_id` is sent only when set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StakingPositionRequest {
    /// Product family.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<StakingProductType>,
    /// Product id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    /// Asset filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<String>,
    /// Page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<u32>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

impl StakingPositionRequest {
    /// Create a request without filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by product family.
    pub fn product(mut self, product: StakingProductType) -> Self {
        self.product = Some(product);
        self
    }

    /// Filter by product id.
    pub fn product_id(mut self, product_id: impl Into<String>) -> Self {
        self.product_id = Some(product_id.into());
        self
    }

    /// Filter by asset.
    pub fn asset(mut self, asset: impl Into<String>) -> Self {
        self.asset = Some(asset.into());
        self
    }

    /// Page number.
    pub fn current(mut self, current: u32) -> Self {
        self.current = Some(current);
        self
    }

    /// Page size.
    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }
}

/// Request for the staking history.
///
/// `product` and `txn_type` are mandatory; the rest are filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StakingHistoryRequest {
    /// Product family.
    pub product: StakingProductType,
    /// Transaction type.
    pub txn_type: StakingTxnType,
    /// Asset filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<String>,
    /// Start of the range, milliseconds since epoch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    /// End of the range, milliseconds since epoch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,
    /// Page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<u32>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

impl StakingHistoryRequest {
    /// Create a history request.
    pub fn new(product: StakingProductType, txn_type: StakingTxnType) -> Self {
        Self {
            product,
            txn_type,
            asset: None,
            start_time: None,
            end_time: None,
            current: None,
            size: None,
        }
    }

    /// Filter by asset.
    pub fn asset(mut self, asset: impl Into<String>) -> Self {
        self.asset = Some(asset.into());
        self
    }

    /// Start of the range in milliseconds.
    pub fn start_time(mut self, millis: i64) -> Self {
        self.start_time = Some(millis);
        self
    }

    /// End of the range in milliseconds.
    pub fn end_time(mut self, millis: i64) -> Self {
        self.end_time = Some(millis);
        self
    }

    /// Start of the range as a datetime.
    pub fn start_at(self, at: OffsetDateTime) -> Self {
        self.start_time(datetime_to_millis(at))
    }

    /// End of the range as a datetime.
    pub fn end_at(self, at: OffsetDateTime) -> Self {
        self.end_time(datetime_to_millis(at))
    }

    /// Page number.
    pub fn current(mut self, current: u32) -> Self {
        self.current = Some(current);
        self
    }

    /// Page size.
    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }
}

/// Request to toggle auto-renewal of a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetAutoStakingRequest {
    /// Product family.
    pub product: StakingProductType,
    /// Position id.
    pub position_id: String,
    /// Whether the position renews at maturity.
    pub renewable: bool,
}

impl SetAutoStakingRequest {
    /// Create an auto-staking request.
    pub fn new(product: StakingProductType, position_id: impl Into<String>, renewable: bool) -> Self {
        Self {
            product,
            position_id: position_id.into(),
            renewable,
        }
    }
}

/// Request for the left daily purchase quota of a flexible product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeftDailyPurchaseQuotaRequest {
    /// Product id.
    pub product_id: String,
}

impl LeftDailyPurchaseQuotaRequest {
    /// Create a quota request.
    pub fn new(product_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
        }
    }
}

// ========== Responses ==========

/// A staking product offering.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StakingProduct {
    /// Product id, used as `productId` in other requests.
    pub project_id: String,
    /// Yield and duration terms.
    pub detail: StakingProductDetail,
    /// Purchase limits.
    pub quota: StakingProductQuota,
}

/// Terms of a staking product.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StakingProductDetail {
    /// Staked asset.
    pub asset: String,
    /// Asset the rewards are paid in.
    pub reward_asset: String,
    /// Lock duration in days.
    pub duration: i64,
    /// Whether positions renew automatically.
    pub renewable: bool,
    /// Annual percentage yield as a fraction.
    #[serde(deserialize_with = "decimal_or_zero::deserialize")]
    pub apy: Decimal,
}

/// Purchase limits of a staking product.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StakingProductQuota {
    /// Maximum amount a user may hold.
    #[serde(deserialize_with = "decimal_or_zero::deserialize")]
    pub total_personal_quota: Decimal,
    /// Minimum purchase amount.
    #[serde(deserialize_with = "decimal_or_zero::deserialize")]
    pub minimum: Decimal,
}

/// Purchase response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PurchaseStakingProductResponse {
    /// Id of the created purchase.
    pub purchase_id: u64,
}

/// Personal left quota response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalLeftQuotaResponse {
    /// Amount the user can still purchase.
    #[serde(deserialize_with = "decimal_or_zero::deserialize")]
    pub left_personal_quota: Decimal,
}

/// Left daily purchase quota response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeftDailyQuotaResponse {
    /// Amount the user can still purchase today.
    #[serde(alias = "LeftQuota", deserialize_with = "decimal_or_zero::deserialize")]
    pub left_quota: Decimal,
}

/// Response of endpoints that only acknowledge the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SuccessResponse {
    /// Whether Binance accepted the request.
    pub success: bool,
}

/// A staking position held by the user.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StakingPosition {
    /// Position id.
    pub position_id: u64,
    /// Product id.
    pub product_id: String,
    /// Staked asset.
    pub asset: String,
    /// Staked amount.
    #[serde(deserialize_with = "decimal_or_zero::deserialize")]
    pub amount: Decimal,
    /// Purchase time in milliseconds.
    pub purchase_time: i64,
    /// Lock duration in days.
    pub duration: i64,
    /// Days of interest accrued so far.
    pub accrual_days: i64,
    /// Asset the rewards are paid in.
    pub reward_asset: String,
    /// Rewards earned so far.
    #[serde(deserialize_with = "decimal_or_zero::deserialize")]
    pub reward_amt: Decimal,
    /// Next interest payment.
    #[serde(deserialize_with = "decimal_or_zero::deserialize")]
    pub next_interest_pay: Decimal,
    /// Interest payment period in days.
    pub pay_interest_period: i64,
    /// Amount returned on early redemption.
    #[serde(deserialize_with = "decimal_or_zero::deserialize")]
    pub redeem_amount_early: Decimal,
    /// End of interest accrual in milliseconds.
    pub interest_end_date: i64,
    /// Delivery date of the redeemed funds in milliseconds.
    pub deliver_date: i64,
    /// Redemption period in days.
    pub redeem_period: i64,
    /// Whether the position can be redeemed before maturity.
    pub can_redeem_early: bool,
    /// Whether the position renews automatically.
    pub renewable: bool,
    /// Position type, e.g. `AUTO` or `NORMAL`.
    #[serde(rename = "type")]
    pub position_type: String,
    /// Position status, e.g. `HOLDING`.
    pub status: String,
}

impl StakingPosition {
    /// Purchase time as a datetime.
    pub fn purchased_at(&self) -> Option<OffsetDateTime> {
        millis_to_datetime(self.purchase_time)
    }

    /// End of interest accrual as a datetime.
    pub fn interest_ends_at(&self) -> Option<OffsetDateTime> {
        millis_to_datetime(self.interest_end_date)
    }

    /// Delivery date as a datetime.
    pub fn delivered_at(&self) -> Option<OffsetDateTime> {
        millis_to_datetime(self.deliver_date)
    }
}

/// One entry of the staking history.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StakingRecord {
    /// Position id.
    pub position_id: String,
    /// Transaction time in milliseconds.
    pub time: i64,
    /// Asset.
    pub asset: String,
    /// Project name.
    pub project: String,
    /// Transaction amount.
    #[serde(deserialize_with = "decimal_or_zero::deserialize")]
    pub amount: Decimal,
    /// Lock period in days.
    pub lock_period: String,
    /// Delivery date, as sent by Binance.
    pub deliver_date: String,
    /// Record type, e.g. `AUTO`.
    #[serde(rename = "type")]
    pub record_type: String,
    /// Record status, e.g. `SUCCESS`.
    pub status: String,
}

impl StakingRecord {
    /// Transaction time as a datetime.
    pub fn occurred_at(&self) -> Option<OffsetDateTime> {
        millis_to_datetime(self.time)
    }
}

//! Common domain types for the Binance staking API.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Staking product family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StakingProductType {
    /// Locked staking
    #[serde(rename = "STAKING")]
    Staking,
    /// Flexible DeFi staking
    #[serde(rename = "F_DEFI")]
    FlexibleDefi,
    /// Locked DeFi staking
    #[serde(rename = "L_DEFI")]
    LockedDefi,
}

impl std::fmt::Display for StakingProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StakingProductType::Staking => "STAKING",
            StakingProductType::FlexibleDefi => "F_DEFI",
            StakingProductType::LockedDefi => "L_DEFI",
        };
        write!(f, "{}", s)
    }
}

/// Transaction type filter for the staking history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StakingTxnType {
    /// Purchases
    Subscription,
    /// Redemptions
    Redemption,
    /// Interest payouts
    Interest,
}

impl std::fmt::Display for StakingTxnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StakingTxnType::Subscription => "SUBSCRIPTION",
            StakingTxnType::Redemption => "REDEMPTION",
            StakingTxnType::Interest => "INTEREST",
        };
        write!(f, "{}", s)
    }
}

/// Convert a Binance millisecond timestamp into a UTC datetime.
///
/// Returns `None` for zero (the value of an absent field) and for out-of-range input.
pub fn millis_to_datetime(millis: i64) -> Option<OffsetDateTime> {
    if millis == 0 {
        return None;
    }
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000).ok()
}

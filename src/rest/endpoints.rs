//! Binance REST API endpoint constants.

/// Base URL for the Binance REST API.
pub const BINANCE_BASE_URL: &str = "https://api.binance.com";

/// Base URL for the Binance spot testnet.
pub const BINANCE_TESTNET_BASE_URL: &str = "https://testnet.binance.vision";

/// Staking endpoint paths (all signed).
pub mod paths {
    /// List staking products.
    pub const PRODUCT_LIST: &str = "/sapi/v1/staking/productList";
    /// Purchase a staking product.
    pub const PURCHASE: &str = "/sapi/v1/staking/purchase";
    /// Redeem a staking product.
    pub const REDEEM: &str = "/sapi/v1/staking/redeem";
    /// Get staking product positions.
    pub const POSITION: &str = "/sapi/v1/staking/position";
    /// Get staking history.
    pub const STAKING_RECORD: &str = "/sapi/v1/staking/stakingRecord";
    /// Set auto staking.
    pub const SET_AUTO_STAKING: &str = "/sapi/v1/staking/setAutoStaking";
    /// Get personal left quota of a staking product.
    pub const PERSONAL_LEFT_QUOTA: &str = "/sapi/v1/staking/personalLeftQuota";
    /// Get left daily purchase quota of a flexible product.
    pub const DAILY_LEFT_QUOTA: &str = "/sapi/v1/lending/daily/userLeftQuota";
}

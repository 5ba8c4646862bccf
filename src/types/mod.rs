//! Common types used across the staking client library.

pub mod common;
pub mod serde_helpers;

pub use common::*;

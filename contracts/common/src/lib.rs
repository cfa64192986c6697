#![no_std]

mod asset;
mod error;
mod interface;
mod math;
mod types;
mod test;

pub use crate::asset::{AnyAsset, AssetHandle, NativeAsset, TokenAsset};
pub use crate::error::LendingError;
pub use crate::interface::{
    EscrowClient, EscrowInterface, LoanClient, LoanInterface, RegistryClient, RegistryInterface,
};
pub use crate::math::{
    days_to_seconds, interest, pro_rata_share, required_collateral, split_interest,
    InterestSplit, BPS_DENOMINATOR, COLLATERAL_WINDOW_DAYS, DAYS_PER_YEAR, GRACE_PERIOD_DAYS,
    SECONDS_PER_DAY,
};
pub use crate::types::{
    ApprovalMode, Asset, EscrowConfig, EscrowLedger, LoanInfo, LoanParams, LoanPhase,
    LoanState, LoanTerms, Proposal,
};

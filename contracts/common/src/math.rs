use soroban_sdk::{Env, I256};

use crate::error::LendingError;
use crate::types::LoanTerms;

pub const SECONDS_PER_DAY: u64 = 86_400;
pub const DAYS_PER_YEAR: i128 = 365;
pub const BPS_DENOMINATOR: i128 = 10_000;
pub const COLLATERAL_WINDOW_DAYS: u64 = 3;
pub const GRACE_PERIOD_DAYS: u64 = 2;

pub fn days_to_seconds(days: u64) -> u64 {
    days * SECONDS_PER_DAY
}

/// `value * factors / denominator`, with the product kept in 256 bits so 18 decimal amounts
/// don't overflow. Truncates.
fn mul_div(
    e: &Env,
    value: i128,
    factors: &[i128],
    denominator: i128,
) -> Result<i128, LendingError> {
    let mut product = I256::from_i128(e, value);
    for factor in factors {
        product = product.mul(&I256::from_i128(e, *factor));
    }
    product
        .div(&I256::from_i128(e, denominator))
        .to_i128()
        .ok_or(LendingError::AmountOverflow)
}

/// Simple interest on `principal` for `days` at `apy_bps`, on a 365 day year. Truncates.
pub fn interest(
    e: &Env,
    principal: i128,
    apy_bps: u32,
    days: u32,
) -> Result<i128, LendingError> {
    mul_div(
        e,
        principal,
        &[apy_bps as i128, days as i128],
        DAYS_PER_YEAR * BPS_DENOMINATOR,
    )
}

/// Collateral owed for a loan: `loan_limit` scaled by the collateral ratio and by the
/// collateral/fund price ratio, both in basis points.
pub fn required_collateral(
    e: &Env,
    loan_limit: i128,
    collateral_ratio: u32,
    price_ratio: u32,
) -> Result<i128, LendingError> {
    mul_div(
        e,
        loan_limit,
        &[collateral_ratio as i128, price_ratio as i128],
        BPS_DENOMINATOR * BPS_DENOMINATOR,
    )
}

/// `pool * share / total`, truncated. Zero when nothing was pooled.
pub fn pro_rata_share(
    e: &Env,
    share: i128,
    total: i128,
    pool: i128,
) -> Result<i128, LendingError> {
    if total <= 0 {
        return Ok(0);
    }
    mul_div(e, share, &[pool], total)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InterestSplit {
    pub borrower_interest: i128,
    pub lender_interest: i128,
    pub spread: i128,
}

pub fn split_interest(
    e: &Env,
    principal: i128,
    terms: &LoanTerms,
) -> Result<InterestSplit, LendingError> {
    let borrower_interest = interest(
        e,
        principal,
        terms.borrower_apy,
        terms.loan_duration_in_days,
    )?;
    let lender_interest = interest(
        e,
        principal,
        terms.lender_interest_apy,
        terms.loan_duration_in_days,
    )?;
    Ok(InterestSplit {
        borrower_interest,
        lender_interest,
        spread: borrower_interest - lender_interest,
    })
}

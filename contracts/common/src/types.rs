use soroban_sdk::{contracttype, Address};

use crate::error::LendingError;
use crate::math::{days_to_seconds, COLLATERAL_WINDOW_DAYS, GRACE_PERIOD_DAYS};

/// Identity of a fungible asset. `Native` is the reserved identifier for the network's
/// native unit; it is resolved to its Stellar Asset Contract by whoever holds the config.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Asset {
    Native,
    Token(Address),
}

/// Terms a borrower puts forward when asking for a loan.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub loan_limit: i128,
    pub deposit_start_date: u64,
    pub loan_duration_in_days: u32,
    pub borrower_apy: u32,
}

impl Proposal {
    pub fn validate(&self) -> Result<(), LendingError> {
        if self.loan_limit <= 0 || self.loan_duration_in_days == 0 || self.borrower_apy == 0 {
            return Err(LendingError::InvalidTerms);
        }
        Ok(())
    }
}

/// Full loan terms. Rates and ratios are basis points, dates are ledger timestamps.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LoanTerms {
    pub loan_limit: i128,
    pub deposit_start_date: u64,
    pub collateral_deposit_start_date: u64,
    pub loan_duration_in_days: u32,
    pub borrower_apy: u32,
    pub lender_interest_apy: u32,
    pub collateral_ratio: u32,
    pub collateral_asset_price_ratio: u32,
}

impl LoanTerms {
    /// Terms as proposed; the approver fills in the rest.
    pub fn from_proposal(proposal: &Proposal) -> Self {
        Self {
            loan_limit: proposal.loan_limit,
            deposit_start_date: proposal.deposit_start_date,
            collateral_deposit_start_date: 0,
            loan_duration_in_days: proposal.loan_duration_in_days,
            borrower_apy: proposal.borrower_apy,
            lender_interest_apy: 0,
            collateral_ratio: 0,
            collateral_asset_price_ratio: 0,
        }
    }

    pub fn validate(&self) -> Result<(), LendingError> {
        if self.loan_limit <= 0
            || self.loan_duration_in_days == 0
            || self.deposit_start_date >= self.collateral_deposit_start_date
            || self.lender_interest_apy > self.borrower_apy
            || self.collateral_ratio == 0
            || self.collateral_asset_price_ratio == 0
            || self.checked_settlement_date().is_none()
        {
            return Err(LendingError::InvalidTerms);
        }
        Ok(())
    }

    /// Settlement date, or `None` when the windows run past the end of time.
    fn checked_settlement_date(&self) -> Option<u64> {
        let days = self.loan_duration_in_days as u64 + GRACE_PERIOD_DAYS;
        self.collateral_deposit_start_date
            .checked_add(days_to_seconds(days))
    }

    pub fn collateral_deposit_end_date(&self) -> u64 {
        self.collateral_deposit_start_date + days_to_seconds(COLLATERAL_WINDOW_DAYS)
    }

    /// Scheduled end of the term, independent of when the funds were actually drawn.
    pub fn return_due_date(&self) -> u64 {
        self.collateral_deposit_start_date + days_to_seconds(self.loan_duration_in_days as u64)
    }

    /// End of the grace period; claims, defaults and refunds open here.
    pub fn settlement_date(&self) -> u64 {
        self.return_due_date() + days_to_seconds(GRACE_PERIOD_DAYS)
    }
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ApprovalMode {
    /// Terms are fixed by the first approval.
    Once,
    /// The approver may amend terms until the funding window opens.
    Amendable,
}

/// Wiring a factory hands to a freshly deployed loan.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LoanParams {
    pub registry: Address,
    pub borrower: Address,
    pub escrow: Address,
    pub fund_asset: Asset,
    pub collateral_asset: Asset,
    pub approval_mode: ApprovalMode,
}

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LoanState {
    pub approved: bool,
    pub collateral_deposited: bool,
    pub drawn: bool,
    pub returned: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LoanInfo {
    pub params: LoanParams,
    pub terms: LoanTerms,
    pub state: LoanState,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoanPhase {
    Proposed,
    Approved,
    Funding,
    CollateralPending,
    Drawn,
    Returned,
    Defaulted,
    Settled,
    /// Never drawn; lenders and the borrower take their assets back.
    Cancelled,
}

impl LoanPhase {
    pub fn at(now: u64, terms: &LoanTerms, state: &LoanState) -> Self {
        if !state.approved {
            return LoanPhase::Proposed;
        }
        if now < terms.deposit_start_date {
            return LoanPhase::Approved;
        }
        if now < terms.collateral_deposit_start_date {
            return LoanPhase::Funding;
        }
        if now >= terms.settlement_date() {
            return match (state.drawn, state.returned) {
                (_, true) => LoanPhase::Settled,
                (true, false) => LoanPhase::Defaulted,
                (false, false) => LoanPhase::Cancelled,
            };
        }
        match (state.drawn, state.returned) {
            (_, true) => LoanPhase::Returned,
            (true, false) => LoanPhase::Drawn,
            (false, false) => LoanPhase::CollateralPending,
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EscrowConfig {
    pub controller: Address,
    pub fund_asset: Asset,
    pub collateral_asset: Asset,
    pub native_asset: Address,
}

/// Balance fields of one escrow.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EscrowLedger {
    pub total_fund_amount: i128,
    pub lend_amount: i128,
    pub returned_amount: i128,
    pub total_interest: i128,
    pub collateral_amount: i128,
    pub total_claimed: i128,
    pub collateral_claimed: i128,
}

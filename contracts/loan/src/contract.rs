//! Fixed-term pooled loan.
//!
//! Lenders pool the fund asset during the funding window, the borrower posts collateral and
//! draws the pool, then repays principal plus interest. After the grace period lenders claim
//! their pro-rata share of the repayment, or of the collateral if the borrower defaulted.
//! Custody of every asset is delegated to the escrow paired with this loan.
//!
//! Each mutating entry point checks, in order: initialized, caller role, approval, time
//! window, then the state preconditions of the operation.

use crate::event::{
    emit_approved, emit_collateral_deposited, emit_collateral_withdrawn, emit_claimed,
    emit_default_claimed, emit_deposit, emit_drawn, emit_refund, emit_repaid,
};
use crate::loan_info::{
    has_params, read_params, read_state, read_terms, write_params, write_state, write_terms,
};
use soroban_lending_common::{
    required_collateral, split_interest, ApprovalMode, EscrowClient, LendingError, LoanInfo,
    LoanParams, LoanPhase, LoanState, LoanTerms, Proposal, RegistryClient,
};
use soroban_sdk::{contract, contractimpl, log, Address, Env};

#[contract]
pub struct Loan;

fn now(e: &Env) -> u64 {
    e.ledger().timestamp()
}

fn escrow<'a>(e: &Env, params: &LoanParams) -> EscrowClient<'a> {
    EscrowClient::new(e, &params.escrow)
}

fn require_borrower(params: &LoanParams, caller: &Address) -> Result<(), LendingError> {
    caller.require_auth();
    if *caller != params.borrower {
        return Err(LendingError::Unauthorized);
    }
    Ok(())
}

fn require_approved(e: &Env) -> Result<(LoanTerms, LoanState), LendingError> {
    let state = read_state(e);
    if !state.approved {
        return Err(LendingError::NotApproved);
    }
    Ok((read_terms(e)?, state))
}

/// Half-open window `[start, end)`.
fn require_window(e: &Env, start: u64, end: u64) -> Result<(), LendingError> {
    let now = now(e);
    if now < start || now >= end {
        return Err(LendingError::CurrentlyUnavailable);
    }
    Ok(())
}

fn require_settlement(e: &Env, terms: &LoanTerms) -> Result<(), LendingError> {
    if now(e) < terms.settlement_date() {
        return Err(LendingError::CurrentlyUnavailable);
    }
    Ok(())
}

/// The lender's recorded deposit, which must exist and not have been settled yet.
fn require_unsettled_lender(escrow: &EscrowClient, lender: &Address) -> Result<i128, LendingError> {
    let deposit = escrow.deposit(lender);
    if deposit == 0 {
        return Err(LendingError::Unauthorized);
    }
    if escrow.claimed(lender) {
        return Err(LendingError::AlreadyClaimed);
    }
    Ok(deposit)
}

#[contractimpl]
impl Loan {
    pub fn initialize(e: Env, params: LoanParams, proposal: Proposal) -> Result<(), LendingError> {
        if has_params(&e) {
            return Err(LendingError::AlreadyInitialized);
        }
        proposal.validate()?;

        write_params(&e, &params);
        write_terms(&e, &LoanTerms::from_proposal(&proposal));
        write_state(&e, &LoanState::default());
        Ok(())
    }

    /// The registry owner fixes the full terms. Under `ApprovalMode::Amendable` the terms may
    /// be replaced again until the funding window opens.
    pub fn approve_proposal(
        e: Env,
        approver: Address,
        terms: LoanTerms,
    ) -> Result<(), LendingError> {
        let params = read_params(&e)?;
        approver.require_auth();
        if approver != RegistryClient::new(&e, &params.registry).owner() {
            return Err(LendingError::Unauthorized);
        }

        let mut state = read_state(&e);
        if state.approved {
            match params.approval_mode {
                ApprovalMode::Once => return Err(LendingError::AlreadyApproved),
                ApprovalMode::Amendable => {
                    if now(&e) >= read_terms(&e)?.deposit_start_date {
                        return Err(LendingError::CurrentlyUnavailable);
                    }
                }
            }
        }
        terms.validate()?;

        write_terms(&e, &terms);
        state.approved = true;
        write_state(&e, &state);
        emit_approved(&e, &approver, &terms);
        Ok(())
    }

    pub fn deposit_funds(e: Env, lender: Address, amount: i128) -> Result<(), LendingError> {
        let params = read_params(&e)?;
        lender.require_auth();
        let (terms, _) = require_approved(&e)?;
        require_window(
            &e,
            terms.deposit_start_date,
            terms.collateral_deposit_start_date,
        )?;
        if amount <= 0 {
            return Err(LendingError::InvalidAmount);
        }

        let escrow = escrow(&e, &params);
        let total = escrow.total_fund_amount();
        if amount > terms.loan_limit - total {
            return Err(LendingError::LoanLimitExceeded);
        }
        escrow.deposit_funds(&lender, &amount);

        emit_deposit(&e, &lender, amount);
        Ok(())
    }

    pub fn deposit_collateral(e: Env, borrower: Address) -> Result<i128, LendingError> {
        let params = read_params(&e)?;
        require_borrower(&params, &borrower)?;
        let (terms, mut state) = require_approved(&e)?;
        require_window(
            &e,
            terms.collateral_deposit_start_date,
            terms.collateral_deposit_end_date(),
        )?;
        if state.collateral_deposited {
            return Err(LendingError::CollateralAlreadyDeposited);
        }

        let amount = required_collateral(
            &e,
            terms.loan_limit,
            terms.collateral_ratio,
            terms.collateral_asset_price_ratio,
        )?;
        if amount <= 0 {
            return Err(LendingError::InvalidAmount);
        }
        escrow(&e, &params).deposit_collateral(&borrower, &amount);

        state.collateral_deposited = true;
        write_state(&e, &state);
        emit_collateral_deposited(&e, &borrower, amount);
        Ok(amount)
    }

    /// Draws the whole pool to the borrower.
    pub fn take_loan(e: Env, borrower: Address) -> Result<i128, LendingError> {
        let params = read_params(&e)?;
        require_borrower(&params, &borrower)?;
        let (terms, mut state) = require_approved(&e)?;
        require_window(
            &e,
            terms.collateral_deposit_start_date,
            terms.return_due_date(),
        )?;
        if !state.collateral_deposited {
            return Err(LendingError::CollateralRequired);
        }
        if state.drawn {
            return Err(LendingError::AlreadyBorrowed);
        }

        let escrow = escrow(&e, &params);
        if escrow.total_fund_amount() == 0 {
            return Err(LendingError::NoFunds);
        }
        let amount = escrow.lend_asset(&borrower);

        state.drawn = true;
        write_state(&e, &state);
        log!(&e, "loan drawn", amount);
        emit_drawn(&e, &borrower, amount);
        Ok(amount)
    }

    /// Repays principal plus borrower interest. The lender interest stays in the escrow, the
    /// spread goes to the registry treasury. Returns the total paid.
    pub fn return_loan(e: Env, borrower: Address) -> Result<i128, LendingError> {
        let params = read_params(&e)?;
        require_borrower(&params, &borrower)?;
        let (terms, mut state) = require_approved(&e)?;
        require_window(&e, terms.return_due_date(), terms.settlement_date())?;
        if !state.drawn {
            return Err(LendingError::NotBorrowedYet);
        }
        if state.returned {
            return Err(LendingError::AlreadyReturned);
        }

        let escrow = escrow(&e, &params);
        let principal = escrow.lend_amount();
        let split = split_interest(&e, principal, &terms)?;
        escrow.return_asset(&borrower, &principal, &split.lender_interest);
        if split.spread > 0 {
            RegistryClient::new(&e, &params.registry).record_fee(
                &borrower,
                &params.fund_asset,
                &split.spread,
            );
        }

        state.returned = true;
        write_state(&e, &state);
        log!(&e, "loan returned", principal, split.lender_interest, split.spread);
        emit_repaid(&e, &borrower, principal, split.lender_interest, split.spread);
        Ok(principal + split.borrower_interest)
    }

    /// Gives the collateral back once the loan is settled, unless the borrower defaulted.
    pub fn withdraw_collateral(e: Env, borrower: Address) -> Result<i128, LendingError> {
        let params = read_params(&e)?;
        require_borrower(&params, &borrower)?;
        let (terms, state) = require_approved(&e)?;
        require_settlement(&e, &terms)?;
        if state.drawn && !state.returned {
            return Err(LendingError::LoanDefaulted);
        }

        let escrow = escrow(&e, &params);
        if escrow.collateral_amount() == 0 {
            return Err(LendingError::NoCollateral);
        }
        let amount = escrow.withdraw_collateral(&borrower);

        emit_collateral_withdrawn(&e, &borrower, amount);
        Ok(amount)
    }

    /// Pays a lender their share of the repayment.
    pub fn claim(e: Env, lender: Address) -> Result<i128, LendingError> {
        let params = read_params(&e)?;
        lender.require_auth();
        let (terms, state) = require_approved(&e)?;
        require_settlement(&e, &terms)?;
        if !state.drawn {
            return Err(LendingError::NotBorrowedYet);
        }
        if !state.returned {
            return Err(LendingError::LoanDefaulted);
        }

        let escrow = escrow(&e, &params);
        require_unsettled_lender(&escrow, &lender)?;
        let amount = escrow.claim(&lender);

        emit_claimed(&e, &lender, amount);
        Ok(amount)
    }

    /// Pays a lender their share of the collateral of a defaulted loan.
    pub fn claim_default(e: Env, lender: Address) -> Result<i128, LendingError> {
        let params = read_params(&e)?;
        lender.require_auth();
        let (terms, state) = require_approved(&e)?;
        require_settlement(&e, &terms)?;
        if state.returned {
            return Err(LendingError::LoanReturned);
        }
        if !state.drawn {
            return Err(LendingError::NotBorrowedYet);
        }

        let escrow = escrow(&e, &params);
        require_unsettled_lender(&escrow, &lender)?;
        let amount = escrow.claim_default(&lender);

        emit_default_claimed(&e, &lender, amount);
        Ok(amount)
    }

    /// Gives a lender their deposit back when the pool was never drawn.
    pub fn refund(e: Env, lender: Address) -> Result<i128, LendingError> {
        let params = read_params(&e)?;
        lender.require_auth();
        let (terms, state) = require_approved(&e)?;
        require_settlement(&e, &terms)?;
        if state.drawn {
            return Err(LendingError::AlreadyBorrowed);
        }

        let escrow = escrow(&e, &params);
        if escrow.deposit(&lender) == 0 {
            return Err(LendingError::Unauthorized);
        }
        let amount = escrow.withdraw_funds(&lender);

        emit_refund(&e, &lender, amount);
        Ok(amount)
    }

    pub fn info(e: Env) -> Result<LoanInfo, LendingError> {
        Ok(LoanInfo {
            params: read_params(&e)?,
            terms: read_terms(&e)?,
            state: read_state(&e),
        })
    }

    pub fn terms(e: Env) -> Result<LoanTerms, LendingError> {
        read_terms(&e)
    }

    pub fn state(e: Env) -> LoanState {
        read_state(&e)
    }

    pub fn phase(e: Env) -> Result<LoanPhase, LendingError> {
        Ok(LoanPhase::at(now(&e), &read_terms(&e)?, &read_state(&e)))
    }

    pub fn required_collateral(e: Env) -> Result<i128, LendingError> {
        let terms = read_terms(&e)?;
        required_collateral(
            &e,
            terms.loan_limit,
            terms.collateral_ratio,
            terms.collateral_asset_price_ratio,
        )
    }

    /// Interest the borrower owes on the drawn principal.
    pub fn borrower_interest(e: Env) -> Result<i128, LendingError> {
        let params = read_params(&e)?;
        let terms = read_terms(&e)?;
        Ok(split_interest(&e, escrow(&e, &params).lend_amount(), &terms)?.borrower_interest)
    }

    /// Interest owed to the lenders as a whole on the drawn principal.
    pub fn lender_interest(e: Env) -> Result<i128, LendingError> {
        let params = read_params(&e)?;
        let terms = read_terms(&e)?;
        Ok(split_interest(&e, escrow(&e, &params).lend_amount(), &terms)?.lender_interest)
    }

    /// Principal plus borrower interest due at return.
    pub fn repayment_amount(e: Env) -> Result<i128, LendingError> {
        let params = read_params(&e)?;
        let terms = read_terms(&e)?;
        let principal = escrow(&e, &params).lend_amount();
        Ok(principal + split_interest(&e, principal, &terms)?.borrower_interest)
    }
}

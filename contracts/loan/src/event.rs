use soroban_lending_common::LoanTerms;
use soroban_sdk::{symbol_short, Address, Env};

/// Emits an event when the approver fixes the terms.
pub fn emit_approved(e: &Env, approver: &Address, terms: &LoanTerms) {
    e.events().publish(
        (symbol_short!("approve"), approver.clone()),
        terms.clone(),
    );
}

/// Emits an event when a lender adds to the pool.
pub fn emit_deposit(e: &Env, lender: &Address, amount: i128) {
    e.events()
        .publish((symbol_short!("deposit"), lender.clone()), amount);
}

pub fn emit_collateral_deposited(e: &Env, borrower: &Address, amount: i128) {
    e.events()
        .publish((symbol_short!("coll_in"), borrower.clone()), amount);
}

/// Emits an event when the borrower draws the pool.
pub fn emit_drawn(e: &Env, borrower: &Address, amount: i128) {
    e.events()
        .publish((symbol_short!("draw"), borrower.clone()), amount);
}

/// Emits an event when the loan is repaid, with the lender interest and the protocol spread.
pub fn emit_repaid(
    e: &Env,
    borrower: &Address,
    principal: i128,
    lender_interest: i128,
    spread: i128,
) {
    e.events().publish(
        (symbol_short!("repay"), borrower.clone()),
        (principal, lender_interest, spread),
    );
}

pub fn emit_claimed(e: &Env, lender: &Address, amount: i128) {
    e.events()
        .publish((symbol_short!("claim"), lender.clone()), amount);
}

/// Emits an event when a lender takes their part of forfeited collateral.
pub fn emit_default_claimed(e: &Env, lender: &Address, amount: i128) {
    e.events()
        .publish((symbol_short!("default"), lender.clone()), amount);
}

pub fn emit_collateral_withdrawn(e: &Env, borrower: &Address, amount: i128) {
    e.events()
        .publish((symbol_short!("coll_out"), borrower.clone()), amount);
}

pub fn emit_refund(e: &Env, lender: &Address, amount: i128) {
    e.events()
        .publish((symbol_short!("refund"), lender.clone()), amount);
}

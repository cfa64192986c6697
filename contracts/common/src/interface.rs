//! Client-side views of the three contracts, used for cross-contract calls.

use soroban_sdk::{contractclient, Address, Env};

use crate::error::LendingError;
use crate::types::{Asset, EscrowConfig, EscrowLedger, LoanParams, Proposal};

#[contractclient(name = "EscrowClient")]
pub trait EscrowInterface {
    fn initialize(env: Env, config: EscrowConfig) -> Result<(), LendingError>;
    fn deposit_funds(env: Env, lender: Address, amount: i128) -> Result<(), LendingError>;
    fn withdraw_funds(env: Env, lender: Address) -> Result<i128, LendingError>;
    fn deposit_collateral(env: Env, payer: Address, amount: i128) -> Result<(), LendingError>;
    fn withdraw_collateral(env: Env, recipient: Address) -> Result<i128, LendingError>;
    fn lend_asset(env: Env, recipient: Address) -> Result<i128, LendingError>;
    fn return_asset(
        env: Env,
        payer: Address,
        principal: i128,
        interest: i128,
    ) -> Result<(), LendingError>;
    fn claim(env: Env, lender: Address) -> Result<i128, LendingError>;
    fn claim_default(env: Env, lender: Address) -> Result<i128, LendingError>;

    fn deposit(env: Env, lender: Address) -> i128;
    fn claimed(env: Env, lender: Address) -> bool;
    fn total_fund_amount(env: Env) -> i128;
    fn lend_amount(env: Env) -> i128;
    fn returned_amount(env: Env) -> i128;
    fn total_interest(env: Env) -> i128;
    fn collateral_amount(env: Env) -> i128;
    fn ledger(env: Env) -> EscrowLedger;
}

#[contractclient(name = "LoanClient")]
pub trait LoanInterface {
    fn initialize(env: Env, params: LoanParams, proposal: Proposal) -> Result<(), LendingError>;
}

#[contractclient(name = "RegistryClient")]
pub trait RegistryInterface {
    fn owner(env: Env) -> Result<Address, LendingError>;
    fn is_borrower_whitelisted(env: Env, borrower: Address) -> bool;
    fn record_fee(env: Env, payer: Address, asset: Asset, amount: i128)
        -> Result<(), LendingError>;
}

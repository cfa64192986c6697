//! Custody of the pooled funds and the collateral of a single loan.
//!
//! The escrow knows nothing about dates or roles. Every mutating call must be authorized by
//! the controller fixed at initialization, which is the loan contract that owns this escrow.

use crate::ledger::{
    has_config, is_claimed, mark_claimed, read_config, read_deposit, read_ledger, write_config,
    write_deposit, write_ledger,
};
use soroban_lending_common::{
    pro_rata_share, AnyAsset, AssetHandle, EscrowConfig, EscrowLedger, LendingError,
};
use soroban_sdk::{contract, contractimpl, log, Address, Env};

#[contract]
pub struct Escrow;

fn authorize(e: &Env) -> Result<EscrowConfig, LendingError> {
    let config = read_config(e)?;
    config.controller.require_auth();
    Ok(config)
}

fn fund_asset<'a>(e: &Env, config: &EscrowConfig) -> AnyAsset<'a> {
    AnyAsset::new(e, &config.fund_asset, &config.native_asset)
}

fn collateral_asset<'a>(e: &Env, config: &EscrowConfig) -> AnyAsset<'a> {
    AnyAsset::new(e, &config.collateral_asset, &config.native_asset)
}

#[contractimpl]
impl Escrow {
    pub fn initialize(e: Env, config: EscrowConfig) -> Result<(), LendingError> {
        if has_config(&e) {
            return Err(LendingError::AlreadyInitialized);
        }
        write_config(&e, &config);
        write_ledger(&e, &EscrowLedger::default());
        Ok(())
    }

    pub fn deposit_funds(e: Env, lender: Address, amount: i128) -> Result<(), LendingError> {
        let config = authorize(&e)?;
        if amount <= 0 {
            return Err(LendingError::InvalidAmount);
        }
        let mut ledger = read_ledger(&e);
        if ledger.lend_amount > 0 {
            return Err(LendingError::AlreadyBorrowed);
        }

        fund_asset(&e, &config).transfer_in(&lender, amount);

        write_deposit(&e, &lender, read_deposit(&e, &lender) + amount);
        ledger.total_fund_amount += amount;
        write_ledger(&e, &ledger);
        Ok(())
    }

    /// Hands a lender's whole deposit back. Only possible while nothing has been lent.
    pub fn withdraw_funds(e: Env, lender: Address) -> Result<i128, LendingError> {
        let config = authorize(&e)?;
        let mut ledger = read_ledger(&e);
        if ledger.lend_amount > 0 {
            return Err(LendingError::AlreadyBorrowed);
        }
        let amount = read_deposit(&e, &lender);
        if amount == 0 {
            return Err(LendingError::NoFunds);
        }

        write_deposit(&e, &lender, 0);
        ledger.total_fund_amount -= amount;
        write_ledger(&e, &ledger);

        fund_asset(&e, &config).transfer_out(&lender, amount);
        Ok(amount)
    }

    pub fn deposit_collateral(e: Env, payer: Address, amount: i128) -> Result<(), LendingError> {
        let config = authorize(&e)?;
        if amount <= 0 {
            return Err(LendingError::InvalidAmount);
        }

        collateral_asset(&e, &config).transfer_in(&payer, amount);

        let mut ledger = read_ledger(&e);
        ledger.collateral_amount += amount;
        write_ledger(&e, &ledger);
        Ok(())
    }

    pub fn withdraw_collateral(e: Env, recipient: Address) -> Result<i128, LendingError> {
        let config = authorize(&e)?;
        let mut ledger = read_ledger(&e);
        let amount = ledger.collateral_amount;
        if amount == 0 {
            return Err(LendingError::NoCollateral);
        }

        ledger.collateral_amount = 0;
        write_ledger(&e, &ledger);

        collateral_asset(&e, &config).transfer_out(&recipient, amount);
        Ok(amount)
    }

    /// Moves the whole pool to `recipient` and freezes `lend_amount`, the denominator of
    /// every later pro-rata split.
    pub fn lend_asset(e: Env, recipient: Address) -> Result<i128, LendingError> {
        let config = authorize(&e)?;
        let mut ledger = read_ledger(&e);
        if ledger.lend_amount != 0 {
            return Err(LendingError::AlreadyBorrowed);
        }
        if ledger.total_fund_amount == 0 {
            return Err(LendingError::NoFunds);
        }

        ledger.lend_amount = ledger.total_fund_amount;
        ledger.total_fund_amount = 0;
        write_ledger(&e, &ledger);

        fund_asset(&e, &config).transfer_out(&recipient, ledger.lend_amount);
        log!(&e, "escrow lent", ledger.lend_amount);
        Ok(ledger.lend_amount)
    }

    pub fn return_asset(
        e: Env,
        payer: Address,
        principal: i128,
        interest: i128,
    ) -> Result<(), LendingError> {
        let config = authorize(&e)?;
        let mut ledger = read_ledger(&e);
        if ledger.lend_amount == 0 {
            return Err(LendingError::NotBorrowedYet);
        }
        if principal < 0 || interest < 0 || principal + interest == 0 {
            return Err(LendingError::InvalidAmount);
        }

        fund_asset(&e, &config).transfer_in(&payer, principal + interest);

        ledger.returned_amount += principal;
        ledger.total_interest += interest;
        write_ledger(&e, &ledger);
        Ok(())
    }

    /// Pays a lender their share of returned principal plus interest. At most once.
    pub fn claim(e: Env, lender: Address) -> Result<i128, LendingError> {
        let config = authorize(&e)?;
        let mut ledger = read_ledger(&e);
        let deposit = Self::claimable_deposit(&e, &ledger, &lender)?;

        let share = pro_rata_share(
            &e,
            deposit,
            ledger.lend_amount,
            ledger.returned_amount + ledger.total_interest,
        )?;
        mark_claimed(&e, &lender);
        ledger.total_claimed += share;
        write_ledger(&e, &ledger);

        if share > 0 {
            fund_asset(&e, &config).transfer_out(&lender, share);
        }
        Ok(share)
    }

    /// Pays a lender their share of the forfeited collateral. At most once.
    pub fn claim_default(e: Env, lender: Address) -> Result<i128, LendingError> {
        let config = authorize(&e)?;
        let mut ledger = read_ledger(&e);
        let deposit = Self::claimable_deposit(&e, &ledger, &lender)?;

        let share = pro_rata_share(&e, deposit, ledger.lend_amount, ledger.collateral_amount)?;
        mark_claimed(&e, &lender);
        ledger.collateral_claimed += share;
        write_ledger(&e, &ledger);

        if share > 0 {
            collateral_asset(&e, &config).transfer_out(&lender, share);
        }
        Ok(share)
    }

    pub fn deposit(e: Env, lender: Address) -> i128 {
        read_deposit(&e, &lender)
    }

    pub fn claimed(e: Env, lender: Address) -> bool {
        is_claimed(&e, &lender)
    }

    pub fn total_fund_amount(e: Env) -> i128 {
        read_ledger(&e).total_fund_amount
    }

    pub fn lend_amount(e: Env) -> i128 {
        read_ledger(&e).lend_amount
    }

    pub fn returned_amount(e: Env) -> i128 {
        read_ledger(&e).returned_amount
    }

    pub fn total_interest(e: Env) -> i128 {
        read_ledger(&e).total_interest
    }

    pub fn collateral_amount(e: Env) -> i128 {
        read_ledger(&e).collateral_amount
    }

    pub fn ledger(e: Env) -> EscrowLedger {
        read_ledger(&e)
    }

    pub fn config(e: Env) -> Result<EscrowConfig, LendingError> {
        read_config(&e)
    }

    pub fn controller(e: Env) -> Result<Address, LendingError> {
        Ok(read_config(&e)?.controller)
    }

    /// Fund asset actually held, which includes repayments not yet claimed.
    pub fn held_funds(e: Env) -> Result<i128, LendingError> {
        let config = read_config(&e)?;
        Ok(fund_asset(&e, &config).balance())
    }
}

impl Escrow {
    fn claimable_deposit(
        e: &Env,
        ledger: &EscrowLedger,
        lender: &Address,
    ) -> Result<i128, LendingError> {
        if ledger.lend_amount == 0 {
            return Err(LendingError::NotBorrowedYet);
        }
        if is_claimed(e, lender) {
            return Err(LendingError::AlreadyClaimed);
        }
        let deposit = read_deposit(e, lender);
        if deposit == 0 {
            return Err(LendingError::NoFunds);
        }
        Ok(deposit)
    }
}

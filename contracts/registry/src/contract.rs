//! Registry and treasury of the pooled lending protocol: borrower whitelist, loan templates,
//! the factory entry point and custody of the protocol spread.

use crate::admin::{
    add_to_whitelist, has_owner, is_whitelisted, read_config, read_owner, read_templates,
    remove_from_whitelist, require_owner, write_config, write_owner, write_templates,
};
use crate::event::{
    emit_borrower_added, emit_borrower_removed, emit_fee_recorded, emit_fee_withdrawn,
    emit_proposal_created, emit_templates_set,
};
use crate::factory::{create_pair, read_loan_count, read_proposal};
use crate::storage_types::{
    ProposalRecord, RegistryConfig, Templates, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD,
};
use crate::treasury::{read_fee_balance, write_fee_balance};
use soroban_lending_common::{AnyAsset, Asset, AssetHandle, LendingError, Proposal};
use soroban_sdk::{contract, contractimpl, log, Address, Env, Vec};
use soroban_token_sdk::TokenUtils;

#[contract]
pub struct Registry;

#[contractimpl]
impl Registry {
    pub fn initialize(e: Env, owner: Address, config: RegistryConfig) -> Result<(), LendingError> {
        if has_owner(&e) {
            return Err(LendingError::AlreadyInitialized);
        }
        write_owner(&e, &owner);
        write_config(&e, &config);
        Ok(())
    }

    pub fn owner(e: Env) -> Result<Address, LendingError> {
        read_owner(&e)
    }

    pub fn set_owner(e: Env, new_owner: Address) -> Result<(), LendingError> {
        let owner = require_owner(&e)?;

        e.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        write_owner(&e, &new_owner);
        TokenUtils::new(&e).events().set_admin(owner, new_owner);
        Ok(())
    }

    pub fn config(e: Env) -> Result<RegistryConfig, LendingError> {
        read_config(&e)
    }

    pub fn set_config(e: Env, config: RegistryConfig) -> Result<(), LendingError> {
        require_owner(&e)?;
        write_config(&e, &config);
        Ok(())
    }

    pub fn add_borrowers(e: Env, members: Vec<Address>) -> Result<(), LendingError> {
        require_owner(&e)?;
        for member in members.iter() {
            add_to_whitelist(&e, &member);
            emit_borrower_added(&e, &member);
        }
        Ok(())
    }

    pub fn remove_borrowers(e: Env, members: Vec<Address>) -> Result<(), LendingError> {
        require_owner(&e)?;
        for member in members.iter() {
            remove_from_whitelist(&e, &member);
            emit_borrower_removed(&e, &member);
        }
        Ok(())
    }

    pub fn is_borrower_whitelisted(e: Env, borrower: Address) -> bool {
        is_whitelisted(&e, &borrower)
    }

    pub fn set_templates(e: Env, templates: Templates) -> Result<(), LendingError> {
        require_owner(&e)?;
        write_templates(&e, &templates);
        emit_templates_set(&e);
        Ok(())
    }

    pub fn templates(e: Env) -> Result<Templates, LendingError> {
        read_templates(&e)
    }

    /// A whitelisted borrower asks for a loan. Creates the loan and its escrow, unapproved.
    pub fn create_proposal(
        e: Env,
        borrower: Address,
        proposal: Proposal,
        fund_asset: Asset,
        collateral_asset: Asset,
    ) -> Result<ProposalRecord, LendingError> {
        borrower.require_auth();
        if !is_whitelisted(&e, &borrower) {
            return Err(LendingError::NotWhitelisted);
        }
        proposal.validate()?;
        let config = read_config(&e)?;
        let templates = read_templates(&e)?;

        let (index, record) = create_pair(
            &e,
            &templates,
            &config,
            &borrower,
            &proposal,
            &fund_asset,
            &collateral_asset,
        );
        log!(&e, "proposal created", index);
        emit_proposal_created(&e, index, &record);
        Ok(record)
    }

    pub fn loan_count(e: Env) -> u32 {
        read_loan_count(&e)
    }

    pub fn loan_at(e: Env, index: u32) -> Option<ProposalRecord> {
        read_proposal(&e, index)
    }

    /// Pulls `amount` of `asset` from `payer` into the treasury and credits the fee balance.
    pub fn record_fee(
        e: Env,
        payer: Address,
        asset: Asset,
        amount: i128,
    ) -> Result<(), LendingError> {
        payer.require_auth();
        if amount <= 0 {
            return Err(LendingError::InvalidAmount);
        }
        let config = read_config(&e)?;

        AnyAsset::new(&e, &asset, &config.native_asset).transfer_in(&payer, amount);

        write_fee_balance(&e, &asset, read_fee_balance(&e, &asset) + amount);
        emit_fee_recorded(&e, &payer, &asset, amount);
        Ok(())
    }

    pub fn fee_balance(e: Env, asset: Asset) -> i128 {
        read_fee_balance(&e, &asset)
    }

    pub fn withdraw_fees(
        e: Env,
        asset: Asset,
        to: Address,
        amount: i128,
    ) -> Result<(), LendingError> {
        require_owner(&e)?;
        if amount <= 0 {
            return Err(LendingError::InvalidAmount);
        }
        let balance = read_fee_balance(&e, &asset);
        if amount > balance {
            return Err(LendingError::InsufficientFees);
        }
        let config = read_config(&e)?;

        write_fee_balance(&e, &asset, balance - amount);
        AnyAsset::new(&e, &asset, &config.native_asset).transfer_out(&to, amount);
        emit_fee_withdrawn(&e, &to, &asset, amount);
        Ok(())
    }
}

//! Instantiates and wires the loan/escrow pair behind each proposal.

use crate::storage_types::{
    DataKey, ProposalRecord, RegistryConfig, Templates, BALANCE_BUMP_AMOUNT,
    BALANCE_LIFETIME_THRESHOLD,
};
use soroban_lending_common::{
    Asset, EscrowClient, EscrowConfig, LoanClient, LoanParams, Proposal,
};
use soroban_sdk::{Address, BytesN, Env};

const ESCROW_SALT_TAG: u8 = 0;
const LOAN_SALT_TAG: u8 = 1;

fn salt(e: &Env, index: u32, tag: u8) -> BytesN<32> {
    let mut bytes = [0u8; 32];
    bytes[..4].copy_from_slice(&index.to_be_bytes());
    bytes[4] = tag;
    BytesN::from_array(e, &bytes)
}

pub fn read_loan_count(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get(&DataKey::LoanCount)
        .unwrap_or(0u32)
}

pub fn read_proposal(e: &Env, index: u32) -> Option<ProposalRecord> {
    e.storage().persistent().get(&DataKey::Loan(index))
}

fn write_proposal(e: &Env, index: u32, record: &ProposalRecord) {
    let key = DataKey::Loan(index);
    e.storage().persistent().set(&key, record);
    e.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
    e.storage().instance().set(&DataKey::LoanCount, &(index + 1));
}

/// Deploys a fresh escrow and loan from the templates and wires them with
/// [`register_pair`]. Returns the recorded pair and its index.
pub fn create_pair(
    e: &Env,
    templates: &Templates,
    config: &RegistryConfig,
    borrower: &Address,
    proposal: &Proposal,
    fund_asset: &Asset,
    collateral_asset: &Asset,
) -> (u32, ProposalRecord) {
    let index = read_loan_count(e);

    let escrow = e
        .deployer()
        .with_current_contract(salt(e, index, ESCROW_SALT_TAG))
        .deploy(templates.escrow_wasm_hash.clone());
    let loan = e
        .deployer()
        .with_current_contract(salt(e, index, LOAN_SALT_TAG))
        .deploy(templates.loan_wasm_hash.clone());

    let record = ProposalRecord {
        borrower: borrower.clone(),
        loan,
        escrow,
        fund_asset: fund_asset.clone(),
        collateral_asset: collateral_asset.clone(),
    };
    (register_pair(e, config, proposal, &record), record)
}

/// Points the escrow at the loan as its only controller, hands the loan its proposal with
/// the current contract as registry, and records the pair under the next index.
pub fn register_pair(
    e: &Env,
    config: &RegistryConfig,
    proposal: &Proposal,
    record: &ProposalRecord,
) -> u32 {
    let index = read_loan_count(e);

    EscrowClient::new(e, &record.escrow).initialize(&EscrowConfig {
        controller: record.loan.clone(),
        fund_asset: record.fund_asset.clone(),
        collateral_asset: record.collateral_asset.clone(),
        native_asset: config.native_asset.clone(),
    });
    LoanClient::new(e, &record.loan).initialize(
        &LoanParams {
            registry: e.current_contract_address(),
            borrower: record.borrower.clone(),
            escrow: record.escrow.clone(),
            fund_asset: record.fund_asset.clone(),
            collateral_asset: record.collateral_asset.clone(),
            approval_mode: config.approval_mode,
        },
        proposal,
    );

    write_proposal(e, index, record);
    index
}

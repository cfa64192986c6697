use soroban_lending_common::{ApprovalMode, Asset};
use soroban_sdk::{contracttype, Address, BytesN};

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) const BALANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const BALANCE_LIFETIME_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistryConfig {
    /// Stellar Asset Contract standing in for `Asset::Native`.
    pub native_asset: Address,
    /// Approval behaviour given to every loan the registry creates.
    pub approval_mode: ApprovalMode,
}

/// Wasm hashes the factory instantiates for each proposal.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Templates {
    pub loan_wasm_hash: BytesN<32>,
    pub escrow_wasm_hash: BytesN<32>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalRecord {
    pub borrower: Address,
    pub loan: Address,
    pub escrow: Address,
    pub fund_asset: Asset,
    pub collateral_asset: Asset,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Owner,
    Config,
    Templates,
    Whitelist(Address),
    Fee(Asset),
    LoanCount,
    Loan(u32),
}

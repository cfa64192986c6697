use soroban_lending_common::{EscrowConfig, EscrowLedger, LendingError};
use soroban_sdk::{Address, Env};

use crate::storage_types::{
    DataKey, BALANCE_BUMP_AMOUNT, BALANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT,
    INSTANCE_LIFETIME_THRESHOLD,
};

pub fn has_config(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Config)
}

pub fn read_config(e: &Env) -> Result<EscrowConfig, LendingError> {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(LendingError::NotInitialized)
}

pub fn write_config(e: &Env, config: &EscrowConfig) {
    e.storage().instance().set(&DataKey::Config, config);
}

pub fn read_ledger(e: &Env) -> EscrowLedger {
    e.storage()
        .instance()
        .get(&DataKey::Ledger)
        .unwrap_or_default()
}

pub fn write_ledger(e: &Env, ledger: &EscrowLedger) {
    e.storage().instance().set(&DataKey::Ledger, ledger);
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn read_deposit(e: &Env, lender: &Address) -> i128 {
    let key = DataKey::Deposit(lender.clone());
    if let Some(amount) = e.storage().persistent().get::<DataKey, i128>(&key) {
        e.storage()
            .persistent()
            .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
        amount
    } else {
        0
    }
}

pub fn write_deposit(e: &Env, lender: &Address, amount: i128) {
    let key = DataKey::Deposit(lender.clone());
    e.storage().persistent().set(&key, &amount);
    e.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn is_claimed(e: &Env, lender: &Address) -> bool {
    e.storage()
        .persistent()
        .get(&DataKey::Claimed(lender.clone()))
        .unwrap_or(false)
}

pub fn mark_claimed(e: &Env, lender: &Address) {
    let key = DataKey::Claimed(lender.clone());
    e.storage().persistent().set(&key, &true);
    e.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

use crate::storage_types::{
    DataKey, RegistryConfig, Templates, BALANCE_BUMP_AMOUNT, BALANCE_LIFETIME_THRESHOLD,
};
use soroban_lending_common::LendingError;
use soroban_sdk::{Address, Env};

pub fn has_owner(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Owner)
}

pub fn read_owner(e: &Env) -> Result<Address, LendingError> {
    e.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(LendingError::NotInitialized)
}

pub fn write_owner(e: &Env, id: &Address) {
    e.storage().instance().set(&DataKey::Owner, id);
}

/// Loads the owner and requires its authorization for the current call.
pub fn require_owner(e: &Env) -> Result<Address, LendingError> {
    let owner = read_owner(e)?;
    owner.require_auth();
    Ok(owner)
}

pub fn read_config(e: &Env) -> Result<RegistryConfig, LendingError> {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(LendingError::NotInitialized)
}

pub fn write_config(e: &Env, config: &RegistryConfig) {
    e.storage().instance().set(&DataKey::Config, config);
}

pub fn read_templates(e: &Env) -> Result<Templates, LendingError> {
    e.storage()
        .instance()
        .get(&DataKey::Templates)
        .ok_or(LendingError::TemplatesNotSet)
}

pub fn write_templates(e: &Env, templates: &Templates) {
    e.storage().instance().set(&DataKey::Templates, templates);
}

pub fn is_whitelisted(e: &Env, member: &Address) -> bool {
    e.storage()
        .persistent()
        .get(&DataKey::Whitelist(member.clone()))
        .unwrap_or(false)
}

pub fn add_to_whitelist(e: &Env, member: &Address) {
    let key = DataKey::Whitelist(member.clone());
    e.storage().persistent().set(&key, &true);
    e.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn remove_from_whitelist(e: &Env, member: &Address) {
    e.storage()
        .persistent()
        .remove(&DataKey::Whitelist(member.clone()));
}

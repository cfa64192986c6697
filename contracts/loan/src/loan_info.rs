use crate::storage_types::{DataKey, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};
use soroban_lending_common::{LendingError, LoanParams, LoanState, LoanTerms};
use soroban_sdk::Env;

pub fn has_params(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Params)
}

pub fn read_params(e: &Env) -> Result<LoanParams, LendingError> {
    e.storage()
        .instance()
        .get(&DataKey::Params)
        .ok_or(LendingError::NotInitialized)
}

pub fn write_params(e: &Env, params: &LoanParams) {
    e.storage().instance().set(&DataKey::Params, params);
}

pub fn read_terms(e: &Env) -> Result<LoanTerms, LendingError> {
    e.storage()
        .instance()
        .get(&DataKey::Terms)
        .ok_or(LendingError::NotInitialized)
}

pub fn write_terms(e: &Env, terms: &LoanTerms) {
    e.storage().instance().set(&DataKey::Terms, terms);
}

pub fn read_state(e: &Env) -> LoanState {
    e.storage()
        .instance()
        .get(&DataKey::State)
        .unwrap_or_default()
}

pub fn write_state(e: &Env, state: &LoanState) {
    e.storage().instance().set(&DataKey::State, state);
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

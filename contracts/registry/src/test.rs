#![cfg(test)]
extern crate std;

use log::info;

use crate::{Registry, RegistryClient, RegistryConfig, Templates};
use soroban_lending_common::{ApprovalMode, Asset, LendingError, Proposal};
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{
    testutils::{Address as _, AuthorizedFunction, AuthorizedInvocation},
    vec, Address, BytesN, Env, IntoVal, Symbol,
};

fn create_registry<'a>(e: &Env, owner: &Address, native: &Address) -> RegistryClient<'a> {
    let registry = RegistryClient::new(e, &e.register_contract(None, Registry {}));
    registry.initialize(
        owner,
        &RegistryConfig {
            native_asset: native.clone(),
            approval_mode: ApprovalMode::Once,
        },
    );
    registry
}

fn proposal() -> Proposal {
    Proposal {
        loan_limit: 600,
        deposit_start_date: 1000,
        loan_duration_in_days: 30,
        borrower_apy: 2000,
    }
}

#[test]
fn test_initialize() {
    let e = Env::default();
    e.mock_all_auths();
    let owner = Address::generate(&e);
    let native = Address::generate(&e);
    let registry = create_registry(&e, &owner, &native);

    assert_eq!(registry.owner(), owner);
    assert_eq!(registry.config().native_asset, native);
    assert_eq!(registry.loan_count(), 0);
    assert_eq!(registry.loan_at(&0), None);
    assert_eq!(
        registry.try_initialize(
            &owner,
            &RegistryConfig {
                native_asset: native,
                approval_mode: ApprovalMode::Amendable,
            }
        ),
        Err(Ok(LendingError::AlreadyInitialized))
    );
}

#[test]
fn test_add_and_remove_borrowers() {
    let e = Env::default();
    e.mock_all_auths();
    let owner = Address::generate(&e);
    let user1 = Address::generate(&e);
    let user2 = Address::generate(&e);
    let registry = create_registry(&e, &owner, &Address::generate(&e));

    assert!(!registry.is_borrower_whitelisted(&user1));
    registry.add_borrowers(&vec![&e, user1.clone(), user2.clone()]);
    assert_eq!(
        e.auths(),
        std::vec![(
            owner.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    registry.address.clone(),
                    Symbol::new(&e, "add_borrowers"),
                    (vec![&e, user1.clone(), user2.clone()],).into_val(&e),
                )),
                sub_invocations: std::vec![]
            }
        )]
    );
    assert!(registry.is_borrower_whitelisted(&user1));
    assert!(registry.is_borrower_whitelisted(&user2));

    registry.remove_borrowers(&vec![&e, user1.clone()]);
    assert!(!registry.is_borrower_whitelisted(&user1));
    assert!(registry.is_borrower_whitelisted(&user2));
}

#[test]
fn test_only_owner_manages_whitelist() {
    let e = Env::default();
    let owner = Address::generate(&e);
    let user1 = Address::generate(&e);
    let registry = create_registry(&e, &owner, &Address::generate(&e));

    // nobody signed for the owner
    assert!(registry
        .try_add_borrowers(&vec![&e, user1.clone()])
        .is_err());
    assert!(registry.try_set_owner(&user1).is_err());
    assert!(!registry.is_borrower_whitelisted(&user1));
    assert_eq!(registry.owner(), owner);
}

#[test]
fn test_set_owner() {
    let e = Env::default();
    e.mock_all_auths();
    let owner = Address::generate(&e);
    let user1 = Address::generate(&e);
    let registry = create_registry(&e, &owner, &Address::generate(&e));

    registry.set_owner(&user1);
    assert_eq!(registry.owner(), user1);
}

#[test]
fn test_templates() {
    let e = Env::default();
    e.mock_all_auths();
    let registry = create_registry(&e, &Address::generate(&e), &Address::generate(&e));
    assert_eq!(
        registry.try_templates(),
        Err(Ok(LendingError::TemplatesNotSet))
    );

    let templates = Templates {
        loan_wasm_hash: BytesN::from_array(&e, &[1; 32]),
        escrow_wasm_hash: BytesN::from_array(&e, &[2; 32]),
    };
    registry.set_templates(&templates);
    assert_eq!(registry.templates(), templates);
}

#[test]
fn test_create_proposal_checks() {
    let e = Env::default();
    e.mock_all_auths();
    let borrower = Address::generate(&e);
    let registry = create_registry(&e, &Address::generate(&e), &Address::generate(&e));
    let fund = Asset::Token(Address::generate(&e));

    assert_eq!(
        registry.try_create_proposal(&borrower, &proposal(), &fund, &Asset::Native),
        Err(Ok(LendingError::NotWhitelisted))
    );

    registry.add_borrowers(&vec![&e, borrower.clone()]);
    let invalid = Proposal {
        loan_limit: 0,
        ..proposal()
    };
    assert_eq!(
        registry.try_create_proposal(&borrower, &invalid, &fund, &Asset::Native),
        Err(Ok(LendingError::InvalidTerms))
    );
    assert_eq!(
        registry.try_create_proposal(&borrower, &proposal(), &fund, &Asset::Native),
        Err(Ok(LendingError::TemplatesNotSet))
    );
    assert_eq!(registry.loan_count(), 0);
}

#[test]
fn test_record_and_withdraw_token_fees() {
    let _ = env_logger::builder().is_test(true).try_init();
    let e = Env::default();
    e.mock_all_auths();
    let admin = Address::generate(&e);
    let owner = Address::generate(&e);
    let payer = Address::generate(&e);
    let treasury = Address::generate(&e);
    let fund_token = e.register_stellar_asset_contract(admin);
    let registry = create_registry(&e, &owner, &Address::generate(&e));
    StellarAssetClient::new(&e, &fund_token).mint(&payer, &1000);
    let token = TokenClient::new(&e, &fund_token);
    let asset = Asset::Token(fund_token.clone());

    token.approve(&payer, &registry.address, &50, &200);
    registry.record_fee(&payer, &asset, &50);
    assert_eq!(registry.fee_balance(&asset), 50);
    assert_eq!(token.balance(&registry.address), 50);
    assert_eq!(token.balance(&payer), 950);

    assert_eq!(
        registry.try_withdraw_fees(&asset, &treasury, &51),
        Err(Ok(LendingError::InsufficientFees))
    );
    registry.withdraw_fees(&asset, &treasury, &30);
    info!("fees left: {}", registry.fee_balance(&asset));
    assert_eq!(registry.fee_balance(&asset), 20);
    assert_eq!(token.balance(&treasury), 30);
    assert_eq!(
        registry.try_record_fee(&payer, &asset, &0),
        Err(Ok(LendingError::InvalidAmount))
    );
}

#[test]
fn test_record_native_fees() {
    let e = Env::default();
    e.mock_all_auths();
    let admin = Address::generate(&e);
    let payer = Address::generate(&e);
    let native = e.register_stellar_asset_contract(admin);
    let registry = create_registry(&e, &Address::generate(&e), &native);
    StellarAssetClient::new(&e, &native).mint(&payer, &1000);

    registry.record_fee(&payer, &Asset::Native, &70);
    assert_eq!(registry.fee_balance(&Asset::Native), 70);
    assert_eq!(TokenClient::new(&e, &native).balance(&registry.address), 70);
    // fee balances are kept per asset
    assert_eq!(registry.fee_balance(&Asset::Token(native.clone())), 0);
}

#![cfg(test)]
extern crate std;

use crate::{
    days_to_seconds, interest, pro_rata_share, required_collateral, split_interest, LendingError,
    LoanPhase, LoanState, LoanTerms, Proposal, SECONDS_PER_DAY,
};
use soroban_sdk::Env;

const ETHER: i128 = 1_000_000_000_000_000_000;

fn scenario_terms() -> LoanTerms {
    LoanTerms {
        loan_limit: 600,
        deposit_start_date: 3 * SECONDS_PER_DAY,
        collateral_deposit_start_date: 10 * SECONDS_PER_DAY,
        loan_duration_in_days: 30,
        borrower_apy: 2000,
        lender_interest_apy: 1000,
        collateral_ratio: 4000,
        collateral_asset_price_ratio: 10000,
    }
}

#[test]
fn test_interest_truncates() {
    let e = Env::default();
    // 600 * 1000 * 30 / 3_650_000 = 4.93
    assert_eq!(interest(&e, 600, 1000, 30), Ok(4));
    // 600 * 2000 * 30 / 3_650_000 = 9.86
    assert_eq!(interest(&e, 600, 2000, 30), Ok(9));
    assert_eq!(interest(&e, 0, 2000, 30), Ok(0));
    assert_eq!(interest(&e, 1_000_0000000, 2000, 365), Ok(200_0000000));
}

#[test]
fn test_split_interest() {
    let e = Env::default();
    let split = split_interest(&e, 600, &scenario_terms()).unwrap();
    assert_eq!(split.borrower_interest, 9);
    assert_eq!(split.lender_interest, 4);
    assert_eq!(split.spread, 5);
}

#[test]
fn test_spread_never_negative() {
    let e = Env::default();
    let mut terms = scenario_terms();
    for principal in [1i128, 7, 599, 600, 12_345_678, 1_000_0000000, 600 * ETHER] {
        for days in [1u32, 29, 30, 365, 730] {
            for (lender, borrower) in [(0u32, 1u32), (999, 1000), (1000, 1000), (1, 10_000)] {
                terms.loan_duration_in_days = days;
                terms.lender_interest_apy = lender;
                terms.borrower_apy = borrower;
                assert!(split_interest(&e, principal, &terms).unwrap().spread >= 0);
            }
        }
    }
}

#[test]
fn test_required_collateral() {
    let e = Env::default();
    assert_eq!(required_collateral(&e, 600, 4000, 10000), Ok(240));
    // 1000 units at 30% with collateral worth half as much per unit
    assert_eq!(required_collateral(&e, 1000, 3000, 5000), Ok(150));
    assert_eq!(required_collateral(&e, 1000, 3000, 20000), Ok(600));
    assert_eq!(
        required_collateral(&e, 600 * ETHER, 4000, 10000),
        Ok(240 * ETHER)
    );
}

#[test]
fn test_pro_rata_share() {
    let e = Env::default();
    assert_eq!(pro_rata_share(&e, 100, 600, 604), Ok(100));
    assert_eq!(pro_rata_share(&e, 200, 600, 604), Ok(201));
    assert_eq!(pro_rata_share(&e, 300, 600, 604), Ok(302));
    assert_eq!(pro_rata_share(&e, 100, 0, 604), Ok(0));
}

#[test]
fn test_eighteen_decimal_amounts() {
    let e = Env::default();
    let lender_interest = interest(&e, 600 * ETHER, 1000, 30).unwrap();
    assert_eq!(lender_interest, 4_931_506_849_315_068_493);
    let pool = 600 * ETHER + lender_interest;
    let shares = [
        pro_rata_share(&e, 100 * ETHER, 600 * ETHER, pool).unwrap(),
        pro_rata_share(&e, 200 * ETHER, 600 * ETHER, pool).unwrap(),
        pro_rata_share(&e, 300 * ETHER, 600 * ETHER, pool).unwrap(),
    ];
    assert_eq!(shares[0], 100 * ETHER + lender_interest / 6);
    assert!(shares.iter().sum::<i128>() <= pool);
    assert!(pool - shares.iter().sum::<i128>() < 3);
}

#[test]
fn test_result_beyond_i128() {
    let e = Env::default();
    assert_eq!(
        required_collateral(&e, i128::MAX, 10000, 20000),
        Err(LendingError::AmountOverflow)
    );
}

#[test]
fn test_windows() {
    let terms = scenario_terms();
    assert_eq!(terms.collateral_deposit_end_date(), 13 * SECONDS_PER_DAY);
    assert_eq!(terms.return_due_date(), 40 * SECONDS_PER_DAY);
    assert_eq!(terms.settlement_date(), 42 * SECONDS_PER_DAY);
    assert_eq!(days_to_seconds(2), 172_800);
}

#[test]
fn test_terms_validation() {
    assert_eq!(scenario_terms().validate(), Ok(()));

    let mut terms = scenario_terms();
    terms.lender_interest_apy = terms.borrower_apy + 1;
    assert_eq!(terms.validate(), Err(LendingError::InvalidTerms));

    let mut terms = scenario_terms();
    terms.loan_limit = 0;
    assert_eq!(terms.validate(), Err(LendingError::InvalidTerms));

    let mut terms = scenario_terms();
    terms.collateral_deposit_start_date = terms.deposit_start_date;
    assert_eq!(terms.validate(), Err(LendingError::InvalidTerms));

    // the settlement date must still be a valid timestamp
    let mut terms = scenario_terms();
    terms.collateral_deposit_start_date = u64::MAX - SECONDS_PER_DAY;
    assert_eq!(terms.validate(), Err(LendingError::InvalidTerms));

    let proposal = Proposal {
        loan_limit: 600,
        deposit_start_date: 10,
        loan_duration_in_days: 30,
        borrower_apy: 2000,
    };
    assert_eq!(proposal.validate(), Ok(()));
    let from_proposal = LoanTerms::from_proposal(&proposal);
    assert_eq!(from_proposal.loan_limit, 600);
    assert_eq!(from_proposal.lender_interest_apy, 0);
    assert_eq!(from_proposal.validate(), Err(LendingError::InvalidTerms));

    let empty = Proposal {
        loan_limit: 0,
        ..proposal
    };
    assert_eq!(empty.validate(), Err(LendingError::InvalidTerms));
}

#[test]
fn test_phase() {
    let terms = scenario_terms();
    let day = SECONDS_PER_DAY;
    let mut state = LoanState::default();
    assert_eq!(LoanPhase::at(0, &terms, &state), LoanPhase::Proposed);

    state.approved = true;
    assert_eq!(LoanPhase::at(0, &terms, &state), LoanPhase::Approved);
    assert_eq!(LoanPhase::at(3 * day, &terms, &state), LoanPhase::Funding);
    assert_eq!(LoanPhase::at(10 * day, &terms, &state), LoanPhase::CollateralPending);
    assert_eq!(LoanPhase::at(42 * day, &terms, &state), LoanPhase::Cancelled);

    state.collateral_deposited = true;
    state.drawn = true;
    assert_eq!(LoanPhase::at(11 * day, &terms, &state), LoanPhase::Drawn);
    assert_eq!(LoanPhase::at(42 * day, &terms, &state), LoanPhase::Defaulted);

    state.returned = true;
    assert_eq!(LoanPhase::at(40 * day, &terms, &state), LoanPhase::Returned);
    assert_eq!(LoanPhase::at(42 * day, &terms, &state), LoanPhase::Settled);
}

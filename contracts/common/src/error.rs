use soroban_sdk::contracterror;

/// Failure codes shared by the registry, loan and escrow contracts. Codes stay stable across
/// cross-contract calls, so a loan that fails inside its escrow reports the escrow's code.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LendingError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    NotWhitelisted = 4,
    CurrentlyUnavailable = 5,
    LoanLimitExceeded = 6,
    NotApproved = 7,
    AlreadyApproved = 8,
    CollateralRequired = 9,
    CollateralAlreadyDeposited = 10,
    NotBorrowedYet = 11,
    AlreadyBorrowed = 12,
    AlreadyReturned = 13,
    LoanDefaulted = 14,
    LoanReturned = 15,
    AlreadyClaimed = 16,
    NoFunds = 17,
    NoCollateral = 18,
    InvalidAmount = 19,
    InvalidTerms = 20,
    TemplatesNotSet = 21,
    InsufficientFees = 22,
    AmountOverflow = 23,
}

#![no_std]

mod contract;
mod event;
mod loan_info;
mod storage_types;

pub use crate::contract::{Loan, LoanClient};

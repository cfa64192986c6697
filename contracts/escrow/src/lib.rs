#![no_std]

mod contract;
mod ledger;
mod storage_types;

pub use crate::contract::{Escrow, EscrowClient};

#![no_std]

mod admin;
mod contract;
mod event;
mod factory;
mod storage_types;
mod test;
mod treasury;

pub use crate::contract::{Registry, RegistryClient};
pub use crate::storage_types::{ProposalRecord, RegistryConfig, Templates};

#[cfg(any(test, feature = "testutils"))]
pub use crate::factory::register_pair;

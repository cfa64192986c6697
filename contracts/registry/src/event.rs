use crate::storage_types::ProposalRecord;
use soroban_lending_common::Asset;
use soroban_sdk::{symbol_short, Address, Env};

/// Emits an event when a borrower joins the whitelist.
pub fn emit_borrower_added(e: &Env, borrower: &Address) {
    e.events()
        .publish((symbol_short!("wl_add"), borrower.clone()), ());
}

/// Emits an event when a borrower leaves the whitelist.
pub fn emit_borrower_removed(e: &Env, borrower: &Address) {
    e.events()
        .publish((symbol_short!("wl_rm"), borrower.clone()), ());
}

pub fn emit_templates_set(e: &Env) {
    e.events().publish((symbol_short!("templates"),), ());
}

/// Emits an event when a loan/escrow pair has been created for a proposal.
pub fn emit_proposal_created(e: &Env, index: u32, record: &ProposalRecord) {
    e.events().publish(
        (symbol_short!("proposal"), record.borrower.clone()),
        (index, record.loan.clone(), record.escrow.clone()),
    );
}

/// Emits an event when protocol spread lands in the treasury.
pub fn emit_fee_recorded(e: &Env, payer: &Address, asset: &Asset, amount: i128) {
    e.events().publish(
        (symbol_short!("fee"), payer.clone()),
        (asset.clone(), amount),
    );
}

/// Emits an event when the owner takes fees out of the treasury.
pub fn emit_fee_withdrawn(e: &Env, recipient: &Address, asset: &Asset, amount: i128) {
    e.events().publish(
        (symbol_short!("fee_wd"), recipient.clone()),
        (asset.clone(), amount),
    );
}

use soroban_sdk::{token, Address, Env};

use crate::types::Asset;

/// Moves one asset in and out of the calling contract.
pub trait AssetHandle {
    fn transfer_in(&self, payer: &Address, amount: i128);
    fn transfer_out(&self, recipient: &Address, amount: i128);
    fn balance(&self) -> i128;
}

/// The native unit, reached through its Stellar Asset Contract. The payer authorizes the
/// exact value as part of the invocation that moves it.
pub struct NativeAsset<'a> {
    client: token::Client<'a>,
    custodian: Address,
}

impl<'a> NativeAsset<'a> {
    pub fn new(env: &Env, contract: &Address) -> Self {
        Self {
            client: token::Client::new(env, contract),
            custodian: env.current_contract_address(),
        }
    }
}

impl AssetHandle for NativeAsset<'_> {
    fn transfer_in(&self, payer: &Address, amount: i128) {
        self.client.transfer(payer, &self.custodian, &amount);
    }

    fn transfer_out(&self, recipient: &Address, amount: i128) {
        self.client.transfer(&self.custodian, recipient, &amount);
    }

    fn balance(&self) -> i128 {
        self.client.balance(&self.custodian)
    }
}

/// A token contract. The payer grants the custodian an allowance beforehand and the
/// custodian pulls the funds with `transfer_from`.
pub struct TokenAsset<'a> {
    client: token::Client<'a>,
    custodian: Address,
}

impl<'a> TokenAsset<'a> {
    pub fn new(env: &Env, contract: &Address) -> Self {
        Self {
            client: token::Client::new(env, contract),
            custodian: env.current_contract_address(),
        }
    }
}

impl AssetHandle for TokenAsset<'_> {
    fn transfer_in(&self, payer: &Address, amount: i128) {
        self.client
            .transfer_from(&self.custodian, payer, &self.custodian, &amount);
    }

    fn transfer_out(&self, recipient: &Address, amount: i128) {
        self.client.transfer(&self.custodian, recipient, &amount);
    }

    fn balance(&self) -> i128 {
        self.client.balance(&self.custodian)
    }
}

pub enum AnyAsset<'a> {
    Native(NativeAsset<'a>),
    Token(TokenAsset<'a>),
}

impl<'a> AnyAsset<'a> {
    /// Resolves `asset`, using `native_asset` as the contract behind `Asset::Native`.
    pub fn new(env: &Env, asset: &Asset, native_asset: &Address) -> Self {
        match asset {
            Asset::Native => AnyAsset::Native(NativeAsset::new(env, native_asset)),
            Asset::Token(contract) => AnyAsset::Token(TokenAsset::new(env, contract)),
        }
    }
}

impl AssetHandle for AnyAsset<'_> {
    fn transfer_in(&self, payer: &Address, amount: i128) {
        match self {
            AnyAsset::Native(native) => native.transfer_in(payer, amount),
            AnyAsset::Token(token) => token.transfer_in(payer, amount),
        }
    }

    fn transfer_out(&self, recipient: &Address, amount: i128) {
        match self {
            AnyAsset::Native(native) => native.transfer_out(recipient, amount),
            AnyAsset::Token(token) => token.transfer_out(recipient, amount),
        }
    }

    fn balance(&self) -> i128 {
        match self {
            AnyAsset::Native(native) => native.balance(),
            AnyAsset::Token(token) => token.balance(),
        }
    }
}

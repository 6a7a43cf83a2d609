//! Test modules for the oracle-quorum prediction market contract.

use crate::contract::{PredictionMarketContract, PredictionMarketContractClient};
use soroban_sdk::{symbol_short, testutils::Address as _, Address, Env, Symbol, Vec};

mod initialization;
mod persistence;

/// Deploys the contract and initializes it with `oracle_count` fresh oracles.
pub(crate) fn setup(env: &Env, oracle_count: u32) -> (PredictionMarketContractClient<'_>, Address, Vec<Address>) {
    let contract_id = env.register(PredictionMarketContract, ());
    let client = PredictionMarketContractClient::new(env, &contract_id);

    let admin = Address::generate(env);
    let mut oracles = Vec::new(env);
    for _ in 0..oracle_count {
        oracles.push_back(Address::generate(env));
    }

    env.mock_all_auths();
    client.initialize(&admin, &oracles);

    (client, admin, oracles)
}

pub(crate) fn yes_no(env: &Env) -> Vec<Symbol> {
    Vec::from_array(env, [symbol_short!("YES"), symbol_short!("NO")])
}

/// Generates a user holding the initial balance.
pub(crate) fn funded_user(env: &Env, client: &PredictionMarketContractClient) -> Address {
    let user = Address::generate(env);
    client.mint_initial(&user);
    user
}

//! Tests for contract initialization, the oracle registry and token minting.

use super::setup;
use crate::constants::{INITIAL_BALANCE, MAX_ORACLES};
use crate::contract::{PredictionMarketContract, PredictionMarketContractClient};
use crate::errors::ContractError;
use soroban_sdk::{testutils::Address as _, Address, Env, Vec};

#[test]
fn test_initialize() {
    let env = Env::default();
    let contract_id = env.register(PredictionMarketContract, ());
    let client = PredictionMarketContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let oracle1 = Address::generate(&env);
    let oracle2 = Address::generate(&env);
    let oracle3 = Address::generate(&env);
    let oracles = Vec::from_array(&env, [oracle1.clone(), oracle2.clone(), oracle3.clone()]);

    env.mock_all_auths();

    client.initialize(&admin, &oracles);

    assert_eq!(client.get_admin(), Some(admin));
    assert_eq!(client.get_oracles(), oracles);
    assert_eq!(client.quorum_threshold(), 2);
    assert!(client.is_oracle(&oracle1));
    assert!(client.is_oracle(&oracle2));
    assert!(client.is_oracle(&oracle3));
}

#[test]
fn test_initialize_twice_fails() {
    let env = Env::default();
    let (client, admin, oracles) = setup(&env, 3);

    let result = client.try_initialize(&admin, &oracles);
    assert_eq!(result, Err(Ok(ContractError::AlreadyInitialized)));

    // A different admin cannot take over either
    let other = Address::generate(&env);
    let result = client.try_initialize(&other, &oracles);
    assert_eq!(result, Err(Ok(ContractError::AlreadyInitialized)));
    assert_eq!(client.get_admin(), Some(admin));
}

#[test]
fn test_initialize_empty_oracle_set_fails() {
    let env = Env::default();
    let contract_id = env.register(PredictionMarketContract, ());
    let client = PredictionMarketContractClient::new(&env, &contract_id);
    let admin = Address::generate(&env);

    env.mock_all_auths();

    let result = client.try_initialize(&admin, &Vec::new(&env));
    assert_eq!(result, Err(Ok(ContractError::InvalidOracleSet)));

    // Nothing was stored, so a valid set can still be registered
    assert_eq!(client.get_admin(), None);
    let oracles = Vec::from_array(&env, [Address::generate(&env)]);
    client.initialize(&admin, &oracles);
    assert_eq!(client.quorum_threshold(), 1);
}

#[test]
fn test_initialize_too_many_oracles_fails() {
    let env = Env::default();
    let contract_id = env.register(PredictionMarketContract, ());
    let client = PredictionMarketContractClient::new(&env, &contract_id);
    let admin = Address::generate(&env);

    let mut oracles = Vec::new(&env);
    for _ in 0..(MAX_ORACLES + 1) {
        oracles.push_back(Address::generate(&env));
    }

    env.mock_all_auths();

    let result = client.try_initialize(&admin, &oracles);
    assert_eq!(result, Err(Ok(ContractError::InvalidOracleSet)));
}

#[test]
fn test_initialize_duplicate_oracle_fails() {
    let env = Env::default();
    let contract_id = env.register(PredictionMarketContract, ());
    let client = PredictionMarketContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let oracle1 = Address::generate(&env);
    let oracle2 = Address::generate(&env);
    let oracles = Vec::from_array(&env, [oracle1.clone(), oracle2, oracle1.clone()]);

    env.mock_all_auths();

    let result = client.try_initialize(&admin, &oracles);
    assert_eq!(result, Err(Ok(ContractError::DuplicateOracle)));
    assert!(!client.is_oracle(&oracle1));
    assert_eq!(client.get_admin(), None);
}

#[test]
fn test_quorum_is_strict_majority() {
    // (oracle count, expected quorum)
    let cases = [(1, 1), (2, 2), (3, 2), (4, 3), (5, 3), (6, 4), (7, 4)];

    for (count, quorum) in cases {
        let env = Env::default();
        let (client, _, _) = setup(&env, count);
        assert_eq!(client.quorum_threshold(), quorum);
    }
}

#[test]
fn test_quorum_before_initialize_fails() {
    let env = Env::default();
    let contract_id = env.register(PredictionMarketContract, ());
    let client = PredictionMarketContractClient::new(&env, &contract_id);

    let result = client.try_quorum_threshold();
    assert_eq!(result, Err(Ok(ContractError::NotInitialized)));
    assert_eq!(client.get_oracles().len(), 0);
}

#[test]
fn test_non_member_is_not_oracle() {
    let env = Env::default();
    let (client, admin, _) = setup(&env, 3);

    let stranger = Address::generate(&env);
    assert!(!client.is_oracle(&stranger));
    assert!(!client.is_oracle(&admin));
}

#[test]
fn test_mint_initial() {
    let env = Env::default();
    let contract_id = env.register(PredictionMarketContract, ());
    let client = PredictionMarketContractClient::new(&env, &contract_id);
    let user = Address::generate(&env);

    env.mock_all_auths();

    let balance = client.mint_initial(&user);
    assert_eq!(balance, INITIAL_BALANCE);
    assert_eq!(client.balance(&user), INITIAL_BALANCE);
}

#[test]
fn test_mint_initial_only_once() {
    let env = Env::default();
    let contract_id = env.register(PredictionMarketContract, ());
    let client = PredictionMarketContractClient::new(&env, &contract_id);
    let user = Address::generate(&env);

    env.mock_all_auths();

    assert_eq!(client.mint_initial(&user), INITIAL_BALANCE);

    // Second call returns the existing balance instead of minting more
    assert_eq!(client.mint_initial(&user), INITIAL_BALANCE);
    assert_eq!(client.balance(&user), INITIAL_BALANCE);
}

#[test]
fn test_balance_for_new_user() {
    let env = Env::default();
    let contract_id = env.register(PredictionMarketContract, ());
    let client = PredictionMarketContractClient::new(&env, &contract_id);
    let user = Address::generate(&env);

    assert_eq!(client.balance(&user), 0);
}

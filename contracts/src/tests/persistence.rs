//! Tests for storage liveness of long-running markets.

use super::{funded_user, setup, yes_no};
use crate::constants::BUMP_AMOUNT;
use crate::types::{DataKey, MarketState};
use soroban_sdk::{
    symbol_short,
    testutils::{storage::Persistent as _, Ledger as _},
    Address, Env, Vec,
};

fn ttl(env: &Env, contract: &Address, key: &DataKey) -> u32 {
    env.as_contract(contract, || env.storage().persistent().get_ttl(key))
}

fn registry_keys(oracles: &Vec<Address>) -> [DataKey; 5] {
    [
        DataKey::Admin,
        DataKey::OracleSet,
        DataKey::Oracle(oracles.get(0).unwrap()),
        DataKey::Oracle(oracles.get(1).unwrap()),
        DataKey::Oracle(oracles.get(2).unwrap()),
    ]
}

#[test]
fn test_market_activity_keeps_registry_live() {
    let env = Env::default();
    let (client, _, oracles) = setup(&env, 3);
    let market_id = client.create_market(&yes_no(&env), &2_000_000);
    let alice = funded_user(&env, &client);

    env.ledger().with_mut(|li| {
        li.sequence_number = 400_000;
    });
    client.stake(&alice, &market_id, &symbol_short!("YES"), &100);

    assert_eq!(ttl(&env, &client.address, &DataKey::Market(market_id)), BUMP_AMOUNT);
    for key in registry_keys(&oracles).iter() {
        assert_eq!(ttl(&env, &client.address, key), BUMP_AMOUNT);
    }

    // Past the TTL granted at initialize; reports still reach live entries
    env.ledger().with_mut(|li| {
        li.sequence_number = 700_000;
    });
    client.submit_report(&oracles.get(2).unwrap(), &market_id, &symbol_short!("YES"));
    client.submit_report(&oracles.get(1).unwrap(), &market_id, &symbol_short!("YES"));

    assert_eq!(client.get_market(&market_id).unwrap().state, MarketState::Resolved);
    for key in registry_keys(&oracles).iter() {
        assert_eq!(ttl(&env, &client.address, key), BUMP_AMOUNT);
    }
    assert_eq!(client.claim(&alice, &market_id), 100);
}

#[test]
fn test_reads_extend_ttl() {
    let env = Env::default();
    let (client, _, oracles) = setup(&env, 3);
    let market_id = client.create_market(&yes_no(&env), &2_000_000);
    let alice = funded_user(&env, &client);
    client.stake(&alice, &market_id, &symbol_short!("NO"), &10);

    env.ledger().with_mut(|li| {
        li.sequence_number = 300_000;
    });
    client.get_market(&market_id);
    client.balance(&alice);
    client.get_position(&market_id, &alice);

    assert_eq!(ttl(&env, &client.address, &DataKey::Market(market_id)), BUMP_AMOUNT);
    assert_eq!(ttl(&env, &client.address, &DataKey::Balance(alice.clone())), BUMP_AMOUNT);
    assert_eq!(
        ttl(&env, &client.address, &DataKey::Position(market_id, alice.clone())),
        BUMP_AMOUNT
    );
    for key in registry_keys(&oracles).iter() {
        assert_eq!(ttl(&env, &client.address, key), BUMP_AMOUNT);
    }
}

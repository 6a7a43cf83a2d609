//! Typed access to persistent storage.
//!
//! Every record lives under its own `DataKey`, so markets, positions and
//! reports are single-key reads. Keys are bumped on access to keep them
//! live for the lifetime of the market. Reading a market also bumps the
//! admin and oracle registry it depends on.

use soroban_sdk::{Address, Env, IntoVal, TryFromVal, Val};

use crate::constants::{BUMP_AMOUNT, BUMP_THRESHOLD};
use crate::errors::ContractError;
use crate::types::{DataKey, Market, OracleReport, OracleSet, Position};

fn bump(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, BUMP_THRESHOLD, BUMP_AMOUNT);
}

fn set<V>(env: &Env, key: &DataKey, value: &V)
where
    V: IntoVal<Env, Val>,
{
    env.storage().persistent().set(key, value);
    bump(env, key);
}

fn get<V>(env: &Env, key: &DataKey) -> Option<V>
where
    V: TryFromVal<Env, Val>,
    V::Error: core::fmt::Debug,
{
    let value: Option<V> = env.storage().persistent().get(key);
    if value.is_some() {
        bump(env, key);
    }
    value
}

fn has(env: &Env, key: &DataKey) -> bool {
    let present = env.storage().persistent().has(key);
    if present {
        bump(env, key);
    }
    present
}

/// Extends the admin, the oracle set and every membership key.
pub(crate) fn bump_registry(env: &Env) {
    let Some(oracle_set) = read_oracle_set(env) else {
        return;
    };
    bump(env, &DataKey::Admin);
    for member in oracle_set.members.iter() {
        bump(env, &DataKey::Oracle(member));
    }
}

pub(crate) fn read_admin(env: &Env) -> Option<Address> {
    get(env, &DataKey::Admin)
}

pub(crate) fn write_admin(env: &Env, admin: &Address) {
    set(env, &DataKey::Admin, admin);
}

pub(crate) fn read_oracle_set(env: &Env) -> Option<OracleSet> {
    get(env, &DataKey::OracleSet)
}

pub(crate) fn write_oracle_set(env: &Env, oracle_set: &OracleSet) {
    set(env, &DataKey::OracleSet, oracle_set);
}

pub(crate) fn is_oracle(env: &Env, address: &Address) -> bool {
    has(env, &DataKey::Oracle(address.clone()))
}

pub(crate) fn write_oracle_member(env: &Env, address: &Address) {
    set(env, &DataKey::Oracle(address.clone()), &true);
}

pub(crate) fn market_count(env: &Env) -> u64 {
    get(env, &DataKey::MarketCount).unwrap_or(0)
}

/// Reserves the next market id. Ids start at 1.
pub(crate) fn next_market_id(env: &Env) -> Result<u64, ContractError> {
    let id = market_count(env)
        .checked_add(1)
        .ok_or(ContractError::Overflow)?;
    set(env, &DataKey::MarketCount, &id);
    Ok(id)
}

/// Stored market record, without deadline evaluation.
pub(crate) fn read_market(env: &Env, market_id: u64) -> Result<Market, ContractError> {
    let market = get(env, &DataKey::Market(market_id)).ok_or(ContractError::UnknownMarket)?;
    bump_registry(env);
    Ok(market)
}

pub(crate) fn write_market(env: &Env, market: &Market) {
    set(env, &DataKey::Market(market.id), market);
}

pub(crate) fn read_position(env: &Env, market_id: u64, owner: &Address) -> Option<Position> {
    get(env, &DataKey::Position(market_id, owner.clone()))
}

pub(crate) fn write_position(env: &Env, position: &Position) {
    let key = DataKey::Position(position.market_id, position.owner.clone());
    set(env, &key, position);
}

pub(crate) fn read_report(env: &Env, market_id: u64, oracle: &Address) -> Option<OracleReport> {
    get(env, &DataKey::Report(market_id, oracle.clone()))
}

pub(crate) fn has_report(env: &Env, market_id: u64, oracle: &Address) -> bool {
    has(env, &DataKey::Report(market_id, oracle.clone()))
}

pub(crate) fn write_report(env: &Env, market_id: u64, report: &OracleReport) {
    set(env, &DataKey::Report(market_id, report.oracle.clone()), report);
}

pub(crate) fn read_balance(env: &Env, user: &Address) -> i128 {
    get(env, &DataKey::Balance(user.clone())).unwrap_or(0)
}

pub(crate) fn has_balance(env: &Env, user: &Address) -> bool {
    has(env, &DataKey::Balance(user.clone()))
}

pub(crate) fn write_balance(env: &Env, user: &Address, amount: i128) {
    set(env, &DataKey::Balance(user.clone()), &amount);
}

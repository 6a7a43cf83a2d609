//! Oracle registry: the fixed set of oracles and its quorum threshold.

use soroban_sdk::{Address, Env, Map, Vec};

use crate::constants::MAX_ORACLES;
use crate::errors::ContractError;
use crate::math::quorum_for;
use crate::storage;
use crate::types::OracleSet;

/// Stores the oracle set once. Each member also gets its own membership key.
pub(crate) fn register(env: &Env, oracles: &Vec<Address>) -> Result<OracleSet, ContractError> {
    if storage::read_oracle_set(env).is_some() {
        return Err(ContractError::AlreadyInitialized);
    }

    if oracles.is_empty() || oracles.len() > MAX_ORACLES {
        return Err(ContractError::InvalidOracleSet);
    }

    let mut seen: Map<Address, bool> = Map::new(env);
    for oracle in oracles.iter() {
        if seen.contains_key(oracle.clone()) {
            return Err(ContractError::DuplicateOracle);
        }
        seen.set(oracle, true);
    }

    let oracle_set = OracleSet {
        members: oracles.clone(),
        quorum: quorum_for(oracles.len()),
    };

    storage::write_oracle_set(env, &oracle_set);
    for oracle in oracles.iter() {
        storage::write_oracle_member(env, &oracle);
    }

    Ok(oracle_set)
}

pub(crate) fn oracle_set(env: &Env) -> Result<OracleSet, ContractError> {
    storage::read_oracle_set(env).ok_or(ContractError::NotInitialized)
}

pub(crate) fn is_oracle(env: &Env, address: &Address) -> bool {
    storage::is_oracle(env, address)
}

pub(crate) fn quorum_threshold(env: &Env) -> Result<u32, ContractError> {
    Ok(oracle_set(env)?.quorum)
}

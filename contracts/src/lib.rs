#![no_std]
//! # Oracle-Quorum Prediction Market
//!
//! Soroban contract that settles prediction markets on the agreement of a
//! fixed oracle set. Users stake on one of a market's outcomes; once a strict
//! majority of oracles report the same outcome the market resolves and the
//! whole pool is shared among winners in proportion to their stake.
//!
//! ## Key Features
//! - Quorum of floor(n/2)+1 agreeing reports, one immutable report per oracle
//! - Disputed markets stop taking stakes; markets past their deadline void
//!   and refund every position at face value
//! - Integer-only payouts; rounding dust goes to the last winning claimant
//! - Every state change runs through a single command dispatcher

mod constants;
mod contract;
mod dispatcher;
mod errors;
mod escrow;
mod events;
mod math;
mod registry;
mod resolution;
mod storage;
mod types;

#[cfg(test)]
mod tests;

pub use constants::{INITIAL_BALANCE, MAX_ORACLES, MAX_OUTCOMES, MIN_OUTCOMES};
pub use contract::PredictionMarketContract;
pub use errors::ContractError;
pub use types::{Command, CommandOutcome, DataKey, Market, MarketState, OracleReport, OracleSet, Position};

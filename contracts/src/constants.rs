//! Tunable limits for the prediction market.

/// Largest oracle set accepted by `initialize`.
pub const MAX_ORACLES: u32 = 32;

pub const MIN_OUTCOMES: u32 = 2;
pub const MAX_OUTCOMES: u32 = 16;

/// One-time starting balance handed out by `mint_initial` (1000 units, 7 decimals).
pub const INITIAL_BALANCE: i128 = 1000_0000000;

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const BUMP_THRESHOLD: u32 = 14 * DAY_IN_LEDGERS;
pub(crate) const BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

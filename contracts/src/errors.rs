//! Contract error types for the oracle-quorum prediction market.

use soroban_sdk::contracterror;

/// Contract error types
///
/// Codes are surfaced verbatim to callers, so existing values never change.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    /// Oracle registry has already been set up
    AlreadyInitialized = 1,
    /// No market exists with the given id
    UnknownMarket = 2,
    /// Outcome is not one of the market's outcomes
    InvalidOutcome = 3,
    /// Caller is not in the oracle set
    NotAnOracle = 4,
    /// Oracle has already reported on this market
    DuplicateReport = 5,
    /// Market has already reached a final state
    MarketAlreadyResolved = 6,
    /// Market no longer accepts stakes
    MarketNotOpen = 7,
    /// Stake amount must be greater than zero
    ZeroAmount = 8,
    /// Market is neither resolved nor void
    MarketNotFinal = 9,
    /// Caller has no position in this market
    NoPosition = 10,
    /// Position has already been paid out
    AlreadyClaimed = 11,
    /// Admin not set - call initialize first
    NotInitialized = 12,
    /// Oracle list is empty or exceeds MAX_ORACLES
    InvalidOracleSet = 13,
    /// Oracle list contains the same address twice
    DuplicateOracle = 14,
    /// Outcome list is too short, too long, or repeats an outcome
    InvalidOutcomeSet = 15,
    /// Deadline must be after the current ledger
    InvalidDeadline = 16,
    /// User has insufficient balance
    InsufficientBalance = 17,
    /// Existing position is on a different outcome
    OutcomeMismatch = 18,
    /// Market deadline has not been reached yet
    DeadlineNotReached = 19,
    /// Arithmetic overflow occurred
    Overflow = 20,
    /// Only admin can perform this action
    Unauthorized = 21,
}

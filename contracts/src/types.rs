//! Type definitions for the oracle-quorum prediction market.

use soroban_sdk::{contracttype, Address, Symbol, Vec};

/// Storage keys for contract data
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    OracleSet,
    /// Membership flag, one per oracle, so lookups never scan the set
    Oracle(Address),
    MarketCount,
    Market(u64),
    Position(u64, Address),
    Report(u64, Address),
    Balance(Address),
}

/// Lifecycle of a market. Transitions only move forward.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MarketState {
    /// Accepting stakes, no reports yet
    Open = 0,
    /// At least one report, below quorum
    Reporting = 1,
    /// Remaining oracles can no longer bring any outcome to quorum
    Disputed = 2,
    /// Quorum reached, winning outcome frozen
    Resolved = 3,
    /// Deadline passed without quorum, every position is refundable
    Void = 4,
}

impl MarketState {
    pub fn is_final(self) -> bool {
        matches!(self, MarketState::Resolved | MarketState::Void)
    }

    pub fn accepts_stakes(self) -> bool {
        matches!(self, MarketState::Open | MarketState::Reporting)
    }

    pub fn can_transition_to(self, next: MarketState) -> bool {
        use MarketState::*;
        match self {
            Open => matches!(next, Reporting | Disputed | Resolved | Void),
            Reporting => matches!(next, Disputed | Resolved | Void),
            Disputed => matches!(next, Resolved | Void),
            Resolved | Void => false,
        }
    }
}

/// The fixed set of oracles and the number of agreeing reports needed.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct OracleSet {
    pub members: Vec<Address>,
    pub quorum: u32,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Market {
    pub id: u64,
    pub outcomes: Vec<Symbol>,
    /// Staked amount per outcome, indexed like `outcomes`
    pub outcome_totals: Vec<i128>,
    /// Agreeing reports per outcome, indexed like `outcomes`
    pub report_tallies: Vec<u32>,
    pub reports: u32,
    pub oracle_count: u32,
    pub quorum: u32,
    pub state: MarketState,
    pub winning_outcome: Option<Symbol>,
    pub total_pool: i128,
    pub paid_out: i128,
    /// Stake of winning positions that have already been claimed
    pub winning_claimed: i128,
    pub created_at: u32,
    pub deadline: u32,
    pub resolved_at: Option<u32>,
}

impl Market {
    pub fn outcome_index(&self, outcome: &Symbol) -> Option<u32> {
        self.outcomes
            .iter()
            .position(|candidate| candidate == *outcome)
            .map(|index| index as u32)
    }

    /// Moves a non-final market past its deadline into `Void`.
    /// Returns true when the state changed.
    pub fn apply_deadline(&mut self, height: u32) -> bool {
        if self.state.is_final() || height < self.deadline {
            return false;
        }
        self.state = MarketState::Void;
        true
    }

    /// Escrowed funds not yet paid out.
    pub fn escrow(&self) -> i128 {
        self.total_pool - self.paid_out
    }

    pub fn winning_total(&self) -> i128 {
        self.winning_outcome
            .as_ref()
            .and_then(|outcome| self.outcome_index(outcome))
            .and_then(|index| self.outcome_totals.get(index))
            .unwrap_or(0)
    }
}

/// A participant's accumulated stake on one outcome of one market
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Position {
    pub owner: Address,
    pub market_id: u64,
    pub outcome: Symbol,
    pub amount: i128,
    pub claimed: bool,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct OracleReport {
    pub oracle: Address,
    pub outcome: Symbol,
    pub height: u32,
}

/// Every state-changing call the contract accepts, routed by `execute`.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Caller becomes admin; payload is the oracle set
    Initialize(Vec<Address>),
    /// Outcomes and deadline height
    CreateMarket(Vec<Symbol>, u32),
    /// Market id, outcome, amount
    Stake(u64, Symbol, i128),
    /// Market id, outcome
    SubmitReport(u64, Symbol),
    Claim(u64),
    ExpireMarket(u64),
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub enum CommandOutcome {
    Initialized,
    MarketCreated(u64),
    Staked,
    /// Whether the report resolved the market
    Reported(bool),
    /// Amount paid to the claimant
    Claimed(i128),
    Expired,
}

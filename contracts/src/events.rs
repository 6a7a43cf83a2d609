//! Events published on every state transition.

use soroban_sdk::{contractevent, Address, Symbol};

#[contractevent(topics = ["initialized"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub oracle_count: u32,
    pub quorum: u32,
}

#[contractevent(topics = ["market_created"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketCreatedEvent {
    pub market_id: u64,
    pub outcome_count: u32,
    pub deadline: u32,
}

#[contractevent(topics = ["staked"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedEvent {
    pub market_id: u64,
    pub user: Address,
    pub outcome: Symbol,
    pub amount: i128,
}

#[contractevent(topics = ["report_submitted"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReportSubmittedEvent {
    pub market_id: u64,
    pub oracle: Address,
    pub outcome: Symbol,
}

#[contractevent(topics = ["market_resolved"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketResolvedEvent {
    pub market_id: u64,
    pub outcome: Symbol,
    pub height: u32,
}

/// Remaining oracles can no longer produce a quorum; governance may step in.
#[contractevent(topics = ["market_disputed"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketDisputedEvent {
    pub market_id: u64,
    pub reports: u32,
}

#[contractevent(topics = ["market_voided"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketVoidedEvent {
    pub market_id: u64,
    pub height: u32,
}

#[contractevent(topics = ["claimed"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimedEvent {
    pub market_id: u64,
    pub user: Address,
    pub amount: i128,
}

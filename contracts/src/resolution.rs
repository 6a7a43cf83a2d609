//! Resolution engine: oracle reports, quorum, disputes and the deadline fallback.

use soroban_sdk::{log, Address, Env, Symbol};

use crate::errors::ContractError;
use crate::events::{MarketDisputedEvent, MarketResolvedEvent, MarketVoidedEvent, ReportSubmittedEvent};
use crate::math::quorum_reachable;
use crate::registry;
use crate::storage;
use crate::types::{Market, MarketState, OracleReport};

/// Records one oracle's report and advances the market.
/// Returns true when this report brought the market to quorum.
pub(crate) fn submit_report(
    env: &Env,
    market: &mut Market,
    oracle: &Address,
    outcome: &Symbol,
) -> Result<bool, ContractError> {
    if !registry::is_oracle(env, oracle) {
        return Err(ContractError::NotAnOracle);
    }

    if market.state.is_final() {
        return Err(ContractError::MarketAlreadyResolved);
    }

    let index = market
        .outcome_index(outcome)
        .ok_or(ContractError::InvalidOutcome)?;

    if storage::has_report(env, market.id, oracle) {
        return Err(ContractError::DuplicateReport);
    }

    let height = env.ledger().sequence();

    let tally = market
        .report_tallies
        .get(index)
        .unwrap_or(0)
        .checked_add(1)
        .ok_or(ContractError::Overflow)?;
    market.report_tallies.set(index, tally);
    market.reports = market
        .reports
        .checked_add(1)
        .ok_or(ContractError::Overflow)?;

    let previous = market.state;
    let next = next_state(market);
    if next != previous && previous.can_transition_to(next) {
        market.state = next;
    }

    if market.state == MarketState::Resolved {
        market.winning_outcome = Some(outcome.clone());
        market.resolved_at = Some(height);
    }

    storage::write_report(
        env,
        market.id,
        &OracleReport {
            oracle: oracle.clone(),
            outcome: outcome.clone(),
            height,
        },
    );
    storage::write_market(env, market);

    ReportSubmittedEvent {
        market_id: market.id,
        oracle: oracle.clone(),
        outcome: outcome.clone(),
    }
    .publish(env);

    match market.state {
        MarketState::Resolved => {
            log!(env, "market resolved", market.id, outcome.clone());
            MarketResolvedEvent {
                market_id: market.id,
                outcome: outcome.clone(),
                height,
            }
            .publish(env);
            Ok(true)
        }
        MarketState::Disputed if previous != MarketState::Disputed => {
            log!(env, "market disputed", market.id, market.reports);
            MarketDisputedEvent {
                market_id: market.id,
                reports: market.reports,
            }
            .publish(env);
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// State implied by the current tallies.
fn next_state(market: &Market) -> MarketState {
    let max_tally = market.report_tallies.iter().max().unwrap_or(0);

    if max_tally >= market.quorum {
        MarketState::Resolved
    } else if !quorum_reachable(max_tally, market.reports, market.oracle_count, market.quorum) {
        MarketState::Disputed
    } else {
        MarketState::Reporting
    }
}

/// Persists the `Void` transition of a market whose deadline has passed.
pub(crate) fn expire(env: &Env, market_id: u64) -> Result<(), ContractError> {
    let mut market = storage::read_market(env, market_id)?;

    if market.state.is_final() {
        return Err(ContractError::MarketAlreadyResolved);
    }

    let height = env.ledger().sequence();
    if !market.apply_deadline(height) {
        return Err(ContractError::DeadlineNotReached);
    }

    storage::write_market(env, &market);
    publish_voided(env, &market, height);

    Ok(())
}

pub(crate) fn publish_voided(env: &Env, market: &Market, height: u32) {
    log!(env, "market voided", market.id, height);
    MarketVoidedEvent {
        market_id: market.id,
        height,
    }
    .publish(env);
}

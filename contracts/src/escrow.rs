//! Escrow and payout ledger.
//!
//! Stakes move from the user's balance into the market pool; claims move
//! them back out once the market is final. Payouts are floor-divided and the
//! last winning claimant collects the rounding dust, so the pool is paid out
//! exactly and never more than once.

use soroban_sdk::{log, Address, Env, Symbol};

use crate::constants::INITIAL_BALANCE;
use crate::errors::ContractError;
use crate::events::{ClaimedEvent, StakedEvent};
use crate::math::pro_rata_share;
use crate::storage;
use crate::types::{Market, MarketState, Position};

/// Adds `amount` to the user's position on `outcome`.
pub(crate) fn stake(
    env: &Env,
    market: &mut Market,
    user: &Address,
    outcome: &Symbol,
    amount: i128,
) -> Result<(), ContractError> {
    if !market.state.accepts_stakes() {
        return Err(ContractError::MarketNotOpen);
    }

    let index = market
        .outcome_index(outcome)
        .ok_or(ContractError::InvalidOutcome)?;

    if amount <= 0 {
        return Err(ContractError::ZeroAmount);
    }

    let mut position = match storage::read_position(env, market.id, user) {
        Some(existing) if existing.outcome != *outcome => {
            return Err(ContractError::OutcomeMismatch);
        }
        Some(existing) => existing,
        None => Position {
            owner: user.clone(),
            market_id: market.id,
            outcome: outcome.clone(),
            amount: 0,
            claimed: false,
        },
    };

    let user_balance = storage::read_balance(env, user);
    if user_balance < amount {
        return Err(ContractError::InsufficientBalance);
    }

    let new_balance = user_balance
        .checked_sub(amount)
        .ok_or(ContractError::Overflow)?;
    position.amount = position
        .amount
        .checked_add(amount)
        .ok_or(ContractError::Overflow)?;
    let outcome_total = market
        .outcome_totals
        .get(index)
        .unwrap_or(0)
        .checked_add(amount)
        .ok_or(ContractError::Overflow)?;
    market.total_pool = market
        .total_pool
        .checked_add(amount)
        .ok_or(ContractError::Overflow)?;
    market.outcome_totals.set(index, outcome_total);

    storage::write_balance(env, user, new_balance);
    storage::write_position(env, &position);
    storage::write_market(env, market);

    StakedEvent {
        market_id: market.id,
        user: user.clone(),
        outcome: outcome.clone(),
        amount,
    }
    .publish(env);

    Ok(())
}

/// Pays out the user's position on a final market. Losing positions are
/// marked claimed with a zero payout.
pub(crate) fn claim(env: &Env, market: &mut Market, user: &Address) -> Result<i128, ContractError> {
    if !market.state.is_final() {
        return Err(ContractError::MarketNotFinal);
    }

    let mut position = storage::read_position(env, market.id, user).ok_or(ContractError::NoPosition)?;

    if position.claimed {
        return Err(ContractError::AlreadyClaimed);
    }

    let payout = payout_for(market, &position)?;
    if payout > market.escrow() {
        return Err(ContractError::Overflow);
    }

    if market.state == MarketState::Resolved && market.winning_outcome.as_ref() == Some(&position.outcome) {
        market.winning_claimed = market
            .winning_claimed
            .checked_add(position.amount)
            .ok_or(ContractError::Overflow)?;
    }
    market.paid_out = market
        .paid_out
        .checked_add(payout)
        .ok_or(ContractError::Overflow)?;
    let new_balance = storage::read_balance(env, user)
        .checked_add(payout)
        .ok_or(ContractError::Overflow)?;

    position.claimed = true;
    storage::write_position(env, &position);
    storage::write_market(env, market);
    storage::write_balance(env, user, new_balance);

    log!(env, "position claimed", market.id, payout);
    ClaimedEvent {
        market_id: market.id,
        user: user.clone(),
        amount: payout,
    }
    .publish(env);

    Ok(payout)
}

/// Amount owed for `position` given the market's current claim progress.
pub(crate) fn payout_for(market: &Market, position: &Position) -> Result<i128, ContractError> {
    match market.state {
        MarketState::Void => Ok(position.amount),
        MarketState::Resolved => {
            let winning_total = market.winning_total();
            // Nobody backed the winning outcome; the pool goes back to its stakers.
            if winning_total == 0 {
                return Ok(position.amount);
            }

            if market.winning_outcome.as_ref() != Some(&position.outcome) {
                return Ok(0);
            }

            let claimed_after = market
                .winning_claimed
                .checked_add(position.amount)
                .ok_or(ContractError::Overflow)?;
            if claimed_after == winning_total {
                Ok(market.escrow())
            } else {
                pro_rata_share(position.amount, market.total_pool, winning_total)
            }
        }
        _ => Err(ContractError::MarketNotFinal),
    }
}

/// Grants the one-time starting balance
pub(crate) fn mint_initial(env: &Env, user: &Address) -> i128 {
    if storage::has_balance(env, user) {
        return storage::read_balance(env, user);
    }

    storage::write_balance(env, user, INITIAL_BALANCE);
    INITIAL_BALANCE
}

//! Integer arithmetic for quorum and payouts. No floating point anywhere.

use crate::errors::ContractError;

/// Strict majority of `oracle_count`.
pub(crate) fn quorum_for(oracle_count: u32) -> u32 {
    oracle_count / 2 + 1
}

/// Whether any outcome can still collect `quorum` agreeing reports.
pub(crate) fn quorum_reachable(max_tally: u32, reports: u32, oracle_count: u32, quorum: u32) -> bool {
    let unreported = oracle_count.saturating_sub(reports);
    max_tally.saturating_add(unreported) >= quorum
}

/// `floor(amount * total_pool / winning_total)`
///
/// Never exceeds the exact pro-rata share, so a sum of these over all
/// winners stays within `total_pool`.
pub(crate) fn pro_rata_share(
    amount: i128,
    total_pool: i128,
    winning_total: i128,
) -> Result<i128, ContractError> {
    if winning_total <= 0 {
        return Ok(0);
    }
    let numerator = amount
        .checked_mul(total_pool)
        .ok_or(ContractError::Overflow)?;
    Ok(numerator / winning_total)
}

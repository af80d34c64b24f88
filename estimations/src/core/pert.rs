//! PERT aggregation
//!
//! Folds every user's three-point estimate for an item into one consensus
//! value: the most optimistic bound and most pessimistic bound across all
//! users frame the spread, the realistic guesses are averaged, and the
//! classic weighted mean plus two standard deviations is rounded to the
//! nearest quarter.

use shared::UserEstimate;

/// Aggregate all recorded estimates for one item.
///
/// Returns `None` for an empty set. The completion rules make that state
/// unreachable through normal transitions, but the projection must not fail
/// if it is ever asked about an estimate-free item.
pub fn pert_aggregate(estimates: &[UserEstimate]) -> Option<f64> {
    if estimates.is_empty() {
        return None;
    }

    let optimistic = estimates.iter().map(|e| e.estimate.optimistic).min()? as f64;
    let pessimistic = estimates.iter().map(|e| e.estimate.pessimistic).max()? as f64;
    let realistic_sum: i64 = estimates.iter().map(|e| e.estimate.realistic).sum();
    let realistic = realistic_sum as f64 / estimates.len() as f64;

    let weighted_mean = (optimistic + 4.0 * realistic + pessimistic) / 6.0;
    let standard_deviation = (pessimistic - optimistic) / 6.0;

    Some(round_to_quarter(weighted_mean + 2.0 * standard_deviation))
}

/// Round half away from zero to the nearest 0.25.
fn round_to_quarter(value: f64) -> f64 {
    (value * 4.0).round() / 4.0
}

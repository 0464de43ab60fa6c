use crate::supply::SupplyBound;
use crate::time::{Duration, Service};

use thiserror::Error;

/// Error type returned when a fixed point search fails.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq, PartialOrd)]
pub enum SearchFailure {
    /// No fixed point found below the given divergence threshold.
    #[error("no fixed point less than or equal to {limit} found")]
    DivergenceLimitExceeded { limit: Duration },
}

pub type SearchResult = Result<Duration, SearchFailure>;

/// Conduct an iterative fixed point search up to a given divergence
/// threshold, starting from the estimate `initial`.
///
/// The right-hand side `workload` must be monotonically
/// non-decreasing and `initial` must not exceed its least fixed
/// point; the search then yields exactly that least fixed point.
/// The search is abandoned as soon as the estimate exceeds
/// `divergence_limit`, which guarantees termination even if the
/// workload outgrows the supply.
pub fn search_from<SBF, RHS>(
    supply: &SBF,
    initial: Duration,
    divergence_limit: Duration,
    workload: RHS,
) -> SearchResult
where
    SBF: SupplyBound + ?Sized,
    RHS: Fn(Duration) -> Service,
{
    let result = iterate(supply, initial, divergence_limit, &workload);
    // In tests, compare against the brute-force solution where the
    // search space is small enough to scan.
    #[cfg(test)]
    {
        let span = u64::from(divergence_limit).saturating_sub(u64::from(initial));
        if span <= BRUTE_FORCE_SPAN {
            assert_eq!(
                brute_force_search(supply, initial, divergence_limit, &workload),
                result
            );
        }
    }
    result
}

/// Largest search space cross-checked by [brute_force_search].
#[cfg(test)]
const BRUTE_FORCE_SPAN: u64 = 100_000;

fn iterate<SBF, RHS>(
    supply: &SBF,
    initial: Duration,
    divergence_limit: Duration,
    workload: &RHS,
) -> SearchResult
where
    SBF: SupplyBound + ?Sized,
    RHS: Fn(Duration) -> Service,
{
    let mut assumed_response_time = initial;
    while assumed_response_time <= divergence_limit {
        let demand = workload(assumed_response_time);
        let response_time_bound = supply.service_time(demand);
        tracing::trace!(
            assumed = %assumed_response_time,
            bound = %response_time_bound,
            "fixed-point iteration"
        );
        if response_time_bound <= assumed_response_time {
            // we have converged
            return Ok(response_time_bound);
        } else {
            // continue iterating
            assumed_response_time = response_time_bound
        }
    }
    // if we get here, we failed to converge => no solution
    Err(SearchFailure::DivergenceLimitExceeded {
        limit: divergence_limit,
    })
}

/// Very slow, naive search for the least point in
/// `initial..=divergence_limit` at which the supply covers the
/// workload. Do not use --- use [search_from] instead.
#[cfg(test)]
fn brute_force_search<SBF, RHS>(
    supply: &SBF,
    initial: Duration,
    divergence_limit: Duration,
    workload: &RHS,
) -> SearchResult
where
    SBF: SupplyBound + ?Sized,
    RHS: Fn(Duration) -> Service,
{
    let start = u64::from(initial);
    let end = u64::from(divergence_limit);
    for r in (start..=end).map(Duration::from) {
        let rhs = workload(r);
        if supply.provided_service(r) >= rhs {
            return Ok(supply.service_time(rhs));
        }
    }
    Err(SearchFailure::DivergenceLimitExceeded {
        limit: divergence_limit,
    })
}

//! Scheduling-point test (exact critical-instant analysis)

use itertools::Itertools;
use std::iter;

use crate::arrival::{ArrivalBound, Periodic};
use crate::demand::{self, RequestBound};
use crate::supply::{self, SupplyBound};
use crate::task::TaskSet;
use crate::time::Duration;

/// The instants examined for the task at index `i`, in increasing
/// order and without duplicates.
///
/// These are all releases `l * period_k` of the task itself and of
/// every higher-priority task `k` that fall into the task's analysis
/// window, followed by the end of the window. The window ends at the
/// task's relative deadline (see
/// [analysis_window][crate::task::PriorityPolicy::analysis_window]).
pub fn scheduling_points(task_set: &TaskSet, i: usize) -> Vec<Duration> {
    let window = task_set.policy().analysis_window(&task_set.tasks()[i]);
    let arrivals: Vec<Periodic> = task_set.tasks()[..=i]
        .iter()
        .map(|t| Periodic::new(t.period))
        .collect();

    arrivals
        .iter()
        .map(|a| a.releases_until(window))
        .kmerge()
        .merge(iter::once(window))
        .dedup()
        .collect()
}

/// For each task, find the earliest scheduling point `t` at which
/// the cumulative demand of the task and all higher-priority tasks,
/// `sum_{j <= i} wcet_j * ceil(t / period_j)`, does not exceed the
/// processor supply `t`. Tasks without such a point map to `None`.
pub fn passing_points(task_set: &TaskSet) -> Vec<Option<Duration>> {
    // This analysis is specific to dedicated uniprocessors.
    let proc = supply::Dedicated::new();
    let rbfs = task_set.request_bounds();

    (0..task_set.len())
        .map(|i| {
            let demand = demand::Slice::of(&rbfs[..=i]);
            let passing = scheduling_points(task_set, i).into_iter().find(|t| {
                let needed = demand.service_needed(*t);
                let provided = proc.provided_service(*t);
                tracing::trace!(task = i, point = %t, demand = %needed, supply = %provided);
                needed <= provided
            });
            match passing {
                Some(t) => tracing::debug!(task = i, point = %t, "demand met"),
                None => tracing::debug!(task = i, "no scheduling point meets demand"),
            }
            passing
        })
        .collect()
}

/// Exact test: every task has at least one scheduling point at which
/// demand does not exceed supply.
pub fn scheduling_point_test(task_set: &TaskSet) -> bool {
    passing_points(task_set).iter().all(Option::is_some)
}

//! Sufficient demand bound for deadline-monotonic order

use crate::demand::{self, RequestBound};
use crate::task::TaskSet;
use crate::time::Service;

/// For each task `i`, the ratio `(wcet_i + I_i) / deadline_i`, where
/// `I_i = sum_{j < i} ceil(deadline_i / period_j) * wcet_j` bounds the
/// interference by higher-priority tasks within the task's deadline.
pub fn demand_ratios(task_set: &TaskSet) -> Vec<f64> {
    let rbfs = task_set.request_bounds();
    task_set
        .iter()
        .enumerate()
        .map(|(i, tua)| {
            let demand = tua
                .wcet
                .saturating_add(demand::Slice::of(&rbfs[..i]).service_needed(tua.deadline));
            demand.as_f64() / tua.deadline.as_f64()
        })
        .collect()
}

/// Sufficient test for sets in deadline-monotonic order: the
/// normalized demand of every task within its deadline is at most 1.
/// A negative result proves nothing.
pub fn dm_quick_test(task_set: &TaskSet) -> bool {
    let rbfs = task_set.request_bounds();
    task_set.iter().enumerate().all(|(i, tua)| {
        let interference = demand::Slice::of(&rbfs[..i]).service_needed(tua.deadline);
        let fits = tua.wcet.saturating_add(interference) <= Service::in_interval(tua.deadline);
        tracing::debug!(task = i, interference = %interference, deadline = %tua.deadline, fits);
        fits
    })
}

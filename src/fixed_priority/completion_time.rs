//! Completion-time test (exact response-time analysis)

use crate::demand::{self, RequestBound};
use crate::fixed_point::{self, SearchResult};
use crate::supply;
use crate::task::TaskSet;
use crate::time::{Duration, Service};

/// Bound the worst-case response time of each task in `task_set`
/// under fully preemptive fixed-priority scheduling on a dedicated
/// uniprocessor.
///
/// For the task at index `i`, the response time is the least fixed
/// point of
///
/// `R = wcet_i + sum_{j < i} ceil(R / period_j) * wcet_j`,
///
/// found by iterating from `R = sum_{j <= i} wcet_j`. The iteration is
/// abandoned once `R` exceeds the task's deadline, in which case the
/// corresponding entry is a [SearchFailure][fixed_point::SearchFailure].
/// The recurrence consults only the priority order and each task's own
/// deadline, so it applies to rate- and deadline-monotonic order alike.
#[allow(non_snake_case)]
pub fn response_time_bounds(task_set: &TaskSet) -> Vec<SearchResult> {
    // This analysis is specific to dedicated uniprocessors.
    let proc = supply::Dedicated::new();
    let rbfs = task_set.request_bounds();

    task_set
        .iter()
        .enumerate()
        .map(|(i, tua)| {
            let interference = demand::Slice::of(&rbfs[..i]);
            // Initial estimate: one job of the task under analysis and
            // of each higher-priority task.
            let R0 = task_set.tasks()[..=i]
                .iter()
                .map(|t| t.wcet)
                .fold(Service::default(), Service::saturating_add);

            let R = fixed_point::search_from(&proc, Duration::from(R0), tua.deadline, |R| {
                tua.wcet.saturating_add(interference.service_needed(R))
            });
            match &R {
                Ok(r) => tracing::debug!(task = i, response_time = %r, deadline = %tua.deadline, "converged"),
                Err(_) => tracing::debug!(task = i, deadline = %tua.deadline, "response time exceeds deadline"),
            }
            R
        })
        .collect()
}

/// Exact test: every task's worst-case response time is at most its
/// deadline.
pub fn completion_time_test(task_set: &TaskSet) -> bool {
    response_time_bounds(task_set).iter().all(Result::is_ok)
}

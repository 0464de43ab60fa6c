//! The periodic task model.

use std::fmt;

use dashu::{integer::Sign, rational::Relaxed};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::arrival::Periodic;
use crate::demand;
use crate::time::{Duration, Service};
use crate::wcet;

/// A periodic task with a constant worst-case execution time and a
/// relative deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Task {
    /// The separation between two consecutive releases.
    pub period: Duration,
    /// The worst-case execution time of each job.
    pub wcet: Service,
    /// The relative deadline of each job.
    pub deadline: Duration,
}

impl Task {
    /// Construct a task with an implicit deadline (equal to `period`).
    pub fn new(wcet: Service, period: Duration) -> Self {
        Task {
            period,
            wcet,
            deadline: period,
        }
    }

    /// Returns the task with the relative deadline `deadline`.
    pub fn with_deadline(self, deadline: Duration) -> Self {
        Task { deadline, ..self }
    }

    pub fn has_implicit_deadline(&self) -> bool {
        self.deadline == self.period
    }

    /// The fraction of the processor the task may occupy in the long run.
    pub fn utilization(&self) -> f64 {
        self.wcet.as_f64() / self.period.as_f64()
    }

    /// The exact utilization `wcet / period` as a rational number.
    pub fn exact_utilization(&self) -> Relaxed {
        Relaxed::from_parts_const(
            Sign::Positive,
            u64::from(self.wcet).into(),
            u64::from(self.period).into(),
        )
    }

    /// The request-bound function of the task assuming a release at
    /// the critical instant.
    pub fn request_bound(&self) -> demand::RBF<Periodic, wcet::Scalar> {
        demand::RBF::new(Periodic::new(self.period), wcet::Scalar::new(self.wcet))
    }

    fn check(&self, index: usize) -> Result<(), TaskSetError> {
        let zero = [
            (self.period.is_zero(), Parameter::Period),
            (self.wcet.is_none(), Parameter::Wcet),
            (self.deadline.is_zero(), Parameter::Deadline),
        ];
        match zero.iter().find(|(is_zero, _)| *is_zero) {
            Some((_, parameter)) => Err(TaskSetError::InvalidParameter {
                index,
                parameter: *parameter,
            }),
            None => Ok(()),
        }
    }
}

/// The task parameters that must be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    Period,
    Wcet,
    Deadline,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parameter::Period => write!(f, "period"),
            Parameter::Wcet => write!(f, "wcet"),
            Parameter::Deadline => write!(f, "deadline"),
        }
    }
}

/// Error type returned when a task set cannot be constructed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TaskSetError {
    /// A task parameter is zero.
    #[error("task {index}: {parameter} must be positive")]
    InvalidParameter { index: usize, parameter: Parameter },
    /// The task set contains no tasks where at least one is required.
    #[error("task set is empty")]
    Empty,
    /// The parameter sequences passed to [TaskSet::from_columns] differ in length.
    #[error("parameter sequences differ in length: {periods} periods, {wcets} wcets, {deadlines} deadlines")]
    LengthMismatch {
        periods: usize,
        wcets: usize,
        deadlines: usize,
    },
}

/// The fixed-priority policy that determined the order of a task set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriorityPolicy {
    /// Shorter period, higher priority (Liu & Layland).
    #[default]
    RateMonotonic,
    /// Shorter relative deadline, higher priority (Audsley et al.).
    DeadlineMonotonic,
}

impl PriorityPolicy {
    /// The task parameter by which the policy orders tasks; a smaller
    /// key means a higher priority.
    pub fn priority_key(&self, task: &Task) -> Duration {
        match self {
            PriorityPolicy::RateMonotonic => task.period,
            PriorityPolicy::DeadlineMonotonic => task.deadline,
        }
    }

    /// The length of the window after the critical instant within
    /// which a job of `task` must complete.
    ///
    /// This is the relative deadline under either policy. For
    /// rate-monotonic sets with implicit deadlines it coincides with
    /// the priority key.
    pub fn analysis_window(&self, task: &Task) -> Duration {
        match self {
            PriorityPolicy::RateMonotonic | PriorityPolicy::DeadlineMonotonic => task.deadline,
        }
    }

    /// Stable sort of `tasks` into decreasing priority order.
    pub fn sort(&self, tasks: &mut [Task]) {
        tasks.sort_by_key(|t| self.priority_key(t));
    }

    pub fn name(&self) -> &'static str {
        match self {
            PriorityPolicy::RateMonotonic => "RM",
            PriorityPolicy::DeadlineMonotonic => "DM",
        }
    }
}

/// An immutable sequence of tasks in decreasing priority order:
/// index 0 is the highest-priority task.
///
/// The order is a precondition established by whoever constructs the
/// set (e.g., with [PriorityPolicy::sort]); it is neither derived nor
/// checked by the analyses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSet {
    tasks: Vec<Task>,
    policy: PriorityPolicy,
}

impl TaskSet {
    /// Construct a task set from tasks already ordered by `policy`.
    ///
    /// Fails if any period, WCET, or deadline is zero. An empty task
    /// set is accepted and deemed trivially feasible by every test.
    pub fn new(policy: PriorityPolicy, tasks: Vec<Task>) -> Result<Self, TaskSetError> {
        for (index, task) in tasks.iter().enumerate() {
            task.check(index)?;
        }
        Ok(TaskSet { tasks, policy })
    }

    /// Shorthand for a rate-monotonic task set.
    pub fn rate_monotonic(tasks: Vec<Task>) -> Result<Self, TaskSetError> {
        Self::new(PriorityPolicy::RateMonotonic, tasks)
    }

    /// Shorthand for a deadline-monotonic task set.
    pub fn deadline_monotonic(tasks: Vec<Task>) -> Result<Self, TaskSetError> {
        Self::new(PriorityPolicy::DeadlineMonotonic, tasks)
    }

    /// Construct a task set from parallel sequences of periods,
    /// WCETs, and deadlines, all given in priority order.
    pub fn from_columns(
        policy: PriorityPolicy,
        periods: &[u64],
        wcets: &[u64],
        deadlines: &[u64],
    ) -> Result<Self, TaskSetError> {
        if periods.len() != wcets.len() || periods.len() != deadlines.len() {
            return Err(TaskSetError::LengthMismatch {
                periods: periods.len(),
                wcets: wcets.len(),
                deadlines: deadlines.len(),
            });
        }
        let tasks = periods
            .iter()
            .zip(wcets)
            .zip(deadlines)
            .map(|((p, c), d)| Task::new(Service::from(*c), Duration::from(*p)).with_deadline(Duration::from(*d)))
            .collect();
        Self::new(policy, tasks)
    }

    /// Reject empty task sets.
    pub fn ensure_non_empty(&self) -> Result<(), TaskSetError> {
        if self.tasks.is_empty() {
            Err(TaskSetError::Empty)
        } else {
            Ok(())
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn policy(&self) -> PriorityPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Total utilization `sum(wcet_i / period_i)`.
    pub fn utilization(&self) -> f64 {
        self.tasks.iter().map(Task::utilization).sum()
    }

    /// Total utilization as an exact rational number.
    pub fn exact_utilization(&self) -> Relaxed {
        let mut total = Relaxed::default();
        for task in &self.tasks {
            total += task.exact_utilization();
        }
        total
    }

    /// The request-bound functions of all tasks, in priority order.
    pub fn request_bounds(&self) -> Vec<demand::RBF<Periodic, wcet::Scalar>> {
        self.tasks.iter().map(Task::request_bound).collect()
    }
}

impl<'a> IntoIterator for &'a TaskSet {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{d, s};
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn implicit_deadline_by_default() {
        let t = Task::new(s(1), d(10));
        assert_eq!(t.deadline, d(10));
        assert!(t.has_implicit_deadline());
        assert!(!t.with_deadline(d(5)).has_implicit_deadline());
    }

    #[test]
    fn rejects_zero_parameters() {
        let ok = Task::new(s(1), d(2));
        assert_eq!(
            TaskSet::rate_monotonic(vec![ok, Task::new(s(1), d(0))]),
            Err(TaskSetError::InvalidParameter {
                index: 1,
                parameter: Parameter::Period
            })
        );
        assert_eq!(
            TaskSet::rate_monotonic(vec![Task::new(s(0), d(2))]),
            Err(TaskSetError::InvalidParameter {
                index: 0,
                parameter: Parameter::Wcet
            })
        );
        assert_eq!(
            TaskSet::deadline_monotonic(vec![ok, ok.with_deadline(d(0))]),
            Err(TaskSetError::InvalidParameter {
                index: 1,
                parameter: Parameter::Deadline
            })
        );
    }

    #[test]
    fn empty_sets() {
        let ts = TaskSet::rate_monotonic(vec![]).unwrap();
        assert!(ts.is_empty());
        assert_eq!(ts.ensure_non_empty(), Err(TaskSetError::Empty));
        assert_eq!(ts.utilization(), 0.0);
    }

    #[test]
    fn columns() {
        let ts = TaskSet::from_columns(
            PriorityPolicy::DeadlineMonotonic,
            &[2, 5, 7, 13],
            &[1, 1, 1, 2],
            &[2, 3, 7, 15],
        )
        .unwrap();
        assert_eq!(ts.len(), 4);
        assert_eq!(ts.tasks()[1], Task::new(s(1), d(5)).with_deadline(d(3)));
        assert_eq!(ts.policy(), PriorityPolicy::DeadlineMonotonic);

        assert_eq!(
            TaskSet::from_columns(PriorityPolicy::RateMonotonic, &[2, 5], &[1], &[2, 5]),
            Err(TaskSetError::LengthMismatch {
                periods: 2,
                wcets: 1,
                deadlines: 2
            })
        );
    }

    #[test]
    fn utilization() {
        let ts = TaskSet::from_columns(PriorityPolicy::RateMonotonic, &[2, 10, 15], &[1, 1, 2], &[2, 10, 15]).unwrap();
        assert_approx_eq!(ts.utilization(), 0.7333, 0.0001);
    }

    #[test]
    fn policy_order() {
        let mut tasks = vec![
            Task::new(s(2), d(13)).with_deadline(d(15)),
            Task::new(s(1), d(7)),
            Task::new(s(1), d(2)),
            Task::new(s(1), d(5)).with_deadline(d(3)),
        ];

        PriorityPolicy::RateMonotonic.sort(&mut tasks);
        let periods: Vec<_> = tasks.iter().map(|t| u64::from(t.period)).collect();
        assert_eq!(periods, vec![2, 5, 7, 13]);

        PriorityPolicy::DeadlineMonotonic.sort(&mut tasks);
        let deadlines: Vec<_> = tasks.iter().map(|t| u64::from(t.deadline)).collect();
        assert_eq!(deadlines, vec![2, 3, 7, 15]);

        let t = tasks[1];
        assert_eq!(PriorityPolicy::RateMonotonic.priority_key(&t), d(5));
        assert_eq!(PriorityPolicy::DeadlineMonotonic.priority_key(&t), d(3));
        // the window always ends at the deadline
        assert_eq!(PriorityPolicy::RateMonotonic.analysis_window(&t), d(3));
        assert_eq!(PriorityPolicy::DeadlineMonotonic.analysis_window(&t), d(3));
        let implicit = Task::new(s(1), d(5));
        assert_eq!(
            PriorityPolicy::RateMonotonic.analysis_window(&implicit),
            PriorityPolicy::RateMonotonic.priority_key(&implicit)
        );
    }
}

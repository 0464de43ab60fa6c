//! Running a battery of tests on a task set and rendering the outcome.

use std::fmt;

use itertools::Itertools;

use crate::fixed_priority::{completion_time_test, dm_quick_test, scheduling_point_test};
use crate::task::{PriorityPolicy, TaskSet};
use crate::utilization::{liu_layland_bound, utilization_100_test, utilization_bound_test};

/// The available feasibility tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Test {
    /// Liu & Layland least upper bound (sufficient).
    UtilizationBound,
    /// Response-time recurrence (exact).
    CompletionTime,
    /// Critical-instant enumeration (exact).
    SchedulingPoint,
    /// Total utilization at most 100% (exact for EDF/LLF only).
    Utilization100,
    /// Deadline-monotonic demand bound (sufficient).
    DmQuick,
}

impl Test {
    pub const ALL: [Test; 5] = [
        Test::UtilizationBound,
        Test::CompletionTime,
        Test::SchedulingPoint,
        Test::Utilization100,
        Test::DmQuick,
    ];

    pub fn run(&self, task_set: &TaskSet) -> bool {
        match self {
            Test::UtilizationBound => utilization_bound_test(task_set),
            Test::CompletionTime => completion_time_test(task_set),
            Test::SchedulingPoint => scheduling_point_test(task_set),
            Test::Utilization100 => utilization_100_test(task_set),
            Test::DmQuick => dm_quick_test(task_set),
        }
    }

    /// Whether a negative verdict of the test proves infeasibility
    /// under fixed priorities.
    pub fn is_exact(&self) -> bool {
        matches!(self, Test::CompletionTime | Test::SchedulingPoint)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Test::UtilizationBound => "RM LUB",
            Test::CompletionTime => "CT test",
            Test::SchedulingPoint => "SP test",
            Test::Utilization100 => "U<=100% (EDF/LLF)",
            Test::DmQuick => "DM quick",
        }
    }

    /// The tests that are meaningful for a set ordered by `policy`.
    pub fn defaults_for(policy: PriorityPolicy) -> &'static [Test] {
        match policy {
            PriorityPolicy::RateMonotonic => &[
                Test::CompletionTime,
                Test::SchedulingPoint,
                Test::UtilizationBound,
                Test::Utilization100,
            ],
            PriorityPolicy::DeadlineMonotonic => {
                &[Test::CompletionTime, Test::SchedulingPoint, Test::DmQuick]
            }
        }
    }
}

impl fmt::Display for Test {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The verdicts of several tests on one named task set.
#[derive(Debug, Clone)]
pub struct Report {
    pub name: String,
    pub task_set: TaskSet,
    pub verdicts: Vec<(Test, bool)>,
}

impl Report {
    /// Run `tests` on `task_set`, or the defaults for its policy if
    /// `tests` is empty.
    pub fn new(name: impl Into<String>, task_set: TaskSet, tests: &[Test]) -> Self {
        let tests = if tests.is_empty() {
            Test::defaults_for(task_set.policy())
        } else {
            tests
        };
        let name = name.into();
        let verdicts = tests
            .iter()
            .map(|t| (*t, t.run(&task_set)))
            .collect();
        tracing::debug!(task_set = %name, "analysis complete");
        Report {
            name,
            task_set,
            verdicts,
        }
    }

    pub fn utilization_percent(&self) -> f64 {
        self.task_set.utilization() * 100.0
    }

    /// The verdict of the exact tests, if any exact test was run.
    ///
    /// Returns `None` if no exact test was run or if the exact tests
    /// disagree (which can only happen for deadlines beyond periods).
    pub fn exact_verdict(&self) -> Option<bool> {
        self.verdicts
            .iter()
            .filter(|(t, _)| t.is_exact())
            .map(|(_, v)| *v)
            .dedup()
            .exactly_one()
            .ok()
    }

    pub fn verdict(&self, test: Test) -> Option<bool> {
        self.verdicts
            .iter()
            .find(|(t, _)| *t == test)
            .map(|(_, v)| *v)
    }

    fn parameters(&self) -> String {
        let ts = &self.task_set;
        let wcets = ts.iter().enumerate().map(|(i, t)| format!("C{}={}", i + 1, t.wcet)).join(", ");
        let periods = ts.iter().enumerate().map(|(i, t)| format!("T{}={}", i + 1, t.period)).join(", ");
        if ts.iter().all(|t| t.has_implicit_deadline()) {
            format!("{wcets}; {periods}; T=D")
        } else {
            let deadlines = ts.iter().enumerate().map(|(i, t)| format!("D{}={}", i + 1, t.deadline)).join(", ");
            format!("{wcets}; {periods}; {deadlines}")
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} U={:4.2}% ({}) [{}, LUB({})={:.4}]",
            self.name,
            self.utilization_percent(),
            self.parameters(),
            self.task_set.policy().name(),
            self.task_set.len(),
            liu_layland_bound(self.task_set.len()),
        )?;
        for (test, feasible) in &self.verdicts {
            let verdict = if *feasible { "FEASIBLE" } else { "INFEASIBLE" };
            writeln!(f, "  {:<18} {}", test.name(), verdict)?;
        }
        Ok(())
    }
}

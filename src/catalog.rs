//! The built-in battery of example task sets.

use crate::task::{PriorityPolicy, TaskSet, TaskSetError};

/// A named task set.
#[derive(Debug, Clone)]
pub struct Example {
    pub name: &'static str,
    pub task_set: TaskSet,
}

fn implicit(name: &'static str, periods: &[u64], wcets: &[u64]) -> Result<Example, TaskSetError> {
    Ok(Example {
        name,
        task_set: TaskSet::from_columns(PriorityPolicy::RateMonotonic, periods, wcets, periods)?,
    })
}

/// Rate-monotonic examples with implicit deadlines, in increasing
/// period order.
pub fn rate_monotonic() -> Result<Vec<Example>, TaskSetError> {
    Ok(vec![
        // U = 0.7333
        implicit("Ex-0", &[2, 10, 15], &[1, 1, 2])?,
        // U = 0.9857
        implicit("Ex-1", &[2, 5, 7], &[1, 1, 2])?,
        // U = 0.9967
        implicit("Ex-2", &[2, 5, 7, 13], &[1, 1, 1, 2])?,
        // U = 0.9333
        implicit("Ex-3", &[3, 5, 15], &[1, 2, 3])?,
        // U = 1.0
        implicit("Ex-4", &[2, 4, 16], &[1, 1, 4])?,
        implicit("Ex-5", &[2, 5, 10], &[1, 2, 1])?,
        implicit("Ex-7", &[3, 5, 15], &[1, 2, 4])?,
        implicit("Ex-8", &[2, 5, 7, 13], &[1, 1, 1, 2])?,
        implicit("Ex-9", &[6, 8, 12, 24], &[1, 2, 4, 6])?,
    ])
}

/// The tasks of Ex-2 with relaxed deadlines, in increasing deadline
/// order.
pub fn deadline_monotonic() -> Result<Example, TaskSetError> {
    Ok(Example {
        name: "Ex-6",
        task_set: TaskSet::from_columns(
            PriorityPolicy::DeadlineMonotonic,
            &[2, 5, 7, 13],
            &[1, 1, 1, 2],
            &[2, 3, 7, 15],
        )?,
    })
}

/// All built-in examples.
pub fn all() -> Result<Vec<Example>, TaskSetError> {
    let mut examples = rate_monotonic()?;
    examples.push(deadline_monotonic()?);
    Ok(examples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed_priority::{completion_time_test, dm_quick_test, scheduling_point_test};
    use crate::utilization::{utilization_100_test, utilization_bound_test};
    use assert_approx_eq::assert_approx_eq;

    fn example(name: &str) -> TaskSet {
        all()
            .unwrap()
            .into_iter()
            .find(|e| e.name == name)
            .unwrap()
            .task_set
    }

    #[test]
    fn examples_are_ordered_by_policy() {
        for e in all().unwrap() {
            let policy = e.task_set.policy();
            let keys: Vec<_> = e.task_set.iter().map(|t| policy.priority_key(t)).collect();
            assert!(keys.windows(2).all(|w| w[0] <= w[1]), "{} out of order", e.name);
        }
    }

    #[test]
    fn rate_monotonic_verdicts() {
        // (name, utilization, LUB, exact)
        let expected = [
            ("Ex-0", 0.7333, true, true),
            ("Ex-1", 0.9857, false, false),
            ("Ex-2", 0.9967, false, false),
            ("Ex-3", 0.9333, false, true),
            ("Ex-4", 1.0, false, true),
            ("Ex-5", 1.0, false, true),
            ("Ex-7", 1.0, false, true),
            ("Ex-8", 0.9967, false, false),
            ("Ex-9", 1.0, false, true),
        ];
        for (name, u, lub, exact) in expected {
            let ts = example(name);
            assert_approx_eq!(ts.utilization(), u, 1e-4);
            assert_eq!(utilization_bound_test(&ts), lub, "{name}");
            assert_eq!(completion_time_test(&ts), exact, "{name}");
            assert_eq!(scheduling_point_test(&ts), exact, "{name}");
            assert!(utilization_100_test(&ts), "{name}");
        }
    }

    #[test]
    fn deadline_monotonic_verdicts() {
        let ts = example("Ex-6");
        assert!(completion_time_test(&ts));
        assert!(!scheduling_point_test(&ts));
        assert!(!dm_quick_test(&ts));
    }
}

/*! Utilization-based feasibility tests

- [utilization_bound_test]: the sufficient rate-monotonic least upper
  bound (**RM LUB**) of Liu & Layland.
- [utilization_100_test]: the necessary and sufficient bound for
  dynamic-priority scheduling (EDF and LLF). Under fixed priorities it
  is merely necessary.

Both tests look only at `wcet / period` and hence assume implicit
deadlines.

## Citation

- C. L. Liu and J. W. Layland, “Scheduling Algorithms for Multiprogramming in a Hard-Real-Time Environment”, *Journal of the ACM*, 20(1):46--61, 1973.
*/

use num_order::NumOrd;

use crate::task::TaskSet;

/// The Liu & Layland least upper bound `n * (2^(1/n) - 1)` on the
/// utilization of `n` tasks that are guaranteed to be schedulable
/// under rate-monotonic priorities.
///
/// The bound is `1.0` for a single task and decreases strictly
/// towards `ln 2` as `n` grows. For `n = 0` it is defined as `0.0`.
pub fn liu_layland_bound(n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let nf = n as f64;
    nf * (2.0_f64.powf(1.0 / nf) - 1.0)
}

/// Sufficient test: the task set is feasible under rate-monotonic
/// priorities if its utilization does not exceed
/// [liu_layland_bound]. A negative result proves nothing.
pub fn utilization_bound_test(task_set: &TaskSet) -> bool {
    if task_set.is_empty() {
        return true;
    }
    let mut utility_sum = 0.0;
    for (i, task) in task_set.iter().enumerate() {
        utility_sum += task.utilization();
        tracing::trace!(task = i, wcet = %task.wcet, period = %task.period, utility_sum);
    }
    let lub = liu_layland_bound(task_set.len());
    let feasible = utility_sum <= lub;
    tracing::debug!(utility_sum, lub, feasible, "RM least upper bound");
    feasible
}

/// Necessary and sufficient test for dynamic-priority (EDF/LLF)
/// scheduling: total utilization of at most 100%.
///
/// The sum is computed exactly, so a set such as `{1/6, 2/8, 4/12,
/// 6/24}` is recognized as using exactly 100% of the processor.
pub fn utilization_100_test(task_set: &TaskSet) -> bool {
    let feasible = task_set.exact_utilization().num_le(&1usize);
    tracing::debug!(utilization = task_set.utilization(), feasible, "100% utilization bound");
    feasible
}

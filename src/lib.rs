/*! Feasibility tests for periodic task sets under fixed priorities

This crate decides whether every job of a set of periodic tasks,
scheduled by preemptive fixed priorities on a single dedicated
processor, always completes by its deadline. It provides:

- the sufficient rate-monotonic utilization bound of Liu & Layland
  ([utilization::utilization_bound_test]),
- the exact completion-time test
  ([fixed_priority::completion_time_test]),
- the exact scheduling-point test
  ([fixed_priority::scheduling_point_test]),
- the 100% utilization test, which is exact for EDF and LLF
  ([utilization::utilization_100_test]), and
- a sufficient demand bound for deadline-monotonic priorities
  ([fixed_priority::dm_quick_test]).

All tests are pure functions of an immutable [task::TaskSet], whose
order encodes priority (index 0 is the highest priority).

```
use rt_feasibility::task::{Task, TaskSet};
use rt_feasibility::time::{Duration, Service};
use rt_feasibility::{fixed_priority, utilization};

let task = |c: u64, p: u64| Task::new(Service::from(c), Duration::from(p));
let ts = TaskSet::rate_monotonic(vec![task(1, 2), task(1, 4), task(4, 16)]).unwrap();

assert!(!utilization::utilization_bound_test(&ts));
assert!(fixed_priority::completion_time_test(&ts));
assert!(fixed_priority::scheduling_point_test(&ts));
```
*/

pub mod arrival;
pub mod catalog;
pub mod config;
pub mod demand;
pub mod fixed_point;
pub mod fixed_priority;
pub mod report;
pub mod supply;
pub mod task;
pub mod time;
pub mod utilization;
pub mod wcet;

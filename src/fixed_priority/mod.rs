/*! Feasibility tests for *fixed-priority* (**FP**) scheduling

This module collects the tests for periodic task sets scheduled by
fully preemptive fixed priorities on a dedicated uniprocessor. The
task set must be ordered by the priority policy it is analyzed for
(index 0 = highest priority); see [PriorityPolicy][crate::task::PriorityPolicy].

- [completion_time]: the exact response-time recurrence.
- [scheduling_point]: the exact critical-instant test.
- [dm_quick]: a sufficient demand bound for deadline-monotonic order.

## Citation

The provided tests are based on the following papers:

- M. Joseph and P. Pandya, “Finding Response Times in a Real-Time System”, *The Computer Journal*, 29(5):390--395, 1986.
- J. Lehoczky, L. Sha, and Y. Ding, “The Rate Monotonic Scheduling Algorithm: Exact Characterization and Average Case Behavior”, *Proceedings of the 10th IEEE Real-Time Systems Symposium (RTSS 1989)*, pp.&nbsp;166--171, 1989.
- N. C. Audsley, A. Burns, M. F. Richardson, and A. J. Wellings, “Hard Real-Time Scheduling: The Deadline-Monotonic Approach”, *IFAC Proceedings Volumes*, 24(2):127--132, 1991.
*/

pub mod completion_time;
pub mod dm_quick;
pub mod scheduling_point;

pub use completion_time::completion_time_test;
pub use dm_quick::dm_quick_test;
pub use scheduling_point::scheduling_point_test;

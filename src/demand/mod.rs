/*! Models of processor demand

The central trait is [RequestBound], which bounds the cumulative
processor demand of one or more tasks in an interval. In the
fixed-priority tests of this crate, the demand of the task under
analysis and of all higher-priority tasks is assembled from per-task
[RBF]s via [Slice]. */

use auto_impl::auto_impl;

use crate::time::{Duration, Service};

/// The general interface for processor demand.
/// This can represent the demand of a single task, or the cumulative
/// demand of multiple tasks.
#[auto_impl(&, Box, Rc)]
pub trait RequestBound {
    /// Bound the total amount of service needed in an interval of length `delta`.
    fn service_needed(&self, delta: Duration) -> Service;
}

mod rbf;
mod slice;

pub use rbf::RBF;
pub use slice::Slice;

#[cfg(test)]
mod tests;

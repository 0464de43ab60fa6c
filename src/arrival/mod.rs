/*! Models of arrival processes

This module provides the trait [ArrivalBound], which bounds the number
of job releases in an interval, and its implementation for the classic
[Periodic] task of Liu & Layland. Since all analyses in this crate
assume a synchronous release of all tasks at the critical instant, the
periodic bound is exact for the first busy window.
*/

use auto_impl::auto_impl;

use crate::time::Duration;

/// The main interface for models describing arrival processes.
#[auto_impl(&, Box, Rc)]
pub trait ArrivalBound {
    /// Bound the number of jobs released in any interval of length `delta`.
    fn number_arrivals(&self, delta: Duration) -> usize;

    /// Yield the instants at which jobs are released after the
    /// critical instant, in increasing order, up to and including
    /// `horizon`. The release at time zero itself is not included.
    fn releases_until<'a>(&'a self, horizon: Duration) -> Box<dyn Iterator<Item = Duration> + 'a>;
}

mod periodic;

pub use periodic::Periodic;

#[cfg(test)]
mod tests;

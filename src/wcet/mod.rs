/*! Models of job execution costs */

use auto_impl::auto_impl;

use crate::time::Service;

/// The interface for models of the *maximum* execution cost of a
/// sequence of jobs.
#[auto_impl(&, Box, Rc)]
pub trait JobCostModel {
    /// Yield the maximum cumulative processor demand of any `n`
    /// consecutive jobs.
    fn cost_of_jobs(&self, n: usize) -> Service;
}

mod scalar;

pub use scalar::Scalar;

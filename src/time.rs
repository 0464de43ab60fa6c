/*! The discrete time model.

All task parameters are integral multiples of some fixed time unit
(e.g., microseconds). Two newtypes keep the two roles of a time value
apart: [Duration] for interval lengths and points in time measured
from the critical instant, and [Service] for amounts of processor
time (i.e., execution costs and demand). */

use derive_more::{Add, AddAssign, Display, From, Into, Mul, Sub, Sum};

/// The length of an interval, or equivalently a point in time
/// relative to the critical instant at time zero.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Add,
    AddAssign,
    Sub,
    Mul,
    Sum,
    From,
    Into,
    Display,
)]
pub struct Duration(u64);

impl Duration {
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Number of complete intervals of length `other` that fit into `self`.
    pub fn div_floor(self, other: Duration) -> u64 {
        self.0 / other.0
    }

    /// Number of intervals of length `other` needed to cover `self`.
    pub fn div_ceil(self, other: Duration) -> u64 {
        self.0 / other.0 + (self.0 % other.0 > 0) as u64
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

/// An amount of processor service (e.g., a WCET or the cumulative
/// demand of several jobs).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Add,
    AddAssign,
    Sub,
    Mul,
    Sum,
    From,
    Into,
    Display,
)]
pub struct Service(u64);

impl Service {
    /// The maximum amount of service a dedicated processor can
    /// provide during an interval of length `delta`.
    pub const fn in_interval(delta: Duration) -> Service {
        Service(delta.0)
    }

    pub const fn is_none(&self) -> bool {
        self.0 == 0
    }

    /// Sum of two amounts of service, saturating at `u64::MAX`.
    pub const fn saturating_add(self, other: Service) -> Service {
        Service(self.0.saturating_add(other.0))
    }

    /// `n` times the given amount of service, saturating at `u64::MAX`.
    pub const fn saturating_mul(self, n: u64) -> Service {
        Service(self.0.saturating_mul(n))
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

impl From<Service> for Duration {
    fn from(s: Service) -> Duration {
        Duration(s.0)
    }
}

use super::JobCostModel;
use crate::time::Service;

/// The classic scalar WCET bound: every job of the task costs at most
/// `wcet` time units of service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scalar {
    wcet: Service,
}

impl Scalar {
    pub fn new(wcet: Service) -> Self {
        Scalar { wcet }
    }
}

impl From<Service> for Scalar {
    fn from(val: Service) -> Self {
        Self::new(val)
    }
}

impl JobCostModel for Scalar {
    fn cost_of_jobs(&self, n: usize) -> Service {
        self.wcet.saturating_mul(n as u64)
    }
}

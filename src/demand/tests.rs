use crate::arrival::Periodic;
use crate::demand::{self, RequestBound};
use crate::tests::{d, s};
use crate::wcet;

fn rbfs(params: &[(u64, u64)]) -> Vec<demand::RBF<Periodic, wcet::Scalar>> {
    params
        .iter()
        .map(|(wcet, period)| demand::RBF::new(Periodic::new(d(*period)), wcet::Scalar::new(s(*wcet))))
        .collect()
}

#[test]
fn periodic_rbf() {
    let rbf = &rbfs(&[(2, 15)])[0];
    assert_eq!(rbf.service_needed(d(0)), s(0));
    assert_eq!(rbf.service_needed(d(1)), s(2));
    assert_eq!(rbf.service_needed(d(15)), s(2));
    assert_eq!(rbf.service_needed(d(16)), s(4));
}

#[test]
fn slice_sums_components() {
    let all = rbfs(&[(1, 2), (1, 10), (2, 15)]);

    // demand of all three tasks at t = 6: 3*1 + 1*1 + 1*2
    assert_eq!(demand::Slice::of(&all).service_needed(d(6)), s(6));
    // higher-priority interference only
    assert_eq!(demand::Slice::of(&all[..2]).service_needed(d(6)), s(4));
    // an empty slice never demands anything
    assert_eq!(demand::Slice::of(&all[..0]).service_needed(d(600)), s(0));
}

#[test]
fn demand_saturates() {
    let all = rbfs(&[(1, 2), (1, 2), (1, 3)]);
    let horizon = d(u64::MAX - 1);
    // each component fits into u64, their sum does not
    assert_eq!(all[0].service_needed(horizon), s(u64::MAX / 2));
    assert_eq!(demand::Slice::of(&all).service_needed(horizon), s(u64::MAX));
}

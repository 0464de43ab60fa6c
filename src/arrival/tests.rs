use crate::arrival::{self, ArrivalBound};

use crate::tests::d;

#[test]
fn periodic_arrivals() {
    let a = arrival::Periodic { period: d(10) };
    assert_eq!(a.number_arrivals(d(0)), 0);
    assert_eq!(a.number_arrivals(d(1)), 1);
    assert_eq!(a.number_arrivals(d(8)), 1);
    assert_eq!(a.number_arrivals(d(10)), 1);
    assert_eq!(a.number_arrivals(d(11)), 2);
    assert_eq!(a.number_arrivals(d(12)), 2);
    assert_eq!(a.number_arrivals(d(13)), 2);
    assert_eq!(a.number_arrivals(d(100)), 10);
    assert_eq!(a.number_arrivals(d(105)), 11);
}

#[test]
fn periodic_releases() {
    let a = arrival::Periodic::new(d(5));
    let r: Vec<_> = a.releases_until(d(16)).collect();
    assert_eq!(r, vec![d(5), d(10), d(15)]);

    let r: Vec<_> = a.releases_until(d(15)).collect();
    assert_eq!(r, vec![d(5), d(10), d(15)]);

    // a horizon shorter than one period contains no release
    assert_eq!(a.releases_until(d(3)).count(), 0);
}

#[test]
fn releases_agree_with_arrival_steps() {
    // Each release instant t is the last instant before the arrival
    // bound steps, i.e., number_arrivals(t + 1) > number_arrivals(t).
    let a = arrival::Periodic::new(d(7));
    for t in a.releases_until(d(700)) {
        assert_eq!(a.number_arrivals(t) + 1, a.number_arrivals(t + d(1)));
    }
}

use super::ArrivalBound;
use crate::time::Duration;

/// Classic jitter-free periodic arrival process as introduced by Liu & Layland.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Periodic {
    /// The exact separation between two job releases.
    pub period: Duration,
}

impl Periodic {
    pub fn new(period: Duration) -> Self {
        Periodic { period }
    }
}

impl ArrivalBound for Periodic {
    fn number_arrivals(&self, delta: Duration) -> usize {
        delta.div_ceil(self.period) as usize
    }

    fn releases_until<'a>(&'a self, horizon: Duration) -> Box<dyn Iterator<Item = Duration> + 'a> {
        // implicit floor: only complete periods fit into the horizon
        let n = horizon.div_floor(self.period);
        Box::new((1..=n).map(move |l| self.period * l))
    }
}

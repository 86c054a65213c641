//! Wall-clock abstraction used for seeding (whole epoch seconds).
use std::time::{SystemTime, UNIX_EPOCH};

pub trait Clock {
    fn now_epoch_secs(&self) -> u64;
}

/// `Clock` backed by `SystemTime`. A clock set before the Unix epoch reads as 0.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_secs(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}

/// A clock stuck at the given second.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_epoch_secs(&self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_past_2020() {
        assert!(SystemClock.now_epoch_secs() > 1_577_836_800);
    }

    #[test]
    fn fixed_clock_reads_back() {
        assert_eq!(FixedClock(17).now_epoch_secs(), 17);
    }
}

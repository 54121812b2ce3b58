//! Delayed auto-clear of transient cell flags
//!
//! Setting a `highlighted` or `errored` flag schedules a clear a fixed
//! duration later (1.0s and 0.5s respectively). Timers are independent and
//! never cancelled: re-flagging a cell before its timer fires queues a
//! second clear, and the flag ends up cleared by whichever fires last.
//! Clears are unconditional writes of `false`, so double-firing is harmless.
//!
//! There are no threads here. The queue is drained by
//! [`FlagTimers::fire_due`], driven from the UI poll loop (or directly from
//! tests with a synthetic `Instant`).

use crate::memory::cell::Address;
use std::time::{Duration, Instant};

/// Which transient flag a scheduled clear applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    Highlight,
    Error,
}

impl Flag {
    /// How long the flag stays set
    pub fn duration(self) -> Duration {
        match self {
            Flag::Highlight => Duration::from_millis(1000),
            Flag::Error => Duration::from_millis(500),
        }
    }
}

#[derive(Debug, Clone)]
struct PendingClear {
    due: Instant,
    address: Address,
    flag: Flag,
}

/// Queue of scheduled flag clears for the active grid
#[derive(Debug, Default)]
pub struct FlagTimers {
    pending: Vec<PendingClear>,
}

impl FlagTimers {
    pub fn new() -> Self {
        FlagTimers {
            pending: Vec::new(),
        }
    }

    /// Schedule a clear of `flag` on `address`, `flag.duration()` from `now`
    pub fn schedule(&mut self, address: Address, flag: Flag, now: Instant) {
        self.pending.push(PendingClear {
            due: now + flag.duration(),
            address,
            flag,
        });
    }

    /// Remove and return every entry due at `now`
    pub fn fire_due(&mut self, now: Instant) -> Vec<(Address, Flag)> {
        let mut fired = Vec::new();
        self.pending.retain(|entry| {
            if entry.due <= now {
                fired.push((entry.address.clone(), entry.flag));
                false
            } else {
                true
            }
        });
        fired
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drop all pending clears (the grid they referred to is gone)
    pub fn reset(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(label: &str) -> Address {
        Address::new(label)
    }

    #[test]
    fn fires_only_when_due() {
        let mut timers = FlagTimers::new();
        let t0 = Instant::now();
        timers.schedule(addr("0x7000"), Flag::Error, t0);

        assert!(timers.fire_due(t0 + Duration::from_millis(499)).is_empty());
        let fired = timers.fire_due(t0 + Duration::from_millis(500));
        assert_eq!(fired, vec![(addr("0x7000"), Flag::Error)]);
        assert!(timers.is_idle());
    }

    #[test]
    fn overlapping_timers_both_fire() {
        let mut timers = FlagTimers::new();
        let t0 = Instant::now();
        timers.schedule(addr("0x7004"), Flag::Highlight, t0);
        timers.schedule(addr("0x7004"), Flag::Highlight, t0 + Duration::from_millis(600));

        // First clear fires at t0 + 1.0s; the re-flag's clear is still queued.
        let fired = timers.fire_due(t0 + Duration::from_millis(1000));
        assert_eq!(fired.len(), 1);
        assert!(!timers.is_idle());

        let fired = timers.fire_due(t0 + Duration::from_millis(1600));
        assert_eq!(fired.len(), 1);
        assert!(timers.is_idle());
    }

    #[test]
    fn error_clears_sooner_than_highlight() {
        let mut timers = FlagTimers::new();
        let t0 = Instant::now();
        timers.schedule(addr("0x7000"), Flag::Highlight, t0);
        timers.schedule(addr("0x7008"), Flag::Error, t0);

        let fired = timers.fire_due(t0 + Duration::from_millis(500));
        assert_eq!(fired, vec![(addr("0x7008"), Flag::Error)]);
    }
}

// 2.0: mid-price tracking. each instrument carries the latest fair-price estimate
// derived from trade ticks; 0 means no price has been observed yet.
//
// the mid is truncated to whole tick-size units: (bid + ask) / (2 * tick) * tick.
// this coarse rounding is intentional strategy behavior, not lost precision.

use crate::types::{Instrument, TopOfBook};
use serde::{Deserialize, Serialize};

// 2.1: computes a mid from top-of-book, or None when the tick carried no market.
// degenerate one-sided books use the surviving side's price unrounded.
pub fn mid_from_tick(top: TopOfBook, tick_size: i64) -> Option<i64> {
    if top.is_empty() {
        None
    } else if top.best_bid == 0 {
        Some(top.best_ask)
    } else if top.best_ask == 0 {
        Some(top.best_bid)
    } else {
        Some((top.best_bid + top.best_ask) / (2 * tick_size) * tick_size)
    }
}

// 2.2: latest mid per instrument. 0 = unknown, matching the wire convention
// where absent prices come through as zero.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MidCache {
    pub etf_mid: i64,
    pub fut_mid: i64,
}

impl MidCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, instrument: Instrument) -> i64 {
        match instrument {
            Instrument::Etf => self.etf_mid,
            Instrument::Future => self.fut_mid,
        }
    }

    pub fn set(&mut self, instrument: Instrument, mid: i64) {
        match instrument {
            Instrument::Etf => self.etf_mid = mid,
            Instrument::Future => self.fut_mid = mid,
        }
    }

    // quoting needs a valid price on both legs
    pub fn both_known(&self) -> bool {
        self.etf_mid > 0 && self.fut_mid > 0
    }
}

// 2.3: freshness gate between the two tick streams. a FUTURE tick arms the
// signal; the next ETF tick consumes it. quoting therefore fires at most once
// per hedge observation, never on every ETF tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HedgeSignal {
    #[default]
    NoHedgeData,
    HedgeDataFresh,
}

impl HedgeSignal {
    pub fn arm(&mut self) {
        *self = HedgeSignal::HedgeDataFresh;
    }

    /// Read-and-reset: returns whether the signal was fresh, leaving it consumed.
    pub fn consume(&mut self) -> bool {
        let fresh = *self == HedgeSignal::HedgeDataFresh;
        *self = HedgeSignal::NoHedgeData;
        fresh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: i64 = 100;

    #[test]
    fn mid_rounds_down_to_tick() {
        // (100 + 300) / 200 * 100 = 200
        assert_eq!(mid_from_tick(TopOfBook::new(100, 300), TICK), Some(200));
        // (150 + 340) / 200 * 100 = 200, truncation drops the remainder
        assert_eq!(mid_from_tick(TopOfBook::new(150, 340), TICK), Some(200));
    }

    #[test]
    fn one_sided_market_uses_surviving_side() {
        assert_eq!(mid_from_tick(TopOfBook::new(0, 300), TICK), Some(300));
        assert_eq!(mid_from_tick(TopOfBook::new(250, 0), TICK), Some(250));
    }

    #[test]
    fn empty_market_yields_no_mid() {
        assert_eq!(mid_from_tick(TopOfBook::new(0, 0), TICK), None);
    }

    #[test]
    fn cache_tracks_per_instrument() {
        let mut cache = MidCache::new();
        assert!(!cache.both_known());

        cache.set(Instrument::Etf, 1000);
        assert!(!cache.both_known());

        cache.set(Instrument::Future, 1400);
        assert!(cache.both_known());
        assert_eq!(cache.get(Instrument::Etf), 1000);
        assert_eq!(cache.get(Instrument::Future), 1400);
    }

    #[test]
    fn hedge_signal_consumed_once() {
        let mut signal = HedgeSignal::default();
        assert!(!signal.consume());

        signal.arm();
        assert!(signal.consume());
        // second read sees it spent
        assert!(!signal.consume());
    }

    #[test]
    fn rearming_after_consume_works() {
        let mut signal = HedgeSignal::default();
        signal.arm();
        signal.arm();
        assert!(signal.consume());
        signal.arm();
        assert!(signal.consume());
    }
}

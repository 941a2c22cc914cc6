// 1.0: all the primitives live here. nothing in the engine works without these types.
// order ids, sides, instrument roles, timestamps. prices and volumes stay plain i64
// (integer cents / integer lots) because every formula in the strategy is exact
// integer arithmetic, including the deliberately truncating mid computation.

use serde::{Deserialize, Serialize};
use std::fmt;

// process-unique, monotonically increasing, shared across quote and hedge orders.
// never reused while an order is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub u64);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// 1.1: the two legs of the pair. Etf is the tracked/quoted instrument,
// Future is the hedge instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instrument {
    Etf,
    Future,
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instrument::Etf => write!(f, "ETF"),
            Instrument::Future => write!(f, "FUTURE"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }

    // +1 for a buy fill, -1 for a sell fill, applied to position
    pub fn sign(&self) -> i64 {
        match self {
            Side::Buy => 1,
            Side::Sell => -1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

// 1.2: what an outstanding order is for. Quote orders count against the
// active-order and active-volume risk caps; Hedge orders never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderRole {
    Quote,
    Hedge,
}

// 1.3: order lifespan forwarded to the gateway. the active strategy only
// uses GoodForDay; FillAndKill exists because the wire protocol has it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lifespan {
    GoodForDay,
    FillAndKill,
}

// 1.4: top-of-book view of one trade-tick event. the gateway delivers
// price/volume ladders; the strategy only ever reads the best level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopOfBook {
    pub best_bid: i64,
    pub best_ask: i64,
}

impl TopOfBook {
    pub fn new(best_bid: i64, best_ask: i64) -> Self {
        Self { best_bid, best_ask }
    }

    // zero on both sides means the tick carried no market
    pub fn is_empty(&self) -> bool {
        self.best_bid == 0 && self.best_ask == 0
    }
}

// 1.5: millisecond timestamp, stamped on audit events only. the engine has
// no scheduler; time never drives a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub fn now() -> Self {
        Self(chrono::Utc::now().timestamp_millis())
    }

    pub fn from_millis(ms: i64) -> Self {
        Self(ms)
    }

    pub fn as_millis(&self) -> i64 {
        self.0
    }
}

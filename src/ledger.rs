// 3.0: the risk ledger. every scalar the strategy is risk-capped on lives here:
// net positions, active quote exposure, realized cash per instrument.
// mutated only from the single reactive thread, one complete transition per event.
//
// sign conventions (cash moves opposite to inventory):
//   ask fill:       etf_position -= v, etf_profit += v * p
//   bid fill:       etf_position += v, etf_profit -= v * p
//   hedge-bid fill: fut_position += v, fut_profit -= v * p
//   hedge-ask fill: fut_position -= v, fut_profit += v * p

use crate::config::TraderConfig;
use crate::types::Side;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RiskLedger {
    /// Net ETF position from quote fills. Bounded by the position limit.
    pub etf_position: i64,
    /// Net Future position from hedge fills.
    pub fut_position: i64,
    /// Outstanding quote orders. Hedge orders are never counted.
    pub active_orders: i64,
    /// Total quoted volume outstanding across both sides.
    pub active_volume: i64,
    /// Quoted volume outstanding on the bid side.
    pub active_bid: i64,
    /// Quoted volume outstanding on the ask side.
    pub active_ask: i64,
    /// Realized ETF cash, in cents.
    pub etf_profit: i64,
    /// Realized Future cash, in cents.
    pub fut_profit: i64,
}

impl RiskLedger {
    pub fn new() -> Self {
        Self::default()
    }

    // 3.1: a new quote order was issued. takes the slot and the volume.
    pub fn reserve_quote(&mut self, side: Side, volume: i64) {
        self.active_orders += 1;
        self.active_volume += volume;
        match side {
            Side::Buy => self.active_bid += volume,
            Side::Sell => self.active_ask += volume,
        }
    }

    // 3.2: a quote order went terminal. the counters release the terminal
    // event's fill volume verbatim, which is the strategy's own accounting
    // convention for partially filled orders.
    pub fn release_quote(&mut self, side: Side, fill_volume: i64) {
        self.active_orders -= 1;
        self.active_volume -= fill_volume;
        match side {
            Side::Buy => self.active_bid -= fill_volume,
            Side::Sell => self.active_ask -= fill_volume,
        }
    }

    // 3.3: a quote fill moves inventory one way and cash the other.
    pub fn apply_quote_fill(&mut self, side: Side, volume: i64, price: i64) {
        self.etf_position += side.sign() * volume;
        self.etf_profit -= side.sign() * volume * price;
    }

    // 3.4: a hedge fill, keyed by the hedge order's own side.
    pub fn apply_hedge_fill(&mut self, side: Side, volume: i64, price: i64) {
        self.fut_position += side.sign() * volume;
        self.fut_profit -= side.sign() * volume * price;
    }

    /// Realized cash plus position marked at the given mid.
    pub fn etf_equity(&self, etf_mid: i64) -> i64 {
        self.etf_profit + self.etf_position * etf_mid
    }

    /// Realized cash plus position marked at the given mid.
    pub fn fut_equity(&self, fut_mid: i64) -> i64 {
        self.fut_profit + self.fut_position * fut_mid
    }

    // 3.5: the hard limits that must hold after every handler returns.
    // exercised by the property tests against random event sequences.
    pub fn within_limits(&self, config: &TraderConfig) -> bool {
        self.etf_position >= -config.position_limit
            && self.etf_position <= config.position_limit
            && self.active_orders >= 0
            && self.active_orders <= config.active_orders_limit
            && self.active_bid >= 0
            && self.active_bid <= config.active_volume_limit
            && self.active_ask >= 0
            && self.active_ask <= config.active_volume_limit
    }
}

//! Strategy configuration: risk limits, ladder tiers, mispricing threshold.
//!
//! All constants are fixed at build time via `Default`; nothing here is hot-reloaded.
//! `validate()` catches a config that could never quote or would divide by zero
//! before the engine starts consuming events.

use serde::{Deserialize, Serialize};

/// One rung of the quoting ladder: a price offset from mid (in cents) and the
/// divisor applied to the available capacity for that rung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LadderTier {
    pub offset: i64,
    pub share: i64,
}

/// Risk limits and quoting parameters for the pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraderConfig {
    /// Hard bound on the ETF net position, both directions.
    pub position_limit: i64,
    /// Maximum number of simultaneously outstanding quote orders.
    pub active_orders_limit: i64,
    /// Cap on total active quoted volume; also applied per side.
    pub active_volume_limit: i64,
    /// Cap on the capacity a single tick may deploy across one ladder.
    pub max_tick_volume: i64,
    /// Ladder rungs, iterated in order on every quoting decision.
    pub tiers: [LadderTier; 3],
    /// Mispricing gate between the two mids, in cents.
    pub threshold: i64,
    /// Price granularity the mid is truncated to, in cents.
    pub tick_size_in_cents: i64,
    /// Exchange lot size. Carried for reporting; the ladder sizes in raw lots.
    pub lot_size: i64,
    /// Guaranteed-to-cross price for a hedge sell (lowest representable bid tick).
    pub min_bid_nearest_tick: i64,
    /// Guaranteed-to-cross price for a hedge buy (highest representable ask tick).
    pub max_ask_nearest_tick: i64,
}

impl Default for TraderConfig {
    fn default() -> Self {
        Self {
            position_limit: 100,
            active_orders_limit: 10,
            active_volume_limit: 200,
            max_tick_volume: 60,
            tiers: [
                LadderTier { offset: 100, share: 3 },
                LadderTier { offset: 200, share: 2 },
                LadderTier { offset: 300, share: 6 },
            ],
            threshold: 300,
            tick_size_in_cents: 100,
            lot_size: 10,
            // MINIMUM_BID and MAXIMUM_ASK rounded to the nearest whole tick
            min_bid_nearest_tick: 100,
            max_ask_nearest_tick: 2_147_483_600,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("position limit must be positive, got {0}")]
    NonPositivePositionLimit(i64),

    #[error("active orders limit must be positive, got {0}")]
    NonPositiveOrdersLimit(i64),

    #[error("active volume limit must be positive, got {0}")]
    NonPositiveVolumeLimit(i64),

    #[error("tick size must be positive, got {0}")]
    NonPositiveTickSize(i64),

    #[error("ladder tier share must be positive, got {0}")]
    NonPositiveTierShare(i64),

    #[error("hedge crossing prices inverted: min bid {min_bid} > max ask {max_ask}")]
    InvertedCrossingPrices { min_bid: i64, max_ask: i64 },
}

impl TraderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.position_limit <= 0 {
            return Err(ConfigError::NonPositivePositionLimit(self.position_limit));
        }
        if self.active_orders_limit <= 0 {
            return Err(ConfigError::NonPositiveOrdersLimit(self.active_orders_limit));
        }
        if self.active_volume_limit <= 0 {
            return Err(ConfigError::NonPositiveVolumeLimit(self.active_volume_limit));
        }
        if self.tick_size_in_cents <= 0 {
            return Err(ConfigError::NonPositiveTickSize(self.tick_size_in_cents));
        }
        for tier in &self.tiers {
            if tier.share <= 0 {
                return Err(ConfigError::NonPositiveTierShare(tier.share));
            }
        }
        if self.min_bid_nearest_tick > self.max_ask_nearest_tick {
            return Err(ConfigError::InvertedCrossingPrices {
                min_bid: self.min_bid_nearest_tick,
                max_ask: self.max_ask_nearest_tick,
            });
        }
        Ok(())
    }
}

// 7.2: market data handlers and the signal & quoting engine.
//
// trade ticks drive everything: a FUTURE tick refreshes the hedge mid and arms
// the hedge signal; an ETF tick refreshes the ETF mid and, if the signal was
// armed, runs the mispricing check and lays the quoting ladders.

use super::core::Engine;
use crate::commands::Command;
use crate::events::{BookObservedEvent, EventPayload, MidUpdatedEvent, QuotePlacedEvent};
use crate::pricing::mid_from_tick;
use crate::types::{Instrument, Lifespan, OrderRole, Side, TopOfBook};

fn top_level(prices: &[i64]) -> i64 {
    prices.first().copied().unwrap_or(0)
}

impl Engine {
    /// Order book depth update. Observed for the audit trail only; the active
    /// strategy quotes off trade ticks, not book updates.
    pub fn on_order_book_update(
        &mut self,
        instrument: Instrument,
        ask_prices: &[i64],
        _ask_volumes: &[i64],
        bid_prices: &[i64],
        _bid_volumes: &[i64],
    ) {
        self.emit_event(EventPayload::BookObserved(BookObservedEvent {
            instrument,
            best_bid: top_level(bid_prices),
            best_ask: top_level(ask_prices),
        }));
    }

    /// Trade tick for either instrument. Updates the mid estimate and, on the
    /// ETF path, may trigger quoting.
    pub fn on_trade_ticks(
        &mut self,
        instrument: Instrument,
        ask_prices: &[i64],
        _ask_volumes: &[i64],
        bid_prices: &[i64],
        _bid_volumes: &[i64],
    ) {
        let top = TopOfBook::new(top_level(bid_prices), top_level(ask_prices));

        match instrument {
            Instrument::Future => {
                self.hedge_signal.arm();
                if let Some(mid) = mid_from_tick(top, self.trader.tick_size_in_cents) {
                    self.mids.set(Instrument::Future, mid);
                    self.emit_event(EventPayload::MidUpdated(MidUpdatedEvent {
                        instrument,
                        mid,
                    }));
                }
            }
            Instrument::Etf => {
                // an empty tick suppresses the quoting decision entirely,
                // leaving the hedge signal armed for the next real tick
                let Some(mid) = mid_from_tick(top, self.trader.tick_size_in_cents) else {
                    return;
                };
                self.mids.set(Instrument::Etf, mid);
                self.emit_event(EventPayload::MidUpdated(MidUpdatedEvent {
                    instrument,
                    mid,
                }));

                if self.hedge_signal.consume() && self.mids.both_known() {
                    self.run_quoting();
                }
            }
        }
    }

    // 7.3: the mispricing gate. both ladders are independent one-sided
    // decisions and may fire on the same tick.
    fn run_quoting(&mut self) {
        let etf_mid = self.mids.etf_mid;
        let fut_mid = self.mids.fut_mid;
        let threshold = self.trader.threshold;

        if etf_mid < fut_mid + threshold {
            // sell capacity: how far the position can go short, net of what is
            // already quoted on the ask side
            let available = self
                .trader
                .max_tick_volume
                .min(self.ledger.etf_position - self.ledger.active_ask + self.trader.position_limit)
                .min(self.trader.active_volume_limit - self.ledger.active_ask)
                .max(0);
            self.place_ladder(Side::Sell, available, etf_mid);
        }
        if etf_mid + threshold > fut_mid {
            let available = self
                .trader
                .max_tick_volume
                .min(-self.ledger.etf_position + self.trader.position_limit - self.ledger.active_bid)
                .min(self.trader.active_volume_limit - self.ledger.active_volume)
                .max(0);
            self.place_ladder(Side::Buy, available, etf_mid);
        }
    }

    // 7.4: lays one ladder of tiered orders around the ETF mid. capacity is
    // computed once per ladder and shared by all tiers without depletion;
    // later tiers draw from the same unreduced pool. a tier sizing to zero is
    // skipped without consuming an order slot.
    fn place_ladder(&mut self, side: Side, available: i64, mid: i64) {
        for tier in self.trader.tiers {
            if self.ledger.active_orders >= self.trader.active_orders_limit {
                continue;
            }
            let volume = available / tier.share;
            if volume <= 0 {
                continue;
            }

            let price = match side {
                Side::Sell => mid + tier.offset,
                // asymmetric on purpose: the buy ladder anchors one tick above
                // mid and walks down through the offsets
                Side::Buy => mid + self.trader.tick_size_in_cents - tier.offset,
            };

            let id = self.next_order_id();
            self.push_command(Command::Insert {
                id,
                side,
                price,
                volume,
                lifespan: Lifespan::GoodForDay,
            });
            self.registry.register(id, side, OrderRole::Quote);
            self.ledger.reserve_quote(side, volume);
            self.emit_event(EventPayload::QuotePlaced(QuotePlacedEvent {
                order_id: id,
                side,
                price,
                volume,
            }));
        }
    }
}

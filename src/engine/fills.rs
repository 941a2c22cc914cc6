// 7.5: fill handlers. a quote fill moves the ETF position and immediately
// issues the offsetting hedge order in the Future at a price guaranteed to
// cross; the hedge's own fill is reconciled when the gateway confirms it.

use super::core::Engine;
use crate::commands::Command;
use crate::events::{EventPayload, HedgeFilledEvent, HedgePlacedEvent, QuoteFilledEvent};
use crate::types::{OrderId, OrderRole, Side};

impl Engine {
    /// A previously issued quote order (partially) filled.
    pub fn on_order_filled(&mut self, order_id: OrderId, price: i64, volume: i64) {
        let Some(entry) = self.registry.get(order_id) else {
            return;
        };
        if entry.role != OrderRole::Quote {
            return;
        }

        self.ledger.apply_quote_fill(entry.side, volume, price);
        self.emit_event(EventPayload::QuoteFilled(QuoteFilledEvent {
            order_id,
            side: entry.side,
            price,
            volume,
        }));

        self.send_hedge(entry.side.opposite(), volume);
    }

    /// A previously issued hedge order (partially) filled. An id that was
    /// never registered as a hedge is ignored; that only happens if the
    /// gateway confirms something we never sent.
    pub fn on_hedge_filled(&mut self, order_id: OrderId, price: i64, volume: i64) {
        let Some(entry) = self.registry.get(order_id) else {
            return;
        };
        if entry.role != OrderRole::Hedge {
            return;
        }

        self.ledger.apply_hedge_fill(entry.side, volume, price);
        self.emit_event(EventPayload::HedgeFilled(HedgeFilledEvent {
            order_id,
            side: entry.side,
            price,
            volume,
        }));
    }

    // 7.6: one hedge order per quote fill, same volume, opposite direction.
    // priced at the far end of the representable range so it executes against
    // whatever the Future book holds. excluded from the quote risk counters.
    fn send_hedge(&mut self, side: Side, volume: i64) {
        let price = match side {
            Side::Buy => self.trader.max_ask_nearest_tick,
            Side::Sell => self.trader.min_bid_nearest_tick,
        };

        let id = self.next_order_id();
        self.push_command(Command::Hedge {
            id,
            side,
            price,
            volume,
        });
        self.registry.register(id, side, OrderRole::Hedge);
        self.emit_event(EventPayload::HedgePlaced(HedgePlacedEvent {
            order_id: id,
            side,
            price,
            volume,
        }));
    }
}

// 7.7: order status, error, and disconnect handlers.
//
// a status event with zero remaining volume is the single termination path:
// it releases the risk counters, drops the registry entry, and emits the
// profit snapshot. errors on outstanding quotes are folded into that same
// routine so both paths clean up identically.

use super::core::Engine;
use crate::events::{
    EventPayload, OrderErrorEvent, ProfitSnapshotEvent, QuoteTerminalEvent,
};
use crate::types::{OrderId, OrderRole};

impl Engine {
    /// Status update for a quote order. Only a terminal update (zero
    /// remaining volume) changes state; the counters release the fill volume
    /// the terminal event reports. A duplicate terminal event misses the
    /// registry lookup and is a complete no-op.
    pub fn on_order_status(
        &mut self,
        order_id: OrderId,
        fill_volume: i64,
        remaining_volume: i64,
        _fees: i64,
    ) {
        if remaining_volume != 0 {
            return;
        }

        let Some(entry) = self.registry.get(order_id) else {
            return;
        };
        if entry.role != OrderRole::Quote {
            // hedge orders are not tracked by the quote counters
            return;
        }

        self.registry.remove(order_id);
        self.ledger.release_quote(entry.side, fill_volume);

        self.emit_event(EventPayload::QuoteTerminal(QuoteTerminalEvent {
            order_id,
            side: entry.side,
            fill_volume,
        }));

        let snapshot = ProfitSnapshotEvent {
            etf_profit: self.ledger.etf_equity(self.mids.etf_mid),
            fut_profit: self.ledger.fut_equity(self.mids.fut_mid),
        };
        if self.config.print_snapshots {
            println!(
                "etf_profit={} fut_profit={}",
                snapshot.etf_profit, snapshot.fut_profit
            );
        }
        self.emit_event(EventPayload::ProfitSnapshot(snapshot));
    }

    /// Gateway error. An error naming an outstanding quote order is treated
    /// as an implicit full cancellation, synthesized through the same
    /// termination routine as a real status event. Anything else is
    /// informational.
    pub fn on_error(&mut self, order_id: OrderId, message: &str) {
        let cancels_quote = order_id.0 != 0
            && self
                .registry
                .get(order_id)
                .map(|e| e.role == OrderRole::Quote)
                .unwrap_or(false);

        self.emit_event(EventPayload::OrderError(OrderErrorEvent {
            order_id,
            message: message.to_string(),
            canceled: cancels_quote,
        }));

        if cancels_quote {
            self.on_order_status(order_id, 0, 0, 0);
        }
    }

    /// Execution connection lost. Terminal for the session; recovery is the
    /// operator's problem, not the engine's.
    pub fn on_disconnect(&mut self) {
        self.emit_event(EventPayload::Disconnected);
    }
}

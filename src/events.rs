// 6.0: every state change produces an audit event. used for the telemetry sink,
// test assertions, and the verbose sim output. the EventPayload enum lists all
// event types.

use crate::types::{Instrument, OrderId, Side, Timestamp};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventId(pub u64);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub timestamp: Timestamp,
    pub payload: EventPayload,
}

impl Event {
    pub fn new(id: EventId, timestamp: Timestamp, payload: EventPayload) -> Self {
        Self {
            id,
            timestamp,
            payload,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EventPayload {
    // Market data events
    MidUpdated(MidUpdatedEvent),
    BookObserved(BookObservedEvent),

    // Order events
    QuotePlaced(QuotePlacedEvent),
    QuoteFilled(QuoteFilledEvent),
    QuoteTerminal(QuoteTerminalEvent),

    // Hedge events
    HedgePlaced(HedgePlacedEvent),
    HedgeFilled(HedgeFilledEvent),

    // Telemetry
    ProfitSnapshot(ProfitSnapshotEvent),

    // Session events
    OrderError(OrderErrorEvent),
    Disconnected,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MidUpdatedEvent {
    pub instrument: Instrument,
    pub mid: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookObservedEvent {
    pub instrument: Instrument,
    pub best_bid: i64,
    pub best_ask: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotePlacedEvent {
    pub order_id: OrderId,
    pub side: Side,
    pub price: i64,
    pub volume: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteFilledEvent {
    pub order_id: OrderId,
    pub side: Side,
    pub price: i64,
    pub volume: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteTerminalEvent {
    pub order_id: OrderId,
    pub side: Side,
    pub fill_volume: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HedgePlacedEvent {
    pub order_id: OrderId,
    pub side: Side,
    pub price: i64,
    pub volume: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HedgeFilledEvent {
    pub order_id: OrderId,
    pub side: Side,
    pub price: i64,
    pub volume: i64,
}

/// Realized cash plus position marked at the latest mid, per instrument.
/// Emitted whenever a quote order goes terminal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfitSnapshotEvent {
    pub etf_profit: i64,
    pub fut_profit: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderErrorEvent {
    pub order_id: OrderId,
    pub message: String,
    /// Whether the error referenced an outstanding quote and forced a cancel.
    pub canceled: bool,
}

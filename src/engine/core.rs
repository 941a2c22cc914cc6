// 7.1 engine/core.rs: main engine struct. all mutable state lives here and is
// passed by exclusive reference into each handler; no globals, no locks.
// correctness rests on strict handler ordering and complete per-event transitions.

use super::config::EngineConfig;
use crate::commands::Command;
use crate::config::{ConfigError, TraderConfig};
use crate::events::{Event, EventId, EventPayload};
use crate::ledger::RiskLedger;
use crate::pricing::{HedgeSignal, MidCache};
use crate::registry::OrderRegistry;
use crate::types::{OrderId, Timestamp};

#[derive(Debug)]
pub struct Engine {
    pub(super) trader: TraderConfig,
    pub(super) config: EngineConfig,
    pub(super) mids: MidCache,
    pub(super) hedge_signal: HedgeSignal,
    pub(super) ledger: RiskLedger,
    pub(super) registry: OrderRegistry,
    pub(super) next_order_id: u64,
    pub(super) events: Vec<Event>,
    pub(super) next_event_id: u64,
    pub(super) commands: Vec<Command>,
    pub(super) current_time: Timestamp,
}

impl Engine {
    pub fn new(trader: TraderConfig, config: EngineConfig) -> Result<Self, ConfigError> {
        trader.validate()?;
        Ok(Self {
            trader,
            config,
            mids: MidCache::new(),
            hedge_signal: HedgeSignal::default(),
            ledger: RiskLedger::new(),
            registry: OrderRegistry::new(),
            next_order_id: 1,
            events: Vec::new(),
            next_event_id: 1,
            commands: Vec::new(),
            current_time: Timestamp::from_millis(0),
        })
    }

    pub fn set_time(&mut self, timestamp: Timestamp) {
        self.current_time = timestamp;
    }

    pub fn time(&self) -> Timestamp {
        self.current_time
    }

    pub fn advance_time(&mut self, millis: i64) {
        self.current_time = Timestamp::from_millis(self.current_time.as_millis() + millis);
    }

    pub fn trader_config(&self) -> &TraderConfig {
        &self.trader
    }

    pub fn ledger(&self) -> &RiskLedger {
        &self.ledger
    }

    pub fn mids(&self) -> &MidCache {
        &self.mids
    }

    pub fn registry(&self) -> &OrderRegistry {
        &self.registry
    }

    /// Commands issued so far and not yet drained by the gateway.
    pub fn pending_commands(&self) -> &[Command] {
        &self.commands
    }

    /// Hand the buffered commands to the session layer for transmission.
    pub fn drain_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn recent_events(&self, count: usize) -> &[Event] {
        let start = self.events.len().saturating_sub(count);
        &self.events[start..]
    }

    // ids are shared between quote and hedge orders and never reused
    pub(super) fn next_order_id(&mut self) -> OrderId {
        let id = OrderId(self.next_order_id);
        self.next_order_id += 1;
        id
    }

    pub(super) fn push_command(&mut self, command: Command) {
        if self.config.verbose {
            println!("[Command] {command:?}");
        }
        self.commands.push(command);
    }

    pub(super) fn emit_event(&mut self, payload: EventPayload) {
        let event = Event::new(EventId(self.next_event_id), self.current_time, payload);
        self.next_event_id += 1;

        if self.config.verbose {
            println!("[Event {}] {:?}", event.id.0, event.payload);
        }

        self.events.push(event);

        if self.events.len() > self.config.max_events {
            let drain_count = self.events.len() - self.config.max_events;
            self.events.drain(0..drain_count);
        }
    }
}

// pairs-core: pair-trading autotrader decision engine.
// risk-first architecture: hard position, order-count, and volume caps gate
// every quote. all computation is deterministic with no external I/O; the
// session layer feeds events in and drains commands out.
//
// file map (search X.0 for structs, X.1+ for logic):
//   1.x types.rs: primitives: OrderId, Instrument, Side, OrderRole, Lifespan
//   2.x pricing.rs: mid-price tracking and the hedge freshness signal
//   3.x ledger.rs: positions, active exposure, realized cash per instrument
//   4.x registry.rs: outstanding order id -> {side, role} ownership
//   5.x commands.rs: outbound insert/cancel/hedge commands to the gateway
//   6.x events.rs: audit events incl. the profit snapshot telemetry
//   7.x engine/: reactive core: ticks, quoting ladders, fills, status, errors

// core trading modules
pub mod commands;
pub mod config;
pub mod engine;
pub mod events;
pub mod ledger;
pub mod pricing;
pub mod registry;
pub mod types;

// re exports for convenience
pub use commands::*;
pub use config::*;
pub use engine::*;
pub use events::*;
pub use ledger::*;
pub use pricing::*;
pub use registry::*;
pub use types::*;

// 7.0: the reactive engine. event handlers in, gateway commands out, one
// logical thread. no handler suspends, blocks, or re-enters another.

mod config;
mod core;
mod fills;
mod status;
mod ticks;

pub use config::EngineConfig;
pub use core::Engine;

// 5.0: outbound commands to the execution gateway. the engine buffers these
// fire-and-forget; the session layer drains and transmits them after each
// handler returns. nothing in the engine waits on an acknowledgement.

use crate::types::{Lifespan, OrderId, Side};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Insert {
        id: OrderId,
        side: Side,
        price: i64,
        volume: i64,
        lifespan: Lifespan,
    },
    /// Available to the strategy but not issued by the active logic; order
    /// termination is driven by fills and error events.
    Cancel { id: OrderId },
    Hedge {
        id: OrderId,
        side: Side,
        price: i64,
        volume: i64,
    },
}

impl Command {
    pub fn order_id(&self) -> OrderId {
        match self {
            Command::Insert { id, .. } => *id,
            Command::Cancel { id } => *id,
            Command::Hedge { id, .. } => *id,
        }
    }
}

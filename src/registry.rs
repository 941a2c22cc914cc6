// 4.0: the order registry. sole owner of the id -> {side, role} mapping for
// outstanding orders. entries appear when a command is issued and disappear on
// terminal status; a lookup miss after removal is what makes duplicate terminal
// events a no-op.

use crate::types::{OrderId, OrderRole, Side};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderEntry {
    pub side: Side,
    pub role: OrderRole,
}

#[derive(Debug, Clone, Default)]
pub struct OrderRegistry {
    orders: HashMap<OrderId, OrderEntry>,
}

impl OrderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: OrderId, side: Side, role: OrderRole) {
        debug_assert!(
            !self.orders.contains_key(&id),
            "order id {id} registered twice"
        );
        self.orders.insert(id, OrderEntry { side, role });
    }

    pub fn get(&self, id: OrderId) -> Option<OrderEntry> {
        self.orders.get(&id).copied()
    }

    pub fn remove(&mut self, id: OrderId) -> Option<OrderEntry> {
        self.orders.remove(&id)
    }

    /// Outstanding quote orders, which is what the active-order limit bounds.
    pub fn quote_count(&self) -> usize {
        self.orders
            .values()
            .filter(|e| e.role == OrderRole::Quote)
            .count()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

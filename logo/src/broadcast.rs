//! Subscription boundary between the simulation owner and the renderer.
//!
//! The engine publishes letter poses here; the UI layer subscribes a callback
//! that copies them into its own reactive state.

#[cfg(test)]
#[path = "broadcast_test.rs"]
mod broadcast_test;

use crate::layout::Pose;

/// Identifies one subscription for later removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&[Pose])>;

/// Fan-out of pose updates to subscribers, in subscription order.
#[derive(Default)]
pub struct PoseBroadcast {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Callback)>,
}

impl PoseBroadcast {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&[Pose]) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    pub fn publish(&mut self, poses: &[Pose]) {
        for (_, callback) in &mut self.subscribers {
            callback(poses);
        }
    }

    pub fn clear(&mut self) {
        self.subscribers.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

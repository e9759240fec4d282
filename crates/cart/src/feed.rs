//! Diagnostics feed of cart events.
//!
//! Observers (a badge, a log pane, tests) subscribe to the kinds of
//! [`CartEvent`] they care about and drain them at their own pace. The feed
//! holds nothing itself: the key-value store is the source of truth, and a
//! subscriber only sees events published after it subscribed.

use std::sync::{Mutex, mpsc};

use thiserror::Error;

use crate::events::{CartEvent, CartEventKind};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FeedError {
    #[error("cart event feed lock poisoned")]
    Poisoned,
}

#[derive(Debug)]
struct Subscriber {
    kinds: Vec<CartEventKind>,
    sender: mpsc::Sender<CartEvent>,
}

impl Subscriber {
    fn wants(&self, kind: CartEventKind) -> bool {
        self.kinds.contains(&kind)
    }
}

/// Fan-out of cart events to filtered subscribers.
#[derive(Debug, Default)]
pub struct CartEventFeed {
    subscribers: Mutex<Vec<Subscriber>>,
}

impl CartEventFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to every kind of cart event.
    pub fn subscribe(&self) -> CartEventReceiver {
        self.subscribe_to(&CartEventKind::ALL)
    }

    /// Subscribe to the given kinds only.
    pub fn subscribe_to(&self, kinds: &[CartEventKind]) -> CartEventReceiver {
        let (sender, receiver) = mpsc::channel();

        // A poisoned feed still hands out a receiver; it just stays silent.
        if let Ok(mut subs) = self.subscribers.lock() {
            subs.push(Subscriber {
                kinds: kinds.to_vec(),
                sender,
            });
        }

        CartEventReceiver { receiver }
    }

    /// Deliver `event` to every live subscriber interested in its kind.
    ///
    /// Returns how many subscribers received it. Subscribers whose receiver
    /// was dropped are forgotten.
    pub fn publish(&self, event: &CartEvent) -> Result<usize, FeedError> {
        let mut subs = self.subscribers.lock().map_err(|_| FeedError::Poisoned)?;
        let kind = event.kind();
        let mut delivered = 0;

        subs.retain(|sub| {
            if !sub.wants(kind) {
                return true;
            }
            let alive = sub.sender.send(event.clone()).is_ok();
            if alive {
                delivered += 1;
            }
            alive
        });

        Ok(delivered)
    }
}

/// Receiving end of a [`CartEventFeed`] subscription.
#[derive(Debug)]
pub struct CartEventReceiver {
    receiver: mpsc::Receiver<CartEvent>,
}

impl CartEventReceiver {
    /// Take every event queued so far, oldest first.
    pub fn drain(&self) -> Vec<CartEvent> {
        self.receiver.try_iter().collect()
    }

    /// Take the next queued event, if any.
    pub fn next_event(&self) -> Option<CartEvent> {
        self.receiver.try_recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{CartCleared, ItemAdded};
    use chrono::Utc;
    use sdmart_core::ProductId;

    fn added(name: &str) -> CartEvent {
        CartEvent::ItemAdded(ItemAdded {
            product_id: ProductId::new("p1").unwrap(),
            name: name.to_string(),
            quantity_added: 1,
            line_quantity: 1,
            occurred_at: Utc::now(),
        })
    }

    fn cleared() -> CartEvent {
        CartEvent::CartCleared(CartCleared {
            removed_items: 0,
            occurred_at: Utc::now(),
        })
    }

    #[test]
    fn subscribers_receive_in_publish_order() {
        let feed = CartEventFeed::new();
        let rx = feed.subscribe();

        feed.publish(&added("Widget")).unwrap();
        feed.publish(&cleared()).unwrap();

        let kinds: Vec<CartEventKind> = rx.drain().iter().map(CartEvent::kind).collect();
        assert_eq!(kinds, vec![CartEventKind::ItemAdded, CartEventKind::Cleared]);
        assert!(rx.next_event().is_none());
    }

    #[test]
    fn filtered_subscription_skips_other_kinds() {
        let feed = CartEventFeed::new();
        let adds = feed.subscribe_to(&[CartEventKind::ItemAdded]);
        let all = feed.subscribe();

        assert_eq!(feed.publish(&cleared()).unwrap(), 1);
        assert_eq!(feed.publish(&added("Gadget")).unwrap(), 2);

        let only_adds = adds.drain();
        assert_eq!(only_adds.len(), 1);
        match &only_adds[0] {
            CartEvent::ItemAdded(e) if e.name == "Gadget" => {}
            _ => panic!("Expected ItemAdded for Gadget"),
        }
        assert_eq!(all.drain().len(), 2);
    }

    #[test]
    fn dropped_receivers_stop_counting() {
        let feed = CartEventFeed::new();
        let kept = feed.subscribe();
        drop(feed.subscribe());

        assert_eq!(feed.publish(&cleared()).unwrap(), 1);
        assert_eq!(feed.publish(&cleared()).unwrap(), 1);
        assert_eq!(kept.drain().len(), 2);
    }
}

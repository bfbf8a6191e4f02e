//! In-process topic bus
//!
//! A broker living inside one process: endpoints subscribe to topics and
//! publishing fans the payload out to every subscribed endpoint's FIFO inbox.
//! Delivery happens when the receiving endpoint polls, never from another
//! thread, which keeps subscriber state single-writer.

use crate::error::{ThermError, ThermResult};
use crate::Transport;
use std::collections::{HashSet, VecDeque};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct Endpoint {
    subscriptions: HashSet<Vec<u8>>,
    inbox: VecDeque<(Vec<u8>, Vec<u8>)>,
}

#[derive(Default)]
struct BusInner {
    endpoints: Vec<Endpoint>,
}

/// Handle to a shared in-process bus. Cloning yields another handle to the
/// same bus; call [`endpoint`](LoopbackBus::endpoint) to attach a client.
#[derive(Clone, Default)]
pub struct LoopbackBus {
    inner: Arc<Mutex<BusInner>>,
}

impl LoopbackBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a new client endpoint to the bus.
    pub fn endpoint(&self) -> LoopbackTransport {
        let mut inner = self.inner.lock().expect("loopback bus lock poisoned");
        inner.endpoints.push(Endpoint::default());
        LoopbackTransport {
            bus: Arc::clone(&self.inner),
            id: inner.endpoints.len() - 1,
        }
    }
}

impl std::fmt::Debug for LoopbackBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoopbackBus").finish_non_exhaustive()
    }
}

/// One client's view of a [`LoopbackBus`].
pub struct LoopbackTransport {
    bus: Arc<Mutex<BusInner>>,
    id: usize,
}

impl LoopbackTransport {
    fn lock(&self) -> ThermResult<std::sync::MutexGuard<'_, BusInner>> {
        self.bus
            .lock()
            .map_err(|_| ThermError::Transport("loopback bus lock poisoned".into()))
    }

    /// Number of messages waiting in this endpoint's inbox.
    pub fn pending(&self) -> usize {
        self.lock().map(|inner| inner.endpoints[self.id].inbox.len()).unwrap_or(0)
    }
}

impl Transport for LoopbackTransport {
    fn publish(&mut self, topic: &[u8], payload: &[u8]) -> ThermResult<()> {
        let mut inner = self.lock()?;
        for endpoint in inner.endpoints.iter_mut() {
            if endpoint.subscriptions.contains(topic) {
                endpoint.inbox.push_back((topic.to_vec(), payload.to_vec()));
            }
        }
        Ok(())
    }

    fn subscribe(&mut self, topic: &[u8]) -> ThermResult<()> {
        let mut inner = self.lock()?;
        inner.endpoints[self.id].subscriptions.insert(topic.to_vec());
        Ok(())
    }

    fn poll(&mut self, on_message: &mut dyn FnMut(&[u8], &[u8])) -> ThermResult<()> {
        // Pop before dispatch so the callback can publish without deadlocking
        // on the bus lock.
        let next = {
            let mut inner = self.lock()?;
            inner.endpoints[self.id].inbox.pop_front()
        };
        if let Some((topic, payload)) = next {
            on_message(&topic, &payload);
        }
        Ok(())
    }
}

impl std::fmt::Debug for LoopbackTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoopbackTransport")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_reaches_only_subscribers() {
        let bus = LoopbackBus::new();
        let mut tx = bus.endpoint();
        let mut subscribed = bus.endpoint();
        let mut other = bus.endpoint();
        subscribed.subscribe(b"a").unwrap();
        other.subscribe(b"b").unwrap();

        tx.publish(b"a", &[7]).unwrap();
        assert_eq!(subscribed.pending(), 1);
        assert_eq!(other.pending(), 0);
    }

    #[test]
    fn poll_delivers_one_message_in_fifo_order() {
        let bus = LoopbackBus::new();
        let mut tx = bus.endpoint();
        let mut rx = bus.endpoint();
        rx.subscribe(b"t").unwrap();
        tx.publish(b"t", &[1]).unwrap();
        tx.publish(b"t", &[2]).unwrap();

        let mut seen = Vec::new();
        rx.poll(&mut |_topic, payload| seen.push(payload.to_vec())).unwrap();
        assert_eq!(seen, vec![vec![1]]);
        rx.poll(&mut |_topic, payload| seen.push(payload.to_vec())).unwrap();
        assert_eq!(seen, vec![vec![1], vec![2]]);
        assert_eq!(rx.pending(), 0);
    }

    #[test]
    fn poll_on_empty_inbox_is_a_no_op() {
        let bus = LoopbackBus::new();
        let mut rx = bus.endpoint();
        rx.subscribe(b"t").unwrap();
        let mut called = false;
        rx.poll(&mut |_, _| called = true).unwrap();
        assert!(!called);
    }

    #[test]
    fn publisher_does_not_hear_itself_without_subscribing() {
        let bus = LoopbackBus::new();
        let mut tx = bus.endpoint();
        tx.publish(b"t", &[1]).unwrap();
        assert_eq!(tx.pending(), 0);
    }

    #[test]
    fn fan_out_to_multiple_subscribers() {
        let bus = LoopbackBus::new();
        let mut tx = bus.endpoint();
        let mut rx1 = bus.endpoint();
        let mut rx2 = bus.endpoint();
        rx1.subscribe(b"t").unwrap();
        rx2.subscribe(b"t").unwrap();
        tx.publish(b"t", &[9]).unwrap();
        assert_eq!(rx1.pending(), 1);
        assert_eq!(rx2.pending(), 1);
    }
}

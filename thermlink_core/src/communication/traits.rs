//! Transport abstraction consumed by the telemetry nodes
//!
//! This is the seam between the core pipeline and whatever actually moves
//! bytes (an in-process bus, an MQTT client, ...). Implementations deliver
//! messages synchronously from inside `poll`, so a node that owns both a
//! transport and its state never needs locking around that state. An
//! implementation that delivered from a separate thread instead would have to
//! add its own mutual exclusion to preserve the single-writer discipline.

use crate::error::ThermResult;

/// Topic-based publish/subscribe over opaque byte payloads.
pub trait Transport: Send {
    /// Publish one payload on a topic. Failure is fatal to the role driver;
    /// no retry or backoff happens at this layer.
    fn publish(&mut self, topic: &[u8], payload: &[u8]) -> ThermResult<()>;

    /// Register interest in a topic.
    fn subscribe(&mut self, topic: &[u8]) -> ThermResult<()>;

    /// Non-blocking check for one pending message, invoking `on_message`
    /// synchronously with `(topic, payload)` if one is queued.
    fn poll(&mut self, on_message: &mut dyn FnMut(&[u8], &[u8])) -> ThermResult<()>;
}

//! # Communication layer for THERMLINK
//!
//! The pipeline talks to the outside world through the [`Transport`] trait:
//! topic-addressed byte payloads with a non-blocking poll. Broker adapters
//! (MQTT and friends) live outside this workspace; what ships here is the
//! boundary itself plus [`LoopbackBus`], an in-process bus used by tests and
//! by the daemon's demo mode.
//!
//! ## Usage
//!
//! ```rust
//! use thermlink_core::communication::{LoopbackBus, Transport};
//!
//! let bus = LoopbackBus::new();
//! let mut tx = bus.endpoint();
//! let mut rx = bus.endpoint();
//! rx.subscribe(b"temp/readings").unwrap();
//! tx.publish(b"temp/readings", &[1, 2, 3]).unwrap();
//! rx.poll(&mut |_topic, payload| assert_eq!(payload, [1, 2, 3])).unwrap();
//! ```

pub mod loopback;
pub mod traits;

// Re-export commonly used types for convenience
pub use loopback::{LoopbackBus, LoopbackTransport};
pub use traits::Transport;

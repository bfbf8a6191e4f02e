//! # THERMLINK - minimal telemetry pipeline
//!
//! THERMLINK moves temperature readings from publishing devices to an
//! aggregating subscriber over a topic-based transport, and drives a binary
//! actuator when the rolling cross-publisher average crosses a threshold.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use thermlink::prelude::*;
//!
//! let bus = LoopbackBus::new();
//! let params = Params::for_role(Role::Subscriber);
//! let mut scheduler = Scheduler::new();
//! scheduler.add_node(
//!     Box::new(AggregatorNode::new(bus.endpoint(), &params)),
//!     params.poll_rate_hz(),
//! );
//! scheduler.run().unwrap();
//! ```
//!
//! ## Features
//!
//! - **Compact wire format**: hand-framed, Protocol-Buffers-compatible
//! - **Bounded-recency aggregation** with reactive expiry
//! - **Pluggable transport and hardware boundaries**
//! - **Standard library of ready-made nodes**

// Re-export core components (avoiding conflicts)
pub use thermlink_core::{self, *};

// Re-export standard library with alias
pub use thermlink_library as library;

/// The THERMLINK prelude - everything you need to get started
pub mod prelude {
    // Core node types
    pub use thermlink_core::core::Node;

    // Communication types
    pub use thermlink_core::communication::{LoopbackBus, LoopbackTransport, Transport};

    // Scheduling
    pub use thermlink_core::scheduling::Scheduler;

    // Configuration
    pub use thermlink_core::params::{Params, Role};

    // Error types
    pub use thermlink_core::error::{ThermError, ThermResult};
    pub type Result<T> = ThermResult<T>;

    // Messages, algorithms, and nodes
    pub use thermlink_library::prelude::*;
}

//! # THERMLINK Standard Library
//!
//! The standard library for the THERMLINK telemetry pipeline.
//!
//! ## Structure
//!
//! ```text
//! thermlink_library/
//! ── messages/      # Wire message types (Reading, TimeRecord)
//! ── algorithms/    # Aggregation and actuator policy
//! ── nodes/         # Reusable publisher/subscriber nodes
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use thermlink_library::{
//!     // Messages
//!     Reading, TimeRecord,
//!     // Algorithms
//!     AggregationStore, ThresholdPolicy,
//!     // Nodes
//!     AggregatorNode, TemperaturePublisherNode,
//! };
//!
//! // Create and configure nodes with simple constructors
//! let params = thermlink_core::Params::for_role(thermlink_core::Role::Subscriber);
//! let bus = thermlink_core::LoopbackBus::new();
//! let aggregator = AggregatorNode::new(bus.endpoint(), &params);
//! ```

pub mod algorithms;
pub mod messages;
pub mod nodes;

// Re-export message types at the crate root for convenience
pub use messages::{Reading, TimeRecord};

// Re-export algorithms
pub use algorithms::{AggregationStore, ThresholdPolicy};

// Re-export commonly used nodes for convenience
pub use nodes::{AggregatorNode, TemperaturePublisherNode};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithms::{AggregationStore, ThresholdPolicy};
    pub use crate::messages::{Reading, TimeRecord};
    pub use crate::nodes::{
        Actuator, AggregatorNode, LogActuator, SyntheticProbe, SystemClock,
        TemperaturePublisherNode, TemperatureProbe, WallClock,
    };
}

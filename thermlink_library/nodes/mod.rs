//! Reusable nodes for the THERMLINK pipeline
//!
//! Two roles, one node each:
//! - [`TemperaturePublisherNode`]: samples a probe and publishes encoded
//!   readings
//! - [`AggregatorNode`]: decodes incoming readings, maintains the aggregate,
//!   and drives the actuator
//!
//! Hardware sits behind the traits in [`hardware`]; the bundled
//! implementations are simulation/host stand-ins so the pipeline runs
//! without a device attached.

pub mod aggregator_node;
pub mod hardware;
pub mod temperature_publisher_node;

pub use aggregator_node::AggregatorNode;
pub use hardware::{
    Actuator, LogActuator, SyntheticProbe, SystemClock, TemperatureProbe, WallClock,
};
pub use temperature_publisher_node::TemperaturePublisherNode;

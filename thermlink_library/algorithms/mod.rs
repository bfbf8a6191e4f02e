//! Aggregation algorithms for the subscriber side
//!
//! - [`AggregationStore`]: per-publisher latest-value cache with time-based
//!   expiry and cross-publisher averaging
//! - [`ThresholdPolicy`]: maps the current aggregate to a binary actuator
//!   command

pub mod aggregate;
pub mod threshold;

pub use aggregate::{AggregationStore, LastSeen};
pub use threshold::ThresholdPolicy;

//! Message types for the THERMLINK pipeline
//!
//! One domain, one module: telemetry readings and the time-of-day record
//! nested inside them, together with their wire encoding. Message types are
//! re-exported at the crate root for convenience.

pub mod telemetry;

pub use telemetry::{Reading, TimeRecord};

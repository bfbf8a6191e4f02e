//! # THERMLINK Core
//!
//! The core runtime for the THERMLINK telemetry pipeline.
//!
//! THERMLINK moves sensor readings from publishing devices to an aggregating
//! subscriber over a topic-based transport. This crate provides the
//! fundamental building blocks:
//!
//! - **Codec**: Protocol-Buffers-compatible wire framing for telemetry messages
//! - **Communication**: the `Transport` boundary plus an in-process loopback bus
//! - **Nodes**: the unit of execution driven by the scheduler
//! - **Scheduling**: rate-controlled tick loop with clean shutdown
//! - **Params**: runtime configuration with reference defaults
//!
//! ## Quick Start
//!
//! ```rust
//! use thermlink_core::{Node, ThermResult};
//!
//! struct ExampleNode {
//!     count: u64,
//! }
//!
//! impl Node for ExampleNode {
//!     fn name(&self) -> &'static str { "example" }
//!
//!     fn tick(&mut self) -> ThermResult<()> {
//!         self.count += 1;
//!         Ok(())
//!     }
//! }
//! ```

pub mod codec;
pub mod communication;
pub mod core;
pub mod error;
pub mod params;
pub mod scheduling;

// Re-export commonly used types for easy access
pub use communication::{LoopbackBus, LoopbackTransport, Transport};
pub use core::Node;
pub use error::{ThermError, ThermResult};
pub use params::{Params, Role};
pub use scheduling::Scheduler;

//! # Core types and traits for THERMLINK
//!
//! - **Node**: the base trait for the units of execution the scheduler drives
//!
//! ## Node Lifecycle
//!
//! 1. **Construction** - node is created with configuration
//! 2. **Initialization** - `init()` is called once before the first tick
//! 3. **Execution** - `tick()` is called repeatedly by the scheduler
//! 4. **Shutdown** - `shutdown()` is called once at cleanup

pub mod node;

pub use node::Node;

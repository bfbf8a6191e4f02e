//! # Scheduling for THERMLINK
//!
//! A single-threaded tick loop with per-node rate control. Each registered
//! node runs at its own rate (the publisher at the publish interval, the
//! subscriber at the poll interval); the loop parks briefly between passes
//! and stops cleanly on Ctrl-C or on the first fatal node error.

pub mod scheduler;

pub use scheduler::Scheduler;

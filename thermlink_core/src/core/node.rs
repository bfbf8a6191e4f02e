//! The unit of execution driven by the scheduler.

use crate::error::ThermResult;

/// A node owns its I/O endpoints and state, and does one bounded unit of work
/// per `tick`. Nothing in a tick may block; waiting belongs to the scheduler.
///
/// A tick error is fatal: the scheduler logs it, shuts the nodes down, and
/// halts. Recoverable conditions (a malformed payload, an empty inbox) are
/// handled inside the node and never surface here.
pub trait Node: Send {
    /// Get the node's name (must be unique)
    fn name(&self) -> &'static str;

    /// Initialize the node (called once at startup)
    fn init(&mut self) -> ThermResult<()> {
        Ok(())
    }

    /// Main execution step (called repeatedly)
    fn tick(&mut self) -> ThermResult<()>;

    /// Shutdown the node (called once at cleanup)
    fn shutdown(&mut self) -> ThermResult<()> {
        Ok(())
    }
}

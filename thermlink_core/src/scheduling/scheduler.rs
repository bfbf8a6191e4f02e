//! Rate-controlled tick loop.

use crate::core::Node;
use crate::error::{ThermError, ThermResult};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Node registration info with per-node rate control
struct RegisteredNode {
    node: Box<dyn Node>,
    rate_hz: Option<f64>, // None = tick on every scheduler pass
    last_tick: Option<Instant>,
    initialized: bool,
}

impl RegisteredNode {
    fn due(&self, now: Instant) -> bool {
        match (self.rate_hz, self.last_tick) {
            (Some(hz), Some(last)) if hz > 0.0 => {
                now.duration_since(last) >= Duration::from_secs_f64(1.0 / hz)
            }
            _ => true,
        }
    }
}

/// Central orchestrator: holds nodes, drives the tick loop.
pub struct Scheduler {
    nodes: Vec<RegisteredNode>,
    running: Arc<Mutex<bool>>,
    scheduler_name: String,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    /// Create an empty scheduler.
    pub fn new() -> Self {
        Self::with_name("scheduler")
    }

    pub fn with_name(name: &str) -> Self {
        Self {
            nodes: Vec::new(),
            running: Arc::new(Mutex::new(true)),
            scheduler_name: name.to_string(),
        }
    }

    /// Register a node. `rate_hz = None` ticks the node on every pass.
    pub fn add_node(&mut self, node: Box<dyn Node>, rate_hz: Option<f64>) {
        self.nodes.push(RegisteredNode {
            node,
            rate_hz,
            last_tick: None,
            initialized: false,
        });
    }

    /// Handle that flips the running flag; shared with the Ctrl-C handler.
    pub fn stop_handle(&self) -> Arc<Mutex<bool>> {
        Arc::clone(&self.running)
    }

    fn is_running(&self) -> bool {
        self.running.lock().map(|flag| *flag).unwrap_or(false)
    }

    fn init_nodes(&mut self) -> ThermResult<()> {
        for reg in self.nodes.iter_mut() {
            if !reg.initialized {
                log::info!("[{}] initializing {}", self.scheduler_name, reg.node.name());
                reg.node.init()?;
                reg.initialized = true;
            }
        }
        Ok(())
    }

    fn shutdown_nodes(&mut self) {
        for reg in self.nodes.iter_mut() {
            if reg.initialized {
                if let Err(err) = reg.node.shutdown() {
                    log::warn!("{} shutdown failed: {err}", reg.node.name());
                }
                reg.initialized = false;
            }
        }
    }

    /// Tick every node that is due. Exposed for tests and embedding; `run`
    /// calls this in a loop.
    pub fn tick_once(&mut self) -> ThermResult<()> {
        let now = Instant::now();
        for reg in self.nodes.iter_mut() {
            if reg.due(now) {
                reg.last_tick = Some(now);
                reg.node.tick().map_err(|err| {
                    log::error!("{} tick failed: {err}", reg.node.name());
                    err
                })?;
            }
        }
        Ok(())
    }

    /// Drive the tick loop until Ctrl-C or the first fatal node error.
    pub fn run(&mut self) -> ThermResult<()> {
        let running = self.stop_handle();
        ctrlc::set_handler(move || {
            if let Ok(mut flag) = running.lock() {
                *flag = false;
            }
        })
        .map_err(|err| ThermError::Scheduler(format!("ctrl-c handler: {err}")))?;

        log::info!(
            "[{}] running {} node(s)",
            self.scheduler_name,
            self.nodes.len()
        );

        self.init_nodes()?;
        let result = loop {
            if !self.is_running() {
                break Ok(());
            }
            if let Err(err) = self.tick_once() {
                break Err(err);
            }
            std::thread::sleep(Duration::from_millis(1));
        };
        self.shutdown_nodes();
        log::info!("[{}] stopped", self.scheduler_name);
        result
    }
}

//! Runtime parameters for THERMLINK
//!
//! A typed configuration surface loaded from TOML, with defaults matching the
//! reference deployment (10-minute retention, 25 °C threshold, 2 s publish
//! interval, 200 ms poll interval). The role has no default: a deployment
//! must say which side of the pipeline it is.

use crate::error::{ThermError, ThermResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Which side of the pipeline a process runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Samples the sensor and publishes encoded readings.
    Publisher,
    /// Decodes readings, aggregates them, and drives the actuator.
    Subscriber,
}

impl FromStr for Role {
    type Err = ThermError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "publisher" => Ok(Role::Publisher),
            "subscriber" => Ok(Role::Subscriber),
            other => Err(ThermError::Config(format!(
                "unknown role `{other}` (expected `publisher` or `subscriber`)"
            ))),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Publisher => write!(f, "publisher"),
            Role::Subscriber => write!(f, "subscriber"),
        }
    }
}

/// Pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Params {
    /// Role this process runs; must be set explicitly.
    pub role: Role,

    /// Topic readings travel on.
    #[serde(default = "defaults::topic")]
    pub topic: String,

    /// Identifier stamped into every published reading.
    #[serde(default = "defaults::publisher_id")]
    pub publisher_id: u32,

    /// Maximum age of a per-publisher entry before purge removes it.
    #[serde(default = "defaults::retention_window_secs")]
    pub retention_window_secs: u64,

    /// Average at or above this engages the actuator (°C).
    #[serde(default = "defaults::threshold")]
    pub threshold: f64,

    /// Interval between published readings.
    #[serde(default = "defaults::publish_interval_ms")]
    pub publish_interval_ms: u64,

    /// Interval between transport polls on the subscriber.
    #[serde(default = "defaults::poll_interval_ms")]
    pub poll_interval_ms: u64,
}

mod defaults {
    pub fn topic() -> String {
        "temp/readings".to_string()
    }
    pub fn publisher_id() -> u32 {
        1
    }
    pub fn retention_window_secs() -> u64 {
        600
    }
    pub fn threshold() -> f64 {
        25.0
    }
    pub fn publish_interval_ms() -> u64 {
        2000
    }
    pub fn poll_interval_ms() -> u64 {
        200
    }
}

impl Params {
    /// Reference defaults for the given role.
    pub fn for_role(role: Role) -> Self {
        Self {
            role,
            topic: defaults::topic(),
            publisher_id: defaults::publisher_id(),
            retention_window_secs: defaults::retention_window_secs(),
            threshold: defaults::threshold(),
            publish_interval_ms: defaults::publish_interval_ms(),
            poll_interval_ms: defaults::poll_interval_ms(),
        }
    }

    /// Load parameters from a TOML file.
    pub fn load(path: &Path) -> ThermResult<Self> {
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text)
            .map_err(|err| ThermError::Config(format!("{}: {err}", path.display())))
    }

    pub fn retention_window(&self) -> Duration {
        Duration::from_secs(self.retention_window_secs)
    }

    pub fn publish_interval(&self) -> Duration {
        Duration::from_millis(self.publish_interval_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Publisher tick rate for the scheduler. `None` when the interval is
    /// zero (tick every pass).
    pub fn publish_rate_hz(&self) -> Option<f64> {
        interval_to_rate(self.publish_interval_ms)
    }

    /// Subscriber tick rate for the scheduler.
    pub fn poll_rate_hz(&self) -> Option<f64> {
        interval_to_rate(self.poll_interval_ms)
    }
}

fn interval_to_rate(interval_ms: u64) -> Option<f64> {
    if interval_ms == 0 {
        None
    } else {
        Some(1000.0 / interval_ms as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Write;

    #[test]
    fn reference_defaults() {
        let params = Params::for_role(Role::Subscriber);
        assert_eq!(params.retention_window(), Duration::from_secs(600));
        assert_relative_eq!(params.threshold, 25.0);
        assert_eq!(params.publish_interval(), Duration::from_millis(2000));
        assert_eq!(params.poll_interval(), Duration::from_millis(200));
        assert_eq!(params.topic, "temp/readings");
    }

    #[test]
    fn rates_derive_from_intervals() {
        let params = Params::for_role(Role::Publisher);
        assert_relative_eq!(params.publish_rate_hz().unwrap(), 0.5);
        assert_relative_eq!(params.poll_rate_hz().unwrap(), 5.0);
        let mut zero = params;
        zero.publish_interval_ms = 0;
        assert!(zero.publish_rate_hz().is_none());
    }

    #[test]
    fn load_from_toml_with_partial_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "role = \"subscriber\"\nthreshold = 30.5").unwrap();
        let params = Params::load(file.path()).unwrap();
        assert_eq!(params.role, Role::Subscriber);
        assert_relative_eq!(params.threshold, 30.5);
        // everything else falls back to reference values
        assert_eq!(params.retention_window_secs, 600);
    }

    #[test]
    fn missing_role_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "threshold = 30.5").unwrap();
        assert!(matches!(
            Params::load(file.path()),
            Err(ThermError::Config(_))
        ));
    }

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!("Publisher".parse::<Role>().unwrap(), Role::Publisher);
        assert_eq!("subscriber".parse::<Role>().unwrap(), Role::Subscriber);
        assert!("broker".parse::<Role>().is_err());
    }
}

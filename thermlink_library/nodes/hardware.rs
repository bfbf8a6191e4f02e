//! Hardware boundaries: temperature probe, wall clock, binary actuator.
//!
//! Nodes only ever see these traits. The implementations here are the
//! host-side stand-ins; a deployment on real hardware supplies its own
//! (an ADC-backed probe, an RTC, a GPIO pin).

use chrono::Timelike;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of temperature samples in degrees Celsius.
pub trait TemperatureProbe: Send {
    fn read_temperature(&mut self) -> f64;
}

/// Source of wall-clock time as an `(hour, minute, second)` triple.
pub trait WallClock: Send {
    fn read_time(&self) -> (u32, u32, u32);
}

/// Binary output: an LED, a relay, a GPIO pin.
pub trait Actuator: Send {
    fn set_output(&mut self, on: bool);
}

/// Synthetic temperature source: a slow sine swing around a base value with
/// a little measurement jitter. Stands in for the ADC when no sensor is
/// attached.
pub struct SyntheticProbe {
    base: f64,
    amplitude: f64,
    phase: f64,
    rng: StdRng,
}

impl SyntheticProbe {
    pub fn new(base: f64, amplitude: f64) -> Self {
        Self {
            base,
            amplitude,
            phase: 0.0,
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for SyntheticProbe {
    fn default() -> Self {
        Self::new(24.0, 3.0)
    }
}

impl TemperatureProbe for SyntheticProbe {
    fn read_temperature(&mut self) -> f64 {
        self.phase += 0.05;
        let jitter: f64 = self.rng.gen_range(-0.1..0.1);
        self.base + self.amplitude * self.phase.sin() + jitter
    }
}

/// Wall clock backed by local system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl WallClock for SystemClock {
    fn read_time(&self) -> (u32, u32, u32) {
        let now = chrono::Local::now();
        (now.hour(), now.minute(), now.second())
    }
}

/// Actuator that logs state transitions. Stands in for a GPIO pin on hosts
/// without one.
#[derive(Debug)]
pub struct LogActuator {
    name: &'static str,
    state: Option<bool>,
}

impl LogActuator {
    pub fn new(name: &'static str) -> Self {
        Self { name, state: None }
    }

    /// Last commanded state, if any.
    pub fn state(&self) -> Option<bool> {
        self.state
    }
}

impl Actuator for LogActuator {
    fn set_output(&mut self, on: bool) {
        if self.state != Some(on) {
            log::info!("actuator `{}` -> {}", self.name, if on { "on" } else { "off" });
        }
        self.state = Some(on);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthetic_probe_stays_near_base() {
        let mut probe = SyntheticProbe::new(24.0, 3.0);
        for _ in 0..200 {
            let sample = probe.read_temperature();
            assert!(sample > 24.0 - 3.2 && sample < 24.0 + 3.2);
        }
    }

    #[test]
    fn system_clock_yields_valid_ranges() {
        let (hour, minute, second) = SystemClock.read_time();
        assert!(hour < 24);
        assert!(minute < 60);
        assert!(second < 60);
    }

    #[test]
    fn log_actuator_remembers_last_command() {
        let mut led = LogActuator::new("led");
        assert_eq!(led.state(), None);
        led.set_output(true);
        assert_eq!(led.state(), Some(true));
        led.set_output(false);
        assert_eq!(led.state(), Some(false));
    }
}

//! Publisher role: sample, encode, publish.

use crate::messages::{Reading, TimeRecord};
use crate::nodes::hardware::{Actuator, LogActuator, SyntheticProbe, SystemClock, TemperatureProbe, WallClock};
use thermlink_core::{Node, Params, ThermResult, Transport};

/// Samples the probe on every tick, stamps the reading with the wall-clock
/// time, and publishes the encoded message on the configured topic.
///
/// The transmit indicator is pulsed around each send: cleared when the tick
/// begins, set again after a successful publish, so it stays lit between
/// ticks as a "last send ok" lamp. A publish failure propagates out of the
/// tick and halts the driver; there is no retry at this layer.
pub struct TemperaturePublisherNode<T: Transport> {
    transport: T,
    topic: Vec<u8>,
    publisher_id: u32,
    probe: Box<dyn TemperatureProbe>,
    clock: Box<dyn WallClock>,
    indicator: Box<dyn Actuator>,
    sample_count: u64,
}

impl<T: Transport> TemperaturePublisherNode<T> {
    /// Create a publisher with the host stand-in hardware (synthetic probe,
    /// system clock, logging indicator).
    pub fn new(transport: T, params: &Params) -> Self {
        Self::with_hardware(
            transport,
            params,
            Box::new(SyntheticProbe::default()),
            Box::new(SystemClock),
            Box::new(LogActuator::new("tx_indicator")),
        )
    }

    /// Create a publisher with explicit hardware implementations.
    pub fn with_hardware(
        transport: T,
        params: &Params,
        probe: Box<dyn TemperatureProbe>,
        clock: Box<dyn WallClock>,
        indicator: Box<dyn Actuator>,
    ) -> Self {
        Self {
            transport,
            topic: params.topic.clone().into_bytes(),
            publisher_id: params.publisher_id,
            probe,
            clock,
            indicator,
            sample_count: 0,
        }
    }

    pub fn sample_count(&self) -> u64 {
        self.sample_count
    }
}

impl<T: Transport> Node for TemperaturePublisherNode<T> {
    fn name(&self) -> &'static str {
        "TemperaturePublisherNode"
    }

    fn tick(&mut self) -> ThermResult<()> {
        self.indicator.set_output(false);

        let temperature = self.probe.read_temperature();
        let (hour, minute, second) = self.clock.read_time();
        let reading = Reading::new(
            temperature,
            self.publisher_id,
            TimeRecord::new(hour, minute, second),
        );

        self.transport.publish(&self.topic, &reading.encode())?;
        self.indicator.set_output(true);
        self.sample_count += 1;
        log::debug!("published {reading}");
        Ok(())
    }

    fn shutdown(&mut self) -> ThermResult<()> {
        self.indicator.set_output(false);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use thermlink_core::{Role, ThermError};

    struct FixedProbe(f64);
    impl TemperatureProbe for FixedProbe {
        fn read_temperature(&mut self) -> f64 {
            self.0
        }
    }

    struct FixedClock(u32, u32, u32);
    impl WallClock for FixedClock {
        fn read_time(&self) -> (u32, u32, u32) {
            (self.0, self.1, self.2)
        }
    }

    #[derive(Default)]
    struct CaptureTransport {
        published: Vec<(Vec<u8>, Vec<u8>)>,
        fail: bool,
    }

    impl Transport for CaptureTransport {
        fn publish(&mut self, topic: &[u8], payload: &[u8]) -> ThermResult<()> {
            if self.fail {
                return Err(ThermError::Transport("broker unreachable".into()));
            }
            self.published.push((topic.to_vec(), payload.to_vec()));
            Ok(())
        }

        fn subscribe(&mut self, _topic: &[u8]) -> ThermResult<()> {
            Ok(())
        }

        fn poll(&mut self, _on_message: &mut dyn FnMut(&[u8], &[u8])) -> ThermResult<()> {
            Ok(())
        }
    }

    fn node(transport: CaptureTransport) -> TemperaturePublisherNode<CaptureTransport> {
        let params = Params::for_role(Role::Publisher);
        TemperaturePublisherNode::with_hardware(
            transport,
            &params,
            Box::new(FixedProbe(26.5)),
            Box::new(FixedClock(14, 30, 0)),
            Box::new(LogActuator::new("test_indicator")),
        )
    }

    #[test]
    fn tick_publishes_a_decodable_reading() {
        let mut publisher = node(CaptureTransport::default());
        publisher.tick().unwrap();

        assert_eq!(publisher.sample_count(), 1);
        let (topic, payload) = &publisher.transport.published[0];
        assert_eq!(topic, b"temp/readings");
        let reading = Reading::decode(payload).unwrap();
        assert_relative_eq!(reading.temperature, 26.5);
        assert_eq!(reading.publisher_id, 1);
        assert_eq!(reading.time, TimeRecord::new(14, 30, 0));
    }

    #[test]
    fn publish_failure_is_fatal() {
        let mut publisher = node(CaptureTransport {
            fail: true,
            ..Default::default()
        });
        assert!(matches!(
            publisher.tick(),
            Err(ThermError::Transport(_))
        ));
        assert_eq!(publisher.sample_count(), 0);
    }
}

//! Subscriber role: decode, aggregate, actuate.

use crate::algorithms::{AggregationStore, ThresholdPolicy};
use crate::messages::Reading;
use crate::nodes::hardware::{Actuator, LogActuator};
use std::time::Instant;
use thermlink_core::{Node, Params, ThermResult, Transport};

/// Drains the transport one message per tick, folds each decoded reading
/// into the aggregation store, and drives the actuator from the thresholded
/// average.
///
/// A malformed payload is logged and discarded: the store is untouched and
/// processing continues with the next message. That is the only error this
/// node absorbs; transport failures propagate and halt the driver.
pub struct AggregatorNode<T: Transport> {
    transport: T,
    topic: Vec<u8>,
    store: AggregationStore,
    policy: ThresholdPolicy,
    actuator: Box<dyn Actuator>,
}

impl<T: Transport> AggregatorNode<T> {
    /// Create an aggregator that drives a logging actuator.
    pub fn new(transport: T, params: &Params) -> Self {
        Self::with_actuator(transport, params, Box::new(LogActuator::new("threshold_output")))
    }

    /// Create an aggregator driving an explicit actuator.
    pub fn with_actuator(transport: T, params: &Params, actuator: Box<dyn Actuator>) -> Self {
        Self {
            transport,
            topic: params.topic.clone().into_bytes(),
            store: AggregationStore::new(params.retention_window()),
            policy: ThresholdPolicy::new(params.threshold),
            actuator,
        }
    }

    /// Read-only view of the store, for observability and tests.
    pub fn store(&self) -> &AggregationStore {
        &self.store
    }
}

impl<T: Transport> Node for AggregatorNode<T> {
    fn name(&self) -> &'static str {
        "AggregatorNode"
    }

    fn init(&mut self) -> ThermResult<()> {
        self.transport.subscribe(&self.topic)?;
        log::info!(
            "subscribed to `{}`",
            String::from_utf8_lossy(&self.topic)
        );
        Ok(())
    }

    fn tick(&mut self) -> ThermResult<()> {
        let Self {
            transport,
            store,
            policy,
            actuator,
            ..
        } = self;

        transport.poll(&mut |_topic, payload| {
            let reading = match Reading::decode(payload) {
                Ok(reading) => reading,
                Err(err) => {
                    log::warn!("discarding malformed message: {err}");
                    return;
                }
            };

            let now = Instant::now();
            store.update(reading.publisher_id, reading.temperature, now);
            store.purge(now);

            let average = store.average();
            actuator.set_output(policy.engaged(average));
            log::debug!("received {reading}, average now {average:?}");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::TimeRecord;
    use approx::assert_relative_eq;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use thermlink_core::{LoopbackBus, Role};

    struct SharedActuator(Arc<AtomicBool>);
    impl Actuator for SharedActuator {
        fn set_output(&mut self, on: bool) {
            self.0.store(on, Ordering::SeqCst);
        }
    }

    fn aggregator(
        bus: &LoopbackBus,
    ) -> (
        AggregatorNode<thermlink_core::LoopbackTransport>,
        Arc<AtomicBool>,
    ) {
        let output = Arc::new(AtomicBool::new(false));
        let params = Params::for_role(Role::Subscriber);
        let node = AggregatorNode::with_actuator(
            bus.endpoint(),
            &params,
            Box::new(SharedActuator(Arc::clone(&output))),
        );
        (node, output)
    }

    #[test]
    fn reading_updates_store_and_engages_actuator() {
        let bus = LoopbackBus::new();
        let (mut node, output) = aggregator(&bus);
        node.init().unwrap();

        let mut tx = bus.endpoint();
        let reading = Reading::new(26.5, 1, TimeRecord::new(14, 30, 0));
        tx.publish(b"temp/readings", &reading.encode()).unwrap();

        node.tick().unwrap();
        assert_eq!(node.store().len(), 1);
        assert_relative_eq!(node.store().average().unwrap(), 26.5);
        assert!(output.load(Ordering::SeqCst));
    }

    #[test]
    fn below_threshold_average_disengages_actuator() {
        let bus = LoopbackBus::new();
        let (mut node, output) = aggregator(&bus);
        node.init().unwrap();

        let mut tx = bus.endpoint();
        tx.publish(
            b"temp/readings",
            &Reading::new(30.0, 1, TimeRecord::new(9, 0, 0)).encode(),
        )
        .unwrap();
        node.tick().unwrap();
        assert!(output.load(Ordering::SeqCst));

        // second publisher drags the average under the 25.0 threshold
        tx.publish(
            b"temp/readings",
            &Reading::new(18.0, 2, TimeRecord::new(9, 0, 2)).encode(),
        )
        .unwrap();
        node.tick().unwrap();
        assert_relative_eq!(node.store().average().unwrap(), 24.0);
        assert!(!output.load(Ordering::SeqCst));
    }

    #[test]
    fn malformed_payload_leaves_store_untouched() {
        let bus = LoopbackBus::new();
        let (mut node, output) = aggregator(&bus);
        node.init().unwrap();

        let mut tx = bus.endpoint();
        tx.publish(b"temp/readings", &[0x09, 0x01, 0x02]).unwrap();
        node.tick().unwrap();
        assert!(node.store().is_empty());
        assert!(!output.load(Ordering::SeqCst));

        // pipeline keeps going: the next valid message lands normally
        tx.publish(
            b"temp/readings",
            &Reading::new(26.5, 1, TimeRecord::new(14, 30, 0)).encode(),
        )
        .unwrap();
        node.tick().unwrap();
        assert_eq!(node.store().len(), 1);
        assert!(output.load(Ordering::SeqCst));
    }

    #[test]
    fn tick_without_messages_changes_nothing() {
        let bus = LoopbackBus::new();
        let (mut node, output) = aggregator(&bus);
        node.init().unwrap();
        node.tick().unwrap();
        assert!(node.store().is_empty());
        assert!(!output.load(Ordering::SeqCst));
    }
}

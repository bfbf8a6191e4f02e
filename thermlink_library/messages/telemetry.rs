//! Telemetry reading messages and their wire encoding.
//!
//! Wire schema (Protocol Buffers framing, hand-written):
//!
//! ```text
//! Reading:     field 1: double temperature
//!              field 2: varint published_id
//!              field 3: bytes  time        // independently-encoded TimeRecord
//! TimeRecord:  field 1: varint hour
//!              field 2: varint minute
//!              field 3: varint second
//! ```
//!
//! Encoding emits fields in field-number order so output is byte-stable;
//! decoding accepts fields in any order and skips unknown field numbers.
//! Semantic range (hour 0-23 and friends) is the sender's responsibility:
//! structurally valid but out-of-range values pass through uninterpreted.

use serde::{Deserialize, Serialize};
use std::fmt;
use thermlink_core::codec::wire::{self, WireReader, WIRE_FIXED64, WIRE_LEN, WIRE_VARINT};
use thermlink_core::codec::CodecError;

const TIME_HOUR: u32 = 1;
const TIME_MINUTE: u32 = 2;
const TIME_SECOND: u32 = 3;

const READING_TEMPERATURE: u32 = 1;
const READING_PUBLISHED_ID: u32 = 2;
const READING_TIME: u32 = 3;

/// Time-of-day stamp nested inside a [`Reading`]. Immutable once built; has
/// no identity of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRecord {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl TimeRecord {
    pub fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Encode as an independent field set. Every field is framed
    /// unconditionally, zero values included.
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(12);
        wire::put_tag(&mut buf, TIME_HOUR, WIRE_VARINT);
        wire::put_varint(&mut buf, u64::from(self.hour));
        wire::put_tag(&mut buf, TIME_MINUTE, WIRE_VARINT);
        wire::put_varint(&mut buf, u64::from(self.minute));
        wire::put_tag(&mut buf, TIME_SECOND, WIRE_VARINT);
        wire::put_varint(&mut buf, u64::from(self.second));
        buf
    }

    /// Decode from the bytes of a nested `time` field.
    pub fn decode(data: &[u8]) -> Result<Self, CodecError> {
        let mut reader = WireReader::new(data);
        let mut hour = None;
        let mut minute = None;
        let mut second = None;
        while !reader.is_empty() {
            let (field, wire_type) = reader.tag()?;
            match (field, wire_type) {
                (TIME_HOUR, WIRE_VARINT) => hour = Some(reader.varint()? as u32),
                (TIME_MINUTE, WIRE_VARINT) => minute = Some(reader.varint()? as u32),
                (TIME_SECOND, WIRE_VARINT) => second = Some(reader.varint()? as u32),
                _ => reader.skip(wire_type)?,
            }
        }
        Ok(Self {
            hour: hour.ok_or(CodecError::MissingField("hour"))?,
            minute: minute.ok_or(CodecError::MissingField("minute"))?,
            second: second.ok_or(CodecError::MissingField("second"))?,
        })
    }
}

impl fmt::Display for TimeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// One sensor sample: temperature, source identifier, and the wall-clock
/// time it was taken. Constructed fresh for each transmission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Degrees Celsius.
    pub temperature: f64,
    /// Identifier of the publishing device.
    pub publisher_id: u32,
    pub time: TimeRecord,
}

impl Reading {
    pub fn new(temperature: f64, publisher_id: u32, time: TimeRecord) -> Self {
        Self {
            temperature,
            publisher_id,
            time,
        }
    }

    /// Encode to wire bytes. The nested [`TimeRecord`] is serialized first
    /// and carried as a length-prefixed bytes field.
    pub fn encode(&self) -> Vec<u8> {
        let time_bytes = self.time.encode();
        let mut buf = Vec::with_capacity(16 + time_bytes.len());
        wire::put_tag(&mut buf, READING_TEMPERATURE, WIRE_FIXED64);
        wire::put_fixed64(&mut buf, self.temperature.to_bits());
        wire::put_tag(&mut buf, READING_PUBLISHED_ID, WIRE_VARINT);
        wire::put_varint(&mut buf, u64::from(self.publisher_id));
        wire::put_tag(&mut buf, READING_TIME, WIRE_LEN);
        wire::put_len_prefixed(&mut buf, &time_bytes);
        buf
    }

    /// Decode from wire bytes. Fields may arrive in any order; unknown
    /// fields are skipped. Fails when the buffer is truncated, a declared
    /// length overruns the payload, a required field is absent, or the
    /// nested time bytes do not decode.
    pub fn decode(data: &[u8]) -> Result<Self, CodecError> {
        let mut reader = WireReader::new(data);
        let mut temperature = None;
        let mut publisher_id = None;
        let mut time = None;
        while !reader.is_empty() {
            let (field, wire_type) = reader.tag()?;
            match (field, wire_type) {
                (READING_TEMPERATURE, WIRE_FIXED64) => {
                    temperature = Some(f64::from_bits(reader.fixed64()?));
                }
                (READING_PUBLISHED_ID, WIRE_VARINT) => {
                    publisher_id = Some(reader.varint()? as u32);
                }
                (READING_TIME, WIRE_LEN) => {
                    time = Some(TimeRecord::decode(reader.len_prefixed()?)?);
                }
                _ => reader.skip(wire_type)?,
            }
        }
        Ok(Self {
            temperature: temperature.ok_or(CodecError::MissingField("temperature"))?,
            publisher_id: publisher_id.ok_or(CodecError::MissingField("published_id"))?,
            time: time.ok_or(CodecError::MissingField("time"))?,
        })
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2} °C from publisher {} at {}",
            self.temperature, self.publisher_id, self.time
        )
    }
}

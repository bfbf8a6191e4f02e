//! # Wire codec for THERMLINK messages
//!
//! Deterministic, reversible binary framing compatible with the Protocol
//! Buffers wire format: every field is a `(field_number << 3 | wire_type)`
//! tag followed by a varint, a fixed 64-bit value, or a length-prefixed byte
//! blob. Nested messages are carried as length-prefixed blobs of their own
//! independently encoded field set.
//!
//! The schema here is two messages deep and fixed, so the framing is written
//! by hand rather than generated. Message-level encode/decode lives with the
//! message types in `thermlink_library::messages`; this module owns the
//! field-level primitives.
//!
//! The codec is schema-only: it enforces structure (tags, lengths, required
//! fields) and never semantic range. A reading claiming minute 90 decodes
//! fine; range validity belongs to the sender.

pub mod wire;

pub use wire::{WireReader, WIRE_FIXED64, WIRE_LEN, WIRE_VARINT};

use thiserror::Error;

/// Structural decode failure. Converted into
/// [`ThermError::MalformedMessage`](crate::error::ThermError) at the
/// boundary where payloads enter the pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The buffer ended mid-field.
    #[error("message truncated")]
    Truncated,

    /// A length-prefixed field declared more bytes than remain.
    #[error("declared length {declared} exceeds {remaining} remaining bytes")]
    LengthOverrun { declared: usize, remaining: usize },

    /// A varint ran past its maximum 10-byte encoding.
    #[error("varint exceeds 64 bits")]
    VarintOverflow,

    /// A tag carried a wire type this schema does not use.
    #[error("unsupported wire type {0}")]
    InvalidWireType(u8),

    /// Field number 0 is reserved by the wire format.
    #[error("invalid field tag")]
    InvalidTag,

    /// Parsing completed without seeing a required field.
    #[error("required field `{0}` missing")]
    MissingField(&'static str),
}

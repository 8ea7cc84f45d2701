//! registry/types.rs
//! Encoder/decoder shapes and the plugin capability.

use bytes::Bytes;
use thiserror::Error;

use crate::types::DecodeError;
use crate::value::Value;
use crate::writer::ByteWriter;

/// Simple encoder: payload bytes, or `None` when the value is not its type.
pub type EncodeFn<C> = Box<dyn Fn(&Value, &C) -> Option<Vec<u8>> + Send + Sync>;

/// Decoder: always receives a complete payload.
pub type DecodeFn<C> = Box<dyn Fn(Bytes, i8, &C) -> Result<Value, DecodeError> + Send + Sync>;

/// Raw encoder: writes the whole frame itself and returns `true`, or
/// returns `false` having written nothing.
pub type RawEncodeFn<C> = Box<dyn Fn(&mut dyn ByteWriter, usize, &Value, &C) -> bool + Send + Sync>;

/// Extension that controls its own wire layout.
///
/// `try_encode` must either emit a complete extension frame and return
/// `true`, or return `false` without touching `writer`. Writing and then
/// declining leaves the output corrupt.
pub trait ExtensionPlugin<C>: Send + Sync {
    /// Custom type code; must be non-negative.
    fn type_code(&self) -> i8;

    fn try_encode(&self, writer: &mut dyn ByteWriter, depth: usize, value: &Value, context: &C) -> bool;

    fn decode(&self, data: Bytes, type_code: i8, context: &C) -> Result<Value, DecodeError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("cannot register a raw encoder for reserved built-in type code {type_code}")]
    ReservedTypeCode { type_code: i8 },
}

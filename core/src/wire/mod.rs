//! wire/mod.rs
//! Minimal outer codec that drives the extension registry.
//!
//! Notes:
//! - Scalars (nil, bool, integers, floats, str, bin) use native formats.
//! - Everything else goes through extension dispatch, raw encoders first
//!   unless `DispatchOrder::SimpleFirst` is configured.
//! - Arrays and maps are not handled here.

pub mod options;
pub mod encoder;
pub mod decoder;

pub use options::*;
pub use encoder::*;
pub use decoder::*;

use bytes::Bytes;

use crate::registry::ExtensionCodec;
use crate::types::{CodecError, DecodeError};
use crate::value::Value;

/// Encode a single value with default options.
pub fn encode<C: 'static>(value: &Value, codec: &ExtensionCodec<C>, context: &C) -> Result<Vec<u8>, CodecError> {
    let mut encoder = Encoder::new(codec, context);
    encoder.encode(value)?;
    Ok(encoder.finish())
}

/// Decode exactly one value; trailing bytes are an error.
pub fn decode<C: 'static>(
    input: impl Into<Bytes>,
    codec: &ExtensionCodec<C>,
    context: &C,
) -> Result<Value, CodecError> {
    let mut decoder = Decoder::new(codec, context, input);
    let value = decoder.decode_next()?;
    if !decoder.is_finished() {
        return Err(DecodeError::TrailingBytes { remaining: decoder.remaining() }.into());
    }
    Ok(value)
}

use thiserror::Error;

use crate::{framing::FrameError, registry::ConfigError, typed_buffer::BufferError};

/// Failure while turning wire bytes back into a value.
///
/// Decoders registered on an `ExtensionCodec` report malformed payloads
/// through this type; the codec propagates it unchanged.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Extension frame header could not be read.
    #[error("frame error: {0}")]
    Frame(#[from] FrameError),

    /// Typed buffer payload was malformed.
    #[error("typed buffer error: {0}")]
    Buffer(#[from] BufferError),

    /// A registered decoder rejected its payload.
    #[error("malformed payload for extension type {type_code}: {reason}")]
    MalformedPayload { type_code: i8, reason: String },

    #[error("unexpected end of input: need {need} bytes, have {have}")]
    Truncated { need: usize, have: usize },

    /// Format tag outside the supported scalar and extension set.
    #[error("unsupported format tag: 0x{tag:02x}")]
    UnsupportedFormat { tag: u8 },

    #[error("invalid utf-8 in string: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("{remaining} trailing bytes after value")]
    TrailingBytes { remaining: usize },
}

/// Failure while turning a value into wire bytes.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// No native format and no extension accepted the value.
    #[error("no encoder accepts value of kind {kind}")]
    Unsupported { kind: &'static str },

    #[error("frame error: {0}")]
    Frame(#[from] FrameError),

    #[error("{what} of {len} bytes does not fit a 32-bit length")]
    LengthOverflow { what: &'static str, len: usize },
}

/// Unified error for callers that configure and run a codec end to end.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),

    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}

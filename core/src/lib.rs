//! msgpack-ext-core
//!
//! Extension-type registry and dispatch for a MessagePack-family codec.
//! Application types register encoders/decoders by type code; raw plugins may
//! write their own frame layout; unknown extensions survive as `ExtData`.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;
pub mod writer;

// Extension model
pub mod ext_data;
pub mod framing;
pub mod value;
pub mod registry;

// Extensions shipped with the crate
pub mod timestamp;
pub mod typed_buffer;

// Outer codec
pub mod wire;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::ext_data::ExtData;
    pub use crate::registry::{ConfigError, ExtensionCodec, ExtensionPlugin};
    pub use crate::timestamp::Timestamp;
    pub use crate::typed_buffer::{Element, ElementKind, NumericBuffer, NumericView, TypedBufferPlugin};
    pub use crate::types::{CodecError, DecodeError, EncodeError};
    pub use crate::value::{Object, Value};
    pub use crate::wire::{decode, encode, Decoder, DispatchOrder, Encoder, EncoderOptions};
    pub use crate::writer::ByteWriter;
}

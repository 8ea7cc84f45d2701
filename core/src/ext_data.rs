//! ext_data.rs
//! Opaque (type code, payload) capsule.
//!
//! A capsule is what every simple encoder's output gets wrapped into before
//! framing, and what `ExtensionCodec::decode` hands back when no decoder is
//! registered for a type code. Encoding a capsule again writes the same frame.

use bytes::Bytes;

use crate::framing::{write_ext_header, FrameError};
use crate::writer::ByteWriter;

/// Extension value whose semantic type the codec does not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExtData {
    type_code: i8,
    data: Bytes,
}

impl ExtData {
    pub fn new(type_code: i8, data: impl Into<Bytes>) -> Self {
        Self {
            type_code,
            data: data.into(),
        }
    }

    #[inline]
    pub fn type_code(&self) -> i8 {
        self.type_code
    }

    #[inline]
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn into_parts(self) -> (i8, Bytes) {
        (self.type_code, self.data)
    }

    /// Emit the canonical frame for this capsule.
    ///
    /// The narrowest header for the payload length is always chosen, so a
    /// capsule decoded from a canonical frame re-encodes byte for byte. A
    /// capsule from a non-canonical frame (e.g. ext32 around a one-byte
    /// payload) keeps its type code and payload but gets the shorter header,
    /// which also moves the payload's absolute offset.
    pub fn write(&self, writer: &mut dyn ByteWriter) -> Result<(), FrameError> {
        write_ext_header(writer, self.type_code, self.data.len())?;
        writer.write_bytes(&self.data);
        Ok(())
    }
}

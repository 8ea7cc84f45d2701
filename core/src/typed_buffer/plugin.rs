//! typed_buffer/plugin.rs
//! Raw extension that embeds numeric buffers at aligned offsets.
//!
//! Payload layout (inside an ext32 frame):
//!
//! ```text
//! [ element kind tag (1) ]
//! [ pad length (1) ]
//! [ pad zero bytes (pad) ]
//! [ raw elements, native byte order ]
//! ```
//!
//! `pad` is chosen so the first element byte sits at an absolute output
//! offset divisible by the element size.
//!
//! Known limitation: elements are copied verbatim, so the peers must share
//! byte order.

use bytes::Bytes;

use crate::constants::{EXT32_HEADER_LEN, TYPED_BUFFER_HEADER_LEN};
use crate::framing::write_ext32_header;
use crate::registry::ExtensionPlugin;
use crate::typed_buffer::types::{BufferError, ElementKind, NumericBuffer};
use crate::types::DecodeError;
use crate::utils::alignment_padding;
use crate::value::Value;
use crate::writer::ByteWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypedBufferPlugin {
    type_code: i8,
}

impl TypedBufferPlugin {
    pub const fn new(type_code: i8) -> Self {
        Self { type_code }
    }

    #[inline]
    pub const fn code(&self) -> i8 {
        self.type_code
    }
}

/// Pad needed for a frame whose ext32 header starts at `frame_start`.
#[inline]
pub const fn padding_for(frame_start: usize, element_size: usize) -> usize {
    alignment_padding(frame_start + EXT32_HEADER_LEN + TYPED_BUFFER_HEADER_LEN, element_size)
}

impl<C> ExtensionPlugin<C> for TypedBufferPlugin {
    fn type_code(&self) -> i8 {
        self.type_code
    }

    fn try_encode(&self, writer: &mut dyn ByteWriter, _depth: usize, value: &Value, _context: &C) -> bool {
        let Some(view) = value.as_numeric_view() else {
            return false;
        };

        let kind = view.element_kind();
        let raw = view.raw_bytes();
        let pad = padding_for(writer.position(), kind.size());

        let Ok(data_len) = u32::try_from(TYPED_BUFFER_HEADER_LEN + pad + raw.len()) else {
            return false;
        };

        write_ext32_header(writer, self.type_code, data_len);
        writer.write_u8(kind.tag());
        writer.write_u8(pad as u8);
        writer.write_zeros(pad);
        writer.write_bytes(raw);
        true
    }

    fn decode(&self, data: Bytes, _type_code: i8, _context: &C) -> Result<Value, DecodeError> {
        Ok(Value::TypedBuffer(decode_typed_buffer(data)?))
    }
}

/// Rebuild a buffer from a typed buffer payload without copying elements.
pub fn decode_typed_buffer(data: Bytes) -> Result<NumericBuffer, BufferError> {
    if data.len() < TYPED_BUFFER_HEADER_LEN {
        return Err(BufferError::PayloadTooShort {
            need: TYPED_BUFFER_HEADER_LEN,
            have: data.len(),
        });
    }

    let kind = ElementKind::try_from(data[0]).map_err(|_| BufferError::UnknownElementKind(data[0]))?;
    let pad = data[1] as usize;

    let start = TYPED_BUFFER_HEADER_LEN + pad;
    if start > data.len() {
        return Err(BufferError::PaddingOverflow { pad, len: data.len() });
    }

    NumericBuffer::from_bytes(kind, data.slice(start..))
}

use crate::ext_data::ExtData;
use crate::framing::types::{ExtFrameTag, FrameError};
use crate::writer::ByteWriter;

/// Emit an extension frame header using the narrowest variant for `data_len`.
///
/// Layout:
///
/// ```text
/// [ tag (1) ]
/// [ length (0 | 1 | 2 | 4), big-endian ]
/// [ type code (1), signed ]
/// ```
pub fn write_ext_header(
    writer: &mut dyn ByteWriter,
    type_code: i8,
    data_len: usize,
) -> Result<ExtFrameTag, FrameError> {
    let tag = ExtFrameTag::for_len(data_len)?;

    writer.write_u8(tag as u8);
    match tag {
        ExtFrameTag::Ext8 => writer.write_u8(data_len as u8),
        ExtFrameTag::Ext16 => writer.write_u16_be(data_len as u16),
        ExtFrameTag::Ext32 => writer.write_u32_be(data_len as u32),
        _ => {}
    }
    writer.write_u8(type_code as u8);

    Ok(tag)
}

/// Emit an ext32 header regardless of payload size.
///
/// Raw encoders use the fixed-width variant so the payload offset is known
/// before the payload length is.
#[inline]
pub fn write_ext32_header(writer: &mut dyn ByteWriter, type_code: i8, data_len: u32) {
    writer.write_u8(ExtFrameTag::Ext32 as u8);
    writer.write_u32_be(data_len);
    writer.write_u8(type_code as u8);
}

/// Encode a capsule into a standalone canonical frame.
pub fn encode_ext_frame(ext: &ExtData) -> Result<Vec<u8>, FrameError> {
    let data = ext.data();
    let mut out = Vec::with_capacity(ExtFrameTag::Ext32.header_len() + data.len());
    ext.write(&mut out)?;
    Ok(out)
}

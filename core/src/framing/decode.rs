use byteorder::{BigEndian, ByteOrder};
use bytes::Bytes;

use crate::ext_data::ExtData;
use crate::framing::types::{ExtFrameHeader, ExtFrameTag, FrameError};

/// Parse an extension frame header starting at `wire[0]`.
///
/// Only the header is checked; the payload may still be incomplete.
pub fn parse_ext_header(wire: &[u8]) -> Result<ExtFrameHeader, FrameError> {
    let first = *wire.first().ok_or(FrameError::Truncated { need: 1, have: 0 })?;
    let tag = ExtFrameTag::try_from(first).map_err(|_| FrameError::InvalidTag(first))?;

    let need = tag.header_len();
    if wire.len() < need {
        return Err(FrameError::Truncated { need, have: wire.len() });
    }

    let len_field = &wire[1..1 + tag.len_field_width()];
    let data_len = match tag.fixed_len() {
        Some(n) => n as u32,
        None => match tag {
            ExtFrameTag::Ext8 => len_field[0] as u32,
            ExtFrameTag::Ext16 => BigEndian::read_u16(len_field) as u32,
            _ => BigEndian::read_u32(len_field),
        },
    };

    Ok(ExtFrameHeader {
        tag,
        type_code: wire[need - 1] as i8,
        data_len,
    })
}

/// Decode one whole extension frame.
///
/// The payload is a slice of `wire`; nothing is copied. Trailing bytes after
/// the frame are ignored.
pub fn decode_ext_frame(wire: &Bytes) -> Result<ExtData, FrameError> {
    let header = parse_ext_header(wire)?;

    let end = header.frame_len();
    if wire.len() < end {
        return Err(FrameError::Truncated { need: end, have: wire.len() });
    }

    Ok(ExtData::new(header.type_code, wire.slice(header.header_len()..end)))
}

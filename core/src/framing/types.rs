use num_enum::TryFromPrimitive;
use thiserror::Error;

use crate::constants::tags;

/// Extension frame variants, selected by payload length.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
pub enum ExtFrameTag {
    FixExt1  = tags::FIXEXT1,
    FixExt2  = tags::FIXEXT2,
    FixExt4  = tags::FIXEXT4,
    FixExt8  = tags::FIXEXT8,
    FixExt16 = tags::FIXEXT16,
    Ext8     = tags::EXT8,
    Ext16    = tags::EXT16,
    Ext32    = tags::EXT32,
}

impl ExtFrameTag {
    /// Canonical (narrowest) variant for a payload of `len` bytes.
    pub fn for_len(len: usize) -> Result<Self, FrameError> {
        let tag = match len {
            1 => ExtFrameTag::FixExt1,
            2 => ExtFrameTag::FixExt2,
            4 => ExtFrameTag::FixExt4,
            8 => ExtFrameTag::FixExt8,
            16 => ExtFrameTag::FixExt16,
            n if n <= u8::MAX as usize => ExtFrameTag::Ext8,
            n if n <= u16::MAX as usize => ExtFrameTag::Ext16,
            n if n <= u32::MAX as usize => ExtFrameTag::Ext32,
            n => return Err(FrameError::LengthOverflow { len: n }),
        };
        Ok(tag)
    }

    /// Payload length implied by a fixext tag.
    pub const fn fixed_len(self) -> Option<usize> {
        match self {
            ExtFrameTag::FixExt1 => Some(1),
            ExtFrameTag::FixExt2 => Some(2),
            ExtFrameTag::FixExt4 => Some(4),
            ExtFrameTag::FixExt8 => Some(8),
            ExtFrameTag::FixExt16 => Some(16),
            _ => None,
        }
    }

    /// Width of the explicit length field.
    pub const fn len_field_width(self) -> usize {
        match self {
            ExtFrameTag::Ext8 => 1,
            ExtFrameTag::Ext16 => 2,
            ExtFrameTag::Ext32 => 4,
            _ => 0,
        }
    }

    /// Tag byte + length field + type code.
    pub const fn header_len(self) -> usize {
        1 + self.len_field_width() + 1
    }
}

/// Parsed extension frame header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtFrameHeader {
    pub tag: ExtFrameTag,
    pub type_code: i8,
    pub data_len: u32,
}

impl ExtFrameHeader {
    #[inline]
    pub const fn header_len(&self) -> usize {
        self.tag.header_len()
    }

    /// Header plus payload.
    #[inline]
    pub const fn frame_len(&self) -> usize {
        self.header_len() + self.data_len as usize
    }
}

#[derive(Debug, Error)]
pub enum FrameError {
    #[error("truncated frame: need {need} bytes, have {have}")]
    Truncated { need: usize, have: usize },

    #[error("not an extension frame tag: 0x{0:02x}")]
    InvalidTag(u8),

    #[error("extension payload too large: {len} bytes")]
    LengthOverflow { len: usize },
}

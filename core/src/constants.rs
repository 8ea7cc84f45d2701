//! constants.rs
//! Stable type codes, wire tags and sizes shared by every layer.

/// Built-in MessagePack timestamp extension.
pub const TIMESTAMP_TYPE: i8 = -1;

/// Slots per namespace: custom codes 0..=127, built-in codes -1..=-128.
pub const SLOT_COUNT: usize = 128;

/// ext32 frame header: tag (1) + length (4) + type code (1).
pub const EXT32_HEADER_LEN: usize = 6;

/// Typed buffer sub-header: element kind (1) + pad length (1).
pub const TYPED_BUFFER_HEADER_LEN: usize = 2;

/// Starting capacity for encoder output when no options are given.
pub const DEFAULT_INITIAL_BUFFER_SIZE: usize = 2048;

/// MessagePack format tags used by the wire layer.
pub mod tags {
    pub const POSITIVE_FIXINT_MAX: u8 = 0x7f;
    pub const FIXMAP_MIN: u8 = 0x80;
    pub const FIXARRAY_MAX: u8 = 0x9f;
    pub const FIXSTR_MIN: u8 = 0xa0;
    pub const FIXSTR_MAX: u8 = 0xbf;
    pub const NIL: u8 = 0xc0;
    pub const NEVER_USED: u8 = 0xc1;
    pub const FALSE: u8 = 0xc2;
    pub const TRUE: u8 = 0xc3;
    pub const BIN8: u8 = 0xc4;
    pub const BIN16: u8 = 0xc5;
    pub const BIN32: u8 = 0xc6;
    pub const EXT8: u8 = 0xc7;
    pub const EXT16: u8 = 0xc8;
    pub const EXT32: u8 = 0xc9;
    pub const FLOAT32: u8 = 0xca;
    pub const FLOAT64: u8 = 0xcb;
    pub const UINT8: u8 = 0xcc;
    pub const UINT16: u8 = 0xcd;
    pub const UINT32: u8 = 0xce;
    pub const UINT64: u8 = 0xcf;
    pub const INT8: u8 = 0xd0;
    pub const INT16: u8 = 0xd1;
    pub const INT32: u8 = 0xd2;
    pub const INT64: u8 = 0xd3;
    pub const FIXEXT1: u8 = 0xd4;
    pub const FIXEXT2: u8 = 0xd5;
    pub const FIXEXT4: u8 = 0xd6;
    pub const FIXEXT8: u8 = 0xd7;
    pub const FIXEXT16: u8 = 0xd8;
    pub const STR8: u8 = 0xd9;
    pub const STR16: u8 = 0xda;
    pub const STR32: u8 = 0xdb;
    pub const ARRAY16: u8 = 0xdc;
    pub const ARRAY32: u8 = 0xdd;
    pub const MAP16: u8 = 0xde;
    pub const MAP32: u8 = 0xdf;
    pub const NEGATIVE_FIXINT_MIN: u8 = 0xe0;
}

/// Element kind tags written into the typed buffer sub-header.
///
/// Signed kinds mirror their unsigned width as `255 - n`.
pub mod element_tags {
    pub const U8: u8 = 1;
    pub const I8: u8 = 255 - 1;
    pub const U16: u8 = 2;
    pub const I16: u8 = 255 - 2;
    pub const U32: u8 = 3;
    pub const I32: u8 = 255 - 3;
    pub const U64: u8 = 4;
    pub const I64: u8 = 255 - 4;
    pub const F32: u8 = 9;
    pub const F64: u8 = 10;
}

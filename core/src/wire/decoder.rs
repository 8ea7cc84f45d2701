//! wire/decoder.rs
//! Value decoder over a fully materialized input buffer.
//!
//! Extension payloads are handed to the registry as slices of the input,
//! so a typed buffer decoded here still points into the caller's bytes.

use byteorder::{BigEndian, ByteOrder};
use bytes::Bytes;

use crate::constants::tags;
use crate::framing::parse_ext_header;
use crate::registry::ExtensionCodec;
use crate::types::DecodeError;
use crate::value::Value;

pub struct Decoder<'a, C = ()> {
    codec: &'a ExtensionCodec<C>,
    context: &'a C,
    input: Bytes,
    pos: usize,
}

impl<'a, C: 'static> Decoder<'a, C> {
    pub fn new(codec: &'a ExtensionCodec<C>, context: &'a C, input: impl Into<Bytes>) -> Self {
        Self {
            codec,
            context,
            input: input.into(),
            pos: 0,
        }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.input.len() - self.pos
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining() == 0
    }

    /// Decode the value at the current position.
    pub fn decode_next(&mut self) -> Result<Value, DecodeError> {
        let tag = self.take(1)?[0];

        let value = match tag {
            0x00..=tags::POSITIVE_FIXINT_MAX => Value::Int(tag as i64),
            tags::NEGATIVE_FIXINT_MIN..=0xff => Value::Int(tag as i8 as i64),
            tags::FIXSTR_MIN..=tags::FIXSTR_MAX => self.read_str((tag & 0x1f) as usize)?,
            tags::NIL => Value::Nil,
            tags::FALSE => Value::Bool(false),
            tags::TRUE => Value::Bool(true),
            tags::FLOAT32 => Value::F32(BigEndian::read_f32(&self.take(4)?)),
            tags::FLOAT64 => Value::F64(BigEndian::read_f64(&self.take(8)?)),
            tags::UINT8 => Value::Int(self.take(1)?[0] as i64),
            tags::UINT16 => Value::Int(BigEndian::read_u16(&self.take(2)?) as i64),
            tags::UINT32 => Value::Int(BigEndian::read_u32(&self.take(4)?) as i64),
            tags::UINT64 => {
                let v = BigEndian::read_u64(&self.take(8)?);
                i64::try_from(v).map_or(Value::UInt(v), Value::Int)
            }
            tags::INT8 => Value::Int(self.take(1)?[0] as i8 as i64),
            tags::INT16 => Value::Int(BigEndian::read_i16(&self.take(2)?) as i64),
            tags::INT32 => Value::Int(BigEndian::read_i32(&self.take(4)?) as i64),
            tags::INT64 => Value::Int(BigEndian::read_i64(&self.take(8)?)),
            tags::STR8 | tags::STR16 | tags::STR32 => {
                let len = self.read_len(tag - tags::STR8)?;
                self.read_str(len)?
            }
            tags::BIN8 | tags::BIN16 | tags::BIN32 => {
                let len = self.read_len(tag - tags::BIN8)?;
                Value::Bin(self.take(len)?)
            }
            tags::EXT8 | tags::EXT16 | tags::EXT32 | tags::FIXEXT1..=tags::FIXEXT16 => {
                self.pos -= 1;
                self.read_ext()?
            }
            _ => return Err(DecodeError::UnsupportedFormat { tag }),
        };

        Ok(value)
    }

    fn read_ext(&mut self) -> Result<Value, DecodeError> {
        let header = parse_ext_header(&self.input[self.pos..])?;
        self.pos += header.header_len();
        let data = self.take(header.data_len as usize)?;
        self.codec.decode(data, header.type_code, self.context)
    }

    fn read_str(&mut self, len: usize) -> Result<Value, DecodeError> {
        let bytes = self.take(len)?;
        Ok(Value::Str(std::str::from_utf8(&bytes)?.to_owned()))
    }

    /// Length field of width 1, 2 or 4 for `width_class` 0, 1 or 2.
    fn read_len(&mut self, width_class: u8) -> Result<usize, DecodeError> {
        let len = match width_class {
            0 => self.take(1)?[0] as usize,
            1 => BigEndian::read_u16(&self.take(2)?) as usize,
            _ => BigEndian::read_u32(&self.take(4)?) as usize,
        };
        Ok(len)
    }

    /// Next `n` bytes as a zero-copy slice of the input.
    fn take(&mut self, n: usize) -> Result<Bytes, DecodeError> {
        if self.remaining() < n {
            return Err(DecodeError::Truncated { need: n, have: self.remaining() });
        }
        let out = self.input.slice(self.pos..self.pos + n);
        self.pos += n;
        Ok(out)
    }
}

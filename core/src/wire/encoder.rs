//! wire/encoder.rs
//! Value encoder: native scalar formats plus extension dispatch.

use log::trace;

use crate::constants::tags;
use crate::registry::ExtensionCodec;
use crate::types::EncodeError;
use crate::value::Value;
use crate::wire::options::{DispatchOrder, EncoderOptions};
use crate::writer::ByteWriter;

/// Appends encoded values to an owned buffer.
pub struct Encoder<'a, C = ()> {
    codec: &'a ExtensionCodec<C>,
    context: &'a C,
    options: EncoderOptions,
    buf: Vec<u8>,
}

impl<'a, C: 'static> Encoder<'a, C> {
    pub fn new(codec: &'a ExtensionCodec<C>, context: &'a C) -> Self {
        Self::with_options(codec, context, EncoderOptions::default())
    }

    pub fn with_options(codec: &'a ExtensionCodec<C>, context: &'a C, options: EncoderOptions) -> Self {
        Self {
            codec,
            context,
            buf: Vec::with_capacity(options.initial_buffer_size),
            options,
        }
    }

    /// Bytes written so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn finish(self) -> Vec<u8> {
        self.buf
    }

    /// Append one value.
    pub fn encode(&mut self, value: &Value) -> Result<(), EncodeError> {
        self.encode_value(value, 0)
    }

    fn encode_value(&mut self, value: &Value, depth: usize) -> Result<(), EncodeError> {
        match value {
            Value::Nil => self.buf.write_u8(tags::NIL),
            Value::Bool(false) => self.buf.write_u8(tags::FALSE),
            Value::Bool(true) => self.buf.write_u8(tags::TRUE),
            Value::Int(v) => self.encode_int(*v),
            Value::UInt(v) => self.encode_uint(*v),
            Value::F32(v) => {
                self.buf.write_u8(tags::FLOAT32);
                self.buf.write_bytes(&v.to_be_bytes());
            }
            Value::F64(v) => {
                self.buf.write_u8(tags::FLOAT64);
                self.buf.write_bytes(&v.to_be_bytes());
            }
            Value::Str(s) => self.encode_str(s)?,
            Value::Bin(b) => self.encode_bin(b)?,
            _ => self.encode_extension(value, depth)?,
        }
        Ok(())
    }

    fn encode_extension(&mut self, value: &Value, depth: usize) -> Result<(), EncodeError> {
        let written = match self.options.dispatch_order {
            DispatchOrder::PluginFirst => self.try_plugin(value, depth) || self.try_simple(value)?,
            DispatchOrder::SimpleFirst => self.try_simple(value)? || self.try_plugin(value, depth),
        };

        if written {
            Ok(())
        } else {
            Err(EncodeError::Unsupported { kind: value.kind_name() })
        }
    }

    fn try_plugin(&mut self, value: &Value, depth: usize) -> bool {
        self.codec.try_to_encode_plugin(&mut self.buf, depth, value, self.context)
    }

    fn try_simple(&mut self, value: &Value) -> Result<bool, EncodeError> {
        match self.codec.try_to_encode(value, self.context) {
            Some(ext) => {
                trace!("writing extension frame type {} ({} bytes)", ext.type_code(), ext.data().len());
                ext.write(&mut self.buf)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn encode_uint(&mut self, v: u64) {
        if v <= tags::POSITIVE_FIXINT_MAX as u64 {
            self.buf.write_u8(v as u8);
        } else if v <= u8::MAX as u64 {
            self.buf.write_u8(tags::UINT8);
            self.buf.write_u8(v as u8);
        } else if v <= u16::MAX as u64 {
            self.buf.write_u8(tags::UINT16);
            self.buf.write_u16_be(v as u16);
        } else if v <= u32::MAX as u64 {
            self.buf.write_u8(tags::UINT32);
            self.buf.write_u32_be(v as u32);
        } else {
            self.buf.write_u8(tags::UINT64);
            self.buf.write_bytes(&v.to_be_bytes());
        }
    }

    fn encode_int(&mut self, v: i64) {
        if v >= 0 {
            self.encode_uint(v as u64);
        } else if v >= -32 {
            self.buf.write_u8(v as i8 as u8);
        } else if v >= i8::MIN as i64 {
            self.buf.write_u8(tags::INT8);
            self.buf.write_u8(v as i8 as u8);
        } else if v >= i16::MIN as i64 {
            self.buf.write_u8(tags::INT16);
            self.buf.write_bytes(&(v as i16).to_be_bytes());
        } else if v >= i32::MIN as i64 {
            self.buf.write_u8(tags::INT32);
            self.buf.write_bytes(&(v as i32).to_be_bytes());
        } else {
            self.buf.write_u8(tags::INT64);
            self.buf.write_bytes(&v.to_be_bytes());
        }
    }

    fn encode_str(&mut self, s: &str) -> Result<(), EncodeError> {
        let len = s.len();
        if len < 32 {
            self.buf.write_u8(tags::FIXSTR_MIN | len as u8);
        } else {
            self.write_sized_header(len, [tags::STR8, tags::STR16, tags::STR32], "string")?;
        }
        self.buf.write_bytes(s.as_bytes());
        Ok(())
    }

    fn encode_bin(&mut self, b: &[u8]) -> Result<(), EncodeError> {
        self.write_sized_header(b.len(), [tags::BIN8, tags::BIN16, tags::BIN32], "binary")?;
        self.buf.write_bytes(b);
        Ok(())
    }

    /// Tag plus 1/2/4-byte length, narrowest first.
    fn write_sized_header(&mut self, len: usize, tag: [u8; 3], what: &'static str) -> Result<(), EncodeError> {
        if len <= u8::MAX as usize {
            self.buf.write_u8(tag[0]);
            self.buf.write_u8(len as u8);
        } else if len <= u16::MAX as usize {
            self.buf.write_u8(tag[1]);
            self.buf.write_u16_be(len as u16);
        } else if len <= u32::MAX as usize {
            self.buf.write_u8(tag[2]);
            self.buf.write_u32_be(len as u32);
        } else {
            return Err(EncodeError::LengthOverflow { what, len });
        }
        Ok(())
    }
}

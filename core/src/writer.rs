//! writer.rs
//! Append-only byte sink handed to frame emission and raw extension encoders.
//!
//! Notes:
//! - Multi-byte integers are big-endian, as MessagePack requires.
//! - `position()` is the absolute offset of the next byte; raw encoders use it
//!   to place payloads on aligned offsets.
//! - Writes are infallible; growable sinks only.

use byteorder::{BigEndian, ByteOrder};
use bytes::{BufMut, BytesMut};

/// Output primitives a raw/plugin encoder may call.
pub trait ByteWriter {
    /// Absolute offset of the next byte to be written.
    fn position(&self) -> usize;

    fn write_u8(&mut self, value: u8);

    fn write_u16_be(&mut self, value: u16);

    fn write_u32_be(&mut self, value: u32);

    fn write_bytes(&mut self, bytes: &[u8]);

    /// Append `count` zero bytes.
    fn write_zeros(&mut self, count: usize) {
        for _ in 0..count {
            self.write_u8(0);
        }
    }
}

impl ByteWriter for Vec<u8> {
    #[inline]
    fn position(&self) -> usize {
        self.len()
    }

    #[inline]
    fn write_u8(&mut self, value: u8) {
        self.push(value);
    }

    #[inline]
    fn write_u16_be(&mut self, value: u16) {
        let mut buf = [0u8; 2];
        BigEndian::write_u16(&mut buf, value);
        self.extend_from_slice(&buf);
    }

    #[inline]
    fn write_u32_be(&mut self, value: u32) {
        let mut buf = [0u8; 4];
        BigEndian::write_u32(&mut buf, value);
        self.extend_from_slice(&buf);
    }

    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }

    fn write_zeros(&mut self, count: usize) {
        self.resize(self.len() + count, 0);
    }
}

impl ByteWriter for BytesMut {
    #[inline]
    fn position(&self) -> usize {
        self.len()
    }

    #[inline]
    fn write_u8(&mut self, value: u8) {
        self.put_u8(value);
    }

    #[inline]
    fn write_u16_be(&mut self, value: u16) {
        self.put_u16(value);
    }

    #[inline]
    fn write_u32_be(&mut self, value: u32) {
        self.put_u32(value);
    }

    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) {
        self.put_slice(bytes);
    }

    fn write_zeros(&mut self, count: usize) {
        self.put_bytes(0, count);
    }
}

//! timestamp.rs
//! Built-in MessagePack timestamp extension (type -1).
//!
//! Wire forms, chosen by value:
//! - 32-bit: seconds as u32, no nanoseconds.
//! - 64-bit: nanoseconds (30 bits) << 34 | seconds (34 bits).
//! - 96-bit: nanoseconds as u32, then seconds as i64.

use byteorder::{BigEndian, ByteOrder};
use bytes::Bytes;
use chrono::{DateTime, Utc};

use crate::constants::TIMESTAMP_TYPE;
use crate::types::DecodeError;
use crate::value::Value;

const NANOS_PER_SECOND: u32 = 1_000_000_000;
const SECONDS_34_BIT_MAX: i64 = (1 << 34) - 1;

/// Seconds and nanoseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp {
    seconds: i64,
    /// Always below one second.
    nanoseconds: u32,
}

impl Timestamp {
    /// `None` when `nanoseconds` is one second or more.
    pub fn new(seconds: i64, nanoseconds: u32) -> Option<Self> {
        (nanoseconds < NANOS_PER_SECOND).then_some(Self { seconds, nanoseconds })
    }

    #[inline]
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    #[inline]
    pub fn nanoseconds(&self) -> u32 {
        self.nanoseconds
    }

    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.seconds, self.nanoseconds)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self {
            seconds: dt.timestamp(),
            // leap seconds report up to 1_999_999_999
            nanoseconds: dt.timestamp_subsec_nanos().min(NANOS_PER_SECOND - 1),
        }
    }
}

/// Encode in the smallest of the three wire forms.
pub fn encode_timestamp(ts: &Timestamp) -> Vec<u8> {
    if (0..=SECONDS_34_BIT_MAX).contains(&ts.seconds) {
        if ts.nanoseconds == 0 && ts.seconds <= u32::MAX as i64 {
            let mut out = vec![0u8; 4];
            BigEndian::write_u32(&mut out, ts.seconds as u32);
            out
        } else {
            let packed = ((ts.nanoseconds as u64) << 34) | ts.seconds as u64;
            let mut out = vec![0u8; 8];
            BigEndian::write_u64(&mut out, packed);
            out
        }
    } else {
        let mut out = vec![0u8; 12];
        BigEndian::write_u32(&mut out[0..4], ts.nanoseconds);
        BigEndian::write_i64(&mut out[4..12], ts.seconds);
        out
    }
}

pub fn decode_timestamp(data: &[u8]) -> Result<Timestamp, DecodeError> {
    let (seconds, nanoseconds) = match data.len() {
        4 => (BigEndian::read_u32(data) as i64, 0),
        8 => {
            let packed = BigEndian::read_u64(data);
            ((packed & SECONDS_34_BIT_MAX as u64) as i64, (packed >> 34) as u32)
        }
        12 => (BigEndian::read_i64(&data[4..12]), BigEndian::read_u32(&data[0..4])),
        n => {
            return Err(DecodeError::MalformedPayload {
                type_code: TIMESTAMP_TYPE,
                reason: format!("timestamp payload must be 4, 8 or 12 bytes, got {n}"),
            })
        }
    };

    Timestamp::new(seconds, nanoseconds).ok_or_else(|| DecodeError::MalformedPayload {
        type_code: TIMESTAMP_TYPE,
        reason: format!("nanoseconds out of range: {nanoseconds}"),
    })
}

pub(crate) fn encode_extension<C>(value: &Value, _context: &C) -> Option<Vec<u8>> {
    match value {
        Value::Timestamp(ts) if ts.nanoseconds < NANOS_PER_SECOND => Some(encode_timestamp(ts)),
        _ => None,
    }
}

pub(crate) fn decode_extension<C>(
    data: Bytes,
    _type_code: i8,
    _context: &C,
) -> Result<Value, DecodeError> {
    decode_timestamp(&data).map(Value::Timestamp)
}

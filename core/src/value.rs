//! value.rs
//! Application value model seen by encoders and produced by decoders.
//!
//! Scalars map onto native MessagePack formats. Everything else reaches the
//! wire only through the extension registry.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use bytes::Bytes;

use crate::ext_data::ExtData;
use crate::timestamp::Timestamp;
use crate::typed_buffer::{NumericBuffer, NumericView};

#[derive(Debug, Clone)]
pub enum Value {
    Nil,
    Bool(bool),
    Int(i64),
    UInt(u64),
    F32(f32),
    F64(f64),
    Str(String),
    Bin(Bytes),
    /// Unresolved extension; re-encodes to the frame it came from.
    Ext(ExtData),
    Timestamp(Timestamp),
    TypedBuffer(NumericBuffer),
    /// Application-defined type, reached by custom encoders through downcast.
    Object(Object),
}

impl Value {
    /// Short name used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::UInt(_) => "uint",
            Value::F32(_) => "f32",
            Value::F64(_) => "f64",
            Value::Str(_) => "str",
            Value::Bin(_) => "bin",
            Value::Ext(_) => "ext",
            Value::Timestamp(_) => "timestamp",
            Value::TypedBuffer(_) => "typed_buffer",
            Value::Object(_) => "object",
        }
    }

    /// Capability check for numeric buffers.
    pub fn as_numeric_view(&self) -> Option<&dyn NumericView> {
        match self {
            Value::TypedBuffer(buf) => Some(buf),
            _ => None,
        }
    }

    pub fn as_ext(&self) -> Option<&ExtData> {
        match self {
            Value::Ext(ext) => Some(ext),
            _ => None,
        }
    }

    /// Downcast an `Object` payload.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Value::Object(obj) => obj.downcast_ref(),
            _ => None,
        }
    }

    pub fn object<T: Any + Send + Sync>(value: T) -> Self {
        Value::Object(Object::new(value))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        use Value::*;
        match (self, other) {
            (Nil, Nil) => true,
            (Bool(a), Bool(b)) => a == b,
            (Int(a), Int(b)) => a == b,
            (UInt(a), UInt(b)) => a == b,
            (F32(a), F32(b)) => a == b,
            (F64(a), F64(b)) => a == b,
            (Str(a), Str(b)) => a == b,
            (Bin(a), Bin(b)) => a == b,
            (Ext(a), Ext(b)) => a == b,
            (Timestamp(a), Timestamp(b)) => a == b,
            (TypedBuffer(a), TypedBuffer(b)) => a == b,
            (Object(a), Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl From<ExtData> for Value {
    fn from(ext: ExtData) -> Self {
        Value::Ext(ext)
    }
}

impl From<Timestamp> for Value {
    fn from(ts: Timestamp) -> Self {
        Value::Timestamp(ts)
    }
}

impl From<NumericBuffer> for Value {
    fn from(buf: NumericBuffer) -> Self {
        Value::TypedBuffer(buf)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

/// Shared handle to an application value of any type.
///
/// Equality is identity: two `Object`s are equal only if they share the
/// same allocation.
#[derive(Clone)]
pub struct Object(Arc<dyn Any + Send + Sync>);

impl Object {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    pub fn is<T: Any>(&self) -> bool {
        self.0.is::<T>()
    }

    pub fn ptr_eq(&self, other: &Object) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Object(..)")
    }
}

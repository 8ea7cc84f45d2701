//! typed_buffer/types.rs
//! Element kinds, the numeric-view capability and the shared buffer type.

use std::fmt;

use bytemuck::Pod;
use bytes::Bytes;
use num_enum::TryFromPrimitive;
use thiserror::Error;

use crate::constants::element_tags;
use crate::utils::enum_name_or_hex;

/// Closed set of element types a typed buffer can carry.
///
/// The discriminant is the wire tag; `ElementKind::try_from(u8)` is the
/// inverse lookup.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum ElementKind {
    U8  = element_tags::U8,
    I8  = element_tags::I8,
    U16 = element_tags::U16,
    I16 = element_tags::I16,
    U32 = element_tags::U32,
    I32 = element_tags::I32,
    U64 = element_tags::U64,
    I64 = element_tags::I64,
    F32 = element_tags::F32,
    F64 = element_tags::F64,
}

impl ElementKind {
    pub const ALL: [ElementKind; 10] = [
        ElementKind::U8,
        ElementKind::I8,
        ElementKind::U16,
        ElementKind::I16,
        ElementKind::U32,
        ElementKind::I32,
        ElementKind::U64,
        ElementKind::I64,
        ElementKind::F32,
        ElementKind::F64,
    ];

    /// Element width in bytes; also the required alignment.
    pub const fn size(self) -> usize {
        match self {
            ElementKind::U8 | ElementKind::I8 => 1,
            ElementKind::U16 | ElementKind::I16 => 2,
            ElementKind::U32 | ElementKind::I32 | ElementKind::F32 => 4,
            ElementKind::U64 | ElementKind::I64 | ElementKind::F64 => 8,
        }
    }

    #[inline]
    pub const fn tag(self) -> u8 {
        self as u8
    }
}

/// Primitive that can live inside a typed buffer.
pub trait Element: Pod {
    const KIND: ElementKind;
}

macro_rules! impl_element {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(impl Element for $ty {
            const KIND: ElementKind = ElementKind::$kind;
        })*
    };
}

impl_element! {
    u8 => U8,
    i8 => I8,
    u16 => U16,
    i16 => I16,
    u32 => U32,
    i32 => I32,
    u64 => U64,
    i64 => I64,
    f32 => F32,
    f64 => F64,
}

/// Capability set the typed buffer encoder needs from a value.
pub trait NumericView {
    fn element_kind(&self) -> ElementKind;

    /// Elements as bytes, native byte order.
    fn raw_bytes(&self) -> &[u8];

    fn element_size(&self) -> usize {
        self.element_kind().size()
    }
}

impl<T: Element> NumericView for [T] {
    fn element_kind(&self) -> ElementKind {
        T::KIND
    }

    fn raw_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self)
    }
}

impl<T: Element> NumericView for Vec<T> {
    fn element_kind(&self) -> ElementKind {
        T::KIND
    }

    fn raw_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.as_slice())
    }
}

/// Buffer of numbers of a single kind, backed by shared bytes.
///
/// A decoded buffer points into the decoder's input; no element is copied
/// until `to_vec` is called.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NumericBuffer {
    kind: ElementKind,
    bytes: Bytes,
}

impl NumericBuffer {
    /// Copy a slice of elements into a new buffer.
    pub fn from_slice<T: Element>(values: &[T]) -> Self {
        Self {
            kind: T::KIND,
            bytes: Bytes::copy_from_slice(bytemuck::cast_slice(values)),
        }
    }

    /// Copy any numeric view into a new buffer.
    pub fn from_view(view: &dyn NumericView) -> Self {
        Self {
            kind: view.element_kind(),
            bytes: Bytes::copy_from_slice(view.raw_bytes()),
        }
    }

    /// Wrap existing bytes; the length must be a whole number of elements.
    pub fn from_bytes(kind: ElementKind, bytes: Bytes) -> Result<Self, BufferError> {
        if bytes.len() % kind.size() != 0 {
            return Err(BufferError::RaggedBody {
                len: bytes.len(),
                element_size: kind.size(),
            });
        }
        Ok(Self { kind, bytes })
    }

    #[inline]
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len() / self.kind.size()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    pub fn as_bytes(&self) -> &Bytes {
        &self.bytes
    }

    /// Zero-copy typed view.
    ///
    /// `None` when `T` is not this buffer's kind or the backing bytes do not
    /// sit on a `T`-aligned address.
    pub fn as_slice<T: Element>(&self) -> Option<&[T]> {
        if T::KIND != self.kind {
            return None;
        }
        bytemuck::try_cast_slice(&self.bytes[..]).ok()
    }

    /// Copy out the elements, whatever the alignment of the backing bytes.
    pub fn to_vec<T: Element>(&self) -> Result<Vec<T>, BufferError> {
        if T::KIND != self.kind {
            return Err(BufferError::KindMismatch {
                expected: T::KIND.tag(),
                actual: self.kind.tag(),
            });
        }
        if let Some(slice) = self.as_slice::<T>() {
            return Ok(slice.to_vec());
        }
        Ok(self
            .bytes
            .chunks_exact(self.kind.size())
            .map(bytemuck::pod_read_unaligned::<T>)
            .collect())
    }
}

impl NumericView for NumericBuffer {
    fn element_kind(&self) -> ElementKind {
        self.kind
    }

    fn raw_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for NumericBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumericBuffer")
            .field("kind", &self.kind)
            .field("len", &self.len())
            .finish()
    }
}

fn kind_name(raw: &u8) -> String {
    enum_name_or_hex::<ElementKind>(*raw)
}

#[derive(Debug, Error)]
pub enum BufferError {
    #[error("typed buffer payload too short: need {need} bytes, have {have}")]
    PayloadTooShort { need: usize, have: usize },

    #[error("unknown element kind: {}", kind_name(.0))]
    UnknownElementKind(u8),

    #[error("padding of {pad} bytes runs past payload of {len} bytes")]
    PaddingOverflow { pad: usize, len: usize },

    #[error("body of {len} bytes is not a multiple of element size {element_size}")]
    RaggedBody { len: usize, element_size: usize },

    #[error("element kind mismatch: expected {}, buffer holds {}", kind_name(.expected), kind_name(.actual))]
    KindMismatch { expected: u8, actual: u8 },
}

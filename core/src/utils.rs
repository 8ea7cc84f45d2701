use std::fmt;
use num_enum::TryFromPrimitive;

/// Render a raw discriminant as its variant name, or as hex when unknown.
pub fn enum_name_or_hex<T>(raw: T::Primitive) -> String
where
    T: TryFromPrimitive + fmt::Debug,
    T::Primitive: fmt::LowerHex,
{
    match T::try_from_primitive(raw) {
        Ok(variant) => format!("{:?}", variant),
        Err(_) => format!("0x{:x}", raw),
    }
}

/// Zero bytes to insert at `offset` so the next byte sits on a multiple of `align`.
///
/// Always in `0..align`.
#[inline]
pub const fn alignment_padding(offset: usize, align: usize) -> usize {
    (align - offset % align) % align
}

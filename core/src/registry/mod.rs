//! registry/mod.rs
//! Extension registry: registration of simple and raw extensions, encode
//! dispatch, and decode dispatch with capsule fallback.
//!
//! Notes:
//! - Type codes are `i8`. Non-negative codes are custom extensions; negative
//!   codes are reserved for built-ins and stored at `-1 - code`.
//! - Raw (plugin) encoders exist only in the custom namespace.
//! - A raw and a simple encoder at the same code are both stored, but only one
//!   is ever reached first; registration logs a warning.

pub mod types;
pub mod slots;
pub mod codec;

pub use types::*;
pub use codec::*;

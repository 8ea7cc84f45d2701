//! typed_buffer/mod.rs
//! Aligned numeric buffer extension, carried through the raw encoder path.

pub mod types;
pub mod plugin;

pub use types::*;
pub use plugin::*;

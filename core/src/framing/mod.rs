//! framing/mod.rs
//! Extension frame header emission and parsing.
//!
//! Notes:
//! - A frame is `tag | length? | type code | payload`; the tag picks fixext,
//!   ext8, ext16 or ext32 by payload length.
//! - Encoding always picks the narrowest variant, so decode-then-encode of a
//!   canonical frame reproduces it byte for byte.
//! - Raw encoders may instead pin ext32 to know their payload offset up front.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;

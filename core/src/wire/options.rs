//! wire/options.rs
//! Encoder configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_INITIAL_BUFFER_SIZE;

/// Which extension path the encoder offers a value to first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchOrder {
    /// Raw encoders, then simple encoders.
    #[default]
    PluginFirst,
    /// Simple encoders, then raw encoders.
    SimpleFirst,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderOptions {
    pub dispatch_order: DispatchOrder,
    /// Initial output capacity in bytes.
    pub initial_buffer_size: usize,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            dispatch_order: DispatchOrder::PluginFirst,
            initial_buffer_size: DEFAULT_INITIAL_BUFFER_SIZE,
        }
    }
}

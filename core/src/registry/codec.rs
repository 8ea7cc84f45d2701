//! registry/codec.rs
//! Extension registration and dispatch.
//!
//! Notes:
//! - Five independent tables: built-in encode/decode (negative codes),
//!   custom encode/decode (non-negative codes), raw encode (non-negative).
//! - Registration takes `&mut self` and dispatch takes `&self`, so a codec
//!   shared across threads is necessarily fully configured.
//! - Scans run in ascending slot order; the first acceptance wins.

use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use log::{debug, trace, warn};
use once_cell::sync::Lazy;

use crate::constants::TIMESTAMP_TYPE;
use crate::ext_data::ExtData;
use crate::registry::slots::{builtin_index, builtin_type_code, SlotTable};
use crate::registry::types::{ConfigError, DecodeFn, EncodeFn, ExtensionPlugin, RawEncodeFn};
use crate::timestamp;
use crate::types::DecodeError;
use crate::value::Value;
use crate::writer::ByteWriter;

static DEFAULT_CODEC: Lazy<ExtensionCodec> = Lazy::new(ExtensionCodec::new);

pub struct ExtensionCodec<C = ()> {
    builtin_encoders: SlotTable<EncodeFn<C>>,
    builtin_decoders: SlotTable<DecodeFn<C>>,
    encoders: SlotTable<EncodeFn<C>>,
    decoders: SlotTable<DecodeFn<C>>,
    raw_encoders: SlotTable<RawEncodeFn<C>>,
}

impl ExtensionCodec<()> {
    /// Shared codec holding only the built-in timestamp extension.
    pub fn default_codec() -> &'static ExtensionCodec<()> {
        &DEFAULT_CODEC
    }
}

impl<C: 'static> ExtensionCodec<C> {
    /// Empty registry except for the built-in timestamp extension.
    pub fn new() -> Self {
        let mut codec = Self {
            builtin_encoders: SlotTable::new(),
            builtin_decoders: SlotTable::new(),
            encoders: SlotTable::new(),
            decoders: SlotTable::new(),
            raw_encoders: SlotTable::new(),
        };
        codec.register(
            TIMESTAMP_TYPE,
            timestamp::encode_extension::<C>,
            timestamp::decode_extension::<C>,
        );
        codec
    }

    // -------------------------------------------------------------------------
    // Registration
    // -------------------------------------------------------------------------

    /// Register a simple extension.
    ///
    /// Non-negative codes go to the custom tables, negative codes to the
    /// built-in tables at `-1 - type_code`. A later registration at the same
    /// code replaces the earlier one.
    pub fn register<E, D>(&mut self, type_code: i8, encode: E, decode: D)
    where
        E: Fn(&Value, &C) -> Option<Vec<u8>> + Send + Sync + 'static,
        D: Fn(Bytes, i8, &C) -> Result<Value, DecodeError> + Send + Sync + 'static,
    {
        if type_code >= 0 {
            let index = type_code as usize;
            if self.raw_encoders.contains(index) {
                warn!(
                    "extension type {type_code}: simple encoder shadowed by raw encoder at the same code"
                );
            }
            self.encoders.set(index, Box::new(encode));
            self.decoders.set(index, Box::new(decode));
        } else {
            let index = builtin_index(type_code);
            self.builtin_encoders.set(index, Box::new(encode));
            self.builtin_decoders.set(index, Box::new(decode));
        }
        debug!("registered extension type {type_code}");
    }

    /// Register a raw encoder and its decoder.
    ///
    /// Fails immediately for negative codes; the registry is left untouched.
    pub fn register_plugin<E, D>(&mut self, type_code: i8, encode: E, decode: D) -> Result<(), ConfigError>
    where
        E: Fn(&mut dyn ByteWriter, usize, &Value, &C) -> bool + Send + Sync + 'static,
        D: Fn(Bytes, i8, &C) -> Result<Value, DecodeError> + Send + Sync + 'static,
    {
        if type_code < 0 {
            return Err(ConfigError::ReservedTypeCode { type_code });
        }

        let index = type_code as usize;
        if self.encoders.contains(index) {
            warn!(
                "extension type {type_code}: raw encoder registered over an existing simple encoder"
            );
        }
        self.raw_encoders.set(index, Box::new(encode));
        self.decoders.set(index, Box::new(decode));
        debug!("registered raw extension type {type_code}");
        Ok(())
    }

    /// Register an `ExtensionPlugin` at its declared type code.
    pub fn add_plugin<P>(&mut self, plugin: P) -> Result<(), ConfigError>
    where
        P: ExtensionPlugin<C> + 'static,
    {
        let plugin = Arc::new(plugin);
        let encoder = Arc::clone(&plugin);
        let decoder = Arc::clone(&plugin);

        self.register_plugin(
            plugin.type_code(),
            move |writer: &mut dyn ByteWriter, depth: usize, value: &Value, context: &C| {
                encoder.try_encode(writer, depth, value, context)
            },
            move |data: Bytes, type_code: i8, context: &C| decoder.decode(data, type_code, context),
        )
    }

    // -------------------------------------------------------------------------
    // Dispatch
    // -------------------------------------------------------------------------

    /// Find a simple encoder for `value` and wrap its payload.
    ///
    /// Built-ins are tried before custom extensions. A value that is already
    /// an `ExtData` and matched nothing is passed through unchanged.
    pub fn try_to_encode(&self, value: &Value, context: &C) -> Option<ExtData> {
        for (index, encode) in self.builtin_encoders.iter() {
            if let Some(data) = encode(value, context) {
                let type_code = builtin_type_code(index);
                trace!("built-in extension {type_code} accepted {}", value.kind_name());
                return Some(ExtData::new(type_code, data));
            }
        }

        for (index, encode) in self.encoders.iter() {
            if let Some(data) = encode(value, context) {
                let type_code = index as i8;
                trace!("extension {type_code} accepted {}", value.kind_name());
                return Some(ExtData::new(type_code, data));
            }
        }

        value.as_ext().cloned()
    }

    /// Offer `value` to every raw encoder; `true` once one has written it.
    pub fn try_to_encode_plugin(
        &self,
        writer: &mut dyn ByteWriter,
        depth: usize,
        value: &Value,
        context: &C,
    ) -> bool {
        for (index, encode) in self.raw_encoders.iter() {
            if encode(&mut *writer, depth, value, context) {
                trace!("raw extension {index} wrote {}", value.kind_name());
                return true;
            }
        }
        false
    }

    /// Decode a complete payload.
    ///
    /// Never fails for an unregistered code: the payload comes back as an
    /// `ExtData` capsule instead.
    pub fn decode(&self, data: Bytes, type_code: i8, context: &C) -> Result<Value, DecodeError> {
        match self.decoder_for(type_code) {
            Some(decode) => decode(data, type_code, context),
            None => {
                trace!("no decoder for extension type {type_code}; keeping capsule");
                Ok(Value::Ext(ExtData::new(type_code, data)))
            }
        }
    }

    // -------------------------------------------------------------------------
    // Inspection
    // -------------------------------------------------------------------------

    pub fn has_encoder(&self, type_code: i8) -> bool {
        if type_code < 0 {
            self.builtin_encoders.contains(builtin_index(type_code))
        } else {
            self.encoders.contains(type_code as usize)
        }
    }

    pub fn has_decoder(&self, type_code: i8) -> bool {
        self.decoder_for(type_code).is_some()
    }

    pub fn has_raw_encoder(&self, type_code: i8) -> bool {
        type_code >= 0 && self.raw_encoders.contains(type_code as usize)
    }

    fn decoder_for(&self, type_code: i8) -> Option<&DecodeFn<C>> {
        if type_code < 0 {
            self.builtin_decoders.get(builtin_index(type_code))
        } else {
            self.decoders.get(type_code as usize)
        }
    }
}

impl<C: 'static> Default for ExtensionCodec<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for ExtensionCodec<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let builtin: Vec<i8> = self
            .builtin_decoders
            .occupied()
            .into_iter()
            .map(builtin_type_code)
            .collect();
        f.debug_struct("ExtensionCodec")
            .field("builtin", &builtin)
            .field("custom", &self.decoders.occupied())
            .field("raw", &self.raw_encoders.occupied())
            .finish()
    }
}

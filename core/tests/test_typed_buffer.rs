// Aligned typed buffer extension: round trips for every element kind,
// alignment of the embedded elements, zero-copy decode and malformed
// payload handling.

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use proptest::prelude::*;

    use msgpack_ext_core::constants::{EXT32_HEADER_LEN, TYPED_BUFFER_HEADER_LEN};
    use msgpack_ext_core::prelude::*;
    use msgpack_ext_core::typed_buffer::{decode_typed_buffer, padding_for, BufferError};

    const PLUGIN_CODE: i8 = 1;
    const LENGTHS: [usize; 4] = [0, 1, 5, 1000];

    fn codec() -> ExtensionCodec {
        let mut codec = ExtensionCodec::new();
        codec.add_plugin(TypedBufferPlugin::new(PLUGIN_CODE)).unwrap();
        codec
    }

    /// Encode `prefix` then the buffer, return wire and frame start.
    fn encode_after(codec: &ExtensionCodec, prefix: &str, buf: &NumericBuffer) -> (Vec<u8>, usize) {
        let mut encoder = Encoder::new(codec, &());
        encoder.encode(&Value::Str(prefix.to_owned())).unwrap();
        let frame_start = encoder.position();
        encoder.encode(&Value::TypedBuffer(buf.clone())).unwrap();
        (encoder.finish(), frame_start)
    }

    fn round_trip<T: Element + PartialEq + std::fmt::Debug>(make: impl Fn(usize) -> T) {
        let codec = codec();
        for len in LENGTHS {
            let values: Vec<T> = (0..len).map(&make).collect();
            let original = NumericBuffer::from_slice(&values);

            let wire = encode(&Value::TypedBuffer(original.clone()), &codec, &()).unwrap();
            let decoded = decode(wire, &codec, &()).unwrap();

            let Value::TypedBuffer(buf) = decoded else {
                panic!("expected typed buffer");
            };
            assert_eq!(buf.kind(), T::KIND);
            assert_eq!(buf.kind().size(), std::mem::size_of::<T>());
            assert_eq!(buf.len(), len);
            assert_eq!(buf.to_vec::<T>().unwrap(), values);
        }
    }

// # 1. Round trip per element kind

    #[test]
    fn round_trip_u8() {
        round_trip(|i| i as u8);
    }

    #[test]
    fn round_trip_i8() {
        round_trip(|i| (i as i8).wrapping_mul(-3));
    }

    #[test]
    fn round_trip_u16() {
        round_trip(|i| (i * 61) as u16);
    }

    #[test]
    fn round_trip_i16() {
        round_trip(|i| -(i as i16) * 7);
    }

    #[test]
    fn round_trip_u32() {
        round_trip(|i| (i as u32) * 100_003);
    }

    #[test]
    fn round_trip_i32() {
        round_trip(|i| (i as i32) * -70_001);
    }

    #[test]
    fn round_trip_u64() {
        round_trip(|i| (i as u64) << 40);
    }

    #[test]
    fn round_trip_i64() {
        round_trip(|i| -((i as i64) << 33));
    }

    #[test]
    fn round_trip_f32() {
        round_trip(|i| i as f32 * 0.5 - 3.25);
    }

    #[test]
    fn round_trip_f64() {
        round_trip(|i| i as f64 * 1e-9);
    }

// # 2. Wire layout

    #[test]
    fn float32_buffer_layout_at_offset_zero() {
        let codec = codec();
        let buf = NumericBuffer::from_slice(&[1.0f32, 2.0]);
        let wire = encode(&Value::TypedBuffer(buf), &codec, &()).unwrap();

        // header ends at 8, already 4-aligned: no pad
        assert_eq!(hex::encode(&wire[..8]), "c90000000a010900");
        assert_eq!(&wire[8..12], &1.0f32.to_ne_bytes());
        assert_eq!(&wire[12..16], &2.0f32.to_ne_bytes());
    }

    #[test]
    fn pad_bytes_are_zero_and_counted_in_length() {
        let codec = codec();
        let buf = NumericBuffer::from_slice(&[7u64]);
        // "ab" as fixstr takes 3 bytes; header end lands at 11 -> pad 5
        let (wire, start) = encode_after(&codec, "ab", &buf);
        assert_eq!(start, 3);
        assert_eq!(padding_for(start, 8), 5);

        let frame = &wire[start..];
        assert_eq!(frame[0], 0xc9);
        assert_eq!(u32::from_be_bytes([frame[1], frame[2], frame[3], frame[4]]), 2 + 5 + 8);
        assert_eq!(frame[5] as i8, PLUGIN_CODE);
        assert_eq!(frame[6], ElementKind::U64.tag());
        assert_eq!(frame[7], 5);
        assert_eq!(&frame[8..13], &[0u8; 5]);
        assert_eq!(&frame[13..21], &7u64.to_ne_bytes());
    }

    #[test]
    fn single_byte_elements_never_pad() {
        let codec = codec();
        let buf = NumericBuffer::from_slice(&[1i8, -1]);
        for prefix in ["", "a", "ab", "abc"] {
            let (wire, start) = encode_after(&codec, prefix, &buf);
            assert_eq!(wire[start + EXT32_HEADER_LEN + 1], 0);
        }
    }

    #[test]
    fn kind_tags_are_stable() {
        let tags: Vec<u8> = ElementKind::ALL.iter().map(|k| k.tag()).collect();
        assert_eq!(tags, vec![1, 254, 2, 253, 3, 252, 4, 251, 9, 10]);
        for kind in ElementKind::ALL {
            assert_eq!(ElementKind::try_from(kind.tag()).unwrap(), kind);
        }
    }

// # 3. Zero copy

    #[test]
    fn decoded_buffer_points_into_input() {
        let codec = codec();
        let buf = NumericBuffer::from_slice(&[1u32, 2, 3, 4]);
        let (wire, _) = encode_after(&codec, "xyz", &buf);
        let input = Bytes::from(wire);

        let mut decoder = Decoder::new(&codec, &(), input.clone());
        decoder.decode_next().unwrap();
        let Value::TypedBuffer(decoded) = decoder.decode_next().unwrap() else {
            panic!("expected typed buffer");
        };

        let base = input.as_ptr() as usize;
        let elems = decoded.as_bytes().as_ptr() as usize;
        assert!(elems >= base && elems < base + input.len());
        assert_eq!((elems - base) % 4, 0);

        // zero-copy view exists whenever the input itself is 4-aligned
        if base % 4 == 0 {
            assert_eq!(decoded.as_slice::<u32>(), Some(&[1u32, 2, 3, 4][..]));
        }
    }

    #[test]
    fn wrong_kind_has_no_view_and_no_copy() {
        let buf = NumericBuffer::from_slice(&[1i16, 2]);
        assert!(buf.as_slice::<u16>().is_none());
        assert!(matches!(
            buf.to_vec::<u16>(),
            Err(BufferError::KindMismatch { expected: 2, actual: 253 })
        ));
    }

    #[test]
    fn misaligned_bytes_still_copy_out() {
        let raw = Bytes::from(vec![0u8, 1, 0, 0, 0, 2, 0, 0, 0]);
        // skip one byte so the body sits at an odd offset
        let body = raw.slice(1..);
        let buf = NumericBuffer::from_bytes(ElementKind::U32, body).unwrap();
        let expected = vec![
            u32::from_ne_bytes([1, 0, 0, 0]),
            u32::from_ne_bytes([2, 0, 0, 0]),
        ];
        assert_eq!(buf.to_vec::<u32>().unwrap(), expected);
    }

    #[test]
    fn vectors_expose_the_numeric_capability() {
        let values = vec![0.5f64, -0.25];
        let buf = NumericBuffer::from_view(&values);
        assert_eq!(buf.kind(), ElementKind::F64);
        assert_eq!(buf.to_vec::<f64>().unwrap(), values);
    }

// # 4. Malformed payloads

    #[test]
    fn short_payload_is_fatal() {
        for len in [0usize, 1] {
            let err = decode_typed_buffer(Bytes::from(vec![1u8; len])).unwrap_err();
            assert!(matches!(err, BufferError::PayloadTooShort { need: 2, .. }));
        }
    }

    #[test]
    fn unknown_kind_is_fatal() {
        let err = decode_typed_buffer(Bytes::from_static(&[0x42, 0x00, 0x01])).unwrap_err();
        assert!(matches!(err, BufferError::UnknownElementKind(0x42)));
        assert_eq!(err.to_string(), "unknown element kind: 0x42");
    }

    #[test]
    fn pad_past_end_is_fatal() {
        let err = decode_typed_buffer(Bytes::from_static(&[1, 9, 0, 0])).unwrap_err();
        assert!(matches!(err, BufferError::PaddingOverflow { pad: 9, len: 4 }));
    }

    #[test]
    fn ragged_body_is_fatal() {
        let err = decode_typed_buffer(Bytes::from_static(&[3, 0, 1, 2, 3])).unwrap_err();
        assert!(matches!(err, BufferError::RaggedBody { len: 3, element_size: 4 }));
    }

    #[test]
    fn malformed_payload_surfaces_from_outer_decode() {
        let codec = codec();
        // ext8, len 3, type 1, kind 0x42
        let wire = vec![0xc7, 0x03, PLUGIN_CODE as u8, 0x42, 0x00, 0x00];
        let err = decode(wire, &codec, &()).unwrap_err();
        assert!(matches!(
            err,
            CodecError::Decode(DecodeError::Buffer(BufferError::UnknownElementKind(0x42)))
        ));
    }

    #[test]
    fn unregistered_codec_keeps_typed_buffer_as_capsule() {
        let wire = encode(
            &Value::TypedBuffer(NumericBuffer::from_slice(&[1u16, 2, 3])),
            &codec(),
            &(),
        )
        .unwrap();

        let plain = ExtensionCodec::<()>::new();
        let value = decode(wire.clone(), &plain, &()).unwrap();
        let ext = value.as_ext().unwrap();
        assert_eq!(ext.type_code(), PLUGIN_CODE);

        // the capsule re-encodes canonically and keeps type code and payload
        let again = decode(encode(&value, &plain, &()).unwrap(), &plain, &()).unwrap();
        assert_eq!(again, value);

        // and a codec that knows the plugin still reads the payload
        let known = codec();
        let restored = known.decode(ext.data().clone(), ext.type_code(), &()).unwrap();
        let Value::TypedBuffer(buf) = restored else {
            panic!("expected typed buffer");
        };
        assert_eq!(buf.to_vec::<u16>().unwrap(), vec![1, 2, 3]);
    }

// # 5. Alignment property

    proptest! {
        #[test]
        fn prop_elements_land_on_aligned_offsets(
            prefix_len in 0usize..40,
            kind_index in 0usize..10,
            count in 0usize..16,
        ) {
            let codec = codec();
            let kind = ElementKind::ALL[kind_index];
            let size = kind.size();
            let raw = Bytes::from(vec![0xabu8; count * size]);
            let buf = NumericBuffer::from_bytes(kind, raw).unwrap();

            let prefix = "p".repeat(prefix_len);
            let (wire, start) = encode_after(&codec, &prefix, &buf);

            let header_end = start + EXT32_HEADER_LEN + TYPED_BUFFER_HEADER_LEN;
            let pad = wire[start + EXT32_HEADER_LEN + 1] as usize;
            prop_assert!(pad < size);
            prop_assert_eq!((header_end + pad) % size, 0);
            prop_assert_eq!(pad, padding_for(start, size));
            prop_assert_eq!(wire.len(), header_end + pad + count * size);
        }
    }
}

// Built-in timestamp extension (type -1): wire form selection, exact bytes,
// malformed payloads and chrono conversion.

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use chrono::{DateTime, TimeZone, Utc};
    use proptest::prelude::*;

    use msgpack_ext_core::constants::TIMESTAMP_TYPE;
    use msgpack_ext_core::prelude::*;
    use msgpack_ext_core::timestamp::{decode_timestamp, encode_timestamp};

    fn ts(seconds: i64, nanoseconds: u32) -> Timestamp {
        Timestamp::new(seconds, nanoseconds).unwrap()
    }

// # 1. Form selection

    #[test]
    fn whole_seconds_use_32_bit_form() {
        let payload = encode_timestamp(&ts(1_700_000_000, 0));
        assert_eq!(hex::encode(&payload), "6553f100");
    }

    #[test]
    fn nanoseconds_use_64_bit_form() {
        let payload = encode_timestamp(&ts(1_700_000_000, 500));
        assert_eq!(hex::encode(&payload), "000007d06553f100");
    }

    #[test]
    fn seconds_past_u32_use_64_bit_form() {
        let payload = encode_timestamp(&ts(1 << 32, 0));
        assert_eq!(hex::encode(&payload), "0000000100000000");
    }

    #[test]
    fn negative_seconds_use_96_bit_form() {
        let payload = encode_timestamp(&ts(-1, 7));
        assert_eq!(hex::encode(&payload), "00000007ffffffffffffffff");
    }

    #[test]
    fn seconds_past_34_bits_use_96_bit_form() {
        let payload = encode_timestamp(&ts(1 << 34, 0));
        assert_eq!(hex::encode(&payload), "000000000000000400000000");
    }

// # 2. Through the codec

    #[test]
    fn default_codec_frames_timestamp_as_fixext4() {
        let codec = ExtensionCodec::default_codec();
        let value = Value::Timestamp(ts(1_700_000_000, 0));

        let wire = encode(&value, codec, &()).unwrap();
        assert_eq!(hex::encode(&wire), "d6ff6553f100");
        assert_eq!(decode(wire, codec, &()).unwrap(), value);
    }

    #[test]
    fn each_form_round_trips_through_the_codec() {
        let codec = ExtensionCodec::default_codec();
        for (value, frame_tag) in [
            (ts(0, 0), 0xd6u8),
            (ts(1_700_000_000, 999_999_999), 0xd7),
            (ts(-62_135_596_800, 1), 0xc7),
        ] {
            let wire = encode(&Value::Timestamp(value), codec, &()).unwrap();
            assert_eq!(wire[0], frame_tag);
            assert_eq!(decode(wire, codec, &()).unwrap(), Value::Timestamp(value));
        }
    }

// # 3. Malformed payloads

    #[test]
    fn bad_length_is_malformed() {
        for len in [0usize, 3, 5, 16] {
            let err = decode_timestamp(&vec![0u8; len]).unwrap_err();
            assert!(matches!(
                err,
                DecodeError::MalformedPayload { type_code: TIMESTAMP_TYPE, .. }
            ));
        }
    }

    #[test]
    fn out_of_range_nanoseconds_are_malformed() {
        // 96-bit form with nanoseconds = 1e9
        let mut payload = 1_000_000_000u32.to_be_bytes().to_vec();
        payload.extend_from_slice(&0i64.to_be_bytes());
        let err = decode_timestamp(&payload).unwrap_err();
        assert!(err.to_string().contains("nanoseconds out of range"));
    }

    #[test]
    fn codec_propagates_timestamp_errors() {
        let codec: ExtensionCodec = ExtensionCodec::new();
        let err = codec.decode(Bytes::from_static(&[1, 2, 3]), TIMESTAMP_TYPE, &()).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedPayload { type_code: -1, .. }));
    }

    #[test]
    fn constructor_rejects_full_second_of_nanos() {
        assert!(Timestamp::new(0, 1_000_000_000).is_none());
        assert!(Timestamp::new(5, 1_500_000_000).is_none());
        assert!(Timestamp::new(0, 999_999_999).is_some());
    }

    #[test]
    fn largest_nanoseconds_survive_the_64_bit_form() {
        let codec: ExtensionCodec = ExtensionCodec::new();
        let value = ts(5, 999_999_999);

        let wire = encode(&Value::Timestamp(value), &codec, &()).unwrap();
        assert_eq!(hex::encode(&wire), "d7ffee6b27fc00000005");

        let Value::Timestamp(back) = decode(wire, &codec, &()).unwrap() else {
            panic!("expected timestamp");
        };
        assert_eq!(back.seconds(), 5);
        assert_eq!(back.nanoseconds(), 999_999_999);
    }

    #[test]
    fn packed_nanoseconds_past_one_second_are_rejected() {
        // 30-bit field holds 1_000_000_000, seconds 5
        let codec: ExtensionCodec = ExtensionCodec::new();
        let wire = hex::decode("d7ffee6b280000000005").unwrap();
        let err = decode(wire, &codec, &()).unwrap_err();
        assert!(matches!(
            err,
            CodecError::Decode(DecodeError::MalformedPayload { type_code: TIMESTAMP_TYPE, .. })
        ));
    }

// # 4. chrono conversion

    #[test]
    fn converts_to_and_from_datetime() {
        let dt: DateTime<Utc> = Utc.timestamp_opt(1_700_000_000, 123_456_789).unwrap();
        let value = Timestamp::from(dt);
        assert_eq!(value, ts(1_700_000_000, 123_456_789));
        assert_eq!(value.to_datetime(), Some(dt));
    }

    #[test]
    fn pre_epoch_datetime_round_trips() {
        let dt: DateTime<Utc> = Utc.with_ymd_and_hms(1969, 7, 20, 20, 17, 40).unwrap();
        let value = Timestamp::from(dt);
        assert!(value.seconds() < 0);
        let decoded = decode_timestamp(&encode_timestamp(&value)).unwrap();
        assert_eq!(decoded.to_datetime(), Some(dt));
    }

// # 5. Property: every valid timestamp survives the wire

    proptest! {
        #[test]
        fn prop_timestamp_round_trip(seconds in any::<i64>(), nanoseconds in 0u32..1_000_000_000) {
            let value = ts(seconds, nanoseconds);
            let payload = encode_timestamp(&value);
            prop_assert!(matches!(payload.len(), 4 | 8 | 12));
            prop_assert_eq!(decode_timestamp(&payload).unwrap(), value);
        }
    }
}

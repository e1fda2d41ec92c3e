use leb128_inspect::{
    Converter,
    DecodeError,
    DisplayOption,
    SignedLeb128,
    UnsignedLeb128,
};

/// Decode `$bytes` with `$conv` and assert text and consumed byte count.
macro_rules! decode_and_assert {
    ($conv:expr, $bytes:expr, $opt:expr, $text:expr, $consumed:expr $(,)?) => {{
        let decoded = $conv.decode($bytes, $opt).expect("decode failed");
        assert_eq!(decoded.text, $text);
        assert_eq!(decoded.consumed, $consumed);
    }};
}

#[test]
fn test_decode_unsigned_vectors() {
    let conv = UnsignedLeb128::new();
    decode_and_assert!(conv, &[0x00],             DisplayOption::Decimal,      "0",     1);
    decode_and_assert!(conv, &[0xFF, 0x01],       DisplayOption::Decimal,      "255",   2);
    decode_and_assert!(conv, &[0x80, 0x80, 0x01], DisplayOption::Decimal,      "16384", 3);
    decode_and_assert!(conv, &[0x80, 0x80, 0x01], DisplayOption::HexUpperCase, "4000",  3);
    decode_and_assert!(conv, &[0xAC, 0x02],       DisplayOption::HexLowerCase, "12c",   2);
    decode_and_assert!(conv, &[0xAC, 0x02],       DisplayOption::HexUpperCase, "12C",   2);
    decode_and_assert!(
        conv,
        &[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F],
        DisplayOption::Decimal,
        "9223372036854775807",
        9
    );
}

#[test]
fn test_decode_signed_vectors() {
    let conv = SignedLeb128::new();
    decode_and_assert!(conv, &[0x02],       DisplayOption::Decimal,      "1",   1);
    decode_and_assert!(conv, &[0x01],       DisplayOption::Decimal,      "-1",  1);
    decode_and_assert!(conv, &[0x7F],       DisplayOption::Decimal,      "-64", 1);
    decode_and_assert!(conv, &[0xFE, 0x01], DisplayOption::Decimal,      "127", 2);
    decode_and_assert!(conv, &[0xFE, 0x01], DisplayOption::HexLowerCase, "7f",  2);
    decode_and_assert!(conv, &[0x03],       DisplayOption::HexLowerCase, "fffffffffffffffe", 1);
}

#[test]
fn test_decode_ignores_trailing_bytes() {
    let conv = UnsignedLeb128::new();
    decode_and_assert!(conv, &[0x05, 0xFF, 0xFF, 0xFF], DisplayOption::Decimal, "5", 1);
}

#[test]
fn test_decode_non_minimal_sequences() {
    let conv = UnsignedLeb128::new();
    decode_and_assert!(conv, &[0x85, 0x80, 0x80, 0x00], DisplayOption::Decimal, "5", 4);

    // value exact, not byte exact
    let canonical = conv.encode("5", DisplayOption::Decimal).unwrap();
    assert_eq!(canonical, vec![0x05]);
}

#[test]
fn test_decode_nine_continuation_bytes_is_invalid() {
    let bytes = [0x80u8; 9];
    assert_eq!(
        UnsignedLeb128::new().decode(&bytes, DisplayOption::Decimal),
        Err(DecodeError::InvalidBytes)
    );
    assert_eq!(
        SignedLeb128::new().decode(&bytes, DisplayOption::Decimal),
        Err(DecodeError::InvalidBytes)
    );
}

#[test]
fn test_decode_truncated_buffers() {
    let conv = UnsignedLeb128::new();
    let full = conv.encode("16384", DisplayOption::Decimal).unwrap();
    for len in 0..full.len() {
        assert_eq!(
            conv.decode(&full[..len], DisplayOption::Decimal),
            Err(DecodeError::BytesTooShort),
            "prefix of length {len}"
        );
    }
    let signed = SignedLeb128::new();
    assert_eq!(signed.decode(&[], DisplayOption::Decimal), Err(DecodeError::BytesTooShort));
}

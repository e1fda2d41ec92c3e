use leb128_inspect::{
    Converter,
    ConverterKind,
    DisplayOption,
    EncodeError,
    SignedLeb128,
    UnsignedLeb128,
    ByteOrder,
    registered_converters,
};

#[test]
fn test_encode_unsigned() {
    let conv = UnsignedLeb128::new();
    assert_eq!(conv.encode("0", DisplayOption::Decimal).unwrap(), [0x00]);
    assert_eq!(conv.encode("127", DisplayOption::Decimal).unwrap(), [0x7F]);
    assert_eq!(conv.encode("128", DisplayOption::Decimal).unwrap(), [0x80, 0x01]);
    assert_eq!(conv.encode(" 624485\t", DisplayOption::Decimal).unwrap(), [0xE5, 0x8E, 0x26]);
    assert_eq!(conv.encode("0x98765", DisplayOption::HexLowerCase).unwrap(), [0xE5, 0x8E, 0x26]);
    assert_eq!(
        conv.encode("FFFFFFFFFFFFFFFF", DisplayOption::HexUpperCase).unwrap(),
        [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01]
    );
}

#[test]
fn test_encode_parser_errors() {
    let conv = UnsignedLeb128::new();
    assert_eq!(conv.encode(" 123 ", DisplayOption::Decimal), Ok(vec![0x7B]));
    assert_eq!(conv.encode("12x", DisplayOption::Decimal), Err(EncodeError::InvalidString));
    assert_eq!(conv.encode("", DisplayOption::Decimal), Err(EncodeError::InvalidString));
    assert_eq!(conv.encode("1 2", DisplayOption::Decimal), Err(EncodeError::InvalidString));
    assert_eq!(
        conv.encode("99999999999999999999", DisplayOption::Decimal),
        Err(EncodeError::Overflow)
    );
    assert_eq!(
        conv.encode("10000000000000000", DisplayOption::HexLowerCase),
        Err(EncodeError::Overflow)
    );
    assert_eq!(conv.encode("-5", DisplayOption::Decimal), Err(EncodeError::Underflow));
}

#[test]
fn test_encode_signed() {
    let conv = SignedLeb128::new();
    assert_eq!(conv.encode("1", DisplayOption::Decimal).unwrap(), [0x02]);
    assert_eq!(conv.encode("-1", DisplayOption::Decimal).unwrap(), [0x01]);
    assert_eq!(conv.encode("-64", DisplayOption::Decimal).unwrap(), [0x7F]);
    assert_eq!(conv.encode("-65", DisplayOption::Decimal).unwrap(), [0x81, 0x01]);
    assert_eq!(
        conv.encode("-9223372036854775808", DisplayOption::Decimal).unwrap(),
        [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01]
    );
}

#[test]
fn test_signed_minus_one_matches_all_ones_literal() {
    let conv = SignedLeb128::new();
    let minus_one = conv.encode("-1", DisplayOption::Decimal).unwrap();
    for opt in [DisplayOption::HexUpperCase, DisplayOption::HexLowerCase] {
        assert_eq!(conv.encode("0xFFFFFFFFFFFFFFFF", opt).unwrap(), minus_one);
    }
    assert_eq!(
        conv.encode("8000000000000000", DisplayOption::HexUpperCase).unwrap(),
        conv.encode("-9223372036854775808", DisplayOption::Decimal).unwrap()
    );
}

#[test]
fn test_out_of_range_is_never_produced() {
    let texts = ["", "x", "-1", "99999999999999999999", "-99999999999999999999", "0x"];
    for kind in registered_converters() {
        let conv = kind.create();
        for text in texts {
            for opt in [DisplayOption::Decimal, DisplayOption::HexLowerCase] {
                assert_ne!(conv.encode(text, opt), Err(EncodeError::OutOfRange));
            }
        }
    }
}

#[test]
fn test_change_byte_order_never_mutates() {
    let original: Vec<u8> = (0..=255).collect();
    for kind in [ConverterKind::UnsignedLeb128, ConverterKind::SignedLeb128] {
        let conv = kind.create();
        for target in [ByteOrder::LittleEndian, ByteOrder::BigEndian] {
            let mut bytes = original.clone();
            conv.change_byte_order(&mut bytes, target);
            assert_eq!(bytes, original);
        }
    }
}

//! Unsigned and zig-zag signed LEB128 converters for hex editor data
//! inspectors: bytes -> text and text -> bytes, decimal or hexadecimal.
//!
//! ```
//! use leb128_inspect::{Converter, DisplayOption, UnsignedLeb128};
//!
//! let conv = UnsignedLeb128::new();
//! let decoded = conv.decode(&[0xE5, 0x8E, 0x26], DisplayOption::Decimal).unwrap();
//! assert_eq!((decoded.text.as_str(), decoded.consumed), ("624485", 3));
//! assert_eq!(conv.encode("624485", DisplayOption::Decimal).unwrap(), [0xE5, 0x8E, 0x26]);
//! ```
pub mod utils;
pub mod error;
pub mod converter;
pub use converter::{
    registered_converters,
    AnyConverter,
    ByteOrder,
    ByteOrders,
    Converter,
    ConverterKind,
    Decoded,
    DisplayOption,
    Metadata,
    ParseConverterKindError,
    ParseDisplayOptionError,
    SignedLeb128,
    UnsignedLeb128,
    WidthClassification
};
pub use error::{
    DecodeError,
    EncodeError,
    Error
};
pub use utils::numbers::Integer;

pub mod host;

#[cfg(feature = "python")]
mod python;

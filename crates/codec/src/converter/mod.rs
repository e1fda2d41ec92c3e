//! Data type converters as a hex editor's data inspector sees them: a fixed
//! metadata block plus bytes -> text and text -> bytes conversions.
use core::fmt;
use core::str::FromStr;

use crate::error::{DecodeResult, EncodeResult};
use crate::utils::numbers::Integer;

mod signed;
mod unsigned;

pub use signed::SignedLeb128;
pub use unsigned::UnsignedLeb128;

/// Whether an encoded value occupies a fixed or variable number of bytes.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidthClassification {
    Variable = 0,
    Fixed = 1,
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    LittleEndian = 1 << 0,
    BigEndian = 1 << 1,
}

/// Set of [`ByteOrder`]s a converter can produce.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ByteOrders(u8);

impl ByteOrders {
    pub const LITTLE_ENDIAN: Self = Self(ByteOrder::LittleEndian as u8);

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, order: ByteOrder) -> bool {
        self.0 & order as u8 != 0
    }
}

impl fmt::Debug for ByteOrders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        if self.contains(ByteOrder::LittleEndian) {
            set.entry(&ByteOrder::LittleEndian);
        }
        if self.contains(ByteOrder::BigEndian) {
            set.entry(&ByteOrder::BigEndian);
        }
        set.finish()
    }
}

/// How decoded integers are rendered and which radix encoding parses with.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayOption {
    #[default]
    Decimal = 0,
    HexUpperCase = 1,
    HexLowerCase = 2,
}

impl DisplayOption {
    pub const fn radix(self) -> u32 {
        match self {
            DisplayOption::Decimal => 10,
            DisplayOption::HexUpperCase | DisplayOption::HexLowerCase => 16,
        }
    }

    /// Host option code; anything unknown falls back to decimal.
    pub const fn from_code(code: u8) -> Self {
        match code {
            1 => DisplayOption::HexUpperCase,
            2 => DisplayOption::HexLowerCase,
            _ => DisplayOption::Decimal,
        }
    }

    /// Renders `value` without prefix or padding.
    pub fn format(self, value: Integer) -> String {
        match self {
            DisplayOption::Decimal => format!("{}", value),
            DisplayOption::HexUpperCase => format!("{:X}", value),
            DisplayOption::HexLowerCase => format!("{:x}", value),
        }
    }
}

impl fmt::Display for DisplayOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DisplayOption::Decimal => "dec",
            DisplayOption::HexUpperCase => "HEX",
            DisplayOption::HexLowerCase => "hex",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown display option {0:?}, expected one of dec, hex, HEX")]
pub struct ParseDisplayOptionError(pub String);

impl FromStr for DisplayOption {
    type Err = ParseDisplayOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dec" | "decimal" => Ok(DisplayOption::Decimal),
            "HEX" | "hex-upper" => Ok(DisplayOption::HexUpperCase),
            "hex" | "hex-lower" => Ok(DisplayOption::HexLowerCase),
            other => Err(ParseDisplayOptionError(other.to_string())),
        }
    }
}

/// Fixed descriptive data reported to the host when a converter is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metadata {
    pub name: &'static str,
    pub maximum_size: usize,
    pub width: WidthClassification,
    pub supported_byte_orders: ByteOrders,
}

/// Result of a successful bytes -> text conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub value: Integer,
    pub text: String,
    /// Bytes taken from the front of the input buffer.
    pub consumed: usize,
}

pub trait Converter {
    fn metadata(&self) -> &Metadata;

    fn kind(&self) -> ConverterKind;

    fn name(&self) -> &'static str {
        self.metadata().name
    }

    /// Reads one value from the front of `bytes`.
    fn decode(&self, bytes: &[u8], option: DisplayOption) -> DecodeResult<Decoded>;

    /// Parses `text` (surrounding whitespace allowed) in the radix implied by
    /// `option` and returns its canonical encoding.
    fn encode(&self, text: &str, option: DisplayOption) -> EncodeResult<Vec<u8>>;

    /// Byte order conversion in place. LEB128 is a serial format, so the
    /// converters here leave `bytes` untouched.
    fn change_byte_order(&self, bytes: &mut [u8], target: ByteOrder) {
        let _ = (bytes, target);
    }
}

/// Every converter this crate registers with a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConverterKind {
    UnsignedLeb128,
    SignedLeb128,
}

impl ConverterKind {
    pub const ALL: [ConverterKind; 2] = [ConverterKind::UnsignedLeb128, ConverterKind::SignedLeb128];

    pub fn create(self) -> AnyConverter {
        match self {
            ConverterKind::UnsignedLeb128 => AnyConverter::Unsigned(UnsignedLeb128::new()),
            ConverterKind::SignedLeb128 => AnyConverter::Signed(SignedLeb128::new()),
        }
    }
}

impl fmt::Display for ConverterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConverterKind::UnsignedLeb128 => "unsigned",
            ConverterKind::SignedLeb128 => "signed",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown converter {0:?}, expected unsigned or signed")]
pub struct ParseConverterKindError(pub String);

impl FromStr for ConverterKind {
    type Err = ParseConverterKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unsigned" | "uleb128" => Ok(ConverterKind::UnsignedLeb128),
            "signed" | "sleb128" | "zigzag" => Ok(ConverterKind::SignedLeb128),
            other => Err(ParseConverterKindError(other.to_string())),
        }
    }
}

/// Registration entry point: the converters offered to the host, in the
/// order the host lists them.
pub fn registered_converters() -> [ConverterKind; 2] {
    ConverterKind::ALL
}

/// Closed dispatch over the registered converters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyConverter {
    Unsigned(UnsignedLeb128),
    Signed(SignedLeb128),
}

impl AnyConverter {
    /// Copies the full state of `source` into `self`, converter kind included.
    pub fn assign(&mut self, source: &AnyConverter) {
        self.clone_from(source);
    }

    fn inner(&self) -> &dyn Converter {
        match self {
            AnyConverter::Unsigned(c) => c,
            AnyConverter::Signed(c) => c,
        }
    }
}

impl Converter for AnyConverter {
    fn metadata(&self) -> &Metadata {
        self.inner().metadata()
    }

    fn kind(&self) -> ConverterKind {
        self.inner().kind()
    }

    fn decode(&self, bytes: &[u8], option: DisplayOption) -> DecodeResult<Decoded> {
        self.inner().decode(bytes, option)
    }

    fn encode(&self, text: &str, option: DisplayOption) -> EncodeResult<Vec<u8>> {
        self.inner().encode(text, option)
    }

    fn change_byte_order(&self, bytes: &mut [u8], target: ByteOrder) {
        self.inner().change_byte_order(bytes, target)
    }
}

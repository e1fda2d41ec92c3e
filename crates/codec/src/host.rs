//! Marshaling layer for data inspector hosts.
//!
//! Hosts exchange text as null-terminated UTF-16, pass display options and
//! byte orders as raw codes and expect status codes instead of errors. This
//! module speaks that contract on top of [`AnyConverter`]; wiring it to a
//! particular ABI is left to the embedding.
use log::{debug, trace};

use crate::converter::{
    registered_converters, AnyConverter, ByteOrder, ByteOrders, Converter, ConverterKind,
    DisplayOption, WidthClassification,
};
use crate::error::{BytesToStrErrorCode, StrToBytesErrorCode};

/// Metadata block handed to the host when a converter is initialised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterInfo {
    /// Display name, null-terminated UTF-16.
    pub name: Vec<u16>,
    pub width: WidthClassification,
    pub maximum_size: i32,
    pub supported_byte_orders: ByteOrders,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BytesToStr {
    pub code: BytesToStrErrorCode,
    pub converted_byte_count: i32,
    /// Null-terminated UTF-16, just the terminator on failure.
    pub converted_str: Vec<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrToBytes {
    pub code: StrToBytesErrorCode,
    /// Empty on failure.
    pub converted_bytes: Vec<u8>,
}

/// Encodes `s` as null-terminated UTF-16.
pub fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(core::iter::once(0)).collect()
}

/// Decodes UTF-16 up to the first NUL (or the end of `units`).
pub fn from_wide(units: &[u16]) -> Option<String> {
    let end = units.iter().position(|&u| u == 0).unwrap_or(units.len());
    String::from_utf16(&units[..end]).ok()
}

/// One converter instance owned by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConverter {
    inner: AnyConverter,
}

impl HostConverter {
    /// Creates an instance and the metadata the host records for it.
    pub fn init(kind: ConverterKind) -> (Self, ConverterInfo) {
        let inner = kind.create();
        let meta = inner.metadata();
        let info = ConverterInfo {
            name: to_wide(meta.name),
            width: meta.width,
            maximum_size: meta.maximum_size as i32,
            supported_byte_orders: meta.supported_byte_orders,
        };
        trace!("host: init {}", meta.name);
        (Self { inner }, info)
    }

    pub fn converter(&self) -> &AnyConverter {
        &self.inner
    }

    pub fn assign(&mut self, source: &HostConverter) {
        self.inner.assign(&source.inner);
    }

    /// `target_order` is a raw host code; unknown codes are ignored.
    pub fn change_byte_order(&self, bytes: &mut [u8], target_order: u8) {
        let target = match target_order {
            1 => ByteOrder::LittleEndian,
            2 => ByteOrder::BigEndian,
            other => {
                debug!("host: ignoring unknown byte order code {other}");
                return;
            }
        };
        self.inner.change_byte_order(bytes, target);
    }

    pub fn bytes_to_str(&self, bytes: &[u8], display_option: u8) -> BytesToStr {
        let option = DisplayOption::from_code(display_option);
        match self.inner.decode(bytes, option) {
            Ok(decoded) => BytesToStr {
                code: BytesToStrErrorCode::None,
                converted_byte_count: decoded.consumed as i32,
                converted_str: to_wide(&decoded.text),
            },
            Err(e) => BytesToStr {
                code: e.into(),
                converted_byte_count: 0,
                converted_str: vec![0],
            },
        }
    }

    pub fn str_to_bytes(&self, text: &[u16], display_option: u8) -> StrToBytes {
        let option = DisplayOption::from_code(display_option);
        let Some(text) = from_wide(text) else {
            debug!("host: {} got text that is not UTF-16", self.inner.name());
            return StrToBytes {
                code: StrToBytesErrorCode::InvalidString,
                converted_bytes: Vec::new(),
            };
        };
        let res = self.inner.encode(&text, option);
        StrToBytes {
            code: (&res).into(),
            converted_bytes: res.unwrap_or_default(),
        }
    }
}

/// Registration entry point: one freshly initialised instance per registered
/// converter, in host order.
pub fn data_type_converters() -> Vec<(HostConverter, ConverterInfo)> {
    registered_converters()
        .into_iter()
        .map(HostConverter::init)
        .collect()
}

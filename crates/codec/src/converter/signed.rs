use log::{debug, trace};

use crate::converter::{
    ByteOrders, Converter, ConverterKind, Decoded, DisplayOption, Metadata, WidthClassification,
};
use crate::debug_log;
use crate::error::{DecodeResult, EncodeError, EncodeResult};
use crate::utils::numbers::{parse_i64, parse_u64, Integer};
use crate::utils::varint::{VarInt64, MAX_DECODE_LEN};
use crate::utils::HexBytes;

const METADATA: Metadata = Metadata {
    name: "Signed LEB128",
    maximum_size: MAX_DECODE_LEN,
    width: WidthClassification::Variable,
    supported_byte_orders: ByteOrders::LITTLE_ENDIAN,
};

/// Zig-zag LEB128 converter over `i64`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedLeb128 {
    metadata: Metadata,
}

impl SignedLeb128 {
    pub fn new() -> Self {
        Self { metadata: METADATA }
    }

    pub fn assign(&mut self, source: &Self) {
        self.clone_from(source);
    }

    /// Signed parse first; text above `i64::MAX` is retried as unsigned and
    /// its bit pattern taken as signed, so `FFFFFFFFFFFFFFFF` reads as `-1`.
    fn parse(&self, text: &str, radix: u32) -> EncodeResult<i64> {
        match parse_i64(text, radix) {
            Err(EncodeError::Overflow) => {
                debug!("{}: {:?} overflows i64, reparsing as u64", self.metadata.name, text);
                parse_u64(text, radix).map(|v| v as i64)
            }
            res => res,
        }
    }
}

impl Default for SignedLeb128 {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter for SignedLeb128 {
    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn kind(&self) -> ConverterKind {
        ConverterKind::SignedLeb128
    }

    fn decode(&self, bytes: &[u8], option: DisplayOption) -> DecodeResult<Decoded> {
        trace!("{}: decode {} bytes as {}", self.metadata.name, bytes.len(), option);
        debug_log!("{} <- {:?}", self.metadata.name, HexBytes(bytes));

        let (value, consumed) = VarInt64::decode(bytes).map_err(|e| {
            debug!("{}: rejected {}: {}", self.metadata.name, HexBytes(bytes), e);
            e
        })?;
        let value = Integer::from(value.0);
        Ok(Decoded {
            value,
            text: option.format(value),
            consumed,
        })
    }

    fn encode(&self, text: &str, option: DisplayOption) -> EncodeResult<Vec<u8>> {
        trace!("{}: encode {:?} as {}", self.metadata.name, text, option);

        let value = self.parse(text.trim(), option.radix()).map_err(|e| {
            debug!("{}: rejected {:?}: {}", self.metadata.name, text, e);
            e
        })?;
        let (buf, len) = VarInt64(value).encode();

        debug_log!("{} -> {:?}", self.metadata.name, HexBytes(&buf[..len]));
        Ok(buf[..len].to_vec())
    }
}

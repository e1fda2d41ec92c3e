use log::{debug, trace};

use crate::converter::{
    ByteOrders, Converter, ConverterKind, Decoded, DisplayOption, Metadata, WidthClassification,
};
use crate::debug_log;
use crate::error::{DecodeResult, EncodeResult};
use crate::utils::numbers::{parse_u64, Integer};
use crate::utils::varint::{VarUInt64, MAX_DECODE_LEN};
use crate::utils::HexBytes;

const METADATA: Metadata = Metadata {
    name: "Unsigned LEB128",
    maximum_size: MAX_DECODE_LEN,
    width: WidthClassification::Variable,
    supported_byte_orders: ByteOrders::LITTLE_ENDIAN,
};

/// Unsigned LEB128 converter over `u64`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsignedLeb128 {
    metadata: Metadata,
}

impl UnsignedLeb128 {
    pub fn new() -> Self {
        Self { metadata: METADATA }
    }

    pub fn assign(&mut self, source: &Self) {
        self.clone_from(source);
    }
}

impl Default for UnsignedLeb128 {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter for UnsignedLeb128 {
    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn kind(&self) -> ConverterKind {
        ConverterKind::UnsignedLeb128
    }

    fn decode(&self, bytes: &[u8], option: DisplayOption) -> DecodeResult<Decoded> {
        trace!("{}: decode {} bytes as {}", self.metadata.name, bytes.len(), option);
        debug_log!("{} <- {:?}", self.metadata.name, HexBytes(bytes));

        let (value, consumed) = VarUInt64::decode(bytes).map_err(|e| {
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

        let value = parse_u64(text.trim(), option.radix()).map_err(|e| {
            debug!("{}: rejected {:?}: {}", self.metadata.name, text, e);
            e
        })?;
        let (buf, len) = VarUInt64(value).encode();

        debug_log!("{} -> {:?}", self.metadata.name, HexBytes(&buf[..len]));
        Ok(buf[..len].to_vec())
    }
}

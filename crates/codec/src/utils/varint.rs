//! varint.rs  –  no allocation, no std needed
use crate::error::{DecodeError, DecodeResult};

/// Longest sequence the decoders accept: each byte carries 7 payload bits and
/// the accumulator is 64 bits wide, so a 10th byte is rejected.
pub const MAX_DECODE_LEN: usize = 64 / 7;

/// Longest sequence the encoders emit (`u64::MAX` needs 64 payload bits).
pub const MAX_ENCODE_LEN: usize = 10;

const CONTINUATION_BIT: u8 = 0x80;
const PAYLOAD_MASK: u8 = 0x7F;

/// Zig-zag maps signed integers onto unsigned ones so that values of small
/// magnitude stay short: 0, -1, 1, -2 ... -> 0, 1, 2, 3 ...
#[inline(always)]
pub const fn zigzag_encode(v: i64) -> u64 {
    ((v << 1) ^ (v >> 63)) as u64
}

#[inline(always)]
pub const fn zigzag_decode(v: u64) -> i64 {
    ((v >> 1) as i64) ^ -((v & 1) as i64)
}

/// Unsigned LEB128.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarUInt64(pub u64);

impl VarUInt64 {
    /// Encoded length in bytes, 1 for zero.
    #[inline(always)]
    pub const fn encoded_len(self) -> usize {
        let bits = 64 - (self.0 | 1).leading_zeros() as usize;
        (bits + 6) / 7
    }

    /// Encode into a 10-byte buffer; returns (buffer, length_used).
    #[inline]
    pub fn encode(self) -> ([u8; MAX_ENCODE_LEN], usize) {
        let len = self.encoded_len();
        let mut buf = [0u8; MAX_ENCODE_LEN];
        let mut v = self.0;
        for (i, slot) in buf[..len].iter_mut().enumerate() {
            let byte = (v as u8) & PAYLOAD_MASK;
            v >>= 7;
            *slot = if i + 1 < len { byte | CONTINUATION_BIT } else { byte };
        }
        (buf, len)
    }

    /// Decode ULEB128 from `bytes`, returning the value and bytes consumed.
    ///
    /// Bytes after the terminating one are ignored. Redundant continuation
    /// bytes with zero payload are accepted as long as the whole sequence
    /// fits in [`MAX_DECODE_LEN`] bytes.
    pub fn decode(bytes: &[u8]) -> DecodeResult<(Self, usize)> {
        let mut result = 0u64;
        for (i, &b) in bytes.iter().take(MAX_DECODE_LEN).enumerate() {
            result |= u64::from(b & PAYLOAD_MASK) << (7 * i);
            if (b & CONTINUATION_BIT) == 0 {
                return Ok((VarUInt64(result), i + 1));
            }
        }
        if bytes.len() >= MAX_DECODE_LEN {
            Err(DecodeError::InvalidBytes)
        } else {
            Err(DecodeError::BytesTooShort)
        }
    }
}

impl From<u64> for VarUInt64 {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
impl From<VarUInt64> for u64 {
    fn from(v: VarUInt64) -> Self {
        v.0
    }
}

/// Signed zig-zag LEB128 (not two's complement SLEB128).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarInt64(pub i64);

impl VarInt64 {
    /// Encode into a 10-byte buffer.
    #[inline]
    pub fn encode(self) -> ([u8; MAX_ENCODE_LEN], usize) {
        VarUInt64(zigzag_encode(self.0)).encode()
    }

    /// Decode zig-zag LEB128.
    pub fn decode(bytes: &[u8]) -> DecodeResult<(Self, usize)> {
        let (raw, used) = VarUInt64::decode(bytes)?;
        Ok((VarInt64(zigzag_decode(raw.0)), used))
    }
}

impl From<i64> for VarInt64 {
    fn from(v: i64) -> Self {
        Self(v)
    }
}
impl From<VarInt64> for i64 {
    fn from(v: VarInt64) -> Self {
        v.0
    }
}

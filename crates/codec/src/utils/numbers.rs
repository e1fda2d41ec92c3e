//! Integer values produced by the converters and the text -> integer parser.
use core::fmt::{self, Debug, Display, LowerHex, UpperHex};

use crate::error::{EncodeError, EncodeResult};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum IntPriv {
    PosInt(u64),
    NegInt(i64),
}

/// 64‑bit signed/unsigned wrapper
///
/// Hex formatting of negative values prints the two's complement bit
/// pattern (`-1` -> `ffffffffffffffff`).
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Integer {
    n: IntPriv,
}

impl Integer {
    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        match self.n {
            IntPriv::PosInt(n) => n.try_into().ok(),
            IntPriv::NegInt(n) => Some(n),
        }
    }
    #[inline]
    pub fn as_u64(&self) -> Option<u64> {
        match self.n {
            IntPriv::PosInt(n) => Some(n),
            IntPriv::NegInt(n) => n.try_into().ok(),
        }
    }
}

impl Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.n, f)
    }
}

impl Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.n {
            IntPriv::PosInt(v) => Display::fmt(&v, f),
            IntPriv::NegInt(v) => Display::fmt(&v, f),
        }
    }
}

impl LowerHex for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.n {
            IntPriv::PosInt(v) => LowerHex::fmt(&v, f),
            IntPriv::NegInt(v) => LowerHex::fmt(&v, f),
        }
    }
}

impl UpperHex for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.n {
            IntPriv::PosInt(v) => UpperHex::fmt(&v, f),
            IntPriv::NegInt(v) => UpperHex::fmt(&v, f),
        }
    }
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),* $(,)?) => {$(
        impl From<$ty> for Integer {
            #[inline]
            fn from(n: $ty) -> Self {
                Self { n: IntPriv::PosInt(n as u64) }
            }
        }
    )*};
}

macro_rules! impl_from_signed {
    ($($ty:ty),* $(,)?) => {$(
        impl From<$ty> for Integer {
            #[inline]
            fn from(n: $ty) -> Self {
                if n < 0 {
                    Self { n: IntPriv::NegInt(n as i64) }
                } else {
                    Self { n: IntPriv::PosInt(n as u64) }
                }
            }
        }
    )*};
}

impl_from_unsigned!(u8, u16, u32, u64);
impl_from_signed!(i8, i16, i32, i64);

/// Sign and magnitude of a syntactically valid numeral.
struct Numeral {
    negative: bool,
    magnitude: u64,
    // magnitude did not fit in 64 bits
    wide: bool,
}

/// Validates `text` as `[+-]?(0x)?digits` in `radix` and accumulates its
/// magnitude. Every character is checked even after the magnitude no longer
/// fits, so malformed text always wins over range errors.
fn scan(text: &str, radix: u32) -> EncodeResult<Numeral> {
    if !(2..=36).contains(&radix) {
        return Err(EncodeError::InvalidString);
    }
    match text.chars().next() {
        None => return Err(EncodeError::InvalidString),
        Some(c) if c.is_whitespace() => return Err(EncodeError::InvalidString),
        Some(_) => (),
    }

    let (negative, rest) = if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else {
        (false, text.strip_prefix('+').unwrap_or(text))
    };
    let digits = if radix == 16 {
        rest.strip_prefix("0x")
            .or_else(|| rest.strip_prefix("0X"))
            .unwrap_or(rest)
    } else {
        rest
    };
    if digits.is_empty() {
        return Err(EncodeError::InvalidString);
    }

    let mut magnitude = 0u64;
    let mut wide = false;
    for c in digits.chars() {
        let digit = c.to_digit(radix).ok_or(EncodeError::InvalidString)?;
        if wide {
            continue;
        }
        match magnitude
            .checked_mul(u64::from(radix))
            .and_then(|m| m.checked_add(u64::from(digit)))
        {
            Some(m) => magnitude = m,
            None => wide = true,
        }
    }

    Ok(Numeral { negative, magnitude, wide })
}

/// Parses `text` as a signed 64-bit integer in `radix`.
///
/// `text` must already be trimmed: leading whitespace is rejected as
/// [`EncodeError::InvalidString`], as is any trailing character.
pub fn parse_i64(text: &str, radix: u32) -> EncodeResult<i64> {
    let Numeral { negative, magnitude, wide } = scan(text, radix)?;
    match (negative, wide) {
        (false, true) => Err(EncodeError::Overflow),
        (true, true) => Err(EncodeError::Underflow),
        (false, false) => i64::try_from(magnitude).map_err(|_| EncodeError::Overflow),
        (true, false) => 0i64
            .checked_sub_unsigned(magnitude)
            .ok_or(EncodeError::Underflow),
    }
}

/// Parses `text` as an unsigned 64-bit integer in `radix`.
///
/// Shares the syntax of [`parse_i64`]; any negative value other than `-0` is
/// an [`EncodeError::Underflow`].
pub fn parse_u64(text: &str, radix: u32) -> EncodeResult<u64> {
    let Numeral { negative, magnitude, wide } = scan(text, radix)?;
    match (negative, wide) {
        (false, true) => Err(EncodeError::Overflow),
        (true, true) => Err(EncodeError::Underflow),
        (true, false) if magnitude != 0 => Err(EncodeError::Underflow),
        _ => Ok(magnitude),
    }
}

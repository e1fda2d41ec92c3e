//! Error classifications for both conversion directions.
//!
//! The host reports failures as small status codes (`NONE` meaning success),
//! so every error here maps 1:1 onto one of those codes. Inside the crate the
//! `NONE` case is simply `Ok`.
use thiserror::Error;

use crate::utils::varint::MAX_DECODE_LEN;

/// Failure while turning encoded bytes into text.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("LEB128 sequence does not terminate within {} bytes", MAX_DECODE_LEN)]
    InvalidBytes,
    #[error("byte buffer ended before the terminating LEB128 byte")]
    BytesTooShort,
}

/// Failure while turning text into encoded bytes.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    #[error("not a valid integer literal")]
    InvalidString,
    #[error("integer is below the representable minimum")]
    Underflow,
    #[error("integer is above the representable maximum")]
    Overflow,
    /// Part of the host contract, no parser path produces it.
    #[error("integer is out of range")]
    OutOfRange,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

pub type DecodeResult<T> = core::result::Result<T, DecodeError>;
pub type EncodeResult<T> = core::result::Result<T, EncodeError>;

/// Host status code for bytes -> text conversions.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BytesToStrErrorCode {
    None = 0,
    InvalidBytes = 1,
    BytesTooShort = 2,
}

/// Host status code for text -> bytes conversions.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrToBytesErrorCode {
    None = 0,
    InvalidString = 1,
    Underflow = 2,
    Overflow = 3,
    OutOfRange = 4,
}

impl From<DecodeError> for BytesToStrErrorCode {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::InvalidBytes => BytesToStrErrorCode::InvalidBytes,
            DecodeError::BytesTooShort => BytesToStrErrorCode::BytesTooShort,
        }
    }
}

impl From<EncodeError> for StrToBytesErrorCode {
    fn from(err: EncodeError) -> Self {
        match err {
            EncodeError::InvalidString => StrToBytesErrorCode::InvalidString,
            EncodeError::Underflow => StrToBytesErrorCode::Underflow,
            EncodeError::Overflow => StrToBytesErrorCode::Overflow,
            EncodeError::OutOfRange => StrToBytesErrorCode::OutOfRange,
        }
    }
}

impl<T> From<&DecodeResult<T>> for BytesToStrErrorCode {
    fn from(res: &DecodeResult<T>) -> Self {
        match res {
            Ok(_) => BytesToStrErrorCode::None,
            Err(e) => (*e).into(),
        }
    }
}

impl<T> From<&EncodeResult<T>> for StrToBytesErrorCode {
    fn from(res: &EncodeResult<T>) -> Self {
        match res {
            Ok(_) => StrToBytesErrorCode::None,
            Err(e) => (*e).into(),
        }
    }
}

impl From<BytesToStrErrorCode> for u8 {
    fn from(code: BytesToStrErrorCode) -> Self {
        code as u8
    }
}

impl From<StrToBytesErrorCode> for u8 {
    fn from(code: StrToBytesErrorCode) -> Self {
        code as u8
    }
}

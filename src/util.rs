use std::borrow::Cow;

use crate::{Error, Result};

#[inline(always)]
#[cold]
pub(crate) fn cold_path() {}

pub trait ByteOrder: zerocopy::ByteOrder + Send + Sync + 'static {}

impl<T: zerocopy::ByteOrder + Send + Sync + 'static> ByteOrder for T {}

/// Encodes a string the way it is stored on disk (modified UTF-8).
///
/// Borrows the input unchanged unless it contains NUL or a supplementary
/// character.
#[inline]
pub(crate) fn encode_string(value: &str) -> Cow<'_, [u8]> {
    simd_cesu8::mutf8::encode(value)
}

#[inline]
pub(crate) fn decode_string(bytes: &[u8]) -> Result<String> {
    simd_cesu8::mutf8::decode(bytes)
        .map(Cow::into_owned)
        .map_err(|_| {
            cold_path();
            Error::InvalidString
        })
}

#[inline]
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        cold_path();
        Err(Error::IndexOutOfBounds { index, len })
    }
}

//! The binary NBT codec.
//!
//! Java edition data is big-endian; Bedrock edition data is little-endian.
//! Every function is generic over the [`ByteOrder`](crate::ByteOrder), and
//! [`parse_binary`] / [`encode_binary`] fix it to big-endian.
//!
//! Input and output are uncompressed; gzip or zlib wrapping of files is left
//! to the caller.

use zerocopy::BigEndian;

use crate::{NamedTag, Result};

mod read;
mod size;
mod write;

pub use read::{read_binary, read_tag};
pub(crate) use write::write_named_compound;
pub use write::{write_tag, write_tag_to_writer};

/// Decodes a complete big-endian document.
///
/// # Example
///
/// ```
/// use nbt_edit::{parse_binary, Value};
///
/// // TAG_Compound "" { TAG_Byte "a": 1 }
/// let data = [0x0A, 0x00, 0x00, 0x01, 0x00, 0x01, b'a', 0x01, 0x00];
/// let root = parse_binary(&data).unwrap();
/// let compound = root.value.as_compound().unwrap();
/// assert_eq!(compound.get("a").unwrap(), &Value::Byte(1));
/// ```
#[inline]
pub fn parse_binary(bytes: &[u8]) -> Result<NamedTag> {
    read_binary::<BigEndian>(bytes)
}

/// Encodes a tag as a big-endian document.
#[inline]
pub fn encode_binary(tag: &NamedTag) -> Result<Vec<u8>> {
    write_tag::<BigEndian>(tag)
}

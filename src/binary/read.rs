use std::marker::PhantomData;

use log::trace;
use zerocopy::{FromBytes, byteorder};

use super::size::entry_len;
use crate::{
    ByteArray, ByteOrder, Compound, Error, IntArray, List, LongArray, NamedTag, Result, TagID,
    Value,
    compound::CompoundBuilder,
    util::{cold_path, decode_string},
};

/// Decodes one named tag starting at `offset`.
///
/// Returns the tag and the number of bytes it occupied. An End kind byte
/// yields `Value::End` after consuming exactly one byte.
///
/// ```
/// use nbt_edit::{BigEndian, Value, read_tag};
///
/// // Two tags back to back: TAG_Short "s" = 7, then TAG_End.
/// let data = [0x02, 0x00, 0x01, b's', 0x00, 0x07, 0x00];
/// let (tag, used) = read_tag::<BigEndian>(&data, 0).unwrap();
/// assert_eq!((tag.name.as_str(), tag.value, used), ("s", Value::Short(7), 6));
/// let (end, used) = read_tag::<BigEndian>(&data, 6).unwrap();
/// assert_eq!((end.value, used), (Value::End, 1));
/// ```
pub fn read_tag<O: ByteOrder>(bytes: &[u8], offset: usize) -> Result<(NamedTag, usize)> {
    if offset > bytes.len() {
        cold_path();
        return Err(Error::EndOfFile);
    }
    let mut reader = Reader::<O>::new(bytes, offset);
    let tag = reader.read_named(0)?;
    Ok((tag, reader.pos - offset))
}

/// Decodes a whole buffer holding exactly one named tag.
///
/// Fails with [`Error::TrailingData`] if bytes remain after the tag.
pub fn read_binary<O: ByteOrder>(bytes: &[u8]) -> Result<NamedTag> {
    let (tag, consumed) = read_tag::<O>(bytes, 0)?;
    if consumed != bytes.len() {
        cold_path();
        return Err(Error::TrailingData(bytes.len() - consumed));
    }
    Ok(tag)
}

struct Reader<'a, O: ByteOrder> {
    data: &'a [u8],
    pos: usize,
    _marker: PhantomData<O>,
}

impl<'a, O: ByteOrder> Reader<'a, O> {
    fn new(data: &'a [u8], pos: usize) -> Self {
        Self {
            data,
            pos,
            _marker: PhantomData,
        }
    }

    #[inline]
    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    #[inline]
    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        if len > self.remaining() {
            cold_path();
            return Err(Error::EndOfFile);
        }
        let slice = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    #[inline]
    fn take_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        buf.copy_from_slice(self.take(N)?);
        Ok(buf)
    }

    #[inline]
    fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take_array::<1>()?[0])
    }

    #[inline]
    fn read_u16(&mut self) -> Result<u16> {
        Ok(byteorder::U16::<O>::from_bytes(self.take_array()?).get())
    }

    #[inline]
    fn read_i32(&mut self) -> Result<i32> {
        Ok(byteorder::I32::<O>::from_bytes(self.take_array()?).get())
    }

    /// A signed 4-byte count; negative counts are malformed.
    fn read_len(&mut self) -> Result<usize> {
        let len = self.read_i32()?;
        usize::try_from(len).map_err(|_| {
            cold_path();
            Error::NegativeLength(len)
        })
    }

    fn read_string(&mut self) -> Result<String> {
        let len = self.read_u16()? as usize;
        decode_string(self.take(len)?)
    }

    fn read_named(&mut self, depth: usize) -> Result<NamedTag> {
        let tag_id = TagID::try_from(self.read_u8()?)?;
        if tag_id == TagID::End {
            return Ok(NamedTag::default());
        }
        let name = self.read_string()?;
        trace!(
            "{:indent$}> parsing tag [{tag_id}] [name={name}]",
            "",
            indent = depth * 2
        );
        let value = self.read_payload(tag_id, depth)?;
        trace!("{:indent$}> [{tag_id}] done", "", indent = depth * 2);
        Ok(NamedTag { name, value })
    }

    fn read_payload(&mut self, tag_id: TagID, depth: usize) -> Result<Value> {
        Ok(match tag_id {
            TagID::End => Value::End,
            TagID::Byte => Value::Byte(self.read_u8()? as i8),
            TagID::Short => Value::Short(byteorder::I16::<O>::from_bytes(self.take_array()?).get()),
            TagID::Int => Value::Int(self.read_i32()?),
            TagID::Long => Value::Long(byteorder::I64::<O>::from_bytes(self.take_array()?).get()),
            TagID::Float => Value::Float(byteorder::F32::<O>::from_bytes(self.take_array()?).get()),
            TagID::Double => {
                Value::Double(byteorder::F64::<O>::from_bytes(self.take_array()?).get())
            }
            TagID::ByteArray => Value::ByteArray(self.read_byte_array()?),
            TagID::String => Value::String(self.read_string()?),
            TagID::List => Value::List(self.read_list(depth)?),
            TagID::Compound => Value::Compound(self.read_compound(depth)?),
            TagID::IntArray => Value::IntArray(self.read_int_array()?),
            TagID::LongArray => Value::LongArray(self.read_long_array()?),
        })
    }

    fn read_array_body(&mut self, element_size: usize) -> Result<&'a [u8]> {
        let len = self.read_len()?;
        let size = len.checked_mul(element_size).ok_or_else(|| {
            cold_path();
            Error::EndOfFile
        })?;
        self.take(size)
    }

    fn read_byte_array(&mut self) -> Result<ByteArray> {
        let raw = self.read_array_body(1)?;
        Ok(raw.iter().map(|&byte| byte as i8).collect())
    }

    fn read_int_array(&mut self) -> Result<IntArray> {
        let raw = self.read_array_body(4)?;
        let values = <[byteorder::I32<O>]>::ref_from_bytes(raw).map_err(|_| Error::EndOfFile)?;
        Ok(values.iter().map(|value| value.get()).collect())
    }

    fn read_long_array(&mut self) -> Result<LongArray> {
        let raw = self.read_array_body(8)?;
        let values = <[byteorder::I64<O>]>::ref_from_bytes(raw).map_err(|_| Error::EndOfFile)?;
        Ok(values.iter().map(|value| value.get()).collect())
    }

    fn read_list(&mut self, depth: usize) -> Result<List> {
        let element_id = TagID::try_from(self.read_u8()?)?;
        let raw_len = self.read_i32()?;
        let len = usize::try_from(raw_len).map_err(|_| {
            cold_path();
            Error::NegativeLength(raw_len)
        })?;
        if element_id == TagID::End {
            if len != 0 {
                cold_path();
                return Err(Error::InvalidListElement(raw_len));
            }
            return Ok(List::new());
        }

        // Every element occupies at least this much, so a count that cannot
        // fit in the rest of the buffer is rejected before allocating.
        if len.saturating_mul(min_payload_len(element_id)) > self.remaining() {
            cold_path();
            return Err(Error::EndOfFile);
        }

        let mut items = Vec::with_capacity(len);
        for _ in 0..len {
            let start = self.pos;
            let item = self.read_payload(element_id, depth + 1)?;
            debug_assert_eq!(item.payload_len(), self.pos - start);
            items.push(item);
        }
        Ok(List::from_raw(element_id, items))
    }

    fn read_compound(&mut self, depth: usize) -> Result<Compound> {
        let mut compound = CompoundBuilder::new();
        loop {
            let start = self.pos;
            let NamedTag { name, value } = self.read_named(depth + 1)?;
            if value.id() == TagID::End {
                return Ok(compound.finish());
            }
            debug_assert_eq!(entry_len(&name, &value), self.pos - start);
            compound.push(name, value).map_err(|error| match error {
                Error::DuplicateTag(name) => Error::DuplicateName(name),
                Error::InvalidName => Error::EmptyName,
                other => other,
            })?;
        }
    }
}

/// The smallest payload a tag of this kind can have.
const fn min_payload_len(tag_id: TagID) -> usize {
    match tag_id.payload_size() {
        Some(size) => size,
        None => match tag_id {
            TagID::String => 2,
            TagID::List => 5,
            TagID::Compound => 1,
            _ => 4,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_payload_len_matches_empty_values() {
        assert_eq!(min_payload_len(TagID::String), Value::String(String::new()).payload_len());
        assert_eq!(min_payload_len(TagID::List), Value::List(List::new()).payload_len());
        assert_eq!(
            min_payload_len(TagID::Compound),
            Value::Compound(Compound::new()).payload_len()
        );
        assert_eq!(
            min_payload_len(TagID::IntArray),
            Value::IntArray(IntArray::new()).payload_len()
        );
        assert_eq!(min_payload_len(TagID::Long), Value::Long(0).payload_len());
    }
}

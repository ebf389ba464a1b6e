use std::io::Write;

use zerocopy::{IntoBytes, byteorder};

use crate::{
    ByteOrder, Compound, Error, NamedTag, Result, TagID, Value,
    util::{cold_path, encode_string},
};

/// Encodes one named tag into a new buffer.
///
/// The buffer is allocated once, with the size reported by
/// [`NamedTag::encoded_len`].
pub fn write_tag<O: ByteOrder>(tag: &NamedTag) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(tag.encoded_len());
    write_tag_to_writer::<O>(tag, &mut buf)?;
    Ok(buf)
}

/// Encodes one named tag into `writer`.
///
/// On failure part of the tag may already have been written.
pub fn write_tag_to_writer<O: ByteOrder>(tag: &NamedTag, mut writer: impl Write) -> Result<()> {
    write_named::<O>(&mut writer, &tag.name, &tag.value)
}

/// Encodes a document root without first wrapping it in a [`Value`].
pub(crate) fn write_named_compound<O: ByteOrder>(name: &str, root: &Compound) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    buf.push(TagID::Compound as u8);
    write_string::<O>(&mut buf, name)?;
    write_compound::<O>(&mut buf, root)?;
    Ok(buf)
}

fn write_named<O: ByteOrder>(writer: &mut impl Write, name: &str, value: &Value) -> Result<()> {
    writer.write_all(&[value.id() as u8])?;
    if value.id() == TagID::End {
        return Ok(());
    }
    write_string::<O>(writer, name)?;
    write_payload::<O>(writer, value)
}

fn write_string<O: ByteOrder>(writer: &mut impl Write, value: &str) -> Result<()> {
    let encoded = encode_string(value);
    let len = u16::try_from(encoded.len()).map_err(|_| {
        cold_path();
        Error::StringTooLong(encoded.len())
    })?;
    writer.write_all(&byteorder::U16::<O>::new(len).to_bytes())?;
    writer.write_all(&encoded)?;
    Ok(())
}

fn write_len<O: ByteOrder>(writer: &mut impl Write, len: usize) -> Result<()> {
    let len = i32::try_from(len).map_err(|_| {
        cold_path();
        Error::ListTooLong(len)
    })?;
    writer.write_all(&byteorder::I32::<O>::new(len).to_bytes())?;
    Ok(())
}

fn write_compound<O: ByteOrder>(writer: &mut impl Write, compound: &Compound) -> Result<()> {
    for (name, value) in compound.iter() {
        write_named::<O>(writer, name, value)?;
    }
    writer.write_all(&[TagID::End as u8])?;
    Ok(())
}

fn write_payload<O: ByteOrder>(writer: &mut impl Write, value: &Value) -> Result<()> {
    match value {
        Value::End => {}
        Value::Byte(value) => writer.write_all(&[*value as u8])?,
        Value::Short(value) => writer.write_all(&byteorder::I16::<O>::new(*value).to_bytes())?,
        Value::Int(value) => writer.write_all(&byteorder::I32::<O>::new(*value).to_bytes())?,
        Value::Long(value) => writer.write_all(&byteorder::I64::<O>::new(*value).to_bytes())?,
        Value::Float(value) => writer.write_all(&byteorder::F32::<O>::new(*value).to_bytes())?,
        Value::Double(value) => writer.write_all(&byteorder::F64::<O>::new(*value).to_bytes())?,
        Value::ByteArray(array) => {
            write_len::<O>(writer, array.len())?;
            writer.write_all(array.as_slice().as_bytes())?;
        }
        Value::String(value) => write_string::<O>(writer, value)?,
        Value::List(list) => {
            writer.write_all(&[list.element_id() as u8])?;
            write_len::<O>(writer, list.len())?;
            for item in list {
                write_payload::<O>(writer, item)?;
            }
        }
        Value::Compound(compound) => write_compound::<O>(writer, compound)?,
        Value::IntArray(array) => {
            write_len::<O>(writer, array.len())?;
            let raw: Vec<byteorder::I32<O>> =
                array.iter().map(|&v| byteorder::I32::<O>::new(v)).collect();
            writer.write_all(raw.as_slice().as_bytes())?;
        }
        Value::LongArray(array) => {
            write_len::<O>(writer, array.len())?;
            let raw: Vec<byteorder::I64<O>> =
                array.iter().map(|&v| byteorder::I64::<O>::new(v)).collect();
            writer.write_all(raw.as_slice().as_bytes())?;
        }
    }
    Ok(())
}

use log::trace;

use super::write::is_literal_byte;
use crate::{
    ByteArray, Compound, Error, IntArray, List, LongArray, Result, TagID, Value,
    compound::CompoundBuilder, util::cold_path,
};

/// Parses a complete SNBT document: one value, optionally surrounded by
/// whitespace.
///
/// ```
/// use nbt_edit::{Value, parse_text};
///
/// let value = parse_text("{pos: [I; 1, 2, 3], name: \"Steve\"}").unwrap();
/// let compound = value.as_compound().unwrap();
/// assert_eq!(compound.get("name").unwrap(), &Value::from("Steve"));
/// assert_eq!(compound.get("pos").unwrap(), &Value::from(vec![1i32, 2, 3]));
/// ```
pub fn parse_text(src: &str) -> Result<Value> {
    let parser = Parser::new(src);
    let (value, consumed) = parser.parse_value(0, 0)?;
    let end = parser.skip_whitespace(consumed);
    if end != src.len() {
        cold_path();
        return Err(Error::syntax(end, "unexpected trailing characters"));
    }
    Ok(value)
}

/// Parses one SNBT value starting at byte `offset` of `src`.
///
/// Returns the value and the number of bytes it occupied, counting any
/// whitespace skipped before it. Whatever follows the value is left alone.
///
/// ```
/// use nbt_edit::{Value, read_text};
///
/// let src = "5b, 7s";
/// let (first, used) = read_text(src, 0).unwrap();
/// assert_eq!((first, used), (Value::Byte(5), 2));
/// let (second, used) = read_text(src, 3).unwrap();
/// assert_eq!((second, used), (Value::Short(7), 3));
/// ```
pub fn read_text(src: &str, offset: usize) -> Result<(Value, usize)> {
    if offset > src.len() {
        cold_path();
        return Err(Error::syntax(offset, "offset past end of input"));
    }
    let (value, end) = Parser::new(src).parse_value(offset, 0)?;
    Ok((value, end - offset))
}

struct Parser<'a> {
    src: &'a str,
    bytes: &'a [u8],
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            bytes: src.as_bytes(),
        }
    }

    #[inline]
    fn peek(&self, pos: usize) -> Option<u8> {
        self.bytes.get(pos).copied()
    }

    fn skip_whitespace(&self, mut pos: usize) -> usize {
        while matches!(self.peek(pos), Some(b' ' | b'\t' | b'\r' | b'\n')) {
            pos += 1;
        }
        pos
    }

    fn expect(&self, pos: usize, byte: u8) -> Result<usize> {
        match self.peek(pos) {
            Some(found) if found == byte => Ok(pos + 1),
            Some(_) => {
                cold_path();
                Err(Error::syntax(pos, format!("expected '{}'", byte as char)))
            }
            None => {
                cold_path();
                Err(Error::syntax(pos, format!("expected '{}', found end of input", byte as char)))
            }
        }
    }

    /// Parses the value that starts after any whitespace at `pos`, returning
    /// it with the position just past it.
    fn parse_value(&self, pos: usize, depth: usize) -> Result<(Value, usize)> {
        let pos = self.skip_whitespace(pos);
        trace!("{:indent$}> parsing value at {pos}", "", indent = depth * 2);
        let (value, end) = match self.peek(pos) {
            Some(b'{') => {
                let (compound, end) = self.parse_compound(pos, depth)?;
                (Value::Compound(compound), end)
            }
            Some(b'[') => self.parse_bracketed(pos, depth)?,
            Some(quote @ (b'"' | b'\'')) => {
                let (string, end) = self.parse_quoted(pos, quote)?;
                (Value::String(string), end)
            }
            Some(byte) if is_literal_byte(byte) => {
                let end = self.literal_end(pos);
                (classify(&self.src[pos..end], pos)?, end)
            }
            Some(_) => {
                cold_path();
                return Err(Error::syntax(pos, "expected a value"));
            }
            None => {
                cold_path();
                return Err(Error::syntax(pos, "expected a value, found end of input"));
            }
        };
        trace!("{:indent$}> [{}] done", "", value.id(), indent = depth * 2);
        Ok((value, end))
    }

    fn literal_end(&self, mut pos: usize) -> usize {
        while self.peek(pos).is_some_and(is_literal_byte) {
            pos += 1;
        }
        pos
    }

    /// `pos` is at the opening quote. Backslash escapes the next character.
    fn parse_quoted(&self, pos: usize, quote: u8) -> Result<(String, usize)> {
        let mut out = String::new();
        let mut chars = self.src[pos + 1..].char_indices();
        while let Some((i, c)) = chars.next() {
            match c {
                '\\' => match chars.next() {
                    Some((_, 'n')) => out.push('\n'),
                    Some((_, 't')) => out.push('\t'),
                    Some((_, 'r')) => out.push('\r'),
                    Some((_, escaped)) => out.push(escaped),
                    None => break,
                },
                c if c as u32 == quote as u32 => return Ok((out, pos + 1 + i + 1)),
                c => out.push(c),
            }
        }
        cold_path();
        Err(Error::syntax(pos, "unterminated string"))
    }

    fn parse_key(&self, pos: usize) -> Result<(String, usize)> {
        match self.peek(pos) {
            Some(quote @ (b'"' | b'\'')) => {
                let (key, end) = self.parse_quoted(pos, quote)?;
                if key.is_empty() {
                    cold_path();
                    return Err(Error::syntax(pos, "empty compound key"));
                }
                Ok((key, end))
            }
            _ => {
                let end = self.literal_end(pos);
                if end == pos {
                    cold_path();
                    return Err(Error::syntax(pos, "empty compound key"));
                }
                Ok((self.src[pos..end].to_owned(), end))
            }
        }
    }

    /// `pos` is at `{`.
    fn parse_compound(&self, pos: usize, depth: usize) -> Result<(Compound, usize)> {
        let mut compound = CompoundBuilder::new();
        let mut pos = self.skip_whitespace(pos + 1);
        loop {
            if self.peek(pos) == Some(b'}') {
                return Ok((compound.finish(), pos + 1));
            }
            if self.peek(pos).is_none() {
                cold_path();
                return Err(Error::syntax(pos, "unterminated compound"));
            }
            let key_pos = pos;
            let (key, end) = self.parse_key(pos)?;
            pos = self.expect(self.skip_whitespace(end), b':')?;
            trace!("{:indent$}> [name={key}]", "", indent = depth * 2 + 2);
            let (value, end) = self.parse_value(pos, depth + 1)?;
            compound.push(key, value).map_err(|error| match error {
                Error::DuplicateTag(key) => Error::syntax(key_pos, format!("duplicate key {key:?}")),
                other => other,
            })?;
            pos = self.after_element(end, b'}')?;
        }
    }

    /// Skips the separator after a container element. Returns the position
    /// of the next element or of the closing bracket.
    fn after_element(&self, pos: usize, close: u8) -> Result<usize> {
        let pos = self.skip_whitespace(pos);
        match self.peek(pos) {
            Some(b',') => Ok(self.skip_whitespace(pos + 1)),
            Some(byte) if byte == close => Ok(pos),
            Some(_) => {
                cold_path();
                Err(Error::syntax(pos, format!("expected ',' or '{}'", close as char)))
            }
            None => {
                cold_path();
                Err(Error::syntax(pos, format!("expected '{}', found end of input", close as char)))
            }
        }
    }

    /// `pos` is at `[`: either a list or a typed array.
    fn parse_bracketed(&self, pos: usize, depth: usize) -> Result<(Value, usize)> {
        let start = self.skip_whitespace(pos + 1);
        let prefix = (self.peek(start), self.peek(start + 1));
        if let (Some(kind @ (b'B' | b'I' | b'L')), Some(b';')) = prefix {
            let body = start + 2;
            return match kind {
                b'B' => {
                    let (items, end) = self.parse_array_body(body, TagID::Byte)?;
                    let array: ByteArray = items.iter().filter_map(Value::as_byte).collect();
                    Ok((Value::ByteArray(array), end))
                }
                b'I' => {
                    let (items, end) = self.parse_array_body(body, TagID::Int)?;
                    let array: IntArray = items.iter().filter_map(Value::as_int).collect();
                    Ok((Value::IntArray(array), end))
                }
                _ => {
                    let (items, end) = self.parse_array_body(body, TagID::Long)?;
                    let array: LongArray = items.iter().filter_map(Value::as_long).collect();
                    Ok((Value::LongArray(array), end))
                }
            };
        }
        let (list, end) = self.parse_list(start, depth)?;
        Ok((Value::List(list), end))
    }

    /// `pos` is the first position after `[`, whitespace skipped.
    fn parse_list(&self, mut pos: usize, depth: usize) -> Result<(List, usize)> {
        let mut list = List::new();
        loop {
            match self.peek(pos) {
                Some(b']') => return Ok((list, pos + 1)),
                None => {
                    cold_path();
                    return Err(Error::syntax(pos, "unterminated list"));
                }
                _ => {}
            }
            let element_pos = self.skip_whitespace(pos);
            let (value, end) = self.parse_value(pos, depth + 1)?;
            if list.is_empty() {
                list = List::with_element_id(value.id());
            }
            list.add(value).map_err(|_| {
                cold_path();
                Error::syntax(element_pos, "list elements must all be of one kind")
            })?;
            pos = self.after_element(end, b']')?;
        }
    }

    /// `pos` is just past `X;`. Every element is a literal of `element_id`.
    fn parse_array_body(&self, pos: usize, element_id: TagID) -> Result<(Vec<Value>, usize)> {
        let mut items = Vec::new();
        let mut pos = self.skip_whitespace(pos);
        loop {
            match self.peek(pos) {
                Some(b']') => return Ok((items, pos + 1)),
                Some(byte) if is_literal_byte(byte) => {}
                Some(_) => {
                    cold_path();
                    return Err(Error::syntax(pos, format!("expected a {element_id} literal")));
                }
                None => {
                    cold_path();
                    return Err(Error::syntax(pos, "unterminated array"));
                }
            }
            let end = self.literal_end(pos);
            items.push(classify_forced(&self.src[pos..end], pos, element_id)?);
            pos = self.after_element(end, b']')?;
        }
    }
}

fn classify(token: &str, pos: usize) -> Result<Value> {
    match token {
        "true" => return Ok(Value::Byte(1)),
        "false" => return Ok(Value::Byte(0)),
        _ => {}
    }
    if let Some(value) = parse_suffixed(token) {
        return Ok(value);
    }
    if is_integer(token) {
        return token.parse::<i32>().map(Value::Int).map_err(|_| {
            cold_path();
            Error::syntax(pos, format!("integer out of range: {token}"))
        });
    }
    token.parse::<f64>().map(Value::Double).map_err(|_| {
        cold_path();
        Error::syntax(pos, format!("invalid literal: {token}"))
    })
}

/// Splits off a one-letter kind suffix and parses the body as that kind.
fn parse_suffixed(token: &str) -> Option<Value> {
    let (&last, body) = token.as_bytes().split_last()?;
    if body.is_empty() {
        return None;
    }
    let body = &token[..body.len()];
    match last {
        b'b' | b'B' => body.parse().ok().map(Value::Byte),
        b's' | b'S' => body.parse().ok().map(Value::Short),
        b'l' | b'L' => body.parse().ok().map(Value::Long),
        b'f' | b'F' => body.parse().ok().map(Value::Float),
        b'd' | b'D' => body.parse().ok().map(Value::Double),
        _ => None,
    }
}

/// `[-+]?\d+`
fn is_integer(token: &str) -> bool {
    let digits = token.strip_prefix(['-', '+']).unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|byte| byte.is_ascii_digit())
}

/// A typed-array element: an integer in range for `element_id`, either bare
/// or carrying that kind's own suffix.
fn classify_forced(token: &str, pos: usize, element_id: TagID) -> Result<Value> {
    let value = match parse_suffixed(token) {
        Some(value) => Some(value),
        None if is_integer(token) => token.parse::<i64>().ok().and_then(|value| match element_id {
            TagID::Byte => i8::try_from(value).ok().map(Value::Byte),
            TagID::Int => i32::try_from(value).ok().map(Value::Int),
            _ => Some(Value::Long(value)),
        }),
        None => None,
    };
    match value {
        Some(value) if value.id() == element_id => Ok(value),
        _ => {
            cold_path();
            Err(Error::syntax(pos, format!("{token} is not a valid {element_id}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_needs_a_body() {
        assert_eq!(parse_suffixed("b"), None);
        assert_eq!(parse_suffixed("12b"), Some(Value::Byte(12)));
        assert_eq!(parse_suffixed("300b"), None);
        assert_eq!(parse_suffixed("1.5D"), Some(Value::Double(1.5)));
    }

    #[test]
    fn integer_shape() {
        assert!(is_integer("42"));
        assert!(is_integer("-7"));
        assert!(is_integer("+7"));
        assert!(!is_integer("-"));
        assert!(!is_integer("1.0"));
        assert!(!is_integer("1e3"));
    }

    #[test]
    fn forced_elements() {
        assert_eq!(classify_forced("3", 0, TagID::Byte).unwrap(), Value::Byte(3));
        assert_eq!(classify_forced("3b", 0, TagID::Byte).unwrap(), Value::Byte(3));
        assert_eq!(classify_forced("3L", 0, TagID::Long).unwrap(), Value::Long(3));
        assert!(classify_forced("3s", 0, TagID::Byte).is_err());
        assert!(classify_forced("200", 0, TagID::Byte).is_err());
        assert!(classify_forced("1.5", 0, TagID::Int).is_err());
    }
}

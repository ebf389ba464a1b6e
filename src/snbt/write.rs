use std::fmt::{self, Write};

use crate::{ArrayElement, Compound, List, TagID, Value, array::Array};

/// Renders a value as SNBT.
///
/// With `pretty` unset the output contains no inserted whitespace; with it
/// set every container child sits on its own line, indented two spaces per
/// level. A top-level `End` has no textual form and renders as an empty
/// string.
///
/// ```
/// use nbt_edit::{Compound, Value, encode_text};
///
/// let mut compound = Compound::new();
/// compound.add("a", Value::Int(1)).unwrap();
/// compound.add("b b", Value::from(vec![1i8, 2])).unwrap();
/// let value = Value::Compound(compound);
///
/// assert_eq!(encode_text(&value, false), r#"{a:1,"b b":[B;1b,2b]}"#);
/// assert_eq!(
///     encode_text(&value, true),
///     "{\n  a: 1,\n  \"b b\": [B;\n    1b,\n    2b\n  ]\n}"
/// );
/// ```
pub fn encode_text(value: &Value, pretty: bool) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = Printer::new(&mut out, pretty).value(value);
    out
}

struct Printer<'w, W: Write> {
    out: &'w mut W,
    pretty: bool,
    depth: usize,
}

impl<'w, W: Write> Printer<'w, W> {
    fn new(out: &'w mut W, pretty: bool) -> Self {
        Self {
            out,
            pretty,
            depth: 0,
        }
    }

    fn value(&mut self, value: &Value) -> fmt::Result {
        match value {
            Value::End => Ok(()),
            Value::Byte(value) => write!(self.out, "{value}b"),
            Value::Short(value) => write!(self.out, "{value}s"),
            Value::Int(value) => write!(self.out, "{value}"),
            Value::Long(value) => write!(self.out, "{value}L"),
            Value::Float(value) => write!(self.out, "{value:?}f"),
            Value::Double(value) => write!(self.out, "{value:?}d"),
            Value::ByteArray(array) => self.array(array),
            Value::String(value) => write_quoted(self.out, value),
            Value::List(list) => self.list(list),
            Value::Compound(compound) => self.compound(compound),
            Value::IntArray(array) => self.array(array),
            Value::LongArray(array) => self.array(array),
        }
    }

    fn compound(&mut self, compound: &Compound) -> fmt::Result {
        self.out.write_char('{')?;
        self.children(compound.iter(), |printer, (name, value)| {
            write_key(printer.out, name)?;
            printer
                .out
                .write_str(if printer.pretty { ": " } else { ":" })?;
            printer.value(value)
        })?;
        self.out.write_char('}')
    }

    fn list(&mut self, list: &List) -> fmt::Result {
        self.out.write_char('[')?;
        self.children(list.iter(), |printer, value| printer.value(value))?;
        self.out.write_char(']')
    }

    fn array<T: ArrayElement>(&mut self, array: &Array<T>) -> fmt::Result {
        let prefix = match T::ARRAY_ID {
            TagID::ByteArray => "[B;",
            TagID::IntArray => "[I;",
            _ => "[L;",
        };
        self.out.write_str(prefix)?;
        self.children(array.iter(), |printer, element| {
            printer.value(&element.into_value())
        })?;
        self.out.write_char(']')
    }

    /// Writes the separated children of a container whose opening bracket
    /// has already been written, leaving the cursor before the closer.
    fn children<I, F>(&mut self, items: I, mut item: F) -> fmt::Result
    where
        I: ExactSizeIterator,
        F: FnMut(&mut Self, I::Item) -> fmt::Result,
    {
        if items.len() == 0 {
            return Ok(());
        }
        self.depth += 1;
        for (i, child) in items.enumerate() {
            if i > 0 {
                self.out.write_char(',')?;
            }
            self.newline()?;
            item(self, child)?;
        }
        self.depth -= 1;
        self.newline()
    }

    fn newline(&mut self) -> fmt::Result {
        if self.pretty {
            self.out.write_char('\n')?;
            for _ in 0..self.depth {
                self.out.write_str("  ")?;
            }
        }
        Ok(())
    }
}

/// Whether `key` can be written without quotes.
pub(crate) fn is_bare_key(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(is_literal_byte)
}

#[inline]
pub(crate) fn is_literal_byte(byte: u8) -> bool {
    matches!(byte, b'0'..=b'9' | b'A'..=b'Z' | b'a'..=b'z' | b'.' | b'_' | b'+' | b'-')
}

fn write_key<W: Write>(out: &mut W, key: &str) -> fmt::Result {
    if is_bare_key(key) {
        out.write_str(key)
    } else {
        write_quoted(out, key)
    }
}

fn write_quoted<W: Write>(out: &mut W, value: &str) -> fmt::Result {
    out.write_char('"')?;
    for c in value.chars() {
        match c {
            '"' => out.write_str("\\\"")?,
            '\\' => out.write_str("\\\\")?,
            '\n' => out.write_str("\\n")?,
            '\t' => out.write_str("\\t")?,
            '\r' => out.write_str("\\r")?,
            c => out.write_char(c)?,
        }
    }
    out.write_char('"')
}

/// `{}` renders compact SNBT, `{:#}` the indented form.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pretty = f.alternate();
        Printer::new(f, pretty).value(self)
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pretty = f.alternate();
        Printer::new(f, pretty).compound(self)
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pretty = f.alternate();
        Printer::new(f, pretty).list(self)
    }
}

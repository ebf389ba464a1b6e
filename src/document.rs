use std::{
    borrow::Cow,
    ops::{Deref, DerefMut},
};

use log::debug;
use zerocopy::{BigEndian, LittleEndian};

use crate::{
    AsPath, Compound, Config, Endian, Error, NamedTag, Result, Value, binary::write_named_compound,
    parse_text, read_binary, util::cold_path,
};

/// An open NBT file as an editor sees it: a named root compound.
///
/// Dereferences to the root [`Compound`], so its mutation methods apply
/// directly.
///
/// ```
/// use nbt_edit::{Config, Document, Value};
///
/// let mut doc = Document::from_text("{Level: {Time: 0L}}").unwrap();
/// doc.set_path("Level.Time", Value::Long(1200)).unwrap();
/// doc.add("Version", Value::Int(3)).unwrap();
///
/// let bytes = doc.to_binary(&Config::default()).unwrap();
/// let reopened = Document::from_binary(&bytes, &Config::default()).unwrap();
/// assert_eq!(reopened, doc);
/// assert_eq!(*reopened.get_path("Level.Time").unwrap(), Value::Long(1200));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    pub name: String,
    pub root: Compound,
}

impl Document {
    pub fn new(name: impl Into<String>, root: Compound) -> Self {
        Self {
            name: name.into(),
            root,
        }
    }

    /// Fails with [`Error::InvalidDocument`] unless the tag is a compound.
    pub fn from_tag(tag: NamedTag) -> Result<Self> {
        match tag.value {
            Value::Compound(root) => Ok(Self::new(tag.name, root)),
            other => {
                cold_path();
                Err(Error::InvalidDocument(other.id()))
            }
        }
    }

    /// Decodes uncompressed binary data in the configured byte order.
    pub fn from_binary(bytes: &[u8], config: &Config) -> Result<Self> {
        debug!("decoding {} bytes as {:?}-endian NBT", bytes.len(), config.endian);
        let tag = match config.endian {
            Endian::Big => read_binary::<BigEndian>(bytes)?,
            Endian::Little => read_binary::<LittleEndian>(bytes)?,
        };
        Self::from_tag(tag)
    }

    /// Parses SNBT text. The text carries no root name, so the name is empty.
    pub fn from_text(src: &str) -> Result<Self> {
        Self::from_tag(NamedTag::new("", parse_text(src)?))
    }

    pub fn to_binary(&self, config: &Config) -> Result<Vec<u8>> {
        match config.endian {
            Endian::Big => write_named_compound::<BigEndian>(&self.name, &self.root),
            Endian::Little => write_named_compound::<LittleEndian>(&self.name, &self.root),
        }
    }

    /// Renders the root compound, indented if the config asks for it.
    pub fn to_text(&self, config: &Config) -> String {
        if config.pretty {
            format!("{:#}", self.root)
        } else {
            self.root.to_string()
        }
    }

    pub fn get_path(&self, path: impl AsPath) -> Result<Cow<'_, Value>> {
        self.root.get_path(path)
    }

    pub fn set_path(&mut self, path: impl AsPath, value: Value) -> Result<()> {
        self.root.set_path(path, value)
    }

    pub fn into_tag(self) -> NamedTag {
        NamedTag::new(self.name, Value::Compound(self.root))
    }
}

impl Deref for Document {
    type Target = Compound;

    fn deref(&self) -> &Compound {
        &self.root
    }
}

impl DerefMut for Document {
    fn deref_mut(&mut self) -> &mut Compound {
        &mut self.root
    }
}

impl TryFrom<NamedTag> for Document {
    type Error = Error;

    fn try_from(tag: NamedTag) -> Result<Self> {
        Self::from_tag(tag)
    }
}

impl From<Document> for NamedTag {
    fn from(document: Document) -> Self {
        document.into_tag()
    }
}

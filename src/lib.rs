//! Reading, writing and editing NBT (Named Binary Tag) data and its textual
//! form, SNBT.
//!
//! A tag tree is a [`Value`]; the top of a binary file is a [`NamedTag`],
//! and an editor usually works on a [`Document`], whose root is always a
//! [`Compound`]. Containers only change through checked operations, so a
//! tree built through this crate always encodes.
//!
//! ```
//! use nbt_edit::{Value, encode_binary, get_by_path, parse_binary, parse_text, NamedTag};
//!
//! let value = parse_text("{name: \"Steve\", pos: [0.5d, 64.0d, -3.25d]}").unwrap();
//! let tag = NamedTag::new("player", value);
//!
//! let bytes = encode_binary(&tag).unwrap();
//! assert_eq!(bytes.len(), tag.encoded_len());
//! assert_eq!(parse_binary(&bytes).unwrap(), tag);
//!
//! assert_eq!(*get_by_path(&tag.value, "pos[1]").unwrap(), Value::Double(64.0));
//! assert_eq!(tag.value.to_string(), r#"{name:"Steve",pos:[0.5d,64.0d,-3.25d]}"#);
//! ```

pub use zerocopy::BigEndian;
pub use zerocopy::LittleEndian;

pub mod array;
pub mod binary;
pub mod compound;
pub mod config;
pub mod document;
pub mod error;
pub mod list;
pub mod nbt;
pub mod path;
#[cfg(feature = "serde")]
mod ser;
pub mod snbt;
mod util;
pub mod value;

pub use array::*;
pub use binary::*;
pub use compound::*;
pub use config::*;
pub use document::*;
pub use error::*;
pub use list::*;
pub use nbt::*;
pub use path::*;
pub use snbt::*;
pub use util::ByteOrder;
pub use value::*;

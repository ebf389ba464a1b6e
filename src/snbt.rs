//! The textual NBT format (SNBT).
//!
//! ```text
//! {name: "Steve", pos: [I; 1, 64, -3], motion: [0.0d, 0.5d], flags: 3b}
//! ```
//!
//! Numbers carry a one-letter suffix naming their kind (`b`, `s`, `L`, `f`,
//! `d`, either case); a bare integer is a TAG_Int and any other bare number
//! is a TAG_Double. `true` and `false` read as the bytes 1 and 0. Strings
//! and compound keys may use double or single quotes; keys made only of
//! `[A-Za-z0-9._+-]` may also be written bare.
//!
//! The parser reports the byte offset of the first problem it meets in an
//! [`Error::Syntax`](crate::Error::Syntax).

mod read;
mod write;

pub use read::{parse_text, read_text};
pub use write::encode_text;

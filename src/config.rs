#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Byte order of binary NBT data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Endian {
    /// Java edition.
    #[default]
    Big,
    /// Bedrock edition.
    Little,
}

/// Host settings for reading and writing [`Document`](crate::Document)s.
///
/// Every field has a default, so a settings file only needs to name the
/// ones it changes:
///
/// ```
/// # #[cfg(feature = "serde")] {
/// use nbt_edit::{Config, Endian};
///
/// let config: Config = serde_json::from_str(r#"{"endian": "little"}"#).unwrap();
/// assert_eq!(config, Config { pretty: true, endian: Endian::Little });
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Indent SNBT output.
    #[cfg_attr(feature = "serde", serde(default = "default_pretty"))]
    pub pretty: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub endian: Endian,
}

#[cfg(feature = "serde")]
fn default_pretty() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pretty: true,
            endian: Endian::Big,
        }
    }
}

use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct RestoreConfig {
    #[serde(default)]
    pub order: RestoreOrder,
}

/// How restore recovers the original line order from stored records
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RestoreOrder {
    /// Sort by the integer value of the sequence prefix. Has no line ceiling.
    #[default]
    Numeric,

    /// Byte-wise sort of whole records. Only matches input order while every
    /// prefix has the same width, i.e. below 100000 lines.
    Lexicographic,
}

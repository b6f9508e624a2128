/// Closed enumerations used by schema documents
///
/// Each enumeration is stored in YAML as its literal string. Decoding goes
/// through an exhaustive literal table; anything outside it is rejected.

use super::error::SchemaValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Primitive column types
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum GarType {
    Bool,
    Int32,
    Int64,
    Float,
    Double,
    #[default]
    String,
    List,
}

impl GarType {
    pub const ALL: [GarType; 7] = [
        GarType::Bool,
        GarType::Int32,
        GarType::Int64,
        GarType::Float,
        GarType::Double,
        GarType::String,
        GarType::List,
    ];

    /// Literal used in YAML documents
    pub fn as_str(&self) -> &'static str {
        match self {
            GarType::Bool => "bool",
            GarType::Int32 => "int32",
            GarType::Int64 => "int64",
            GarType::Float => "float",
            GarType::Double => "double",
            GarType::String => "string",
            GarType::List => "list",
        }
    }
}

impl FromStr for GarType {
    type Err = SchemaValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bool" => Ok(GarType::Bool),
            "int32" => Ok(GarType::Int32),
            "int64" => Ok(GarType::Int64),
            "float" => Ok(GarType::Float),
            "double" => Ok(GarType::Double),
            "string" => Ok(GarType::String),
            "list" => Ok(GarType::List),
            other => Err(SchemaValidationError::unknown_literal("GarType", other)),
        }
    }
}

/// Physical chunk encodings
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FileType {
    Csv,
    #[default]
    Parquet,
    Orc,
}

impl FileType {
    pub const ALL: [FileType; 3] = [FileType::Csv, FileType::Parquet, FileType::Orc];

    /// Literal used in YAML documents
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Csv => "csv",
            FileType::Parquet => "parquet",
            FileType::Orc => "orc",
        }
    }
}

impl FromStr for FileType {
    type Err = SchemaValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(FileType::Csv),
            "parquet" => Ok(FileType::Parquet),
            "orc" => Ok(FileType::Orc),
            other => Err(SchemaValidationError::unknown_literal("FileType", other)),
        }
    }
}

/// Adjacency list orientation and ordering
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AdjListType {
    #[default]
    UnorderedBySource,
    UnorderedByDest,
    OrderedBySource,
    OrderedByDest,
}

impl AdjListType {
    pub const ALL: [AdjListType; 4] = [
        AdjListType::UnorderedBySource,
        AdjListType::UnorderedByDest,
        AdjListType::OrderedBySource,
        AdjListType::OrderedByDest,
    ];

    /// Build from the ordered flag and the alignment side
    pub fn from_parts(ordered: bool, by_source: bool) -> Self {
        match (ordered, by_source) {
            (false, true) => AdjListType::UnorderedBySource,
            (false, false) => AdjListType::UnorderedByDest,
            (true, true) => AdjListType::OrderedBySource,
            (true, false) => AdjListType::OrderedByDest,
        }
    }

    pub fn is_ordered(&self) -> bool {
        matches!(self, AdjListType::OrderedBySource | AdjListType::OrderedByDest)
    }

    pub fn is_aligned_by_source(&self) -> bool {
        matches!(
            self,
            AdjListType::UnorderedBySource | AdjListType::OrderedBySource
        )
    }

    /// Literal used in YAML documents
    pub fn as_str(&self) -> &'static str {
        match self {
            AdjListType::UnorderedBySource => "unordered_by_source",
            AdjListType::UnorderedByDest => "unordered_by_dest",
            AdjListType::OrderedBySource => "ordered_by_source",
            AdjListType::OrderedByDest => "ordered_by_dest",
        }
    }
}

impl FromStr for AdjListType {
    type Err = SchemaValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unordered_by_source" => Ok(AdjListType::UnorderedBySource),
            "unordered_by_dest" => Ok(AdjListType::UnorderedByDest),
            "ordered_by_source" => Ok(AdjListType::OrderedBySource),
            "ordered_by_dest" => Ok(AdjListType::OrderedByDest),
            other => Err(SchemaValidationError::unknown_literal("AdjListType", other)),
        }
    }
}

// serde glue shared by the three enumerations
macro_rules! literal_conversions {
    ($($ty:ty),+) => {
        $(
            impl TryFrom<String> for $ty {
                type Error = SchemaValidationError;

                fn try_from(value: String) -> Result<Self, Self::Error> {
                    value.parse()
                }
            }

            impl From<$ty> for String {
                fn from(value: $ty) -> Self {
                    value.as_str().to_string()
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

literal_conversions!(GarType, FileType, AdjListType);

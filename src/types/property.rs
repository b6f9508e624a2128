use super::enums::{FileType, GarType};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Three-valued flag: unset, true, or false
///
/// `Unset` means the schema author did not say, which is not the same as
/// an explicit `false`. In YAML, `Unset` is written as `null` and is also
/// what an absent key decodes to.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Tristate {
    #[default]
    Unset,
    True,
    False,
}

impl Tristate {
    pub fn is_set(&self) -> bool {
        !matches!(self, Tristate::Unset)
    }

    pub fn as_option(&self) -> Option<bool> {
        (*self).into()
    }
}

impl From<Option<bool>> for Tristate {
    fn from(value: Option<bool>) -> Self {
        match value {
            None => Tristate::Unset,
            Some(true) => Tristate::True,
            Some(false) => Tristate::False,
        }
    }
}

impl From<bool> for Tristate {
    fn from(value: bool) -> Self {
        Some(value).into()
    }
}

impl From<Tristate> for Option<bool> {
    fn from(value: Tristate) -> Self {
        match value {
            Tristate::Unset => None,
            Tristate::True => Some(true),
            Tristate::False => Some(false),
        }
    }
}

impl Serialize for Tristate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_option().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Tristate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<bool>::deserialize(deserializer).map(Tristate::from)
    }
}

/// One column descriptor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Property {
    /// Column name
    pub name: String,

    /// Column type
    pub data_type: GarType,

    /// Whether this column is the primary key
    pub is_primary: bool,

    /// Nullability as declared by the schema author
    pub is_nullable: Tristate,
}

impl Property {
    /// Create a property with nullability left unset
    pub fn new(name: impl Into<String>, data_type: GarType, is_primary: bool) -> Self {
        Self {
            name: name.into(),
            data_type,
            is_primary,
            is_nullable: Tristate::Unset,
        }
    }

    /// Set the nullability flag
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.is_nullable = nullable.into();
        self
    }
}

/// Properties stored together in one chunk file type
///
/// The order of `properties` is the physical column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyGroup {
    pub prefix: String,
    pub file_type: FileType,
    pub properties: Vec<Property>,
}

impl PropertyGroup {
    pub fn new(prefix: impl Into<String>, file_type: FileType, properties: Vec<Property>) -> Self {
        Self {
            prefix: prefix.into(),
            file_type,
            properties,
        }
    }

    /// Column names in declaration order
    pub fn property_names(&self) -> Vec<&str> {
        self.properties.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.properties.iter().any(|p| p.name == name)
    }
}

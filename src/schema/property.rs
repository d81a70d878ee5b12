//! Property: the shape of a data-model attribute.
//!
//! Distinct from the widget model: a [`Property`] describes *data* (type,
//! relation target, size constraints), while widget nodes describe
//! *presentation*. Views carry properties alongside editors and related
//! panels so widgets can adapt to the underlying attribute shape.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PropertyType
// ---------------------------------------------------------------------------

/// The closed set of data-model attribute types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyType {
    String,
    Text,
    Boolean,
    Integer,
    Long,
    Double,
    Decimal,
    Date,
    Time,
    Datetime,
    Binary,
    Enum,
    OneToOne,
    ManyToOne,
    OneToMany,
    ManyToMany,
}

impl PropertyType {
    /// Whether this type points at another entity.
    pub fn is_relation(self) -> bool {
        matches!(
            self,
            Self::OneToOne | Self::ManyToOne | Self::OneToMany | Self::ManyToMany
        )
    }

    /// Whether this type holds a collection of related records.
    pub fn is_collection(self) -> bool {
        matches!(self, Self::OneToMany | Self::ManyToMany)
    }

    /// Whether this type is numeric.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Integer | Self::Long | Self::Double | Self::Decimal
        )
    }
}

// ---------------------------------------------------------------------------
// Property
// ---------------------------------------------------------------------------

/// Metadata describing one attribute of the target data model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Attribute name.
    pub name: String,
    /// Attribute type.
    #[serde(rename = "type")]
    pub kind: PropertyType,
    /// Target entity for relation types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Name field of the target entity, used for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_name: Option<String>,
    /// Fields searched when looking up target records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_search: Option<Vec<String>>,
    /// Fields searched when resolving display names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_search: Option<Vec<String>>,
    /// Whether this attribute is the entity's display name column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_column: Option<bool>,
    /// Selection list key for enumerated values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection: Option<String>,
    /// Enum type name for `ENUM` attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readonly: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translatable: Option<bool>,
    /// Maximum size (string length or numeric bound).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_size: Option<u64>,
    /// Minimum size (string length or numeric bound).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_size: Option<u64>,
    /// Total digits for `DECIMAL` attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,
    /// Fraction digits for `DECIMAL` attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<u32>,
}

impl Property {
    /// Create a property with the given name and type.
    pub fn new(name: impl Into<String>, kind: PropertyType) -> Self {
        Self {
            name: name.into(),
            kind,
            target: None,
            target_name: None,
            target_search: None,
            name_search: None,
            name_column: None,
            selection: None,
            enum_type: None,
            title: None,
            help: None,
            required: None,
            readonly: None,
            hidden: None,
            unique: None,
            nullable: None,
            translatable: None,
            max_size: None,
            min_size: None,
            precision: None,
            scale: None,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

//! Field: a widget bound to a data-model attribute.
//!
//! Fields carry the attribute binding (`name`, via the shared attrs),
//! the server-side type, selection metadata, validation expressions and the
//! optional `widget` override consumed by the registry. A field may embed
//! `viewer`/`editor` sub-schemas for inline rendering and editing.

use serde::{Deserialize, Serialize};

use crate::schema::hilite::Hilite;
use crate::schema::property::{Property, PropertyType};
use crate::schema::widget::{WidgetAttrs, WidgetNode};

// ---------------------------------------------------------------------------
// Field
// ---------------------------------------------------------------------------

/// A widget bound to a data attribute.
///
/// The bound attribute name lives in `attrs.name`; its presence is a
/// load-time requirement checked by the schema loader, not by this type.
/// Sibling fields bound to the same record must use distinct names — a
/// contract for the metadata producer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    #[serde(flatten)]
    pub attrs: WidgetAttrs,
    /// The attribute's data-model type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_type: Option<PropertyType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Renderable-implementation override name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widget: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Required when this expression is truthy against the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_if: Option<String>,
    /// Valid only when this expression is truthy against the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_if: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Target entity for relational fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_name: Option<String>,
    /// Filter domain applied when selecting target records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Selection list key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection: Option<String>,
    /// Expression restricting the visible selection values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_in: Option<String>,
    /// Inline selection values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_list: Option<Vec<Selection>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_change: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_select: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sortable: Option<bool>,
    /// Aggregate function shown in grouped grids (sum, avg, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_hover: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_active: Option<String>,
    /// Ordered conditional styling rules; first truthy condition wins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hilites: Option<Vec<Hilite>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<Tooltip>,
    /// Inline readonly rendering template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewer: Option<Viewer>,
    /// Inline editing sub-schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<Editor>,
}

impl Field {
    /// Create a field bound to the given attribute name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            attrs: WidgetAttrs::named(name),
            ..Self::default()
        }
    }

    /// The bound attribute name, when set.
    pub fn name(&self) -> Option<&str> {
        self.attrs.name.as_deref()
    }

    /// The hilite rules, empty when none are defined.
    pub fn hilite_rules(&self) -> &[Hilite] {
        self.hilites.as_deref().unwrap_or(&[])
    }
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// One value of an enumerated selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
}

// ---------------------------------------------------------------------------
// Viewer / Editor / Tooltip
// ---------------------------------------------------------------------------

/// An inline readonly rendering template for a field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depends: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<Property>>,
}

/// An inline editing sub-schema for a field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Editor {
    #[serde(flatten)]
    pub attrs: WidgetAttrs,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    /// Use the editor as the readonly viewer as well.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewer: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_on_new: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_new: Option<String>,
    /// Ordered child widgets.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<WidgetNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<Property>>,
}

/// A templated tooltip shown on hover.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depends: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    /// Server method called to produce the tooltip context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call: Option<String>,
}

// ===========================================================================
// Tests
// ===========================================================================

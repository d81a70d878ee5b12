//! Container widgets: panels, tab stacks and the mail panel.
//!
//! Containers hold ordered child widgets (`items`); ordering is significant
//! and preserved verbatim from the source document since it determines
//! layout and tab order.

use serde::{Deserialize, Serialize};

use crate::schema::property::Property;
use crate::schema::view::View;
use crate::schema::widget::{WidgetAttrs, WidgetNode};

// ---------------------------------------------------------------------------
// Panel
// ---------------------------------------------------------------------------

/// The general-purpose container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Panel {
    #[serde(flatten)]
    pub attrs: WidgetAttrs,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_span: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_frame: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stacked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attached: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_collapse: Option<bool>,
    /// Collapsed when this expression is truthy against the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapse_if: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_tab_select: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu: Option<Menu>,
    /// Ordered child widgets.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<WidgetNode>,
}

// ---------------------------------------------------------------------------
// Specialized panels
// ---------------------------------------------------------------------------

/// A panel rendering a related collection inline (embedded grid).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelRelated {
    #[serde(flatten)]
    pub attrs: WidgetAttrs,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_view: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_view: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_if: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_if: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_new: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_change: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_move: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_window: Option<String>,
    /// Ordered column widgets (fields and buttons).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<WidgetNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<Property>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perms: Option<Perms>,
}

/// A panel embedding another view through an action (dashlet).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelDashlet {
    #[serde(flatten)]
    pub attrs: WidgetAttrs,
    /// Action resolving the embedded view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_search: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<WidgetNode>,
}

/// A panel including another named view's content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelInclude {
    #[serde(flatten)]
    pub attrs: WidgetAttrs,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    /// The resolved included view, when the server has inlined it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<Box<View>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<WidgetNode>,
}

/// A tabbed container; each child renders as one tab.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelTabs {
    #[serde(flatten)]
    pub attrs: WidgetAttrs,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<WidgetNode>,
}

/// A stacked container; children render vertically, one visible at a time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelStack {
    #[serde(flatten)]
    pub attrs: WidgetAttrs,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<WidgetNode>,
}

/// The messaging panel (message timeline + followers).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelMail {
    #[serde(flatten)]
    pub attrs: WidgetAttrs,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<WidgetNode>,
}

// ---------------------------------------------------------------------------
// Menu
// ---------------------------------------------------------------------------

/// A dropdown menu attached to a panel or view toolbar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    #[serde(flatten)]
    pub attrs: WidgetAttrs,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<MenuItem>,
}

/// One entry of a [`Menu`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    #[serde(flatten)]
    pub attrs: WidgetAttrs,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Action executed when the entry is selected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

// ---------------------------------------------------------------------------
// Perms
// ---------------------------------------------------------------------------

/// Record-level permissions attached to a related panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Perms {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub write: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass_update: Option<bool>,
}

// ===========================================================================
// Tests
// ===========================================================================

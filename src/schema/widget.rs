//! Widget base attributes, leaf widgets and the closed widget-node union.
//!
//! Every widget node shares [`WidgetAttrs`]: presentation-control attributes
//! plus the conditional attribute expressions (`showIf`, `hideIf`,
//! `readonlyIf`) evaluated per-record by the expression boundary. The
//! [`WidgetNode`] union is internally tagged on `"type"`, matching the wire
//! format delivered by the metadata service.

use serde::{Deserialize, Serialize};

use crate::schema::field::Field;
use crate::schema::panel::{
    Panel, PanelDashlet, PanelInclude, PanelMail, PanelRelated, PanelStack, PanelTabs,
};

// ---------------------------------------------------------------------------
// WidgetAttrs
// ---------------------------------------------------------------------------

/// Presentation-control attributes shared by every widget node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetAttrs {
    /// Widget name; required for fields (bound attribute), optional elsewhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_title: Option<bool>,
    /// Statically hidden.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    /// Statically readonly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readonly: Option<bool>,
    /// Show when this expression is truthy against the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_if: Option<String>,
    /// Hide when this expression is truthy against the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_if: Option<String>,
    /// Readonly when this expression is truthy against the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readonly_if: Option<String>,
    /// Comma-separated attribute names this widget depends on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depends: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col_span: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col_offset: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    /// Title derived by the server when none is given explicitly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_title: Option<String>,
}

impl WidgetAttrs {
    /// Create empty attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attributes with only a name set.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Leaf widgets
// ---------------------------------------------------------------------------

/// An action button.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Button {
    #[serde(flatten)]
    pub attrs: WidgetAttrs,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_hover: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Confirmation message shown before the action runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    /// Action expression executed on click.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_click: Option<String>,
    /// Renderable-implementation override name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widget: Option<String>,
}

/// A standalone text label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Label {
    #[serde(flatten)]
    pub attrs: WidgetAttrs,
}

/// An empty layout cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Spacer {
    #[serde(flatten)]
    pub attrs: WidgetAttrs,
}

/// A horizontal separator line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Separator {
    #[serde(flatten)]
    pub attrs: WidgetAttrs,
}

/// Static (possibly templated) text content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Static {
    #[serde(flatten)]
    pub attrs: WidgetAttrs,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// An inline help block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Help {
    #[serde(flatten)]
    pub attrs: WidgetAttrs,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// The message timeline inside a mail panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MailMessages {
    #[serde(flatten)]
    pub attrs: WidgetAttrs,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// The followers list inside a mail panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MailFollowers {
    #[serde(flatten)]
    pub attrs: WidgetAttrs,
}

// ---------------------------------------------------------------------------
// WidgetNode
// ---------------------------------------------------------------------------

/// The closed union of widget kinds.
///
/// The discriminant is the wire-level `"type"` attribute; it is fixed at
/// construction and renderers only ever read the tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum WidgetNode {
    Field(Field),
    Button(Button),
    Label(Label),
    Spacer(Spacer),
    Separator(Separator),
    Static(Static),
    Help(Help),
    Panel(Panel),
    PanelRelated(PanelRelated),
    PanelDashlet(PanelDashlet),
    PanelInclude(PanelInclude),
    PanelTabs(PanelTabs),
    PanelStack(PanelStack),
    PanelMail(PanelMail),
    MailMessages(MailMessages),
    MailFollowers(MailFollowers),
}

impl WidgetNode {
    /// The wire-level kind name of this node (its `"type"` discriminant).
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Field(_) => "field",
            Self::Button(_) => "button",
            Self::Label(_) => "label",
            Self::Spacer(_) => "spacer",
            Self::Separator(_) => "separator",
            Self::Static(_) => "static",
            Self::Help(_) => "help",
            Self::Panel(_) => "panel",
            Self::PanelRelated(_) => "panel-related",
            Self::PanelDashlet(_) => "panel-dashlet",
            Self::PanelInclude(_) => "panel-include",
            Self::PanelTabs(_) => "panel-tabs",
            Self::PanelStack(_) => "panel-stack",
            Self::PanelMail(_) => "panel-mail",
            Self::MailMessages(_) => "mail-messages",
            Self::MailFollowers(_) => "mail-followers",
        }
    }

    /// Shared base attributes of this node.
    pub fn attrs(&self) -> &WidgetAttrs {
        match self {
            Self::Field(w) => &w.attrs,
            Self::Button(w) => &w.attrs,
            Self::Label(w) => &w.attrs,
            Self::Spacer(w) => &w.attrs,
            Self::Separator(w) => &w.attrs,
            Self::Static(w) => &w.attrs,
            Self::Help(w) => &w.attrs,
            Self::Panel(w) => &w.attrs,
            Self::PanelRelated(w) => &w.attrs,
            Self::PanelDashlet(w) => &w.attrs,
            Self::PanelInclude(w) => &w.attrs,
            Self::PanelTabs(w) => &w.attrs,
            Self::PanelStack(w) => &w.attrs,
            Self::PanelMail(w) => &w.attrs,
            Self::MailMessages(w) => &w.attrs,
            Self::MailFollowers(w) => &w.attrs,
        }
    }

    /// The node's name, when one is set.
    pub fn name(&self) -> Option<&str> {
        self.attrs().name.as_deref()
    }

    /// The explicit renderable-implementation override, when present.
    pub fn widget_override(&self) -> Option<&str> {
        match self {
            Self::Field(w) => w.widget.as_deref(),
            Self::Button(w) => w.widget.as_deref(),
            _ => None,
        }
    }

    /// The widget-kind name used for registry lookup: the explicit `widget`
    /// override if present, else the node's `"type"` discriminant.
    pub fn widget_kind(&self) -> &str {
        self.widget_override().unwrap_or_else(|| self.kind())
    }

    /// Ordered child widgets; empty for leaves. Order is significant and
    /// preserved verbatim from the source document.
    pub fn children(&self) -> &[WidgetNode] {
        match self {
            Self::Panel(w) => &w.items,
            Self::PanelRelated(w) => &w.items,
            Self::PanelDashlet(w) => &w.items,
            Self::PanelInclude(w) => &w.items,
            Self::PanelTabs(w) => &w.items,
            Self::PanelStack(w) => &w.items,
            Self::PanelMail(w) => &w.items,
            _ => &[],
        }
    }

    /// This node as a field, when it is one.
    pub fn as_field(&self) -> Option<&Field> {
        match self {
            Self::Field(f) => Some(f),
            _ => None,
        }
    }

    /// Whether this node is a container (carries child widgets).
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            Self::Panel(_)
                | Self::PanelRelated(_)
                | Self::PanelDashlet(_)
                | Self::PanelInclude(_)
                | Self::PanelTabs(_)
                | Self::PanelStack(_)
                | Self::PanelMail(_)
        )
    }
}

// ===========================================================================
// Tests
// ===========================================================================

//! The view schema model: typed, nested, immutable view metadata.
//!
//! Schemas are produced upstream (by the metadata service), deserialized
//! once per view load, and only ever read by renderers. The model splits
//! into the widget family ([`widget::WidgetNode`], a closed tagged union
//! over leaf widgets and containers) and the view family ([`view::View`],
//! keyed by the `"type"` discriminant), with [`property::Property`]
//! describing the *data* shape as opposed to the widget *presentation*.

pub mod field;
pub mod hilite;
pub mod load;
pub mod panel;
pub mod property;
pub mod view;
pub mod widget;

pub use field::{Editor, Field, Selection, Tooltip, Viewer};
pub use hilite::Hilite;
pub use load::{parse_view, parse_widget, SchemaError};
pub use panel::{
    Menu, MenuItem, Panel, PanelDashlet, PanelInclude, PanelMail, PanelRelated, PanelStack,
    PanelTabs, Perms,
};
pub use property::{Property, PropertyType};
pub use view::{
    CalendarView, CardsView, ChartView, CustomView, DashboardView, FormView, GanttView,
    GridView, KanbanView, SearchFiltersView, SearchView, TreeView, View, ViewBase,
};
pub use widget::{WidgetAttrs, WidgetNode};

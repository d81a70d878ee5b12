//! Top-level views: the closed union keyed by the `"type"` discriminant.
//!
//! A view is constructed once per view load, treated as immutable for the
//! lifetime of that view session, and discarded on unmount. Renderers hold
//! non-owning references into the tree and never mutate it.

use serde::{Deserialize, Serialize};

use crate::schema::field::Field;
use crate::schema::hilite::Hilite;
use crate::schema::panel::Menu;
use crate::schema::widget::{Button, WidgetNode};

// ---------------------------------------------------------------------------
// ViewBase
// ---------------------------------------------------------------------------

/// Attributes shared by every view variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewBase {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Target entity name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editable: Option<bool>,
    /// Comma-separated group codes allowed to use the view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xml_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_id: Option<i64>,
    /// Ordered child widgets; order determines layout and tab order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<WidgetNode>,
}

// ---------------------------------------------------------------------------
// View
// ---------------------------------------------------------------------------

/// The closed union of view kinds, keyed by the `"type"` discriminant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum View {
    #[serde(rename = "grid")]
    Grid(GridView),
    #[serde(rename = "form")]
    Form(FormView),
    #[serde(rename = "cards")]
    Cards(CardsView),
    #[serde(rename = "tree")]
    Tree(TreeView),
    #[serde(rename = "chart")]
    Chart(ChartView),
    #[serde(rename = "kanban")]
    Kanban(KanbanView),
    #[serde(rename = "calendar")]
    Calendar(CalendarView),
    #[serde(rename = "gantt")]
    Gantt(GanttView),
    #[serde(rename = "custom")]
    Custom(CustomView),
    #[serde(rename = "dashboard")]
    Dashboard(DashboardView),
    #[serde(rename = "search")]
    Search(SearchView),
    #[serde(rename = "search-filters")]
    SearchFilters(SearchFiltersView),
}

impl View {
    /// The wire-level view type name (the `"type"` discriminant).
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Grid(_) => "grid",
            Self::Form(_) => "form",
            Self::Cards(_) => "cards",
            Self::Tree(_) => "tree",
            Self::Chart(_) => "chart",
            Self::Kanban(_) => "kanban",
            Self::Calendar(_) => "calendar",
            Self::Gantt(_) => "gantt",
            Self::Custom(_) => "custom",
            Self::Dashboard(_) => "dashboard",
            Self::Search(_) => "search",
            Self::SearchFilters(_) => "search-filters",
        }
    }

    /// Shared base attributes of this view.
    pub fn base(&self) -> &ViewBase {
        match self {
            Self::Grid(v) => &v.base,
            Self::Form(v) => &v.base,
            Self::Cards(v) => &v.base,
            Self::Tree(v) => &v.base,
            Self::Chart(v) => &v.base,
            Self::Kanban(v) => &v.base,
            Self::Calendar(v) => &v.base,
            Self::Gantt(v) => &v.base,
            Self::Custom(v) => &v.base,
            Self::Dashboard(v) => &v.base,
            Self::Search(v) => &v.base,
            Self::SearchFilters(v) => &v.base,
        }
    }

    /// The target entity name, when set.
    pub fn model(&self) -> Option<&str> {
        self.base().model.as_deref()
    }

    /// Ordered child widgets.
    pub fn items(&self) -> &[WidgetNode] {
        &self.base().items
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A tabular view over a collection of records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridView {
    #[serde(flatten)]
    pub base: ViewBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expandable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sortable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_search: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_new: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_new: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_edit: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_save: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_delete: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_archive: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_move: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_icon: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toolbar: Option<Vec<Button>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menubar: Option<Vec<Menu>>,
    /// Row-level conditional styling; first truthy condition wins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hilites: Option<Vec<Hilite>>,
}

impl GridView {
    /// The row hilite rules, empty when none are defined.
    pub fn hilite_rules(&self) -> &[Hilite] {
        self.hilites.as_deref().unwrap_or(&[])
    }
}

// ---------------------------------------------------------------------------
// Form
// ---------------------------------------------------------------------------

/// A single-record editing view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormView {
    #[serde(flatten)]
    pub base: ViewBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_load: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_save: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_new: Option<String>,
    /// The whole form is readonly when this expression is truthy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readonly_if: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_new: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_edit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_save: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_delete: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_archive: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_copy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_attach: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toolbar: Option<Vec<Button>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menubar: Option<Vec<Menu>>,
}

// ---------------------------------------------------------------------------
// Cards
// ---------------------------------------------------------------------------

/// A templated card-per-record view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardsView {
    #[serde(flatten)]
    pub base: ViewBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_window: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_new: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_edit: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_delete: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hilites: Option<Vec<Hilite>>,
}

// ---------------------------------------------------------------------------
// Tree
// ---------------------------------------------------------------------------

/// One level of a tree view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Parent reference field linking this level to the one above.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_click: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draggable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<WidgetNode>,
}

/// A column of a tree view. Columns reuse the field shape.
pub type TreeColumn = Field;

/// A hierarchical multi-model view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeView {
    #[serde(flatten)]
    pub base: ViewBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_header: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<TreeColumn>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes: Option<Vec<TreeNode>>,
}

// ---------------------------------------------------------------------------
// Chart
// ---------------------------------------------------------------------------

/// The x-axis of a chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartCategory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// One plotted series of a chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_by: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Axis side (left/right) for dual-axis charts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<u32>,
}

/// A name/value configuration entry of a chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// A contextual action offered by a chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartAction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

/// An aggregated charting view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartView {
    #[serde(flatten)]
    pub base: ViewBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stacked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_init: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ChartCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<Vec<ChartSeries>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Vec<ChartConfig>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<ChartAction>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_fields: Option<Vec<Field>>,
}

// ---------------------------------------------------------------------------
// Kanban / Calendar / Gantt
// ---------------------------------------------------------------------------

/// A board view with one column per selection value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KanbanView {
    #[serde(flatten)]
    pub base: ViewBase,
    /// Field whose value places a record in a column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_by: Option<String>,
    /// Field ordering records inside a column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draggable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_new: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_move: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<crate::schema::field::Selection>>,
}

/// A calendar view over records with start/stop fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarView {
    #[serde(flatten)]
    pub base: ViewBase,
    /// Initial display mode (month, week, day).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// Field whose value colors events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_change: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_stop: Option<String>,
    /// Default event length in hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_length: Option<u32>,
    /// Working-day length in hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_length: Option<u32>,
}

/// A project-planning view over task records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GanttView {
    #[serde(flatten)]
    pub base: ViewBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_parent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_sequence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_progress: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_user: Option<String>,
    /// Task-dependency field names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_to_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_to_finish: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_to_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_to_finish: Option<String>,
}

// ---------------------------------------------------------------------------
// Custom / Dashboard
// ---------------------------------------------------------------------------

/// A free-form templated view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomView {
    #[serde(flatten)]
    pub base: ViewBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

/// A dashboard of dashlet panels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    #[serde(flatten)]
    pub base: ViewBase,
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// A cross-model search view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchView {
    #[serde(flatten)]
    pub base: ViewBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_form: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_fields: Option<Vec<Field>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_fields: Option<Vec<Field>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buttons: Option<Vec<Button>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hilites: Option<Vec<Hilite>>,
}

/// A named domain filter offered by a search-filters view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<SearchContext>,
}

/// A context variable attached to a search filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// A view declaring reusable search filters for another view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFiltersView {
    #[serde(flatten)]
    pub base: ViewBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<SearchFilter>>,
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_grid_view() {
        let view: View = serde_json::from_str(
            r#"{
                "type": "grid",
                "model": "com.app.Order",
                "orderBy": "-date",
                "groupBy": "customer",
                "items": [
                    {"type": "field", "name": "name"},
                    {"type": "field", "name": "amount"}
                ],
                "hilites": [
                    {"condition": "amount > 1000", "background": "warning"}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(view.type_name(), "grid");
        assert_eq!(view.model(), Some("com.app.Order"));
        assert_eq!(view.items().len(), 2);
        let View::Grid(grid) = &view else {
            panic!("expected grid");
        };
        assert_eq!(grid.order_by.as_deref(), Some("-date"));
        assert_eq!(grid.hilite_rules().len(), 1);
    }

    #[test]
    fn deserialize_form_view() {
        let view: View = serde_json::from_str(
            r#"{
                "type": "form",
                "model": "com.app.Order",
                "onSave": "validate-order",
                "readonlyIf": "status == 'closed'",
                "items": [
                    {"type": "panel", "title": "Main", "items": [
                        {"type": "field", "name": "name"}
                    ]}
                ]
            }"#,
        )
        .unwrap();
        let View::Form(form) = &view else {
            panic!("expected form");
        };
        assert_eq!(form.on_save.as_deref(), Some("validate-order"));
        assert_eq!(form.readonly_if.as_deref(), Some("status == 'closed'"));
        assert_eq!(view.items()[0].kind(), "panel");
    }

    #[test]
    fn deserialize_chart_view() {
        let view: View = serde_json::from_str(
            r#"{
                "type": "chart",
                "title": "Sales per month",
                "category": {"key": "month", "type": "month"},
                "series": [
                    {"key": "amount", "type": "bar", "aggregate": "sum"}
                ]
            }"#,
        )
        .unwrap();
        let View::Chart(chart) = &view else {
            panic!("expected chart");
        };
        assert_eq!(
            chart.category.as_ref().and_then(|c| c.key.as_deref()),
            Some("month")
        );
        let series = chart.series.as_ref().unwrap();
        assert_eq!(series[0].aggregate.as_deref(), Some("sum"));
    }

    #[test]
    fn deserialize_gantt_view() {
        let view: View = serde_json::from_str(
            r#"{
                "type": "gantt",
                "taskStart": "startDate",
                "taskDuration": "duration",
                "finishToStart": "blockedBy"
            }"#,
        )
        .unwrap();
        let View::Gantt(gantt) = &view else {
            panic!("expected gantt");
        };
        assert_eq!(gantt.task_start.as_deref(), Some("startDate"));
        assert_eq!(gantt.finish_to_start.as_deref(), Some("blockedBy"));
    }

    #[test]
    fn deserialize_kanban_view() {
        let view: View = serde_json::from_str(
            r#"{
                "type": "kanban",
                "columnBy": "status",
                "sequenceBy": "priority",
                "columns": [{"value": "todo", "title": "To do"}]
            }"#,
        )
        .unwrap();
        let View::Kanban(kanban) = &view else {
            panic!("expected kanban");
        };
        assert_eq!(kanban.column_by.as_deref(), Some("status"));
        assert_eq!(kanban.columns.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn deserialize_search_filters() {
        let view: View = serde_json::from_str(
            r#"{
                "type": "search-filters",
                "model": "com.app.Order",
                "filters": [
                    {"name": "open", "title": "Open", "domain": "self.status = 'open'"}
                ]
            }"#,
        )
        .unwrap();
        let View::SearchFilters(sf) = &view else {
            panic!("expected search-filters");
        };
        assert_eq!(sf.filters.as_ref().unwrap()[0].name.as_deref(), Some("open"));
    }

    #[test]
    fn view_missing_type_fails() {
        let res = serde_json::from_str::<View>(r#"{"model": "com.app.Order"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn view_unknown_type_fails() {
        let res = serde_json::from_str::<View>(r#"{"type": "portal"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn round_trip_all_variants() {
        let inputs = [
            r#"{"type": "grid", "model": "M", "items": [{"type": "field", "name": "a"}]}"#,
            r#"{"type": "form", "model": "M"}"#,
            r#"{"type": "cards", "template": "<>{name}</>"}"#,
            r#"{"type": "tree", "nodes": [{"model": "M", "items": [{"type": "field", "name": "a"}]}]}"#,
            r#"{"type": "chart", "series": [{"key": "x"}]}"#,
            r#"{"type": "kanban", "columnBy": "status"}"#,
            r#"{"type": "calendar", "eventStart": "from"}"#,
            r#"{"type": "gantt", "taskStart": "from"}"#,
            r#"{"type": "custom", "template": "<>"}"#,
            r#"{"type": "dashboard", "items": [{"type": "panel-dashlet", "action": "a"}]}"#,
            r#"{"type": "search", "limit": 50}"#,
            r#"{"type": "search-filters", "filters": [{"name": "f"}]}"#,
        ];
        for input in inputs {
            let view: View = serde_json::from_str(input).unwrap();
            let json = serde_json::to_string(&view).unwrap();
            let back: View = serde_json::from_str(&json).unwrap();
            assert_eq!(view, back, "round trip failed for {input}");
        }
    }
}

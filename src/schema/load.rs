//! Schema ingestion: JSON parsing with discriminant validation.
//!
//! Loading is a two-phase pass: the document is first parsed to a raw JSON
//! tree and walked to check discriminants — reporting the path of the first
//! offending node — then deserialized into the typed model. Malformed nodes
//! fail fast; there is no partial recovery. Unknown extra attributes are
//! ignored throughout.

use serde_json::Value;

use crate::schema::view::View;
use crate::schema::widget::WidgetNode;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A load-time schema error, pointing at the offending node.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected an object at {path}")]
    NotAnObject { path: String },
    #[error("missing \"type\" discriminant at {path}")]
    MissingType { path: String },
    #[error("unknown kind {kind:?} at {path}")]
    UnknownKind { path: String, kind: String },
    #[error("field at {path} is missing required \"name\"")]
    MissingFieldName { path: String },
}

// ---------------------------------------------------------------------------
// Known kinds
// ---------------------------------------------------------------------------

/// The closed set of view discriminants.
pub const VIEW_KINDS: &[&str] = &[
    "grid",
    "form",
    "cards",
    "tree",
    "chart",
    "kanban",
    "calendar",
    "gantt",
    "custom",
    "dashboard",
    "search",
    "search-filters",
];

/// The closed set of widget discriminants.
pub const WIDGET_KINDS: &[&str] = &[
    "field",
    "button",
    "label",
    "spacer",
    "separator",
    "static",
    "help",
    "panel",
    "panel-related",
    "panel-dashlet",
    "panel-include",
    "panel-tabs",
    "panel-stack",
    "panel-mail",
    "mail-messages",
    "mail-followers",
];

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse a top-level view from a JSON document.
pub fn parse_view(json: &str) -> Result<View, SchemaError> {
    let value: Value = serde_json::from_str(json)?;
    validate_view(&value, "$")?;
    Ok(serde_json::from_value(value)?)
}

/// Parse a single widget node from a JSON document.
pub fn parse_widget(json: &str) -> Result<WidgetNode, SchemaError> {
    let value: Value = serde_json::from_str(json)?;
    validate_widget(&value, "$")?;
    Ok(serde_json::from_value(value)?)
}

/// Validate a raw view document's discriminants, reporting node paths.
pub fn validate_view(value: &Value, path: &str) -> Result<(), SchemaError> {
    let obj = value.as_object().ok_or_else(|| SchemaError::NotAnObject {
        path: path.to_owned(),
    })?;
    let kind = discriminant(obj, path)?;
    if !VIEW_KINDS.contains(&kind) {
        return Err(SchemaError::UnknownKind {
            path: path.to_owned(),
            kind: kind.to_owned(),
        });
    }
    // Tree levels carry their own widget lists outside `items`.
    if let Some(Value::Array(nodes)) = obj.get("nodes") {
        for (i, node) in nodes.iter().enumerate() {
            if let Some(node_obj) = node.as_object() {
                validate_items(node_obj, &format!("{path}.nodes[{i}]"))?;
            }
        }
    }
    validate_items(obj, path)
}

/// Validate a raw widget node's discriminants, reporting node paths.
pub fn validate_widget(value: &Value, path: &str) -> Result<(), SchemaError> {
    let obj = value.as_object().ok_or_else(|| SchemaError::NotAnObject {
        path: path.to_owned(),
    })?;
    let kind = discriminant(obj, path)?;
    if !WIDGET_KINDS.contains(&kind) {
        return Err(SchemaError::UnknownKind {
            path: path.to_owned(),
            kind: kind.to_owned(),
        });
    }
    if kind == "field" && !has_name(obj) {
        return Err(SchemaError::MissingFieldName {
            path: path.to_owned(),
        });
    }
    // Included views carry a whole nested view document.
    if kind == "panel-include" {
        if let Some(view) = obj.get("view") {
            validate_view(view, &format!("{path}.view"))?;
        }
    }
    if let Some(Value::Object(editor)) = obj.get("editor") {
        validate_items(editor, &format!("{path}.editor"))?;
    }
    validate_items(obj, path)
}

fn validate_items(
    obj: &serde_json::Map<String, Value>,
    path: &str,
) -> Result<(), SchemaError> {
    if let Some(Value::Array(items)) = obj.get("items") {
        for (i, item) in items.iter().enumerate() {
            validate_widget(item, &format!("{path}.items[{i}]"))?;
        }
    }
    Ok(())
}

fn discriminant<'a>(
    obj: &'a serde_json::Map<String, Value>,
    path: &str,
) -> Result<&'a str, SchemaError> {
    obj.get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| SchemaError::MissingType {
            path: path.to_owned(),
        })
}

fn has_name(obj: &serde_json::Map<String, Value>) -> bool {
    obj.get("name").and_then(Value::as_str).is_some_and(|n| !n.is_empty())
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_grid() {
        let view = parse_view(
            r#"{"type": "grid", "model": "M", "items": [{"type": "field", "name": "a"}]}"#,
        )
        .unwrap();
        assert_eq!(view.type_name(), "grid");
    }

    #[test]
    fn missing_view_type_reports_root() {
        let err = parse_view(r#"{"model": "M"}"#).unwrap_err();
        match err {
            SchemaError::MissingType { path } => assert_eq!(path, "$"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_view_kind_reports_kind() {
        let err = parse_view(r#"{"type": "portal"}"#).unwrap_err();
        match err {
            SchemaError::UnknownKind { path, kind } => {
                assert_eq!(path, "$");
                assert_eq!(kind, "portal");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_item_type_reports_nested_path() {
        let err = parse_view(
            r#"{
                "type": "form",
                "items": [
                    {"type": "panel", "items": [
                        {"type": "field", "name": "a"},
                        {"name": "b"}
                    ]}
                ]
            }"#,
        )
        .unwrap_err();
        match err {
            SchemaError::MissingType { path } => {
                assert_eq!(path, "$.items[0].items[1]");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn field_without_name_is_rejected() {
        let err = parse_view(
            r#"{"type": "grid", "items": [{"type": "field"}]}"#,
        )
        .unwrap_err();
        match err {
            SchemaError::MissingFieldName { path } => {
                assert_eq!(path, "$.items[0]");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn field_with_empty_name_is_rejected() {
        let err = parse_view(
            r#"{"type": "grid", "items": [{"type": "field", "name": ""}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, SchemaError::MissingFieldName { .. }));
    }

    #[test]
    fn editor_items_are_validated() {
        let err = parse_view(
            r#"{
                "type": "form",
                "items": [
                    {"type": "field", "name": "address", "editor": {
                        "items": [{"type": "field"}]
                    }}
                ]
            }"#,
        )
        .unwrap_err();
        match err {
            SchemaError::MissingFieldName { path } => {
                assert_eq!(path, "$.items[0].editor.items[0]");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn tree_node_items_are_validated() {
        let err = parse_view(
            r#"{
                "type": "tree",
                "nodes": [
                    {"model": "M", "items": [{"type": "field"}]}
                ]
            }"#,
        )
        .unwrap_err();
        match err {
            SchemaError::MissingFieldName { path } => {
                assert_eq!(path, "$.nodes[0].items[0]");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn included_view_is_validated() {
        let err = parse_view(
            r#"{
                "type": "form",
                "items": [
                    {"type": "panel-include", "view": {"model": "M"}}
                ]
            }"#,
        )
        .unwrap_err();
        match err {
            SchemaError::MissingType { path } => {
                assert_eq!(path, "$.items[0].view");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parse_widget_standalone() {
        let node = parse_widget(r#"{"type": "field", "name": "x"}"#).unwrap();
        assert_eq!(node.kind(), "field");
        assert!(parse_widget(r#"{"type": "field"}"#).is_err());
    }

    #[test]
    fn invalid_json_is_reported() {
        let err = parse_view("{not json").unwrap_err();
        assert!(matches!(err, SchemaError::Json(_)));
    }

    #[test]
    fn non_object_root_is_rejected() {
        let err = parse_view("[1, 2]").unwrap_err();
        assert!(matches!(err, SchemaError::NotAnObject { .. }));
    }
}

//! Record model shared by the evaluators and widgets.
//!
//! Records arrive from an upstream data layer as JSON objects. The core never
//! mutates a record; evaluators read attribute values out of it and widgets
//! bind to individual attributes through value cells.

use serde_json::Value;

/// One data row, keyed by attribute name.
pub type DataRecord = serde_json::Map<String, Value>;

/// Truthiness coercion for expression results and hilite conditions.
///
/// Follows the source expression language's coercion rules: `null`, `false`,
/// numeric zero and the empty string are falsy; everything else (including
/// empty arrays and objects) is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

// ===========================================================================
// Tests
// ===========================================================================

//! Resolution of conditional widget attributes against a record.
//!
//! A widget's effective visibility/editability combines its static flags
//! with the `showIf`/`hideIf`/`readonlyIf` expressions evaluated per-record.
//! Evaluator errors fail open here: a failing expression contributes
//! nothing, leaving the static flag in effect.

use crate::data::DataRecord;
use crate::eval::expr::ExpressionEvaluator;
use crate::schema::field::Field;
use crate::schema::widget::WidgetAttrs;

/// The effective per-record state of a widget's conditional attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolvedAttrs {
    pub hidden: bool,
    pub readonly: bool,
}

/// Resolve `hidden` and `readonly` for a widget against a record.
pub fn resolve_attrs(
    attrs: &WidgetAttrs,
    record: &DataRecord,
    evaluator: &dyn ExpressionEvaluator,
) -> ResolvedAttrs {
    let mut hidden = attrs.hidden.unwrap_or(false);
    if let Some(show_if) = &attrs.show_if {
        if let Ok(shown) = evaluator.evaluate_bool(show_if, record) {
            hidden = hidden || !shown;
        }
    }
    if let Some(hide_if) = &attrs.hide_if {
        if let Ok(hide) = evaluator.evaluate_bool(hide_if, record) {
            hidden = hidden || hide;
        }
    }

    let mut readonly = attrs.readonly.unwrap_or(false);
    if let Some(readonly_if) = &attrs.readonly_if {
        if let Ok(ro) = evaluator.evaluate_bool(readonly_if, record) {
            readonly = readonly || ro;
        }
    }

    ResolvedAttrs { hidden, readonly }
}

/// Resolve whether a field is required against a record.
pub fn resolve_required(
    field: &Field,
    record: &DataRecord,
    evaluator: &dyn ExpressionEvaluator,
) -> bool {
    let mut required = field.required.unwrap_or(false);
    if let Some(required_if) = &field.required_if {
        if let Ok(req) = evaluator.evaluate_bool(required_if, record) {
            required = required || req;
        }
    }
    required
}

/// Resolve whether a field's current value is valid against a record.
///
/// A field with no `validIf` expression is always valid.
pub fn resolve_valid(
    field: &Field,
    record: &DataRecord,
    evaluator: &dyn ExpressionEvaluator,
) -> bool {
    match &field.valid_if {
        Some(valid_if) => evaluator.evaluate_bool(valid_if, record).unwrap_or(true),
        None => true,
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::expr::EvalError;
    use serde_json::{json, Value};

    fn record(active: bool) -> DataRecord {
        let Value::Object(map) = json!({"active": active}) else {
            unreachable!()
        };
        map
    }

    /// Evaluator resolving bare attribute names, erroring on "boom".
    fn lookup() -> impl ExpressionEvaluator {
        |expr: &str, record: &DataRecord| -> Result<Value, EvalError> {
            if expr == "boom" {
                return Err(EvalError::new(expr, "boom"));
            }
            Ok(record.get(expr).cloned().unwrap_or(Value::Null))
        }
    }

    #[test]
    fn static_flags_pass_through() {
        let attrs = WidgetAttrs {
            hidden: Some(true),
            readonly: Some(true),
            ..WidgetAttrs::default()
        };
        let r = resolve_attrs(&attrs, &record(true), &lookup());
        assert!(r.hidden);
        assert!(r.readonly);
    }

    #[test]
    fn show_if_false_hides() {
        let attrs = WidgetAttrs {
            show_if: Some("active".into()),
            ..WidgetAttrs::default()
        };
        assert!(!resolve_attrs(&attrs, &record(true), &lookup()).hidden);
        assert!(resolve_attrs(&attrs, &record(false), &lookup()).hidden);
    }

    #[test]
    fn hide_if_true_hides() {
        let attrs = WidgetAttrs {
            hide_if: Some("active".into()),
            ..WidgetAttrs::default()
        };
        assert!(resolve_attrs(&attrs, &record(true), &lookup()).hidden);
        assert!(!resolve_attrs(&attrs, &record(false), &lookup()).hidden);
    }

    #[test]
    fn readonly_if_true_locks() {
        let attrs = WidgetAttrs {
            readonly_if: Some("active".into()),
            ..WidgetAttrs::default()
        };
        assert!(resolve_attrs(&attrs, &record(true), &lookup()).readonly);
        assert!(!resolve_attrs(&attrs, &record(false), &lookup()).readonly);
    }

    #[test]
    fn evaluator_error_fails_open() {
        let attrs = WidgetAttrs {
            hide_if: Some("boom".into()),
            readonly_if: Some("boom".into()),
            ..WidgetAttrs::default()
        };
        let r = resolve_attrs(&attrs, &record(true), &lookup());
        assert!(!r.hidden);
        assert!(!r.readonly);
    }

    #[test]
    fn required_if_combines_with_static() {
        let mut field = Field::new("x");
        field.required_if = Some("active".into());
        assert!(resolve_required(&field, &record(true), &lookup()));
        assert!(!resolve_required(&field, &record(false), &lookup()));
        field.required = Some(true);
        assert!(resolve_required(&field, &record(false), &lookup()));
    }

    #[test]
    fn valid_if_defaults_to_valid() {
        let field = Field::new("x");
        assert!(resolve_valid(&field, &record(true), &lookup()));
        let mut field = Field::new("x");
        field.valid_if = Some("active".into());
        assert!(!resolve_valid(&field, &record(false), &lookup()));
    }
}

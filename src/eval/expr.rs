//! The expression-evaluator boundary.
//!
//! The expression language itself (parser and interpreter) lives outside
//! this crate; the core passes expression strings through verbatim and only
//! needs boolean-coercible results for conditional attributes and hilite
//! conditions. Any closure with the right shape satisfies the trait.

use serde_json::Value;

use crate::data::{is_truthy, DataRecord};

// ---------------------------------------------------------------------------
// EvalError
// ---------------------------------------------------------------------------

/// An error raised by the external expression evaluator.
#[derive(Debug, Clone, thiserror::Error)]
#[error("failed to evaluate {expression:?}: {message}")]
pub struct EvalError {
    /// The expression that failed, verbatim.
    pub expression: String,
    /// The evaluator's own message.
    pub message: String,
}

impl EvalError {
    /// Create an error for the given expression.
    pub fn new(expression: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            message: message.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// ExpressionEvaluator
// ---------------------------------------------------------------------------

/// Evaluates an expression string against a record.
///
/// Implemented automatically for closures of the matching shape, so callers
/// can plug in anything from a full interpreter to a test stub.
pub trait ExpressionEvaluator {
    /// Evaluate `expression` against `record`.
    fn evaluate(&self, expression: &str, record: &DataRecord) -> Result<Value, EvalError>;

    /// Evaluate and coerce the result to a boolean.
    fn evaluate_bool(&self, expression: &str, record: &DataRecord) -> Result<bool, EvalError> {
        self.evaluate(expression, record).map(|v| is_truthy(&v))
    }
}

impl<F> ExpressionEvaluator for F
where
    F: Fn(&str, &DataRecord) -> Result<Value, EvalError>,
{
    fn evaluate(&self, expression: &str, record: &DataRecord) -> Result<Value, EvalError> {
        self(expression, record)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

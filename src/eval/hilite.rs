//! Hilite evaluation: first truthy condition in list order wins.
//!
//! Evaluation is pure: it never mutates the rules or the record, and
//! repeated calls over the same snapshot return the same rule. This runs
//! once per visible cell per render pass, so [`HiliteCache`] memoizes the
//! last result keyed by a cheap record-version token supplied by the
//! caller.

use crate::data::DataRecord;
use crate::eval::expr::ExpressionEvaluator;
use crate::schema::hilite::Hilite;

// ---------------------------------------------------------------------------
// ErrorPolicy
// ---------------------------------------------------------------------------

/// What to do when the expression evaluator errors on a rule condition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Skip the failing rule and continue with the rest of the list.
    #[default]
    FailOpen,
    /// Abort the whole list: no rule matches.
    FailClosed,
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Return the first rule whose condition is truthy against `record`.
///
/// A rule with no condition (or an empty one) is unconditionally truthy.
/// Returns `None` when no rule matches — callers apply no extra styling.
pub fn evaluate<'a>(
    rules: &'a [Hilite],
    record: &DataRecord,
    evaluator: &dyn ExpressionEvaluator,
    policy: ErrorPolicy,
) -> Option<&'a Hilite> {
    evaluate_index(rules, record, evaluator, policy).map(|i| &rules[i])
}

fn evaluate_index(
    rules: &[Hilite],
    record: &DataRecord,
    evaluator: &dyn ExpressionEvaluator,
    policy: ErrorPolicy,
) -> Option<usize> {
    for (i, rule) in rules.iter().enumerate() {
        let condition = match rule.condition.as_deref() {
            None | Some("") => return Some(i),
            Some(c) => c,
        };
        match evaluator.evaluate_bool(condition, record) {
            Ok(true) => return Some(i),
            Ok(false) => {}
            Err(_) => match policy {
                ErrorPolicy::FailOpen => {}
                ErrorPolicy::FailClosed => return None,
            },
        }
    }
    None
}

// ---------------------------------------------------------------------------
// HiliteCache
// ---------------------------------------------------------------------------

/// Per-cell memoization of the last hilite result.
///
/// The cache is keyed by a caller-supplied version token identifying the
/// record snapshot; a repeated version returns the previous result without
/// touching the evaluator. The rule list is assumed stable for the cell's
/// lifetime (schemas are immutable per view session).
#[derive(Debug, Default)]
pub struct HiliteCache {
    last: Option<(u64, Option<usize>)>,
}

impl HiliteCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate with memoization keyed by `version`.
    pub fn evaluate<'a>(
        &mut self,
        rules: &'a [Hilite],
        record: &DataRecord,
        version: u64,
        evaluator: &dyn ExpressionEvaluator,
        policy: ErrorPolicy,
    ) -> Option<&'a Hilite> {
        if let Some((cached_version, index)) = self.last {
            if cached_version == version {
                return index.and_then(|i| rules.get(i));
            }
        }
        let index = evaluate_index(rules, record, evaluator, policy);
        self.last = Some((version, index));
        index.map(|i| &rules[i])
    }

    /// Drop the memoized result.
    pub fn invalidate(&mut self) {
        self.last = None;
    }
}

// ===========================================================================
// Tests
// ===========================================================================

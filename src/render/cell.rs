//! Grid-cell composition: registry resolution plus hilite styling.
//!
//! A [`GridCell`] is the per-cell state a grid row keeps between render
//! passes. Each pass feeds it the current [`CellProps`] and gets back a
//! [`CellView`]: what to draw and how to style it. While the widget
//! implementation is still loading the cell draws nothing; a failed or
//! unregistered widget kind falls back to the caller's default content so
//! one bad kind never blanks the column.

use crate::data::DataRecord;
use crate::eval::expr::ExpressionEvaluator;
use crate::eval::hilite::{ErrorPolicy, HiliteCache};
use crate::registry::{Resolution, WidgetRegistry};
use crate::render::content::Content;
use crate::schema::hilite::Hilite;
use crate::schema::widget::WidgetNode;
use crate::value::ValueCell;
use crate::widget::FieldContext;

// ---------------------------------------------------------------------------
// Class merging
// ---------------------------------------------------------------------------

/// Merge two space-separated class lists, in order, skipping blanks.
pub fn merge_class(base: Option<&str>, extra: Option<&str>) -> Option<String> {
    let mut merged = String::new();
    for part in [base, extra].into_iter().flatten() {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        if !merged.is_empty() {
            merged.push(' ');
        }
        merged.push_str(part);
    }
    (!merged.is_empty()).then_some(merged)
}

// ---------------------------------------------------------------------------
// CellProps / CellView
// ---------------------------------------------------------------------------

/// Everything one render pass hands the cell.
pub struct CellProps<'a> {
    /// The column's schema node.
    pub schema: &'a WidgetNode,
    /// The row's record snapshot.
    pub record: &'a DataRecord,
    /// Version token identifying the snapshot; a repeated version reuses
    /// the memoized hilite result.
    pub version: u64,
    /// Shared value cell for the bound attribute.
    pub cell: ValueCell,
    /// Effective readonly state for this cell.
    pub readonly: bool,
    /// Class list the grid already assigns to the cell.
    pub class: Option<&'a str>,
    /// Rendered when the widget kind failed to load or was never
    /// registered.
    pub fallback: Content,
}

/// One render pass's output for a cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellView {
    pub content: Content,
    /// Merged class list (grid classes plus the matched rule's `css`).
    pub class: Option<String>,
    pub color: Option<String>,
    pub background: Option<String>,
    pub strong: bool,
}

impl CellView {
    fn styled(content: Content, class: Option<&str>, hilite: Option<&Hilite>) -> Self {
        Self {
            content,
            class: merge_class(class, hilite.and_then(|h| h.css.as_deref())),
            color: hilite.and_then(|h| h.color.clone()),
            background: hilite.and_then(|h| h.background.clone()),
            strong: hilite.and_then(|h| h.strong).unwrap_or(false),
        }
    }
}

// ---------------------------------------------------------------------------
// GridCell
// ---------------------------------------------------------------------------

/// Per-cell render state: memoized widget resolution plus hilite cache.
///
/// The widget kind is fixed by the schema for the cell's lifetime, so once
/// the registry reports a terminal outcome the cell never asks again.
/// While loading it keeps polling, rendering nothing in the meantime.
pub struct GridCell {
    registry: WidgetRegistry,
    /// `Some(outcome)` once terminal; the inner `None` marks an
    /// unregistered kind.
    resolved: Option<Option<Resolution>>,
    hilites: HiliteCache,
    policy: ErrorPolicy,
}

impl GridCell {
    /// Create a cell resolving widget kinds against `registry`.
    pub fn new(registry: WidgetRegistry) -> Self {
        Self {
            registry,
            resolved: None,
            hilites: HiliteCache::new(),
            policy: ErrorPolicy::default(),
        }
    }

    /// Override the hilite error policy (builder).
    pub fn with_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Render one pass.
    pub fn render(
        &mut self,
        props: CellProps<'_>,
        evaluator: &dyn ExpressionEvaluator,
    ) -> CellView {
        let content = self.content(&props);
        let rules = props
            .schema
            .as_field()
            .map(|f| f.hilite_rules())
            .unwrap_or(&[]);
        let hilite =
            self.hilites
                .evaluate(rules, props.record, props.version, evaluator, self.policy);
        CellView::styled(content, props.class, hilite)
    }

    fn content(&mut self, props: &CellProps<'_>) -> Content {
        // A plain field with no override is the common case; it renders
        // the default children without a registry round-trip.
        if matches!(props.schema, WidgetNode::Field(f) if f.widget.is_none()) {
            return props.fallback.clone();
        }
        match self.resolve(props.schema) {
            Some(Resolution::Ready(component)) => {
                let ctx = FieldContext::new(props.schema, props.readonly, props.cell.clone());
                component.render(&ctx)
            }
            Some(Resolution::Loading) => Content::Empty,
            Some(Resolution::Error) | None => props.fallback.clone(),
        }
    }

    fn resolve(&mut self, schema: &WidgetNode) -> Option<Resolution> {
        if let Some(outcome) = &self.resolved {
            return outcome.clone();
        }
        let outcome = self.registry.resolve(schema.widget_kind());
        let terminal = match &outcome {
            Some(res) => res.is_terminal(),
            None => true, // unregistered never becomes registered for this cell
        };
        if terminal {
            self.resolved = Some(outcome.clone());
        }
        outcome
    }
}

// ===========================================================================
// Tests
// ===========================================================================

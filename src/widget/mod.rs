//! The field-widget contract.
//!
//! Every concrete field implementation receives the schema node, a
//! `readonly` flag already resolved from the schema's static flag plus the
//! evaluated `readonlyIf`, and a handle to the shared value cell for its
//! bound attribute. Widgets read the current value through the cell and
//! write back through its single mutation entry point — never a private
//! copy that can diverge.

use std::rc::Rc;

use crate::data::DataRecord;
use crate::eval::attrs::resolve_attrs;
use crate::eval::expr::ExpressionEvaluator;
use crate::render::content::Content;
use crate::schema::field::Field;
use crate::schema::widget::WidgetNode;
use crate::value::ValueCell;

// ---------------------------------------------------------------------------
// FieldContext
// ---------------------------------------------------------------------------

/// Everything a field widget needs to render one schema node.
///
/// Holds a non-owning reference into the schema tree; contexts live no
/// longer than the view session that produced the schema.
pub struct FieldContext<'a> {
    /// The schema node being rendered.
    pub schema: &'a WidgetNode,
    /// Effective readonly state (static flag + evaluated `readonlyIf`).
    pub readonly: bool,
    /// Shared value cell for the bound attribute.
    pub cell: ValueCell,
}

impl<'a> FieldContext<'a> {
    /// Create a context with an already-resolved readonly flag.
    pub fn new(schema: &'a WidgetNode, readonly: bool, cell: ValueCell) -> Self {
        Self {
            schema,
            readonly,
            cell,
        }
    }

    /// Create a context resolving `readonly` from the node's attributes
    /// against the given record.
    pub fn resolved(
        schema: &'a WidgetNode,
        record: &DataRecord,
        evaluator: &dyn ExpressionEvaluator,
        cell: ValueCell,
    ) -> Self {
        let resolved = resolve_attrs(schema.attrs(), record, evaluator);
        Self::new(schema, resolved.readonly, cell)
    }

    /// The schema node as a field, when it is one.
    pub fn field(&self) -> Option<&'a Field> {
        self.schema.as_field()
    }

    /// Dispatch a user interaction to `widget`.
    ///
    /// Readonly enforcement happens here, at the contract boundary: when
    /// the context is readonly the handler is simply not invoked — a
    /// write attempt is a wiring bug, not a runtime error.
    pub fn interact(&self, widget: &dyn FieldWidget) {
        if !self.readonly {
            widget.interact(self);
        }
    }
}

// ---------------------------------------------------------------------------
// FieldWidget
// ---------------------------------------------------------------------------

/// The contract every concrete field implementation satisfies.
///
/// Object-safe: implementations are shared as [`Component`] handles through
/// the widget registry.
pub trait FieldWidget {
    /// The widget-kind name this implementation renders (e.g. "toggle").
    fn widget_type(&self) -> &str;

    /// Render the current value. Must read through `ctx.cell`; when the
    /// context is readonly the value is still displayed.
    fn render(&self, ctx: &FieldContext<'_>) -> Content;

    /// Handle one user interaction, writing any new value back through
    /// `ctx.cell`. Only invoked via [`FieldContext::interact`], which
    /// gates on the readonly flag. Defaults to a no-op for display-only
    /// widgets.
    fn interact(&self, ctx: &FieldContext<'_>) {
        let _ = ctx;
    }
}

/// A shared, resolved field-widget implementation.
pub type Component = Rc<dyn FieldWidget>;

// ===========================================================================
// Tests
// ===========================================================================

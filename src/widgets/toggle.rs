//! Toggle: a boolean field rendered as a tappable icon.

use serde_json::Value;

use crate::render::content::{Content, Icon};
use crate::widget::{FieldContext, FieldWidget};

const ICON_OFF: &str = "square";
const ICON_ON: &str = "check-square";

/// Boolean toggle bound to a boolean attribute.
///
/// Renders the field's `icon` while off and `iconActive` while on, falling
/// back to stock square/check-square icons when the schema names none. An
/// unset cell reads as off. Interaction flips the value through the cell;
/// readonly contexts still render the current state.
#[derive(Debug, Default)]
pub struct Toggle;

impl Toggle {
    /// The widget-kind name this implementation registers under.
    pub const NAME: &'static str = "toggle";

    pub fn new() -> Self {
        Self
    }

    fn is_on(ctx: &FieldContext<'_>) -> bool {
        ctx.cell.with(|v| v.as_bool().unwrap_or(false))
    }
}

impl FieldWidget for Toggle {
    fn widget_type(&self) -> &str {
        Self::NAME
    }

    fn render(&self, ctx: &FieldContext<'_>) -> Content {
        let field = ctx.field();
        let on = Self::is_on(ctx);
        let name = if on {
            // Without a dedicated active icon the field's own icon serves
            // both states.
            field
                .and_then(|f| f.icon_active.as_deref().or(f.icon.as_deref()))
                .unwrap_or(ICON_ON)
        } else {
            field.and_then(|f| f.icon.as_deref()).unwrap_or(ICON_OFF)
        };
        let state = Content::Icon(Icon::new(name));
        // The hover affordance carries no state of its own.
        match field.and_then(|f| f.icon_hover.as_deref()) {
            Some(hover) => Content::group(vec![
                state,
                Content::Icon(Icon::new(hover).decorative()),
            ]),
            None => state,
        }
    }

    fn interact(&self, ctx: &FieldContext<'_>) {
        ctx.cell.set(Value::Bool(!Self::is_on(ctx)));
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::field::Field;
    use crate::schema::widget::WidgetNode;
    use crate::value::ValueCell;
    use serde_json::json;

    fn checkbox() -> WidgetNode {
        let mut field = Field::new("confirmed");
        field.icon = Some("fa-square".into());
        field.icon_active = Some("fa-check-square".into());
        WidgetNode::Field(field)
    }

    #[test]
    fn renders_inactive_icon_when_off() {
        let node = checkbox();
        let ctx = FieldContext::new(&node, false, ValueCell::new(json!(false)));
        assert_eq!(Toggle.render(&ctx), Content::icon("fa-square"));
    }

    #[test]
    fn renders_active_icon_when_on() {
        let node = checkbox();
        let ctx = FieldContext::new(&node, false, ValueCell::new(json!(true)));
        assert_eq!(Toggle.render(&ctx), Content::icon("fa-check-square"));
    }

    #[test]
    fn unset_cell_reads_as_off() {
        let node = checkbox();
        let ctx = FieldContext::new(&node, false, ValueCell::unset());
        assert_eq!(Toggle.render(&ctx), Content::icon("fa-square"));
    }

    #[test]
    fn stock_icons_when_schema_names_none() {
        let node = WidgetNode::Field(Field::new("done"));
        let ctx = FieldContext::new(&node, false, ValueCell::new(json!(true)));
        assert_eq!(Toggle.render(&ctx), Content::icon("check-square"));
        let ctx = FieldContext::new(&node, false, ValueCell::new(json!(false)));
        assert_eq!(Toggle.render(&ctx), Content::icon("square"));
    }

    #[test]
    fn active_without_active_icon_keeps_the_field_icon() {
        let node = {
            let mut field = Field::new("starred");
            field.icon = Some("fa-star-o".into());
            WidgetNode::Field(field)
        };
        let ctx = FieldContext::new(&node, false, ValueCell::new(json!(true)));
        assert_eq!(Toggle.render(&ctx), Content::icon("fa-star-o"));
    }

    #[test]
    fn hover_icon_is_decorative() {
        let node = {
            let mut field = Field::new("starred");
            field.icon = Some("fa-star-o".into());
            field.icon_hover = Some("fa-star".into());
            WidgetNode::Field(field)
        };
        let ctx = FieldContext::new(&node, false, ValueCell::new(json!(false)));
        let Content::Group(parts) = Toggle.render(&ctx) else {
            panic!("expected a group");
        };
        assert_eq!(parts[0], Content::icon("fa-star-o"));
        assert_eq!(
            parts[1],
            Content::Icon(Icon::new("fa-star").decorative())
        );
    }

    #[test]
    fn interact_flips_the_value() {
        let node = checkbox();
        let ctx = FieldContext::new(&node, false, ValueCell::new(json!(false)));
        ctx.interact(&Toggle);
        assert_eq!(ctx.cell.get(), json!(true));
        ctx.interact(&Toggle);
        assert_eq!(ctx.cell.get(), json!(false));
    }

    #[test]
    fn interact_flips_an_unset_cell_to_true() {
        let node = checkbox();
        let ctx = FieldContext::new(&node, false, ValueCell::unset());
        ctx.interact(&Toggle);
        assert_eq!(ctx.cell.get(), json!(true));
    }

    #[test]
    fn readonly_keeps_the_value_but_still_renders() {
        let node = checkbox();
        let ctx = FieldContext::new(&node, true, ValueCell::new(json!(true)));
        ctx.interact(&Toggle);
        assert_eq!(ctx.cell.get(), json!(true));
        assert_eq!(Toggle.render(&ctx), Content::icon("fa-check-square"));
    }
}

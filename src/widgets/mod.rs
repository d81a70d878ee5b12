//! Built-in field widgets.

pub mod toggle;

pub use toggle::Toggle;

use std::rc::Rc;

use crate::registry::WidgetRegistry;

/// Register every built-in widget (eagerly, no loading phase).
pub fn register_builtins(registry: &WidgetRegistry) {
    registry.register_component(Toggle::NAME, Rc::new(Toggle::new()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_resolve_synchronously() {
        let registry = WidgetRegistry::new();
        register_builtins(&registry);
        let res = registry.resolve(Toggle::NAME).expect("registered");
        assert!(res.is_ready());
    }
}

//! Hilite: an ordered conditional styling rule.
//!
//! A hilite list is evaluated in list order against a record; the first rule
//! whose `condition` is truthy wins. List position is the only priority —
//! there is no priority field and no merging of multiple matches.

use serde::{Deserialize, Serialize};

/// One conditional styling rule.
///
/// A rule without a `condition` matches unconditionally, which makes it a
/// natural "default" entry at the end of a list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hilite {
    /// Boolean expression evaluated against the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    /// Foreground color name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Background color name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Render the cell content in bold.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strong: Option<bool>,
    /// Pre-composed css class, applied verbatim by the caller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css: Option<String>,
}

impl Hilite {
    /// Create an unconditional rule (matches every record).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the condition expression (builder).
    pub fn condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    /// Set the foreground color (builder).
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the background color (builder).
    pub fn background(mut self, background: impl Into<String>) -> Self {
        self.background = Some(background.into());
        self
    }

    /// Set the strong flag (builder).
    pub fn strong(mut self, strong: bool) -> Self {
        self.strong = Some(strong);
        self
    }

    /// Set the css class (builder).
    pub fn css(mut self, css: impl Into<String>) -> Self {
        self.css = Some(css.into());
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unconditional() {
        let h = Hilite::new();
        assert!(h.condition.is_none());
        assert!(h.css.is_none());
    }

    #[test]
    fn builder_chain() {
        let h = Hilite::new()
            .condition("amount > 1000")
            .color("red")
            .background("white")
            .strong(true)
            .css("hilite-danger");
        assert_eq!(h.condition.as_deref(), Some("amount > 1000"));
        assert_eq!(h.color.as_deref(), Some("red"));
        assert_eq!(h.background.as_deref(), Some("white"));
        assert_eq!(h.strong, Some(true));
        assert_eq!(h.css.as_deref(), Some("hilite-danger"));
    }

    #[test]
    fn deserialize_from_json() {
        let h: Hilite =
            serde_json::from_str(r#"{"condition": "x > 1", "color": "red"}"#).unwrap();
        assert_eq!(h.condition.as_deref(), Some("x > 1"));
        assert_eq!(h.color.as_deref(), Some("red"));
        assert!(h.background.is_none());
    }

    #[test]
    fn serialize_skips_unset() {
        let h = Hilite::new().color("blue");
        let json = serde_json::to_string(&h).unwrap();
        assert_eq!(json, r#"{"color":"blue"}"#);
    }

    #[test]
    fn round_trip() {
        let h = Hilite::new().condition("true").css("c");
        let json = serde_json::to_string(&h).unwrap();
        let back: Hilite = serde_json::from_str(&json).unwrap();
        assert_eq!(h, back);
    }

    #[test]
    fn unknown_attributes_ignored() {
        let h: Hilite =
            serde_json::from_str(r#"{"color": "red", "blink": true}"#).unwrap();
        assert_eq!(h.color.as_deref(), Some("red"));
    }
}

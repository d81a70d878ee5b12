//! Abstract render output.
//!
//! The concrete visual layer (design system, DOM, terminal) is out of
//! scope; widgets produce a small content vocabulary the host framework
//! maps onto its own elements.

// ---------------------------------------------------------------------------
// Icon
// ---------------------------------------------------------------------------

/// A named icon, optionally purely decorative (carries no state).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    pub name: String,
    pub decorative: bool,
}

impl Icon {
    /// Create a (non-decorative) icon.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            decorative: false,
        }
    }

    /// Mark the icon as purely decorative (builder).
    pub fn decorative(mut self) -> Self {
        self.decorative = true;
        self
    }
}

// ---------------------------------------------------------------------------
// Content
// ---------------------------------------------------------------------------

/// What a widget renders into a cell or form slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Content {
    /// Render nothing. Used while a widget resolution is still loading so
    /// the cell never flashes stale content.
    #[default]
    Empty,
    Text(String),
    Icon(Icon),
    Group(Vec<Content>),
}

impl Content {
    /// Text content.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// A single icon.
    pub fn icon(name: impl Into<String>) -> Self {
        Self::Icon(Icon::new(name))
    }

    /// A group of parts; collapses to the part itself for a single entry
    /// and to [`Content::Empty`] for none.
    pub fn group(parts: Vec<Content>) -> Self {
        let mut parts = parts;
        match parts.len() {
            0 => Self::Empty,
            1 => parts.remove(0),
            _ => Self::Group(parts),
        }
    }

    /// Whether this content renders nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Group(parts) => parts.iter().all(Content::is_empty),
            _ => false,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

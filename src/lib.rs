//! # metaview
//!
//! A schema-driven rendering core for metadata-defined business
//! application views.
//!
//! metaview models views (grids, forms, cards, charts, ...) as typed
//! schema trees deserialized from server metadata, and provides the
//! runtime pieces a host UI needs to turn those trees into live cells:
//! conditional styling, lazy widget resolution, and shared field state.
//! The concrete visual layer stays outside; widgets emit an abstract
//! [`render::Content`] the host maps onto its own elements.
//!
//! ## Core Systems
//!
//! - **[`schema`]** — Typed view/widget schema model with validated JSON loading
//! - **[`data`]** — Record snapshots and expression-language truthiness
//! - **[`eval`]** — Expression boundary, conditional attributes, hilite evaluation
//! - **[`value`]** — Observable value cells shared between widgets and form state
//! - **[`registry`]** — Widget-kind resolution with lazy, shared loading
//! - **[`widget`]** — The field-widget contract
//! - **[`widgets`]** — Built-in field widgets
//! - **[`render`]** — Content model and grid-cell composition

// Foundation
pub mod data;
pub mod value;

// Schema model
pub mod schema;

// Per-record evaluation
pub mod eval;

// Widget system
pub mod registry;
pub mod widget;
pub mod widgets;

// Rendering
pub mod render;

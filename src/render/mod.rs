//! Render composition: the abstract content model and the grid-cell
//! pipeline that joins widget resolution with hilite styling.

pub mod cell;
pub mod content;

pub use cell::{merge_class, CellProps, CellView, GridCell};
pub use content::{Content, Icon};

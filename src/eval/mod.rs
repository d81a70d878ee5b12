//! Per-record evaluation: the expression boundary, conditional attribute
//! resolution and the hilite evaluator.

pub mod attrs;
pub mod expr;
pub mod hilite;

pub use attrs::{resolve_attrs, resolve_required, resolve_valid, ResolvedAttrs};
pub use expr::{EvalError, ExpressionEvaluator};
pub use hilite::{evaluate as evaluate_hilites, ErrorPolicy, HiliteCache};

//! Breakpoint-aware span grid layout.
//!
//! Items declare how many spans of a fixed per-row budget (12 by default)
//! they occupy at each width breakpoint. The engine packs them into rows,
//! derives each item's pixel width from the container width, and places
//! them top to bottom, left to right.
//!
//! # Architecture
//!
//! 1. **Span resolution**: pick each item's span for the current breakpoint
//!    and check it against the budget
//! 2. **Row planning**: greedy packing; in stretch mode, a lookahead that
//!    fixes each row's height from intrinsic heights
//! 3. **Measurement**: every item measured at its span width
//! 4. **Placement**: x and y from accumulated widths, gutters, and row heights
//!
//! # Example
//!
//! ```ignore
//! use spangrid_layout::{LayoutEngine, SpanScope};
//! use spangrid_core::{LayoutConfig, SpanAssignment, WidthBreakpoint};
//!
//! let scope = SpanScope::new(WidthBreakpoint::from_width(720.0))
//!     .item(header, SpanAssignment::new(12, 12, 12))
//!     .item(sidebar, SpanAssignment::new(12, 4, 3))
//!     .item(content, SpanAssignment::new(12, 8, 9));
//!
//! let config = LayoutConfig::new(1440).with_gutter_space(8.0);
//! let layout = LayoutEngine::new(config).layout(scope.items(), scope.breakpoint())?;
//!
//! for placement in &layout {
//!     println!("{:?}", placement);
//! }
//! ```

mod breakpoint;
mod engine;
mod grid;
mod measure;
mod place;
mod rows;
mod scope;
mod validate;

pub use breakpoint::resolve_span;
pub use engine::{LayoutEngine, LayoutOutput};
pub use grid::SpanGrid;
pub use measure::{pixel_width_for_span, Measurable, Measurer};
pub use place::place;
pub use rows::{plan_rows, plan_stretched_rows, Row};
pub use scope::{LayoutItem, SpanScope};
pub use validate::{resolve_spans, validate};

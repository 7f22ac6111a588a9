#![warn(missing_docs)]
//! Geometry primitives and shared value types for the layout subsystem.

pub mod align;
pub mod bounds;

// Re-export commonly used types
pub use align::{Alignment, AlignmentParseError, HorizontalAlign, Padding, VerticalAlign};
pub use bounds::{Bounding, BOUNDS_EPSILON};

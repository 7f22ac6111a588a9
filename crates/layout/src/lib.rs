#![warn(missing_docs)]
//! Constraint-based layout for scene-graph UI.
//!
//! The pieces, bottom up:
//!
//! - [`rescale`]: the shared proportional rescale-to-fit routine.
//! - [`LayoutManager`]: the strategy interface every layout implements.
//! - [`sized`]: the template driver shared by all sized strategies
//!   (rescale pass, content-size negotiation, pivot-corrected placement).
//! - [`GridLayout`], [`LinearLayout`], [`PageViewLayout`]: concrete
//!   strategies.
//! - [`LayoutContainer`]: owns the backed child list, the measurement loop,
//!   the redraw flag, and clip propagation.

pub mod container;
pub mod grid;
pub mod linear;
pub mod manager;
pub mod page;
pub mod params;
pub mod rescale;
pub mod sized;

// Re-export commonly used types
pub use container::{LayoutContainer, LAYOUT_INTERVAL};
pub use grid::GridLayout;
pub use linear::{LinearLayout, Orientation};
pub use manager::{ChildrenBounds, LayoutManager};
pub use page::PageViewLayout;
pub use params::{Dimension, LayoutParams};
pub use sized::{layout_sized, NodeInfo, SizedLayout};

#![warn(missing_docs)]
//! Property application at the bridge boundary.
//!
//! The declarative UI layer hands this subsystem partial JSON property maps.
//! Updates are parsed into a typed [`LayoutPatch`] first and applied only if
//! the whole map validates, so a malformed update is rejected without
//! mutating anything. Unknown keys are warned about and ignored; malformed
//! values on recognized keys fail fast.

pub mod apply;
pub mod error;
pub mod patch;

// Re-export commonly used types
pub use apply::{
    apply_grid_update, apply_linear_update, apply_page_view_update, create_grid, create_linear,
    create_page_view,
};
pub use error::PropsError;
pub use patch::LayoutPatch;

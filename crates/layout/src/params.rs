//! Layout configuration values.

use scenery_core::{Alignment, Padding};

/// One axis of a layout's configured size.
///
/// Typed replacement for the "wrap content" magic sentinel: a dimension is
/// either an explicit extent in meters or wrap-content, never an in-band
/// special float.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Dimension {
    /// Size the axis to the aggregate content size.
    #[default]
    WrapContent,
    /// Fixed extent in meters.
    Fixed(f32),
}

impl Dimension {
    /// Effective size limit for this axis given the computed content size.
    pub fn resolve(&self, content: f32) -> f32 {
        match *self {
            Self::WrapContent => content,
            Self::Fixed(value) => value,
        }
    }

    /// The fixed extent, if one is configured.
    pub fn fixed(&self) -> Option<f32> {
        match *self {
            Self::WrapContent => None,
            Self::Fixed(value) => Some(value),
        }
    }

    /// Whether this axis wraps its content.
    pub fn is_wrap_content(&self) -> bool {
        matches!(self, Self::WrapContent)
    }
}

/// Configuration shared by every sized layout strategy.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutParams {
    /// Configured width limit.
    pub width: Dimension,
    /// Configured height limit.
    pub height: Dimension,
    /// Uniform padding applied around every item.
    pub item_padding: Padding,
    /// Layout-wide default alignment for items within their cells.
    pub alignment: Alignment,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_content_resolves_to_content() {
        assert_eq!(Dimension::WrapContent.resolve(1.25), 1.25);
    }

    #[test]
    fn test_fixed_ignores_content() {
        assert_eq!(Dimension::Fixed(2.0).resolve(1.25), 2.0);
        assert_eq!(Dimension::Fixed(2.0).fixed(), Some(2.0));
    }
}

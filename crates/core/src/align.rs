//! Alignment and padding value types.
//!
//! Alignments are authored as compound tokens of the form
//! `"<horizontal>-<vertical>"` (e.g. `"center-top"`). Parsing is strict: an
//! unrecognized token is a configuration error, never silently defaulted,
//! so an authoring typo surfaces instead of masking itself.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an invalid alignment token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid alignment token `{token}`: {reason}")]
pub struct AlignmentParseError {
    /// The offending token.
    pub token: String,
    /// Why it was rejected.
    pub reason: &'static str,
}

impl AlignmentParseError {
    fn new(token: &str, reason: &'static str) -> Self {
        Self {
            token: token.to_string(),
            reason,
        }
    }
}

/// Horizontal component of an alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HorizontalAlign {
    /// Align the left edge.
    Left,
    /// Center horizontally.
    #[default]
    Center,
    /// Align the right edge.
    Right,
}

/// Vertical component of an alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VerticalAlign {
    /// Align the top edge.
    Top,
    /// Center vertically.
    #[default]
    Center,
    /// Align the bottom edge.
    Bottom,
}

/// A resolved `{horizontal, vertical}` alignment pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Alignment {
    /// Horizontal placement within the available region.
    pub horizontal: HorizontalAlign,
    /// Vertical placement within the available region.
    pub vertical: VerticalAlign,
}

impl Alignment {
    /// Construct from both components.
    pub fn new(horizontal: HorizontalAlign, vertical: VerticalAlign) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

impl FromStr for Alignment {
    type Err = AlignmentParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let (h, v) = token
            .split_once('-')
            .ok_or_else(|| AlignmentParseError::new(token, "expected `<horizontal>-<vertical>`"))?;

        let horizontal = match h.trim() {
            "left" => HorizontalAlign::Left,
            "center" => HorizontalAlign::Center,
            "right" => HorizontalAlign::Right,
            _ => return Err(AlignmentParseError::new(token, "unknown horizontal component")),
        };

        let vertical = match v.trim() {
            "top" => VerticalAlign::Top,
            "center" => VerticalAlign::Center,
            "bottom" => VerticalAlign::Bottom,
            _ => return Err(AlignmentParseError::new(token, "unknown vertical component")),
        };

        Ok(Self {
            horizontal,
            vertical,
        })
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = match self.horizontal {
            HorizontalAlign::Left => "left",
            HorizontalAlign::Center => "center",
            HorizontalAlign::Right => "right",
        };
        let v = match self.vertical {
            VerticalAlign::Top => "top",
            VerticalAlign::Center => "center",
            VerticalAlign::Bottom => "bottom",
        };
        write!(f, "{h}-{v}")
    }
}

/// Per-edge padding in meters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    /// Top inset.
    pub top: f32,
    /// Right inset.
    pub right: f32,
    /// Bottom inset.
    pub bottom: f32,
    /// Left inset.
    pub left: f32,
}

impl Padding {
    /// No padding.
    pub const ZERO: Self = Self {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    /// Uniform padding on all four edges.
    pub fn uniform(inset: f32) -> Self {
        Self {
            top: inset,
            right: inset,
            bottom: inset,
            left: inset,
        }
    }

    /// Total horizontal inset, `left + right`.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical inset, `top + bottom`.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

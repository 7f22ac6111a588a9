//! Parsing property maps into typed patches.

use crate::error::PropsError;
use glam::Vec3;
use scenery_core::{Alignment, Padding};
use scenery_layout::Dimension;
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::warn;

/// A validated partial update: only present keys are applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutPatch {
    /// `width` — meters; 0 means wrap-content.
    pub width: Option<Dimension>,
    /// `height` — meters; 0 means wrap-content.
    pub height: Option<Dimension>,
    /// `columns` — grid column count, clamped to a minimum of 1 on apply.
    pub columns: Option<i64>,
    /// `rows` — grid row cap, 0 meaning unbounded.
    pub rows: Option<i64>,
    /// `itemPadding` — uniform padding around every item.
    pub item_padding: Option<Padding>,
    /// `itemAlignment` — layout-wide default alignment token.
    pub item_alignment: Option<Alignment>,
    /// `itemAlignments` — per-index alignment overrides.
    pub item_alignments: Option<HashMap<usize, Alignment>>,
    /// `itemPaddings` — per-index padding overrides.
    pub item_paddings: Option<HashMap<usize, Padding>>,
    /// `visiblePage` — page-view selection; out of range shows nothing.
    pub visible_page: Option<i64>,
    /// `localScale` — author's scale for the container node.
    pub local_scale: Option<Vec3>,
}

impl LayoutPatch {
    /// Parse a property map, failing fast on any malformed recognized key.
    ///
    /// Unknown keys warn and are skipped; they belong to other subsystems
    /// (materials, event handlers) and are not this crate's business.
    pub fn parse(map: &Map<String, Value>) -> Result<Self, PropsError> {
        let mut patch = Self::default();
        for (key, value) in map {
            match key.as_str() {
                "width" => patch.width = Some(parse_dimension(key, value)?),
                "height" => patch.height = Some(parse_dimension(key, value)?),
                "columns" => patch.columns = Some(parse_integer(key, value)?),
                "rows" => patch.rows = Some(parse_integer(key, value)?),
                "itemPadding" => {
                    patch.item_padding = Some(Padding::uniform(parse_number(key, value)?));
                }
                "itemAlignment" => {
                    patch.item_alignment = Some(parse_alignment(key, value)?);
                }
                "itemAlignments" => {
                    let object = expect_object(key, value)?;
                    let mut alignments = HashMap::new();
                    for (index_key, token) in object {
                        let index = parse_index(key, index_key)?;
                        alignments.insert(index, parse_alignment(key, token)?);
                    }
                    patch.item_alignments = Some(alignments);
                }
                "itemPaddings" => {
                    let object = expect_object(key, value)?;
                    let mut paddings = HashMap::new();
                    for (index_key, inset) in object {
                        let index = parse_index(key, index_key)?;
                        paddings.insert(index, Padding::uniform(parse_number(key, inset)?));
                    }
                    patch.item_paddings = Some(paddings);
                }
                "visiblePage" => patch.visible_page = Some(parse_integer(key, value)?),
                "localScale" => patch.local_scale = Some(parse_vec3(key, value)?),
                _ => warn!(key = %key, "ignoring unrecognized property"),
            }
        }
        Ok(patch)
    }

    /// Whether applying this patch requires a fresh layout pass.
    pub fn affects_layout(&self) -> bool {
        self.width.is_some()
            || self.height.is_some()
            || self.columns.is_some()
            || self.rows.is_some()
            || self.item_padding.is_some()
            || self.item_alignment.is_some()
            || self.item_alignments.is_some()
            || self.item_paddings.is_some()
            || self.visible_page.is_some()
    }
}

fn parse_number(key: &str, value: &Value) -> Result<f32, PropsError> {
    value
        .as_f64()
        .map(|v| v as f32)
        .ok_or_else(|| PropsError::invalid(key, "a number"))
}

fn parse_integer(key: &str, value: &Value) -> Result<i64, PropsError> {
    value
        .as_i64()
        .ok_or_else(|| PropsError::invalid(key, "an integer"))
}

fn parse_dimension(key: &str, value: &Value) -> Result<Dimension, PropsError> {
    let extent = parse_number(key, value)?;
    if extent < 0.0 {
        return Err(PropsError::invalid(key, "a non-negative extent in meters"));
    }
    if extent == 0.0 {
        Ok(Dimension::WrapContent)
    } else {
        Ok(Dimension::Fixed(extent))
    }
}

fn parse_alignment(key: &str, value: &Value) -> Result<Alignment, PropsError> {
    let token = value
        .as_str()
        .ok_or_else(|| PropsError::invalid(key, "a `<horizontal>-<vertical>` token"))?;
    Ok(token.parse::<Alignment>()?)
}

fn parse_index(key: &str, index_key: &str) -> Result<usize, PropsError> {
    index_key
        .parse::<usize>()
        .map_err(|_| PropsError::invalid(key, "child indices as object keys"))
}

fn parse_vec3(key: &str, value: &Value) -> Result<Vec3, PropsError> {
    let components = value
        .as_array()
        .ok_or_else(|| PropsError::invalid(key, "an array of 3 numbers"))?;
    if components.len() != 3 {
        return Err(PropsError::invalid(key, "an array of 3 numbers"));
    }
    let mut out = [0.0f32; 3];
    for (slot, component) in out.iter_mut().zip(components) {
        *slot = component
            .as_f64()
            .ok_or_else(|| PropsError::invalid(key, "an array of 3 numbers"))?
            as f32;
    }
    Ok(Vec3::from_array(out))
}

fn expect_object<'v>(key: &str, value: &'v Value) -> Result<&'v Map<String, Value>, PropsError> {
    value
        .as_object()
        .ok_or_else(|| PropsError::invalid(key, "an object keyed by child index"))
}

//! Row-major grid layout.

use crate::manager::{ChildrenBounds, LayoutManager};
use crate::params::LayoutParams;
use crate::rescale::unscaled_size;
use crate::sized::{layout_sized, NodeInfo, SizedLayout};
use glam::Vec2;
use scenery_core::{Alignment, HorizontalAlign, Padding, VerticalAlign};
use scenery_scene::{NodeId, Scene};
use std::collections::HashMap;

/// Assigns children to a row-major grid.
///
/// All cells in a column share one width (the widest unscaled child in that
/// column plus item padding); all cells in a row share one height. Content
/// size is the sum of column widths and row heights. The content box is
/// centered on the container origin.
#[derive(Debug, Clone)]
pub struct GridLayout {
    params: LayoutParams,
    columns: usize,
    rows: usize,
    item_alignments: HashMap<usize, Alignment>,
    item_paddings: HashMap<usize, Padding>,
    // Cell sizes recomputed by pre_layout each pass.
    column_widths: Vec<f32>,
    row_heights: Vec<f32>,
    effective_rows: usize,
}

impl GridLayout {
    /// Create a grid with the given column count and row cap.
    ///
    /// `columns` is clamped up to a minimum of 1. `rows == 0` means
    /// unbounded: the grid adds rows as needed to fit every child.
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            params: LayoutParams::default(),
            columns: columns.max(1),
            rows,
            item_alignments: HashMap::new(),
            item_paddings: HashMap::new(),
            column_widths: Vec::new(),
            row_heights: Vec::new(),
            effective_rows: 0,
        }
    }

    /// Builder: set the shared layout params.
    pub fn with_params(mut self, params: LayoutParams) -> Self {
        self.params = params;
        self
    }

    /// Set the column count, clamped up to 1.
    pub fn set_columns(&mut self, columns: usize) {
        self.columns = columns.max(1);
    }

    /// Configured column count.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Set the row cap; 0 means unbounded.
    pub fn set_rows(&mut self, rows: usize) {
        self.rows = rows;
    }

    /// Override the alignment for one child index.
    pub fn set_item_alignment(&mut self, index: usize, alignment: Alignment) {
        self.item_alignments.insert(index, alignment);
    }

    /// Override the padding for one child index.
    pub fn set_item_padding(&mut self, index: usize, padding: Padding) {
        self.item_paddings.insert(index, padding);
    }

    fn alignment_for(&self, index: usize) -> Alignment {
        self.item_alignments
            .get(&index)
            .copied()
            .unwrap_or(self.params.alignment)
    }

    fn padding_for(&self, index: usize) -> Padding {
        self.item_paddings
            .get(&index)
            .copied()
            .unwrap_or(self.params.item_padding)
    }

    // A non-positive cell budget cannot be satisfied; treating it as
    // unconstrained keeps the child from collapsing to scale zero, which the
    // degenerate-scale guard could never undo.
    fn budget_or_unbounded(budget: f32) -> f32 {
        if budget > 0.0 {
            budget
        } else {
            f32::INFINITY
        }
    }
}

impl SizedLayout for GridLayout {
    fn params(&self) -> &LayoutParams {
        &self.params
    }

    fn params_mut(&mut self) -> &mut LayoutParams {
        &mut self.params
    }

    fn pre_layout(&mut self, scene: &mut Scene, children: &[NodeId], _bounds: &ChildrenBounds) {
        let columns = self.columns;
        let row_count = children.len().div_ceil(columns).max(1);
        self.effective_rows = if self.rows > 0 { self.rows } else { row_count };
        self.column_widths = vec![0.0; columns];
        self.row_heights = vec![0.0; row_count];

        // Cells are sized from fresh unscaled measurements so they stay
        // stable across the rescale the driver applies right after this.
        for (index, &child) in children.iter().enumerate() {
            let unscaled = unscaled_size(scene, child);
            let padding = self.padding_for(index);
            let col = index % columns;
            let row = index / columns;
            self.column_widths[col] =
                self.column_widths[col].max(unscaled.x + padding.horizontal());
            self.row_heights[row] = self.row_heights[row].max(unscaled.y + padding.vertical());
        }
    }

    fn max_child_width(&self, index: usize) -> f32 {
        match self.params.width.fixed() {
            Some(width) => {
                let padding = self.padding_for(index);
                Self::budget_or_unbounded(width / self.columns as f32 - padding.horizontal())
            }
            None => f32::INFINITY,
        }
    }

    fn max_child_height(&self, index: usize) -> f32 {
        match self.params.height.fixed() {
            Some(height) => {
                let padding = self.padding_for(index);
                let rows = self.effective_rows.max(1);
                Self::budget_or_unbounded(height / rows as f32 - padding.vertical())
            }
            None => f32::INFINITY,
        }
    }

    fn content_size(&self) -> Vec2 {
        Vec2::new(
            self.column_widths.iter().sum(),
            self.row_heights.iter().sum(),
        )
    }

    fn layout_node(
        &mut self,
        scene: &mut Scene,
        info: &NodeInfo,
        content_size: Vec2,
        _size_limit: Vec2,
    ) {
        let col = info.index % self.columns;
        let row = info.index / self.columns;
        let cell_left =
            -content_size.x * 0.5 + self.column_widths.iter().take(col).sum::<f32>();
        let cell_top = content_size.y * 0.5 - self.row_heights.iter().take(row).sum::<f32>();
        let cell_width = self.column_widths.get(col).copied().unwrap_or(0.0);
        let cell_height = self.row_heights.get(row).copied().unwrap_or(0.0);

        let padding = self.padding_for(info.index);
        let alignment = self.alignment_for(info.index);
        let inner_left = cell_left + padding.left;
        let inner_right = cell_left + cell_width - padding.right;
        let inner_top = cell_top - padding.top;
        let inner_bottom = cell_top - cell_height + padding.bottom;

        let target_x = match alignment.horizontal {
            HorizontalAlign::Left => inner_left + info.width * 0.5,
            HorizontalAlign::Center => (inner_left + inner_right) * 0.5,
            HorizontalAlign::Right => inner_right - info.width * 0.5,
        };
        let target_y = match alignment.vertical {
            VerticalAlign::Top => inner_top - info.height * 0.5,
            VerticalAlign::Center => (inner_top + inner_bottom) * 0.5,
            VerticalAlign::Bottom => inner_bottom + info.height * 0.5,
        };

        if let Some(node) = scene.node_mut(info.node) {
            node.transform.position.x = target_x + info.pivot_offset_x;
            node.transform.position.y = target_y + info.pivot_offset_y;
        }
    }
}

impl LayoutManager for GridLayout {
    fn params(&self) -> &LayoutParams {
        &self.params
    }

    fn params_mut(&mut self) -> &mut LayoutParams {
        &mut self.params
    }

    fn max_cell_size(&self, index: usize) -> Vec2 {
        Vec2::new(
            SizedLayout::max_child_width(self, index),
            SizedLayout::max_child_height(self, index),
        )
    }

    fn layout_children(&mut self, scene: &mut Scene, children: &[NodeId], bounds: &ChildrenBounds) {
        layout_sized(self, scene, children, bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scenery_core::Bounding;
    use scenery_scene::NodeKind;

    fn widget(scene: &mut Scene, bounds: Bounding) -> NodeId {
        let id = scene.create_node(NodeKind::Widget);
        scene.node_mut(id).unwrap().content = bounds;
        id
    }

    fn measured_bounds(scene: &Scene, children: &[NodeId]) -> ChildrenBounds {
        children
            .iter()
            .enumerate()
            .map(|(index, &child)| (index, scene.measure(child)))
            .collect()
    }

    #[test]
    fn test_column_count_clamps_to_one() {
        assert_eq!(GridLayout::new(0, 0).columns(), 1);
        let mut grid = GridLayout::new(3, 0);
        grid.set_columns(0);
        assert_eq!(grid.columns(), 1);
    }

    #[test]
    fn test_content_size_sums_cells_with_padding() {
        let mut scene = Scene::new();
        let unit = Bounding::new(-0.5, -0.5, 0.5, 0.5);
        let children = vec![
            widget(&mut scene, unit),
            widget(&mut scene, unit),
            widget(&mut scene, unit),
            widget(&mut scene, unit),
        ];
        let bounds = measured_bounds(&scene, &children);

        let mut grid = GridLayout::new(2, 0).with_params(LayoutParams {
            item_padding: Padding::uniform(0.1),
            ..LayoutParams::default()
        });
        grid.layout_children(&mut scene, &children, &bounds);

        // Two 1.2-wide columns, two 1.2-tall rows.
        let content = grid.content_size();
        assert!((content.x - 2.4).abs() < 1e-5);
        assert!((content.y - 2.4).abs() < 1e-5);
    }

    #[test]
    fn test_two_by_two_center_positions() {
        let mut scene = Scene::new();
        let unit = Bounding::new(-0.5, -0.5, 0.5, 0.5);
        let children = vec![
            widget(&mut scene, unit),
            widget(&mut scene, unit),
            widget(&mut scene, unit),
            widget(&mut scene, unit),
        ];
        let bounds = measured_bounds(&scene, &children);

        let mut grid = GridLayout::new(2, 0);
        grid.layout_children(&mut scene, &children, &bounds);

        // Content is 2x2 centered on the origin; cell centers at +-0.5.
        let p0 = scene.node(children[0]).unwrap().position();
        let p3 = scene.node(children[3]).unwrap().position();
        assert!((p0.x + 0.5).abs() < 1e-5 && (p0.y - 0.5).abs() < 1e-5);
        assert!((p3.x - 0.5).abs() < 1e-5 && (p3.y + 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_per_item_alignment_override() {
        let mut scene = Scene::new();
        let wide = Bounding::new(-1.0, -0.5, 1.0, 0.5);
        let narrow = Bounding::new(-0.25, -0.5, 0.25, 0.5);
        let children = vec![widget(&mut scene, wide), widget(&mut scene, narrow)];
        let bounds = measured_bounds(&scene, &children);

        let mut grid = GridLayout::new(1, 0);
        grid.set_item_alignment(
            1,
            Alignment::new(HorizontalAlign::Left, VerticalAlign::Center),
        );
        grid.layout_children(&mut scene, &children, &bounds);

        // Column is 2.0 wide; the narrow child hugs its left edge.
        let p1 = scene.node(children[1]).unwrap().position();
        assert!((p1.x - (-1.0 + 0.25)).abs() < 1e-5);
    }

    #[test]
    fn test_missing_bounds_entry_is_tolerated() {
        let mut scene = Scene::new();
        let unit = Bounding::new(-0.5, -0.5, 0.5, 0.5);
        let children = vec![widget(&mut scene, unit), widget(&mut scene, unit)];
        // Only index 0 has a cached measurement; the pass must still place
        // every child. Cells come from fresh measurements either way.
        let bounds: ChildrenBounds = [(0, scene.measure(children[0]))].into_iter().collect();

        let mut grid = GridLayout::new(1, 0);
        grid.layout_children(&mut scene, &children, &bounds);

        let content = grid.content_size();
        assert!((content.x - 1.0).abs() < 1e-5);
        assert!((content.y - 2.0).abs() < 1e-5);
        // The uncached child is placed too, in the second row.
        let p1 = scene.node(children[1]).unwrap().position();
        assert!((p1.y + 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_pivot_offset_corrects_off_center_content() {
        let mut scene = Scene::new();
        // Content spans [0, 1] on both axes, so its visual center is at
        // (0.5, 0.5) relative to the node origin.
        let off_center = Bounding::new(0.0, 0.0, 1.0, 1.0);
        let children = vec![widget(&mut scene, off_center)];
        let bounds = measured_bounds(&scene, &children);

        let mut grid = GridLayout::new(1, 0);
        grid.layout_children(&mut scene, &children, &bounds);

        // The visual center must land on the cell center (the origin), so
        // the origin moves to (-0.5, -0.5).
        let p = scene.node(children[0]).unwrap().position();
        assert!((p.x + 0.5).abs() < 1e-5 && (p.y + 0.5).abs() < 1e-5);
    }
}

//! Page-view layout: a single slot showing one child at a time.

use crate::manager::{ChildrenBounds, LayoutManager};
use crate::params::LayoutParams;
use crate::rescale::unscaled_size;
use crate::sized::{layout_sized, NodeInfo, SizedLayout};
use glam::Vec2;
use scenery_core::{Alignment, HorizontalAlign, Padding, VerticalAlign};
use scenery_scene::{NodeId, Scene};
use std::collections::HashMap;
use tracing::debug;

/// Shows exactly the child at `visible_page`; every other child stays in the
/// backing list but is hidden and not laid out.
///
/// An out-of-range page index (negative or past the end) is not an error:
/// no page is shown. Each page may carry its own alignment and padding
/// override, falling back to the layout-wide defaults.
#[derive(Debug, Clone)]
pub struct PageViewLayout {
    params: LayoutParams,
    visible_page: i64,
    page_alignments: HashMap<usize, Alignment>,
    page_paddings: HashMap<usize, Padding>,
    // Which child the slot held after the previous pass.
    shown: Option<NodeId>,
    // Visible page's padded size, recomputed by pre_layout.
    content: Vec2,
}

impl PageViewLayout {
    /// Create a page view showing page 0.
    pub fn new() -> Self {
        Self {
            params: LayoutParams::default(),
            visible_page: 0,
            page_alignments: HashMap::new(),
            page_paddings: HashMap::new(),
            shown: None,
            content: Vec2::ZERO,
        }
    }

    /// Builder: set the shared layout params.
    pub fn with_params(mut self, params: LayoutParams) -> Self {
        self.params = params;
        self
    }

    /// Select which page is visible. Out-of-range values show no page.
    pub fn set_visible_page(&mut self, page: i64) {
        if page != self.visible_page {
            debug!(from = self.visible_page, to = page, "page change");
        }
        self.visible_page = page;
    }

    /// Currently selected page index.
    pub fn visible_page(&self) -> i64 {
        self.visible_page
    }

    /// The child occupying the slot after the last pass, if any.
    pub fn shown(&self) -> Option<NodeId> {
        self.shown
    }

    /// Override the alignment for one page.
    pub fn set_page_alignment(&mut self, page: usize, alignment: Alignment) {
        self.page_alignments.insert(page, alignment);
    }

    /// Override the padding for one page.
    pub fn set_page_padding(&mut self, page: usize, padding: Padding) {
        self.page_paddings.insert(page, padding);
    }

    fn target(&self, children: &[NodeId]) -> Option<NodeId> {
        usize::try_from(self.visible_page)
            .ok()
            .and_then(|page| children.get(page).copied())
    }

    fn alignment_for(&self, page: usize) -> Alignment {
        self.page_alignments
            .get(&page)
            .copied()
            .unwrap_or(self.params.alignment)
    }

    fn padding_for(&self, page: usize) -> Padding {
        self.page_paddings
            .get(&page)
            .copied()
            .unwrap_or(self.params.item_padding)
    }
}

impl Default for PageViewLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl SizedLayout for PageViewLayout {
    fn params(&self) -> &LayoutParams {
        &self.params
    }

    fn params_mut(&mut self) -> &mut LayoutParams {
        &mut self.params
    }

    fn pre_layout(&mut self, scene: &mut Scene, children: &[NodeId], _bounds: &ChildrenBounds) {
        let target = self.target(children);

        // Two states per child: visible (the slot) or hidden.
        for &child in children {
            if let Some(node) = scene.node_mut(child) {
                node.visible = Some(child) == target;
            }
        }
        self.shown = target;

        // Slot content is the visible page's fresh unscaled size; a cached
        // measurement could predate a rescale and disagree with it.
        self.content = match target {
            Some(child) => {
                let index = children.iter().position(|&c| c == child).unwrap_or(0);
                let padding = self.padding_for(index);
                let size = unscaled_size(scene, child);
                Vec2::new(
                    size.x + padding.horizontal(),
                    size.y + padding.vertical(),
                )
            }
            None => Vec2::ZERO,
        };
    }

    fn max_child_width(&self, index: usize) -> f32 {
        match self.params.width.fixed() {
            Some(width) => {
                let budget = width - self.padding_for(index).horizontal();
                if budget > 0.0 {
                    budget
                } else {
                    f32::INFINITY
                }
            }
            None => f32::INFINITY,
        }
    }

    fn max_child_height(&self, index: usize) -> f32 {
        match self.params.height.fixed() {
            Some(height) => {
                let budget = height - self.padding_for(index).vertical();
                if budget > 0.0 {
                    budget
                } else {
                    f32::INFINITY
                }
            }
            None => f32::INFINITY,
        }
    }

    fn content_size(&self) -> Vec2 {
        self.content
    }

    fn layout_node(
        &mut self,
        scene: &mut Scene,
        info: &NodeInfo,
        _content_size: Vec2,
        size_limit: Vec2,
    ) {
        // Only the visible page occupies the slot. Hidden pages keep their
        // positions; they are not rendered.
        if Some(info.node) != self.shown {
            return;
        }

        let padding = self.padding_for(info.index);
        let alignment = self.alignment_for(info.index);
        let inner_left = -size_limit.x * 0.5 + padding.left;
        let inner_right = size_limit.x * 0.5 - padding.right;
        let inner_top = size_limit.y * 0.5 - padding.top;
        let inner_bottom = -size_limit.y * 0.5 + padding.bottom;

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

impl LayoutManager for PageViewLayout {
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
    use crate::params::Dimension;
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
    fn test_exactly_one_page_visible() {
        let mut scene = Scene::new();
        let unit = Bounding::new(-0.5, -0.5, 0.5, 0.5);
        let children = vec![
            widget(&mut scene, unit),
            widget(&mut scene, unit),
            widget(&mut scene, unit),
        ];
        let bounds = measured_bounds(&scene, &children);

        let mut pages = PageViewLayout::new();
        pages.set_visible_page(1);
        pages.layout_children(&mut scene, &children, &bounds);

        assert!(!scene.node(children[0]).unwrap().visible);
        assert!(scene.node(children[1]).unwrap().visible);
        assert!(!scene.node(children[2]).unwrap().visible);
        assert_eq!(pages.shown(), Some(children[1]));
    }

    #[test]
    fn test_out_of_range_page_shows_nothing() {
        let mut scene = Scene::new();
        let unit = Bounding::new(-0.5, -0.5, 0.5, 0.5);
        let children = vec![widget(&mut scene, unit), widget(&mut scene, unit)];
        let bounds = measured_bounds(&scene, &children);

        let mut pages = PageViewLayout::new();
        pages.set_visible_page(5);
        pages.layout_children(&mut scene, &children, &bounds);
        assert!(children
            .iter()
            .all(|&child| !scene.node(child).unwrap().visible));
        assert_eq!(pages.shown(), None);

        pages.set_visible_page(-1);
        pages.layout_children(&mut scene, &children, &bounds);
        assert_eq!(pages.shown(), None);
    }

    #[test]
    fn test_page_change_swaps_slot() {
        let mut scene = Scene::new();
        let unit = Bounding::new(-0.5, -0.5, 0.5, 0.5);
        let children = vec![widget(&mut scene, unit), widget(&mut scene, unit)];
        let bounds = measured_bounds(&scene, &children);

        let mut pages = PageViewLayout::new();
        pages.layout_children(&mut scene, &children, &bounds);
        assert_eq!(pages.shown(), Some(children[0]));

        pages.set_visible_page(1);
        pages.layout_children(&mut scene, &children, &bounds);
        assert_eq!(pages.shown(), Some(children[1]));
        assert!(!scene.node(children[0]).unwrap().visible);
    }

    #[test]
    fn test_per_page_override_moves_visible_page() {
        let mut scene = Scene::new();
        let unit = Bounding::new(-0.5, -0.5, 0.5, 0.5);
        let children = vec![widget(&mut scene, unit), widget(&mut scene, unit)];
        let bounds = measured_bounds(&scene, &children);

        // Fixed 2x2 slot so alignment has room to matter.
        let mut pages = PageViewLayout::new().with_params(LayoutParams {
            width: Dimension::Fixed(2.0),
            height: Dimension::Fixed(2.0),
            ..LayoutParams::default()
        });
        pages.layout_children(&mut scene, &children, &bounds);
        let centered = scene.node(children[0]).unwrap().position();
        assert!(centered.x.abs() < 1e-5 && centered.y.abs() < 1e-5);

        // Page 0 gets its own alignment and padding; page 1 keeps defaults.
        pages.set_page_alignment(
            0,
            Alignment::new(HorizontalAlign::Left, VerticalAlign::Center),
        );
        pages.set_page_padding(0, Padding::uniform(0.1));
        pages.layout_children(&mut scene, &children, &bounds);

        // Inner left edge is -1.0 + 0.1; a 1-wide child hugging it sits at
        // -0.4 instead of 0.
        let moved = scene.node(children[0]).unwrap().position();
        assert!((moved.x + 0.4).abs() < 1e-5);
        assert!(moved.y.abs() < 1e-5);

        // The override does not leak onto other pages.
        pages.set_visible_page(1);
        pages.layout_children(&mut scene, &children, &bounds);
        let other = scene.node(children[1]).unwrap().position();
        assert!(other.x.abs() < 1e-5 && other.y.abs() < 1e-5);
    }

    #[test]
    fn test_visible_page_centered_in_slot() {
        let mut scene = Scene::new();
        // Off-center content to exercise the pivot correction.
        let children = vec![widget(&mut scene, Bounding::new(0.0, 0.0, 1.0, 1.0))];
        let bounds = measured_bounds(&scene, &children);

        let mut pages = PageViewLayout::new();
        pages.layout_children(&mut scene, &children, &bounds);

        let p = scene.node(children[0]).unwrap().position();
        assert!((p.x + 0.5).abs() < 1e-5 && (p.y + 0.5).abs() < 1e-5);
    }
}

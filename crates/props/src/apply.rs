//! Applying validated patches to containers.

use crate::error::PropsError;
use crate::patch::LayoutPatch;
use scenery_layout::{GridLayout, LayoutContainer, LayoutManager, LinearLayout, PageViewLayout};
use scenery_scene::Scene;
use serde_json::{Map, Value};
use tracing::warn;

/// Parts of a patch every layout kind understands.
fn apply_common<S: LayoutManager>(
    patch: &LayoutPatch,
    scene: &mut Scene,
    container: &mut LayoutContainer<S>,
) {
    {
        let params = container.strategy_mut().params_mut();
        if let Some(width) = patch.width {
            params.width = width;
        }
        if let Some(height) = patch.height {
            params.height = height;
        }
        if let Some(padding) = patch.item_padding {
            params.item_padding = padding;
        }
        if let Some(alignment) = patch.item_alignment {
            params.alignment = alignment;
        }
    }

    if let Some(scale) = patch.local_scale {
        if let Some(node) = scene.node_mut(container.node()) {
            node.desired_scale = Some(scale);
            node.transform.scale = scale;
        }
    }

    if patch.affects_layout() {
        container.request_redraw();
    }
}

/// Apply a property map to a grid container.
///
/// The map is validated in full before anything is applied; a malformed
/// value rejects the update and leaves the container untouched.
pub fn apply_grid_update(
    scene: &mut Scene,
    container: &mut LayoutContainer<GridLayout>,
    map: &Map<String, Value>,
) -> Result<(), PropsError> {
    let patch = LayoutPatch::parse(map)?;

    let grid = container.strategy_mut();
    if let Some(columns) = patch.columns {
        grid.set_columns(columns.max(0) as usize);
    }
    if let Some(rows) = patch.rows {
        grid.set_rows(rows.max(0) as usize);
    }
    if let Some(alignments) = &patch.item_alignments {
        for (&index, &alignment) in alignments {
            grid.set_item_alignment(index, alignment);
        }
    }
    if let Some(paddings) = &patch.item_paddings {
        for (&index, &padding) in paddings {
            grid.set_item_padding(index, padding);
        }
    }
    if patch.visible_page.is_some() {
        warn!("`visiblePage` has no effect on a grid layout");
    }

    apply_common(&patch, scene, container);
    Ok(())
}

/// Apply a property map to a linear container.
pub fn apply_linear_update(
    scene: &mut Scene,
    container: &mut LayoutContainer<LinearLayout>,
    map: &Map<String, Value>,
) -> Result<(), PropsError> {
    let patch = LayoutPatch::parse(map)?;

    let stack = container.strategy_mut();
    if let Some(alignments) = &patch.item_alignments {
        for (&index, &alignment) in alignments {
            stack.set_item_alignment(index, alignment);
        }
    }
    if let Some(paddings) = &patch.item_paddings {
        for (&index, &padding) in paddings {
            stack.set_item_padding(index, padding);
        }
    }
    if patch.columns.is_some() || patch.rows.is_some() {
        warn!("`columns`/`rows` have no effect on a linear layout");
    }
    if patch.visible_page.is_some() {
        warn!("`visiblePage` has no effect on a linear layout");
    }

    apply_common(&patch, scene, container);
    Ok(())
}

/// Apply a property map to a page-view container.
pub fn apply_page_view_update(
    scene: &mut Scene,
    container: &mut LayoutContainer<PageViewLayout>,
    map: &Map<String, Value>,
) -> Result<(), PropsError> {
    let patch = LayoutPatch::parse(map)?;

    let pages = container.strategy_mut();
    if let Some(page) = patch.visible_page {
        pages.set_visible_page(page);
    }
    if let Some(alignments) = &patch.item_alignments {
        for (&index, &alignment) in alignments {
            pages.set_page_alignment(index, alignment);
        }
    }
    if let Some(paddings) = &patch.item_paddings {
        for (&index, &padding) in paddings {
            pages.set_page_padding(index, padding);
        }
    }
    if patch.columns.is_some() || patch.rows.is_some() {
        warn!("`columns`/`rows` have no effect on a page view");
    }

    apply_common(&patch, scene, container);
    Ok(())
}

/// Create a grid container from an initial property map.
pub fn create_grid(
    scene: &mut Scene,
    map: &Map<String, Value>,
) -> Result<LayoutContainer<GridLayout>, PropsError> {
    let mut container = LayoutContainer::new(scene, GridLayout::new(1, 0));
    apply_grid_update(scene, &mut container, map)?;
    Ok(container)
}

/// Create a linear container from an initial property map.
pub fn create_linear(
    scene: &mut Scene,
    orientation: scenery_layout::Orientation,
    map: &Map<String, Value>,
) -> Result<LayoutContainer<LinearLayout>, PropsError> {
    let mut container = LayoutContainer::new(scene, LinearLayout::new(orientation));
    apply_linear_update(scene, &mut container, map)?;
    Ok(container)
}

/// Create a page-view container from an initial property map.
pub fn create_page_view(
    scene: &mut Scene,
    map: &Map<String, Value>,
) -> Result<LayoutContainer<PageViewLayout>, PropsError> {
    let mut container = LayoutContainer::new(scene, PageViewLayout::new());
    apply_page_view_update(scene, &mut container, map)?;
    Ok(container)
}

//! Layout pass contracts: idempotence, content-size negotiation, clipping.

use glam::Vec2;
use scenery_core::Bounding;
use scenery_layout::{
    layout_sized, ChildrenBounds, Dimension, GridLayout, LayoutContainer, LayoutManager,
    LayoutParams, NodeInfo, PageViewLayout, SizedLayout, LAYOUT_INTERVAL,
};
use scenery_scene::{NodeId, NodeKind, Scene};

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

fn positions(scene: &Scene, children: &[NodeId]) -> Vec<(f32, f32)> {
    children
        .iter()
        .map(|&child| {
            let p = scene.node(child).unwrap().position();
            (p.x, p.y)
        })
        .collect()
}

#[test]
fn layout_children_is_idempotent() {
    let mut scene = Scene::new();
    let children = vec![
        widget(&mut scene, Bounding::new(-0.5, -0.5, 0.5, 0.5)),
        widget(&mut scene, Bounding::new(0.0, 0.0, 0.8, 0.12)),
        widget(&mut scene, Bounding::new(-0.2, -1.0, 1.4, 0.3)),
    ];
    let bounds = measured_bounds(&scene, &children);

    let mut grid = GridLayout::new(2, 0).with_params(LayoutParams {
        item_padding: scenery_core::Padding::uniform(0.05),
        ..LayoutParams::default()
    });

    grid.layout_children(&mut scene, &children, &bounds);
    let first = positions(&scene, &children);

    grid.layout_children(&mut scene, &children, &bounds);
    let second = positions(&scene, &children);

    for (a, b) in first.iter().zip(&second) {
        assert!((a.0 - b.0).abs() < 1e-5 && (a.1 - b.1).abs() < 1e-5);
    }
}

/// Records what the driver resolved, to check content-size negotiation.
struct LimitRecorder {
    params: LayoutParams,
    content: Vec2,
    seen_limit: Option<Vec2>,
}

impl SizedLayout for LimitRecorder {
    fn params(&self) -> &LayoutParams {
        &self.params
    }

    fn params_mut(&mut self) -> &mut LayoutParams {
        &mut self.params
    }

    fn content_size(&self) -> Vec2 {
        self.content
    }

    fn layout_node(&mut self, _scene: &mut Scene, _info: &NodeInfo, _content: Vec2, limit: Vec2) {
        self.seen_limit = Some(limit);
    }
}

#[test]
fn wrap_content_limit_equals_content_size() {
    let mut scene = Scene::new();
    let children = vec![widget(&mut scene, Bounding::new(-0.5, -0.5, 0.5, 0.5))];
    let bounds = measured_bounds(&scene, &children);

    let mut recorder = LimitRecorder {
        params: LayoutParams {
            width: Dimension::WrapContent,
            height: Dimension::Fixed(3.0),
            ..LayoutParams::default()
        },
        content: Vec2::new(1.75, 0.6),
        seen_limit: None,
    };
    layout_sized(&mut recorder, &mut scene, &children, &bounds);

    let limit = recorder.seen_limit.unwrap();
    assert!((limit.x - 1.75).abs() < 1e-6, "wrap-content axis follows content");
    assert!((limit.y - 3.0).abs() < 1e-6, "fixed axis keeps its extent");
}

#[test]
fn container_clip_translates_by_content_position() {
    let mut scene = Scene::new();
    let mut container = LayoutContainer::new(&mut scene, GridLayout::new(1, 0));
    let child = widget(&mut scene, Bounding::new(-0.5, -0.5, 0.5, 0.5));
    container.add_child(&scene, child);
    container.update(&mut scene, LAYOUT_INTERVAL);

    scene.node_mut(container.node()).unwrap().transform.position.x = 0.2;
    container.set_clip_bounds(&mut scene, Bounding::new(-0.5, -0.5, 0.5, 0.5));

    let clip = scene.node(child).unwrap().clip.unwrap();
    assert!(clip.equal_inexact(&Bounding::new(-0.7, -0.5, 0.3, 0.5)));
}

#[test]
fn page_view_container_flips_pages_across_ticks() {
    let mut scene = Scene::new();
    let mut container = LayoutContainer::new(&mut scene, PageViewLayout::new());
    let unit = Bounding::new(-0.5, -0.5, 0.5, 0.5);
    let children: Vec<NodeId> = (0..3).map(|_| widget(&mut scene, unit)).collect();
    for &child in &children {
        container.add_child(&scene, child);
    }

    container.strategy_mut().set_visible_page(1);
    container.update(&mut scene, LAYOUT_INTERVAL);

    assert!(scene.node(children[1]).unwrap().visible);
    assert!(!scene.node(children[0]).unwrap().visible);
    assert!(!scene.node(children[2]).unwrap().visible);

    // Out of range: nothing shown, nothing crashes.
    container.strategy_mut().set_visible_page(5);
    container.request_redraw();
    container.update(&mut scene, LAYOUT_INTERVAL);
    assert!(children.iter().all(|&c| !scene.node(c).unwrap().visible));
}

//! End-to-end scenarios: scene graph in, batches out

use crate::analysis::{AnalysisReport, DrawableElement};
use crate::config::{Config, ConfigFormat};
use crate::foundation::math::{Vec2, Vec3};
use crate::scene::{
    MaskComponent, NodeId, RectTransform, Renderable, SceneDescription, SceneNode, UiScene,
};

fn quad(name: &str, renderable: Renderable, min: (f32, f32), size: (f32, f32)) -> SceneNode {
    SceneNode::new(name)
        .with_rect(RectTransform::from_min_size(Vec2::new(min.0, min.1), Vec2::new(size.0, size.1)))
        .with_renderable(renderable)
}

fn batch_names(report: &AnalysisReport<NodeId>) -> Vec<Vec<&str>> {
    report
        .batches
        .iter()
        .map(|batch| report.members(batch).map(|e: &DrawableElement<NodeId>| e.name.as_str()).collect())
        .collect()
}

#[test]
fn test_three_same_material_elements() {
    let mut scene = UiScene::new();
    let m = scene.materials_mut().register("UI-Default");
    let root = scene.add_root(SceneNode::new("Canvas"));
    for (i, name) in ["a", "b", "c"].into_iter().enumerate() {
        let x = i as f32 * 20.0;
        scene.add_child(root, quad(name, Renderable::new(Some(m), None), (x, 0.0), (10.0, 10.0))).unwrap();
    }

    let report = AnalysisReport::run(&scene, Some(root));
    assert_eq!(report.draw_call_count(), 1);
    assert_eq!(report.isolation_count(), 0);
    assert_eq!(batch_names(&report), [vec!["a", "b", "c"]]);
}

#[test]
fn test_interposed_overlapping_element() {
    let mut scene = UiScene::new();
    let m1 = scene.materials_mut().register("M1");
    let m2 = scene.materials_mut().register("M2");
    let root = scene.add_root(SceneNode::new("Canvas"));
    scene.add_child(root, quad("a", Renderable::new(Some(m1), None), (0.0, 0.0), (10.0, 10.0))).unwrap();
    scene.add_child(root, quad("b", Renderable::new(Some(m2), None), (5.0, 5.0), (10.0, 10.0))).unwrap();
    scene.add_child(root, quad("c", Renderable::new(Some(m1), None), (8.0, 8.0), (10.0, 10.0))).unwrap();

    let report = AnalysisReport::run(&scene, Some(root));
    assert_eq!(report.draw_call_count(), 3);
    assert_eq!(batch_names(&report), [vec!["a"], vec!["b"], vec!["c"]]);
}

#[test]
fn test_interposed_disjoint_element() {
    let mut scene = UiScene::new();
    let m1 = scene.materials_mut().register("M1");
    let m2 = scene.materials_mut().register("M2");
    let root = scene.add_root(SceneNode::new("Canvas"));
    scene.add_child(root, quad("a", Renderable::new(Some(m1), None), (0.0, 0.0), (10.0, 10.0))).unwrap();
    scene.add_child(root, quad("b", Renderable::new(Some(m2), None), (50.0, 50.0), (10.0, 10.0))).unwrap();
    scene.add_child(root, quad("c", Renderable::new(Some(m1), None), (0.0, 0.0), (10.0, 10.0))).unwrap();

    let report = AnalysisReport::run(&scene, Some(root));
    assert_eq!(batch_names(&report), [vec!["a", "c"], vec!["b"]]);
}

#[test]
fn test_single_mask_element() {
    let mut scene = UiScene::new();
    let root = scene.add_root(SceneNode::new("Canvas"));
    let mask = scene
        .add_child(root, quad("mask", Renderable::new(None, None), (0.0, 0.0), (10.0, 10.0))
            .with_mask(MaskComponent::default()))
        .unwrap();

    let report = AnalysisReport::run(&scene, Some(root));
    assert_eq!(report.draw_call_count(), 2);
    assert!(!report.batches[0].isolation);
    assert!(report.batches[1].isolation);
    for batch in &report.batches {
        assert_eq!(batch.members.len(), 1);
        assert_eq!(report.elements[batch.members[0]].node, mask);
    }
}

#[test]
fn test_disabled_mask_does_not_isolate() {
    let mut scene = UiScene::new();
    let root = scene.add_root(SceneNode::new("Canvas"));
    scene
        .add_child(root, quad("mask", Renderable::new(None, None), (0.0, 0.0), (10.0, 10.0))
            .with_mask(MaskComponent { enabled: false }))
        .unwrap();

    let report = AnalysisReport::run(&scene, Some(root));
    assert_eq!(report.draw_call_count(), 1);
    assert_eq!(report.isolation_count(), 0);
}

#[test]
fn test_rotated_occluder_uses_bounds() {
    // A 45° square whose bounding box reaches the second image even though
    // the square itself does not.
    let mut scene = UiScene::new();
    let m1 = scene.materials_mut().register("M1");
    let m2 = scene.materials_mut().register("M2");
    let root = scene.add_root(SceneNode::new("Canvas"));
    scene.add_child(root, quad("a", Renderable::new(Some(m1), None), (0.0, 0.0), (4.0, 4.0))).unwrap();
    scene
        .add_child(root, SceneNode::new("diamond")
            .with_rect(RectTransform::new(Vec2::new(20.0, 20.0), Vec2::new(20.0, 20.0)).with_rotation(45.0))
            .with_renderable(Renderable::new(Some(m2), None)))
        .unwrap();
    scene.add_child(root, quad("c", Renderable::new(Some(m1), None), (7.0, 7.0), (3.0, 3.0))).unwrap();

    let report = AnalysisReport::run(&scene, Some(root));
    assert_eq!(batch_names(&report), [vec!["a"], vec!["diamond"], vec!["c"]]);
}

#[test]
fn test_nested_canvas_not_counted() {
    let mut scene = UiScene::new();
    let m = scene.materials_mut().register("M");
    let root = scene.add_root(SceneNode::new("Canvas"));
    scene.add_child(root, quad("a", Renderable::new(Some(m), None), (0.0, 0.0), (10.0, 10.0))).unwrap();
    let popup = scene.add_child(root, SceneNode::new("Popup").as_rendering_root()).unwrap();
    scene.add_child(popup, quad("hidden", Renderable::new(None, None), (0.0, 0.0), (10.0, 10.0))).unwrap();

    let report = AnalysisReport::run(&scene, Some(root));
    assert_eq!(batch_names(&report), [vec!["a"]]);

    // Analyzing the nested canvas directly sees its contents.
    let report = AnalysisReport::run(&scene, Some(popup));
    assert_eq!(batch_names(&report), [vec!["hidden"]]);
}

#[test]
fn test_scale_zero_parent_hides_subtree() {
    let mut scene = UiScene::new();
    let root = scene.add_root(SceneNode::new("Canvas"));
    let folded = scene
        .add_child(root, SceneNode::new("Folded")
            .with_rect(RectTransform::default().with_scale(Vec3::new(0.0, 1.0, 1.0))))
        .unwrap();
    scene.add_child(folded, quad("inside", Renderable::new(None, None), (0.0, 0.0), (10.0, 10.0))).unwrap();

    let report = AnalysisReport::run(&scene, Some(root));
    assert!(report.elements.is_empty());
    assert!(report.is_empty());
}

#[test]
fn test_scene_description_end_to_end() {
    let ron = r#"
        (
            materials: ["UI-Default", "Font"],
            textures: ["atlas", "glyphs"],
            nodes: [
                (
                    name: "Canvas",
                    children: [
                        (
                            name: "Panel",
                            rect: (position: (0.0, 0.0), size: (200.0, 200.0)),
                            graphic: Some((material: Some("UI-Default"), texture: Some("atlas"))),
                        ),
                        (
                            name: "Title",
                            rect: (position: (0.0, 50.0), size: (150.0, 30.0)),
                            graphic: Some((material: Some("Font"), texture: Some("glyphs"))),
                        ),
                        (
                            name: "Icon",
                            rect: (position: (0.0, 50.0), size: (20.0, 20.0)),
                            graphic: Some((material: Some("UI-Default"), texture: Some("atlas"))),
                        ),
                        (
                            name: "Faded",
                            graphic: Some((material: Some("UI-Default"), color: (1.0, 1.0, 1.0, 0.0))),
                        ),
                    ],
                ),
            ],
        )
    "#;
    let scene = SceneDescription::from_str_with_format(ron, ConfigFormat::Ron)
        .unwrap()
        .build()
        .unwrap();
    let root = scene.find_by_name("Canvas");

    let report = AnalysisReport::run(&scene, root);
    assert_eq!(batch_names(&report), [vec!["Panel"], vec!["Title"], vec!["Icon"]]);
}

//! Analyzer session
//!
//! Runs collect → assign and keeps the most recent result for display.
//! Every run replaces the previous result wholesale.

use super::assigner::assign;
use super::batch::Batch;
use super::collector::collect;
use super::element::DrawableElement;
use crate::scene::SceneView;

/// Result of one analysis pass
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport<N> {
    /// Visible elements in render order
    pub elements: Vec<DrawableElement<N>>,
    /// Batches in draw order; members index into `elements`
    pub batches: Vec<Batch>,
}

impl<N: Copy + Eq + std::fmt::Debug> AnalysisReport<N> {
    /// Run a full pass over `scene` starting at `root`
    pub fn run<S: SceneView<Node = N>>(scene: &S, root: Option<N>) -> Self {
        let elements = collect(scene, root);
        let batches = assign(&elements);
        Self { elements, batches }
    }
}

impl<N> AnalysisReport<N> {
    /// Number of draw calls (batches, isolation batches included)
    pub fn draw_call_count(&self) -> usize {
        self.batches.len()
    }

    /// Number of isolation batches
    pub fn isolation_count(&self) -> usize {
        self.batches.iter().filter(|b| b.isolation).count()
    }

    /// Whether the pass found nothing to draw
    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// Member elements of a batch
    pub fn members<'a>(&'a self, batch: &'a Batch) -> impl Iterator<Item = &'a DrawableElement<N>> + 'a {
        batch.members.iter().map(move |&index| &self.elements[index])
    }
}

impl<N> Default for AnalysisReport<N> {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
            batches: Vec::new(),
        }
    }
}

/// Holds the latest analysis of a scene
#[derive(Debug)]
pub struct DrawCallAnalyzer<N> {
    report: AnalysisReport<N>,
    passes: u64,
}

impl<N: Copy + Eq + std::fmt::Debug> DrawCallAnalyzer<N> {
    /// Create an analyzer with an empty result
    pub fn new() -> Self {
        Self {
            report: AnalysisReport::default(),
            passes: 0,
        }
    }

    /// Analyze the scene under `root`, replacing the previous result
    ///
    /// A missing root is not an error; it produces an empty result.
    pub fn analyze<S: SceneView<Node = N>>(&mut self, scene: &S, root: Option<N>) -> &AnalysisReport<N> {
        self.passes += 1;
        match root {
            Some(node) => log::info!("Analyzing draw calls under '{}'", scene.node_name(node)),
            None => log::warn!("No analysis target supplied; result is empty"),
        }

        self.report = AnalysisReport::run(scene, root);

        log::info!(
            "Pass {}: {} elements, {} draw calls ({} mask isolations)",
            self.passes,
            self.report.elements.len(),
            self.report.draw_call_count(),
            self.report.isolation_count()
        );
        &self.report
    }

    /// Latest result
    pub fn report(&self) -> &AnalysisReport<N> {
        &self.report
    }

    /// Drop the latest result
    pub fn clear(&mut self) {
        self.report = AnalysisReport::default();
    }

    /// Number of passes run so far
    pub fn pass_count(&self) -> u64 {
        self.passes
    }
}

impl<N: Copy + Eq + std::fmt::Debug> Default for DrawCallAnalyzer<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{NodeId, Renderable, SceneNode, UiScene};

    fn scene_with_images(count: usize) -> (UiScene, NodeId) {
        let mut scene = UiScene::new();
        let material = scene.materials_mut().register("UI-Default");
        let root = scene.add_root(SceneNode::new("canvas"));
        for i in 0..count {
            scene
                .add_child(root, SceneNode::new(format!("image{i}"))
                    .with_renderable(Renderable::new(Some(material), None)))
                .unwrap();
        }
        (scene, root)
    }

    #[test]
    fn test_analyze_replaces_previous_result() {
        let (scene, root) = scene_with_images(3);
        let mut analyzer = DrawCallAnalyzer::new();

        analyzer.analyze(&scene, Some(root));
        assert_eq!(analyzer.report().elements.len(), 3);
        assert_eq!(analyzer.report().draw_call_count(), 1);

        let (small, small_root) = scene_with_images(1);
        analyzer.analyze(&small, Some(small_root));
        assert_eq!(analyzer.report().elements.len(), 1);
        assert_eq!(analyzer.pass_count(), 2);
    }

    #[test]
    fn test_missing_root_is_empty() {
        let (scene, root) = scene_with_images(2);
        let mut analyzer = DrawCallAnalyzer::new();
        analyzer.analyze(&scene, Some(root));

        let report = analyzer.analyze(&scene, None);
        assert!(report.is_empty());
        assert!(report.elements.is_empty());
    }

    #[test]
    fn test_clear() {
        let (scene, root) = scene_with_images(2);
        let mut analyzer = DrawCallAnalyzer::new();
        analyzer.analyze(&scene, Some(root));
        analyzer.clear();
        assert!(analyzer.report().is_empty());
    }

    #[test]
    fn test_members_iterates_elements() {
        let (scene, root) = scene_with_images(2);
        let report = AnalysisReport::run(&scene, Some(root));
        let names: Vec<_> = report.members(&report.batches[0]).map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["image0", "image1"]);
    }
}

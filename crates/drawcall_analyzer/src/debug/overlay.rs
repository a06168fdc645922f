//! Batch overlay shapes
//!
//! Turns an analysis report into line and label primitives a host can draw
//! over the scene: each member's outline in its batch color, plus the batch
//! index at the member's center.

use crate::analysis::AnalysisReport;
use crate::config::OverlayConfig;
use crate::foundation::math::{Vec3, Vec4};

/// Overlay primitive in world space
#[derive(Clone, Debug, PartialEq)]
pub enum OverlayShape {
    /// Line segment from start to end
    Line {
        start: Vec3,
        end: Vec3,
        color: Vec4,
        thickness: f32,
    },

    /// Text label at a position
    Label {
        position: Vec3,
        text: String,
        color: Vec4,
    },
}

/// Color of batch `index`, cycling through `palette`
///
/// An empty palette yields white.
pub fn palette_color(palette: &[Vec4], index: usize) -> Vec4 {
    if palette.is_empty() {
        return Vec4::new(1.0, 1.0, 1.0, 1.0);
    }
    palette[index % palette.len()]
}

/// Build overlay shapes for every batch member
pub fn build_overlay<N>(report: &AnalysisReport<N>, config: &OverlayConfig) -> Vec<OverlayShape> {
    let palette = config.palette_colors();
    let label_color = config.label_color();
    let mut shapes = Vec::new();

    for (index, batch) in report.batches.iter().enumerate() {
        let mut color = palette_color(&palette, index);
        color.w = config.outline_alpha;

        for element in report.members(batch) {
            for i in 0..4 {
                shapes.push(OverlayShape::Line {
                    start: element.corners[i],
                    end: element.corners[(i + 1) % 4],
                    color,
                    thickness: config.outline_thickness,
                });
            }
            shapes.push(OverlayShape::Label {
                position: element.label_anchor(),
                text: index.to_string(),
                color: label_color,
            });
        }
    }

    shapes
}

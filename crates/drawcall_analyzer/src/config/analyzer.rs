//! Analyzer configuration

use super::Config;
use crate::foundation::math::Vec4;
use serde::{Serialize, Deserialize};

/// Top-level analyzer settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Overlay drawing settings
    pub overlay: OverlayConfig,
    /// Summary report settings
    pub summary: SummaryConfig,
}

impl Config for AnalyzerConfig {}

/// Overlay drawing settings
///
/// Colors are stored as `[r, g, b, a]` so they stay readable in TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Colors cycled through by batch index
    pub palette: Vec<[f32; 4]>,
    /// Alpha applied to every outline color
    pub outline_alpha: f32,
    /// Outline line thickness
    pub outline_thickness: f32,
    /// Color of the batch index labels
    pub label_color: [f32; 4],
}

impl OverlayConfig {
    /// Palette used when none is configured
    pub const DEFAULT_PALETTE: [[f32; 4]; 8] = [
        [1.0, 0.0, 0.0, 1.0],
        [0.0, 1.0, 0.0, 1.0],
        [0.0, 0.0, 1.0, 1.0],
        [1.0, 0.92, 0.016, 1.0],
        [0.0, 1.0, 1.0, 1.0],
        [1.0, 0.0, 1.0, 1.0],
        [1.0, 0.5, 0.0, 1.0],
        [0.5, 0.0, 1.0, 1.0],
    ];

    /// Palette as vectors, falling back to the default palette when empty
    pub fn palette_colors(&self) -> Vec<Vec4> {
        let palette: &[[f32; 4]] = if self.palette.is_empty() {
            &Self::DEFAULT_PALETTE
        } else {
            &self.palette
        };
        palette.iter().map(|c| Vec4::from(*c)).collect()
    }

    /// Label color as a vector
    pub fn label_color(&self) -> Vec4 {
        Vec4::from(self.label_color)
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            palette: Self::DEFAULT_PALETTE.to_vec(),
            outline_alpha: 0.3,
            outline_thickness: 2.0,
            label_color: [1.0, 0.0, 1.0, 1.0],
        }
    }
}

/// Summary report settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// List every member element under its batch
    pub list_members: bool,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self { list_members: true }
    }
}

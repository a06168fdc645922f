//! Draw-call summary report

use crate::analysis::AnalysisReport;
use crate::config::{ConfigError, SummaryConfig};
use crate::resources::{MaterialRegistry, TextureRegistry};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Human-readable digest of an analysis pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Total number of draw calls
    pub total_draw_calls: usize,
    /// Batches in draw order
    pub batches: Vec<BatchSummary>,
}

/// One batch in a [`Summary`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// 1-based position in draw order
    pub step: usize,
    /// Representative material name
    pub material: String,
    /// Representative texture name
    pub texture: String,
    /// Isolation batch forced by a mask
    pub mask: bool,
    /// Member element names (empty when member listing is off)
    pub members: Vec<String>,
}

impl Summary {
    /// Summarize a report, naming resources through the scene's registries
    pub fn new<N>(
        report: &AnalysisReport<N>,
        materials: &MaterialRegistry,
        textures: &TextureRegistry,
        config: &SummaryConfig,
    ) -> Self {
        let batches = report
            .batches
            .iter()
            .enumerate()
            .map(|(index, batch)| BatchSummary {
                step: index + 1,
                material: materials.display_name(batch.key.material).to_owned(),
                texture: textures.display_name(batch.key.texture).to_owned(),
                mask: batch.isolation,
                members: if config.list_members {
                    report.members(batch).map(|e| e.name.clone()).collect()
                } else {
                    Vec::new()
                },
            })
            .collect();

        Self {
            total_draw_calls: report.draw_call_count(),
            batches,
        }
    }

    /// Pretty RON rendering of the summary
    pub fn to_ron(&self) -> Result<String, ConfigError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.batches.is_empty() {
            return writeln!(f, "No Graphic In Canvas!");
        }

        writeln!(f, "Total DrawCalls: {}", self.total_draw_calls)?;
        for batch in &self.batches {
            write!(f, "Batch Step: {}", batch.step)?;
            if batch.mask {
                write!(f, " (Exist Mask Component!)")?;
            }
            writeln!(f, " | Material: {} | Texture: {}", batch.material, batch.texture)?;
            for member in &batch.members {
                writeln!(f, "    {member}")?;
            }
        }
        Ok(())
    }
}

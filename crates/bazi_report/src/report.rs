//! Assemble every rendering of one chart and write export files.

use std::fs;
use std::path::{Path, PathBuf};

use bazi_base::{ClassificationFact, Pillar, aggregate};
use tracing::{debug, info};

use crate::config::ReportConfig;
use crate::error::ReportError;
use crate::prompt::{PromptKind, render_prompt};
use crate::record::{AnalysisRecord, PillarMap, StructuredPillar, structured};
use crate::text::render_lines;

/// File name of the exported analysis record.
pub const ANALYSIS_FILE_NAME: &str = "ten_gods_analysis.json";

/// All renderings of a classified chart.
#[derive(Debug, Clone)]
pub struct Report {
    /// One line per fact.
    pub lines: Vec<String>,
    /// Structured per-pillar record.
    pub structured: PillarMap<StructuredPillar>,
    /// Analysis record.
    pub analysis: AnalysisRecord,
    /// `analysis` as compact JSON.
    pub analysis_json: String,
    /// Enabled prompts, in Advisor, Yongshen order.
    pub prompts: Vec<(PromptKind, String)>,
}

impl Report {
    /// Render `facts` for the pillars in `present`.
    ///
    /// `config.hour_unknown` wins over `present`: when set, hour facts are
    /// left out of every rendering, not just the analysis record.
    pub fn build(
        facts: &[ClassificationFact],
        present: &[Pillar],
        config: &ReportConfig,
    ) -> Result<Self, ReportError> {
        let present: Vec<Pillar> = present
            .iter()
            .copied()
            .filter(|&p| !(config.hour_unknown && p == Pillar::Hour))
            .collect();
        let facts: Vec<ClassificationFact> = facts
            .iter()
            .copied()
            .filter(|f| present.contains(&f.pillar))
            .collect();

        let chart = aggregate(&facts, &present);
        let analysis = AnalysisRecord::new(&chart, config);
        let analysis_json = analysis.to_compact_json()?;

        let mut prompts = Vec::new();
        if config.include_advisor_prompt {
            prompts.push((PromptKind::Advisor, render_prompt(PromptKind::Advisor, &analysis_json)));
        }
        if config.include_yongshen_prompt {
            prompts.push((
                PromptKind::Yongshen,
                render_prompt(PromptKind::Yongshen, &analysis_json),
            ));
        }
        debug!(facts = facts.len(), prompts = prompts.len(), "report built");

        Ok(Self {
            lines: render_lines(&facts),
            structured: structured(&chart),
            analysis,
            analysis_json,
            prompts,
        })
    }

    /// Structured record as pretty JSON.
    pub fn structured_json_pretty(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(&self.structured)?)
    }

    /// Write the analysis JSON and each enabled prompt into `dir`.
    ///
    /// Returns the written paths. `dir` must exist.
    pub fn write_exports(&self, dir: &Path) -> Result<Vec<PathBuf>, ReportError> {
        let mut written = Vec::with_capacity(1 + self.prompts.len());
        written.push(write_file(dir, ANALYSIS_FILE_NAME, &self.analysis_json)?);
        for (kind, text) in &self.prompts {
            written.push(write_file(dir, kind.file_name(), text)?);
        }
        Ok(written)
    }
}

fn write_file(dir: &Path, name: &str, contents: &str) -> Result<PathBuf, ReportError> {
    let path = dir.join(name);
    fs::write(&path, contents).map_err(|source| ReportError::Write {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), bytes = contents.len(), "wrote export");
    Ok(path)
}

//! Renderings of Ten Gods classifications.
//!
//! Built purely on `bazi_base` output: text lines, a structured JSON record,
//! an analysis JSON record with placeholders, narrative prompt templates,
//! and export files.

pub mod config;
pub mod error;
pub mod prompt;
pub mod record;
pub mod report;
pub mod text;

pub use config::{Gender, ReportConfig};
pub use error::ReportError;
pub use prompt::{PromptKind, render_prompt};
pub use record::{
    AnalysisGods, AnalysisPillar, AnalysisRecord, BranchGods, PillarMap, StructuredPillar,
    SymbolGod, TierMap, UNKNOWN, structured,
};
pub use report::{ANALYSIS_FILE_NAME, Report};
pub use text::{fact_line, render_lines};

//! Report configuration: pass-through chart metadata and output toggles.

use std::str::FromStr;

use serde::Serialize;

use crate::error::ReportError;

/// Gender recorded alongside the chart. Does not affect classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Gender {
    #[default]
    #[serde(rename = "男")]
    Male,
    #[serde(rename = "女")]
    Female,
}

impl Gender {
    /// Chinese label.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "男",
            Self::Female => "女",
        }
    }
}

impl FromStr for Gender {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "男" | "male" | "m" => Ok(Self::Male),
            "女" | "female" | "f" => Ok(Self::Female),
            _ => Err(ReportError::UnknownGender(s.to_string())),
        }
    }
}

/// Which artifacts to produce and the metadata they carry.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportConfig {
    pub gender: Gender,
    /// Drop the hour pillar from the analysis record entirely.
    pub hour_unknown: bool,
    /// Produce the four-pillars advisor prompt.
    pub include_advisor_prompt: bool,
    /// Produce the useful-god (yongshen) prompt.
    pub include_yongshen_prompt: bool,
}

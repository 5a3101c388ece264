//! Serializable records built from aggregated pillars.
//!
//! Two shapes are produced:
//! - the structured record, mirroring `ChartRecord` (stem, branch, hidden stems);
//! - the analysis record, with gender and "不详" placeholders for anything
//!   unknown, meant to be embedded in narrative prompts.
//!
//! Keys are Chinese and emitted in chart/tier order, not sorted.

use bazi_base::{ChartRecord, Pillar, PillarRecord, Qi};
use serde::Serialize;

use crate::config::{Gender, ReportConfig};
use crate::error::ReportError;

/// Placeholder for unknown symbols and categories.
pub const UNKNOWN: &str = "不详";

/// Values keyed by pillar, serialized in Year, Month, Day, Hour order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PillarMap<T> {
    #[serde(rename = "年柱", skip_serializing_if = "Option::is_none")]
    pub year: Option<T>,
    #[serde(rename = "月柱", skip_serializing_if = "Option::is_none")]
    pub month: Option<T>,
    #[serde(rename = "日柱", skip_serializing_if = "Option::is_none")]
    pub day: Option<T>,
    #[serde(rename = "时柱", skip_serializing_if = "Option::is_none")]
    pub hour: Option<T>,
}

impl<T> PillarMap<T> {
    fn from_fn(mut f: impl FnMut(Pillar) -> Option<T>) -> Self {
        Self {
            year: f(Pillar::Year),
            month: f(Pillar::Month),
            day: f(Pillar::Day),
            hour: f(Pillar::Hour),
        }
    }

    /// Value for `pillar`, if present.
    pub fn get(&self, pillar: Pillar) -> Option<&T> {
        match pillar {
            Pillar::Year => self.year.as_ref(),
            Pillar::Month => self.month.as_ref(),
            Pillar::Day => self.day.as_ref(),
            Pillar::Hour => self.hour.as_ref(),
        }
    }
}

/// Values keyed by hidden-stem tier, serialized primary first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierMap<T> {
    #[serde(rename = "本气", skip_serializing_if = "Option::is_none")]
    pub benqi: Option<T>,
    #[serde(rename = "中气", skip_serializing_if = "Option::is_none")]
    pub zhongqi: Option<T>,
    #[serde(rename = "余气", skip_serializing_if = "Option::is_none")]
    pub yuqi: Option<T>,
}

impl<T> TierMap<T> {
    fn from_fn(mut f: impl FnMut(Qi) -> Option<T>) -> Self {
        Self {
            benqi: f(Qi::Benqi),
            zhongqi: f(Qi::Zhongqi),
            yuqi: f(Qi::Yuqi),
        }
    }

    fn is_empty(&self) -> bool {
        self.benqi.is_none() && self.zhongqi.is_none() && self.yuqi.is_none()
    }
}

// ---------------------------------------------------------------------------
// Structured record
// ---------------------------------------------------------------------------

/// A symbol and its classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbolGod {
    #[serde(rename = "字")]
    pub symbol: &'static str,
    #[serde(rename = "十神")]
    pub god: &'static str,
}

/// One pillar of the structured record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructuredPillar {
    #[serde(rename = "天干")]
    pub stem: Option<SymbolGod>,
    #[serde(rename = "地支")]
    pub branch: Option<&'static str>,
    #[serde(rename = "藏干")]
    pub hidden: TierMap<SymbolGod>,
}

impl From<&PillarRecord> for StructuredPillar {
    fn from(rec: &PillarRecord) -> Self {
        let stem = match (rec.stem, rec.stem_category) {
            (Some(s), Some(c)) => Some(SymbolGod {
                symbol: s.name(),
                god: c.name(),
            }),
            _ => None,
        };
        Self {
            stem,
            branch: rec.branch.map(|b| b.name()),
            hidden: TierMap::from_fn(|qi| {
                rec.hidden.get(&qi).map(|e| SymbolGod {
                    symbol: e.stem.name(),
                    god: e.category.name(),
                })
            }),
        }
    }
}

/// Structured record for every aggregated pillar.
pub fn structured(chart: &ChartRecord) -> PillarMap<StructuredPillar> {
    PillarMap::from_fn(|p| chart.get(&p).map(StructuredPillar::from))
}

// ---------------------------------------------------------------------------
// Analysis record
// ---------------------------------------------------------------------------

/// Branch classifications: by tier, or a bare placeholder list when the
/// pillar had no facts at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BranchGods {
    Tiers(TierMap<&'static str>),
    Unknown(Vec<&'static str>),
}

/// Stem and branch classifications of one pillar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisGods {
    #[serde(rename = "天干十神")]
    pub stem: Vec<&'static str>,
    #[serde(rename = "地支十神")]
    pub branch: BranchGods,
}

/// One pillar of the analysis record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisPillar {
    #[serde(rename = "天干")]
    pub stem: &'static str,
    #[serde(rename = "地支")]
    pub branch: &'static str,
    #[serde(rename = "十神")]
    pub gods: AnalysisGods,
}

impl AnalysisPillar {
    /// Placeholder for a pillar with no facts.
    pub fn unknown() -> Self {
        Self {
            stem: UNKNOWN,
            branch: UNKNOWN,
            gods: AnalysisGods {
                stem: vec![UNKNOWN],
                branch: BranchGods::Unknown(vec![UNKNOWN]),
            },
        }
    }

    fn from_record(rec: &PillarRecord) -> Self {
        let tiers = TierMap::from_fn(|qi| rec.hidden.get(&qi).map(|e| e.category.name()));
        // Engine output always carries hidden stems; only hand-built records hit this.
        let branch = if tiers.is_empty() {
            TierMap {
                benqi: Some(UNKNOWN),
                zhongqi: Some(UNKNOWN),
                yuqi: Some(UNKNOWN),
            }
        } else {
            tiers
        };
        Self {
            stem: rec.stem.map_or(UNKNOWN, |s| s.name()),
            branch: rec.branch.map_or(UNKNOWN, |b| b.name()),
            gods: AnalysisGods {
                stem: vec![rec.stem_category.map_or(UNKNOWN, |c| c.name())],
                branch: BranchGods::Tiers(branch),
            },
        }
    }
}

/// Gender plus the per-pillar analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisRecord {
    #[serde(rename = "性别")]
    pub gender: Gender,
    #[serde(rename = "八字输入")]
    pub pillars: PillarMap<AnalysisPillar>,
}

impl AnalysisRecord {
    /// Build from aggregated pillars. Every pillar is listed, with
    /// placeholders where nothing is known, except that the hour is
    /// dropped when `config.hour_unknown` is set.
    pub fn new(chart: &ChartRecord, config: &ReportConfig) -> Self {
        let pillars = PillarMap::from_fn(|p| {
            if p == Pillar::Hour && config.hour_unknown {
                return None;
            }
            Some(
                chart
                    .get(&p)
                    .map_or_else(AnalysisPillar::unknown, AnalysisPillar::from_record),
            )
        });
        Self {
            gender: config.gender,
            pillars,
        }
    }

    /// Compact JSON: no whitespace, non-ASCII kept as is.
    pub fn to_compact_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string(self)?)
    }
}

//! Reshape the flat fact list into per-pillar records.

use std::collections::BTreeMap;

use crate::dizhi::{Dizhi, Qi};
use crate::engine::{ClassificationFact, Facet};
use crate::pillar::Pillar;
use crate::shishen::Category;
use crate::tiangan::Tiangan;

/// A hidden stem and its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HiddenEntry {
    /// The hidden stem.
    pub stem: Tiangan,
    /// Its classification against the day stem.
    pub category: Category,
}

/// Aggregated view of one pillar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PillarRecord {
    /// Visible stem, if a stem fact was seen.
    pub stem: Option<Tiangan>,
    /// Classification of the visible stem. The day pillar reads Day Element.
    pub stem_category: Option<Category>,
    /// Branch, if any hidden-stem fact was seen.
    pub branch: Option<Dizhi>,
    /// Hidden stems keyed by tier. Tiers the branch lacks are absent.
    pub hidden: BTreeMap<Qi, HiddenEntry>,
}

/// Per-pillar records in chart order (Year, Month, Day, Hour).
pub type ChartRecord = BTreeMap<Pillar, PillarRecord>;

/// Group `facts` by pillar, keeping only pillars listed in `present`.
///
/// Facts are trusted as produced by the engine; no validation happens here.
pub fn aggregate(facts: &[ClassificationFact], present: &[Pillar]) -> ChartRecord {
    let mut chart = ChartRecord::new();

    for fact in facts {
        if !present.contains(&fact.pillar) {
            continue;
        }
        let record = chart.entry(fact.pillar).or_default();
        match fact.facet {
            Facet::Stem(stem) => {
                record.stem = Some(stem);
                record.stem_category = Some(if fact.pillar == Pillar::Day {
                    Category::DayElement
                } else {
                    fact.category
                });
            }
            Facet::HiddenStem { branch, stem, qi } => {
                record.branch = Some(branch);
                record.hidden.insert(
                    qi,
                    HiddenEntry {
                        stem,
                        category: fact.category,
                    },
                );
            }
        }
    }

    chart
}

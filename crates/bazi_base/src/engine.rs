//! Ten Gods relation engine.
//!
//! For every known pillar, in chart order, emits one fact for the visible
//! stem and one per hidden stem of the branch (primary, secondary, residual).
//! The day pillar's stem is the reference and is tagged Day Master; its
//! branch is classified like any other.

use tracing::{trace, warn};

use crate::dizhi::{Dizhi, Qi, hidden_stems};
use crate::pillar::{ALL_PILLARS, FourPillars, Pillar};
use crate::shishen::{Category, PolarityMatch, ten_god};
use crate::tiangan::Tiangan;
use crate::wuxing::{ElementCycle, resolve_relation_in};

/// What part of a pillar a fact describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    /// The pillar's visible stem.
    Stem(Tiangan),
    /// One stem hidden in the pillar's branch.
    HiddenStem {
        /// Branch the stem is hidden in.
        branch: Dizhi,
        /// The hidden stem.
        stem: Tiangan,
        /// Its tier within the branch.
        qi: Qi,
    },
}

/// One classified stem of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassificationFact {
    /// Pillar the stem belongs to.
    pub pillar: Pillar,
    /// Visible stem or hidden stem.
    pub facet: Facet,
    /// Classification against the day stem.
    pub category: Category,
}

impl ClassificationFact {
    /// The stem that was classified (visible or hidden).
    pub const fn stem(&self) -> Tiangan {
        match self.facet {
            Facet::Stem(s) => s,
            Facet::HiddenStem { stem, .. } => stem,
        }
    }

    /// Symbol shown for this fact: the stem for stem facts, the branch otherwise.
    pub const fn symbol(&self) -> &'static str {
        match self.facet {
            Facet::Stem(s) => s.name(),
            Facet::HiddenStem { branch, .. } => branch.name(),
        }
    }
}

/// Classify every stem of `chart` against `day_stem`.
///
/// Unknown pillars produce no facts. The result is deterministic: same
/// input, same facts in the same order.
pub fn classify(chart: &FourPillars, day_stem: Tiangan) -> Vec<ClassificationFact> {
    classify_with_cycle(chart, day_stem, &ElementCycle::CLASSICAL)
}

/// [`classify`] against a caller-supplied element cycle.
///
/// A pair the cycle leaves unrelated is tagged [`Category::Undefined`] and
/// classification continues with the next fact.
pub fn classify_with_cycle(
    chart: &FourPillars,
    day_stem: Tiangan,
    cycle: &ElementCycle,
) -> Vec<ClassificationFact> {
    let mut facts = Vec::with_capacity(16);

    for pillar in ALL_PILLARS {
        let Some(gz) = chart.get(pillar) else {
            continue;
        };

        let category = if pillar == Pillar::Day {
            Category::DayMaster
        } else {
            stem_category(cycle, day_stem, gz.stem)
        };
        facts.push(ClassificationFact {
            pillar,
            facet: Facet::Stem(gz.stem),
            category,
        });

        for hidden in hidden_stems(gz.branch) {
            facts.push(ClassificationFact {
                pillar,
                facet: Facet::HiddenStem {
                    branch: gz.branch,
                    stem: hidden.stem,
                    qi: hidden.qi,
                },
                category: stem_category(cycle, day_stem, hidden.stem),
            });
        }
    }

    facts
}

/// Category of `target` relative to `day_stem`.
fn stem_category(cycle: &ElementCycle, day_stem: Tiangan, target: Tiangan) -> Category {
    let Some(relation) = resolve_relation_in(cycle, day_stem.wuxing(), target.wuxing()) else {
        warn!(
            day = day_stem.name(),
            target = target.name(),
            "element cycle has no relation for pair"
        );
        return Category::Undefined;
    };
    let polarity = PolarityMatch::of(day_stem.yin_yang(), target.yin_yang());
    let god = ten_god(relation, polarity);
    trace!(
        day = day_stem.name(),
        target = target.name(),
        relation = relation.english_name(),
        god = god.name(),
        "classified"
    );
    Category::God(god)
}

/// Category of a single stem against a day stem, under the classical cycle.
pub fn classify_stem(day_stem: Tiangan, target: Tiangan) -> Category {
    stem_category(&ElementCycle::CLASSICAL, day_stem, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pillar::Ganzhi;
    use crate::shishen::TenGod;
    use crate::tiangan::ALL_TIANGAN;
    use crate::wuxing::Wuxing;

    fn gz(s: &str) -> Ganzhi {
        s.parse().unwrap()
    }

    fn chart(y: &str, m: &str, d: &str, h: Option<&str>) -> FourPillars {
        FourPillars::new(gz(y), gz(m), gz(d), h.map(gz))
    }

    #[test]
    fn gui_against_jia_is_zheng_yin() {
        assert_eq!(
            classify_stem(Tiangan::Jia, Tiangan::Gui),
            Category::God(TenGod::ZhengYin)
        );
    }

    #[test]
    fn jia_against_jia_is_bi_jian() {
        assert_eq!(
            classify_stem(Tiangan::Jia, Tiangan::Jia),
            Category::God(TenGod::BiJian)
        );
    }

    #[test]
    fn every_stem_pair_defined() {
        for d in ALL_TIANGAN {
            for t in ALL_TIANGAN {
                assert!(classify_stem(d, t).god().is_some(), "{d:?} {t:?}");
            }
        }
    }

    #[test]
    fn each_god_once_per_day_stem() {
        for d in ALL_TIANGAN {
            let mut gods: Vec<_> = ALL_TIANGAN
                .iter()
                .filter_map(|&t| classify_stem(d, t).god())
                .collect();
            gods.sort();
            gods.dedup();
            assert_eq!(gods.len(), 10, "day {d:?}");
        }
    }

    #[test]
    fn fact_order_and_count() {
        let facts = classify(&chart("甲子", "丙寅", "甲午", Some("丁卯")), Tiangan::Jia);
        // 子 1 + 寅 3 + 午 2 + 卯 1 hidden, plus 4 stems
        assert_eq!(facts.len(), 11);
        let pillars: Vec<_> = facts.iter().map(|f| f.pillar).collect();
        let mut expected = vec![Pillar::Year; 2];
        expected.extend([Pillar::Month; 4]);
        expected.extend([Pillar::Day; 3]);
        expected.extend([Pillar::Hour; 2]);
        assert_eq!(pillars, expected);
    }

    #[test]
    fn day_stem_is_day_master() {
        let facts = classify(&chart("甲子", "丙寅", "庚午", None), Tiangan::Geng);
        let day = facts
            .iter()
            .find(|f| f.pillar == Pillar::Day && matches!(f.facet, Facet::Stem(_)))
            .unwrap();
        assert_eq!(day.category, Category::DayMaster);
    }

    #[test]
    fn day_branch_classified_normally() {
        // 甲 day over 午: 丁 is I-generate/different -> 伤官, 己 I-control/different -> 正财
        let facts = classify(&chart("甲子", "丙寅", "甲午", None), Tiangan::Jia);
        let day_hidden: Vec<_> = facts
            .iter()
            .filter(|f| f.pillar == Pillar::Day && matches!(f.facet, Facet::HiddenStem { .. }))
            .map(|f| f.category)
            .collect();
        assert_eq!(
            day_hidden,
            vec![
                Category::God(TenGod::ShangGuan),
                Category::God(TenGod::ZhengCai)
            ]
        );
    }

    #[test]
    fn unknown_hour_emits_nothing() {
        let facts = classify(&chart("甲子", "丙寅", "甲午", None), Tiangan::Jia);
        assert!(facts.iter().all(|f| f.pillar != Pillar::Hour));
    }

    #[test]
    fn yin_branch_hidden_order() {
        let facts = classify(&chart("甲寅", "丙子", "甲午", None), Tiangan::Jia);
        let year: Vec<_> = facts
            .iter()
            .filter_map(|f| match f.facet {
                Facet::HiddenStem { stem, qi, .. } if f.pillar == Pillar::Year => Some((stem, qi)),
                _ => None,
            })
            .collect();
        assert_eq!(
            year,
            vec![
                (Tiangan::Jia, Qi::Benqi),
                (Tiangan::Bing, Qi::Zhongqi),
                (Tiangan::Wu, Qi::Yuqi),
            ]
        );
    }

    #[test]
    fn malformed_cycle_degrades_single_fact() {
        let mut broken = ElementCycle::CLASSICAL;
        broken.entries[Wuxing::Mu.index() as usize].controls = Wuxing::Huo;
        // Year 戊 (Earth) is now unrelated to a Wood day; everything else still classifies.
        let facts = classify_with_cycle(&chart("戊子", "丙寅", "甲午", None), Tiangan::Jia, &broken);
        assert_eq!(facts[0].category, Category::Undefined);
        assert_eq!(facts[1].category, Category::God(TenGod::ZhengYin));
        let undefined = facts.iter().filter(|f| f.category == Category::Undefined).count();
        // 戊 year stem, 戊 residual in 寅, 己 secondary in 午
        assert_eq!(undefined, 3);
    }

    #[test]
    fn fact_symbols() {
        let facts = classify(&chart("甲子", "丙寅", "甲午", None), Tiangan::Jia);
        assert_eq!(facts[0].symbol(), "甲");
        assert_eq!(facts[1].symbol(), "子");
        assert_eq!(facts[1].stem(), Tiangan::Gui);
    }
}

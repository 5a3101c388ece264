//! The Ten Gods (shishen) and the rule mapping element relation plus
//! polarity match onto them.
//!
//! | relation     | same polarity | different polarity |
//! |--------------|---------------|--------------------|
//! | Same         | 比肩          | 劫财               |
//! | Generates-me | 偏印          | 正印               |
//! | Controls-me  | 七杀          | 正官               |
//! | I-generate   | 食神          | 伤官               |
//! | I-control    | 偏财          | 正财               |

use crate::wuxing::{WuxingRelation, YinYang};

/// The 10 relational categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TenGod {
    BiJian,
    JieCai,
    ShiShen,
    ShangGuan,
    PianCai,
    ZhengCai,
    QiSha,
    ZhengGuan,
    PianYin,
    ZhengYin,
}

/// All 10 gods in traditional order.
pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::BiJian,
    TenGod::JieCai,
    TenGod::ShiShen,
    TenGod::ShangGuan,
    TenGod::PianCai,
    TenGod::ZhengCai,
    TenGod::QiSha,
    TenGod::ZhengGuan,
    TenGod::PianYin,
    TenGod::ZhengYin,
];

impl TenGod {
    /// Chinese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::BiJian => "比肩",
            Self::JieCai => "劫财",
            Self::ShiShen => "食神",
            Self::ShangGuan => "伤官",
            Self::PianCai => "偏财",
            Self::ZhengCai => "正财",
            Self::QiSha => "七杀",
            Self::ZhengGuan => "正官",
            Self::PianYin => "偏印",
            Self::ZhengYin => "正印",
        }
    }

    /// Common English rendering.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::BiJian => "Friend",
            Self::JieCai => "Rob Wealth",
            Self::ShiShen => "Eating God",
            Self::ShangGuan => "Hurting Officer",
            Self::PianCai => "Indirect Wealth",
            Self::ZhengCai => "Direct Wealth",
            Self::QiSha => "Seven Killings",
            Self::ZhengGuan => "Direct Officer",
            Self::PianYin => "Indirect Seal",
            Self::ZhengYin => "Proper Seal",
        }
    }
}

/// Whether a stem shares the day stem's polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolarityMatch {
    Same,
    Different,
}

impl PolarityMatch {
    /// Compare two polarities.
    pub fn of(day: YinYang, target: YinYang) -> Self {
        if day == target {
            Self::Same
        } else {
            Self::Different
        }
    }
}

/// Ten God for a relation and polarity match. Total over all 10 inputs.
pub const fn ten_god(relation: WuxingRelation, polarity: PolarityMatch) -> TenGod {
    use PolarityMatch as P;
    use WuxingRelation as R;

    match (relation, polarity) {
        (R::Same, P::Same) => TenGod::BiJian,
        (R::Same, P::Different) => TenGod::JieCai,
        (R::GeneratesMe, P::Same) => TenGod::PianYin,
        (R::GeneratesMe, P::Different) => TenGod::ZhengYin,
        (R::ControlsMe, P::Same) => TenGod::QiSha,
        (R::ControlsMe, P::Different) => TenGod::ZhengGuan,
        (R::IGenerate, P::Same) => TenGod::ShiShen,
        (R::IGenerate, P::Different) => TenGod::ShangGuan,
        (R::IControl, P::Same) => TenGod::PianCai,
        (R::IControl, P::Different) => TenGod::ZhengCai,
    }
}

/// Classification attached to a single fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// One of the ten gods.
    God(TenGod),
    /// The day pillar's own stem, as emitted by the engine (日主).
    DayMaster,
    /// The day pillar's stem as labelled in aggregated output (日元).
    DayElement,
    /// The element cycle left the pair unrelated (关系未定义).
    Undefined,
}

impl Category {
    /// Chinese label.
    pub const fn name(self) -> &'static str {
        match self {
            Self::God(g) => g.name(),
            Self::DayMaster => "日主",
            Self::DayElement => "日元",
            Self::Undefined => "关系未定义",
        }
    }

    /// English label.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::God(g) => g.english_name(),
            Self::DayMaster => "Day Master",
            Self::DayElement => "Day Element",
            Self::Undefined => "undefined",
        }
    }

    /// The god, if this is one.
    pub const fn god(self) -> Option<TenGod> {
        match self {
            Self::God(g) => Some(g),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wuxing::ALL_RELATIONS;

    #[test]
    fn rule_table_is_bijective() {
        let mut out = Vec::new();
        for r in ALL_RELATIONS {
            for p in [PolarityMatch::Same, PolarityMatch::Different] {
                out.push(ten_god(r, p));
            }
        }
        out.sort();
        assert_eq!(out, ALL_TEN_GODS.to_vec());
    }

    #[test]
    fn names_distinct() {
        for a in ALL_TEN_GODS {
            for b in ALL_TEN_GODS {
                if a != b {
                    assert_ne!(a.name(), b.name());
                }
            }
        }
    }

    #[test]
    fn generates_me_different_is_zheng_yin() {
        let g = ten_god(WuxingRelation::GeneratesMe, PolarityMatch::Different);
        assert_eq!(g, TenGod::ZhengYin);
        assert_eq!(g.name(), "正印");
    }

    #[test]
    fn polarity_match() {
        assert_eq!(PolarityMatch::of(YinYang::Yang, YinYang::Yang), PolarityMatch::Same);
        assert_eq!(
            PolarityMatch::of(YinYang::Yang, YinYang::Yin),
            PolarityMatch::Different
        );
    }

    #[test]
    fn category_labels() {
        assert_eq!(Category::DayMaster.name(), "日主");
        assert_eq!(Category::DayElement.name(), "日元");
        assert_eq!(Category::Undefined.name(), "关系未定义");
        assert_eq!(Category::God(TenGod::QiSha).to_string(), "七杀");
        assert_eq!(Category::DayMaster.god(), None);
    }
}

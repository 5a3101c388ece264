//! Earthly branches (dizhi) and their hidden stems (canggan).
//!
//! Each branch hides one to three stems, listed by strength: the primary
//! qi (本气), then the secondary (中气), then the residual (余气).
//! 子卯酉 hold a single stem, 午亥 hold two, the other seven hold three.

use std::str::FromStr;

use crate::error::{BaziError, SymbolKind};
use crate::tiangan::Tiangan;

/// The 12 earthly branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dizhi {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in traditional order (index 0 = Zi).
pub const ALL_DIZHI: [Dizhi; 12] = [
    Dizhi::Zi,
    Dizhi::Chou,
    Dizhi::Yin,
    Dizhi::Mao,
    Dizhi::Chen,
    Dizhi::Si,
    Dizhi::Wu,
    Dizhi::Wei,
    Dizhi::Shen,
    Dizhi::You,
    Dizhi::Xu,
    Dizhi::Hai,
];

impl Dizhi {
    /// Chinese character of the branch.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// Toneless pinyin of the branch.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Zi => "zi",
            Self::Chou => "chou",
            Self::Yin => "yin",
            Self::Mao => "mao",
            Self::Chen => "chen",
            Self::Si => "si",
            Self::Wu => "wu",
            Self::Wei => "wei",
            Self::Shen => "shen",
            Self::You => "you",
            Self::Xu => "xu",
            Self::Hai => "hai",
        }
    }

    /// 0-based index into ALL_DIZHI.
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }
}

impl std::fmt::Display for Dizhi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dizhi {
    type Err = BaziError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        ALL_DIZHI
            .into_iter()
            .find(|z| z.name() == t || z.pinyin().eq_ignore_ascii_case(t))
            .ok_or_else(|| BaziError::unknown(SymbolKind::Branch, s))
    }
}

/// Strength tier of a hidden stem within its branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Qi {
    /// Primary qi (本气).
    Benqi,
    /// Secondary qi (中气).
    Zhongqi,
    /// Residual qi (余气).
    Yuqi,
}

/// All 3 tiers in priority order.
pub const ALL_QI: [Qi; 3] = [Qi::Benqi, Qi::Zhongqi, Qi::Yuqi];

impl Qi {
    /// Chinese name of the tier.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Benqi => "本气",
            Self::Zhongqi => "中气",
            Self::Yuqi => "余气",
        }
    }

    /// English name of the tier.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Benqi => "Primary",
            Self::Zhongqi => "Secondary",
            Self::Yuqi => "Residual",
        }
    }
}

/// A stem hidden inside a branch, with its tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HiddenStem {
    /// The hidden stem.
    pub stem: Tiangan,
    /// Its strength tier within the branch.
    pub qi: Qi,
}

const fn hs(stem: Tiangan, qi: Qi) -> HiddenStem {
    HiddenStem { stem, qi }
}

/// Hidden stems per branch, indexed by `Dizhi::index()`.
///
/// 子 [癸], 丑 [己 癸 辛], 寅 [甲 丙 戊], 卯 [乙], 辰 [戊 乙 癸], 巳 [丙 庚 戊],
/// 午 [丁 己], 未 [己 丁 乙], 申 [庚 壬 戊], 酉 [辛], 戌 [戊 辛 丁], 亥 [壬 甲].
const HIDDEN_STEMS: [&[HiddenStem]; 12] = {
    use Qi::*;
    use Tiangan::*;
    [
        &[hs(Gui, Benqi)],
        &[hs(Ji, Benqi), hs(Gui, Zhongqi), hs(Xin, Yuqi)],
        &[hs(Jia, Benqi), hs(Bing, Zhongqi), hs(Wu, Yuqi)],
        &[hs(Yi, Benqi)],
        &[hs(Wu, Benqi), hs(Yi, Zhongqi), hs(Gui, Yuqi)],
        &[hs(Bing, Benqi), hs(Geng, Zhongqi), hs(Wu, Yuqi)],
        &[hs(Ding, Benqi), hs(Ji, Zhongqi)],
        &[hs(Ji, Benqi), hs(Ding, Zhongqi), hs(Yi, Yuqi)],
        &[hs(Geng, Benqi), hs(Ren, Zhongqi), hs(Wu, Yuqi)],
        &[hs(Xin, Benqi)],
        &[hs(Wu, Benqi), hs(Xin, Zhongqi), hs(Ding, Yuqi)],
        &[hs(Ren, Benqi), hs(Jia, Zhongqi)],
    ]
};

/// Hidden stems of a branch, primary first.
pub const fn hidden_stems(branch: Dizhi) -> &'static [HiddenStem] {
    HIDDEN_STEMS[branch.index() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip() {
        for (i, z) in ALL_DIZHI.iter().enumerate() {
            assert_eq!(z.index() as usize, i);
        }
    }

    #[test]
    fn tier_counts() {
        let count = |n: usize| ALL_DIZHI.iter().filter(|&&z| hidden_stems(z).len() == n).count();
        assert_eq!(count(1), 3);
        assert_eq!(count(2), 2);
        assert_eq!(count(3), 7);
    }

    #[test]
    fn tiers_in_priority_order() {
        for z in ALL_DIZHI {
            for (i, h) in hidden_stems(z).iter().enumerate() {
                assert_eq!(h.qi, ALL_QI[i], "{z:?} position {i}");
            }
        }
    }

    #[test]
    fn yin_hides_jia_bing_wu() {
        assert_eq!(
            hidden_stems(Dizhi::Yin),
            &[
                hs(Tiangan::Jia, Qi::Benqi),
                hs(Tiangan::Bing, Qi::Zhongqi),
                hs(Tiangan::Wu, Qi::Yuqi),
            ]
        );
    }

    #[test]
    fn pure_branches() {
        assert_eq!(hidden_stems(Dizhi::Zi), &[hs(Tiangan::Gui, Qi::Benqi)]);
        assert_eq!(hidden_stems(Dizhi::Mao), &[hs(Tiangan::Yi, Qi::Benqi)]);
        assert_eq!(hidden_stems(Dizhi::You), &[hs(Tiangan::Xin, Qi::Benqi)]);
    }

    #[test]
    fn parse_character_and_pinyin() {
        assert_eq!("寅".parse::<Dizhi>(), Ok(Dizhi::Yin));
        assert_eq!("HAI".parse::<Dizhi>(), Ok(Dizhi::Hai));
        assert!("甲".parse::<Dizhi>().is_err());
    }
}

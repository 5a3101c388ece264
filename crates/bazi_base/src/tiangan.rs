//! Heavenly stems (tiangan) and their element/polarity table.
//!
//! Stems pair up by element in generation order, yang first:
//! 甲乙 Wood, 丙丁 Fire, 戊己 Earth, 庚辛 Metal, 壬癸 Water.

use std::str::FromStr;

use crate::error::{BaziError, SymbolKind};
use crate::wuxing::{Wuxing, YinYang};

/// The 10 heavenly stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tiangan {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in traditional order (index 0 = Jia).
pub const ALL_TIANGAN: [Tiangan; 10] = [
    Tiangan::Jia,
    Tiangan::Yi,
    Tiangan::Bing,
    Tiangan::Ding,
    Tiangan::Wu,
    Tiangan::Ji,
    Tiangan::Geng,
    Tiangan::Xin,
    Tiangan::Ren,
    Tiangan::Gui,
];

impl Tiangan {
    /// Chinese character of the stem.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// Toneless pinyin of the stem.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Jia => "jia",
            Self::Yi => "yi",
            Self::Bing => "bing",
            Self::Ding => "ding",
            Self::Wu => "wu",
            Self::Ji => "ji",
            Self::Geng => "geng",
            Self::Xin => "xin",
            Self::Ren => "ren",
            Self::Gui => "gui",
        }
    }

    /// 0-based index into ALL_TIANGAN.
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Element of the stem.
    pub const fn wuxing(self) -> Wuxing {
        match self {
            Self::Jia | Self::Yi => Wuxing::Mu,
            Self::Bing | Self::Ding => Wuxing::Huo,
            Self::Wu | Self::Ji => Wuxing::Tu,
            Self::Geng | Self::Xin => Wuxing::Jin,
            Self::Ren | Self::Gui => Wuxing::Shui,
        }
    }

    /// Polarity of the stem. Even indices are yang.
    pub const fn yin_yang(self) -> YinYang {
        if self.index() % 2 == 0 {
            YinYang::Yang
        } else {
            YinYang::Yin
        }
    }
}

impl std::fmt::Display for Tiangan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tiangan {
    type Err = BaziError;

    /// Accepts the character (`甲`) or toneless pinyin (`jia`, any case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        ALL_TIANGAN
            .into_iter()
            .find(|g| g.name() == t || g.pinyin().eq_ignore_ascii_case(t))
            .ok_or_else(|| BaziError::unknown(SymbolKind::Stem, s))
    }
}

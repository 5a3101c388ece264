//! Pillars, stem/branch pairs, and the four-pillar chart input.

use std::str::FromStr;

use crate::dizhi::Dizhi;
use crate::error::{BaziError, SymbolKind};
use crate::tiangan::Tiangan;

/// The four time pillars, in chart order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Pillar {
    Year,
    Month,
    Day,
    Hour,
}

/// All 4 pillars in chart order.
pub const ALL_PILLARS: [Pillar; 4] = [Pillar::Year, Pillar::Month, Pillar::Day, Pillar::Hour];

impl Pillar {
    /// Chinese name (年柱 etc).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "年柱",
            Self::Month => "月柱",
            Self::Day => "日柱",
            Self::Hour => "时柱",
        }
    }

    /// English name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Month => "Month",
            Self::Day => "Day",
            Self::Hour => "Hour",
        }
    }

    /// 0-based index into ALL_PILLARS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Year => 0,
            Self::Month => 1,
            Self::Day => 2,
            Self::Hour => 3,
        }
    }
}

/// A stem over a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ganzhi {
    /// Visible heavenly stem.
    pub stem: Tiangan,
    /// Earthly branch below it.
    pub branch: Dizhi,
}

impl Ganzhi {
    pub const fn new(stem: Tiangan, branch: Dizhi) -> Self {
        Self { stem, branch }
    }

    /// Parse separate stem and branch symbols.
    pub fn from_symbols(stem: &str, branch: &str) -> Result<Self, BaziError> {
        Ok(Self::new(stem.parse()?, branch.parse()?))
    }
}

impl std::fmt::Display for Ganzhi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

impl FromStr for Ganzhi {
    type Err = BaziError;

    /// Accepts `甲子` or `jia-zi` / `jia zi`.
    ///
    /// A bad stem or branch reports that part with its own valid set; only
    /// input of the wrong shape is reported as a ganzhi error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();

        if let Some((stem, branch)) = t.split_once(['-', ' ']) {
            return Self::from_symbols(stem, branch);
        }

        let mut chars = t.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), None) => {
                let mut buf = [0u8; 4];
                let stem: Tiangan = a.encode_utf8(&mut buf).parse()?;
                let branch: Dizhi = b.encode_utf8(&mut buf).parse()?;
                Ok(Self::new(stem, branch))
            }
            _ => Err(BaziError::unknown(SymbolKind::Ganzhi, s)),
        }
    }
}

/// The four pillars of a chart. A `None` slot is a pillar flagged unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FourPillars {
    /// Indexed by `Pillar::index()`.
    pub pillars: [Option<Ganzhi>; 4],
}

impl FourPillars {
    /// Year, month and day are always known; the hour may be omitted.
    pub const fn new(year: Ganzhi, month: Ganzhi, day: Ganzhi, hour: Option<Ganzhi>) -> Self {
        Self {
            pillars: [Some(year), Some(month), Some(day), hour],
        }
    }

    /// Validate all eight symbols, then build the chart.
    ///
    /// `hour` is `None` when the hour is unknown. Every symbol is checked
    /// before anything is classified.
    pub fn from_symbols(
        year: (&str, &str),
        month: (&str, &str),
        day: (&str, &str),
        hour: Option<(&str, &str)>,
    ) -> Result<Self, BaziError> {
        let year = Ganzhi::from_symbols(year.0, year.1)?;
        let month = Ganzhi::from_symbols(month.0, month.1)?;
        let day = Ganzhi::from_symbols(day.0, day.1)?;
        let hour = hour.map(|(s, b)| Ganzhi::from_symbols(s, b)).transpose()?;
        Ok(Self::new(year, month, day, hour))
    }

    /// Same chart with `pillar` flagged unknown.
    pub const fn without(mut self, pillar: Pillar) -> Self {
        self.pillars[pillar.index() as usize] = None;
        self
    }

    /// The pillar's stem and branch, or None if unknown.
    pub const fn get(&self, pillar: Pillar) -> Option<Ganzhi> {
        self.pillars[pillar.index() as usize]
    }

    /// Stem of the day pillar, the usual reference for classification.
    pub fn day_stem(&self) -> Option<Tiangan> {
        self.get(Pillar::Day).map(|gz| gz.stem)
    }

    /// Pillars that are not flagged unknown, in chart order.
    pub fn present(&self) -> Vec<Pillar> {
        ALL_PILLARS
            .into_iter()
            .filter(|p| self.get(*p).is_some())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pillar_order() {
        assert!(Pillar::Year < Pillar::Month);
        assert!(Pillar::Day < Pillar::Hour);
        for (i, p) in ALL_PILLARS.iter().enumerate() {
            assert_eq!(p.index() as usize, i);
        }
    }

    #[test]
    fn parse_ganzhi_characters() {
        let gz: Ganzhi = "甲子".parse().unwrap();
        assert_eq!(gz, Ganzhi::new(Tiangan::Jia, Dizhi::Zi));
        assert_eq!(gz.to_string(), "甲子");
    }

    #[test]
    fn parse_ganzhi_pinyin() {
        let gz: Ganzhi = "wu-wu".parse().unwrap();
        assert_eq!(gz, Ganzhi::new(Tiangan::Wu, Dizhi::Wu));
        let gz: Ganzhi = "Geng Shen".parse().unwrap();
        assert_eq!(gz, Ganzhi::new(Tiangan::Geng, Dizhi::Shen));
    }

    #[test]
    fn parse_ganzhi_rejects_swapped() {
        let err = "子甲".parse::<Ganzhi>().unwrap_err();
        assert_eq!(err, BaziError::unknown(SymbolKind::Stem, "子"));
    }

    #[test]
    fn parse_ganzhi_reports_bad_branch_with_branch_set() {
        let err = "甲X".parse::<Ganzhi>().unwrap_err();
        assert_eq!(err, BaziError::unknown(SymbolKind::Branch, "X"));
        assert!(err.to_string().contains("子 丑 寅 卯"), "{err}");

        let err = "jia-q".parse::<Ganzhi>().unwrap_err();
        assert_eq!(err, BaziError::unknown(SymbolKind::Branch, "q"));
    }

    #[test]
    fn parse_ganzhi_rejects_wrong_length() {
        for s in ["甲", "甲子丑", ""] {
            let err = s.parse::<Ganzhi>().unwrap_err();
            assert!(
                matches!(err, BaziError::UnknownSymbol { kind: SymbolKind::Ganzhi, .. }),
                "{s:?}"
            );
        }
    }

    #[test]
    fn from_symbols_reports_first_bad_symbol() {
        let err = FourPillars::from_symbols(("甲", "子"), ("丙", "X"), ("甲", "午"), None)
            .unwrap_err();
        assert_eq!(
            err,
            BaziError::UnknownSymbol {
                kind: SymbolKind::Branch,
                symbol: "X".to_string()
            }
        );
    }

    #[test]
    fn from_symbols_rejects_bad_hour() {
        let r = FourPillars::from_symbols(("甲", "子"), ("丙", "寅"), ("甲", "午"), Some(("不详", "不详")));
        assert!(r.is_err());
    }

    #[test]
    fn present_skips_unknown() {
        let gz = Ganzhi::new(Tiangan::Jia, Dizhi::Zi);
        let chart = FourPillars::new(gz, gz, gz, None);
        assert_eq!(chart.present(), vec![Pillar::Year, Pillar::Month, Pillar::Day]);
        let chart = FourPillars::new(gz, gz, gz, Some(gz)).without(Pillar::Month);
        assert_eq!(chart.present(), vec![Pillar::Year, Pillar::Day, Pillar::Hour]);
        assert_eq!(chart.day_stem(), Some(Tiangan::Jia));
    }
}

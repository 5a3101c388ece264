//! Error types for Four Pillars classification.

use thiserror::Error;

/// Which closed symbol set an input was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    /// One of the 10 heavenly stems.
    Stem,
    /// One of the 12 earthly branches.
    Branch,
    /// A stem+branch pair such as `甲子`.
    Ganzhi,
}

impl SymbolKind {
    /// Human-readable list of valid inputs, for diagnostics.
    pub const fn valid_symbols(self) -> &'static str {
        match self {
            Self::Stem => "甲 乙 丙 丁 戊 己 庚 辛 壬 癸 (or pinyin jia..gui)",
            Self::Branch => "子 丑 寅 卯 辰 巳 午 未 申 酉 戌 亥 (or pinyin zi..hai)",
            Self::Ganzhi => "stem + branch, e.g. 甲子 or jia-zi",
        }
    }
}

impl std::fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Stem => "stem",
            Self::Branch => "branch",
            Self::Ganzhi => "ganzhi",
        };
        f.write_str(s)
    }
}

/// Errors from symbol parsing and chart construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BaziError {
    /// Input is not a member of the closed stem/branch symbol sets.
    #[error("unknown {kind} symbol {symbol:?}; valid: {}", .kind.valid_symbols())]
    UnknownSymbol {
        /// Set the symbol was checked against.
        kind: SymbolKind,
        /// The rejected input, verbatim.
        symbol: String,
    },
}

impl BaziError {
    pub(crate) fn unknown(kind: SymbolKind, symbol: &str) -> Self {
        Self::UnknownSymbol {
            kind,
            symbol: symbol.to_string(),
        }
    }
}

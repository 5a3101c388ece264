//! Ten Gods (shishen) classification for Four Pillars (bazi) charts.
//!
//! This crate provides:
//! - Stem, branch, element and polarity tables
//! - The five-element generation/control relation resolver
//! - The relation engine (`classify`) emitting one fact per visible or hidden stem
//! - The aggregator (`aggregate`) grouping facts into per-pillar records
//!
//! Everything is pure and table-driven; pillars are supplied pre-computed.

pub mod aggregate;
pub mod dizhi;
pub mod engine;
pub mod error;
pub mod pillar;
pub mod shishen;
pub mod tiangan;
pub mod wuxing;

pub use aggregate::{ChartRecord, HiddenEntry, PillarRecord, aggregate};
pub use dizhi::{ALL_DIZHI, ALL_QI, Dizhi, HiddenStem, Qi, hidden_stems};
pub use engine::{ClassificationFact, Facet, classify, classify_stem, classify_with_cycle};
pub use error::{BaziError, SymbolKind};
pub use pillar::{ALL_PILLARS, FourPillars, Ganzhi, Pillar};
pub use shishen::{ALL_TEN_GODS, Category, PolarityMatch, TenGod, ten_god};
pub use tiangan::{ALL_TIANGAN, Tiangan};
pub use wuxing::{
    ALL_RELATIONS, ALL_WUXING, CycleEntry, ElementCycle, Wuxing, WuxingRelation, YinYang,
    resolve_relation, resolve_relation_in,
};

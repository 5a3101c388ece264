//! Five elements (wuxing), yin/yang polarity, and the generation/control cycle.
//!
//! Generation runs Wood -> Fire -> Earth -> Metal -> Water -> Wood.
//! Control skips one step: Wood -> Earth -> Water -> Fire -> Metal -> Wood.

/// The five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Wuxing {
    Mu,
    Huo,
    Tu,
    Jin,
    Shui,
}

/// All 5 elements in generation order (index 0 = Mu).
pub const ALL_WUXING: [Wuxing; 5] = [
    Wuxing::Mu,
    Wuxing::Huo,
    Wuxing::Tu,
    Wuxing::Jin,
    Wuxing::Shui,
];

impl Wuxing {
    /// Chinese name of the element.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mu => "木",
            Self::Huo => "火",
            Self::Tu => "土",
            Self::Jin => "金",
            Self::Shui => "水",
        }
    }

    /// English name of the element.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Mu => "Wood",
            Self::Huo => "Fire",
            Self::Tu => "Earth",
            Self::Jin => "Metal",
            Self::Shui => "Water",
        }
    }

    /// 0-based index into ALL_WUXING.
    pub const fn index(self) -> u8 {
        match self {
            Self::Mu => 0,
            Self::Huo => 1,
            Self::Tu => 2,
            Self::Jin => 3,
            Self::Shui => 4,
        }
    }
}

/// Yin/yang polarity of a stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YinYang {
    Yang,
    Yin,
}

impl YinYang {
    /// Chinese name of the polarity.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "阳",
            Self::Yin => "阴",
        }
    }
}

/// How a target element stands relative to a reference (day) element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WuxingRelation {
    /// Same element (同我).
    Same,
    /// Target generates the reference (生我).
    GeneratesMe,
    /// Reference generates the target (我生).
    IGenerate,
    /// Target controls the reference (克我).
    ControlsMe,
    /// Reference controls the target (我克).
    IControl,
}

/// All 5 relation kinds.
pub const ALL_RELATIONS: [WuxingRelation; 5] = [
    WuxingRelation::Same,
    WuxingRelation::GeneratesMe,
    WuxingRelation::IGenerate,
    WuxingRelation::ControlsMe,
    WuxingRelation::IControl,
];

impl WuxingRelation {
    /// Chinese name of the relation.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Same => "同我",
            Self::GeneratesMe => "生我",
            Self::IGenerate => "我生",
            Self::ControlsMe => "克我",
            Self::IControl => "我克",
        }
    }

    /// English name of the relation.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Same => "Same",
            Self::GeneratesMe => "Generates-me",
            Self::IGenerate => "I-generate",
            Self::ControlsMe => "Controls-me",
            Self::IControl => "I-control",
        }
    }
}

/// Neighbours of one element in the generation/control cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleEntry {
    /// Element that generates this one.
    pub generated_by: Wuxing,
    /// Element this one generates.
    pub generates: Wuxing,
    /// Element that controls this one.
    pub controlled_by: Wuxing,
    /// Element this one controls.
    pub controls: Wuxing,
}

/// Generation/control cycle, one entry per element indexed by `Wuxing::index()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementCycle {
    /// Neighbours of each element, indexed by `Wuxing::index()`.
    pub entries: [CycleEntry; 5],
}

impl ElementCycle {
    /// The classical cycle.
    pub const CLASSICAL: ElementCycle = ElementCycle {
        entries: [
            // Mu
            CycleEntry {
                generated_by: Wuxing::Shui,
                generates: Wuxing::Huo,
                controlled_by: Wuxing::Jin,
                controls: Wuxing::Tu,
            },
            // Huo
            CycleEntry {
                generated_by: Wuxing::Mu,
                generates: Wuxing::Tu,
                controlled_by: Wuxing::Shui,
                controls: Wuxing::Jin,
            },
            // Tu
            CycleEntry {
                generated_by: Wuxing::Huo,
                generates: Wuxing::Jin,
                controlled_by: Wuxing::Mu,
                controls: Wuxing::Shui,
            },
            // Jin
            CycleEntry {
                generated_by: Wuxing::Tu,
                generates: Wuxing::Shui,
                controlled_by: Wuxing::Huo,
                controls: Wuxing::Mu,
            },
            // Shui
            CycleEntry {
                generated_by: Wuxing::Jin,
                generates: Wuxing::Mu,
                controlled_by: Wuxing::Tu,
                controls: Wuxing::Huo,
            },
        ],
    };

    /// Cycle neighbours of `element`.
    pub const fn entry(&self, element: Wuxing) -> CycleEntry {
        self.entries[element.index() as usize]
    }
}

impl Default for ElementCycle {
    fn default() -> Self {
        Self::CLASSICAL
    }
}

/// Relation of `target` to `day` under the classical cycle.
///
/// Total over the 25 element pairs; the `Option` only matters for
/// [`resolve_relation_in`] with a hand-built cycle.
pub fn resolve_relation(day: Wuxing, target: Wuxing) -> Option<WuxingRelation> {
    resolve_relation_in(&ElementCycle::CLASSICAL, day, target)
}

/// Relation of `target` to `day` under an arbitrary cycle table.
///
/// Checks run Same, GeneratesMe, IGenerate, ControlsMe, IControl; the first
/// hit wins. Returns None when the table leaves the pair unrelated.
pub fn resolve_relation_in(
    cycle: &ElementCycle,
    day: Wuxing,
    target: Wuxing,
) -> Option<WuxingRelation> {
    if day == target {
        return Some(WuxingRelation::Same);
    }
    let e = cycle.entry(day);
    if e.generated_by == target {
        Some(WuxingRelation::GeneratesMe)
    } else if e.generates == target {
        Some(WuxingRelation::IGenerate)
    } else if e.controlled_by == target {
        Some(WuxingRelation::ControlsMe)
    } else if e.controls == target {
        Some(WuxingRelation::IControl)
    } else {
        None
    }
}

//! One human-readable line per classification fact.

use bazi_base::{ClassificationFact, Facet};

/// `年柱天干[甲]：比肩` or `年柱地支[子]的本气[癸]：正印`.
pub fn fact_line(fact: &ClassificationFact) -> String {
    match fact.facet {
        Facet::Stem(stem) => format!("{}天干[{}]：{}", fact.pillar.name(), stem, fact.category),
        Facet::HiddenStem { branch, stem, qi } => format!(
            "{}地支[{}]的{}[{}]：{}",
            fact.pillar.name(),
            branch,
            qi.name(),
            stem,
            fact.category
        ),
    }
}

/// Lines for every fact, in fact order.
pub fn render_lines(facts: &[ClassificationFact]) -> Vec<String> {
    facts.iter().map(fact_line).collect()
}

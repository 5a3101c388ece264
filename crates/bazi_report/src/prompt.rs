//! Narrative prompt templates.
//!
//! Pure string templating: the compact analysis JSON is embedded verbatim.
//! No favourable/unfavourable god reasoning happens here.

/// Available prompt templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// General four-pillars advisor (四柱命理顾问).
    Advisor,
    /// Advisor asked to enumerate useful-god (用神) methods.
    Yongshen,
}

impl PromptKind {
    /// File name used when exporting this prompt.
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Advisor => "ten_gods_advisor_prompt.txt",
            Self::Yongshen => "ten_gods_yongshen_prompt.txt",
        }
    }
}

const ROLE: &str = "我希望你扮演一位四柱（八字）命理顾问的角色。我将向你提供一个人的八字，你的任务是运用中国传统命理学来解读此人的八字命盘。你需要分析他们的天干地支，月令作用，是否有根气，五行流转，找出其用神与忌神，";

const YONGSHEN_METHODS: &str = "用神取用方法为扶抑、病药、调候、专旺、通关五种，分别罗列。扶抑分为扶抑日元和月令两种情况，都需要考虑。";

const INSIGHT: &str = "并提供关于其性格特质，潜在的人生命运走向的见解。你的解读应基于传统八字理论，并清楚地解释你的推理过程与分析依据。\n此外，请根据其五行平衡情况，提供具体建议，帮助他们在事业方向，人际关系，健康状况或自我修养方面实现生活的和谐。如有必要，也可结合传统智慧给与文化或情感方面的指导。\n";

/// Render the prompt, embedding `analysis_json`.
pub fn render_prompt(kind: PromptKind, analysis_json: &str) -> String {
    let methods = match kind {
        PromptKind::Advisor => "",
        PromptKind::Yongshen => YONGSHEN_METHODS,
    };
    format!(
        "{ROLE}{methods}{INSIGHT}我的第一个请求是：“我想为一个八字为{analysis_json}的人进行八字命理分析”"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advisor_embeds_json() {
        let p = render_prompt(PromptKind::Advisor, r#"{"性别":"男"}"#);
        assert!(p.starts_with("我希望你扮演一位四柱（八字）命理顾问的角色。"));
        assert!(p.ends_with(r#"我想为一个八字为{"性别":"男"}的人进行八字命理分析”"#));
        assert!(!p.contains("扶抑"));
    }

    #[test]
    fn yongshen_lists_methods() {
        let p = render_prompt(PromptKind::Yongshen, "{}");
        assert!(p.contains("找出其用神与忌神，用神取用方法为扶抑、病药、调候、专旺、通关五种"));
        assert!(p.contains("都需要考虑。并提供关于其性格特质"));
    }
}

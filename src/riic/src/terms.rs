//! Rich text styles and glossary terms
//!
//! `gamedata_const.json` holds the color styles and term descriptions used in
//! skill descriptions. Only entries whose key starts with [`KEY_PREFIX`] are
//! kept.

use indexmap::IndexMap;
use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;

/// Key prefix shared by the styles and terms base skills use
pub const KEY_PREFIX: &str = "cc";

/// The parts of `gamedata_const.json` the pipeline reads
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConstants {
    pub rich_text_styles: IndexMap<String, String>,
    pub term_description_dict: IndexMap<String, TermRecord>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermRecord {
    pub description: String,
}

/// Merge two locale tables; on a shared key the later table wins
pub fn merge_locales<V>(mut earlier: IndexMap<String, V>, later: IndexMap<String, V>) -> IndexMap<String, V> {
    earlier.extend(later);
    earlier
}

fn hex_color_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"#[0-9A-Fa-f]{6}").expect("valid color pattern"))
}

/// Find the first `#RRGGBB` color in a style string
pub fn extract_hex_color(style: &str) -> Option<&str> {
    hex_color_pattern().find(style).map(|m| m.as_str())
}

/// Style key to hex color, for styles that carry a color
pub fn text_colors(styles: &IndexMap<String, String>) -> IndexMap<String, String> {
    styles
        .iter()
        .filter(|(key, _)| key.starts_with(KEY_PREFIX))
        .filter_map(|(key, style)| extract_hex_color(style).map(|color| (key.clone(), color.to_string())))
        .collect()
}

/// Term key to description
pub fn term_descriptions(terms: &IndexMap<String, TermRecord>) -> IndexMap<String, String> {
    terms
        .iter()
        .filter(|(key, _)| key.starts_with(KEY_PREFIX))
        .map(|(key, term)| (key.clone(), term.description.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_hex_color() {
        assert_eq!(extract_hex_color("<color=#0098DC>{0}</color>"), Some("#0098DC"));
        assert_eq!(extract_hex_color("<@cc.kw>{0}</>"), None);
        assert_eq!(extract_hex_color("<color=#FFF>{0}</color>"), None);
    }

    #[test]
    fn test_text_colors_filters_prefix_and_colorless() {
        let styles: IndexMap<String, String> = serde_json::from_value(json!({
            "cc.vup": "<color=#0098DC>{0}</color>",
            "cc.kw": "<i>{0}</i>",
            "ba.vup": "<color=#FF6237>{0}</color>",
            "cc.rem": "<color=#F49800>{0}</color>",
        }))
        .unwrap();

        let colors = text_colors(&styles);

        assert_eq!(
            colors.into_iter().collect::<Vec<_>>(),
            vec![
                ("cc.vup".to_string(), "#0098DC".to_string()),
                ("cc.rem".to_string(), "#F49800".to_string()),
            ]
        );
    }

    #[test]
    fn test_merge_later_wins_and_keeps_order() {
        let cn: IndexMap<String, TermRecord> = serde_json::from_value(json!({
            "cc.g.ussg": {"termName": "乌萨斯学生自治团", "description": "CN text"},
            "cc.t.flow_gold": {"termName": "赤金生产线", "description": "CN only"},
        }))
        .unwrap();
        let en: IndexMap<String, TermRecord> = serde_json::from_value(json!({
            "cc.g.ussg": {"termName": "Ursus Student Self-Governing Group", "description": "EN text"},
            "cc.g.karlan": {"termName": "Karlan Trade", "description": "EN only"},
        }))
        .unwrap();

        let terms = term_descriptions(&merge_locales(cn, en));

        assert_eq!(
            terms.into_iter().collect::<Vec<_>>(),
            vec![
                ("cc.g.ussg".to_string(), "EN text".to_string()),
                ("cc.t.flow_gold".to_string(), "CN only".to_string()),
                ("cc.g.karlan".to_string(), "EN only".to_string()),
            ]
        );
    }

    #[test]
    fn test_terms_filter_prefix() {
        let terms: IndexMap<String, TermRecord> = serde_json::from_value(json!({
            "ba.sluggish": {"description": "battle term"},
            "cc.c.abyssal2_1": {"description": "base term"},
        }))
        .unwrap();

        let out = term_descriptions(&terms);
        assert_eq!(out.len(), 1);
        assert!(out.contains_key("cc.c.abyssal2_1"));
    }
}

//! DraftSense configuration management

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Minimum score a message must reach to suggest an artifact.
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// Bonus added per additional matched keyword group beyond the first.
pub const DEFAULT_SYNERGY_BONUS: f64 = 0.2;

/// Detection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Minimum score to suggest an artifact
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Bonus per additional matched keyword group
    #[serde(default = "default_synergy_bonus")]
    pub synergy_bonus: f64,

    /// Keyword groups scored against each message
    #[serde(default = "default_draft_keywords")]
    pub keywords: Vec<KeywordGroup>,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            synergy_bonus: DEFAULT_SYNERGY_BONUS,
            keywords: default_draft_keywords(),
        }
    }
}

impl DetectionConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_synergy_bonus() -> f64 {
    DEFAULT_SYNERGY_BONUS
}

/// A canonical keyword plus its morphological variants, scored as one unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordGroup {
    /// Canonical word
    pub word: String,

    /// Weight contributed when the group matches
    pub weight: f64,

    /// Variant forms scored identically to the canonical word
    #[serde(default)]
    pub variants: Vec<String>,
}

impl KeywordGroup {
    /// Create a keyword group from a canonical word and its variants
    pub fn new(word: &str, weight: f64, variants: &[&str]) -> Self {
        Self {
            word: word.to_string(),
            weight,
            variants: variants.iter().map(|v| v.to_string()).collect(),
        }
    }
}

/// The default keyword table for draft-artifact detection.
///
/// Variants are listed explicitly rather than stemmed: "summary" matches
/// "summarize" because it is listed, and does NOT match "summarization"
/// because it is not. The weights and table order are load-bearing for
/// scoring and must be kept in sync with the documented behavior.
pub fn default_draft_keywords() -> Vec<KeywordGroup> {
    vec![
        KeywordGroup::new("draft", 1.0, &["drafting", "drafted", "drafts"]),
        KeywordGroup::new("document", 0.9, &["documentation", "doc", "docs"]),
        KeywordGroup::new("write", 0.8, &["writing", "written", "wrote"]),
        KeywordGroup::new("memo", 0.9, &["memorandum", "memos"]),
        KeywordGroup::new("create", 0.7, &["creating", "creation", "created"]),
        KeywordGroup::new("compose", 0.8, &["composing", "composition", "composed"]),
        KeywordGroup::new("letter", 0.85, &["letters"]),
        KeywordGroup::new("report", 0.85, &["reports", "reporting"]),
        KeywordGroup::new("brief", 0.85, &["briefs", "briefing"]),
        KeywordGroup::new("prepare", 0.7, &["preparing", "preparation", "prepared"]),
        KeywordGroup::new("generate", 0.7, &["generating", "generation", "generated"]),
        KeywordGroup::new("produce", 0.7, &["producing", "production", "produced"]),
        KeywordGroup::new("outline", 0.75, &["outlining", "outlined"]),
        KeywordGroup::new("summary", 0.75, &["summarize", "summarizing", "summaries"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = DetectionConfig::default();
        assert_eq!(config.threshold, 0.6);
        assert_eq!(config.synergy_bonus, 0.2);
        assert_eq!(config.keywords.len(), 14);
    }

    #[test]
    fn test_default_keywords_table() {
        let keywords = default_draft_keywords();
        let draft = keywords.iter().find(|k| k.word == "draft").unwrap();
        assert_eq!(draft.weight, 1.0);
        assert_eq!(draft.variants, vec!["drafting", "drafted", "drafts"]);

        let summary = keywords.iter().find(|k| k.word == "summary").unwrap();
        assert_eq!(summary.weight, 0.75);
        assert!(summary.variants.contains(&"summarize".to_string()));
    }

    #[test]
    fn test_keyword_group_serialize() {
        let group = KeywordGroup::new("memo", 0.9, &["memorandum", "memos"]);
        let json = serde_json::to_string(&group).unwrap();
        let deserialized: KeywordGroup = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.word, "memo");
        assert_eq!(deserialized.weight, 0.9);
        assert_eq!(deserialized.variants.len(), 2);
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
threshold = 0.5

[[keywords]]
word = "contract"
weight = 0.8
variants = ["contracts"]
"#
        )
        .unwrap();

        let config = DetectionConfig::load(file.path()).unwrap();
        assert_eq!(config.threshold, 0.5);
        // Unspecified fields fall back to defaults
        assert_eq!(config.synergy_bonus, 0.2);
        assert_eq!(config.keywords.len(), 1);
        assert_eq!(config.keywords[0].word, "contract");
    }

    #[test]
    fn test_load_missing_file() {
        let result = DetectionConfig::load("/nonexistent/draftsense.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_variants_default_to_empty() {
        let toml_str = r#"
[[keywords]]
word = "agreement"
weight = 0.7
"#;
        let config: DetectionConfig = toml::from_str(toml_str).unwrap();
        assert!(config.keywords[0].variants.is_empty());
    }
}

//! Weighted keyword classifier for draft-artifact detection

use crate::config::DetectionConfig;
use crate::error::{Error, Result};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Artifact kind suggested for a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactType {
    /// A draft document surface
    Draft,
}

impl fmt::Display for ArtifactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactType::Draft => write!(f, "draft"),
        }
    }
}

/// Detailed scoring breakdown for a message
#[derive(Debug, Clone, Serialize)]
pub struct ScoreDetails {
    /// Cumulative score across matched keyword groups
    pub score: f64,
    /// What [`ArtifactClassifier::classify`] returns for the same message
    pub suggested_type: Option<ArtifactType>,
    /// The literal variant that matched, one per matched group
    pub matched_keywords: Vec<String>,
}

/// Classifier that scores messages against a weighted keyword table
pub struct ArtifactClassifier {
    groups: Vec<CompiledGroup>,
    threshold: f64,
    synergy_bonus: f64,
}

struct CompiledGroup {
    weight: f64,
    // Canonical word first, then variants, in table order
    variants: Vec<CompiledVariant>,
}

struct CompiledVariant {
    text: String,
    pattern: Regex,
}

impl ArtifactClassifier {
    /// Create a classifier from the given configuration.
    ///
    /// Compiles one word-boundary pattern per variant. Fails on an empty
    /// canonical word or a non-positive weight; matching itself never fails.
    pub fn new(config: DetectionConfig) -> Result<Self> {
        let groups = config
            .keywords
            .into_iter()
            .map(|group| {
                if group.word.trim().is_empty() {
                    return Err(Error::Classifier(
                        "Keyword group has an empty canonical word".to_string(),
                    ));
                }
                if !(group.weight > 0.0 && group.weight.is_finite()) {
                    return Err(Error::Classifier(format!(
                        "Keyword group '{}' has non-positive weight {}",
                        group.word, group.weight
                    )));
                }

                let variants = std::iter::once(&group.word)
                    .chain(group.variants.iter())
                    .map(|variant| compile_variant(&group.word, variant))
                    .collect::<Result<Vec<_>>>()?;

                Ok(CompiledGroup {
                    weight: group.weight,
                    variants,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            groups,
            threshold: config.threshold,
            synergy_bonus: config.synergy_bonus,
        })
    }

    /// Classify a message.
    ///
    /// Returns `Some(ArtifactType::Draft)` when the cumulative keyword score
    /// reaches the threshold, `None` otherwise. Total over all inputs: empty
    /// or non-matching text simply scores zero.
    pub fn classify(&self, message: &str) -> Option<ArtifactType> {
        let details = self.score_details(message);
        debug!(
            score = details.score,
            threshold = self.threshold,
            matched = ?details.matched_keywords,
            "artifact detection"
        );
        details.suggested_type
    }

    /// Score a message and report which keywords matched.
    ///
    /// Each keyword group contributes its weight at most once: the first
    /// matching variant wins for that group. When more than one group
    /// matches, a synergy bonus of `synergy_bonus * (groups - 1)` rewards
    /// messages carrying several independent drafting signals.
    pub fn score_details(&self, message: &str) -> ScoreDetails {
        let lowered = message.to_lowercase();
        let mut score = 0.0;
        let mut matched_keywords = Vec::new();

        for group in &self.groups {
            if let Some(variant) = group
                .variants
                .iter()
                .find(|v| v.pattern.is_match(&lowered))
            {
                score += group.weight;
                matched_keywords.push(variant.text.clone());
            }
        }

        if matched_keywords.len() > 1 {
            score += self.synergy_bonus * (matched_keywords.len() - 1) as f64;
        }

        let suggested_type = if score >= self.threshold {
            Some(ArtifactType::Draft)
        } else {
            None
        };

        ScoreDetails {
            score,
            suggested_type,
            matched_keywords,
        }
    }
}

/// Compile a single variant into a whole-word pattern.
///
/// The variant is regex-escaped and wrapped in word boundaries, so "summary"
/// never matches inside "summarization". Variants are matched against the
/// lower-cased message, so the pattern is lower-cased too.
fn compile_variant(word: &str, variant: &str) -> Result<CompiledVariant> {
    let text = variant.to_lowercase();
    let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(&text))).map_err(|e| {
        Error::Classifier(format!(
            "Invalid pattern for keyword '{}' variant '{}': {}",
            word, variant, e
        ))
    })?;

    Ok(CompiledVariant { text, pattern })
}

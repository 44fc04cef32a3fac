//! DraftSense - Artifact intent detection for AI legal assistants
//!
//! DraftSense decides whether a free-text user message is asking the
//! assistant to generate a draft document artifact (a memo, letter, brief,
//! and so on) rather than a plain conversational answer. The caller branches
//! its reply surface on the result: open a document artifact alongside the
//! chat, or render text only.
//!
//! Detection is weighted whole-word keyword scoring against a declarative
//! table of canonical words and their listed morphological variants. Each
//! group contributes its weight at most once, messages matching several
//! independent groups earn a synergy bonus, and a fixed threshold decides
//! the outcome. There is no stemming: a variant matches only if it is
//! listed, so the table stays the single source of truth for behavior.
//!
//! ```
//! use draftsense::{ArtifactClassifier, ArtifactType, DetectionConfig};
//!
//! let classifier = ArtifactClassifier::new(DetectionConfig::default()).unwrap();
//! assert_eq!(
//!     classifier.classify("Please draft a memo for the board"),
//!     Some(ArtifactType::Draft),
//! );
//! assert_eq!(classifier.classify("What is the capital of France?"), None);
//! ```
//!
//! ## Modules
//!
//! - [`detect`]: the weighted keyword classifier
//! - [`config`]: keyword table, threshold, and synergy configuration
//! - [`error`]: crate error types

pub mod config;
pub mod detect;
pub mod error;

pub use config::{default_draft_keywords, DetectionConfig, KeywordGroup};
pub use detect::{ArtifactClassifier, ArtifactType, ScoreDetails};
pub use error::{Error, Result};

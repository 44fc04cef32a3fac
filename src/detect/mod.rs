//! Artifact intent detection
//!
//! Decides whether a user message is asking the assistant to produce a
//! draft document artifact. Matching is whole-word keyword scoring against
//! a weighted table; callers branch their reply surface on the result.

mod classifier;

pub use classifier::{ArtifactClassifier, ArtifactType, ScoreDetails};

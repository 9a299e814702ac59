use crate::{Category, ClassificationScores, DocumentMetadata, EntitySet};
use serde::{Deserialize, Serialize};

/// A contiguous, word-aligned excerpt of a document with attached metadata
/// and quality score.
///
/// Built once by the chunk builder, enriched once with document metadata
/// when requested, never mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// `chunk_NNN`, 1-based, zero-padded to 3 digits, strictly increasing
    /// across the whole document.
    pub chunk_id: String,
    pub content: String,
    pub hierarchical_title: String,
    pub content_type: Category,
    pub word_count: usize,
    pub char_count: usize,
    /// Numeric sequence number, equal to the id suffix.
    pub position: usize,
    /// In `[0, 1]`, 3-decimal rounding.
    pub quality_score: f64,
    pub entities: EntitySet,
    pub classification_scores: ClassificationScores,
    /// Up to 5 priority keywords found in the content.
    pub key_elements: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_metadata: Option<DocumentMetadata>,
}

impl Chunk {
    /// Format a position as the canonical chunk id label.
    #[must_use]
    pub fn id_label(position: usize) -> String {
        format!("chunk_{position:03}")
    }
}

//! Per-chunk analysis: entity extraction, content classification, quality
//! scoring and the derived presentation fields (titles, key elements).
//!
//! Every function here is pure over its text input and the shared
//! registries, so chunks can be analyzed independently and in parallel.

mod classify;
mod coherence;
mod elements;
mod entities;
mod quality;

pub use classify::{classification_scores, classify_content};
pub use coherence::coherence_factor;
pub use elements::{hierarchical_title, key_elements, TITLE_FALLBACK};
pub use entities::extract_entities;
pub use quality::quality_score;

//! Shared data model for the lexchunk pipeline.
//!
//! Every type that crosses a crate boundary lives here: the chunk record
//! with its quality and classification payloads, the entity multi-set, and
//! the closed enumerations over entity kinds, content categories and
//! document types. The registries behind those enumerations are fixed at
//! design time, so string-keyed lookups are replaced with tagged variants
//! throughout.

mod category;
mod chunk;
mod document;
mod entity;

pub use category::{Category, ClassificationScores, SecondaryCategory};
pub use chunk::Chunk;
pub use document::{DocumentMetadata, DocumentStats, DocumentType, QualityDistribution};
pub use entity::{EntityKind, EntitySet};

//! Immutable heuristic registries for French legal/real-estate documents.
//!
//! Pure data: regular-expression tables per entity kind, weighted category
//! definitions, tiered quality keywords, document-type patterns and the
//! various keyword lists the segmenter and scorers consult. Everything is
//! built once behind `Lazy` statics and shared by reference across
//! concurrent pipeline calls; nothing here is mutated after initialization.

mod categories;
mod doctypes;
mod entities;
mod keywords;

pub use categories::{category_defs, secondary_keywords, CategoryDef, CONFIDENCE_FLOOR};
pub use doctypes::{
    bare_date_patterns, contextual_date_patterns, doctype_defs, generic_party_patterns,
    location_patterns, project_pattern, uppercase_title_pattern, DocTypeDef, PartyPattern,
};
pub use entities::{containment_terms, entity_patterns};
pub use keywords::{
    ABBREVIATIONS, COHESION_CONNECTORS, COMPANY_FORMS, KEY_ELEMENT_PRIORITIES,
    LOGICAL_CONNECTORS, QUALITY_KEYWORDS, REAL_ESTATE_TERMS, TABLE_HEADER_PHRASES,
    THEMATIC_GROUPS,
};

use lexchunk_protocol::{Category, EntityKind};
use lexchunk_registry::{category_defs, entity_patterns, TABLE_HEADER_PHRASES};

/// Signals that route a document to the table-aware builder: a pipe
/// character anywhere, or one of the known French table-header phrases.
#[must_use]
pub fn has_table(text: &str) -> bool {
    if text.contains('|') {
        return true;
    }
    let lower = text.to_lowercase();
    TABLE_HEADER_PHRASES.iter().any(|phrase| lower.contains(phrase))
}

/// Per-category additive adjustment to the caller's base target size.
const fn size_adjustment(category: Category) -> i64 {
    match category {
        Category::Financial => 10,
        Category::TechnicalRequirements => 15,
        Category::Obligations => -5,
        Category::Timeline => 0,
        _ => 0,
    }
}

const LEGAL_REFERENCES_ADJUSTMENT: i64 = -10;

/// Pick the document-wide target chunk size by counting keyword occurrences
/// per category and applying a fixed adjustment for the dominant one.
///
/// Considered categories: financial, technical requirements, obligations,
/// timeline, and dense legal referencing. With no signal at all the base is
/// returned unchanged.
#[must_use]
pub fn adaptive_target(text: &str, base: usize) -> usize {
    let lower = text.to_lowercase();

    let mut best_count = 0usize;
    let mut best_adjustment = 0i64;

    for def in category_defs() {
        let relevant = matches!(
            def.category,
            Category::Financial
                | Category::TechnicalRequirements
                | Category::Obligations
                | Category::Timeline
        );
        if !relevant {
            continue;
        }
        let count: usize = def
            .keywords
            .iter()
            .map(|kw| lower.matches(kw).count())
            .sum();
        if count > best_count {
            best_count = count;
            best_adjustment = size_adjustment(def.category);
        }
    }

    let legal_count: usize = entity_patterns(EntityKind::LegalReferences)
        .iter()
        .map(|p| p.find_iter(&lower).count())
        .sum();
    if legal_count > best_count {
        best_count = legal_count;
        best_adjustment = LEGAL_REFERENCES_ADJUSTMENT;
    }

    if best_count == 0 {
        return base;
    }

    let adjusted = base as i64 + best_adjustment;
    log::debug!("adaptive target: base={base}, adjusted={adjusted} (hits={best_count})");
    adjusted.max(1) as usize
}

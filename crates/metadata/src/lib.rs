//! Document-level metadata extraction: type detection, title, date,
//! parties, location, project name and deterministic id synthesis.
//!
//! Runs once per document on the first 5000 characters (the id hash covers
//! the full text), independently of chunking. Total over any string input:
//! absent fields yield documented fallbacks, never errors.

mod dates;
mod identity;

pub use dates::{extract_main_date, normalize_date};
pub use identity::generate_document_id;

use lexchunk_protocol::{DocumentMetadata, DocumentType};
use lexchunk_registry::{
    doctype_defs, generic_party_patterns, location_patterns, project_pattern,
    uppercase_title_pattern, DocTypeDef, PartyPattern, COMPANY_FORMS,
};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

/// Characters of the document inspected for everything except the id hash.
const SAMPLE_CHARS: usize = 5000;

/// Maximum length of an extracted party label.
const PARTY_MAX_CHARS: usize = 80;

/// Literal title used when nothing matches.
pub const TITLE_FALLBACK: &str = "DOCUMENT JURIDIQUE";

/// Placeholder for the reservataire of a VEFA contract signed in blank.
pub const RESERVATAIRE_PLACEHOLDER: &str = "[Réservataire]";

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("invalid whitespace pattern"));

/// Extract the full document metadata record.
#[must_use]
pub fn extract_document_metadata(text: &str) -> DocumentMetadata {
    let sample: String = text.chars().take(SAMPLE_CHARS).collect();

    let doc_type = detect_document_type(&sample);
    let title = extract_title(&sample, doc_type);
    let date = extract_main_date(&sample);
    let parties = extract_parties(&sample, doc_type);
    let location = extract_location(&sample);
    let project = extract_project_name(&sample);
    let id = generate_document_id(text, &title, &date);

    log::debug!(
        "document metadata: type={}, title={title:?}, date={date}",
        doc_type.as_str()
    );

    DocumentMetadata {
        id,
        title,
        date,
        doc_type,
        parties,
        location,
        project,
    }
}

/// Score every detectable type: matching title patterns count x3, any
/// matching party pattern adds 2. The highest score wins; nothing above
/// zero means a generic contract.
#[must_use]
pub fn detect_document_type(sample: &str) -> DocumentType {
    let mut best: Option<(DocumentType, u32)> = None;

    for def in doctype_defs() {
        let title_hits = def
            .title_patterns
            .iter()
            .filter(|p| p.is_match(sample))
            .count() as u32;
        let party_hit = def
            .parties
            .iter()
            .flat_map(|party| party.patterns.iter())
            .any(|p| p.is_match(sample));

        let score = title_hits * 3 + if party_hit { 2 } else { 0 };
        if score > 0 && best.map_or(true, |(_, top)| score > top) {
            best = Some((def.doc_type, score));
        }
    }

    best.map_or(DocumentType::ContratGeneral, |(doc_type, _)| doc_type)
}

/// Title: the detected type's pattern match (uppercased, whitespace
/// normalized), else the first long all-caps line, else the fallback.
#[must_use]
pub fn extract_title(sample: &str, doc_type: DocumentType) -> String {
    if let Some(def) = doctype_defs().iter().find(|d| d.doc_type == doc_type) {
        if let Some(found) = def.title_patterns.iter().find_map(|p| p.find(sample)) {
            return normalize_title(found.as_str());
        }
    }

    if let Some(caps) = uppercase_title_pattern().captures(sample) {
        return normalize_title(&caps[1]);
    }

    TITLE_FALLBACK.to_string()
}

fn normalize_title(raw: &str) -> String {
    WHITESPACE
        .replace_all(raw.trim(), " ")
        .to_uppercase()
}

/// Role-to-label mapping for the detected type; the first matching pattern
/// wins per role. VEFA contracts default a missing reservataire to the
/// placeholder; when nothing at all matched, a generic two-role fallback
/// is tried.
#[must_use]
pub fn extract_parties(sample: &str, doc_type: DocumentType) -> BTreeMap<String, String> {
    let def: Option<&DocTypeDef> = doctype_defs().iter().find(|d| d.doc_type == doc_type);

    let mut parties = BTreeMap::new();
    if let Some(def) = def {
        collect_parties(sample, &def.parties, &mut parties);
    }

    if doc_type == DocumentType::ContratReservationVefa {
        parties
            .entry("reservataire".to_string())
            .or_insert_with(|| RESERVATAIRE_PLACEHOLDER.to_string());
    }

    if parties.is_empty() {
        collect_parties(sample, generic_party_patterns(), &mut parties);
    }

    parties
}

fn collect_parties(
    sample: &str,
    patterns: &[PartyPattern],
    parties: &mut BTreeMap<String, String>,
) {
    for party in patterns {
        let label = party
            .patterns
            .iter()
            .find_map(|p| p.captures(sample))
            .and_then(|caps| caps.get(1))
            .map(|m| clean_party_label(m.as_str()));
        if let Some(label) = label {
            if !label.is_empty() {
                parties.insert(party.role.to_string(), label);
            }
        }
    }
}

fn clean_party_label(raw: &str) -> String {
    let collapsed = WHITESPACE.replace_all(raw.trim(), " ");
    let truncated: String = collapsed.chars().take(PARTY_MAX_CHARS).collect();
    truncated
        .trim_end_matches([' ', '.', ',', ';', ':', '-', '«', '»'])
        .to_string()
}

/// First locality match that is not a company-form prefix.
#[must_use]
pub fn extract_location(sample: &str) -> String {
    for pattern in location_patterns() {
        for caps in pattern.captures_iter(sample) {
            if let Some(found) = caps.get(1) {
                let candidate = found.as_str().trim();
                if !is_company_form(candidate) {
                    return candidate.to_string();
                }
            }
        }
    }
    String::new()
}

fn is_company_form(candidate: &str) -> bool {
    let first_word = candidate.split_whitespace().next().unwrap_or("");
    COMPANY_FORMS
        .iter()
        .any(|form| first_word.eq_ignore_ascii_case(form))
}

/// First guillemet-quoted phrase following a project/programme keyword.
#[must_use]
pub fn extract_project_name(sample: &str) -> String {
    project_pattern()
        .captures(sample)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

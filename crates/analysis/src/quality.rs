use crate::coherence::coherence_factor;
use lexchunk_protocol::EntitySet;
use lexchunk_registry::{QUALITY_KEYWORDS, REAL_ESTATE_TERMS};
use once_cell::sync::Lazy;
use std::collections::HashMap;

const WEIGHT_LENGTH: f64 = 0.25;
const WEIGHT_KEYWORD: f64 = 0.20;
const WEIGHT_ENTITY: f64 = 0.25;
const WEIGHT_STRUCTURE: f64 = 0.15;
const WEIGHT_COHERENCE: f64 = 0.10;
const WEIGHT_SPECIFICITY: f64 = 0.05;

/// Optimal chunk length in words and the tolerated spread around it.
const OPTIMAL_WORDS: f64 = 55.0;
const LENGTH_VARIANCE: f64 = 25.0;

static KEYWORD_WEIGHTS: Lazy<HashMap<&'static str, u32>> =
    Lazy::new(|| QUALITY_KEYWORDS.iter().copied().collect());

/// Multi-factor quality score in `[0, 1]`, rounded to 3 decimals.
///
/// Six independently bounded factors combined by fixed weights summing to
/// 1.0. The entity factor's additive bonuses sum past 1.0 before their
/// cap; the cap applies after the full additive pass, never per bonus.
#[must_use]
pub fn quality_score(content: &str, entities: &EntitySet) -> f64 {
    let words: Vec<&str> = content.split_whitespace().collect();

    let length = length_factor(words.len());
    let keyword = keyword_factor(&words);
    let entity = entity_factor(entities);
    let structure = structure_factor(content);
    let coherence = coherence_factor(content);
    let specificity = specificity_factor(content);

    let score = WEIGHT_LENGTH * length
        + WEIGHT_KEYWORD * keyword
        + WEIGHT_ENTITY * entity
        + WEIGHT_STRUCTURE * structure
        + WEIGHT_COHERENCE * coherence
        + WEIGHT_SPECIFICITY * specificity;

    round3(score.clamp(0.0, 1.0))
}

/// Gaussian-style falloff around the optimal word count, floored at 0.3.
fn length_factor(word_count: usize) -> f64 {
    let delta = word_count as f64 - OPTIMAL_WORDS;
    (1.0 - delta * delta / (2.0 * LENGTH_VARIANCE * LENGTH_VARIANCE)).max(0.3)
}

/// Tiered keyword mass normalized against 20% of the theoretical maximum
/// (every word a tier-3 keyword), capped at 1.0.
fn keyword_factor(words: &[&str]) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let mass: u32 = words
        .iter()
        .map(|w| {
            let cleaned = w.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase();
            KEYWORD_WEIGHTS.get(cleaned.as_str()).copied().unwrap_or(0)
        })
        .sum();
    let max_possible = (words.len() as f64 * 3.0 * 0.2).max(1.0);
    (f64::from(mass) / max_possible).min(1.0)
}

/// Base 0.4 plus additive bonuses per entity kind present, capped at 1.0.
fn entity_factor(entities: &EntitySet) -> f64 {
    let mut factor: f64 = 0.4;
    if !entities.dates.is_empty() {
        factor += 0.15;
    }
    if !entities.deadlines.is_empty() {
        factor += 0.10;
    }
    if !entities.monetary_amounts.is_empty() {
        factor += 0.20;
    }
    if !entities.legal_references.is_empty() {
        factor += 0.15;
    }
    if !entities.measurements.is_empty() || !entities.technical_specs.is_empty() {
        factor += 0.10;
    }
    if !entities.real_estate_actors.is_empty() || !entities.insurance_terms.is_empty() {
        factor += 0.10;
    }
    if !entities.norms_standards.is_empty() {
        factor += 0.10;
    }
    factor.min(1.0)
}

/// Terminal punctuation density plus small bonuses for enumeration
/// markers, explicit line structure and sentence closure.
fn structure_factor(content: &str) -> f64 {
    let marks = content
        .chars()
        .filter(|c| matches!(c, '.' | '!' | '?'))
        .count();
    let mut factor = (marks.min(2) as f64 / 2.0) * 0.7;

    let has_enumeration = content
        .lines()
        .any(|line| matches!(line.trim_end().chars().last(), Some(';' | ':')));
    if has_enumeration {
        factor += 0.1;
    }
    if content.contains('\n') {
        factor += 0.1;
    }
    if marks > 0 {
        factor += 0.1;
    }
    factor
}

/// Share of the fixed real-estate vocabulary present, scaled to 0.7..=1.0.
fn specificity_factor(content: &str) -> f64 {
    let lower = content.to_lowercase();
    let present = REAL_ESTATE_TERMS
        .iter()
        .filter(|term| lower.contains(*term))
        .count();
    0.7 + 0.3 * present as f64 / REAL_ESTATE_TERMS.len() as f64
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

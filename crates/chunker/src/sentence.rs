use crate::normalize::{protect_spans, restore_spans, PERIOD_SENTINEL};
use lexchunk_registry::ABBREVIATIONS;
use once_cell::sync::Lazy;
use regex::Regex;

static ABBREVIATION: Lazy<Regex> = Lazy::new(|| {
    let stems: Vec<String> = ABBREVIATIONS
        .iter()
        .map(|a| regex::escape(a.trim_end_matches('.')))
        .collect();
    Regex::new(&format!(r"\b(?:{})\.", stems.join("|"))).expect("invalid abbreviation pattern")
});

static BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+\s+").expect("invalid boundary pattern"));

/// Split normalized text into sentences.
///
/// Abbreviation periods and protected spans (article references, monetary
/// amounts) never open a boundary. Joining the returned sentences with
/// single spaces reproduces the input modulo whitespace normalization;
/// empty sentences are filtered.
#[must_use]
pub fn split_sentences(text: &str) -> Vec<String> {
    let protected = protect_spans(text);
    let protected = ABBREVIATION
        .replace_all(&protected, |caps: &regex::Captures<'_>| {
            caps[0].replace('.', &PERIOD_SENTINEL.to_string())
        })
        .into_owned();

    let mut sentences = Vec::new();
    let mut last = 0;
    for boundary in BOUNDARY.find_iter(&protected) {
        let punct_len: usize = boundary
            .as_str()
            .chars()
            .take_while(|c| matches!(c, '.' | '!' | '?'))
            .map(char::len_utf8)
            .sum();
        push_sentence(&mut sentences, &protected[last..boundary.start() + punct_len]);
        last = boundary.end();
    }
    push_sentence(&mut sentences, &protected[last..]);

    sentences
}

fn push_sentence(sentences: &mut Vec<String>, raw: &str) {
    let restored = restore_spans(raw);
    let trimmed = restored.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

use once_cell::sync::Lazy;
use regex::Regex;

/// Invisible marker (word joiner) appended to protected spans so downstream
/// splitting never opens a boundary inside them.
pub(crate) const PROTECT_MARK: char = '\u{2060}';

/// Sentinel standing in for a period that must not act as a sentence
/// boundary. Restored before any text is emitted.
pub(crate) const PERIOD_SENTINEL: char = '\u{f8ff}';

static WHITESPACE: Lazy<Regex> = Lazy::new(|| {
    // Covers ASCII whitespace plus the usual unicode offenders in PDF
    // extractions: NBSP, narrow NBSP, zero-width space, BOM.
    Regex::new(r"[\s\u{a0}\u{202f}\u{200b}\u{feff}]+").expect("invalid whitespace pattern")
});

static PROTECTED_SPANS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)article\s+[a-z]?\.?\s?\d+(?:[-.]\d+)*",
        r"(?i)\d{1,3}(?:[\s.]\d{3})*(?:,\d{1,2})?\s*(?:euros?|€|EUR\b)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("invalid protection pattern"))
    .collect()
});

/// Collapse every whitespace run to a single ASCII space and trim the ends.
///
/// Total over any input; idempotent; empty in, empty out.
#[must_use]
pub fn normalize(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Shield article references and monetary amounts from sentence splitting:
/// periods inside each matched span become [`PERIOD_SENTINEL`] and the span
/// is tagged with a trailing [`PROTECT_MARK`].
pub(crate) fn protect_spans(text: &str) -> String {
    let mut protected = text.to_string();
    for pattern in PROTECTED_SPANS.iter() {
        protected = pattern
            .replace_all(&protected, |caps: &regex::Captures<'_>| {
                let mut span = caps[0].replace('.', &PERIOD_SENTINEL.to_string());
                span.push(PROTECT_MARK);
                span
            })
            .into_owned();
    }
    protected
}

/// Undo [`protect_spans`]: restore periods and drop the markers.
pub(crate) fn restore_spans(text: &str) -> String {
    text.replace(PERIOD_SENTINEL, ".")
        .replace(PROTECT_MARK, "")
}

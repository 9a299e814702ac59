/// Words carried from a closing chunk into the next one.
///
/// Prefers the chunk's trailing complete sentence when it fits the budget,
/// so the carried context is a whole clause; otherwise falls back to the
/// literal trailing `budget` words. A budget of 0 yields an empty seed.
#[must_use]
pub fn overlap_seed(words: &[String], budget: usize) -> Vec<String> {
    if budget == 0 || words.is_empty() {
        return Vec::new();
    }

    if let Some(sentence) = trailing_sentence(words) {
        if !sentence.is_empty() && sentence.len() <= budget {
            return sentence.to_vec();
        }
    }

    let start = words.len().saturating_sub(budget);
    words[start..].to_vec()
}

/// The words after the last sentence-terminal word, excluding the final
/// word itself so a chunk ending on punctuation yields its last full
/// sentence rather than nothing.
fn trailing_sentence(words: &[String]) -> Option<&[String]> {
    if words.len() < 2 {
        return None;
    }
    let terminal = |w: &String| w.ends_with(['.', '!', '?']);
    words[..words.len() - 1]
        .iter()
        .rposition(terminal)
        .map(|idx| &words[idx + 1..])
}

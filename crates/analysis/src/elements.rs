use lexchunk_registry::KEY_ELEMENT_PRIORITIES;
use once_cell::sync::Lazy;
use regex::Regex;

/// Literal title used when nothing better can be derived from the content.
pub const TITLE_FALLBACK: &str = "Clause contractuelle";

/// At most this many key elements per chunk.
const MAX_KEY_ELEMENTS: usize = 5;

static ARTICLE_TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)article\s+\d+[^\n.]*").expect("invalid article title pattern"));

static CLAUSE_TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)clause\s+[^\n.]*").expect("invalid clause title pattern"));

/// Derive a heading for a chunk: a numbered article, then a clause mention,
/// then a short opening sentence, then the literal fallback.
#[must_use]
pub fn hierarchical_title(content: &str) -> String {
    if let Some(found) = ARTICLE_TITLE.find(content) {
        return found.as_str().trim().to_string();
    }
    if let Some(found) = CLAUSE_TITLE.find(content) {
        return found.as_str().trim().to_string();
    }

    let first_sentence = content
        .split_inclusive(['.', '!', '?'])
        .next()
        .unwrap_or("")
        .trim_end_matches(['.', '!', '?'])
        .trim();
    if !first_sentence.is_empty() && first_sentence.chars().count() < 80 {
        return first_sentence.to_string();
    }

    TITLE_FALLBACK.to_string()
}

/// Up to 5 priority keywords found in the content, highest tier first;
/// ties keep registry insertion order.
#[must_use]
pub fn key_elements(content: &str) -> Vec<String> {
    let lower = content.to_lowercase();
    KEY_ELEMENT_PRIORITIES
        .iter()
        .filter(|(word, _)| lower.contains(word))
        .take(MAX_KEY_ELEMENTS)
        .map(|(word, _)| (*word).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn numbered_article_wins_the_title() {
        let content = "Article 2 - Prix et modalités de paiement Le prix de vente s'élève à 245 000 euros.";
        assert_eq!(
            hierarchical_title(content),
            "Article 2 - Prix et modalités de paiement Le prix de vente s'élève à 245 000 euros"
        );
    }

    #[test]
    fn short_first_sentence_becomes_the_title() {
        let content = "Garanties apportées par le vendeur. Le vendeur apporte toutes les garanties légales.";
        assert_eq!(hierarchical_title(content), "Garanties apportées par le vendeur");
    }

    #[test]
    fn long_unstructured_content_falls_back() {
        let words = vec!["mot"; 40].join(" ");
        assert_eq!(hierarchical_title(&words), TITLE_FALLBACK);
    }

    #[test]
    fn key_elements_follow_priority_then_insertion_order() {
        let content =
            "Le contrat précise le prix, le délai, la garantie, l'obligation, la clause et l'article applicables.";
        assert_eq!(
            key_elements(content),
            ["contrat", "prix", "délai", "garantie", "obligation"]
        );
    }

    #[test]
    fn key_elements_are_empty_without_matches() {
        assert!(key_elements("Paragraphe sans aucun vocabulaire attendu.").is_empty());
    }
}

use lexchunk_protocol::{Category, ClassificationScores, SecondaryCategory};
use lexchunk_registry::{category_defs, secondary_keywords, CONFIDENCE_FLOOR};

/// Assign the primary content label.
///
/// Per category: `(keyword_hits + 1.5 x pattern_hits) x weight`, where hits
/// count distinct registry entries present. The winner must reach the
/// confidence floor, otherwise the chunk is `general`; ties resolve to the
/// first category in registry order.
#[must_use]
pub fn classify_content(content: &str) -> Category {
    let lower = content.to_lowercase();

    let mut best: Option<(Category, f64)> = None;
    for def in category_defs() {
        let keyword_hits = def
            .keywords
            .iter()
            .filter(|kw| lower.contains(*kw))
            .count() as f64;
        let pattern_hits = def.patterns.iter().filter(|p| p.is_match(content)).count() as f64;
        let score = (keyword_hits + 1.5 * pattern_hits) * def.weight;

        if score > 0.0 && best.map_or(true, |(_, top)| score > top) {
            best = Some((def.category, score));
        }
    }

    match best {
        Some((category, score)) if score >= CONFIDENCE_FLOOR => {
            log::debug!("classified as {} (score {score:.2})", category.as_str());
            category
        }
        _ => Category::General,
    }
}

/// Keyword-only transparency scores over the secondary category set,
/// attached to every chunk regardless of the winning label.
#[must_use]
pub fn classification_scores(content: &str) -> ClassificationScores {
    let lower = content.to_lowercase();
    let mut scores = ClassificationScores::default();
    for category in SecondaryCategory::ALL {
        let hits = secondary_keywords(category)
            .iter()
            .filter(|kw| lower.contains(*kw))
            .count() as u32;
        scores.set(category, hits);
    }
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn price_heavy_text_classifies_as_financial() {
        let content =
            "Le prix de vente s'élève à 245 000 euros TTC. Un acompte est exigible, le paiement du montant suit l'échéancier.";
        assert_eq!(classify_content(content), Category::Financial);
    }

    #[test]
    fn delivery_text_classifies_as_timeline() {
        let content = "La livraison est prévue le 31/12/2013, le délai court à compter de la date de signature, selon le calendrier d'achèvement.";
        assert_eq!(classify_content(content), Category::Timeline);
    }

    #[test]
    fn keywordless_text_falls_back_to_general() {
        let content = "Bonjour, voici un paragraphe parfaitement neutre sur la météo du jour.";
        assert_eq!(classify_content(content), Category::General);
    }

    #[test]
    fn one_weak_keyword_stays_below_the_floor() {
        assert_eq!(classify_content("La date sera précisée."), Category::General);
    }

    #[test]
    fn secondary_scores_cover_all_categories() {
        let content = "L'obligation de garantie impose une assurance et un contrôle de conformité.";
        let scores = classification_scores(content);
        assert!(scores.obligations >= 1);
        assert!(scores.guarantees >= 2);
        assert_eq!(scores.procedures, 0);
    }
}

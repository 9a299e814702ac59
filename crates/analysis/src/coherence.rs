use lexchunk_registry::{LOGICAL_CONNECTORS, THEMATIC_GROUPS};
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Semantic coherence factor in `[0, 1]`: the mean of lexical variety,
/// connector density and theme consistency. Chunks under 10 words carry too
/// little signal and short-circuit to a neutral 0.5.
#[must_use]
pub fn coherence_factor(content: &str) -> f64 {
    let lower = content.to_lowercase();
    let words: Vec<&str> = lower.unicode_words().collect();
    if words.len() < 10 {
        return 0.5;
    }

    let repetition = repetition_factor(&words);
    let connectors = connector_factor(&lower, words.len());
    let theme = theme_consistency(&lower);

    (repetition + connectors + theme) / 3.0
}

/// Ratio of unique to total words longer than 3 characters, scaled x2 and
/// capped. Rewards lexical variety over boilerplate repetition.
fn repetition_factor(words: &[&str]) -> f64 {
    let long_words: Vec<&str> = words
        .iter()
        .copied()
        .filter(|w| w.chars().count() > 3)
        .collect();
    if long_words.is_empty() {
        return 0.5;
    }
    let unique: HashSet<&str> = long_words.iter().copied().collect();
    (unique.len() as f64 / long_words.len() as f64 * 2.0).min(1.0)
}

/// 0.6 base plus scaled logical-connector density; a 5% density saturates.
fn connector_factor(lower: &str, word_count: usize) -> f64 {
    let count: usize = LOGICAL_CONNECTORS
        .iter()
        .map(|conn| lower.matches(conn).count())
        .sum();
    (0.6 + count as f64 / word_count as f64 * 8.0).min(1.0)
}

/// Score the five thematic groups and judge the dominant theme's share of
/// total hits. A share in [0.3, 0.7] means mild dominance (one topic leads
/// without monopolizing) and is rewarded by proximity to 0.5; outside the
/// band the same distance is penalized.
fn theme_consistency(lower: &str) -> f64 {
    let hits: Vec<usize> = THEMATIC_GROUPS
        .iter()
        .map(|(_, keywords)| {
            keywords
                .iter()
                .map(|kw| lower.matches(kw).count())
                .sum::<usize>()
        })
        .collect();

    let total: usize = hits.iter().sum();
    if total == 0 {
        return 0.5;
    }
    let dominant = *hits.iter().max().unwrap_or(&0);
    let share = dominant as f64 / total as f64;
    let distance = (share - 0.5).abs();

    if (0.3..=0.7).contains(&share) {
        1.0 - distance
    } else {
        0.6 - (distance - 0.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_chunks_score_a_neutral_half() {
        assert_eq!(coherence_factor("Trop court pour juger."), 0.5);
    }

    #[test]
    fn factor_stays_in_bounds_for_varied_inputs() {
        let samples = [
            "Le contrat prévoit un prix ferme car le délai de livraison est garanti par une clause.",
            "prix prix prix prix prix prix prix prix prix prix prix prix",
            "Le réservant s'engage donc à livrer le logement, en effet la garantie décennale couvre les travaux de construction du programme.",
        ];
        for sample in samples {
            let factor = coherence_factor(sample);
            assert!((0.0..=1.0).contains(&factor), "{sample}: {factor}");
        }
    }

    #[test]
    fn connectors_raise_the_factor() {
        let with = "Le contrat est signé, donc le délai court, ainsi la livraison du logement intervient car le paiement est acquis.";
        let without = "Le contrat est signé, le délai court, la livraison du logement intervient, le paiement du solde est acquis.";
        assert!(coherence_factor(with) > coherence_factor(without));
    }

    #[test]
    fn balanced_theme_mix_beats_a_monopoly() {
        let balanced =
            "Le contrat fixe le prix de vente, la clause précise le montant du paiement et l'article décrit chaque engagement financier des parties.";
        let monopoly =
            "Le prix, le montant, le paiement, les euros, la tva et encore les euros composent un montant avec un acompte et un paiement.";
        assert!(theme_consistency(&balanced.to_lowercase()) > theme_consistency(&monopoly.to_lowercase()));
    }
}

use lexchunk_protocol::{EntityKind, EntitySet};
use lexchunk_registry::{containment_terms, entity_patterns};

/// Apply the pattern registry to a text span.
///
/// Regex kinds collect every match in registry-then-text order with
/// duplicates kept; the keyword kinds (materials, actors, insurance terms)
/// use literal lowercase substring containment. Pure function: identical
/// text always yields an identical set.
#[must_use]
pub fn extract_entities(content: &str) -> EntitySet {
    let lower = content.to_lowercase();
    let mut set = EntitySet::default();

    for kind in EntityKind::ALL {
        let matches = set.by_kind_mut(kind);
        for pattern in entity_patterns(kind) {
            for found in pattern.find_iter(content) {
                matches.push(found.as_str().to_string());
            }
        }
        for term in containment_terms(kind) {
            if lower.contains(term) {
                matches.push((*term).to_string());
            }
        }
    }

    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_the_vefa_example_entities() {
        let content = "Le prix de vente est fixé à 245 000 euros TTC. Livraison prévue le 31 décembre 2013. Article 1 - Objet de la réservation.";
        let set = extract_entities(content);

        assert!(set
            .monetary_amounts
            .iter()
            .any(|m| m.contains("245 000 euros")));
        assert!(set.dates.iter().any(|d| d.contains("31 décembre 2013")));
        assert!(set
            .legal_references
            .iter()
            .any(|r| r.to_lowercase().starts_with("article 1")));
    }

    #[test]
    fn duplicates_are_preserved_in_order() {
        let content = "Un acompte de 5 000 euros puis un solde de 5 000 euros.";
        let set = extract_entities(content);
        let amounts: Vec<&str> = set.monetary_amounts.iter().map(String::as_str).collect();
        assert_eq!(amounts, ["5 000 euros", "5 000 euros"]);
    }

    #[test]
    fn containment_kinds_match_case_insensitively() {
        let content = "Le Maître d'ouvrage impose un mur en BÉTON banché.";
        let set = extract_entities(content);
        assert_eq!(set.materials, ["béton"]);
        assert_eq!(set.real_estate_actors, ["maître d'ouvrage"]);
    }

    #[test]
    fn absent_kinds_yield_empty_lists() {
        let set = extract_entities("Texte neutre sans aucune donnée particulière.");
        assert_eq!(set.total_count(), 0);
    }

    #[test]
    fn deadlines_and_penalties_are_both_captured() {
        let content =
            "Un délai de 30 jours est accordé, sous peine de pénalités de retard de 100 euros par jour de retard.";
        let set = extract_entities(content);
        assert!(!set.deadlines.is_empty());
        assert!(set
            .penalties
            .iter()
            .any(|p| p.contains("pénalités de retard")));
    }
}

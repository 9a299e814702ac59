use lexchunk_protocol::{Category, SecondaryCategory};
use once_cell::sync::Lazy;
use regex::Regex;

/// Weighted definition of one primary content category.
pub struct CategoryDef {
    pub category: Category,
    pub weight: f64,
    /// Lowercase keywords matched by substring containment.
    pub keywords: &'static [&'static str],
    /// Stronger structural signals, counted at 1.5x keyword weight.
    pub patterns: Vec<Regex>,
}

/// Minimum weighted score a category must reach; below this the chunk is
/// labeled `general`.
pub const CONFIDENCE_FLOOR: f64 = 2.0;

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(&format!("(?i){p}")).expect("invalid category pattern"))
        .collect()
}

static PRIMARY: Lazy<Vec<CategoryDef>> = Lazy::new(|| {
    vec![
        CategoryDef {
            category: Category::Financial,
            weight: 1.2,
            keywords: &[
                "prix", "coût", "tarif", "montant", "euros", "€", "facture", "paiement",
                "acompte", "échéancier", "tva", "somme",
            ],
            patterns: compile(&[
                r"\d{1,3}(?:[\s.]\d{3})*(?:,\d{1,2})?\s*(?:euros?|€)",
                r"\d+[.,]?\d*\s*%",
            ]),
        },
        CategoryDef {
            category: Category::Timeline,
            weight: 1.1,
            keywords: &[
                "délai", "livraison", "échéance", "date", "planning", "durée", "terme",
                "calendrier", "achèvement",
            ],
            patterns: compile(&[
                r"\d{1,2}[/\-.]\d{1,2}[/\-.]\d{2,4}",
                r"délai\s+de\s+\d+",
            ]),
        },
        CategoryDef {
            category: Category::Obligations,
            weight: 1.0,
            keywords: &[
                "obligation", "engage", "doit", "responsabilité", "devoir", "tenu",
                "incombe", "charge",
            ],
            patterns: compile(&[r"s'engage\s+à", r"est\s+tenue?\s+de"]),
        },
        CategoryDef {
            category: Category::Guarantees,
            weight: 1.0,
            keywords: &[
                "garantie", "assurance", "caution", "couverture", "protection",
                "décennale", "biennale",
            ],
            patterns: compile(&[r"garantie\s+(?:décennale|biennale|de\s+parfait\s+achèvement)"]),
        },
        CategoryDef {
            category: Category::TechnicalRequirements,
            weight: 1.1,
            keywords: &[
                "technique", "norme", "spécification", "matériau", "dtu", "performance",
                "isolation", "structure",
            ],
            patterns: compile(&[r"DTU\s+[\d.]+", r"NF\s+(?:EN\s+)?\d+"]),
        },
        CategoryDef {
            category: Category::Conditions,
            weight: 0.9,
            keywords: &[
                "condition", "clause", "modalité", "stipulation", "disposition",
                "réserve",
            ],
            patterns: compile(&[r"sous\s+(?:condition|réserve)", r"clause\s+\w+"]),
        },
        CategoryDef {
            category: Category::QualityControl,
            weight: 1.0,
            keywords: &[
                "contrôle", "vérification", "test", "essai", "conformité", "réception",
            ],
            patterns: compile(&[r"conformité\s+aux?", r"procès-verbal\s+de\s+réception"]),
        },
        CategoryDef {
            category: Category::SafetySecurity,
            weight: 1.0,
            keywords: &[
                "sécurité", "protection", "risque", "danger", "prévention", "incendie",
            ],
            patterns: compile(&[r"normes?\s+de\s+sécurité", r"plan\s+de\s+prévention"]),
        },
    ]
});

/// Primary category definitions in registry (tie-break) order.
#[must_use]
pub fn category_defs() -> &'static [CategoryDef] {
    &PRIMARY
}

/// Keyword-only sets for the secondary transparency scores.
#[must_use]
pub const fn secondary_keywords(category: SecondaryCategory) -> &'static [&'static str] {
    match category {
        SecondaryCategory::Obligations => &["obligation", "engage", "doit", "responsabilité"],
        SecondaryCategory::Conditions => &["condition", "clause", "modalité", "si"],
        SecondaryCategory::Financial => &["prix", "coût", "euros", "€", "montant"],
        SecondaryCategory::Timeline => &["délai", "date", "échéance", "livraison"],
        SecondaryCategory::Guarantees => &["garantie", "assurance", "caution"],
        SecondaryCategory::TechnicalRequirements => &["technique", "norme", "spécification"],
        SecondaryCategory::QualityControl => &["contrôle", "vérification", "test"],
        SecondaryCategory::SafetySecurity => &["sécurité", "protection", "risque"],
        SecondaryCategory::Administrative => &["autorisation", "permis", "déclaration"],
        SecondaryCategory::Definitions => &["définition", "signifie", "désigne"],
        SecondaryCategory::Procedures => &["procédure", "méthode", "étape"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defs_cover_every_scored_category_in_order() {
        let defs = category_defs();
        assert_eq!(defs.len(), Category::SCORED.len());
        for (def, expected) in defs.iter().zip(Category::SCORED) {
            assert_eq!(def.category, expected);
        }
    }

    #[test]
    fn every_def_carries_keywords_and_a_positive_weight() {
        for def in category_defs() {
            assert!(!def.keywords.is_empty());
            assert!(def.weight > 0.0);
        }
    }

    #[test]
    fn every_secondary_category_has_keywords() {
        for cat in SecondaryCategory::ALL {
            assert!(!secondary_keywords(cat).is_empty());
        }
    }
}

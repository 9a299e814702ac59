use lexchunk_protocol::EntityKind;
use once_cell::sync::Lazy;
use regex::Regex;

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(&format!("(?i){p}")).expect("invalid entity pattern"))
        .collect()
}

static DATES: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"\d{1,2}(?:er)?\s+(?:janvier|février|mars|avril|mai|juin|juillet|août|septembre|octobre|novembre|décembre)\s+\d{4}",
        r"\d{1,2}[/\-.]\d{1,2}[/\-.]\d{2,4}",
        r"(?:janvier|février|mars|avril|mai|juin|juillet|août|septembre|octobre|novembre|décembre)\s+\d{4}",
    ])
});

static MONETARY_AMOUNTS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"\d{1,3}(?:[\s.]\d{3})*(?:,\d{1,2})?\s*(?:euros?|€)",
        r"\d{1,3}(?:[\s.]\d{3})*(?:,\d{1,2})?\s*EUR\b",
        r"\d{1,3}(?:[\s.]\d{3})*(?:,\d{1,2})?\s*(?:\$|dollars?)",
    ])
});

static LEGAL_REFERENCES: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"article\s+[a-z]?\.?\s?\d+(?:[-.]\d+)*",
        r"\b[lr]\.?\s?\d{3}(?:-\d+)*\b",
        r"décret\s+n°\s*[\d-]+",
        r"loi\s+n°\s*[\d-]+",
        r"arrêté\s+du\s+\d{1,2}\s+\w+\s+\d{4}",
        r"code\s+(?:civil|pénal|de\s+commerce|des\s+assurances|de\s+la\s+construction(?:\s+et\s+de\s+l'habitation)?|de\s+l'urbanisme)",
    ])
});

static MEASUREMENTS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"\d+[.,]?\d*\s*(?:m²|m2|mètres?\s*carrés?)",
        r"\d+[.,]?\d*\s*(?:m³|m3|mètres?\s*cubes?)",
        r"\d+[.,]?\d*\s*(?:ml|mètres?\s+linéaires?)",
        r"\d+[.,]?\d*\s*(?:cm|centimètres?)\b",
        r"\d+[.,]?\d*\s*(?:mm|millimètres?)\b",
        r"\d+[.,]?\d*\s*(?:kg|kilogrammes?)\b",
        r"\d+[.,]?\d*\s*tonnes?\b",
        r"\d+[.,]?\d*\s*(?:%|pour\s*cent)",
    ])
});

static NORMS_STANDARDS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"DTU\s+[\d.]+",
        r"NF\s+EN\s+\d+(?:-\d+)*",
        r"NF\s+[A-Z]?\s?\d+",
        r"ISO\s+\d+(?:-\d+)*",
        r"\bCE\s+\d+",
        r"\bC\d+/\d+",
        r"\bHA\d+",
        r"\bRT\s?20\d{2}\b",
    ])
});

static TECHNICAL_SPECS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"\d+[.,]?\d*\s*(?:kwh?|kw|w)(?:/m²)?\b",
        r"classe\s+[a-z]\d?\b",
        r"coefficient\s+[a-z]{1,3}\s*[=:]?\s*\d+[.,]?\d*",
        r"\d+[.,]?\d*\s*(?:db|décibels?)\b",
        r"résistance\s+(?:au\s+feu|thermique|mécanique)",
        r"(?:épaisseur|largeur|hauteur|profondeur)\s+de\s+\d+[.,]?\d*",
    ])
});

static DEADLINES: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"délai\s+de\s+\d+\s+(?:jours?|semaines?|mois|ans?)",
        r"dans\s+(?:les|un\s+délai\s+de)\s+\d+\s+(?:jours?|semaines?|mois)",
        r"sous\s+\d+\s+(?:jours?|semaines?|mois)",
        r"avant\s+le\s+\d{1,2}(?:er)?\s+\w+\s+\d{4}",
        r"au\s+plus\s+tard\s+le\s+\d{1,2}[/\-.]\d{1,2}[/\-.]\d{2,4}",
    ])
});

static PENALTIES: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"pénalités?\s+de\s+retard",
        r"\d+[.,]?\d*\s*(?:€|euros?)\s+par\s+jour\s+de\s+retard",
        r"\d+[.,]?\d*\s*%\s+(?:par\s+(?:jour|mois)|du\s+montant)",
        r"astreintes?\b",
        r"indemnités?\s+forfaitaires?",
    ])
});

static NO_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(Vec::new);

/// Case-insensitive regex list for a kind, in application order.
///
/// The containment-list kinds (materials, actors, insurance terms) have no
/// regexes; see [`containment_terms`].
#[must_use]
pub fn entity_patterns(kind: EntityKind) -> &'static [Regex] {
    match kind {
        EntityKind::Dates => &DATES,
        EntityKind::MonetaryAmounts => &MONETARY_AMOUNTS,
        EntityKind::LegalReferences => &LEGAL_REFERENCES,
        EntityKind::Measurements => &MEASUREMENTS,
        EntityKind::NormsStandards => &NORMS_STANDARDS,
        EntityKind::TechnicalSpecs => &TECHNICAL_SPECS,
        EntityKind::Deadlines => &DEADLINES,
        EntityKind::Penalties => &PENALTIES,
        EntityKind::Materials | EntityKind::RealEstateActors | EntityKind::InsuranceTerms => {
            &NO_PATTERNS
        }
    }
}

const MATERIALS: &[&str] = &[
    "béton",
    "acier",
    "bois",
    "plâtre",
    "ciment",
    "sable",
    "gravier",
    "parpaing",
    "brique",
    "tuile",
    "ardoise",
    "zinc",
    "cuivre",
    "aluminium",
    "pvc",
    "polystyrène",
    "laine de verre",
    "laine de roche",
];

const REAL_ESTATE_ACTORS: &[&str] = &[
    "maître d'ouvrage",
    "maître d'œuvre",
    "maître d'oeuvre",
    "promoteur",
    "réservant",
    "réservataire",
    "entrepreneur",
    "architecte",
    "bureau d'études",
    "bureau de contrôle",
    "syndic",
    "notaire",
    "bailleur",
    "preneur",
    "locataire",
    "acquéreur",
    "vendeur",
    "constructeur",
    "lotisseur",
    "géomètre",
];

const INSURANCE_TERMS: &[&str] = &[
    "dommages-ouvrage",
    "garantie décennale",
    "garantie biennale",
    "garantie de parfait achèvement",
    "garantie financière d'achèvement",
    "responsabilité civile",
    "caution bancaire",
    "assurance multirisque",
    "police d'assurance",
    "franchise",
    "sinistre",
];

/// Literal lowercase terms matched by substring containment.
///
/// Empty for the regex-driven kinds.
#[must_use]
pub fn containment_terms(kind: EntityKind) -> &'static [&'static str] {
    match kind {
        EntityKind::Materials => MATERIALS,
        EntityKind::RealEstateActors => REAL_ESTATE_ACTORS,
        EntityKind::InsuranceTerms => INSURANCE_TERMS,
        _ => &[],
    }
}

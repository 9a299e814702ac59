/// Weighted vocabulary for the keyword quality factor. Tier 3 terms are the
/// strong domain anchors, tier 1 the weak supporting ones.
pub const QUALITY_KEYWORDS: &[(&str, u32)] = &[
    // Universal contract anchors
    ("contrat", 3),
    ("prix", 3),
    ("délai", 3),
    ("garantie", 3),
    ("obligation", 3),
    ("montant", 3),
    ("somme", 3),
    ("euros", 3),
    ("paiement", 3),
    ("échéance", 3),
    // VEFA / real-estate programme vocabulary
    ("vefa", 3),
    ("réservation", 3),
    ("réservataire", 3),
    ("réservant", 3),
    ("livraison", 3),
    ("achèvement", 3),
    ("programme", 3),
    ("logement", 3),
    ("résidence", 3),
    ("projet", 3),
    ("spécifications", 3),
    // Mid-weight legal vocabulary
    ("article", 2),
    ("clause", 2),
    ("conditions", 2),
    ("responsabilité", 2),
    ("travaux", 2),
    ("entreprise", 2),
    ("convenu", 2),
    ("techniques", 2),
    ("conforme", 2),
    ("acompte", 2),
    ("notaire", 2),
    // Supporting terms
    ("société", 1),
    ("dénommée", 1),
    ("capital", 1),
    ("siège", 1),
    ("représentée", 1),
    ("qualité", 1),
    ("engagement", 1),
    ("partie", 1),
    ("modalité", 1),
];

/// Priority keywords surfaced as a chunk's key elements, highest tier
/// first; insertion order breaks ties.
pub const KEY_ELEMENT_PRIORITIES: &[(&str, u32)] = &[
    ("contrat", 3),
    ("prix", 3),
    ("délai", 3),
    ("garantie", 3),
    ("obligation", 2),
    ("clause", 2),
    ("article", 2),
    ("conditions", 2),
    ("paiement", 2),
    ("livraison", 2),
    ("responsabilité", 2),
    ("assurance", 1),
    ("modalité", 1),
    ("échéance", 1),
];

/// Sentence-initial connectors that forbid a chunk split right before them.
pub const COHESION_CONNECTORS: &[&str] = &[
    "et",
    "ou",
    "mais",
    "donc",
    "car",
    "ainsi",
    "alors",
    "cependant",
    "toutefois",
    "néanmoins",
];

/// Logical connectors counted by the coherence scorer.
pub const LOGICAL_CONNECTORS: &[&str] = &[
    "car",
    "donc",
    "ainsi",
    "en effet",
    "par conséquent",
    "cependant",
    "toutefois",
    "néanmoins",
    "en outre",
    "par ailleurs",
    "de plus",
    "notamment",
];

/// Thematic keyword groups used by the theme-consistency factor, in the
/// order (contractual, financial, temporal, technical, legal).
pub const THEMATIC_GROUPS: &[(&str, &[&str])] = &[
    (
        "contractual",
        &["contrat", "clause", "article", "partie", "engagement", "convention"],
    ),
    (
        "financial",
        &["prix", "montant", "euros", "paiement", "acompte", "tva"],
    ),
    (
        "temporal",
        &["délai", "date", "échéance", "livraison", "terme", "durée"],
    ),
    (
        "technical",
        &["travaux", "matériau", "norme", "construction", "bâtiment", "technique"],
    ),
    (
        "legal",
        &["droit", "loi", "décret", "code", "juridique", "notaire"],
    ),
];

/// Fixed real-estate vocabulary for the domain-specificity factor.
pub const REAL_ESTATE_TERMS: &[&str] = &[
    "vefa",
    "réservation",
    "logement",
    "appartement",
    "résidence",
    "programme",
    "immobilier",
    "copropriété",
    "lot",
    "surface habitable",
    "livraison",
    "achèvement",
    "promoteur",
    "acquéreur",
    "permis de construire",
];

/// Abbreviations whose trailing period must not open a sentence boundary.
pub const ABBREVIATIONS: &[&str] = &[
    "art.", "etc.", "M.", "MM.", "Mme.", "Mlle.", "Dr.", "Me.", "Sté.", "cf.", "p.", "al.",
    "ex.", "n°.",
];

/// Company-form prefixes that disqualify a locality match.
pub const COMPANY_FORMS: &[&str] = &["SARL", "SAS", "SA", "SASU", "EURL", "SCI"];

/// Header phrases that flag tabular content even without pipe characters.
pub const TABLE_HEADER_PHRASES: &[&str] = &[
    "désignation",
    "quantité",
    "prix unitaire",
    "montant ht",
    "lot n°",
];

use lexchunk_protocol::DocumentType;
use once_cell::sync::Lazy;
use regex::Regex;

/// Ordered regex list for one party role; the first capture wins.
pub struct PartyPattern {
    pub role: &'static str,
    pub patterns: Vec<Regex>,
}

/// Detection and extraction patterns for one document type.
pub struct DocTypeDef {
    pub doc_type: DocumentType,
    /// Title-pattern hits count x3 toward the detection score; the first
    /// match also yields the document title.
    pub title_patterns: Vec<Regex>,
    pub parties: Vec<PartyPattern>,
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(&format!("(?i){p}")).expect("invalid document pattern"))
        .collect()
}

fn party(role: &'static str, patterns: &[&str]) -> PartyPattern {
    PartyPattern {
        role,
        patterns: compile(patterns),
    }
}

const DATE_ALT: &str = r"(\d{1,2}(?:er)?\s+\w+\s+\d{4}|\d{1,2}[/\-.]\d{1,2}[/\-.]\d{2,4})";

static DOCTYPES: Lazy<Vec<DocTypeDef>> = Lazy::new(|| {
    vec![
        DocTypeDef {
            doc_type: DocumentType::ContratReservationVefa,
            title_patterns: compile(&[
                r"contrat.{0,20}r[eé]servation(?:.{0,10}vefa)?",
                r"\bvefa\b",
                r"r[eé]servation.{0,30}futur.{0,10}ach[eè]vement",
            ]),
            parties: vec![
                party(
                    "reservant",
                    &[
                        r"société\s+dénommée\s+([A-ZÀ-Ý][^\n]+?)\s+au\s+capital",
                        r"dénommée\s+«?\s*([A-ZÀ-Ý][^\n»]{5,80})",
                        r"r[eé]servant[^\n]{0,10}([A-ZÀ-Ý][^\n]{10,80})",
                    ],
                ),
                party(
                    "reservataire",
                    &[r"r[eé]servataire[^\n]{0,10}([A-ZÀ-Ý][^\n]{10,80})"],
                ),
            ],
        },
        DocTypeDef {
            doc_type: DocumentType::Cctp,
            title_patterns: compile(&[
                r"\bcctp\b",
                r"cahier\s+des?\s+clauses\s+techniques(?:\s+particuli[èe]res)?",
                r"cahier\s+des\s+charges",
            ]),
            parties: vec![
                party(
                    "maitre_ouvrage",
                    &[r"ma[iî]tre\s+d['’]ouvrage[^\n]{0,10}([A-ZÀ-Ý][^\n]{10,80})"],
                ),
                party(
                    "entrepreneur",
                    &[r"entrepreneur[^\n]{0,10}([A-ZÀ-Ý][^\n]{10,80})"],
                ),
            ],
        },
        DocTypeDef {
            doc_type: DocumentType::ActeNotarie,
            title_patterns: compile(&[
                r"acte\s+(?:de\s+vente\s+)?notari[eé]",
                r"par-?devant\s+ma[iî]tre",
                r"étude\s+de\s+ma[iî]tre",
            ]),
            parties: vec![
                party("vendeur", &[r"vendeur[^\n]{0,10}([A-ZÀ-Ý][^\n]{10,80})"]),
                party(
                    "acquereur",
                    &[r"acqu[eé]reur[^\n]{0,10}([A-ZÀ-Ý][^\n]{10,80})"],
                ),
            ],
        },
        DocTypeDef {
            doc_type: DocumentType::BailHabitation,
            title_patterns: compile(&[
                r"bail\s+d['’]habitation",
                r"contrat\s+de\s+location",
                r"location\s+.{0,20}logement",
            ]),
            parties: vec![
                party("bailleur", &[r"bailleur[^\n]{0,10}([A-ZÀ-Ý][^\n]{10,80})"]),
                party(
                    "locataire",
                    &[r"locataire[^\n]{0,10}([A-ZÀ-Ý][^\n]{10,80})"],
                ),
            ],
        },
        DocTypeDef {
            doc_type: DocumentType::BailCommercial,
            title_patterns: compile(&[r"bail\s+commercial", r"fonds\s+de\s+commerce"]),
            parties: vec![
                party("bailleur", &[r"bailleur[^\n]{0,10}([A-ZÀ-Ý][^\n]{10,80})"]),
                party("preneur", &[r"preneur[^\n]{0,10}([A-ZÀ-Ý][^\n]{10,80})"]),
            ],
        },
        DocTypeDef {
            doc_type: DocumentType::MarchePublic,
            title_patterns: compile(&[
                r"march[eé]\s+public",
                r"appel\s+d['’]offres",
                r"soumission",
            ]),
            parties: vec![
                party(
                    "pouvoir_adjudicateur",
                    &[r"pouvoir\s+adjudicateur[^\n]{0,10}([A-ZÀ-Ý][^\n]{10,80})"],
                ),
                party("titulaire", &[r"titulaire[^\n]{0,10}([A-ZÀ-Ý][^\n]{10,80})"]),
            ],
        },
        DocTypeDef {
            doc_type: DocumentType::PermisConstruire,
            title_patterns: compile(&[
                r"permis\s+de\s+construire",
                r"d[eé]claration\s+pr[eé]alable",
                r"autorisation\s+d['’]urbanisme",
            ]),
            parties: vec![party(
                "demandeur",
                &[r"demandeur[^\n]{0,10}([A-ZÀ-Ý][^\n]{10,80})"],
            )],
        },
        DocTypeDef {
            doc_type: DocumentType::Devis,
            title_patterns: compile(&[r"\bdevis\b", r"chiffrage", r"estimation"]),
            parties: vec![
                party(
                    "entreprise",
                    &[r"entreprise[^\n]{0,10}([A-ZÀ-Ý][^\n]{10,80})"],
                ),
                party("client", &[r"client[^\n]{0,10}([A-ZÀ-Ý][^\n]{10,80})"]),
            ],
        },
        DocTypeDef {
            doc_type: DocumentType::Facture,
            title_patterns: compile(&[r"\bfacture\b", r"facturation"]),
            parties: vec![
                party(
                    "emetteur",
                    &[r"[eé]mise\s+par[^\n]{0,10}([A-ZÀ-Ý][^\n]{10,80})"],
                ),
                party("client", &[r"client[^\n]{0,10}([A-ZÀ-Ý][^\n]{10,80})"]),
            ],
        },
    ]
});

/// Document-type definitions in detection (tie-break) order.
#[must_use]
pub fn doctype_defs() -> &'static [DocTypeDef] {
    &DOCTYPES
}

static GENERIC_PARTIES: Lazy<Vec<PartyPattern>> = Lazy::new(|| {
    vec![
        party(
            "partie_1",
            &[r"entre\s+(?:les\s+soussign[eé]s\s+)?([A-ZÀ-Ý][^\n,]{10,80})"],
        ),
        party("partie_2", &[r"\bet\s+([A-ZÀ-Ý][A-ZÀ-Ý][^\n,]{8,78})"]),
    ]
});

/// Two-role fallback applied when no type-specific party matched.
#[must_use]
pub fn generic_party_patterns() -> &'static [PartyPattern] {
    &GENERIC_PARTIES
}

static CONTEXTUAL_DATES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        format!(r"fait\s+à\s+[^\n,]+?,?\s+le\s+{DATE_ALT}"),
        format!(r"sign[eé]e?\s+le\s+{DATE_ALT}"),
        format!(r"en\s+date\s+du\s+{DATE_ALT}"),
        format!(r"conclue?\s+le\s+{DATE_ALT}"),
    ]
    .iter()
    .map(|p| Regex::new(&format!("(?i){p}")).expect("invalid date pattern"))
    .collect()
});

/// "Signed/dated" patterns tried in priority order; group 1 is the date.
#[must_use]
pub fn contextual_date_patterns() -> &'static [Regex] {
    &CONTEXTUAL_DATES
}

static BARE_DATES: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"\d{1,2}(?:er)?\s+(?:janvier|février|mars|avril|mai|juin|juillet|août|septembre|octobre|novembre|décembre)\s+\d{4}",
        r"\d{1,2}[/\-.]\d{1,2}[/\-.]\d{2,4}",
    ])
});

/// Fallback date patterns matched anywhere in the sample.
#[must_use]
pub fn bare_date_patterns() -> &'static [Regex] {
    &BARE_DATES
}

static LOCATIONS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"([A-ZÀ-Ý][a-zà-ÿ]+(?:[\s-](?:d['’])?[A-ZÀ-Ý][a-zà-ÿ]+)*)\s*\(\d{2,5}\)",
        r"\bà\s+([A-ZÀ-Ý][A-ZÀ-Ý\s-]{2,40}?)\s*\(\d{5}\)",
        r"commune\s+de\s+([A-ZÀ-Ý][\wà-ÿ\s-]{2,40})",
    ])
});

/// Locality patterns; group 1 is the place name.
#[must_use]
pub fn location_patterns() -> &'static [Regex] {
    &LOCATIONS
}

static PROJECT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:programme|projet|r[eé]sidence|op[eé]ration)[^«\n]{0,40}«\s*([^»]{2,50})\s*»")
        .expect("invalid project pattern")
});

/// Guillemet-quoted project name following a programme keyword; group 1 is
/// the name.
#[must_use]
pub fn project_pattern() -> &'static Regex {
    &PROJECT
}

static UPPERCASE_TITLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\s*([A-ZÀ-Ý][A-ZÀ-Ý\s'«»\d-]{15,100})\s*$").expect("invalid title pattern")
});

/// Generic all-caps-line heuristic for titles; group 1 is the line.
#[must_use]
pub fn uppercase_title_pattern() -> &'static Regex {
    &UPPERCASE_TITLE
}

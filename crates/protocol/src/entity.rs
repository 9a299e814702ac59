use serde::{Deserialize, Serialize};

/// The fixed set of entity kinds recognized by the extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Dates,
    MonetaryAmounts,
    LegalReferences,
    Measurements,
    NormsStandards,
    Materials,
    TechnicalSpecs,
    RealEstateActors,
    InsuranceTerms,
    Deadlines,
    Penalties,
}

impl EntityKind {
    /// All kinds in extraction order.
    pub const ALL: [Self; 11] = [
        Self::Dates,
        Self::MonetaryAmounts,
        Self::LegalReferences,
        Self::Measurements,
        Self::NormsStandards,
        Self::Materials,
        Self::TechnicalSpecs,
        Self::RealEstateActors,
        Self::InsuranceTerms,
        Self::Deadlines,
        Self::Penalties,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dates => "dates",
            Self::MonetaryAmounts => "monetary_amounts",
            Self::LegalReferences => "legal_references",
            Self::Measurements => "measurements",
            Self::NormsStandards => "norms_standards",
            Self::Materials => "materials",
            Self::TechnicalSpecs => "technical_specs",
            Self::RealEstateActors => "real_estate_actors",
            Self::InsuranceTerms => "insurance_terms",
            Self::Deadlines => "deadlines",
            Self::Penalties => "penalties",
        }
    }
}

/// Matched substrings per entity kind.
///
/// Duplicates are preserved and the order within a kind is pattern
/// application order, then match order within the text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySet {
    pub dates: Vec<String>,
    pub monetary_amounts: Vec<String>,
    pub legal_references: Vec<String>,
    pub measurements: Vec<String>,
    pub norms_standards: Vec<String>,
    pub materials: Vec<String>,
    pub technical_specs: Vec<String>,
    pub real_estate_actors: Vec<String>,
    pub insurance_terms: Vec<String>,
    pub deadlines: Vec<String>,
    pub penalties: Vec<String>,
}

impl EntitySet {
    #[must_use]
    pub fn by_kind(&self, kind: EntityKind) -> &[String] {
        match kind {
            EntityKind::Dates => &self.dates,
            EntityKind::MonetaryAmounts => &self.monetary_amounts,
            EntityKind::LegalReferences => &self.legal_references,
            EntityKind::Measurements => &self.measurements,
            EntityKind::NormsStandards => &self.norms_standards,
            EntityKind::Materials => &self.materials,
            EntityKind::TechnicalSpecs => &self.technical_specs,
            EntityKind::RealEstateActors => &self.real_estate_actors,
            EntityKind::InsuranceTerms => &self.insurance_terms,
            EntityKind::Deadlines => &self.deadlines,
            EntityKind::Penalties => &self.penalties,
        }
    }

    pub fn by_kind_mut(&mut self, kind: EntityKind) -> &mut Vec<String> {
        match kind {
            EntityKind::Dates => &mut self.dates,
            EntityKind::MonetaryAmounts => &mut self.monetary_amounts,
            EntityKind::LegalReferences => &mut self.legal_references,
            EntityKind::Measurements => &mut self.measurements,
            EntityKind::NormsStandards => &mut self.norms_standards,
            EntityKind::Materials => &mut self.materials,
            EntityKind::TechnicalSpecs => &mut self.technical_specs,
            EntityKind::RealEstateActors => &mut self.real_estate_actors,
            EntityKind::InsuranceTerms => &mut self.insurance_terms,
            EntityKind::Deadlines => &mut self.deadlines,
            EntityKind::Penalties => &mut self.penalties,
        }
    }

    /// Total matches across all kinds.
    #[must_use]
    pub fn total_count(&self) -> usize {
        EntityKind::ALL
            .iter()
            .map(|kind| self.by_kind(*kind).len())
            .sum()
    }

    #[must_use]
    pub fn has_dates(&self) -> bool {
        !self.dates.is_empty()
    }

    #[must_use]
    pub fn has_financial_info(&self) -> bool {
        !self.monetary_amounts.is_empty()
    }

    #[must_use]
    pub fn has_legal_references(&self) -> bool {
        !self.legal_references.is_empty()
    }
}

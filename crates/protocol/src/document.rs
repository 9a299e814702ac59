use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Recognized document families for French real-estate and construction
/// paperwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    ContratReservationVefa,
    Cctp,
    ActeNotarie,
    BailHabitation,
    BailCommercial,
    MarchePublic,
    PermisConstruire,
    Devis,
    Facture,
    ContratGeneral,
}

impl DocumentType {
    /// Detectable types in registry order. `ContratGeneral` is the default,
    /// never scored directly.
    pub const DETECTABLE: [Self; 9] = [
        Self::ContratReservationVefa,
        Self::Cctp,
        Self::ActeNotarie,
        Self::BailHabitation,
        Self::BailCommercial,
        Self::MarchePublic,
        Self::PermisConstruire,
        Self::Devis,
        Self::Facture,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ContratReservationVefa => "contrat_reservation_vefa",
            Self::Cctp => "cctp",
            Self::ActeNotarie => "acte_notarie",
            Self::BailHabitation => "bail_habitation",
            Self::BailCommercial => "bail_commercial",
            Self::MarchePublic => "marche_public",
            Self::PermisConstruire => "permis_construire",
            Self::Devis => "devis",
            Self::Facture => "facture",
            Self::ContratGeneral => "contrat_general",
        }
    }
}

/// Document-level bibliographic metadata, extracted once per document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// 17-character token: 14-digit timestamp plus 3-character uppercase
    /// content hash. Pure function of `(text, title, date)`.
    pub id: String,
    pub title: String,
    /// Normalized `DD/MM/YYYY`.
    pub date: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    /// Role name to party label, each label at most 80 characters.
    pub parties: BTreeMap<String, String>,
    pub location: String,
    pub project: String,
}

/// Chunk counts per quality band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityDistribution {
    /// `quality_score >= 0.8`
    pub high: usize,
    /// `0.5 <= quality_score < 0.8`
    pub medium: usize,
    /// `quality_score < 0.5`
    pub low: usize,
}

/// Document-wide summary of a chunking run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentStats {
    pub document_type: DocumentType,
    pub total_chunks: usize,
    /// Mean quality score, 3-decimal rounding.
    pub avg_chunk_quality: f64,
    pub quality_distribution: QualityDistribution,
    pub text_length: usize,
    pub avg_chunk_size: f64,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_type_serializes_as_registry_label() {
        let json = serde_json::to_string(&DocumentType::ContratReservationVefa).unwrap();
        assert_eq!(json, "\"contrat_reservation_vefa\"");
        assert_eq!(DocumentType::Cctp.as_str(), "cctp");
    }

    #[test]
    fn metadata_type_field_serializes_as_type() {
        let metadata = DocumentMetadata {
            id: "20120915120000A3F".to_string(),
            title: "CONTRAT DE RESERVATION VEFA".to_string(),
            date: "15/09/2012".to_string(),
            doc_type: DocumentType::ContratReservationVefa,
            parties: BTreeMap::new(),
            location: String::new(),
            project: String::new(),
        };
        let json = serde_json::to_value(&metadata).unwrap();
        assert_eq!(json["type"], "contrat_reservation_vefa");
        assert_eq!(json["id"].as_str().unwrap().len(), 17);
    }
}

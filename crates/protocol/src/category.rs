use serde::{Deserialize, Serialize};

/// Primary content category assigned to a chunk.
///
/// Variant order is the registry iteration order used for deterministic
/// tie-breaking in the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Financial,
    Timeline,
    Obligations,
    Guarantees,
    TechnicalRequirements,
    Conditions,
    QualityControl,
    SafetySecurity,
    General,
}

impl Category {
    /// Scoreable categories in registry order. `General` is the fallback
    /// label, never scored directly.
    pub const SCORED: [Self; 8] = [
        Self::Financial,
        Self::Timeline,
        Self::Obligations,
        Self::Guarantees,
        Self::TechnicalRequirements,
        Self::Conditions,
        Self::QualityControl,
        Self::SafetySecurity,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Financial => "financial",
            Self::Timeline => "timeline",
            Self::Obligations => "obligations",
            Self::Guarantees => "guarantees",
            Self::TechnicalRequirements => "technical_requirements",
            Self::Conditions => "conditions",
            Self::QualityControl => "quality_control",
            Self::SafetySecurity => "safety_security",
            Self::General => "general",
        }
    }
}

/// Secondary category set scored for transparency on every chunk,
/// independent of the winning primary label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecondaryCategory {
    Obligations,
    Conditions,
    Financial,
    Timeline,
    Guarantees,
    TechnicalRequirements,
    QualityControl,
    SafetySecurity,
    Administrative,
    Definitions,
    Procedures,
}

impl SecondaryCategory {
    pub const ALL: [Self; 11] = [
        Self::Obligations,
        Self::Conditions,
        Self::Financial,
        Self::Timeline,
        Self::Guarantees,
        Self::TechnicalRequirements,
        Self::QualityControl,
        Self::SafetySecurity,
        Self::Administrative,
        Self::Definitions,
        Self::Procedures,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Obligations => "obligations",
            Self::Conditions => "conditions",
            Self::Financial => "financial",
            Self::Timeline => "timeline",
            Self::Guarantees => "guarantees",
            Self::TechnicalRequirements => "technical_requirements",
            Self::QualityControl => "quality_control",
            Self::SafetySecurity => "safety_security",
            Self::Administrative => "administrative",
            Self::Definitions => "definitions",
            Self::Procedures => "procedures",
        }
    }
}

/// Keyword-hit counts for every secondary category.
///
/// All categories are always present, zero when nothing matched, so the
/// score vector is comparable across chunks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationScores {
    pub obligations: u32,
    pub conditions: u32,
    pub financial: u32,
    pub timeline: u32,
    pub guarantees: u32,
    pub technical_requirements: u32,
    pub quality_control: u32,
    pub safety_security: u32,
    pub administrative: u32,
    pub definitions: u32,
    pub procedures: u32,
}

impl ClassificationScores {
    #[must_use]
    pub const fn by_category(&self, category: SecondaryCategory) -> u32 {
        match category {
            SecondaryCategory::Obligations => self.obligations,
            SecondaryCategory::Conditions => self.conditions,
            SecondaryCategory::Financial => self.financial,
            SecondaryCategory::Timeline => self.timeline,
            SecondaryCategory::Guarantees => self.guarantees,
            SecondaryCategory::TechnicalRequirements => self.technical_requirements,
            SecondaryCategory::QualityControl => self.quality_control,
            SecondaryCategory::SafetySecurity => self.safety_security,
            SecondaryCategory::Administrative => self.administrative,
            SecondaryCategory::Definitions => self.definitions,
            SecondaryCategory::Procedures => self.procedures,
        }
    }

    pub fn set(&mut self, category: SecondaryCategory, score: u32) {
        match category {
            SecondaryCategory::Obligations => self.obligations = score,
            SecondaryCategory::Conditions => self.conditions = score,
            SecondaryCategory::Financial => self.financial = score,
            SecondaryCategory::Timeline => self.timeline = score,
            SecondaryCategory::Guarantees => self.guarantees = score,
            SecondaryCategory::TechnicalRequirements => self.technical_requirements = score,
            SecondaryCategory::QualityControl => self.quality_control = score,
            SecondaryCategory::SafetySecurity => self.safety_security = score,
            SecondaryCategory::Administrative => self.administrative = score,
            SecondaryCategory::Definitions => self.definitions = score,
            SecondaryCategory::Procedures => self.procedures = score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels_serialize_snake_case() {
        let json = serde_json::to_string(&Category::TechnicalRequirements).unwrap();
        assert_eq!(json, "\"technical_requirements\"");
        let json = serde_json::to_string(&Category::General).unwrap();
        assert_eq!(json, "\"general\"");
    }

    #[test]
    fn scores_round_trip_every_secondary_category() {
        let mut scores = ClassificationScores::default();
        for (i, cat) in SecondaryCategory::ALL.iter().enumerate() {
            scores.set(*cat, i as u32 + 1);
        }
        for (i, cat) in SecondaryCategory::ALL.iter().enumerate() {
            assert_eq!(scores.by_category(*cat), i as u32 + 1);
        }
    }

    #[test]
    fn default_scores_are_all_zero() {
        let scores = ClassificationScores::default();
        for cat in SecondaryCategory::ALL {
            assert_eq!(scores.by_category(cat), 0);
        }
    }
}

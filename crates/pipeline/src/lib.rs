//! Pipeline orchestrator: one pure function from `(text, options)` to the
//! ordered chunk sequence plus document metadata and run statistics.
//!
//! Wires the normalizer, structure classifier and chunk builders, then
//! enriches every chunk with entities, classification, quality score and
//! presentation fields. Stateless across calls; the only shared state is
//! the immutable pattern registry, so concurrent requests need no locking.

use lexchunk_analysis::{
    classification_scores, classify_content, extract_entities, hierarchical_title, key_elements,
    quality_score,
};
use lexchunk_chunker::{adaptive_target, build_chunks, normalize, ChunkDraft, ChunkerConfig};
use lexchunk_metadata::extract_document_metadata;
use lexchunk_protocol::{Chunk, DocumentMetadata, DocumentStats, QualityDistribution};
use serde::{Deserialize, Serialize};

pub use lexchunk_chunker::{ChunkerError, Result};

/// Quality band thresholds for the run statistics.
const HIGH_QUALITY: f64 = 0.8;
const MEDIUM_QUALITY: f64 = 0.5;

/// Share of low-quality chunks above which a resizing recommendation is
/// emitted, in percent.
const LOW_QUALITY_ALERT: f64 = 30.0;

/// Caller-facing processing options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessOptions {
    /// Base target chunk size in words, before adaptive adjustment.
    pub target_size: usize,
    /// Overlap carried between adjacent chunks, in words.
    pub overlap: usize,
    /// Opaque pass-through identifiers.
    pub user_id: Option<String>,
    pub project_id: Option<String>,
    /// Attach the document metadata record to every chunk.
    pub enrich_with_metadata: bool,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            target_size: 60,
            overlap: 15,
            user_id: None,
            project_id: None,
            enrich_with_metadata: false,
        }
    }
}

/// Complete result of one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessResult {
    pub chunks: Vec<Chunk>,
    pub document_metadata: DocumentMetadata,
    pub document_stats: DocumentStats,
}

/// Run the full pipeline over one document.
///
/// Range validation of `target_size` and `overlap` is the caller's
/// responsibility; the core only rejects configurations the builder cannot
/// work with at all.
pub fn process(text: &str, options: &ProcessOptions) -> Result<ProcessResult> {
    let document_metadata = extract_document_metadata(text);

    let normalized = normalize(text);
    let target_size = adaptive_target(&normalized, options.target_size);
    let config = ChunkerConfig {
        target_size,
        overlap: options.overlap.min(target_size.saturating_sub(1)),
        start_id: 1,
    };
    config.validate()?;

    let drafts = build_chunks(text, &config);
    log::debug!("built {} chunks (target {target_size} words)", drafts.len());

    let chunks: Vec<Chunk> = drafts
        .into_iter()
        .map(|draft| enrich(draft, options, &document_metadata))
        .collect();

    let document_stats = compute_stats(&chunks, &document_metadata, text);

    Ok(ProcessResult {
        chunks,
        document_metadata,
        document_stats,
    })
}

fn enrich(draft: ChunkDraft, options: &ProcessOptions, metadata: &DocumentMetadata) -> Chunk {
    let ChunkDraft {
        position,
        content,
        word_count,
    } = draft;

    let entities = extract_entities(&content);
    let quality = quality_score(&content, &entities);

    Chunk {
        chunk_id: Chunk::id_label(position),
        hierarchical_title: hierarchical_title(&content),
        content_type: classify_content(&content),
        word_count,
        char_count: content.chars().count(),
        position,
        quality_score: quality,
        classification_scores: classification_scores(&content),
        key_elements: key_elements(&content),
        entities,
        user_id: options.user_id.clone(),
        project_id: options.project_id.clone(),
        document_metadata: options.enrich_with_metadata.then(|| metadata.clone()),
        content,
    }
}

fn compute_stats(chunks: &[Chunk], metadata: &DocumentMetadata, text: &str) -> DocumentStats {
    let mut distribution = QualityDistribution::default();
    let mut total_quality = 0.0;
    let mut total_words = 0usize;

    for chunk in chunks {
        total_quality += chunk.quality_score;
        total_words += chunk.word_count;
        if chunk.quality_score >= HIGH_QUALITY {
            distribution.high += 1;
        } else if chunk.quality_score >= MEDIUM_QUALITY {
            distribution.medium += 1;
        } else {
            distribution.low += 1;
        }
    }

    let count = chunks.len();
    let avg_chunk_quality = if count == 0 {
        0.0
    } else {
        round3(total_quality / count as f64)
    };
    let avg_chunk_size = if count == 0 {
        0.0
    } else {
        round3(total_words as f64 / count as f64)
    };

    let mut recommendations = Vec::new();
    if count > 0 {
        let low_rate = distribution.low as f64 / count as f64 * 100.0;
        if low_rate > LOW_QUALITY_ALERT {
            recommendations.push(
                "Taux élevé de chunks de basse qualité - considérer l'augmentation de target_size"
                    .to_string(),
            );
        }
    }

    DocumentStats {
        document_type: metadata.doc_type,
        total_chunks: count,
        avg_chunk_quality,
        quality_distribution: distribution,
        text_length: text.chars().count(),
        avg_chunk_size,
        recommendations,
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexchunk_protocol::Category;
    use pretty_assertions::assert_eq;

    const VEFA_TEXT: &str = "Le prix de vente est fixé à 245 000 euros TTC. Livraison prévue le 31 décembre 2013. Article 1 - Objet de la réservation. La présente réservation a pour objet un appartement de type T3 d'une superficie de 65,50 m² situé au 2ème étage du bâtiment A.";

    #[test]
    fn end_to_end_vefa_example() {
        let options = ProcessOptions {
            target_size: 60,
            overlap: 15,
            ..Default::default()
        };
        let result = process(VEFA_TEXT, &options).unwrap();
        assert!(!result.chunks.is_empty());

        let with_price = result
            .chunks
            .iter()
            .find(|c| {
                c.entities
                    .monetary_amounts
                    .iter()
                    .any(|m| m.contains("245 000 euros"))
            })
            .expect("a chunk carries the sale price");
        assert!(with_price
            .entities
            .dates
            .iter()
            .any(|d| d.contains("31 décembre 2013")));
        assert!(matches!(
            with_price.content_type,
            Category::Financial | Category::Timeline
        ));
    }

    #[test]
    fn chunk_ids_are_monotonic_and_formatted() {
        let result = process(VEFA_TEXT, &ProcessOptions::default()).unwrap();
        for (idx, chunk) in result.chunks.iter().enumerate() {
            assert_eq!(chunk.position, idx + 1);
            assert_eq!(chunk.chunk_id, format!("chunk_{:03}", idx + 1));
        }
    }

    #[test]
    fn metadata_enrichment_is_opt_in() {
        let lean = process(VEFA_TEXT, &ProcessOptions::default()).unwrap();
        assert!(lean.chunks.iter().all(|c| c.document_metadata.is_none()));

        let enriched = process(
            VEFA_TEXT,
            &ProcessOptions {
                enrich_with_metadata: true,
                ..Default::default()
            },
        )
        .unwrap();
        assert!(enriched
            .chunks
            .iter()
            .all(|c| c.document_metadata.is_some()));
    }

    #[test]
    fn pass_through_identifiers_land_on_every_chunk() {
        let options = ProcessOptions {
            user_id: Some("user-42".to_string()),
            project_id: Some("projet-nest".to_string()),
            ..Default::default()
        };
        let result = process(VEFA_TEXT, &options).unwrap();
        for chunk in &result.chunks {
            assert_eq!(chunk.user_id.as_deref(), Some("user-42"));
            assert_eq!(chunk.project_id.as_deref(), Some("projet-nest"));
        }
    }

    #[test]
    fn stats_summarize_the_run() {
        let result = process(VEFA_TEXT, &ProcessOptions::default()).unwrap();
        let stats = &result.document_stats;
        assert_eq!(stats.total_chunks, result.chunks.len());
        assert_eq!(stats.text_length, VEFA_TEXT.chars().count());
        assert!(stats.avg_chunk_quality > 0.0);
        let banded = stats.quality_distribution.high
            + stats.quality_distribution.medium
            + stats.quality_distribution.low;
        assert_eq!(banded, stats.total_chunks);
    }

    #[test]
    fn result_serializes_with_wire_field_names() {
        let result = process(VEFA_TEXT, &ProcessOptions::default()).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        let chunks = json["chunks"].as_array().unwrap();
        assert!(!chunks.is_empty());
        assert!(chunks[0]["content_type"].is_string());
        assert!(chunks[0]["entities"]["monetary_amounts"].is_array());
        assert_eq!(
            json["document_stats"]["total_chunks"].as_u64().unwrap() as usize,
            chunks.len()
        );
    }

    #[test]
    fn identical_calls_are_deterministic() {
        let a = process(VEFA_TEXT, &ProcessOptions::default()).unwrap();
        let b = process(VEFA_TEXT, &ProcessOptions::default()).unwrap();
        assert_eq!(a.chunks, b.chunks);
        assert_eq!(a.document_metadata.id, b.document_metadata.id);
    }
}

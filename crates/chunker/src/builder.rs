use crate::config::ChunkerConfig;
use crate::normalize::normalize;
use crate::overlap::overlap_seed;
use crate::sentence::split_sentences;
use crate::structure::has_table;
use crate::table::build_with_tables;
use lexchunk_registry::COHESION_CONNECTORS;

/// A bare chunk span produced by the builder, before enrichment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkDraft {
    /// 1-based sequence number, strictly increasing within a document.
    pub position: usize,
    pub content: String,
    pub word_count: usize,
}

impl ChunkDraft {
    fn from_words(position: usize, words: &[String]) -> Self {
        Self {
            position,
            content: words.join(" "),
            word_count: words.len(),
        }
    }
}

/// Route a document to the table-aware or the standard builder.
#[must_use]
pub fn build_chunks(text: &str, config: &ChunkerConfig) -> Vec<ChunkDraft> {
    if has_table(text) {
        log::debug!("table signals detected, using table-aware path");
        build_with_tables(text, config)
    } else {
        build_standard(text, config, config.start_id)
    }
}

/// Greedy sentence-windowed chunking with cohesion checks and semantic
/// overlap. `start_id` seeds the position counter so table sub-sections can
/// continue a shared sequence.
#[must_use]
pub fn build_standard(text: &str, config: &ChunkerConfig, start_id: usize) -> Vec<ChunkDraft> {
    let normalized = normalize(text);
    let sentences = split_sentences(&normalized);

    let mut drafts = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut position = start_id;

    for sentence in &sentences {
        let sentence_words: Vec<String> =
            sentence.split_whitespace().map(str::to_string).collect();
        if sentence_words.is_empty() {
            continue;
        }

        let would_overflow = current.len() + sentence_words.len() > config.target_size;
        if would_overflow && !current.is_empty() && can_split_here(&current, &sentence_words[0]) {
            drafts.push(ChunkDraft::from_words(position, &current));
            log::debug!("chunk {position} closed at {} words", current.len());
            position += 1;

            let mut seeded = overlap_seed(&current, config.overlap);
            seeded.extend(sentence_words);
            current = seeded;
        } else {
            // Size target is soft, cohesion is hard: an oversized sentence
            // still lands in the current chunk when splitting is forbidden.
            current.extend(sentence_words);
        }
    }

    if !current.is_empty() {
        drafts.push(ChunkDraft::from_words(position, &current));
    }

    drafts
}

/// Cohesion check: a split is refused when the next sentence opens with a
/// coordinating/subordinating connector, or when the tail of the current
/// chunk is mid-enumeration (a `;` or `:` within the last 10 words).
fn can_split_here(current: &[String], next_first_word: &str) -> bool {
    let leader = next_first_word
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();
    if COHESION_CONNECTORS.contains(&leader.as_str()) {
        return false;
    }

    let tail_start = current.len().saturating_sub(10);
    !current[tail_start..]
        .iter()
        .any(|w| w.ends_with(';') || w.ends_with(':'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config(target_size: usize, overlap: usize) -> ChunkerConfig {
        ChunkerConfig {
            target_size,
            overlap,
            start_id: 1,
        }
    }

    fn sentence_of(n: usize, seed: &str) -> String {
        let mut words: Vec<String> = (0..n - 1).map(|i| format!("{seed}{i}")).collect();
        words.push(format!("{seed}fin."));
        words.join(" ")
    }

    #[test]
    fn positions_are_strictly_increasing_from_the_offset() {
        let text = format!(
            "{} {} {}",
            sentence_of(8, "alpha"),
            sentence_of(8, "beta"),
            sentence_of(8, "gamma")
        );
        let drafts = build_standard(&text, &config(10, 0), 4);
        let positions: Vec<usize> = drafts.iter().map(|d| d.position).collect();
        assert_eq!(positions, [4, 5, 6]);
    }

    #[test]
    fn reconstruction_with_zero_overlap() {
        let text = "Le réservant s'engage à livrer le logement conforme. Le prix de vente est fixé à 245 000 euros TTC. Un acompte de 15 000 euros est exigible à la signature. La livraison est prévue pour décembre.";
        let normalized = normalize(text);
        let drafts = build_standard(text, &config(12, 0), 1);
        assert!(drafts.len() > 1);
        let rebuilt = drafts
            .iter()
            .map(|d| d.content.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(rebuilt, normalized);
    }

    #[test]
    fn no_split_before_a_connector_sentence() {
        let first = sentence_of(12, "mot");
        let text = format!("{first} Cependant la garantie reste acquise au réservataire.");
        let drafts = build_standard(&text, &config(12, 0), 1);
        assert_eq!(drafts.len(), 1, "split landed before a connector");
    }

    #[test]
    fn enumeration_tail_forbids_the_split() {
        let text = "Les lots comprennent : le gros œuvre, la charpente, la couverture. La suite des travaux est décrite ailleurs dans le document.";
        let drafts = build_standard(&text, &config(10, 0), 1);
        assert_eq!(drafts.len(), 1, "split landed mid-enumeration");
    }

    #[test]
    fn overlap_seeds_the_next_chunk() {
        let text = format!("{} {}", sentence_of(10, "alpha"), sentence_of(10, "beta"));
        let drafts = build_standard(&text, &config(10, 3), 1);
        assert_eq!(drafts.len(), 2);
        assert!(drafts[1].content.starts_with("alpha7 alpha8 alphafin."));
        assert_eq!(drafts[1].word_count, 13);
    }

    #[test]
    fn empty_text_builds_no_chunks() {
        assert!(build_standard("", &config(60, 15), 1).is_empty());
    }
}

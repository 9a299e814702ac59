use lexchunk_chunker::{build_standard, normalize, ChunkerConfig};
use proptest::prelude::*;

fn config(target_size: usize, overlap: usize) -> ChunkerConfig {
    ChunkerConfig {
        target_size,
        overlap,
        start_id: 1,
    }
}

/// Random short sentences over a safe alphabet (no pipes, no protected
/// tokens), rendered as `word word word.`.
fn sentences() -> impl Strategy<Value = Vec<Vec<String>>> {
    proptest::collection::vec(
        proptest::collection::vec("[a-zéèà]{2,9}", 1..10),
        1..12,
    )
}

fn render(sentences: &[Vec<String>]) -> String {
    sentences
        .iter()
        .map(|words| format!("{}.", words.join(" ")))
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn oversized_single_sentence_stays_whole() {
    let words: Vec<String> = (0..30).map(|i| format!("mot{i}")).collect();
    let text = format!("{}.", words.join(" "));
    let drafts = build_standard(&text, &config(10, 0), 1);
    assert_eq!(drafts.len(), 1);
    assert_eq!(drafts[0].word_count, 30);
}

proptest! {
    #[test]
    fn normalizing_normalized_text_is_a_no_op(text in "\\PC{0,300}") {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once.clone());
    }

    #[test]
    fn zero_overlap_chunks_partition_the_document(
        sentences in sentences(),
        target in 4usize..40,
    ) {
        let text = render(&sentences);
        let drafts = build_standard(&text, &config(target, 0), 1);
        let rebuilt = drafts
            .iter()
            .map(|d| d.content.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        prop_assert_eq!(rebuilt, normalize(&text));
    }

    #[test]
    fn positions_are_consecutive_from_any_offset(
        sentences in sentences(),
        target in 4usize..40,
        overlap in 0usize..3,
        offset in 1usize..50,
    ) {
        let text = render(&sentences);
        let drafts = build_standard(&text, &config(target, overlap), offset);
        prop_assert!(!drafts.is_empty());
        for (i, draft) in drafts.iter().enumerate() {
            prop_assert_eq!(draft.position, offset + i);
        }
    }

    #[test]
    fn word_counts_match_the_emitted_content(
        sentences in sentences(),
        target in 4usize..40,
        overlap in 0usize..3,
    ) {
        let text = render(&sentences);
        for draft in build_standard(&text, &config(target, overlap), 1) {
            prop_assert_eq!(draft.word_count, draft.content.split_whitespace().count());
        }
    }
}

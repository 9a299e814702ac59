use crate::builder::{build_standard, ChunkDraft};
use crate::config::ChunkerConfig;
use once_cell::sync::Lazy;
use regex::Regex;

/// Data rows grouped under a repeated header per table chunk.
const ROWS_PER_GROUP: usize = 4;

static RULE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\s|:-]+$").expect("invalid rule pattern"));

fn is_table_row(line: &str) -> bool {
    line.contains('|')
}

fn is_rule_line(line: &str) -> bool {
    line.contains('-') && RULE_LINE.is_match(line)
}

/// Split text into alternating table and prose sections, group table rows
/// under their header, and delegate prose to the standard path on a shared
/// position counter.
///
/// Every emitted table chunk repeats the header row, so it stays
/// self-describing when retrieved out of sequence.
#[must_use]
pub fn build_with_tables(text: &str, config: &ChunkerConfig) -> Vec<ChunkDraft> {
    let mut drafts = Vec::new();
    let mut position = config.start_id;
    let mut prose: Vec<&str> = Vec::new();
    let mut table: Vec<&str> = Vec::new();

    for line in text.lines() {
        // A rule line only continues a table already in progress.
        if is_table_row(line) || (!table.is_empty() && is_rule_line(line)) {
            flush_prose(&mut prose, &mut drafts, &mut position, config);
            table.push(line);
        } else {
            flush_table(&mut table, &mut drafts, &mut position);
            prose.push(line);
        }
    }
    flush_prose(&mut prose, &mut drafts, &mut position, config);
    flush_table(&mut table, &mut drafts, &mut position);

    drafts
}

fn flush_prose(
    prose: &mut Vec<&str>,
    drafts: &mut Vec<ChunkDraft>,
    position: &mut usize,
    config: &ChunkerConfig,
) {
    if prose.is_empty() {
        return;
    }
    let section = prose.join("\n");
    prose.clear();

    let section_drafts = build_standard(&section, config, *position);
    if let Some(last) = section_drafts.last() {
        *position = last.position + 1;
    }
    drafts.extend(section_drafts);
}

fn flush_table(table: &mut Vec<&str>, drafts: &mut Vec<ChunkDraft>, position: &mut usize) {
    if table.is_empty() {
        return;
    }
    let lines = std::mem::take(table);

    let mut rows = lines.iter().copied().filter(|l| !is_rule_line(l));
    let Some(header) = rows.next() else {
        return;
    };

    let mut buffer: Vec<&str> = Vec::new();
    for row in rows {
        buffer.push(row);
        if buffer.len() == ROWS_PER_GROUP {
            drafts.push(table_chunk(*position, header, &buffer));
            *position += 1;
            buffer.clear();
        }
    }
    if !buffer.is_empty() {
        drafts.push(table_chunk(*position, header, &buffer));
        *position += 1;
    }
}

fn table_chunk(position: usize, header: &str, rows: &[&str]) -> ChunkDraft {
    let mut lines = vec![header.trim()];
    lines.extend(rows.iter().map(|r| r.trim()));
    let content = lines.join("\n");
    let word_count = content.split_whitespace().count();
    log::debug!("table chunk {position}: {} rows", rows.len());
    ChunkDraft {
        position,
        content,
        word_count,
    }
}

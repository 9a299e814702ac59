use chrono::{Local, NaiveDate};
use sha2::{Digest, Sha256};

/// Synthesize the 17-character document id: a 14-digit `YYYYMMDDHHMMSS`
/// stamp followed by a 3-character uppercase content hash.
///
/// When the extracted date parses, the stamp is that day at 12:00:00, so
/// the id is a pure function of `(text, title, date)` and identical inputs
/// reproduce identical ids. Only an unparseable date falls back to the
/// current instant.
#[must_use]
pub fn generate_document_id(text: &str, title: &str, date: &str) -> String {
    let stamp = date_stamp(date).unwrap_or_else(|| Local::now().format("%Y%m%d%H%M%S").to_string());
    format!("{stamp}{}", content_hash(text, title))
}

fn date_stamp(date: &str) -> Option<String> {
    let parts: Vec<&str> = date.split('/').collect();
    if parts.len() != 3 {
        return None;
    }
    let day: u32 = parts[0].parse().ok()?;
    let month: u32 = parts[1].parse().ok()?;
    let year: i32 = parts[2].parse().ok()?;
    let noon = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(12, 0, 0)?;
    Some(noon.format("%Y%m%d%H%M%S").to_string())
}

fn content_hash(text: &str, title: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hasher.update(title.as_bytes());
    let digest = hasher.finalize();
    format!("{digest:x}")[..3].to_uppercase()
}

use chrono::{Datelike, Local, NaiveDate};
use lexchunk_registry::{bare_date_patterns, contextual_date_patterns};

/// Extract the document's main date as `DD/MM/YYYY`.
///
/// The contextual "signed/dated" patterns are tried in priority order
/// before the first bare date anywhere in the sample. A malformed or
/// absent date falls back to the current date instead of reporting a
/// failure.
#[must_use]
pub fn extract_main_date(sample: &str) -> String {
    for pattern in contextual_date_patterns() {
        if let Some(caps) = pattern.captures(sample) {
            if let Some(normalized) = normalize_date(&caps[1]) {
                return normalized;
            }
        }
    }

    for pattern in bare_date_patterns() {
        if let Some(found) = pattern.find(sample) {
            if let Some(normalized) = normalize_date(found.as_str()) {
                return normalized;
            }
        }
    }

    log::debug!("no parseable date found, falling back to today");
    today()
}

fn today() -> String {
    Local::now().format("%d/%m/%Y").to_string()
}

/// Normalize a French textual or numeric date to `DD/MM/YYYY`.
///
/// Handles month names, `1er`, separators `/ - .` and two-digit years
/// (below 50 widen to 20xx, otherwise 19xx). Returns `None` when the
/// components do not form a real calendar date.
#[must_use]
pub fn normalize_date(raw: &str) -> Option<String> {
    let trimmed = raw.trim();

    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    if parts.len() == 3 {
        let day: u32 = parts[0].trim_end_matches("er").parse().ok()?;
        let month = month_number(parts[1])?;
        let year: i32 = parts[2].parse().ok()?;
        return format_checked(day, month, widen_year(year));
    }

    let parts: Vec<&str> = trimmed.split(['/', '-', '.']).collect();
    if parts.len() == 3 {
        let day: u32 = parts[0].trim().parse().ok()?;
        let month: u32 = parts[1].trim().parse().ok()?;
        let year: i32 = parts[2].trim().parse().ok()?;
        return format_checked(day, month, widen_year(year));
    }

    None
}

fn format_checked(day: u32, month: u32, year: i32) -> Option<String> {
    NaiveDate::from_ymd_opt(year, month, day)
        .map(|date| format!("{:02}/{:02}/{:04}", date.day(), date.month(), date.year()))
}

fn widen_year(year: i32) -> i32 {
    match year {
        0..=49 => 2000 + year,
        50..=99 => 1900 + year,
        _ => year,
    }
}

fn month_number(name: &str) -> Option<u32> {
    let month = match name.to_lowercase().as_str() {
        "janvier" => 1,
        "février" | "fevrier" => 2,
        "mars" => 3,
        "avril" => 4,
        "mai" => 5,
        "juin" => 6,
        "juillet" => 7,
        "août" | "aout" => 8,
        "septembre" => 9,
        "octobre" => 10,
        "novembre" => 11,
        "décembre" | "decembre" => 12,
        _ => return None,
    };
    Some(month)
}

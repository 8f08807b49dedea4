//! Lenient parsers for the loosely-formatted feed columns.
//!
//! RULE: nothing in this module returns an error. Ledger exports arrive
//! with currency symbols, mixed thousand/decimal separators, and stray
//! text; an unreadable amount is worth 0, an unreadable date drops the
//! row at ingestion.

use chrono::NaiveDate;

/// Parse an amount column value.
///
/// Keeps only digits, `,`, `.` and `-`, then decides which separator is
/// decimal:
///   - both present → the right-most of the two is the decimal separator;
///   - comma only   → decimal iff exactly 2 trailing digits follow it,
///     otherwise it is a thousands separator;
///   - more than one `.` → all of them are thousands separators.
///
/// Empty or unparseable input resolves to 0.0.
pub fn parse_amount(raw: &str) -> f64 {
    let s: String = raw
        .trim()
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | '-'))
        .collect();
    if s.is_empty() {
        return 0.0;
    }

    let has_dot = s.contains('.');
    let has_comma = s.contains(',');

    let cleaned = if has_dot && has_comma {
        let last_comma = s.rfind(',').unwrap_or(0);
        let last_dot = s.rfind('.').unwrap_or(0);
        if last_comma > last_dot {
            s.replace('.', "").replace(',', ".")
        } else {
            s.replace(',', "")
        }
    } else if has_comma {
        let trailing = s.rsplit(',').next().map(str::len).unwrap_or(0);
        if trailing == 2 {
            s.replace(',', ".")
        } else {
            s.replace(',', "")
        }
    } else if s.matches('.').count() > 1 {
        s.replace('.', "")
    } else {
        s
    };

    cleaned.parse::<f64>().unwrap_or(0.0)
}

/// Parse a date column value.
///
/// Slash-separated values are day-first (`31/12/2025`); dash-separated
/// values are ISO with an optional time suffix that gets cut at the first
/// space (`2025-12-31 00:00:00`). Anything else is unusable and the
/// caller drops the record.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if s.contains('/') {
        NaiveDate::parse_from_str(s, "%d/%m/%Y").ok()
    } else if s.contains('-') {
        let head = s.split_whitespace().next().unwrap_or(s);
        NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
    } else {
        None
    }
}

/// Normalize a free-text column: trim, Title Case, and map the literal
/// null-words an export round-trip leaves behind to None.
pub fn normalize_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lowered = trimmed.to_lowercase();
    if lowered == "nan" || lowered == "none" || lowered == "null" {
        return None;
    }
    Some(title_case(trimmed))
}

/// Title Case each whitespace-separated word, lowercasing the rest of the
/// word. `"hugo DEL castillo"` → `"Hugo Del Castillo"`.
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

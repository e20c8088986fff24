use serde::Serialize;

use crate::common::split_entries;

/// Sum and count of the valid amounts in a raw amounts list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AggregationResult {
    pub total: f64,
    pub count: usize,
}

/// Parses a raw amounts list into the valid amounts, in input order.
///
/// Entries are comma/newline separated. Each entry is trimmed, any leading
/// run of hyphens is stripped ("-50" reads as 50), and the remainder is
/// parsed as a leading decimal number with trailing characters ignored
/// ("200px" reads as 200). Entries with no leading number are dropped, and
/// so are entries that parse to exactly zero.
///
/// # Arguments
/// * `raw` - The unparsed amounts text, possibly empty
///
/// # Returns
/// The surviving amounts
pub fn parse_amounts(raw: &str) -> Vec<f64> {
    split_entries(raw)
        .into_iter()
        .filter_map(|entry| parse_leading_float(entry.trim_start_matches('-')))
        .filter(|amount| amount.is_finite() && *amount != 0.0)
        .collect()
}

/// Aggregates a raw amounts list into a total and a count of valid entries.
///
/// Total over all inputs: malformed entries are dropped, never reported.
pub fn aggregate(raw: &str) -> AggregationResult {
    let amounts = parse_amounts(raw);
    AggregationResult {
        total: amounts.iter().sum(),
        count: amounts.len(),
    }
}

// Parses the longest numeric prefix of the input: leading whitespace is
// skipped, then an optional sign, decimal digits with an optional fraction,
// and an optional exponent. Anything after the prefix is ignored. Returns
// None when no digits are found.
fn parse_leading_float(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let mut saw_digit = false;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        saw_digit = true;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            saw_digit = true;
        }
    }
    if !saw_digit {
        return None;
    }

    // The exponent is only part of the prefix when it carries digits.
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let mut saw_exp_digit = false;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
            saw_exp_digit = true;
        }
        if saw_exp_digit {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

use anyhow::{Context, Result};

use crate::common::{parse_address, split_entries};

/// Splits a raw recipients list into candidate entries.
///
/// Uses the same delimiter rules as amounts input: commas and/or newlines,
/// delimiter runs collapsed, entries trimmed, empties dropped. No address
/// validation is performed here.
pub fn parse_recipients(raw: &str) -> Vec<String> {
    split_entries(raw).into_iter().map(str::to_owned).collect()
}

/// Parses every entry of a raw recipients list as an Ethereum address.
///
/// # Arguments
/// * `raw` - The unparsed recipients text
///
/// # Returns
/// The 20-byte addresses in input order
///
/// # Errors
/// Returns an error naming the first entry that is not a valid address
pub fn resolve_recipients(raw: &str) -> Result<Vec<[u8; 20]>> {
    split_entries(raw)
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            parse_address(entry).with_context(|| {
                format!("Invalid recipient address at entry {}: '{}'", index + 1, entry)
            })
        })
        .collect()
}

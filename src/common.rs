use anyhow::{Context, Result};
use sha3::{Digest, Keccak256};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Splits raw list input into entries.
///
/// Entries are delimited by commas and/or newlines. Runs of consecutive
/// delimiters collapse to a single boundary, each entry is trimmed of
/// surrounding whitespace, and empty entries are never emitted.
///
/// # Arguments
/// * `raw` - The unparsed list text, possibly empty
///
/// # Returns
/// The trimmed, non-empty entries in input order
pub fn split_entries(raw: &str) -> Vec<&str> {
    raw.split(|c| c == ',' || c == '\n')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect()
}

/// Parses an Ethereum address from a hex string.
///
/// # Arguments
/// * `addr_str` - The address string, with or without "0x" prefix
///
/// # Returns
/// A 20-byte array representing the address
///
/// # Errors
/// Returns an error if the address is not 40 hex characters, contains
/// invalid hex, or is the zero address
pub fn parse_address(addr_str: &str) -> Result<[u8; 20]> {
    let trimmed = addr_str.trim();
    let cleaned = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    if cleaned.len() != 40 {
        anyhow::bail!(
            "Invalid address length: expected 40 hex chars, got {}",
            cleaned.len()
        );
    }
    let mut address = [0u8; 20];
    hex::decode_to_slice(cleaned, &mut address)
        .map_err(|e| anyhow::anyhow!("Invalid hex encoding: {}", e))?;
    if address == [0u8; 20] {
        anyhow::bail!("Zero address not allowed");
    }
    Ok(address)
}

/// Formats a 20-byte Ethereum address with an EIP-55 mixed-case checksum.
///
/// A hex letter is uppercased when the corresponding nibble of the
/// Keccak256 digest of the lowercase hex address is 8 or greater.
///
/// # Arguments
/// * `address` - 20-byte Ethereum address
///
/// # Returns
/// The "0x"-prefixed checksummed address string
pub fn checksum_address(address: &[u8; 20]) -> String {
    let lower = hex::encode(address);
    let digest = Keccak256::digest(lower.as_bytes());

    let mut checksummed = String::with_capacity(42);
    checksummed.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let nibble = if i % 2 == 0 {
            digest[i / 2] >> 4
        } else {
            digest[i / 2] & 0x0f
        };
        if c.is_ascii_alphabetic() && nibble >= 8 {
            checksummed.push(c.to_ascii_uppercase());
        } else {
            checksummed.push(c);
        }
    }
    checksummed
}

/// Writes a file atomically by writing to a temp sibling and renaming it
/// into place.
///
/// # Errors
/// Returns an error if the temp file cannot be created, written, or renamed
pub fn write_file_atomic(path: &Path, contents: &str) -> Result<()> {
    let temp_path = path.with_extension("tmp");
    let mut file = File::create(&temp_path).context("Failed to create temp file")?;
    file.write_all(contents.as_bytes())
        .context("Failed to write to temp file")?;
    file.flush().context("Failed to flush temp file")?;
    std::fs::rename(&temp_path, path).context("Failed to move temp file into place")?;
    Ok(())
}

/// Reads list input from a file, or from stdin when the path is "-".
pub fn read_text_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_entries_commas_and_newlines() {
        let entries = split_entries("a,b\nc");
        assert_eq!(entries, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_entries_collapses_delimiter_runs() {
        let entries = split_entries("a,,b,\n\nc,\n");
        assert_eq!(entries, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_entries_trims_whitespace() {
        let entries = split_entries("  a  ,  b  ");
        assert_eq!(entries, vec!["a", "b"]);
    }

    #[test]
    fn test_split_entries_empty_input() {
        assert!(split_entries("").is_empty());
        assert!(split_entries(",\n,\n").is_empty());
    }

    #[test]
    fn test_parse_address_with_prefix() {
        let addr = "0x1234567890abcdef1234567890abcdef12345678";
        let result = parse_address(addr).unwrap();
        assert_eq!(result.len(), 20);
    }

    #[test]
    fn test_parse_address_without_prefix() {
        let addr = "1234567890abcdef1234567890abcdef12345678";
        let result = parse_address(addr).unwrap();
        assert_eq!(result.len(), 20);
    }

    #[test]
    fn test_parse_address_invalid_length() {
        let addr = "0x1234";
        let result = parse_address(addr);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_address_invalid_hex() {
        let addr = "0xghijklmnopqrstuvwxyz1234567890abcdef";
        let result = parse_address(addr);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_address_zero_address() {
        let addr = "0x0000000000000000000000000000000000000000";
        let result = parse_address(addr);
        assert!(result.is_err());
    }

    #[test]
    fn test_checksum_address_known_vectors() {
        // Test vectors from EIP-55
        let vectors = [
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
            "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
            "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
        ];
        for expected in vectors {
            let address = parse_address(&expected.to_lowercase()).unwrap();
            assert_eq!(checksum_address(&address), expected);
        }
    }

    #[test]
    fn test_checksum_address_round_trips() {
        let address = parse_address("0x1234567890abcdef1234567890abcdef12345678").unwrap();
        let checksummed = checksum_address(&address);
        assert_eq!(parse_address(&checksummed).unwrap(), address);
    }

    #[test]
    fn test_write_file_atomic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_file_atomic(&path, "{}").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_read_text_input_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("amounts.txt");
        std::fs::write(&path, "100,200").unwrap();
        assert_eq!(read_text_input(&path).unwrap(), "100,200");
    }

    #[test]
    fn test_read_text_input_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        assert!(read_text_input(&path).is_err());
    }
}

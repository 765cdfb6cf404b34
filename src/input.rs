//! Reference-string input.
//!
//! Raw input is free-form text: integers separated by any whitespace,
//! spread over any number of lines. Parsing happens here, before anything
//! reaches the simulator.

use std::fs;
use std::path::Path;

use log::debug;

use crate::common::{Error, PageId, Result};

/// Parse whitespace-separated integers into a reference sequence.
///
/// Blank input gives an empty sequence. The first token that is not an
/// integer fails the whole parse with its 1-based line and column.
///
/// # Example
/// ```
/// use framesim::input::parse_references;
/// use framesim::pages;
///
/// assert_eq!(parse_references("7 0 1\n2 0").unwrap(), pages(&[7, 0, 1, 2, 0]));
/// assert!(parse_references("7 zero").is_err());
/// ```
pub fn parse_references(text: &str) -> Result<Vec<PageId>> {
    let mut references = Vec::new();

    for (line_idx, line) in text.lines().enumerate() {
        let mut rest = line;
        let mut offset = 0;

        while let Some(start) = rest.find(|c: char| !c.is_whitespace()) {
            let token_and_tail = &rest[start..];
            let len = token_and_tail
                .find(char::is_whitespace)
                .unwrap_or(token_and_tail.len());
            let token = &token_and_tail[..len];

            let id = token.parse::<i64>().map_err(|_| Error::InvalidReference {
                line: line_idx + 1,
                column: line[..offset + start].chars().count() + 1,
                token: token.to_string(),
            })?;
            references.push(PageId(id));

            offset += start + len;
            rest = &token_and_tail[len..];
        }
    }

    Ok(references)
}

/// Read and parse a line-oriented reference file.
pub fn read_references(path: impl AsRef<Path>) -> Result<Vec<PageId>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let references = parse_references(&text)?;
    debug!("read {} references from {}", references.len(), path.display());
    Ok(references)
}

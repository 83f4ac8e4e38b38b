//! Mapping pair-list parser.
//!
//! Keyboard mapping descriptions (m17n `.mim` files and extracts of them)
//! carry their rules as parenthesized pairs: `("hq" "கா")` for literal
//! output, `("h" ?க)` for single-character output. This module flattens
//! such text into the `(key_sequence, output)` pairs that
//! [`crate::layout::LayoutTable::load`] consumes. Everything outside the
//! pair syntax (comments, state machinery) is ignored.

use std::path::Path;

use anyhow::Context;
use once_cell::sync::Lazy;
use regex::Regex;

static PAIR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\("([^"]+)"\s+(\?[^)\s]+|"[^"]*")\)"#).expect("valid pair pattern"));

/// Extract `(key_sequence, output)` pairs from mapping-description text.
///
/// Text with no pairs yields an empty list, which loads into an
/// empty-but-valid table.
pub fn parse_pairs(text: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for caps in PAIR_PATTERN.captures_iter(text) {
        let keys = caps[1].to_string();
        let raw = &caps[2];

        let output = if let Some(stripped) = raw.strip_prefix('?') {
            stripped.to_string()
        } else {
            raw.trim_matches('"')
                .replace("\\\"", "\"")
                .replace("\\\\", "\\")
        };

        if output.is_empty() {
            continue;
        }
        pairs.push((keys, output));
    }
    pairs
}

/// Read a mapping file and extract its pairs.
pub fn load_pairs<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<(String, String)>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading mapping file {}", path.display()))?;
    Ok(parse_pairs(&text))
}

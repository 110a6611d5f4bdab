//! Markdown documents with a YAML frontmatter block.
//!
//! Bodies are handled as bytes: agent sources are wrapped verbatim and are
//! not required to be valid UTF-8.

use crate::error::Result;
use serde::Serialize;

const FENCE: &str = "---";

/// `meta` serialized as a `---` fenced YAML block, followed by a blank line
pub fn frontmatter<T: Serialize>(meta: &T) -> Result<String> {
    let yaml = serde_yaml::to_string(meta)?;
    Ok(format!("{FENCE}\n{yaml}{FENCE}\n\n"))
}

/// Prefix `body` with `meta` serialized as frontmatter.
pub fn with_frontmatter<T: Serialize>(meta: &T, body: &[u8]) -> Result<Vec<u8>> {
    let mut doc = frontmatter(meta)?.into_bytes();
    doc.extend_from_slice(body);
    Ok(doc)
}

/// Append `footer` after `body`, separated by a horizontal rule.
///
/// The body is kept verbatim; only a missing trailing newline is added.
pub fn with_footer(body: &[u8], footer: &str) -> Vec<u8> {
    let mut doc = Vec::with_capacity(body.len() + footer.len() + 8);
    doc.extend_from_slice(body);
    if !body.is_empty() && !body.ends_with(b"\n") {
        doc.push(b'\n');
    }
    doc.extend_from_slice(b"\n---\n\n");
    doc.extend_from_slice(footer.as_bytes());
    if !footer.ends_with('\n') {
        doc.push(b'\n');
    }
    doc
}

/// Split a UTF-8 document into its parsed frontmatter and the remaining body.
///
/// Returns `Ok(None)` when the document does not open with a fence.
#[cfg(test)]
pub(crate) fn parse_frontmatter<T: serde::de::DeserializeOwned>(
    content: &str,
) -> Result<Option<(T, &str)>> {
    let Some(rest) = content.strip_prefix("---\n") else {
        return Ok(None);
    };
    let Some(end) = rest.find("\n---\n") else {
        return Ok(None);
    };

    let meta = serde_yaml::from_str(&rest[..end + 1])?;
    let body = rest[end + "\n---\n".len()..].trim_start_matches('\n');
    Ok(Some((meta, body)))
}

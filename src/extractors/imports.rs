//! Intra-project import extraction
//!
//! Recognizes single-line `use crate::...` statements by plain text matching
//! and reduces each referenced path to the sub-module it points at. The path
//! is always the second whitespace-delimited word of the line, so multi-line
//! imports and `pub use` / `pub(crate) use` lines yield degenerate targets.

use crate::naming::{NAMESPACE_SEP, normalize_cmd_segment};

/// Marker identifying an import of the project's own modules.
pub const IMPORT_MARKER: &str = "use crate::";

/// Most path segments kept from an import, counting the `crate` root.
const MAX_SEGMENTS: usize = 3;

/// Extract the import target from a single source line.
///
/// Returns `None` for lines without the marker or without a path token.
/// The returned target may be empty when the path has no segment after the
/// root.
pub fn parse_import_line(line: &str) -> Option<String> {
    if !line.contains(IMPORT_MARKER) {
        return None;
    }
    let token = line.split_whitespace().nth(1)?;
    Some(import_target(token))
}

/// Reduce an import path token to its sub-module target.
///
/// A final segment that looks like an item (`Rule;`) or a group (`{a,`) is
/// dropped, at most three segments are kept, and the root is removed.
///
/// # Examples
///
/// ```
/// use modgraph::extractors::imports::import_target;
///
/// assert_eq!(import_target("crate::catalog::pricing::Rule;"), "catalog::pricing");
/// assert_eq!(import_target("crate::utils::date::{serializer};"), "utils::date");
/// assert_eq!(import_target("crate::patrons::Patron;"), "patrons");
/// ```
pub fn import_target(token: &str) -> String {
    let parts: Vec<&str> = token.split(NAMESPACE_SEP).collect();

    let mut keep = parts.len();
    if parts.last().is_some_and(|last| names_item(last)) {
        keep -= 1;
    }
    let keep = keep.min(MAX_SEGMENTS);

    parts
        .iter()
        .take(keep)
        .skip(1)
        .map(|segment| normalize_cmd_segment(segment))
        .collect::<Vec<_>>()
        .join(NAMESPACE_SEP)
}

/// Whether a segment names an item or item group rather than a module.
fn names_item(segment: &str) -> bool {
    segment.contains('{') || segment.chars().next().is_some_and(char::is_uppercase)
}

/// Extract every import target from source text, in line order.
pub fn extract_import_targets(content: &str) -> Vec<String> {
    content.lines().filter_map(parse_import_line).collect()
}

//! Module name canonicalization
//!
//! Turns file paths into `::`-separated module names and collapses command
//! modules (`add_book_cmd`, `hold_book_cmd`, ...) into a single `*_cmd` node.

use regex::Regex;
use std::path::{Component, Path};
use std::sync::LazyLock;

/// Separator between module path segments.
pub const NAMESPACE_SEP: &str = "::";

/// Placeholder standing in for any command module.
pub const CMD_WILDCARD: &str = "*_cmd";

const CMD_SUFFIX: &str = "_cmd";

static CMD_MODULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z_]+_cmd").expect("CMD_MODULE regex is invalid"));

/// Derive the module name of a source file from its path relative to the
/// scan root.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use modgraph::naming::module_name;
///
/// assert_eq!(module_name(Path::new("src/catalog/domain.rs"), "rs"), "src::catalog::domain");
/// assert_eq!(
///     module_name(Path::new("src/hold/command/hold_book_cmd.rs"), "rs"),
///     "src::hold::command::*_cmd"
/// );
/// ```
pub fn module_name(relative: &Path, extension: &str) -> String {
    let joined = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(NAMESPACE_SEP);

    let suffix = format!(".{}", extension);
    let name = joined.strip_suffix(&suffix).unwrap_or(&joined);
    normalize_cmd_module(name)
}

/// Replace every command-module identifier in a module name with the wildcard.
pub fn normalize_cmd_module(name: &str) -> String {
    if !name.contains(CMD_SUFFIX) {
        return name.to_string();
    }
    CMD_MODULE.replace_all(name, CMD_WILDCARD).into_owned()
}

/// Normalize a single import path segment: any segment mentioning `_cmd`
/// becomes the wildcard.
pub fn normalize_cmd_segment(segment: &str) -> &str {
    if segment.contains(CMD_SUFFIX) {
        CMD_WILDCARD
    } else {
        segment
    }
}

//! Source file enumeration

use std::path::{Component, Path, PathBuf};

use glob::{MatchOptions, Pattern};

use crate::error::Result;

/// List every `*.<extension>` file below `root`, recursively.
///
/// Results come back in the glob crate's order, which sorts the entries of
/// each directory, so repeated runs see files identically. Hidden files and
/// anything under a hidden directory are skipped, as are directories whose
/// name happens to end in the extension.
pub fn source_files(root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let pattern = format!(
        "{}/**/*.{}",
        Pattern::escape(&root.to_string_lossy()),
        Pattern::escape(extension)
    );
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };

    let mut files = Vec::new();
    for entry in glob::glob_with(&pattern, options)? {
        let path = entry?;
        if is_hidden(relative_path(root, &path)) || !path.is_file() {
            continue;
        }
        files.push(path);
    }
    Ok(files)
}

/// Path of `path` relative to the scan root, falling back to `path` itself.
pub fn relative_path<'a>(root: &Path, path: &'a Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}

fn is_hidden(relative: &Path) -> bool {
    relative.components().any(|c| match c {
        Component::Normal(part) => part.to_string_lossy().starts_with('.'),
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    fn relative_names(root: &Path, files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| relative_path(root, p).to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_finds_nested_sources() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "src/hold/domain.rs");
        touch(dir.path(), "src/catalog/controller.rs");
        touch(dir.path(), "build.rs");
        touch(dir.path(), "README.md");

        let files = source_files(dir.path(), "rs").unwrap();
        let mut names = relative_names(dir.path(), &files);
        names.sort();
        assert_eq!(
            names,
            ["build.rs", "src/catalog/controller.rs", "src/hold/domain.rs"]
        );
    }

    #[test]
    fn test_skips_hidden_entries() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "src/lib.rs");
        touch(dir.path(), ".cache/generated.rs");
        touch(dir.path(), "src/.scratch.rs");

        let files = source_files(dir.path(), "rs").unwrap();
        assert_eq!(relative_names(dir.path(), &files), ["src/lib.rs"]);
    }

    #[test]
    fn test_skips_directories_named_like_sources() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "weird.rs/inner.rs");

        let files = source_files(dir.path(), "rs").unwrap();
        assert_eq!(relative_names(dir.path(), &files), ["weird.rs/inner.rs"]);
    }

    #[test]
    fn test_custom_extension() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a/one.rs");
        touch(dir.path(), "a/two.rsx");

        let files = source_files(dir.path(), "rsx").unwrap();
        assert_eq!(relative_names(dir.path(), &files), ["a/two.rsx"]);
    }

    #[test]
    fn test_empty_tree() {
        let dir = TempDir::new().unwrap();
        assert!(source_files(dir.path(), "rs").unwrap().is_empty());
    }

    #[test]
    fn test_relative_path_outside_root_falls_back() {
        let path = Path::new("elsewhere/mod.rs");
        assert_eq!(relative_path(Path::new("root"), path), path);
    }
}

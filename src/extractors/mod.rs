//! Dependency extraction pass
//!
//! Walks the scan root, names each source file as a module, and records the
//! intra-project imports found in it. The result is a [`DependencyMap`] that
//! later passes only read.

pub mod imports;
pub mod walker;

use std::fs;
use std::path::Path;

use tracing::{debug, info, trace};

use crate::config::ScanConfig;
use crate::deps::DependencyMap;
use crate::error::{Error, Result};
use crate::naming::module_name;

use self::imports::parse_import_line;
use self::walker::{relative_path, source_files};

/// Build the dependency map for every source file under the configured root.
///
/// Any unreadable or non-UTF-8 file aborts the whole extraction.
pub fn extract_dependencies(config: &ScanConfig) -> Result<DependencyMap> {
    let mut deps = DependencyMap::new();
    let files = source_files(&config.root, &config.extension)?;

    for path in &files {
        let module = module_name(relative_path(&config.root, path), &config.extension);
        debug!(file = %path.display(), %module, "scanning");
        record_file_imports(path, &module, &mut deps)?;
    }

    info!(
        files = files.len(),
        modules = deps.len(),
        imports = deps.edge_count(),
        "extracted dependencies"
    );
    Ok(deps)
}

fn record_file_imports(path: &Path, module: &str, deps: &mut DependencyMap) -> Result<()> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

    for line in content.lines() {
        match parse_import_line(line) {
            Some(target) => {
                debug!(%module, %target, "import");
                deps.record(module, target);
            }
            None => trace!(%module, line, "skipped"),
        }
    }
    Ok(())
}

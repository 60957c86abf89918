//! In-memory dependency map shared by the extraction and emission passes

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// Mapping from module name to the sub-modules it imports.
///
/// Keys keep first-insertion order and each target list keeps the order the
/// imports were seen in. Targets are not deduplicated here; the graph
/// emitter does that per output line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyMap {
    modules: Vec<(String, Vec<String>)>,
    index: HashMap<String, usize>,
}

impl DependencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a target to a module's list, registering the module on first use.
    pub fn record(&mut self, module: &str, target: impl Into<String>) {
        let slot = match self.index.get(module) {
            Some(&slot) => slot,
            None => {
                self.modules.push((module.to_string(), Vec::new()));
                self.index.insert(module.to_string(), self.modules.len() - 1);
                self.modules.len() - 1
            }
        };
        self.modules[slot].1.push(target.into());
    }

    /// Targets recorded for a module, in import order.
    pub fn targets(&self, module: &str) -> Option<&[String]> {
        self.index
            .get(module)
            .map(|&slot| self.modules[slot].1.as_slice())
    }

    pub fn contains(&self, module: &str) -> bool {
        self.index.contains_key(module)
    }

    /// Iterate modules in insertion order.
    pub fn modules(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.modules
            .iter()
            .map(|(name, targets)| (name.as_str(), targets.as_slice()))
    }

    /// Iterate every (source, target) pair, by module then import order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.modules().flat_map(|(source, targets)| {
            targets.iter().map(move |target| (source, target.as_str()))
        })
    }

    /// Number of modules with at least one recorded import.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Total number of recorded targets, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.modules.iter().map(|(_, targets)| targets.len()).sum()
    }
}

impl Serialize for DependencyMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.modules.len()))?;
        for (name, targets) in &self.modules {
            map.serialize_entry(name, targets)?;
        }
        map.end()
    }
}

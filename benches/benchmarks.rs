//! Performance benchmarks for modgraph

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use modgraph::extractors::imports::extract_import_targets;
use modgraph::test_utils::TestTree;
use modgraph::{DependencyMap, extract_dependencies, render_dot};

// Sample module with a typical mix of internal and external imports
const RUST_SOURCE: &str = r#"use std::sync::Arc;

use async_trait::async_trait;
use crate::checkout::domain::model::CheckoutEntity;
use crate::checkout::repository::CheckoutRepository;
use crate::core::library::{CheckoutStatus, LibraryError, LibraryResult, PaginatedResult};
use crate::core::repository::Repository;
use crate::utils::ddb::{add_filter_expr, from_ddb, parse_item};

pub struct DDBCheckoutRepository {
    client: Arc<()>,
}

#[cfg(test)]
mod tests {
    use crate::checkout::domain::model::CheckoutEntity;
    use crate::core::library::CheckoutStatus;
    use crate::utils::date::DATE_FMT;
}
"#;

const SUBSYSTEMS: &[&str] = &["catalog", "patrons", "checkout", "hold"];

fn create_tree_with_files(file_count: usize) -> TestTree {
    let tree = TestTree::new();
    for i in 0..file_count {
        let subsystem = SUBSYSTEMS[i % SUBSYSTEMS.len()];
        tree.add_file(&format!("src/{}/module_{}.rs", subsystem, i), RUST_SOURCE);
    }
    tree
}

fn synthetic_map(modules: usize) -> DependencyMap {
    let mut deps = DependencyMap::new();
    for i in 0..modules {
        let subsystem = SUBSYSTEMS[i % SUBSYSTEMS.len()];
        let module = format!("src::{}::module_{}", subsystem, i);
        for target in extract_import_targets(RUST_SOURCE) {
            deps.record(&module, target);
        }
    }
    deps
}

fn bench_import_parsing(c: &mut Criterion) {
    c.bench_function("import_parsing", |b| {
        b.iter(|| extract_import_targets(black_box(RUST_SOURCE)))
    });
}

fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");

    let small_tree = create_tree_with_files(10);
    let small_config = small_tree.scan_config();
    group.bench_function("small_tree_10_files", |b| {
        b.iter(|| extract_dependencies(black_box(&small_config)))
    });

    let large_tree = create_tree_with_files(500);
    let large_config = large_tree.scan_config();
    group.bench_function("large_tree_500_files", |b| {
        b.iter(|| extract_dependencies(black_box(&large_config)))
    });

    group.finish();
}

fn bench_render_dot(c: &mut Criterion) {
    let deps = synthetic_map(1000);
    let mut group = c.benchmark_group("render_dot");

    for label in ["checkout", "hold"] {
        group.bench_function(label, |b| {
            b.iter(|| {
                let mut out = Vec::new();
                render_dot(black_box(&deps), label, &mut out)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_import_parsing,
    bench_extraction,
    bench_render_dot,
);
criterion_main!(benches);

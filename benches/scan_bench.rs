use criterion::{Criterion, criterion_group, criterion_main};
use std::fs;
use std::hint::black_box;
use std::path::Path;
use sweep::config::Config;
use sweep::scanner::{PatternSet, ScanRequest, scan};
use tempfile::tempdir;

/// Lay out `packages` Python packages, each with sources, bytecode caches
/// and a build directory.
fn create_project(root: &Path, packages: usize) {
    for i in 0..packages {
        let pkg = root.join(format!("pkg_{i}"));
        fs::create_dir_all(pkg.join("__pycache__")).unwrap();
        fs::create_dir_all(pkg.join("build/lib")).unwrap();
        for j in 0..10 {
            fs::write(pkg.join(format!("mod_{j}.py")), "pass\n").unwrap();
            fs::write(pkg.join(format!("__pycache__/mod_{j}.pyc")), "x").unwrap();
            fs::write(pkg.join(format!("build/lib/mod_{j}.py")), "pass\n").unwrap();
        }
    }
}

fn benchmark_scan(c: &mut Criterion) {
    let dir = tempdir().unwrap();
    create_project(dir.path(), 50);

    let mut group = c.benchmark_group("scan");

    let clean = Config::default().clean_request(dir.path()).unwrap();
    group.bench_function("clean_profile", |b| b.iter(|| scan(black_box(&clean))));

    let all_files = ScanRequest::new(dir.path()).include_files(PatternSet::new([".*"]).unwrap());
    group.bench_function("all_files", |b| b.iter(|| scan(black_box(&all_files))));

    group.finish();
}

fn benchmark_matching(c: &mut Criterion) {
    let set = PatternSet::new([
        r"(.*/)?\.eggs$",
        r".*\.egg-info$",
        r"(.*/)?build$",
        r"(.*/)?__pycache__$",
    ])
    .unwrap();

    c.bench_function("pattern_set_is_match", |b| {
        b.iter(|| set.is_match(black_box("src\\pkg\\sub\\__pycache__")))
    });
}

criterion_group!(benches, benchmark_scan, benchmark_matching);
criterion_main!(benches);

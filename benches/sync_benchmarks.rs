use checksync::checksum::{hash_file, sync, SyncConfig};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::fs;
use tempfile::TempDir;

// Helper to create a root directory with `count` data files of `size` bytes.
fn setup_root(count: usize, size: usize) -> TempDir {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    fs::create_dir(&data).unwrap();
    for i in 0..count {
        let content: Vec<u8> = (0..size).map(|b| ((b + i) % 251) as u8).collect();
        fs::write(data.join(format!("file_{i}.txt")), content).unwrap();
    }
    dir
}

fn bench_hash_file(c: &mut Criterion) {
    let root = setup_root(1, 1024 * 1024);
    let path = root.path().join("data").join("file_0.txt");

    c.bench_function("hash_file_1mb", |b| {
        b.iter(|| {
            let digest = hash_file(black_box(&path)).unwrap();
            black_box(digest);
        })
    });
}

fn bench_sync_unchanged(c: &mut Criterion) {
    let root = setup_root(100, 4096);
    let config = SyncConfig::new(root.path().to_path_buf());
    // Prime the persisted table so the benchmark measures the no-op path.
    sync(&config).unwrap();

    c.bench_function("sync_100_files_unchanged", |b| {
        b.iter(|| {
            let outcome = sync(black_box(&config)).unwrap();
            black_box(outcome);
        })
    });
}

criterion_group!(benches, bench_hash_file, bench_sync_unchanged);
criterion_main!(benches);

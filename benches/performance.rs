//! Performance benchmarks for the fridge inventory.

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fridgekeeper::{FoodRecord, Inventory, Store, StoreConfig};
use tempfile::TempDir;

fn create_store(dir: &TempDir) -> Store {
    Store::new(StoreConfig::new(dir.path().join("fridge.csv")))
}

fn records(count: usize) -> Vec<FoodRecord> {
    (0..count)
        .map(|i| {
            FoodRecord::new(
                format!("item-{}", i),
                "2024-01-01",
                format!("2024-{:02}-{:02}", 1 + i % 12, 1 + i % 28),
            )
        })
        .collect()
}

/// Full-table rewrite cost as the inventory grows
fn bench_save(c: &mut Criterion) {
    let mut group = c.benchmark_group("save");

    for count in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("records", count), &count, |b, &count| {
            let dir = TempDir::new().unwrap();
            let store = create_store(&dir);
            let records = records(count);

            b.iter(|| store.save(black_box(&records)).unwrap());
        });
    }

    group.finish();
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");

    for count in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("records", count), &count, |b, &count| {
            let dir = TempDir::new().unwrap();
            let store = create_store(&dir);
            store.save(&records(count)).unwrap();

            b.iter(|| black_box(store.load().unwrap()));
        });
    }

    group.finish();
}

/// Reload + classify, the path behind the expiry menu option
fn bench_check_expiry(c: &mut Criterion) {
    let dir = TempDir::new().unwrap();
    let store = create_store(&dir);
    store.save(&records(1000)).unwrap();
    let inventory = Inventory::new(store);
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

    c.bench_function("check_expiry_1000", |b| {
        b.iter(|| black_box(inventory.check_expiry(today, 3).unwrap()));
    });
}

criterion_group!(benches, bench_save, bench_load, bench_check_expiry);
criterion_main!(benches);

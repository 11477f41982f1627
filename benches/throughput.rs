use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::time::Duration;
use storehouse::UnitsStore;

const NUM_UNITS: u64 = 10_000;
const OPS_PER_UNIT: u64 = 100;

fn churn(store: &mut UnitsStore) {
    let amount = dec!(12.5);
    for round in 0..OPS_PER_UNIT {
        for id in 1..=NUM_UNITS {
            // Ignoring the result; every id exists
            if round % 2 == 0 {
                let _ = store.deposit(id, amount);
            } else {
                let _ = store.withdraw(id, amount);
            }
        }
    }
}

fn process_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("throughput");

    group.throughput(Throughput::Elements(NUM_UNITS * OPS_PER_UNIT));
    group.measurement_time(Duration::from_secs(20));
    group.sample_size(50);

    group.bench_function("deposit_withdraw_10K_units_1M_operations", |b| {
        b.iter_batched_ref(
            || {
                let mut store = UnitsStore::new();
                for _ in 0..NUM_UNITS {
                    store.create(dec!(100), Decimal::ZERO);
                }
                store
            },
            churn,
            criterion::BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group!(benches, process_operations);
criterion_main!(benches);

// benches/batch_bench.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use phonerules::PhoneValidator;

use phonenumber::country::Id;

/// A mixed batch as it would arrive from a pasted list: valid numbers,
/// formatting noise, a duplicated country code, a freephone number and
/// a line that is not a number at all.
fn setup_batch() -> Vec<&'static str> {
    vec![
        "61872252566",
        "+44 20 8765 4321",
        "+1 (202) 555-1234",
        "+4949123456789",
        "+1 800 253 0000",
        "+91 98765 43210",
        "+61 1800 123 456",
        "not a number",
        "",
        "+33 1 42 68 53 00",
    ]
}

fn batch_benchmark(c: &mut Criterion) {
    let _ = env_logger::try_init();
    let batch = setup_batch();
    let validator = PhoneValidator::default();

    let mut group = c.benchmark_group("Batch validation");

    group.bench_function("phonerules: validate_all()", |b| {
        b.iter(|| validator.validate_all(black_box(&batch)))
    });

    // baseline: parsing alone, without the rule layer
    group.bench_function("phonenumber: parse()", |b| {
        b.iter(|| {
            for number in &batch {
                let _ = phonenumber::parse(black_box(None::<Id>), black_box(number));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, batch_benchmark);
criterion_main!(benches);

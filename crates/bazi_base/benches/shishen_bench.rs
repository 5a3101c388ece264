use bazi_base::{FourPillars, Tiangan, aggregate, classify, classify_stem};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn sample_chart() -> FourPillars {
    FourPillars::from_symbols(("甲", "子"), ("丙", "寅"), ("甲", "午"), Some(("丁", "卯")))
        .unwrap()
}

fn classify_bench(c: &mut Criterion) {
    let chart = sample_chart();

    let mut group = c.benchmark_group("shishen");
    group.bench_function("classify_stem", |b| {
        b.iter(|| classify_stem(black_box(Tiangan::Jia), black_box(Tiangan::Gui)))
    });
    group.bench_function("classify_full_chart", |b| {
        b.iter(|| classify(black_box(&chart), Tiangan::Jia))
    });
    group.bench_function("classify_and_aggregate", |b| {
        b.iter(|| {
            let facts = classify(black_box(&chart), Tiangan::Jia);
            aggregate(&facts, &chart.present())
        })
    });
    group.finish();
}

criterion_group!(benches, classify_bench);
criterion_main!(benches);

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use stylepaste::{convert, is_css_like, ConversionConfig, Dialect};

mod fixtures;
use fixtures::FIXTURES;

fn convert_benchmark(c: &mut Criterion) {
    let config = ConversionConfig::default();

    for (name, css) in FIXTURES {
        for dialect in [Dialect::Plain, Dialect::Shorthand] {
            c.bench_with_input(
                BenchmarkId::new(format!("convert_{}", dialect.as_ref()), name),
                &css,
                |b, css| b.iter(|| convert(css, dialect, &config)),
            );
        }
    }
}

fn likeness_benchmark(c: &mut Criterion) {
    for (name, css) in FIXTURES {
        c.bench_with_input(BenchmarkId::new("is_css_like", name), &css, |b, css| {
            b.iter(|| is_css_like(css))
        });
    }
}

criterion_group!(benches, convert_benchmark, likeness_benchmark);
criterion_main!(benches);

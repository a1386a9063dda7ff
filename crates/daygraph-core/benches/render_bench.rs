// File: crates/daygraph-core/benches/render_bench.rs
// Summary: Criterion benchmark for SVG rendering over multi-year datasets.

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use daygraph_core::{Chart, Dataset, Record, RenderOptions};

fn build_chart(days: usize) -> Chart {
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).expect("fixture date");
    let mut records = Vec::with_capacity(days);
    for i in 0..days {
        let article = (i % 5) as u64;
        let text = (i % 3) as u64;
        let code = (i % 7) as u64;
        records.push(Record {
            date: start + Duration::days(i as i64),
            article,
            text,
            code,
            total: article + text + code,
            todo: None,
        });
    }
    Chart::new(Dataset::new(records).expect("generated records are ordered")).with_title("Line Chart")
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_svg");
    for &days in &[365usize, 3650usize] {
        group.bench_function(format!("days_{days}"), |b| {
            let chart = build_chart(days);
            let opts = RenderOptions::default();
            b.iter(|| {
                let svg = chart.render_svg(&opts);
                black_box(svg);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);

// benches/parse.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use photocat::catalogue::Table;
use photocat::config::options::Category;
use photocat::core::label::build_label;
use photocat::core::value::parse_numeric;

fn sample_cells() -> Vec<String> {
    [
        "30", "50+", "98.7%", "n/a", "", "abc", "12.25", "none", " 42 ", "95%+",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn sample_table(rows: usize) -> Table {
    let columns = vec![
        "Product Brand".to_string(),
        "Product Name".to_string(),
        "Volume (ml)".to_string(),
    ];
    let rows = (0..rows)
        .map(|i| vec![format!("Brand {i}"), format!("Product {i}"), "50".to_string()])
        .collect();
    Table::from_raw(columns, rows)
}

fn bench_parse(c: &mut Criterion) {
    let cells = sample_cells();

    c.bench_function("parse_numeric", |b| {
        b.iter(|| {
            let hits = cells
                .iter()
                .filter(|s| parse_numeric(black_box(s)).is_some())
                .count();
            black_box(hits)
        })
    });
}

fn bench_labels(c: &mut Criterion) {
    let table = sample_table(200);

    c.bench_function("build_label_200_rows", |b| {
        b.iter(|| {
            let n: usize = table
                .row_views()
                .map(|r| build_label(r, Category::Sunscreens).len())
                .sum();
            black_box(n)
        })
    });
}

criterion_group!(benches, bench_parse, bench_labels);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gradecalc_core::records::{RecordTable, CSV_HEADER};

fn generate_csv(rows: usize) -> String {
    let mut s = String::from(CSV_HEADER);
    s.push('\n');
    for i in 0..rows {
        s.push_str(&format!(
            "{:09},First{i},Last{i},{},{},{},{},{}\n",
            i,
            i % 101,
            (i * 7) % 101,
            (i * 13) % 101,
            (i * 3) % 101,
            (i * 11) % 101,
        ));
        if i % 50 == 0 {
            s.push_str("broken,row\n");
        }
    }
    s
}

fn bench_csv_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("csv_parsing");

    for rows in [20, 1_000, 10_000] {
        let csv = generate_csv(rows);
        group.bench_function(format!("{rows}_rows"), |b| {
            b.iter(|| RecordTable::parse_csv_str(black_box(&csv)))
        });
    }

    group.finish();
}

fn bench_summary(c: &mut Criterion) {
    let (table, _) = RecordTable::parse_csv_str(&generate_csv(1_000));
    c.bench_function("roster_summary_1000", |b| b.iter(|| black_box(&table).summary()));
}

criterion_group!(benches, bench_csv_parsing, bench_summary);
criterion_main!(benches);

use collatab::output::{AgreementSort, ExportFormat, HorizontalOptions, export, horizontal, vertical};
use collatab::table::{Html, Terminal};
use collatab::{AlignmentTable, Column, Token, Witness};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

/// Builds a synthetic collation where witness `w` deviates from the first
/// witness at every column divisible by `w + 1`, with a gap every 7th column.
fn synthetic_collation(witness_count: usize, column_count: usize) -> (AlignmentTable, Vec<Witness>) {
    let witnesses: Vec<Witness> = (0..witness_count)
        .map(|w| Witness::new(format!("W{}", w)))
        .collect();

    let columns = (0..column_count)
        .map(|c| {
            let mut column = Column::new(false);
            for (w, witness) in witnesses.iter().enumerate() {
                if w > 0 && c % 7 == w % 7 {
                    continue;
                }
                let text = if w > 0 && c % (w + 1) == 0 {
                    format!("variant reading {} ", c)
                } else {
                    format!("reading {} ", c)
                };
                column = column.with_reading(&witness.sigil, vec![Token::new(text)]);
            }
            column.variant = c % 2 == 0;
            column
        })
        .collect();

    let table = AlignmentTable::new(columns).with_derived_rows(&witnesses);
    (table, witnesses)
}

fn bench_horizontal(c: &mut Criterion) {
    let mut group = c.benchmark_group("horizontal");
    for &(witness_count, column_count) in &[(4, 100), (16, 500), (32, 2000)] {
        let (table, witnesses) = synthetic_collation(witness_count, column_count);
        let options = HorizontalOptions {
            sort: AgreementSort::Lexicographic,
            ..HorizontalOptions::new("W0")
        };
        group.bench_with_input(
            BenchmarkId::new("html", format!("{}x{}", witness_count, column_count)),
            &(table, witnesses),
            |b, (table, witnesses)| {
                b.iter(|| horizontal::render(black_box(table), witnesses, &options, &Html).unwrap())
            },
        );
    }
    group.finish();
}

fn bench_vertical(c: &mut Criterion) {
    let (table, witnesses) = synthetic_collation(16, 500);
    c.bench_function("vertical_terminal_16x500", |b| {
        b.iter(|| vertical::render(black_box(&table), &witnesses, &Terminal::new(false)))
    });
}

fn bench_export(c: &mut Criterion) {
    let (table, _) = synthetic_collation(16, 500);
    let mut group = c.benchmark_group("export");
    for format in [ExportFormat::Csv, ExportFormat::Tsv] {
        group.bench_function(format.as_str(), |b| {
            b.iter(|| export(black_box(&table), format).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_horizontal, bench_vertical, bench_export);
criterion_main!(benches);

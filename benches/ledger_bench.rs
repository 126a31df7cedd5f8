use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use expense_tracker::engine::{ChartProjector, ExpenseSession, InputValidator};
use expense_tracker::ledger::{Category, CategoryPalette, Ledger};
use rust_decimal::Decimal;

fn filled_ledger(count: usize) -> Ledger {
    let palette = CategoryPalette::default();
    let categories: Vec<Category> = palette.categories().cloned().collect();
    let mut ledger = Ledger::new(palette);
    let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
    for i in 0..count {
        let category = &categories[i % categories.len()];
        let amount = Decimal::new(i as i64 % 10_000 + 1, 2);
        ledger.add_record(category, amount, date).unwrap();
    }
    ledger
}

fn bench_add_record(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_record");
    for count in [100usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| black_box(filled_ledger(count)));
        });
    }
    group.finish();
}

fn bench_project(c: &mut Criterion) {
    let ledger = filled_ledger(10_000);
    let totals = ledger.current_totals();
    c.bench_function("project_totals", |b| {
        b.iter(|| ChartProjector::project(black_box(&totals), ledger.palette()));
    });
}

fn bench_submit(c: &mut Criterion) {
    let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
    c.bench_function("session_submit", |b| {
        b.iter_batched(
            || ExpenseSession::new(CategoryPalette::default(), "Food").unwrap(),
            |mut session| {
                session
                    .submit(Some(black_box("transport")), black_box("12.50"), date)
                    .unwrap()
            },
            criterion::BatchSize::SmallInput,
        );
    });
    c.bench_function("parse_amount", |b| {
        b.iter(|| InputValidator::parse_amount(black_box(" 1.25e3 ")));
    });
}

criterion_group!(benches, bench_add_record, bench_project, bench_submit);
criterion_main!(benches);

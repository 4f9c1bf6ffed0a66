//! Benchmarks for the installment engine.
//!
//! Run with: cargo bench -p hubfin-credit

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use hubfin_core::Money;
use hubfin_credit::amortization::{amortization_schedule, compute_installment};
use hubfin_credit::prelude::*;
use rust_decimal_macros::dec;

fn bench_compute_installment(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_installment");
    for policy in all_policies() {
        group.bench_with_input(
            BenchmarkId::from_parameter(policy.tier.code()),
            policy,
            |b, policy| {
                b.iter(|| {
                    compute_installment(
                        black_box(Money::brl(dec!(10000))),
                        black_box(policy.max_installments),
                        black_box(policy.interest_rate),
                    )
                });
            },
        );
    }
    group.finish();
}

fn bench_quote(c: &mut Criterion) {
    c.bench_function("quote_good_tier", |b| {
        b.iter(|| {
            quote(
                black_box(CreditScore::new(720)),
                black_box(Money::brl(dec!(12000))),
                black_box(12),
            )
        });
    });
}

fn bench_schedule(c: &mut Criterion) {
    let policy = policy_for(CreditTier::Excellent);
    c.bench_function("schedule_48_installments", |b| {
        b.iter(|| {
            amortization_schedule(
                black_box(policy.max_principal),
                black_box(policy.max_installments),
                black_box(policy.interest_rate),
            )
        });
    });
}

criterion_group!(benches, bench_compute_installment, bench_quote, bench_schedule);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use netch::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Row {
    id: u32,
    payload: u64,
}

impl Identified for Row {
    type Id = u32;

    fn identity(&self) -> u32 {
        self.id
    }
}

fn mutated_rows(first_id: u32, count: u32) -> Effect<(), Row> {
    Effect::of_values_with_state(
        (),
        (first_id..first_id + count).map(|id| {
            StateTransition::Mutated(Row {
                id,
                payload: id as u64,
            })
        }),
    )
}

fn bench_combine_disjoint(c: &mut Criterion) {
    c.bench_function("combine_disjoint_1k", |b| {
        b.iter(|| {
            let left = mutated_rows(0, 1024);
            let right = mutated_rows(1024, 1024);
            black_box(left.combine(black_box(right)))
        })
    });
}

fn bench_combine_fully_shared(c: &mut Criterion) {
    c.bench_function("combine_shared_1k", |b| {
        b.iter(|| {
            let left = mutated_rows(0, 1024);
            let right = mutated_rows(0, 1024);
            black_box(left.combine(black_box(right)))
        })
    });
}

fn bench_and_then_chain(c: &mut Criterion) {
    c.bench_function("and_then_chain_64", |b| {
        b.iter(|| {
            let mut effect = mutated_rows(0, 1);
            for id in 1..64u32 {
                effect = effect
                    .and_then(|()| mutated_rows(id, 1))
                    .expect("all-mutated chain is always valid");
            }
            black_box(effect)
        })
    });
}

criterion_group!(
    benches,
    bench_combine_disjoint,
    bench_combine_fully_shared,
    bench_and_then_chain
);
criterion_main!(benches);

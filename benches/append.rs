//! Append-path benchmarks: chunklist vs std collections vs im::Vector.
//!
//! Two workloads: build a list with one bulk append of a large collection,
//! and build one element at a time. A third group measures clone cost,
//! where structural sharing should dominate.

use chunklist::ImmutableList;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use im::Vector;

const BULK_LEN: usize = 10_000;
const PER_ELEMENT_LEN: usize = 1_000;

fn bench_bulk_append(c: &mut Criterion) {
    let data: Vec<i32> = (0..BULK_LEN as i32).collect();

    c.bench_function("chunklist_bulk_append", |b| {
        b.iter(|| {
            let list = ImmutableList::single(1)
                .push(2)
                .push(3)
                .push(4)
                .push(5)
                .push(6)
                .append(data.iter().copied());
            let visited: i64 = list.iter().map(|&v| i64::from(v)).sum();
            black_box(visited)
        })
    });

    c.bench_function("vec_bulk_append", |b| {
        b.iter(|| {
            let mut values = vec![1];
            values.push(2);
            values.push(3);
            values.push(4);
            values.push(5);
            values.push(6);
            values.extend_from_slice(&data);
            let visited: i64 = values.iter().map(|&v| i64::from(v)).sum();
            black_box(visited)
        })
    });

    c.bench_function("im_vector_bulk_append", |b| {
        b.iter(|| {
            let mut vector = Vector::unit(1);
            for v in [2, 3, 4, 5, 6] {
                vector.push_back(v);
            }
            vector.extend(data.iter().copied());
            let visited: i64 = vector.iter().map(|&v| i64::from(v)).sum();
            black_box(visited)
        })
    });
}

fn bench_push_per_element(c: &mut Criterion) {
    let data: Vec<i32> = (0..PER_ELEMENT_LEN as i32).collect();

    c.bench_function("chunklist_push_per_element", |b| {
        b.iter(|| {
            let mut list = ImmutableList::single(0);
            for &v in &data {
                list = list.push(v);
            }
            black_box(list.len())
        })
    });

    c.bench_function("vec_push_per_element", |b| {
        b.iter(|| {
            let mut values = vec![0];
            for &v in &data {
                values.push(v);
            }
            black_box(values.len())
        })
    });

    c.bench_function("vecdeque_push_per_element", |b| {
        b.iter(|| {
            let mut values = std::collections::VecDeque::from(vec![0]);
            for &v in &data {
                values.push_back(v);
            }
            black_box(values.len())
        })
    });

    c.bench_function("im_vector_push_per_element", |b| {
        b.iter(|| {
            let mut vector = Vector::unit(0);
            for &v in &data {
                vector.push_back(v);
            }
            black_box(vector.len())
        })
    });
}

fn bench_clone(c: &mut Criterion) {
    let list: ImmutableList<i32> = (0..BULK_LEN as i32).collect();
    let values: Vec<i32> = (0..BULK_LEN as i32).collect();
    let vector: Vector<i32> = (0..BULK_LEN as i32).collect();

    c.bench_function("chunklist_clone", |b| b.iter(|| black_box(list.clone())));
    c.bench_function("vec_clone", |b| b.iter(|| black_box(values.clone())));
    c.bench_function("im_vector_clone", |b| b.iter(|| black_box(vector.clone())));
}

criterion_group!(benches, bench_bulk_append, bench_push_per_element, bench_clone);
criterion_main!(benches);

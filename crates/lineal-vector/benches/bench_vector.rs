use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lineal_vector::Vector;

fn benchmark_magnitude(c: &mut Criterion) {
    let v = Vector::new(vec![0.5f64; 1024]).unwrap();

    c.bench_function("vector magnitude 1024", |b| {
        b.iter(|| black_box(&v).magnitude())
    });
}

fn benchmark_dot(c: &mut Criterion) {
    let a = Vector::new(vec![0.5f64; 1024]).unwrap();
    let b_vec = Vector::new(vec![-2.0f64; 1024]).unwrap();

    c.bench_function("vector dot 1024", |b| {
        b.iter(|| black_box(&a).dot(black_box(&b_vec)).unwrap())
    });
}

fn benchmark_add(c: &mut Criterion) {
    let a = Vector::new(vec![0.5f64; 1024]).unwrap();
    let b_vec = Vector::new(vec![-2.0f64; 1024]).unwrap();

    c.bench_function("vector add 1024", |b| {
        b.iter(|| black_box(&a).add(black_box(&b_vec)).unwrap())
    });
}

fn benchmark_normalized(c: &mut Criterion) {
    let v = Vector::new(vec![0.5f64; 1024]).unwrap();

    c.bench_function("vector normalized 1024", |b| {
        b.iter(|| black_box(&v).normalized().unwrap())
    });
}

criterion_group!(
    benches,
    benchmark_magnitude,
    benchmark_dot,
    benchmark_add,
    benchmark_normalized
);
criterion_main!(benches);

use advmath::calculus::{romberg, simpson, RombergSettings};
use advmath::Matrix;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

// ---------------------------------------------------------------------------
// Helpers: diagonally dominant matrices so the unpivoted LU stays stable
// ---------------------------------------------------------------------------

fn dominant(n: usize) -> Matrix<f64> {
    Matrix::from_fn(n, n, |i, j| {
        ((i * 7 + j * 3) % 11) as f64 + if i == j { 10.0 * n as f64 } else { 0.0 }
    })
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

fn matmul(c: &mut Criterion) {
    let mut g = c.benchmark_group("matmul");
    for &n in &[4usize, 16, 64] {
        let a = Matrix::from_fn(n, n, |i, j| (i * n + j + 1) as f64);
        let m = Matrix::from_fn(n, n, |i, j| (i + j + 1) as f64);
        g.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| std::hint::black_box(&a) * std::hint::black_box(&m))
        });
    }
    g.finish();
}

// ---------------------------------------------------------------------------
// Decompositions
// ---------------------------------------------------------------------------

fn lu(c: &mut Criterion) {
    let mut g = c.benchmark_group("lu");
    for &n in &[4usize, 16, 64] {
        let a = dominant(n);
        g.bench_with_input(BenchmarkId::new("doolittle", n), &n, |b, _| {
            b.iter(|| std::hint::black_box(&a).lu())
        });
        g.bench_with_input(BenchmarkId::new("pivoted", n), &n, |b, _| {
            b.iter(|| std::hint::black_box(&a).lu_pivoted())
        });
    }
    g.finish();
}

fn inverse(c: &mut Criterion) {
    let mut g = c.benchmark_group("inverse");
    for &n in &[4usize, 16, 64] {
        let a = dominant(n);
        g.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| std::hint::black_box(&a).inverse())
        });
    }
    g.finish();
}

// ---------------------------------------------------------------------------
// Transpose
// ---------------------------------------------------------------------------

fn transpose(c: &mut Criterion) {
    let mut g = c.benchmark_group("transpose");
    for &(r, k) in &[(64usize, 64usize), (37, 101), (200, 3)] {
        let a = Matrix::from_fn(r, k, |i, j| (i * k + j) as f64);
        g.bench_with_input(BenchmarkId::from_parameter(format!("{}x{}", r, k)), &r, |b, _| {
            b.iter(|| std::hint::black_box(&a).transpose())
        });
    }
    g.finish();
}

// ---------------------------------------------------------------------------
// Quadrature
// ---------------------------------------------------------------------------

fn quadrature(c: &mut Criterion) {
    let mut g = c.benchmark_group("quadrature");
    let f = |x: f64| x.ln() / x;
    g.bench_function("simpson_1000", |b| {
        b.iter(|| simpson(f, std::hint::black_box(2.87), 4.59, 1000))
    });
    g.bench_function("romberg", |b| {
        let s = RombergSettings::default();
        b.iter(|| romberg(f, std::hint::black_box(2.87), 4.59, &s))
    });
    g.finish();
}

criterion_group!(benches, matmul, lu, inverse, transpose, quadrature);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cube::{Rotation, Scrambler};

fn rotations(c: &mut Criterion) {
    let state = Scrambler::with_seed(42).scramble();

    c.bench_function("apply_six_rotations", |b| {
        b.iter(|| {
            let mut s = state;
            for rotation in Rotation::ALL {
                s = rotation.apply(black_box(&s));
            }
            s
        });
    });

    c.bench_function("scramble", |b| {
        let mut scrambler = Scrambler::with_seed(42);
        b.iter(|| scrambler.scramble());
    });
}

criterion_group!(benches, rotations);
criterion_main!(benches);

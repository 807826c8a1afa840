//! Vector operation benchmarks.

use bvec_core::math::{
    Vec3, Vec4,
    rand::{DefaultRng, Distrib, Uniform},
    splat,
};
use divan::Bencher;
use divan::counter::ItemsCount;

#[divan::bench]
fn dot(b: Bencher) {
    let rng = &mut DefaultRng::default();
    let vecs: Uniform<Vec4> = Uniform(splat(-1e3)..splat(1e3));

    b.with_inputs(|| (vecs.sample(rng), vecs.sample(rng)))
        .input_counter(|_| ItemsCount::new(1u32))
        .bench_local_values(|(u, v): (Vec4, Vec4)| u.dot(&v));
}

#[divan::bench]
fn cross(b: Bencher) {
    let rng = &mut DefaultRng::default();
    let vecs: Uniform<Vec3> = Uniform(splat(-1e3)..splat(1e3));

    b.with_inputs(|| (vecs.sample(rng), vecs.sample(rng)))
        .input_counter(|_| ItemsCount::new(1u32))
        .bench_local_values(|(u, v): (Vec3, Vec3)| u.cross(&v));
}

#[divan::bench]
fn normalize(b: Bencher) {
    let rng = &mut DefaultRng::default();
    let vecs: Uniform<Vec3> = Uniform(splat(-1e6)..splat(1e6));

    b.with_inputs(|| vecs.sample(rng))
        .input_counter(|_| ItemsCount::new(1u32))
        .bench_local_values(|v: Vec3| v.normalize());
}

fn main() {
    divan::main()
}

//! Pseudo-random generation of scalars, vectors, and matrices.
//!
//! Used to drive property tests and benchmarks with reproducible inputs.
//! Not suitable for cryptographic purposes.

use core::{array, ops::Range};

use crate::math::{Matrix, Vec3, Vector};

//
// Traits and types
//

pub type DefaultRng = Xorshift64;

/// Trait for generating values sampled from a probability distribution.
pub trait Distrib<R = DefaultRng>: Clone {
    /// The type of the values sampled from `Self`.
    type Sample;

    /// Returns a pseudo-random value sampled from `self`.
    fn sample(&self, rng: &mut R) -> Self::Sample;

    /// Returns an iterator that yields samples from `self`.
    fn iter(&self, rng: R) -> Iter<Self, R> {
        Iter(self.clone(), rng)
    }
}

/// A pseudo-random number generator (PRNG) that uses a [Xorshift algorithm][^1]
/// to generate 64 bits of randomness at a time, represented by a `u64`.
///
/// Xorshift64 has a period of 2<sup>64</sup>-1: it yields every number in
/// the interval [1, 2<sup>64</sup>) exactly once before repeating.
///
/// [^1]: Marsaglia, G. (2003). Xorshift RNGs. Journal of Statistical Software,
///     8(14), 1–6. <https://doi.org/10.18637/jss.v008.i14>
#[derive(Copy, Clone, Debug)]
#[repr(transparent)]
pub struct Xorshift64(pub u64);

/// A uniform distribution of values in the given half-open range.
///
/// Arrays, vectors, and matrices are sampled component by component, each
/// component from the range between the corresponding components of the
/// start and end values.
#[derive(Clone, Debug)]
pub struct Uniform<T>(pub Range<T>);

/// A uniform distribution of 3-vectors on the surface of the unit sphere.
///
/// Handy for generating random rotation axes.
#[derive(Copy, Clone, Debug, Default)]
pub struct UnitSphere;

/// A uniform distribution of 3-vectors inside the closed unit ball.
#[derive(Copy, Clone, Debug, Default)]
pub struct UnitBall;

/// Iterator returned by the [`Distrib::iter`] method.
#[derive(Clone, Debug)]
pub struct Iter<D, R>(D, R);

//
// Inherent impls
//

impl Xorshift64 {
    /// A random 64-bit prime, used to initialize the generator returned by
    /// [`Xorshift64::default()`].
    pub const DEFAULT_SEED: u64 = 378682147834061;

    /// Returns a new `Xorshift64` seeded by the given number.
    ///
    /// Two `Xorshift64` instances generate the same sequence of pseudo-random
    /// numbers if and only if they were created with the same seed.
    ///
    /// # Examples
    /// ```
    /// # use bvec_core::math::rand::Xorshift64;
    /// let mut g = Xorshift64::from_seed(123);
    /// assert_eq!(g.next_bits(), 133101616827);
    /// assert_eq!(g.next_bits(), 12690785413091508870);
    /// assert_eq!(g.next_bits(), 7516749944291143043);
    /// ```
    ///
    /// # Panics
    ///
    /// If `seed` equals 0.
    pub fn from_seed(seed: u64) -> Self {
        assert_ne!(seed, 0, "xorshift seed cannot be zero");
        Self(seed)
    }

    /// Returns 64 bits of pseudo-randomness.
    pub fn next_bits(&mut self) -> u64 {
        let Self(x) = self;
        *x ^= *x << 13;
        *x ^= *x >> 7;
        *x ^= *x << 17;
        *x
    }
}

//
// Foreign trait impls
//

impl<D: Distrib> Iterator for Iter<D, DefaultRng> {
    type Item = D::Sample;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.0.sample(&mut self.1))
    }
}

impl Default for Xorshift64 {
    /// Returns a `Xorshift64` seeded with [`Self::DEFAULT_SEED`].
    fn default() -> Self {
        Self::from_seed(Self::DEFAULT_SEED)
    }
}

//
// Local trait impls
//

impl Distrib for Uniform<f32> {
    type Sample = f32;

    /// Returns a uniformly distributed `f32` in the given range.
    fn sample(&self, rng: &mut DefaultRng) -> f32 {
        let Range { start, end } = self.0;
        // Bit repr of a random f32 in range 1.0..2.0
        let bits = 127 << 23 | rng.next_bits() >> 41;
        let unit = f32::from_bits(bits as u32) - 1.0;
        unit * (end - start) + start
    }
}

impl<T, const N: usize> Distrib for Uniform<[T; N]>
where
    T: Copy,
    Uniform<T>: Distrib,
{
    type Sample = [<Uniform<T> as Distrib>::Sample; N];

    /// Returns an array of values that represents a uniformly distributed
    /// point within the N-dimensional box bounded by `self.0`.
    fn sample(&self, rng: &mut DefaultRng) -> Self::Sample {
        array::from_fn(|i| Uniform(self.0.start[i]..self.0.end[i]).sample(rng))
    }
}

impl<const N: usize> Distrib for Uniform<Vector<N>> {
    type Sample = Vector<N>;

    /// Returns a uniformly distributed vector within the box bounded by
    /// `self.0`.
    fn sample(&self, rng: &mut DefaultRng) -> Vector<N> {
        Vector(Uniform(self.0.start.0..self.0.end.0).sample(rng))
    }
}

impl<const N: usize> Distrib for Uniform<Matrix<N>> {
    type Sample = Matrix<N>;

    /// Returns a matrix whose every element is uniformly distributed
    /// between the corresponding elements of `self.0.start` and `self.0.end`.
    fn sample(&self, rng: &mut DefaultRng) -> Matrix<N> {
        let Range { start, end } = &self.0;
        Matrix::from_rows(array::from_fn(|i| {
            Uniform(start.row(i)..end.row(i)).sample(rng)
        }))
    }
}

#[cfg(feature = "fp")]
impl Distrib for UnitSphere {
    type Sample = Vec3;

    /// Returns a vector uniformly distributed on the unit sphere.
    fn sample(&self, rng: &mut DefaultRng) -> Vec3 {
        UnitBall.sample(rng).normalize()
    }
}

impl Distrib for UnitBall {
    type Sample = Vec3;

    /// Returns a vector uniformly distributed within the unit ball.
    fn sample(&self, rng: &mut DefaultRng) -> Vec3 {
        let d = Uniform([-1.0f32; 3]..[1.0; 3]);
        loop {
            let v = Vector(d.sample(rng));
            // Reject the origin too so that normalizing is always safe
            if 0.0 < v.len_sqr() && v.len_sqr() <= 1.0 {
                return v;
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::manual_range_contains)]
mod tests {
    use crate::assert_approx_eq;
    use crate::math::{Mat3, vec::vec3};

    use super::*;

    const COUNT: usize = 1000;

    fn rng() -> DefaultRng {
        Default::default()
    }

    #[test]
    fn same_seed_same_sequence() {
        let a = Xorshift64::from_seed(42);
        let b = Xorshift64::from_seed(42);
        let d = Uniform(0.0..1.0);
        assert!(d.iter(a).take(COUNT).eq(d.iter(b).take(COUNT)));
    }

    #[test]
    #[should_panic]
    fn zero_seed_panics() {
        let _ = Xorshift64::from_seed(0);
    }

    #[test]
    fn uniform_f32() {
        let dist = Uniform(-1.23..4.56);
        for r in dist.iter(rng()).take(COUNT) {
            assert!(-1.23 <= r && r < 4.56);
        }
    }

    #[test]
    fn uniform_f32_mean() {
        let sum: f32 = Uniform(0.0..2.0).iter(rng()).take(COUNT).sum();
        assert_approx_eq!(sum / COUNT as f32, 1.0, eps = 0.1);
    }

    #[test]
    fn uniform_vec3() {
        let dist = Uniform(vec3(-2.0, 0.0, -1.0)..vec3(1.0, 2.0, 3.0));
        for v in dist.iter(rng()).take(COUNT) {
            assert!(-2.0 <= v.x() && v.x() < 1.0);
            assert!(0.0 <= v.y() && v.y() < 2.0);
            assert!(-1.0 <= v.z() && v.z() < 3.0);
        }
    }

    #[test]
    fn uniform_matrix() {
        let lo = Mat3::new([[0.0; 3], [-1.0; 3], [5.0, 6.0, 7.0]]);
        let hi = Mat3::new([[1.0; 3], [0.0; 3], [6.0, 7.0, 8.0]]);
        for m in Uniform(lo..hi).iter(rng()).take(COUNT) {
            for i in 0..3 {
                for j in 0..3 {
                    assert!(lo[i][j] <= m[i][j] && m[i][j] < hi[i][j]);
                }
            }
        }
    }

    #[cfg(feature = "fp")]
    #[test]
    fn unit_sphere() {
        for v in UnitSphere.iter(rng()).take(COUNT) {
            assert_approx_eq!(v.len_sqr(), 1.0, "non-unit vector: {v:?}");
        }
    }

    #[test]
    fn unit_ball() {
        for v in UnitBall.iter(rng()).take(COUNT) {
            let len_sqr = v.len_sqr();
            assert!(0.0 < len_sqr && len_sqr <= 1.0, "bad vector: {v:?}");
        }
    }
}

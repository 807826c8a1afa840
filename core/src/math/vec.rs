//! Real vectors of dimension 2, 3, and 4.
//!
//! A [`Vector<N>`] is a plain array of `N` `f32` components. The components
//! can be accessed either by index (`v[0]`, `v[1]`, …) or by name (`v.x()`,
//! `v.y()`, …); both forms read and write the very same storage.
//!
//! ```
//! use bvec_core::math::vec::vec3;
//!
//! let mut v = vec3(1.0, 2.0, 3.0);
//! *v.y_mut() = -2.0;
//! assert_eq!(v[1], -2.0);
//! v[2] = 0.5;
//! assert_eq!(v.z(), 0.5);
//! ```
//!
//! All operations follow IEEE 754 semantics. In particular, nothing is
//! clamped or validated: NaNs and infinities in the input propagate to the
//! output.

use core::array;
use core::fmt::{self, Debug, Formatter};
use core::ops::{
    Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::math::approx::ApproxEq;

/// A vector of `N` `f32` components.
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq)]
pub struct Vector<const N: usize>(pub [f32; N]);

/// A 2-vector with `f32` components.
pub type Vec2 = Vector<2>;
/// A 3-vector with `f32` components.
pub type Vec3 = Vector<3>;
/// A 4-vector with `f32` components, typically a homogeneous point or
/// direction.
pub type Vec4 = Vector<4>;

/// Returns a 2-vector with components `x` and `y`.
#[inline]
pub const fn vec2(x: f32, y: f32) -> Vec2 {
    Vector([x, y])
}

/// Returns a 3-vector with components `x`, `y`, and `z`.
#[inline]
pub const fn vec3(x: f32, y: f32, z: f32) -> Vec3 {
    Vector([x, y, z])
}

/// Returns a 4-vector with components `x`, `y`, `z`, and `w`.
#[inline]
pub const fn vec4(x: f32, y: f32, z: f32, w: f32) -> Vec4 {
    Vector([x, y, z, w])
}

/// Returns a vector with all components equal to `s`.
///
/// # Examples
/// ```
/// use bvec_core::math::vec::{splat, vec3, Vec3};
///
/// let v: Vec3 = splat(2.0);
/// assert_eq!(v, vec3(2.0, 2.0, 2.0));
/// ```
#[inline]
pub const fn splat<const N: usize>(s: f32) -> Vector<N> {
    Vector([s; N])
}

impl<const N: usize> Vector<N> {
    /// Returns a new vector with the given components.
    #[inline]
    pub const fn new(els: [f32; N]) -> Self {
        Self(els)
    }

    /// Returns the zero vector.
    #[inline]
    pub const fn zero() -> Self {
        Self([0.0; N])
    }

    /// Returns the components of `self` as an array.
    #[inline]
    pub const fn to_array(self) -> [f32; N] {
        self.0
    }

    /// Returns the component-wise sum of `self` and `other`.
    #[inline]
    pub fn add(self, other: &Self) -> Self {
        Self(array::from_fn(|i| self.0[i] + other.0[i]))
    }

    /// Returns the component-wise difference of `self` and `other`.
    ///
    /// `sub` is anti-commutative: `v.sub(&w) == w.sub(&v).neg()`.
    #[inline]
    pub fn sub(self, other: &Self) -> Self {
        Self(array::from_fn(|i| self.0[i] - other.0[i]))
    }

    /// Returns `self` with every component multiplied by `scalar`.
    #[inline]
    pub fn mul(self, scalar: f32) -> Self {
        Self(self.0.map(|c| c * scalar))
    }

    /// Returns `self` with every component negated.
    #[inline]
    pub fn neg(self) -> Self {
        Self(self.0.map(|c| -c))
    }

    /// Returns the dot product of `self` and `other`.
    ///
    /// # Examples
    /// ```
    /// use bvec_core::math::vec::vec3;
    ///
    /// assert_eq!(vec3(1.0, 2.0, 3.0).dot(&vec3(4.0, -5.0, 6.0)), 12.0);
    /// ```
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        let mut res = 0.0;
        for i in 0..N {
            res += self.0[i] * other.0[i];
        }
        res
    }

    /// Returns the squared Euclidean length of `self`.
    ///
    /// Cheaper than [`len`][Self::len], and sufficient when comparing
    /// magnitudes.
    #[inline]
    pub fn len_sqr(&self) -> f32 {
        self.dot(self)
    }

    /// Returns the Euclidean length of `self`.
    ///
    /// # Examples
    /// ```
    /// use bvec_core::math::vec::vec2;
    ///
    /// assert_eq!(vec2(3.0, 4.0).len(), 5.0);
    /// ```
    #[cfg(feature = "fp")]
    #[inline]
    pub fn len(&self) -> f32 {
        crate::math::float::f32::sqrt(self.len_sqr())
    }

    /// Returns `self` scaled to unit length.
    ///
    /// The result is `self * (1 / self.len())`. No check is made for
    /// a zero-length input: the reciprocal is then infinite, and every
    /// component of the result is NaN. Use [`checked::normalize`] to
    /// catch this in debug builds.
    ///
    /// # Examples
    /// ```
    /// use bvec_core::math::vec::vec2;
    ///
    /// assert_eq!(vec2(0.0, -4.0).normalize(), vec2(0.0, -1.0));
    /// assert!(vec2(0.0, 0.0).normalize().x().is_nan());
    /// ```
    ///
    /// [`checked::normalize`]: crate::math::checked::normalize
    #[cfg(feature = "fp")]
    #[inline]
    pub fn normalize(&self) -> Self {
        self.mul(1.0 / self.len())
    }
}

impl Vec2 {
    #[inline]
    pub const fn x(&self) -> f32 {
        self.0[0]
    }
    #[inline]
    pub const fn y(&self) -> f32 {
        self.0[1]
    }
    #[inline]
    pub fn x_mut(&mut self) -> &mut f32 {
        &mut self.0[0]
    }
    #[inline]
    pub fn y_mut(&mut self) -> &mut f32 {
        &mut self.0[1]
    }

    /// Returns the perp-dot product (2D wedge product) of `self` and `other`.
    ///
    /// This is the scalar `self.x * other.y - self.y * other.x`, equal to
    /// the z component of the cross product of the two vectors extended
    /// to 3D. It is positive if `other` is counterclockwise from `self`,
    /// negative if clockwise, and zero if they are parallel.
    ///
    /// # Examples
    /// ```
    /// use bvec_core::math::vec::vec2;
    ///
    /// assert_eq!(vec2(1.0, 0.0).perp_dot(&vec2(0.0, 1.0)), 1.0);
    /// assert_eq!(vec2(0.0, 1.0).perp_dot(&vec2(1.0, 0.0)), -1.0);
    /// ```
    #[inline]
    pub fn perp_dot(&self, other: &Self) -> f32 {
        self.x() * other.y() - self.y() * other.x()
    }
}

impl Vec3 {
    #[inline]
    pub const fn x(&self) -> f32 {
        self.0[0]
    }
    #[inline]
    pub const fn y(&self) -> f32 {
        self.0[1]
    }
    #[inline]
    pub const fn z(&self) -> f32 {
        self.0[2]
    }
    #[inline]
    pub fn x_mut(&mut self) -> &mut f32 {
        &mut self.0[0]
    }
    #[inline]
    pub fn y_mut(&mut self) -> &mut f32 {
        &mut self.0[1]
    }
    #[inline]
    pub fn z_mut(&mut self) -> &mut f32 {
        &mut self.0[2]
    }

    /// Returns the cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both inputs, with direction given by
    /// the right-hand rule and length equal to the area of the parallelogram
    /// they span. The cross product is anti-commutative:
    /// `a.cross(&b) == b.cross(&a).neg()`.
    ///
    /// # Examples
    /// ```
    /// use bvec_core::math::vec::vec3;
    ///
    /// let x = vec3(1.0, 0.0, 0.0);
    /// let y = vec3(0.0, 1.0, 0.0);
    /// assert_eq!(x.cross(&y), vec3(0.0, 0.0, 1.0));
    /// ```
    pub fn cross(&self, other: &Self) -> Self {
        let [a, b] = [self, other];
        vec3(
            a.y() * b.z() - a.z() * b.y(),
            a.z() * b.x() - a.x() * b.z(),
            a.x() * b.y() - a.y() * b.x(),
        )
    }

    /// Returns `self` extended with the given `w` component.
    ///
    /// Use `w = 1.0` for points, which are affected by translation, and
    /// `w = 0.0` for directions, which are not.
    #[inline]
    pub const fn to_vec4(&self, w: f32) -> Vec4 {
        vec4(self.x(), self.y(), self.z(), w)
    }
}

impl Vec4 {
    #[inline]
    pub const fn x(&self) -> f32 {
        self.0[0]
    }
    #[inline]
    pub const fn y(&self) -> f32 {
        self.0[1]
    }
    #[inline]
    pub const fn z(&self) -> f32 {
        self.0[2]
    }
    #[inline]
    pub const fn w(&self) -> f32 {
        self.0[3]
    }
    #[inline]
    pub fn x_mut(&mut self) -> &mut f32 {
        &mut self.0[0]
    }
    #[inline]
    pub fn y_mut(&mut self) -> &mut f32 {
        &mut self.0[1]
    }
    #[inline]
    pub fn z_mut(&mut self) -> &mut f32 {
        &mut self.0[2]
    }
    #[inline]
    pub fn w_mut(&mut self) -> &mut f32 {
        &mut self.0[3]
    }

    /// Returns the x, y, and z components of `self`, dropping w.
    ///
    /// No perspective division is performed.
    #[inline]
    pub const fn to_vec3(&self) -> Vec3 {
        vec3(self.x(), self.y(), self.z())
    }
}

//
// Foreign trait impls
//

impl<const N: usize> Default for Vector<N> {
    /// Returns the zero vector.
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize> Debug for Vector<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Vec{}{:?}", N, self.0)
    }
}

impl<const N: usize> From<[f32; N]> for Vector<N> {
    #[inline]
    fn from(els: [f32; N]) -> Self {
        Self(els)
    }
}

impl<const N: usize> From<Vector<N>> for [f32; N] {
    #[inline]
    fn from(v: Vector<N>) -> Self {
        v.0
    }
}

impl<const N: usize> Index<usize> for Vector<N> {
    type Output = f32;

    /// Returns a reference to the `i`th component of `self`.
    ///
    /// # Panics
    /// If `i >= N`.
    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.0[i]
    }
}

impl<const N: usize> IndexMut<usize> for Vector<N> {
    /// Returns a mutable reference to the `i`th component of `self`.
    ///
    /// # Panics
    /// If `i >= N`.
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        &mut self.0[i]
    }
}

impl<const N: usize> AddAssign for Vector<N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = Vector::add(*self, &rhs);
    }
}

impl<const N: usize> SubAssign for Vector<N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = Vector::sub(*self, &rhs);
    }
}

impl<const N: usize> MulAssign<f32> for Vector<N> {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = Vector::mul(*self, rhs);
    }
}

impl<const N: usize> Neg for Vector<N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Vector::neg(self)
    }
}

impl<const N: usize> Mul<Vector<N>> for f32 {
    type Output = Vector<N>;

    #[inline]
    fn mul(self, rhs: Vector<N>) -> Vector<N> {
        rhs * self
    }
}

impl_op!(Add::add, Vector<N>, Vector<N>, +=);
impl_op!(Sub::sub, Vector<N>, Vector<N>, -=);
impl_op!(Mul::mul, Vector<N>, f32, *=);

impl<const N: usize> ApproxEq<Self, f32> for Vector<N> {
    fn approx_eq_eps(&self, other: &Self, eps: &f32) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
    fn relative_epsilon() -> f32 {
        f32::relative_epsilon()
    }
}

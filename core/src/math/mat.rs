//! Matrices and linear and affine transforms.
//!
//! A [`Matrix<N>`] is an array of `N` row vectors of type [`Vector<N>`].
//! Storage is **row-major**: `m[i][j]` is the element on row `i` and column
//! `j`, and [`to_array`][Matrix::to_array] returns the rows in order, ready
//! to be uploaded to a graphics API that expects row-major data. Consumers
//! that expect column-major data must [`transpose`][Matrix::transpose] first.
//!
//! Vectors are column vectors multiplied on the right: [`apply`][Matrix::apply]
//! computes `M·v`, and [`compose`][Matrix::compose] computes `A·B`, the
//! transform that applies `B` first and `A` second. Translations occupy
//! the last column of a 4×4 matrix.
//!
//! ```
//! use bvec_core::math::{translate, scale, vec3, vec4};
//!
//! // First scale by 2, then translate by (1, 2, 3)
//! let m = translate(vec3(1.0, 2.0, 3.0)) * scale(vec3(2.0, 2.0, 2.0));
//! assert_eq!(m * vec4(1.0, 0.0, 0.0, 1.0), vec4(3.0, 2.0, 3.0, 1.0));
//! ```

use core::array;
use core::fmt::{self, Debug, Formatter};
use core::ops::{Index, IndexMut, Mul, MulAssign};

use crate::math::approx::ApproxEq;
use crate::math::vec::{Vec3, Vector, splat, vec3};

/// A square matrix of `N` rows and `N` columns of `f32` elements,
/// stored in row-major order.
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq)]
pub struct Matrix<const N: usize>([Vector<N>; N]);

/// A 2×2 matrix, a linear map in 2D.
pub type Mat2 = Matrix<2>;
/// A 3×3 matrix, a linear map in 3D.
pub type Mat3 = Matrix<3>;
/// A 4×4 matrix, an affine or projective map in homogeneous 3D.
pub type Mat4 = Matrix<4>;

impl<const N: usize> Matrix<N> {
    /// Returns a matrix with the given elements, given as an array of rows.
    ///
    /// # Examples
    /// ```
    /// use bvec_core::math::{Mat2, vec2};
    ///
    /// let m = Mat2::new([[1.0, 2.0], [3.0, 4.0]]);
    /// assert_eq!(m.row(0), vec2(1.0, 2.0));
    /// assert_eq!(m.col(0), vec2(1.0, 3.0));
    /// ```
    #[inline]
    pub fn new(els: [[f32; N]; N]) -> Self {
        Self(els.map(Vector))
    }

    /// Returns a matrix whose rows are the given vectors.
    #[inline]
    pub const fn from_rows(rows: [Vector<N>; N]) -> Self {
        Self(rows)
    }

    /// Returns a matrix whose columns are the given vectors.
    #[inline]
    pub fn from_cols(cols: [Vector<N>; N]) -> Self {
        Self(cols).transpose()
    }

    /// Returns the matrix with all elements zero.
    #[inline]
    pub const fn zero() -> Self {
        Self([Vector::zero(); N])
    }

    /// Returns the identity matrix, with ones on the diagonal and zeros
    /// elsewhere.
    #[inline]
    pub fn identity() -> Self {
        Self::diag(splat(1.0))
    }

    /// Returns the diagonal matrix whose diagonal elements are the
    /// components of `d`, and whose other elements are zero.
    ///
    /// # Examples
    /// ```
    /// use bvec_core::math::{Mat3, vec3};
    ///
    /// let m = Mat3::diag(vec3(1.0, 2.0, 3.0));
    /// assert_eq!(m.to_array(), [
    ///     [1.0, 0.0, 0.0],
    ///     [0.0, 2.0, 0.0],
    ///     [0.0, 0.0, 3.0],
    /// ]);
    /// ```
    pub fn diag(d: Vector<N>) -> Self {
        let mut m = Self::zero();
        for i in 0..N {
            m.0[i][i] = d[i];
        }
        m
    }

    /// Returns the `i`th row of `self`.
    ///
    /// # Panics
    /// If `i >= N`.
    #[inline]
    pub fn row(&self, i: usize) -> Vector<N> {
        self.0[i]
    }

    /// Returns the `j`th column of `self`.
    ///
    /// # Panics
    /// If `j >= N`.
    #[inline]
    pub fn col(&self, j: usize) -> Vector<N> {
        Vector(array::from_fn(|i| self.0[i][j]))
    }

    /// Returns the elements of `self` as a row-major array of rows.
    #[inline]
    pub fn to_array(&self) -> [[f32; N]; N] {
        self.0.map(Vector::to_array)
    }

    /// Returns `self` with every element multiplied by `s`.
    #[inline]
    pub fn scaled(&self, s: f32) -> Self {
        Self(self.0.map(|row| row.mul(s)))
    }

    /// Returns the transpose of `self`, the matrix whose rows are the
    /// columns of `self`.
    ///
    /// Transposition is its own inverse: `m.transpose().transpose() == m`.
    pub fn transpose(&self) -> Self {
        Self(array::from_fn(|i| self.col(i)))
    }

    /// Returns the matrix product `self · other`.
    ///
    /// Element *(i, j)* of the result is the dot product of row *i* of
    /// `self` and column *j* of `other`. Applying the result to a vector
    /// is equivalent to first applying `other`, then `self`:
    /// `self.compose(&other).apply(&v) == self.apply(&other.apply(&v))`,
    /// up to rounding.
    ///
    /// Matrix multiplication is associative but not commutative.
    pub fn compose(&self, other: &Self) -> Self {
        let cols: [Vector<N>; N] = array::from_fn(|j| other.col(j));
        Self(array::from_fn(|i| {
            Vector(array::from_fn(|j| self.0[i].dot(&cols[j])))
        }))
    }

    /// Returns the matrix product `other · self`, the transform that
    /// applies `self` first and `other` second.
    ///
    /// Reads in application order when chaining:
    /// ```
    /// use bvec_core::math::{scale3, translate3};
    ///
    /// let s = scale3(2.0, 2.0, 2.0);
    /// let t = translate3(1.0, 0.0, 0.0);
    /// assert_eq!(s.then(&t), t.compose(&s));
    /// ```
    #[inline]
    pub fn then(&self, other: &Self) -> Self {
        other.compose(self)
    }

    /// Returns the matrix–vector product `self · v`.
    ///
    /// Component *i* of the result is the dot product of row *i* of
    /// `self` and `v`, treated as a column vector.
    #[inline]
    pub fn apply(&self, v: &Vector<N>) -> Vector<N> {
        Vector(array::from_fn(|i| self.0[i].dot(v)))
    }
}

impl Mat2 {
    /// Returns `self` embedded in the upper-left corner of a 4×4 identity
    /// matrix.
    ///
    /// The result maps the xy plane as `self` does, leaving z and w, and
    /// thus also translation, untouched.
    pub fn to_mat4(&self) -> Mat4 {
        embed(self)
    }
}

impl Mat3 {
    /// Returns `self` embedded in the upper-left corner of a 4×4 identity
    /// matrix.
    ///
    /// The result is the linear map `self` in homogeneous coordinates:
    /// points and directions are transformed as by `self`, and w is left
    /// untouched.
    ///
    /// # Examples
    /// ```
    /// use bvec_core::math::{Mat3, Mat4};
    ///
    /// assert_eq!(Mat3::identity().to_mat4(), Mat4::identity());
    /// ```
    pub fn to_mat4(&self) -> Mat4 {
        embed(self)
    }
}

impl Mat4 {
    /// Transforms the point `p` by `self`.
    ///
    /// The point is extended with w = 1, so any translation in `self`
    /// applies. The resulting w is discarded without perspective division.
    #[inline]
    pub fn apply_pt(&self, p: &Vec3) -> Vec3 {
        self.apply(&p.to_vec4(1.0)).to_vec3()
    }

    /// Transforms the direction vector `d` by `self`.
    ///
    /// The vector is extended with w = 0, so any translation in `self`
    /// has no effect.
    #[inline]
    pub fn apply_dir(&self, d: &Vec3) -> Vec3 {
        self.apply(&d.to_vec4(0.0)).to_vec3()
    }
}

/// Copies the upper-left `N`×`N` block of a 4×4 identity from `m`.
fn embed<const N: usize>(m: &Matrix<N>) -> Mat4 {
    let mut res = Mat4::identity();
    for i in 0..N {
        for j in 0..N {
            res.0[i][j] = m.0[i][j];
        }
    }
    res
}

//
// Transform constructors
//

/// Returns a matrix that translates by `t`.
///
/// The components of `t` are placed in the last column of the first three
/// rows:
/// ```text
/// ⎛ 1  0  0  t.x ⎞
/// ⎜ 0  1  0  t.y ⎟
/// ⎜ 0  0  1  t.z ⎟
/// ⎝ 0  0  0   1  ⎠
/// ```
pub fn translate(t: Vec3) -> Mat4 {
    [
        [1.0, 0.0, 0.0, t.x()],
        [0.0, 1.0, 0.0, t.y()],
        [0.0, 0.0, 1.0, t.z()],
        [0.0, 0.0, 0.0, 1.0],
    ]
    .into()
}

/// Returns a matrix that translates by (`x`, `y`, `z`).
pub fn translate3(x: f32, y: f32, z: f32) -> Mat4 {
    translate(vec3(x, y, z))
}

/// Returns a matrix that scales the x, y, and z axes by the
/// respective components of `s`.
pub fn scale(s: Vec3) -> Mat4 {
    Mat4::diag(s.to_vec4(1.0))
}

/// Returns a matrix that scales the x, y, and z axes by
/// `x`, `y`, and `z`, respectively.
pub fn scale3(x: f32, y: f32, z: f32) -> Mat4 {
    scale(vec3(x, y, z))
}

/// Returns a matrix that rotates by `angle` radians about `axis`.
///
/// The axis need not be of unit length; it is normalized first.
/// The rotation follows the right-hand rule: looking from the tip of `axis`
/// towards the origin, a positive angle rotates counterclockwise.
///
/// Uses Rodrigues' rotation formula. With *u* = `axis.normalize()`,
/// *c* = cos(`angle`), *s* = sin(`angle`), and *t* = 1 − *c*, the upper-left
/// 3×3 block of the result is
/// ```text
/// ⎛ t·ux·ux + c     t·ux·uy − s·uz  t·ux·uz + s·uy ⎞
/// ⎜ t·ux·uy + s·uz  t·uy·uy + c     t·uy·uz − s·ux ⎟
/// ⎝ t·ux·uz − s·uy  t·uy·uz + s·ux  t·uz·uz + c    ⎠
/// ```
/// and the rest is as in the identity matrix.
///
/// If `axis` is the zero vector, every element of the 3×3 block is NaN.
///
/// # Examples
/// ```
/// use bvec_core::assert_approx_eq;
/// use bvec_core::math::{rotate, vec3, vec4};
/// use core::f32::consts::FRAC_PI_2;
///
/// let m = rotate(vec3(0.0, 0.0, 2.0), FRAC_PI_2);
/// assert_approx_eq!(m * vec4(1.0, 0.0, 0.0, 1.0), vec4(0.0, 1.0, 0.0, 1.0));
/// ```
#[cfg(feature = "fp")]
pub fn rotate(axis: Vec3, angle: f32) -> Mat4 {
    let (s, c) = crate::math::float::f32::sin_cos(angle);
    let t = 1.0 - c;
    let u = axis.normalize();
    let [x, y, z] = u.0;
    [
        [t * x * x + c, t * x * y - s * z, t * x * z + s * y, 0.0],
        [t * x * y + s * z, t * y * y + c, t * y * z - s * x, 0.0],
        [t * x * z - s * y, t * y * z + s * x, t * z * z + c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
    .into()
}

/// Returns a matrix that rotates by `angle` radians about the x axis.
///
/// Positive angles rotate y towards z.
#[cfg(feature = "fp")]
pub fn rotate_x(angle: f32) -> Mat4 {
    let (sin, cos) = crate::math::float::f32::sin_cos(angle);
    [
        [1.0, 0.0, 0.0, 0.0],
        [0.0, cos, -sin, 0.0],
        [0.0, sin, cos, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
    .into()
}

/// Returns a matrix that rotates by `angle` radians about the y axis.
///
/// Positive angles rotate z towards x.
#[cfg(feature = "fp")]
pub fn rotate_y(angle: f32) -> Mat4 {
    let (sin, cos) = crate::math::float::f32::sin_cos(angle);
    [
        [cos, 0.0, sin, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [-sin, 0.0, cos, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
    .into()
}

/// Returns a matrix that rotates by `angle` radians about the z axis.
///
/// Positive angles rotate x towards y.
#[cfg(feature = "fp")]
pub fn rotate_z(angle: f32) -> Mat4 {
    let (sin, cos) = crate::math::float::f32::sin_cos(angle);
    [
        [cos, -sin, 0.0, 0.0],
        [sin, cos, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
    .into()
}

/// Returns a model matrix that scales, rotates, and translates, in that
/// order.
///
/// Equal to `translate(t) · rotate(axis, angle) · scale(s)`. A point is
/// first scaled by `s`, then rotated by `angle` radians about `axis`,
/// then translated by `t`. Note that for non-uniform scaling the order of
/// scaling and rotation matters.
///
/// # Examples
/// ```
/// use bvec_core::math::{trs, vec3, vec4};
///
/// let m = trs(vec3(1.0, 2.0, 3.0), vec3(0.0, 1.0, 0.0), 0.0, vec3(2.0, 2.0, 2.0));
/// assert_eq!(m * vec4(1.0, 0.0, 0.0, 1.0), vec4(3.0, 2.0, 3.0, 1.0));
/// ```
#[cfg(feature = "fp")]
pub fn trs(t: Vec3, axis: Vec3, angle: f32, s: Vec3) -> Mat4 {
    let rs = rotate(axis, angle).compose(&scale(s));
    translate(t).compose(&rs)
}

//
// Projections
//

/// Returns a right-handed perspective projection matrix.
///
/// `fov_degs` is the vertical field of view in degrees, `aspect` the ratio
/// of viewport width to height, and `near` and `far` the positive distances
/// of the near and far clipping planes from the camera. With
/// *f* = 1 / tan(fov / 2), the result is
/// ```text
/// ⎛ f/aspect  0   0                 0               ⎞
/// ⎜ 0         f   0                 0               ⎟
/// ⎜ 0         0   −(far+near)/Δ     −2·far·near/Δ   ⎟
/// ⎝ 0         0   −1                0               ⎠
/// ```
/// where Δ = far − near. View-space points with z = −near and z = −far
/// map to clip-space depths −1 and 1 after perspective division, and the
/// clip-space w equals −z.
///
/// No validation is done: if `far == near`, `aspect == 0`, or `fov_degs`
/// is not within (0, 360), the result contains infinities or NaNs. See
/// [`checked::perspective`][crate::math::checked::perspective].
#[cfg(feature = "fp")]
pub fn perspective(fov_degs: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    use core::f32::consts::PI;
    let fov = fov_degs * (PI / 180.0);
    let f = 1.0 / crate::math::float::f32::tan(fov / 2.0);
    let d = far - near;
    [
        [f / aspect, 0.0, 0.0, 0.0],
        [0.0, f, 0.0, 0.0],
        [0.0, 0.0, -(far + near) / d, -(2.0 * far * near) / d],
        [0.0, 0.0, -1.0, 0.0],
    ]
    .into()
}

/// Returns a right-handed orthographic projection matrix.
///
/// The box bounded by `lbn` (left, bottom, near) and `rtf` (right, top,
/// far) is mapped to the clip-space cube [-1, 1]³. As in [`perspective`],
/// `near` and `far` are positive distances in front of a camera looking
/// down the negative z axis.
///
/// No validation is done: if any component of `lbn` equals the
/// corresponding component of `rtf`, the result contains infinities or NaNs.
///
/// # Examples
/// ```
/// use bvec_core::math::{orthographic, vec3, vec4};
///
/// let m = orthographic(vec3(-2.0, -1.0, 1.0), vec3(2.0, 1.0, 5.0));
/// assert_eq!(m * vec4(2.0, -1.0, -1.0, 1.0), vec4(1.0, -1.0, -1.0, 1.0));
/// assert_eq!(m * vec4(0.0, 0.0, -5.0, 1.0), vec4(0.0, 0.0, 1.0, 1.0));
/// ```
pub fn orthographic(lbn: Vec3, rtf: Vec3) -> Mat4 {
    let [l, b, n] = lbn.0;
    let [r, t, f] = rtf.0;
    let (w, h, d) = (r - l, t - b, f - n);
    [
        [2.0 / w, 0.0, 0.0, -(r + l) / w],
        [0.0, 2.0 / h, 0.0, -(t + b) / h],
        [0.0, 0.0, -2.0 / d, -(f + n) / d],
        [0.0, 0.0, 0.0, 1.0],
    ]
    .into()
}

//
// Foreign trait impls
//

impl<const N: usize> Default for Matrix<N> {
    /// Returns the identity matrix.
    fn default() -> Self {
        Self::identity()
    }
}

impl<const N: usize> Debug for Matrix<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mat{}[", N)?;
        for row in &self.0 {
            writeln!(f, "    {:6.2?}", row.0)?;
        }
        write!(f, "]")
    }
}

impl<const N: usize> From<[[f32; N]; N]> for Matrix<N> {
    #[inline]
    fn from(els: [[f32; N]; N]) -> Self {
        Self::new(els)
    }
}

impl<const N: usize> From<Matrix<N>> for [[f32; N]; N] {
    #[inline]
    fn from(m: Matrix<N>) -> Self {
        m.to_array()
    }
}

impl From<Mat2> for Mat4 {
    fn from(m: Mat2) -> Self {
        m.to_mat4()
    }
}

impl From<Mat3> for Mat4 {
    fn from(m: Mat3) -> Self {
        m.to_mat4()
    }
}

impl<const N: usize> Index<usize> for Matrix<N> {
    type Output = Vector<N>;

    /// Returns a reference to the `i`th row of `self`.
    #[inline]
    fn index(&self, i: usize) -> &Vector<N> {
        &self.0[i]
    }
}

impl<const N: usize> IndexMut<usize> for Matrix<N> {
    /// Returns a mutable reference to the `i`th row of `self`.
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Vector<N> {
        &mut self.0[i]
    }
}

impl<const N: usize> MulAssign<f32> for Matrix<N> {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = self.scaled(rhs);
    }
}

impl<const N: usize> MulAssign<Matrix<N>> for Matrix<N> {
    /// Sets `self` to the product `self · rhs`.
    #[inline]
    fn mul_assign(&mut self, rhs: Matrix<N>) {
        *self = self.compose(&rhs);
    }
}

impl<const N: usize> Mul<Vector<N>> for Matrix<N> {
    type Output = Vector<N>;

    /// Returns the matrix–vector product `self · rhs`.
    #[inline]
    fn mul(self, rhs: Vector<N>) -> Vector<N> {
        self.apply(&rhs)
    }
}

impl_op!(Mul::mul, Matrix<N>, f32, *=);
impl_op!(Mul::mul, Matrix<N>, Matrix<N>, *=);

impl<const N: usize> ApproxEq<Self, f32> for Matrix<N> {
    fn approx_eq_eps(&self, other: &Self, eps: &f32) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
    fn relative_epsilon() -> f32 {
        f32::relative_epsilon()
    }
}

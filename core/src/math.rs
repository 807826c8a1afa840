//! Linear algebra for real-time rendering.
//!
//! Includes [vectors][vec] of dimension 2, 3, and 4, square [matrices][mat]
//! of the same dimensions, and the affine and projective transforms needed
//! to place objects in a scene and project them onto the screen.
//!
//! # Conventions
//!
//! Matrices are stored and indexed in **row-major** order: `m[i][j]` is the
//! element on row `i`, column `j`. Vectors are treated as *column* vectors
//! multiplied on the right, so `m * v` transforms `v` by `m`, and `a * b`
//! is the transform that first applies `b`, then `a`. Translation is
//! stored in the last column.
//!
//! Rotations follow the right-hand rule, and the projection matrices map a
//! right-handed view space, where the camera looks down the negative z axis,
//! to OpenGL-style clip space.
//!
//! Every function is pure and total: invalid inputs such as a zero-length
//! vector passed to [`normalize`][vec::Vector::normalize] produce NaNs or
//! infinities rather than errors. The [`checked`] module offers variants
//! that assert their preconditions in debug builds.

pub use {
    approx::ApproxEq,
    mat::{
        Mat2, Mat3, Mat4, Matrix, orthographic, scale, scale3, translate,
        translate3,
    },
    vec::{Vec2, Vec3, Vec4, Vector, splat, vec2, vec3, vec4},
};
#[cfg(feature = "fp")]
pub use mat::{perspective, rotate, rotate_x, rotate_y, rotate_z, trs};

/// Implements an operator trait in terms of an op-assign trait.
macro_rules! impl_op {
    ($trait:ident :: $method:ident, $self:ty, $rhs:ty, $op:tt) => {
        impl<const N: usize> $trait<$rhs> for $self {
            type Output = Self;
            #[inline]
            fn $method(mut self, rhs: $rhs) -> Self {
                self $op rhs;
                self
            }
        }
    };
}

pub mod approx;
pub mod checked;
pub mod float;
pub mod mat;
pub mod rand;
pub mod vec;

//! Core functionality of the `bvec` project.
//!
//! A small, dependency-light linear algebra library for real-time 3D
//! rendering. Includes 2-, 3-, and 4-vectors, square matrices of the same
//! dimensions, and builders for the usual model, view, and projection
//! transforms. All types are plain `Copy` values over `f32`, and every
//! operation is a pure function of its inputs.
//!
//! ```
//! use bvec_core::prelude::*;
//!
//! let model = translate3(0.0, 0.0, -5.0) * scale3(2.0, 2.0, 2.0);
//! let proj = perspective(60.0, 16.0 / 9.0, 0.1, 100.0);
//! let mvp = proj * model;
//!
//! let clip = mvp * vec4(0.0, 0.0, 0.0, 1.0);
//! assert_eq!(clip.w(), 5.0);
//! ```
//!
//! # Crate features
//!
//! * `std`:
//!   Makes available the floating-point functions not included in `core`:
//!   square roots and trigonometric functions. Enabled by default.
//!
//! * `libm`:
//!   Provides software implementations of floating-point functions via the
//!   [libm](https://crates.io/crates/libm) crate.
//!
//! * `mm`:
//!   Provides fast approximate implementations of floating-point functions
//!   via the [micromath](https://crates.io/crates/micromath) crate.
//!
//! Any of the three enables the `fp` feature, which gates the operations
//! that need square roots or trigonometry: vector length and normalization,
//! rotations, and perspective projection. Enabling `fp` on its own, without
//! a backend, is a compile error. With `default-features = false`
//! and none of the above, the crate is `no_std` and has no dependencies.

#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod math;

pub mod prelude {
    #[cfg(feature = "fp")]
    pub use crate::math::mat::{
        perspective, rotate, rotate_x, rotate_y, rotate_z, trs,
    };
    pub use crate::math::{
        approx::ApproxEq,
        mat::{
            Mat2, Mat3, Mat4, Matrix, orthographic, scale, scale3, translate,
            translate3,
        },
        vec::{Vec2, Vec3, Vec4, Vector, splat, vec2, vec3, vec4},
    };
}

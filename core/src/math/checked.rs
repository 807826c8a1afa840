//! Variants of the partial operations that check their preconditions.
//!
//! The functions in this module behave exactly like their unchecked
//! counterparts in release builds. In debug builds, they panic at the call
//! site if given an input for which the unchecked function would silently
//! produce NaNs or infinities.
//!
//! ```should_panic
//! # #[cfg(debug_assertions)] {
//! use bvec_core::math::{checked, vec3};
//!
//! // Zero-width view volume
//! let _ = checked::orthographic(vec3(1.0, 0.0, 1.0), vec3(1.0, 1.0, 9.0));
//! # }
//! # #[cfg(not(debug_assertions))] panic!();
//! ```

use crate::math::{Mat4, Vec3, mat};
#[cfg(feature = "fp")]
use crate::math::Vector;

/// Returns `v` scaled to unit length.
///
/// # Panics
/// In debug builds, if `v` has zero length or a non-finite component.
#[cfg(feature = "fp")]
#[track_caller]
pub fn normalize<const N: usize>(v: &Vector<N>) -> Vector<N> {
    let len_sqr = v.len_sqr();
    debug_assert!(
        0.0 < len_sqr && len_sqr.is_finite(),
        "cannot normalize vector {v:?}"
    );
    v.normalize()
}

/// Returns a matrix that rotates by `angle` radians about `axis`.
///
/// # Panics
/// In debug builds, if `axis` has zero length or `angle` is not finite.
#[cfg(feature = "fp")]
#[track_caller]
pub fn rotate(axis: Vec3, angle: f32) -> Mat4 {
    debug_assert!(0.0 < axis.len_sqr(), "zero rotation axis {axis:?}");
    debug_assert!(angle.is_finite(), "non-finite rotation angle {angle}");
    mat::rotate(axis, angle)
}

/// Returns a right-handed perspective projection matrix.
///
/// # Panics
/// In debug builds, if `fov_degs` is not within (0, 360), if `aspect` is
/// zero, or if `near` equals `far`.
#[cfg(feature = "fp")]
#[track_caller]
pub fn perspective(fov_degs: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    debug_assert!(
        0.0 < fov_degs && fov_degs < 360.0,
        "field of view must be within (0, 360) degrees, was {fov_degs}"
    );
    debug_assert!(aspect != 0.0, "aspect ratio cannot be zero");
    debug_assert!(near != far, "near and far planes must differ, were {near}");
    mat::perspective(fov_degs, aspect, near, far)
}

/// Returns a right-handed orthographic projection matrix.
///
/// # Panics
/// In debug builds, if any component of `lbn` equals the corresponding
/// component of `rtf`.
#[track_caller]
pub fn orthographic(lbn: Vec3, rtf: Vec3) -> Mat4 {
    debug_assert!(
        (0..3).all(|i| lbn[i] != rtf[i]),
        "degenerate view volume {lbn:?}..{rtf:?}"
    );
    mat::orthographic(lbn, rtf)
}

#[cfg(test)]
mod tests {
    use crate::math::vec3;

    use super::*;

    #[test]
    fn orthographic_matches_unchecked() {
        let (lbn, rtf) = (vec3(-1.0, -2.0, 0.5), vec3(3.0, 2.0, 10.0));
        assert_eq!(orthographic(lbn, rtf), mat::orthographic(lbn, rtf));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic = "degenerate view volume"]
    fn orthographic_zero_depth() {
        let _ = orthographic(vec3(-1.0, -1.0, 1.0), vec3(1.0, 1.0, 1.0));
    }

    #[cfg(feature = "fp")]
    mod fp {
        use crate::math::vec2;

        use super::*;

        #[test]
        fn valid_inputs_match_unchecked() {
            let v = vec2(3.0, -4.0);
            assert_eq!(normalize(&v), v.normalize());

            let axis = vec3(1.0, 2.0, 3.0);
            assert_eq!(rotate(axis, 0.5), mat::rotate(axis, 0.5));

            assert_eq!(
                perspective(60.0, 1.5, 0.1, 100.0),
                mat::perspective(60.0, 1.5, 0.1, 100.0)
            );
        }

        #[cfg(debug_assertions)]
        #[test]
        #[should_panic = "cannot normalize"]
        fn normalize_zero() {
            let _ = normalize(&crate::math::Vec2::zero());
        }

        #[cfg(debug_assertions)]
        #[test]
        #[should_panic = "cannot normalize"]
        fn normalize_nan() {
            let _ = normalize(&vec2(f32::NAN, 1.0));
        }

        #[cfg(debug_assertions)]
        #[test]
        #[should_panic = "zero rotation axis"]
        fn rotate_zero_axis() {
            let _ = rotate(Vec3::zero(), 1.0);
        }

        #[cfg(debug_assertions)]
        #[test]
        #[should_panic = "aspect ratio"]
        fn perspective_zero_aspect() {
            let _ = perspective(90.0, 0.0, 0.1, 100.0);
        }

        #[cfg(debug_assertions)]
        #[test]
        #[should_panic = "near and far"]
        fn perspective_near_equals_far() {
            let _ = perspective(90.0, 1.0, 1.0, 1.0);
        }

        #[cfg(debug_assertions)]
        #[test]
        #[should_panic = "field of view"]
        fn perspective_zero_fov() {
            let _ = perspective(0.0, 1.0, 0.1, 100.0);
        }
    }
}

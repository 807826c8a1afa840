//! Floating-point compatibility API.
//!
//! `sqrt` and the trigonometric functions are not available in `core`.
//! This module provides them using either `std`, the `libm` crate, or the
//! `micromath` crate, depending on which feature is enabled. Code in this
//! crate calls them through the [`f32`] alias, which resolves to whichever
//! backend is active:
//! ```
//! use bvec_core::math::float::f32;
//! assert_eq!(f32::sqrt(9.0), 3.0);
//! ```
//!
//! Without any of the features, a fast approximate square root is still
//! provided so that the crate can be used in a minimal `no_std` setting.

#[cfg(feature = "libm")]
pub mod libm {
    pub use libm::sqrtf as sqrt;

    pub use libm::cosf as cos;
    pub use libm::sinf as sin;
    pub use libm::tanf as tan;

    /// Returns the sine and cosine of `x`, in that order.
    #[inline]
    pub fn sin_cos(x: f32) -> (f32, f32) {
        libm::sincosf(x)
    }
}

#[cfg(feature = "mm")]
pub mod mm {
    use micromath::F32Ext as mm;

    /// Returns the approximate square root of `x`.
    #[inline]
    pub fn sqrt(x: f32) -> f32 {
        if !(x > 0.0) || x == f32::INFINITY {
            // Newton's method diverges or goes NaN on these
            return if x < 0.0 { f32::NAN } else { x };
        }
        let y = mm::sqrt(x);
        // Two rounds of Newton's method
        let y = 0.5 * (y + (x / y));
        0.5 * (y + (x / y))
    }
    #[inline]
    pub fn sin(x: f32) -> f32 {
        mm::sin(x)
    }
    #[inline]
    pub fn cos(x: f32) -> f32 {
        mm::cos(x)
    }
    #[inline]
    pub fn tan(x: f32) -> f32 {
        mm::tan(x)
    }
    /// Returns the approximate sine and cosine of `x`, in that order.
    #[inline]
    pub fn sin_cos(x: f32) -> (f32, f32) {
        (mm::sin(x), mm::cos(x))
    }
}

pub mod fallback {
    /// Returns the approximate square root of `x`.
    ///
    /// Unlike the other backends, returns a small positive number rather
    /// than zero for `sqrt(0.0)`.
    #[inline]
    pub fn sqrt(x: f32) -> f32 {
        1.0 / fast_recip_sqrt(x)
    }

    /// Returns a fast approximation of the reciprocal square root of a number.
    ///
    /// The relative error is below 0.2% for positive normal inputs. The
    /// result is unspecified for negative inputs.
    #[inline]
    pub fn fast_recip_sqrt(x: f32) -> f32 {
        // https://en.wikipedia.org/wiki/Fast_inverse_square_root
        const MAGIC: u32 = 0x5f37_5a86;
        let y = f32::from_bits(MAGIC.saturating_sub(x.to_bits() >> 1));
        // A round of Newton's method
        y * (1.5 - 0.5 * x * y * y)
    }
}

pub use fallback::fast_recip_sqrt;

#[cfg(all(
    feature = "fp",
    not(any(feature = "std", feature = "libm", feature = "mm"))
))]
compile_error!("feature `fp` requires one of `std`, `libm`, or `mm`");

#[cfg(feature = "std")]
#[allow(non_camel_case_types)]
pub type f32 = core::primitive::f32;

#[cfg(all(feature = "libm", not(feature = "std")))]
pub use libm as f32;

#[cfg(all(feature = "mm", not(feature = "std"), not(feature = "libm")))]
pub use mm as f32;

#[cfg(not(feature = "fp"))]
pub use fallback as f32;

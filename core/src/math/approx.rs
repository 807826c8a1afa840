//! Testing and asserting approximate equality.

use core::iter::zip;

/// Trait for testing approximate equality.
///
/// Every operation in this crate rounds its intermediate results to `f32`,
/// so values that are equal in exact arithmetic, such as `A·(B·C)` and
/// `(A·B)·C`, often differ in their last few bits. Comparing such values
/// should be done with a tolerance rather than with `==`.
///
/// The tolerance, "epsilon", is *relative*: two values `a` and `b` are
/// considered approximately equal if `|a - b| <= eps * max(|a|, 1)`. Below
/// magnitude 1 the comparison thus degrades gracefully into an absolute one.
/// Non-finite values are never approximately equal to anything, not even
/// themselves.
pub trait ApproxEq<Other: ?Sized = Self, Epsilon = Self> {
    /// Returns whether `self` and `other` are approximately equal.
    /// Uses the epsilon returned by [`Self::relative_epsilon`].
    fn approx_eq(&self, other: &Other) -> bool {
        self.approx_eq_eps(other, &Self::relative_epsilon())
    }

    /// Returns whether `self` and `other` are approximately equal,
    /// using the relative epsilon `rel_eps`.
    fn approx_eq_eps(&self, other: &Other, rel_eps: &Epsilon) -> bool;

    /// Returns the default relative epsilon of type `Epsilon`.
    fn relative_epsilon() -> Epsilon;
}

impl ApproxEq for f32 {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &Self) -> bool {
        let diff = (self - other).abs();
        diff <= *rel_eps * self.abs().max(1.0)
    }

    fn relative_epsilon() -> Self {
        // The micromath and fallback implementations are approximate
        if cfg!(any(feature = "std", feature = "libm")) {
            1e-6
        } else {
            5e-3
        }
    }
}

impl<E, T: Sized + ApproxEq<T, E>> ApproxEq<Self, E> for [T] {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &E) -> bool {
        self.len() == other.len()
            && zip(self, other).all(|(s, o)| s.approx_eq_eps(o, rel_eps))
    }
    fn relative_epsilon() -> E {
        T::relative_epsilon()
    }
}

impl<E, T: Sized + ApproxEq<T, E>, const N: usize> ApproxEq<Self, E>
    for [T; N]
{
    fn approx_eq_eps(&self, other: &Self, rel_eps: &E) -> bool {
        self.as_slice().approx_eq_eps(other, rel_eps)
    }
    fn relative_epsilon() -> E {
        T::relative_epsilon()
    }
}

/// Asserts that two values are approximately equal.
///
/// Requires that the left operand has an applicable [`ApproxEq`] impl
/// and that both operands impl `Debug` unless a custom message is given.
///
/// # Panics
///
/// If the given values are not approximately equal.
///
/// # Examples
/// `assert_eq` would fail, but `assert_approx_eq` passes:
/// ```
/// # use bvec_core::assert_approx_eq;
/// assert_ne!(0.1 + 0.2, 0.3);
/// assert_approx_eq!(0.1 + 0.2, 0.3);
/// ```
/// A custom epsilon can be given:
/// ```
/// # use bvec_core::assert_approx_eq;
/// assert_approx_eq!(100.0, 101.0, eps = 0.01);
/// ```
/// Vectors and matrices are compared component by component:
/// ```
/// # use bvec_core::{assert_approx_eq, math::vec::vec3};
/// assert_approx_eq!(vec3(0.1 + 0.2, 1.0, 0.0), vec3(0.3, 1.0, 0.0));
/// ```
/// Like `assert_eq`, this macro supports custom panic messages.
/// The epsilon, if present, must come before the format string.
/// ```should_panic
/// # use bvec_core::assert_approx_eq;
/// assert_approx_eq!(3.14f32, 3.0, eps = 0.001,
///     "{} is not a good approximation of pi!", 3.0);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr) => {
        match (&$a, &$b) {
            (a, b) => $crate::assert_approx_eq!(
                *a, *b,
                "assertion failed: `{a:?} ≅ {b:?}`"
            )
        }
    };
    ($a:expr, $b:expr, eps = $eps:literal) => {
        match (&$a, &$b) {
            (a, b) => $crate::assert_approx_eq!(
                *a, *b, eps = $eps,
                "assertion failed: `{a:?} ≅ {b:?}` (eps = {})", $eps
            )
        }
    };
    ($a:expr, $b:expr, $fmt:literal $(, $args:expr)*) => {{
        use $crate::math::approx::ApproxEq;
        match (&$a, &$b) {
            (a, b) => assert!(ApproxEq::approx_eq(a, b), $fmt $(, $args)*)
        }
    }};
    ($a:expr, $b:expr, eps = $eps:literal, $fmt:literal $(, $args:expr)*) => {{
        use $crate::math::approx::ApproxEq;
        match (&$a, &$b) {
            (a, b) => assert!(
                ApproxEq::approx_eq_eps(a, b, &$eps),
                $fmt $(, $args)*
            )
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::ApproxEq;

    #[test]
    fn zero_and_negative_zero() {
        assert_approx_eq!(0.0, 0.0);
        assert_approx_eq!(-0.0, 0.0);
        assert_approx_eq!(0.0, -0.0);
    }

    #[test]
    fn small_differences() {
        assert_approx_eq!(0.0, 0.0000001);
        assert_approx_eq!(-0.0000001, 0.0);
        assert_approx_eq!(0.9999999, 1.0);
        assert_approx_eq!(-1.0, -1.0000001);
        assert_approx_eq!(1.0e10, 1.0000001e10);
    }

    #[test]
    fn custom_epsilon() {
        assert_approx_eq!(0.0, 0.001, eps = 0.01);
        assert_approx_eq!(1.0, 0.999, eps = 0.01);
        assert_approx_eq!(100.0, 99.9, eps = 0.01);
    }

    #[test]
    fn arrays() {
        assert_approx_eq!([1.0, 0.1 + 0.2], [1.0, 0.3]);
        assert!(![1.0f32, 2.0].approx_eq(&[1.0, 2.1]));
        assert!(![1.0f32, 2.0][..].approx_eq(&[1.0][..]));
    }

    #[test]
    fn non_finite_never_approx_eq() {
        assert!(!f32::NAN.approx_eq(&f32::NAN));
        assert!(!f32::INFINITY.approx_eq(&f32::INFINITY));
        assert!(!1.0f32.approx_eq(&f32::NAN));
    }

    #[test]
    #[should_panic]
    fn zero_not_approx_eq_to_one() {
        assert_approx_eq!(0.0, 1.0);
    }

    #[test]
    #[should_panic]
    fn one_not_approx_eq_to_1_0001() {
        assert_approx_eq!(1.0, 1.0001, eps = 1e-6);
    }
}

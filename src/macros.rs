//! Utility macros.

/// Implements a binary operator for all four combinations of owned and
/// borrowed operands. The body is written once in terms of references.
macro_rules! impl_binop {
    ($op:ident, $method:ident, $tl:ty, $tr:ty, $to:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl<'a, F: $crate::num::Float> ::std::ops::$op<&'a $tr> for &'a $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl<F: $crate::num::Float> ::std::ops::$op<$tr> for &$tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                self.$method(&rhs)
            }
        }

        impl<'a, F: $crate::num::Float> ::std::ops::$op<&'a $tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                (&self).$method(rhs)
            }
        }

        impl<F: $crate::num::Float> ::std::ops::$op<$tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                (&self).$method(&rhs)
            }
        }
    };
}

/// Implements `scalar * value` for the concrete scalar types, since the
/// left-hand side cannot be a generic parameter.
macro_rules! impl_scalar_lhs_mul {
    ($t:ident) => {
        impl_scalar_lhs_mul!($t, f32);
        impl_scalar_lhs_mul!($t, f64);
    };
    ($t:ident, $f:ty) => {
        impl ::std::ops::Mul<$t<$f>> for $f {
            type Output = $t<$f>;

            #[inline]
            fn mul(self, rhs: $t<$f>) -> Self::Output {
                rhs * self
            }
        }

        impl ::std::ops::Mul<&$t<$f>> for $f {
            type Output = $t<$f>;

            #[inline]
            fn mul(self, rhs: &$t<$f>) -> Self::Output {
                rhs * self
            }
        }
    };
}

macro_rules! impl_unary_op {
    ($op:ident, $method:ident, $t:ty, $to:ty, |$this:ident| $body:block) => {
        impl<F: $crate::num::Float> ::std::ops::$op for &$t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                let $this = self;
                $body
            }
        }

        impl<F: $crate::num::Float> ::std::ops::$op for $t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                (&self).$method()
            }
        }
    };
}

macro_rules! impl_binop_assign {
    ($op:ident, $method:ident, $tl:ty, $tr:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl<F: $crate::num::Float> ::std::ops::$op<&$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: &$tr) {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl<F: $crate::num::Float> ::std::ops::$op<$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: $tr) {
                self.$method(&rhs);
            }
        }
    };
}

/// Implements componentwise `approx` comparison for a type exposing its
/// components through `as_slice`. The default epsilon is the precision's
/// [`EQUALITY_EPSILON`](crate::num::Float::EQUALITY_EPSILON).
macro_rules! impl_componentwise_approx_eq {
    ($t:ty) => {
        impl<F: $crate::num::Float> ::approx::AbsDiffEq for $t {
            type Epsilon = F;

            fn default_epsilon() -> F {
                F::EQUALITY_EPSILON
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: F) -> bool {
                self.as_slice()
                    .iter()
                    .zip(other.as_slice())
                    .all(|(a, b)| a.abs_diff_eq(b, epsilon))
            }
        }

        impl<F: $crate::num::Float> ::approx::RelativeEq for $t {
            fn default_max_relative() -> F {
                F::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: F, max_relative: F) -> bool {
                self.as_slice()
                    .iter()
                    .zip(other.as_slice())
                    .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
            }
        }

        impl<F: $crate::num::Float> $t {
            /// Whether every component differs from the corresponding component
            /// of `other` by at most the default epsilon.
            #[inline]
            pub fn equals(&self, other: &Self) -> bool {
                ::approx::AbsDiffEq::abs_diff_eq(self, other, F::EQUALITY_EPSILON)
            }

            /// Whether every component differs from the corresponding component
            /// of `other` by at most `epsilon`.
            #[inline]
            pub fn equals_with_epsilon(&self, other: &Self, epsilon: F) -> bool {
                ::approx::AbsDiffEq::abs_diff_eq(self, other, epsilon)
            }
        }
    };
}

/// Marks a `#[repr(transparent)]` wrapper around an array of scalars as
/// plain old data.
macro_rules! impl_pod {
    ($t:ident) => {
        // SAFETY: `$t` is `repr(transparent)` over `[F; N]`, which is `Pod`
        // whenever `F` is.
        unsafe impl<F: ::bytemuck::Pod> ::bytemuck::Zeroable for $t<F> {}
        unsafe impl<F: ::bytemuck::Pod> ::bytemuck::Pod for $t<F> {}
    };
}

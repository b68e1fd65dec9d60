use super::Complex;
use crate::enums::Pole;
use num_complex::Complex64;
use num_traits::{One, Zero};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

// Every operator forwards to the pole-aware inherent method of the same name,
// so `a + b` and `a.add(b)` agree on ∞ and NaN.
macro_rules! impl_math_op(
    ($trt:ident, $mth:ident, $assign_trt:ident, $assign_mth:ident) => (
        impl $trt for Complex {
            type Output = Complex;

            fn $mth(self, other: Complex) -> Complex {
                Complex::$mth(self, other)
            }
        }

        impl $trt<&Complex> for Complex {
            type Output = Complex;

            fn $mth(self, other: &Complex) -> Complex {
                Complex::$mth(self, *other)
            }
        }

        impl $trt<Complex> for &Complex {
            type Output = Complex;

            fn $mth(self, other: Complex) -> Complex {
                Complex::$mth(*self, other)
            }
        }

        impl $trt<&Complex> for &Complex {
            type Output = Complex;

            fn $mth(self, other: &Complex) -> Complex {
                Complex::$mth(*self, *other)
            }
        }

        impl $trt<f64> for Complex {
            type Output = Complex;

            fn $mth(self, other: f64) -> Complex {
                Complex::$mth(self, other)
            }
        }

        impl $trt<f64> for &Complex {
            type Output = Complex;

            fn $mth(self, other: f64) -> Complex {
                Complex::$mth(*self, other)
            }
        }

        impl $trt<Complex> for f64 {
            type Output = Complex;

            fn $mth(self, other: Complex) -> Complex {
                Complex::$mth(Complex::from(self), other)
            }
        }

        impl $trt<&Complex> for f64 {
            type Output = Complex;

            fn $mth(self, other: &Complex) -> Complex {
                Complex::$mth(Complex::from(self), *other)
            }
        }

        impl $trt<Complex64> for Complex {
            type Output = Complex;

            fn $mth(self, other: Complex64) -> Complex {
                Complex::$mth(self, other)
            }
        }

        impl $trt<Complex> for Complex64 {
            type Output = Complex;

            fn $mth(self, other: Complex) -> Complex {
                Complex::$mth(Complex::from(self), other)
            }
        }

        impl $assign_trt for Complex {
            fn $assign_mth(&mut self, other: Complex) {
                *self = Complex::$mth(*self, other);
            }
        }

        impl $assign_trt<&Complex> for Complex {
            fn $assign_mth(&mut self, other: &Complex) {
                *self = Complex::$mth(*self, *other);
            }
        }

        impl $assign_trt<f64> for Complex {
            fn $assign_mth(&mut self, other: f64) {
                *self = Complex::$mth(*self, other);
            }
        }
    );
);

impl_math_op!(Add, add, AddAssign, add_assign);
impl_math_op!(Sub, sub, SubAssign, sub_assign);
impl_math_op!(Mul, mul, MulAssign, mul_assign);
impl_math_op!(Div, div, DivAssign, div_assign);

impl Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        Complex::neg(self)
    }
}

impl Neg for &Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        Complex::neg(*self)
    }
}

// Implement Zero trait
impl Zero for Complex {
    fn zero() -> Self {
        Complex::ZERO
    }

    fn is_zero(&self) -> bool {
        self.pole() == Pole::Zero
    }
}

// Implement One trait
impl One for Complex {
    fn one() -> Self {
        Complex::ONE
    }

    fn is_one(&self) -> bool {
        *self == Complex::ONE
    }
}

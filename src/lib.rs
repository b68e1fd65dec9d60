pub mod complex;
pub mod consts;
pub mod enums;
pub mod error;
pub mod input;
pub mod math;
pub mod prelude;

pub use complex::Complex;
pub use error::{ComplexError, Result};

/// Create a **[`Complex`]** from real and imaginary parts.
///
/// ```
/// use cxkit::complex;
/// let z = complex!(3, -4);
///
/// assert_eq!(z.abs(), 5.0);
/// assert_eq!(complex!(2.5), cxkit::Complex::new(2.5, 0.0));
/// ```
///
/// Each part is cast with `as f64`, so integer literals are accepted.
/// `complex!()` is zero.
///
#[macro_export]
macro_rules! complex {
    () => {
        $crate::complex::Complex::ZERO
    };
    ($re:expr) => {
        $crate::complex::Complex::new(($re) as f64, 0.0)
    };
    ($re:expr, $im:expr $(,)?) => {
        $crate::complex::Complex::new(($re) as f64, ($im) as f64)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complex_macro() {
        assert_eq!(complex!(), Complex::ZERO);
        assert_eq!(complex!(1.5), Complex::new(1.5, 0.0));
        assert_eq!(complex!(1, -2), Complex::new(1.0, -2.0));
        assert_eq!(complex!(0.5, 2.0,), Complex::new(0.5, 2.0));

        let re = 3.0;
        assert_eq!(complex!(re * 2.0, re), Complex::new(6.0, 3.0));
    }
}

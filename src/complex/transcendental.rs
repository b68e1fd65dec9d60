use super::Complex;
use crate::math::{cosh, cosm1, log_hypot, sinh};

// Closed forms in terms of the real components. None of these pre-check the
// poles, overflowing cosh/sinh turn into ∞ or NaN components on their own.
// Arguments on the axis that keeps one component at zero skip the ∞·0 term.
impl Complex {
    /// Calculate the exponential function
    pub fn exp(self) -> Complex {
        // real axis: e^re·sin(0) is NaN once e^re overflows
        if self.im == 0.0 {
            return Complex::new(self.re.exp(), 0.0);
        }
        let exp_re = self.re.exp();
        Complex::new(exp_re * self.im.cos(), exp_re * self.im.sin())
    }

    /// `exp(z) - 1`, accurate when `z` is close to zero.
    pub fn expm1(self) -> Complex {
        // exp(a + ib) - 1 = expm1(a)·cos(b) + cosm1(b) + i·exp(a)·sin(b)
        let (re, im) = (self.re, self.im);
        if im == 0.0 {
            return Complex::new(re.exp_m1(), 0.0);
        }
        Complex::new(
            re.exp_m1() * im.cos() + cosm1(im),
            re.exp() * im.sin(),
        )
    }

    /// Natural logarithm, principal branch with `im` in (-π, π]
    pub fn log(self) -> Complex {
        Complex::new(log_hypot(self.re, self.im), self.im.atan2(self.re))
    }

    // ========== Circular functions ==========

    pub fn sin(self) -> Complex {
        let (re, im) = (self.re, self.im);
        if re == 0.0 {
            return Complex::new(0.0, sinh(im));
        }
        Complex::new(re.sin() * cosh(im), re.cos() * sinh(im))
    }

    pub fn cos(self) -> Complex {
        let (re, im) = (self.re, self.im);
        if re == 0.0 {
            return Complex::new(cosh(im), 0.0);
        }
        Complex::new(re.cos() * cosh(im), -re.sin() * sinh(im))
    }

    pub fn tan(self) -> Complex {
        let a = 2.0 * self.re;
        let b = 2.0 * self.im;
        let d = a.cos() + cosh(b);

        Complex::new(a.sin() / d, sinh(b) / d)
    }

    pub fn cot(self) -> Complex {
        let a = 2.0 * self.re;
        let b = 2.0 * self.im;
        let d = a.cos() - cosh(b);

        Complex::new(-a.sin() / d, sinh(b) / d)
    }

    pub fn sec(self) -> Complex {
        let (re, im) = (self.re, self.im);
        let d = 0.5 * cosh(2.0 * im) + 0.5 * (2.0 * re).cos();

        Complex::new(re.cos() * cosh(im) / d, re.sin() * sinh(im) / d)
    }

    pub fn csc(self) -> Complex {
        let (re, im) = (self.re, self.im);
        let d = 0.5 * cosh(2.0 * im) - 0.5 * (2.0 * re).cos();

        Complex::new(re.sin() * cosh(im) / d, -re.cos() * sinh(im) / d)
    }

    // ========== Hyperbolic functions ==========

    pub fn sinh(self) -> Complex {
        let (re, im) = (self.re, self.im);
        if im == 0.0 {
            return Complex::new(sinh(re), 0.0);
        }
        Complex::new(sinh(re) * im.cos(), cosh(re) * im.sin())
    }

    pub fn cosh(self) -> Complex {
        let (re, im) = (self.re, self.im);
        if im == 0.0 {
            return Complex::new(cosh(re), 0.0);
        }
        Complex::new(cosh(re) * im.cos(), sinh(re) * im.sin())
    }

    pub fn tanh(self) -> Complex {
        let a = 2.0 * self.re;
        let b = 2.0 * self.im;
        let d = cosh(a) + b.cos();

        Complex::new(sinh(a) / d, b.sin() / d)
    }

    pub fn coth(self) -> Complex {
        let a = 2.0 * self.re;
        let b = 2.0 * self.im;
        let d = cosh(a) - b.cos();

        Complex::new(sinh(a) / d, -b.sin() / d)
    }

    pub fn sech(self) -> Complex {
        let (re, im) = (self.re, self.im);
        let d = (2.0 * im).cos() + cosh(2.0 * re);

        Complex::new(
            2.0 * cosh(re) * im.cos() / d,
            -2.0 * sinh(re) * im.sin() / d,
        )
    }

    pub fn csch(self) -> Complex {
        let (re, im) = (self.re, self.im);
        let d = (2.0 * im).cos() - cosh(2.0 * re);

        Complex::new(
            -2.0 * sinh(re) * im.cos() / d,
            2.0 * cosh(re) * im.sin() / d,
        )
    }
}

use super::Complex;
use crate::math::log_hypot;
use std::f64::consts::FRAC_PI_2;

/// `1/z` by components, with a vanishing `re² + im²` mapped to signed
/// infinities instead of NaN.
fn reciprocal_or_pole(re: f64, im: f64) -> Complex {
    let d = re * re + im * im;
    if d != 0.0 {
        Complex::new(re / d, -im / d)
    } else {
        Complex::new(
            if re != 0.0 { re / 0.0 } else { 0.0 },
            if im != 0.0 { -im / 0.0 } else { 0.0 },
        )
    }
}

// Principal branches. The reciprocal functions go through reciprocal_or_pole
// and the hyperbolic ones through a quarter-turn of the circular ones.
impl Complex {
    /// `log(iz + sqrt(1 - z²))` components, shared by asin and acos
    fn asin_log(self) -> Complex {
        let (a, b) = (self.re, self.im);
        let t1 = Complex::new(b * b - a * a + 1.0, -2.0 * a * b).sqrt();
        Complex::new(t1.re - b, t1.im + a).log()
    }

    pub fn asin(self) -> Complex {
        let t2 = self.asin_log();
        Complex::new(t2.im, -t2.re)
    }

    pub fn acos(self) -> Complex {
        let t2 = self.asin_log();
        Complex::new(FRAC_PI_2 - t2.im, t2.re)
    }

    /// Arc tangent, `±i` map to `±i∞`
    pub fn atan(self) -> Complex {
        let (a, b) = (self.re, self.im);

        if a == 0.0 {
            if b == 1.0 {
                return Complex::new(0.0, f64::INFINITY);
            }
            if b == -1.0 {
                return Complex::new(0.0, f64::NEG_INFINITY);
            }
        }

        let d = a * a + (1.0 - b) * (1.0 - b);
        let t1 = Complex::new((1.0 - b * b - a * a) / d, -2.0 * a / d).log();

        Complex::new(-0.5 * t1.im, 0.5 * t1.re)
    }

    pub fn acot(self) -> Complex {
        if self.im == 0.0 {
            return Complex::new(1.0_f64.atan2(self.re), 0.0);
        }
        reciprocal_or_pole(self.re, self.im).atan()
    }

    pub fn asec(self) -> Complex {
        if self.re == 0.0 && self.im == 0.0 {
            return Complex::new(0.0, f64::INFINITY);
        }
        reciprocal_or_pole(self.re, self.im).acos()
    }

    pub fn acsc(self) -> Complex {
        if self.re == 0.0 && self.im == 0.0 {
            return Complex::new(FRAC_PI_2, f64::INFINITY);
        }
        reciprocal_or_pole(self.re, self.im).asin()
    }

    /// `asinh(z) = -i·asin(iz)`
    pub fn asinh(self) -> Complex {
        let rotated = Complex::new(self.im, -self.re);
        let res = rotated.asin();
        Complex::new(-res.im, res.re)
    }

    /// Rotated acos, choosing the quarter-turn that keeps `re >= 0`
    pub fn acosh(self) -> Complex {
        let res = self.acos();
        if res.im <= 0.0 {
            Complex::new(-res.im, res.re)
        } else {
            Complex::new(res.im, -res.re)
        }
    }

    /// `atanh(z) = log((1 + z) / (1 - z)) / 2`
    pub fn atanh(self) -> Complex {
        let (a, b) = (self.re, self.im);

        // real arguments beyond 1 land on the lower side of the cut
        let no_im = a > 1.0 && b == 0.0;
        let one_minus = 1.0 - a;
        let one_plus = 1.0 + a;
        let d = one_minus * one_minus + b * b;

        let x = if d != 0.0 {
            Complex::new(
                (one_plus * one_minus - b * b) / d,
                (b * one_minus + one_plus * b) / d,
            )
        } else {
            Complex::new(
                if a != -1.0 { a / 0.0 } else { 0.0 },
                if b != 0.0 { b / 0.0 } else { 0.0 },
            )
        };

        let im = x.im.atan2(x.re) / 2.0;
        Complex::new(log_hypot(x.re, x.im) / 2.0, if no_im { -im } else { im })
    }

    pub fn acoth(self) -> Complex {
        if self.re == 0.0 && self.im == 0.0 {
            return Complex::new(0.0, FRAC_PI_2);
        }
        reciprocal_or_pole(self.re, self.im).atanh()
    }

    /// `acsch(z) = asinh(1/z)`, `acsch(0) = ∞` on the real axis
    pub fn acsch(self) -> Complex {
        if self.im == 0.0 {
            let re = if self.re != 0.0 {
                (1.0 / self.re).asinh()
            } else {
                f64::INFINITY
            };
            return Complex::new(re, 0.0);
        }
        reciprocal_or_pole(self.re, self.im).asinh()
    }

    pub fn asech(self) -> Complex {
        if self.is_zero() {
            return Complex::INFINITY;
        }
        reciprocal_or_pole(self.re, self.im).acosh()
    }
}

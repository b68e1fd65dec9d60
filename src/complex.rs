use crate::consts;
use crate::enums::{Pole, Rounding};
use crate::error::Result;
use crate::input::{self, Input};
use crate::math::{hypot, log_hypot};
use serde::{Deserialize, Serialize};
use std::fmt;

const HALF_MAX: f64 = f64::MAX / 2.0;

mod inverse;
mod ops;
mod transcendental;

/// A complex number on the extended complex plane.
///
/// Every finite (re, im) pair is an ordinary value. Any pair with an infinite
/// component (and no NaN) is the single point at infinity, and any pair with
/// a NaN component is NaN. Operations never mutate their receiver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

#[allow(clippy::should_implement_trait)]
impl Complex {
    pub const ZERO: Complex = Complex::new(0.0, 0.0);
    pub const ONE: Complex = Complex::new(1.0, 0.0);
    pub const I: Complex = Complex::new(0.0, 1.0);
    pub const PI: Complex = Complex::new(std::f64::consts::PI, 0.0);
    pub const E: Complex = Complex::new(std::f64::consts::E, 0.0);
    pub const INFINITY: Complex = Complex::new(f64::INFINITY, f64::INFINITY);
    pub const NAN: Complex = Complex::new(f64::NAN, f64::NAN);
    pub const EPSILON: f64 = consts::EPSILON;

    /// Create a new complex number from real and imaginary parts
    pub const fn new(re: f64, im: f64) -> Self {
        Complex { re, im }
    }

    /// Create a new complex number from a magnitude and angle in radians
    pub fn from_polar(r: f64, phi: f64) -> Self {
        Complex::from(input::Polar::new(r, phi))
    }

    /// Parse the textual form, e.g. `"3 - 4i"`
    pub fn parse(text: &str) -> Result<Self> {
        Complex::try_from(Input::from(text))
    }

    /// Build from any input shape, reporting malformed shapes as errors
    pub fn from_input(input: Input) -> Result<Self> {
        Complex::try_from(input)
    }

    // ========== Classification ==========

    pub fn pole(&self) -> Pole {
        Pole::classify(self.re, self.im)
    }

    /// Check if either component is NaN
    pub fn is_nan(&self) -> bool {
        self.pole() == Pole::NaN
    }

    /// Check if the value sits at the zero pole
    pub fn is_zero(&self) -> bool {
        self.pole() == Pole::Zero
    }

    /// Check if both components are finite
    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// Check if the value sits at the infinity pole
    pub fn is_infinite(&self) -> bool {
        self.pole() == Pole::Infinite
    }

    // ========== Magnitude and phase ==========

    /// Get the magnitude (absolute value) of the complex number
    pub fn abs(&self) -> f64 {
        hypot(self.re, self.im)
    }

    /// Get the argument (phase angle) of the complex number
    pub fn arg(&self) -> f64 {
        self.im.atan2(self.re)
    }

    /// Unit-magnitude value with the same phase. NaN for zero.
    pub fn sign(self) -> Complex {
        let abs = self.abs();
        Complex::new(self.re / abs, self.im / abs)
    }

    // ========== Arithmetic ==========

    pub fn add(self, z: impl Into<Complex>) -> Complex {
        let z = z.into();

        match (self.pole(), z.pole()) {
            (Pole::NaN, _) | (_, Pole::NaN) => Complex::NAN,
            (Pole::Infinite, Pole::Infinite) => Complex::NAN,
            (Pole::Infinite, _) | (_, Pole::Infinite) => Complex::INFINITY,
            _ => Complex::new(self.re + z.re, self.im + z.im),
        }
    }

    pub fn sub(self, z: impl Into<Complex>) -> Complex {
        let z = z.into();

        match (self.pole(), z.pole()) {
            (Pole::NaN, _) | (_, Pole::NaN) => Complex::NAN,
            (Pole::Infinite, Pole::Infinite) => Complex::NAN,
            (Pole::Infinite, _) | (_, Pole::Infinite) => Complex::INFINITY,
            _ => Complex::new(self.re - z.re, self.im - z.im),
        }
    }

    pub fn mul(self, z: impl Into<Complex>) -> Complex {
        let z = z.into();

        match (self.pole(), z.pole()) {
            (Pole::NaN, _) | (_, Pole::NaN) => Complex::NAN,
            (Pole::Infinite, Pole::Zero) | (Pole::Zero, Pole::Infinite) => Complex::NAN,
            (Pole::Infinite, _) | (_, Pole::Infinite) => Complex::INFINITY,
            _ if self.im == 0.0 && z.im == 0.0 => Complex::new(self.re * z.re, 0.0),
            _ => Complex::new(
                self.re * z.re - self.im * z.im,
                self.re * z.im + self.im * z.re,
            ),
        }
    }

    /// Division scaled by the larger divisor component (Smith's algorithm).
    ///
    /// Divisors with a component above `f64::MAX / 2` halve both operands
    /// first, so the scaled denominator stays finite.
    pub fn div(self, z: impl Into<Complex>) -> Complex {
        let z = z.into();

        match (self.pole(), z.pole()) {
            (Pole::NaN, _) | (_, Pole::NaN) => Complex::NAN,
            (Pole::Zero, Pole::Zero) | (Pole::Infinite, Pole::Infinite) => Complex::NAN,
            (Pole::Infinite, _) | (_, Pole::Zero) => Complex::INFINITY,
            (Pole::Zero, _) | (_, Pole::Infinite) => Complex::ZERO,
            _ => {
                let (mut a, mut b) = (self.re, self.im);
                let (mut c, mut d) = (z.re, z.im);

                if d == 0.0 {
                    return Complex::new(a / c, b / c);
                }

                // powers of two keep the quotient exact
                if c.abs() > HALF_MAX || d.abs() > HALF_MAX {
                    a *= 0.5;
                    b *= 0.5;
                    c *= 0.5;
                    d *= 0.5;
                }

                if c.abs() < d.abs() {
                    let x = c / d;
                    let t = c * x + d;
                    Complex::new((a * x + b) / t, (b * x - a) / t)
                } else {
                    let x = d / c;
                    let t = d * x + c;
                    Complex::new((a + b * x) / t, (b - a * x) / t)
                }
            }
        }
    }

    /// Raise to a complex power.
    ///
    /// `z^0` is one for every base, `0^w` is zero when `re(w) > 0` and
    /// `im(w) >= 0`. Real powers of positive reals and of pure imaginaries
    /// take exact shortcuts, everything else goes through
    /// `exp(w · log(z))` in polar form.
    pub fn pow(self, z: impl Into<Complex>) -> Complex {
        let z = z.into();
        let (re, im) = (self.re, self.im);

        if z.pole() == Pole::Zero {
            return Complex::ONE;
        }

        if z.im == 0.0 {
            if im == 0.0 && re > 0.0 {
                return Complex::new(re.powf(z.re), 0.0);
            }

            if re == 0.0 {
                // i^n cycles with period four
                let quadrant = (z.re % 4.0 + 4.0) % 4.0;
                let p = im.powf(z.re);
                if quadrant == 0.0 {
                    return Complex::new(p, 0.0);
                } else if quadrant == 1.0 {
                    return Complex::new(0.0, p);
                } else if quadrant == 2.0 {
                    return Complex::new(-p, 0.0);
                } else if quadrant == 3.0 {
                    return Complex::new(0.0, -p);
                }
            }
        }

        if self.pole() == Pole::Zero && z.re > 0.0 && z.im >= 0.0 {
            return Complex::ZERO;
        }

        let arg = im.atan2(re);
        let loh = log_hypot(re, im);

        let mag = (z.re * loh - z.im * arg).exp();
        let phase = z.im * loh + z.re * arg;

        Complex::new(mag * phase.cos(), mag * phase.sin())
    }

    /// Principal square root, the real part is never negative.
    pub fn sqrt(self) -> Complex {
        let (re, im) = (self.re, self.im);
        let r = self.abs();

        let a = if re >= 0.0 {
            if im == 0.0 {
                return Complex::new(re.sqrt(), 0.0);
            }
            0.5 * (2.0 * (r + re)).sqrt()
        } else {
            im.abs() / (2.0 * (r - re)).sqrt()
        };

        let b = if re <= 0.0 {
            0.5 * (2.0 * (r - re)).sqrt()
        } else {
            im.abs() / (2.0 * (r + re)).sqrt()
        };

        Complex::new(a, if im < 0.0 { -b } else { b })
    }

    /// 1/z, with 1/0 = ∞ and 1/∞ = 0
    pub fn inverse(self) -> Complex {
        match self.pole() {
            Pole::NaN => Complex::NAN,
            Pole::Zero => Complex::INFINITY,
            Pole::Infinite => Complex::ZERO,
            Pole::Finite => {
                let d = self.re * self.re + self.im * self.im;
                Complex::new(self.re / d, -self.im / d)
            }
        }
    }

    /// Get the complex conjugate
    pub fn conjugate(self) -> Complex {
        Complex::new(self.re, -self.im)
    }

    pub fn neg(self) -> Complex {
        Complex::new(-self.re, -self.im)
    }

    // ========== Rounding ==========

    pub fn ceil(self, places: i32) -> Complex {
        self.round_with(Rounding::Ceil, places)
    }

    pub fn floor(self, places: i32) -> Complex {
        self.round_with(Rounding::Floor, places)
    }

    /// Round each component to `places` decimals, ties toward +∞
    pub fn round(self, places: i32) -> Complex {
        self.round_with(Rounding::Round, places)
    }

    pub fn round_with(self, mode: Rounding, places: i32) -> Complex {
        Complex::new(mode.apply(self.re, places), mode.apply(self.im, places))
    }

    // ========== Comparison and presentation ==========

    /// Componentwise comparison within `EPSILON`.
    ///
    /// This is a numeric tolerance check, so `INFINITY.equals(INFINITY)` is
    /// false and NaN never equals anything.
    pub fn equals(self, z: impl Into<Complex>) -> bool {
        self.equals_within(z, consts::EPSILON)
    }

    pub fn equals_within(self, z: impl Into<Complex>, tolerance: f64) -> bool {
        let z = z.into();
        (z.re - self.re).abs() <= tolerance && (z.im - self.im).abs() <= tolerance
    }

    pub fn to_vector(self) -> [f64; 2] {
        [self.re, self.im]
    }

    /// The real value, or `None` when the imaginary part is nonzero
    pub fn value_of(self) -> Option<f64> {
        if self.im == 0.0 {
            Some(self.re)
        } else {
            None
        }
    }
}

fn snap(x: f64) -> f64 {
    if x.abs() < consts::EPSILON {
        0.0
    } else {
        x
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.pole() {
            Pole::NaN => return write!(f, "NaN"),
            Pole::Infinite => return write!(f, "Infinity"),
            _ => {}
        }

        let re = snap(self.re);
        let mut im = snap(self.im);

        if im == 0.0 {
            return write!(f, "{}", re);
        }

        if re != 0.0 {
            write!(f, "{} ", re)?;
            if im < 0.0 {
                im = -im;
                write!(f, "- ")?;
            } else {
                write!(f, "+ ")?;
            }
        } else if im < 0.0 {
            im = -im;
            write!(f, "-")?;
        }

        if im != 1.0 {
            write!(f, "{}", im)?;
        }
        write!(f, "i")
    }
}

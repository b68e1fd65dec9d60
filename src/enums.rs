use crate::math::round_half_up;
use core::fmt;
use simple_error::{bail, SimpleError};

/// Position of a value on the extended complex plane.
///
/// Classification order is NaN, then Infinite, then Zero, otherwise Finite,
/// so every value lands in exactly one variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pole {
    NaN,
    Infinite,
    Zero,
    Finite,
}

impl Pole {
    pub fn classify(re: f64, im: f64) -> Pole {
        if re.is_nan() || im.is_nan() {
            Pole::NaN
        } else if !(re.is_finite() && im.is_finite()) {
            Pole::Infinite
        } else if re == 0.0 && im == 0.0 {
            Pole::Zero
        } else {
            Pole::Finite
        }
    }

    pub fn to_str(&self) -> &str {
        match self {
            Pole::NaN => "NaN",
            Pole::Infinite => "Infinite",
            Pole::Zero => "Zero",
            Pole::Finite => "Finite",
        }
    }
}

impl fmt::Display for Pole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

/// Componentwise rounding mode used by `Complex::round_with`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rounding {
    Ceil,
    Floor,
    Round,
}

impl Rounding {
    // Convert text from a string into Rounding type
    pub fn from_str(val: &str) -> Result<Rounding, SimpleError> {
        match val.to_lowercase().as_str() {
            "ceil" | "up" => Ok(Rounding::Ceil),
            "floor" | "down" => Ok(Rounding::Floor),
            "round" | "nearest" => Ok(Rounding::Round),
            _ => bail!("string not recognized"),
        }
    }

    pub fn to_str(&self) -> &str {
        match self {
            Rounding::Ceil => "ceil",
            Rounding::Floor => "floor",
            Rounding::Round => "round",
        }
    }

    /// Round `x` at a resolution of `10^-places`.
    pub fn apply(&self, x: f64, places: i32) -> f64 {
        let scale = 10_f64.powi(places);
        let scaled = x * scale;
        let rounded = match self {
            Rounding::Ceil => scaled.ceil(),
            Rounding::Floor => scaled.floor(),
            Rounding::Round => round_half_up(scaled),
        };
        rounded / scale
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_pole_classify() {
        assert_eq!(Pole::classify(f64::NAN, f64::INFINITY), Pole::NaN);
        assert_eq!(Pole::classify(0.0, f64::NAN), Pole::NaN);
        assert_eq!(Pole::classify(f64::NEG_INFINITY, 0.0), Pole::Infinite);
        assert_eq!(Pole::classify(1.0, f64::INFINITY), Pole::Infinite);
        assert_eq!(Pole::classify(0.0, 0.0), Pole::Zero);
        assert_eq!(Pole::classify(-0.0, 0.0), Pole::Zero);
        assert_eq!(Pole::classify(0.0, 1e-300), Pole::Finite);
        assert_eq!(Pole::classify(f64::MAX, -2.0), Pole::Finite);
    }

    #[test]
    fn test_rounding_from_str() {
        let ceil = ["ceil", "Ceil", "UP"];
        let floor = ["floor", "FLOOR", "down"];
        let round = ["round", "Nearest"];

        for val in ceil {
            assert_eq!(Rounding::from_str(val).unwrap(), Rounding::Ceil);
        }
        for val in floor {
            assert_eq!(Rounding::from_str(val).unwrap(), Rounding::Floor);
        }
        for val in round {
            assert_eq!(Rounding::from_str(val).unwrap(), Rounding::Round);
        }
        assert!(Rounding::from_str("truncate").is_err());
    }

    #[test]
    fn test_rounding_apply() {
        assert_eq!(Rounding::Ceil.apply(1.21, 1), 1.3);
        assert_eq!(Rounding::Floor.apply(-1.21, 1), -1.3);
        assert_eq!(Rounding::Round.apply(1.25, 1), 1.3);
        assert_eq!(Rounding::Round.apply(-0.5, 0), 0.0);
        assert_eq!(Rounding::Floor.apply(1234.0, -2), 1200.0);
        assert_eq!(Rounding::Ceil.to_string(), "ceil");
    }
}

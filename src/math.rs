use crate::consts::{
    COSM1_C1, COSM1_C2, COSM1_C3, COSM1_C4, COSM1_C5, COSM1_C6, COSM1_C7, COSM1_C8,
    HYPOT_THRESHOLD,
};
use std::f64::consts::FRAC_PI_4;

/// Magnitude of (x, y) without overflowing for components near `f64::MAX`.
pub fn hypot(x: f64, y: f64) -> f64 {
    let a = x.abs();
    let b = y.abs();

    if a < HYPOT_THRESHOLD && b < HYPOT_THRESHOLD {
        return (a * a + b * b).sqrt();
    }

    // inf/inf would poison the ratio below
    if a.is_infinite() || b.is_infinite() {
        return f64::INFINITY;
    }

    let (big, ratio) = if a < b { (b, x / y) } else { (a, y / x) };
    big * (1.0 + ratio * ratio).sqrt()
}

/// `ln(hypot(a, b))` computed without forming `a² + b²` for large inputs.
pub fn log_hypot(a: f64, b: f64) -> f64 {
    let abs_a = a.abs();
    let abs_b = b.abs();

    if a == 0.0 {
        return abs_b.ln();
    }

    if b == 0.0 {
        return abs_a.ln();
    }

    if abs_a < HYPOT_THRESHOLD && abs_b < HYPOT_THRESHOLD {
        return (a * a + b * b).ln() * 0.5;
    }

    // cos(atan2(b, a)) = a / sqrt(a² + b²)
    (a / b.atan2(a).cos()).ln()
}

/// `cos(x) - 1` without cancellation near zero.
pub fn cosm1(x: f64) -> f64 {
    if !(-FRAC_PI_4..=FRAC_PI_4).contains(&x) {
        return x.cos() - 1.0;
    }

    let xx = x * x;
    xx * (xx
        * (xx
            * (xx
                * (xx * (xx * (xx * (xx * COSM1_C8 - COSM1_C7) + COSM1_C6) - COSM1_C5)
                    + COSM1_C4)
                - COSM1_C3)
            + COSM1_C2)
        - COSM1_C1)
}

/// Hyperbolic cosine of a real argument.
pub fn cosh(x: f64) -> f64 {
    (x.exp() + (-x).exp()) * 0.5
}

/// Hyperbolic sine of a real argument.
pub fn sinh(x: f64) -> f64 {
    (x.exp() - (-x).exp()) * 0.5
}

/// Round to nearest with ties toward positive infinity.
pub fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

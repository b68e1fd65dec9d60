//! Numeric constants shared by the stability kernel and the comparison helpers.

/// Tolerance used by `Complex::equals` and by the formatter to snap tiny
/// components to zero.
pub const EPSILON: f64 = 1e-15;

/// Component magnitude below which `x*x + y*y` cannot overflow.
pub const HYPOT_THRESHOLD: f64 = 3000.0;

// =========================================================================
// Horner coefficients of the cosine series, cos(x) - 1 = x²·P(x²)
// =========================================================================

/// 1/16!
pub const COSM1_C8: f64 = 1.0 / 20922789888000.0;
/// 1/14!
pub const COSM1_C7: f64 = 1.0 / 87178291200.0;
/// 1/12!
pub const COSM1_C6: f64 = 1.0 / 479001600.0;
/// 1/10!
pub const COSM1_C5: f64 = 1.0 / 3628800.0;
/// 1/8!
pub const COSM1_C4: f64 = 1.0 / 40320.0;
/// 1/6!
pub const COSM1_C3: f64 = 1.0 / 720.0;
/// 1/4!
pub const COSM1_C2: f64 = 1.0 / 24.0;
/// 1/2!
pub const COSM1_C1: f64 = 1.0 / 2.0;

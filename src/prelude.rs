//! cxkit prelude.
//!
//! This module contains the most used types, traits, and macros that you can
//! import easily as a group.
//!
//! ```
//! use cxkit::prelude::*;
//!
//! let z = Complex::parse("1 + i").unwrap() * complex!(0, 1);
//! assert_eq!(z, Complex::new(-1.0, 1.0));
//! ```

#[doc(no_inline)]
pub use crate::complex;
#[doc(no_inline)]
pub use crate::complex::Complex;

#[doc(no_inline)]
pub use crate::enums::{Pole, Rounding};

#[doc(no_inline)]
pub use crate::error::{ComplexError, Result};

#[doc(no_inline)]
pub use crate::input::{Input, Polar};

#[doc(no_inline)]
pub use num_traits::{One, Zero};

//! cxkit prelude.
//!
//! This module contains the most used types and traits, which you can import
//! easily as a group.
//!
//! ```
//! use cxkit::prelude::*;
//!
//! let z = Complex::new(-1.0, 0.0);
//! let w = z.log(0).unwrap();
//! assert_eq!(w.im, std::f64::consts::PI);
//! ```

#[doc(no_inline)]
pub use crate::branch::{Branch, IntoBranch};

#[doc(no_inline)]
pub use crate::complex::Complex;

#[doc(no_inline)]
pub use crate::error::ComplexError;

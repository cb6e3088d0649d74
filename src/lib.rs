//! Complex numbers with explicit branch selection for the multi-valued
//! elementary functions.
//!
//! `log`, `pow`, `sqrt` and the inverse circular/hyperbolic functions take a
//! branch index `k` (principal value at `k = 0`). A branch index that is not a
//! whole number is rejected with [`ComplexError::InvalidBranchIndex`]; every
//! other degenerate input (log of zero, division by zero) propagates as IEEE
//! infinities and NaNs.
//!
//! ```
//! use cxkit::prelude::*;
//!
//! let z = Complex::new(-1.0, 0.0);
//! let roots: Vec<Complex> = (0..4).map(|k| z.pow(0.25, k).unwrap()).collect();
//! assert_eq!(roots.len(), 4);
//! assert!(z.log(0.5).is_err());
//! ```
pub mod branch;
pub mod complex;
pub mod convert;
pub mod error;
pub mod parse;
pub mod prelude;
pub mod util;

pub use branch::{Branch, IntoBranch};
pub use complex::Complex;
pub use error::ComplexError;

/// Create a **[`Complex`]** from its rectangular parts.
///
/// ```
/// use cxkit::c;
/// let z = c!(1.0, -2.0);
/// assert_eq!(z.im, -2.0);
/// let r = c!(3.0);
/// assert_eq!(r.im, 0.0);
/// ```
#[macro_export]
macro_rules! c {
    ($re:expr, $im:expr $(,)?) => {
        $crate::complex::Complex::new($re, $im)
    };
    ($re:expr $(,)?) => {
        $crate::complex::Complex::from_real($re)
    };
}

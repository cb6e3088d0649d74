use crate::error::ComplexError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated branch index selecting one value of a multi-valued function.
///
/// `Branch(0)` is the principal value. For `log` the index adds `2πk` to the
/// imaginary part; the inverse functions pass it through to their inner
/// `log`/`pow` calls.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Branch(pub i64);

impl Branch {
    pub const PRINCIPAL: Branch = Branch(0);

    pub fn index(&self) -> i64 {
        self.0
    }

    pub fn is_principal(&self) -> bool {
        self.0 == 0
    }

    /// 2πk as a float
    pub(crate) fn turns(&self) -> f64 {
        std::f64::consts::TAU * self.0 as f64
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Conversion into a [`Branch`], rejecting anything that is not a whole number.
///
/// Integers always convert. Floats convert only when finite, integral and
/// within `i64` range.
pub trait IntoBranch {
    fn into_branch(self) -> Result<Branch, ComplexError>;
}

impl IntoBranch for Branch {
    fn into_branch(self) -> Result<Branch, ComplexError> {
        Ok(self)
    }
}

macro_rules! lossless_branch {
    ($($t:ty),*) => {$(
        impl IntoBranch for $t {
            fn into_branch(self) -> Result<Branch, ComplexError> {
                Ok(Branch(i64::from(self)))
            }
        }
    )*};
}

lossless_branch!(i8, i16, i32, i64, u8, u16, u32);

// Values past i64::MAX cannot name a branch
macro_rules! checked_branch {
    ($($t:ty),*) => {$(
        impl IntoBranch for $t {
            fn into_branch(self) -> Result<Branch, ComplexError> {
                i64::try_from(self).map(Branch).map_err(|_| {
                    tracing::debug!(value = %self, "branch index out of range");
                    ComplexError::InvalidBranchIndex(self as f64)
                })
            }
        }
    )*};
}

checked_branch!(isize, usize, u64);

impl IntoBranch for f64 {
    fn into_branch(self) -> Result<Branch, ComplexError> {
        // 2^63 is the first float past i64::MAX
        const LIMIT: f64 = 9_223_372_036_854_775_808.0;
        if self.is_finite() && self.fract() == 0.0 && self >= -LIMIT && self < LIMIT {
            Ok(Branch(self as i64))
        } else {
            tracing::debug!(value = self, "rejected non-integral branch index");
            Err(ComplexError::InvalidBranchIndex(self))
        }
    }
}

impl IntoBranch for f32 {
    fn into_branch(self) -> Result<Branch, ComplexError> {
        (self as f64).into_branch()
    }
}

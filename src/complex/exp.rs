use super::Complex;
use crate::branch::{Branch, IntoBranch};
use crate::error::ComplexError;

impl Complex {
    /// e^z = e^re * (cos(im) + i sin(im))
    pub fn exp(&self) -> Self {
        let scale = self.re.exp();
        Complex::new(scale * self.im.cos(), scale * self.im.sin())
    }

    pub(crate) fn log_on_branch(&self, k: Branch) -> Complex {
        Complex::new(self.abs().ln(), self.arg() + k.turns())
    }

    /// Natural logarithm on branch `k`: ln|z| + i(arg(z) + 2πk).
    ///
    /// The logarithm of zero is not trapped; it comes out as `-inf` real part.
    ///
    /// # Errors
    /// `InvalidBranchIndex` if `k` is not a whole number.
    pub fn log<K: IntoBranch>(&self, k: K) -> Result<Self, ComplexError> {
        Ok(self.log_on_branch(k.into_branch()?))
    }

    /// Principal natural logarithm
    pub fn ln(&self) -> Self {
        self.log_on_branch(Branch::PRINCIPAL)
    }
}

use super::Complex;
use crate::branch::{Branch, IntoBranch};
use crate::error::ComplexError;

const HALF_I: Complex = Complex::new(0.0, 0.5);
const NEG_HALF_I: Complex = Complex::new(0.0, -0.5);

/// Inverse circular and hyperbolic functions.
///
/// Each function is multi-valued. The outer index `k1` selects the branch of
/// the logarithm the result is built from; `asin`, `acos`, `asinh` and `acosh`
/// also take an inner index `k2` for the square root of `1 - z²`. With both at
/// 0, `f⁻¹(f(z)) == z` holds only for `z` in the principal image of `f`;
/// elsewhere the caller has to supply the matching indices.
///
/// Both indices are validated before any arithmetic is done.
impl Complex {
    // sqrt(1 - z²) on branch k2
    fn root_one_minus_square(&self, k2: Branch) -> Complex {
        (1.0 - *self * *self).pow_on_branch(Complex::from_real(0.5), k2)
    }

    fn asin_on(&self, k1: Branch, k2: Branch) -> Complex {
        let w = Complex::I * *self + self.root_one_minus_square(k2);
        Complex::NEG_I * w.log_on_branch(k1)
    }

    fn acos_on(&self, k1: Branch, k2: Branch) -> Complex {
        let w = *self + Complex::I * self.root_one_minus_square(k2);
        Complex::NEG_I * w.log_on_branch(k1)
    }

    fn atan_on(&self, k: Branch) -> Complex {
        let w = (Complex::I - *self) / (Complex::I + *self);
        NEG_HALF_I * w.log_on_branch(k)
    }

    fn acot_on(&self, k: Branch) -> Complex {
        let w = (*self - Complex::I) / (*self + Complex::I);
        HALF_I * w.log_on_branch(k)
    }

    /// asin(z) = -i log(iz + sqrt(1 - z²))
    pub fn asin<K1, K2>(&self, k1: K1, k2: K2) -> Result<Self, ComplexError>
    where
        K1: IntoBranch,
        K2: IntoBranch,
    {
        let (k1, k2) = (k1.into_branch()?, k2.into_branch()?);
        Ok(self.asin_on(k1, k2))
    }

    /// acos(z) = -i log(z + i sqrt(1 - z²))
    pub fn acos<K1, K2>(&self, k1: K1, k2: K2) -> Result<Self, ComplexError>
    where
        K1: IntoBranch,
        K2: IntoBranch,
    {
        let (k1, k2) = (k1.into_branch()?, k2.into_branch()?);
        Ok(self.acos_on(k1, k2))
    }

    /// atan(z) = (-i/2) log((i - z) / (i + z)).
    ///
    /// At `z = ±i` the quotient is 0 or a division by zero and the result is
    /// non-finite.
    pub fn atan<K: IntoBranch>(&self, k: K) -> Result<Self, ComplexError> {
        Ok(self.atan_on(k.into_branch()?))
    }

    /// acot(z) = (i/2) log((z - i) / (z + i))
    pub fn acot<K: IntoBranch>(&self, k: K) -> Result<Self, ComplexError> {
        Ok(self.acot_on(k.into_branch()?))
    }

    /// asinh(z) = i asin(-iz)
    pub fn asinh<K1, K2>(&self, k1: K1, k2: K2) -> Result<Self, ComplexError>
    where
        K1: IntoBranch,
        K2: IntoBranch,
    {
        let (k1, k2) = (k1.into_branch()?, k2.into_branch()?);
        Ok(Complex::I * (Complex::NEG_I * *self).asin_on(k1, k2))
    }

    /// acosh(z) = i acos(z).
    ///
    /// Note this is not the half-plane `Re >= 0` convention: on the real axis
    /// above 1 the principal result has a negative real part.
    pub fn acosh<K1, K2>(&self, k1: K1, k2: K2) -> Result<Self, ComplexError>
    where
        K1: IntoBranch,
        K2: IntoBranch,
    {
        let (k1, k2) = (k1.into_branch()?, k2.into_branch()?);
        Ok(Complex::I * self.acos_on(k1, k2))
    }

    /// atanh(z) = i atan(-iz)
    pub fn atanh<K: IntoBranch>(&self, k: K) -> Result<Self, ComplexError> {
        let k = k.into_branch()?;
        Ok(Complex::I * (Complex::NEG_I * *self).atan_on(k))
    }

    /// acoth(z) = i acot(iz)
    pub fn acoth<K: IntoBranch>(&self, k: K) -> Result<Self, ComplexError> {
        let k = k.into_branch()?;
        Ok(Complex::I * (Complex::I * *self).acot_on(k))
    }
}

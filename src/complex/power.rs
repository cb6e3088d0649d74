use super::Complex;
use crate::branch::{Branch, IntoBranch};
use crate::error::ComplexError;

impl Complex {
    /// exp(n * log(z, k)) with the zero-base policy applied.
    ///
    /// 0^0 is 1 and 0^n is 0 for every other exponent, in place of the NaN the
    /// formula produces from ln(0) = -inf.
    pub(crate) fn pow_on_branch(&self, n: Complex, k: Branch) -> Complex {
        if self.re == 0.0 && self.im == 0.0 {
            let result = if n.re == 0.0 && n.im == 0.0 {
                Complex::ONE
            } else {
                Complex::ZERO
            };
            tracing::trace!(exponent = %n, "zero base, returning {}", result);
            return result;
        }
        (n * self.log_on_branch(k)).exp()
    }

    /// Real power on branch `k`: exp(n * log(z, k)).
    ///
    /// For `n = 1/N` the branches `k = 0..N` enumerate the N distinct roots.
    ///
    /// # Errors
    /// `InvalidBranchIndex` if `k` is not a whole number.
    pub fn pow<K: IntoBranch>(&self, n: f64, k: K) -> Result<Self, ComplexError> {
        let k = k.into_branch()?;
        Ok(self.pow_on_branch(Complex::from_real(n), k))
    }

    /// Complex power on branch `k`: exp(w * log(z, k))
    ///
    /// # Errors
    /// `InvalidBranchIndex` if `k` is not a whole number.
    pub fn powc<K: IntoBranch>(&self, w: Complex, k: K) -> Result<Self, ComplexError> {
        let k = k.into_branch()?;
        Ok(self.pow_on_branch(w, k))
    }

    /// Square root on branch `k`, i.e. `pow(z, 0.5, k)`
    ///
    /// # Errors
    /// `InvalidBranchIndex` if `k` is not a whole number.
    pub fn sqrt<K: IntoBranch>(&self, k: K) -> Result<Self, ComplexError> {
        self.pow(0.5, k)
    }

    /// Principal square root
    pub fn sqrt_principal(&self) -> Self {
        self.pow_on_branch(Complex::from_real(0.5), Branch::PRINCIPAL)
    }

    /// Principal real power
    pub fn powf(&self, n: f64) -> Self {
        self.pow_on_branch(Complex::from_real(n), Branch::PRINCIPAL)
    }

    /// Principal integer power
    pub fn powi(&self, n: i32) -> Self {
        self.powf(n as f64)
    }

    /// All `n` distinct n-th roots, ordered by branch index 0..n
    pub fn nth_roots(&self, n: u32) -> Vec<Self> {
        if n == 0 {
            return Vec::new();
        }
        let exponent = Complex::from_real(1.0 / n as f64);
        (0..n)
            .map(|k| self.pow_on_branch(exponent, Branch(k as i64)))
            .collect()
    }

    /// Multiplicative inverse 1/z (same division contract as `/`)
    pub fn recip(&self) -> Self {
        Complex::ONE / *self
    }
}

#[cfg(test)]
mod power_tests {
    use super::*;
    use crate::util::{comp_c64, comp_f64, DEFAULT_MARGIN};
    use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2};

    #[test]
    fn test_pow_real() {
        let z = Complex::new(1.0, 1.0);
        // (1+i)^2 = 2i
        comp_c64(&Complex::new(0.0, 2.0), &z.pow(2.0, 0).unwrap(), DEFAULT_MARGIN, "pow", "2");
        comp_c64(&Complex::new(0.0, 2.0), &z.powi(2), DEFAULT_MARGIN, "powi", "2");
        // (1+i)^-1 = (1-i)/2
        comp_c64(&Complex::new(0.5, -0.5), &z.powf(-1.0), DEFAULT_MARGIN, "powf", "-1");
    }

    #[test]
    fn test_i_to_the_i() {
        let w = Complex::I.powc(Complex::I, 0).unwrap();
        comp_f64(&(-FRAC_PI_2).exp(), &w.re, DEFAULT_MARGIN, "i^i", "re");
        comp_f64(&0.0, &w.im, DEFAULT_MARGIN, "i^i", "im");
    }

    #[test]
    fn test_fourth_roots_of_minus_one() {
        let z = Complex::new(-1.0, 0.0);
        let h = FRAC_1_SQRT_2;
        let expected = [
            Complex::new(h, h),
            Complex::new(-h, h),
            Complex::new(-h, -h),
            Complex::new(h, -h),
        ];
        for k in 0..4 {
            let root = z.pow(0.25, k).unwrap();
            comp_c64(&expected[k as usize], &root, DEFAULT_MARGIN, "4th root", &k.to_string());
            comp_c64(&z, &root.pow(4.0, 0).unwrap(), DEFAULT_MARGIN, "4th root", "reconstruct");
        }
        assert_eq!(z.nth_roots(4), (0..4).map(|k| z.pow(0.25, k).unwrap()).collect::<Vec<_>>());
    }

    #[test]
    fn test_root_branches_cycle() {
        let z = Complex::new(2.0, -3.0);
        let r0 = z.pow(1.0 / 3.0, 0).unwrap();
        let r3 = z.pow(1.0 / 3.0, 3).unwrap();
        let r_neg = z.pow(1.0 / 3.0, -1).unwrap();
        let r2 = z.pow(1.0 / 3.0, 2).unwrap();
        comp_c64(&r0, &r3, DEFAULT_MARGIN, "cube root", "k=3");
        comp_c64(&r2, &r_neg, DEFAULT_MARGIN, "cube root", "k=-1");
    }

    #[test]
    fn test_sqrt() {
        let s = Complex::new(-4.0, 0.0).sqrt(0).unwrap();
        comp_c64(&Complex::new(0.0, 2.0), &s, DEFAULT_MARGIN, "sqrt", "k=0");
        let s = Complex::new(-4.0, 0.0).sqrt(1).unwrap();
        comp_c64(&Complex::new(0.0, -2.0), &s, DEFAULT_MARGIN, "sqrt", "k=1");
        assert_eq!(Complex::new(3.0, 4.0).sqrt_principal(), Complex::new(3.0, 4.0).sqrt(0).unwrap());
        comp_c64(&Complex::new(2.0, 1.0), &Complex::new(3.0, 4.0).sqrt_principal(), DEFAULT_MARGIN, "sqrt", "3+4i");
    }

    #[test]
    fn test_zero_base() {
        assert_eq!(Complex::ZERO.pow(2.0, 0).unwrap(), Complex::ZERO);
        assert_eq!(Complex::ZERO.pow(-1.5, 3).unwrap(), Complex::ZERO);
        assert_eq!(Complex::ZERO.powc(Complex::I, 0).unwrap(), Complex::ZERO);
        assert_eq!(Complex::ZERO.pow(0.0, 0).unwrap(), Complex::ONE);
        assert_eq!(Complex::ZERO.sqrt(0).unwrap(), Complex::ZERO);
    }

    #[test]
    fn test_rejects_fractional_branch() {
        let z = Complex::new(1.0, 1.0);
        assert_eq!(z.pow(2.0, 0.5), Err(ComplexError::InvalidBranchIndex(0.5)));
        assert!(z.sqrt(1.5).is_err());
        assert!(z.powc(Complex::I, -0.25).is_err());
        // validation happens before the zero-base shortcut
        assert!(Complex::ZERO.pow(2.0, 0.5).is_err());
    }

    #[test]
    fn test_nth_roots() {
        assert!(Complex::ONE.nth_roots(0).is_empty());
        let roots = Complex::new(8.0, 0.0).nth_roots(3);
        assert_eq!(roots.len(), 3);
        comp_c64(&Complex::new(2.0, 0.0), &roots[0], DEFAULT_MARGIN, "nth_roots", "0");
        for r in roots.iter() {
            comp_c64(&Complex::new(8.0, 0.0), &r.powi(3), DEFAULT_MARGIN, "nth_roots", "cube");
        }
    }

    #[test]
    fn test_recip() {
        assert_eq!(Complex::new(0.0, 2.0).recip(), Complex::new(0.0, -0.5));
        assert!(Complex::ZERO.recip().is_nan());
    }
}

use crate::complex::Complex;
use faer::complex_native::c64;
use num_complex::Complex64;

impl From<Complex64> for Complex {
    fn from(num: Complex64) -> Self {
        Complex::new(num.re, num.im)
    }
}

impl From<Complex> for Complex64 {
    fn from(value: Complex) -> Complex64 {
        Complex64::new(value.re, value.im)
    }
}

impl From<&Complex> for Complex64 {
    fn from(value: &Complex) -> Complex64 {
        Complex64::new(value.re, value.im)
    }
}

impl From<c64> for Complex {
    fn from(num: c64) -> Self {
        Complex::new(num.re, num.im)
    }
}

impl From<Complex> for c64 {
    fn from(value: Complex) -> c64 {
        c64::new(value.re, value.im)
    }
}

#[cfg(test)]
mod convert_tests {
    use super::*;

    #[test]
    fn test_num_complex() {
        let z = Complex::new(1.5, -2.0);
        let n: Complex64 = z.into();
        assert_eq!(n, Complex64::new(1.5, -2.0));
        assert_eq!(Complex64::from(&z), n);
        assert_eq!(Complex::from(n), z);
    }

    #[test]
    fn test_faer() {
        let z = Complex::new(-0.5, 4.0);
        let f: c64 = z.into();
        assert_eq!(f.re, -0.5);
        assert_eq!(f.im, 4.0);
        assert_eq!(Complex::from(f), z);
    }

    #[test]
    fn test_agrees_with_num_complex() {
        let z = Complex::new(0.8, -0.3);
        let n: Complex64 = z.into();
        assert!(z.exp().approx_eq(&n.exp().into(), crate::util::DEFAULT_MARGIN));
        assert!(z.ln().approx_eq(&n.ln().into(), crate::util::DEFAULT_MARGIN));
        assert!(z.sin().approx_eq(&n.sin().into(), crate::util::DEFAULT_MARGIN));
        assert!(z.atan(0).unwrap().approx_eq(&n.atan().into(), crate::util::DEFAULT_MARGIN));
        assert!(z.sqrt_principal().approx_eq(&n.sqrt().into(), crate::util::DEFAULT_MARGIN));
    }
}

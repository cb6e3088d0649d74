use crate::complex::Complex;
use float_cmp::{approx_eq, F64Margin};

/// Margin used by the crate's own tests: a handful of ulps, or an absolute
/// slack of 1e-9 for values that should come out as zero.
pub const DEFAULT_MARGIN: F64Margin = F64Margin {
    epsilon: 1e-9,
    ulps: 4,
};

impl Complex {
    /// Componentwise approximate equality within `margin`
    pub fn approx_eq(&self, other: &Complex, margin: F64Margin) -> bool {
        approx_eq!(f64, self.re, other.re, margin) && approx_eq!(f64, self.im, other.im, margin)
    }
}

pub fn comp_vec_c64(exemplar: &[Complex], calc: &[Complex], precision: F64Margin, test: &str) {
    assert_eq!(
        exemplar.len(),
        calc.len(),
        "test {} number of values does not match",
        test
    );
    for k in 0..calc.len() {
        comp_c64(&exemplar[k], &calc[k], precision, test, &format!("({})", k));
    }
}

pub fn comp_c64(exemplar: &Complex, calc: &Complex, precision: F64Margin, test: &str, idx: &str) {
    comp_f64(
        &exemplar.re,
        &calc.re,
        precision,
        test,
        &(idx.to_owned() + ".re"),
    );
    comp_f64(
        &exemplar.im,
        &calc.im,
        precision,
        test,
        &(idx.to_owned() + ".im"),
    );
}

pub fn comp_f64(exemplar: &f64, calc: &f64, precision: F64Margin, test: &str, idx: &str) {
    assert!(
        approx_eq!(f64, *calc, *exemplar, precision),
        " Failed test {} at location {}\n  exemplar: {}\n      calc: {}",
        test,
        idx,
        exemplar,
        calc
    );
}

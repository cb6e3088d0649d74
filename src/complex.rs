use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod exp;
pub mod hyperbolic;
pub mod inverse;
pub mod ops;
pub mod polar;
pub mod power;
pub mod sample;
pub mod trig;

/// A point in the complex plane with `f64` components.
///
/// Values are immutable: every operation returns a new `Complex`. Equality is
/// exact componentwise comparison with IEEE semantics (so a value holding a
/// NaN component is not equal to itself). There is no ordering.
#[derive(Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    /// 0 + 0i
    pub const ZERO: Complex = Complex { re: 0.0, im: 0.0 };
    /// 1 + 0i
    pub const ONE: Complex = Complex { re: 1.0, im: 0.0 };
    /// 0 + 1i
    pub const I: Complex = Complex { re: 0.0, im: 1.0 };
    /// 0 - 1i
    pub const NEG_I: Complex = Complex { re: 0.0, im: -1.0 };

    /// Create a new complex number from real and imaginary parts
    pub const fn new(re: f64, im: f64) -> Self {
        Complex { re, im }
    }

    /// Create a new complex number from a real number (imaginary part = 0)
    pub const fn from_real(re: f64) -> Self {
        Complex { re, im: 0.0 }
    }

    /// Create a new complex number from an imaginary number (real part = 0)
    pub const fn from_imag(im: f64) -> Self {
        Complex { re: 0.0, im }
    }

    /// The imaginary unit
    pub const fn i() -> Self {
        Complex::I
    }

    /// Get the real part
    pub fn re(&self) -> f64 {
        self.re
    }

    /// Get the imaginary part
    pub fn im(&self) -> f64 {
        self.im
    }

    /// Check if either component is NaN
    pub fn is_nan(&self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    /// Check if either component is infinite
    pub fn is_infinite(&self) -> bool {
        self.re.is_infinite() || self.im.is_infinite()
    }

    /// Check if both components are finite
    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// Check if both components are normal (not zero, subnormal, infinite, or NaN)
    pub fn is_normal(&self) -> bool {
        self.re.is_normal() && self.im.is_normal()
    }
}

impl Zero for Complex {
    fn zero() -> Self {
        Complex::ZERO
    }

    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
}

impl One for Complex {
    fn one() -> Self {
        Complex::ONE
    }

    fn is_one(&self) -> bool {
        *self == Complex::ONE
    }
}

impl std::iter::Sum for Complex {
    fn sum<I: Iterator<Item = Complex>>(iter: I) -> Self {
        iter.fold(Complex::ZERO, |acc, z| acc + z)
    }
}

impl<'a> std::iter::Sum<&'a Complex> for Complex {
    fn sum<I: Iterator<Item = &'a Complex>>(iter: I) -> Self {
        iter.fold(Complex::ZERO, |acc, z| acc + z)
    }
}

impl std::iter::Product for Complex {
    fn product<I: Iterator<Item = Complex>>(iter: I) -> Self {
        iter.fold(Complex::ONE, |acc, z| acc * z)
    }
}

impl<'a> std::iter::Product<&'a Complex> for Complex {
    fn product<I: Iterator<Item = &'a Complex>>(iter: I) -> Self {
        iter.fold(Complex::ONE, |acc, z| acc * z)
    }
}

// Renders as "<re>+<im>i" / "<re>-<im>i"; the sign follows the sign bit of im.
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (sign, im) = if self.im.is_sign_negative() && !self.im.is_nan() {
            ('-', -self.im)
        } else {
            ('+', self.im)
        };
        match f.precision() {
            Some(p) => write!(f, "{:.*}{}{:.*}i", p, self.re, sign, p, im),
            None => write!(f, "{}{}{}i", self.re, sign, im),
        }
    }
}

impl fmt::Debug for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Complex({:?}, {:?})", self.re, self.im)
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Complex::from_real(re)
    }
}

impl From<(f64, f64)> for Complex {
    fn from((re, im): (f64, f64)) -> Self {
        Complex::new(re, im)
    }
}

impl From<Complex> for (f64, f64) {
    fn from(z: Complex) -> (f64, f64) {
        (z.re, z.im)
    }
}

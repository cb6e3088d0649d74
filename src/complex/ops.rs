use super::Complex;
use num_traits::Pow;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

impl Add for Complex {
    type Output = Complex;

    fn add(self, other: Complex) -> Complex {
        Complex::new(self.re + other.re, self.im + other.im)
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, other: Complex) -> Complex {
        Complex::new(self.re - other.re, self.im - other.im)
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, other: Complex) -> Complex {
        Complex::new(
            self.re * other.re - self.im * other.im,
            self.re * other.im + self.im * other.re,
        )
    }
}

/// Textbook division. A zero divisor is not trapped: the components follow
/// IEEE division and come out infinite or NaN.
impl Div for Complex {
    type Output = Complex;

    fn div(self, other: Complex) -> Complex {
        let d = other.re * other.re + other.im * other.im;
        Complex::new(
            (self.re * other.re + self.im * other.im) / d,
            (self.im * other.re - self.re * other.im) / d,
        )
    }
}

impl Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        Complex::new(-self.re, -self.im)
    }
}

impl Neg for &Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        -*self
    }
}

// Scalar operands act on both components directly, so an infinite component
// never meets a zero imaginary part of a promoted scalar.
impl Add<f64> for Complex {
    type Output = Complex;

    fn add(self, other: f64) -> Complex {
        Complex::new(self.re + other, self.im)
    }
}

impl Sub<f64> for Complex {
    type Output = Complex;

    fn sub(self, other: f64) -> Complex {
        Complex::new(self.re - other, self.im)
    }
}

impl Mul<f64> for Complex {
    type Output = Complex;

    fn mul(self, other: f64) -> Complex {
        Complex::new(self.re * other, self.im * other)
    }
}

impl Div<f64> for Complex {
    type Output = Complex;

    fn div(self, other: f64) -> Complex {
        Complex::new(self.re / other, self.im / other)
    }
}

impl Add<Complex> for f64 {
    type Output = Complex;

    fn add(self, other: Complex) -> Complex {
        Complex::new(self + other.re, other.im)
    }
}

impl Sub<Complex> for f64 {
    type Output = Complex;

    fn sub(self, other: Complex) -> Complex {
        Complex::new(self - other.re, -other.im)
    }
}

impl Mul<Complex> for f64 {
    type Output = Complex;

    fn mul(self, other: Complex) -> Complex {
        Complex::new(self * other.re, self * other.im)
    }
}

impl Div<Complex> for f64 {
    type Output = Complex;

    fn div(self, other: Complex) -> Complex {
        Complex::from_real(self) / other
    }
}

/// Forwards the borrowed operand combinations to the by-value impls.
macro_rules! forward_ref_binop {
    ($imp:ident, $method:ident, $lhs:ty, $rhs:ty) => {
        impl $imp<&$rhs> for $lhs {
            type Output = Complex;

            fn $method(self, other: &$rhs) -> Complex {
                $imp::$method(self, *other)
            }
        }

        impl $imp<$rhs> for &$lhs {
            type Output = Complex;

            fn $method(self, other: $rhs) -> Complex {
                $imp::$method(*self, other)
            }
        }

        impl $imp<&$rhs> for &$lhs {
            type Output = Complex;

            fn $method(self, other: &$rhs) -> Complex {
                $imp::$method(*self, *other)
            }
        }
    };
}

forward_ref_binop!(Add, add, Complex, Complex);
forward_ref_binop!(Sub, sub, Complex, Complex);
forward_ref_binop!(Mul, mul, Complex, Complex);
forward_ref_binop!(Div, div, Complex, Complex);
forward_ref_binop!(Add, add, Complex, f64);
forward_ref_binop!(Sub, sub, Complex, f64);
forward_ref_binop!(Mul, mul, Complex, f64);
forward_ref_binop!(Div, div, Complex, f64);
forward_ref_binop!(Add, add, f64, Complex);
forward_ref_binop!(Sub, sub, f64, Complex);
forward_ref_binop!(Mul, mul, f64, Complex);
forward_ref_binop!(Div, div, f64, Complex);

macro_rules! assign_op {
    ($imp:ident, $method:ident, $op:tt) => {
        impl $imp for Complex {
            fn $method(&mut self, other: Complex) {
                *self = *self $op other;
            }
        }

        impl $imp<&Complex> for Complex {
            fn $method(&mut self, other: &Complex) {
                *self = *self $op *other;
            }
        }

        impl $imp<f64> for Complex {
            fn $method(&mut self, other: f64) {
                *self = *self $op other;
            }
        }
    };
}

assign_op!(AddAssign, add_assign, +);
assign_op!(SubAssign, sub_assign, -);
assign_op!(MulAssign, mul_assign, *);
assign_op!(DivAssign, div_assign, /);

// Binary power on the principal branch: z^w = exp(w * log(z, 0))
impl Pow<Complex> for Complex {
    type Output = Complex;

    fn pow(self, exp: Complex) -> Complex {
        self.pow_on_branch(exp, crate::branch::Branch::PRINCIPAL)
    }
}

impl Pow<&Complex> for Complex {
    type Output = Complex;

    fn pow(self, exp: &Complex) -> Complex {
        Pow::pow(self, *exp)
    }
}

impl Pow<Complex> for &Complex {
    type Output = Complex;

    fn pow(self, exp: Complex) -> Complex {
        Pow::pow(*self, exp)
    }
}

impl Pow<f64> for Complex {
    type Output = Complex;

    fn pow(self, exp: f64) -> Complex {
        self.powf(exp)
    }
}

impl Pow<i32> for Complex {
    type Output = Complex;

    fn pow(self, exp: i32) -> Complex {
        self.powi(exp)
    }
}

use super::Complex;
use std::f64::consts::PI;

impl Complex {
    /// Create a new complex number from a magnitude and angle in radians
    pub fn from_polar(r: f64, theta: f64) -> Self {
        Complex::new(r * theta.cos(), r * theta.sin())
    }

    /// Create a new complex number from a magnitude and angle in degrees
    pub fn from_polar_deg(r: f64, theta: f64) -> Self {
        Complex::from_polar(r, theta.to_radians())
    }

    /// Magnitude, computed with `hypot` so large components do not overflow
    pub fn abs(&self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Square of the magnitude
    pub fn norm_sqr(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Argument in (-π, π].
    ///
    /// The argument of zero is taken as 0 regardless of the signs of its
    /// components, and an angle of exactly -π (reachable through a negative
    /// zero imaginary part) is reported as π.
    pub fn arg(&self) -> f64 {
        if self.re == 0.0 && self.im == 0.0 {
            return 0.0;
        }
        let theta = self.im.atan2(self.re);
        if theta == -PI {
            PI
        } else {
            theta
        }
    }

    /// (magnitude, angle in radians)
    pub fn to_polar(&self) -> (f64, f64) {
        (self.abs(), self.arg())
    }

    /// (magnitude, angle in degrees)
    pub fn to_polar_deg(&self) -> (f64, f64) {
        (self.abs(), self.arg().to_degrees())
    }
}

use super::Complex;
use rand::Rng;
use std::f64::consts::TAU;

impl Complex {
    /// Get the complex conjugate
    pub fn conj(&self) -> Self {
        Complex::new(self.re, -self.im)
    }

    /// Random point in the closed unit disc, drawn as `from_polar(r, θ)` with
    /// `r` uniform in [0, 1) and `θ` uniform in [0, 2π).
    ///
    /// Because the radius is not square-rooted the density is higher near the
    /// origin than at the rim; this is not a uniform sample of the disc area.
    pub fn uniform_sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let r: f64 = rng.gen();
        let theta = rng.gen_range(0.0..TAU);
        Complex::from_polar(r, theta)
    }
}

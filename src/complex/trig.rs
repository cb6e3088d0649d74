use super::Complex;

/// 2i, the denominator of the sine exponential form
const TWO_I: Complex = Complex::new(0.0, 2.0);

impl Complex {
    /// sin(z) = (e^(iz) - e^(-iz)) / 2i
    pub fn sin(&self) -> Self {
        let iz = Complex::I * *self;
        (iz.exp() - (-iz).exp()) / TWO_I
    }

    /// cos(z) = (e^(iz) + e^(-iz)) / 2
    pub fn cos(&self) -> Self {
        let iz = Complex::I * *self;
        (iz.exp() + (-iz).exp()) / 2.0
    }

    /// tan(z) = sin(z) / cos(z); a zero cosine gives non-finite components
    pub fn tan(&self) -> Self {
        self.sin() / self.cos()
    }

    /// cot(z) = cos(z) / sin(z); a zero sine gives non-finite components
    pub fn cot(&self) -> Self {
        self.cos() / self.sin()
    }
}

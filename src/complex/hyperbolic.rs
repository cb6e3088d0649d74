use super::Complex;

impl Complex {
    /// sinh(z) = (e^z - e^(-z)) / 2
    pub fn sinh(&self) -> Self {
        (self.exp() - (-*self).exp()) / 2.0
    }

    /// cosh(z) = (e^z + e^(-z)) / 2
    pub fn cosh(&self) -> Self {
        (self.exp() + (-*self).exp()) / 2.0
    }

    /// tanh(z) = sinh(z) / cosh(z)
    pub fn tanh(&self) -> Self {
        self.sinh() / self.cosh()
    }

    /// coth(z) = cosh(z) / sinh(z)
    pub fn coth(&self) -> Self {
        self.cosh() / self.sinh()
    }
}

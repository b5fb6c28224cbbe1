use num_traits::Float;

use super::PairInteraction;
use crate::utils::computations::constant;

/// Harmonic spring `U(r) = k/2 (r - r0)^2`.
///
/// With a nonzero rest length the derivative coefficient is singular at
/// `r = 0`.
#[derive(Clone, Copy, Debug)]
pub struct Harmonic<T> {
    k: T,
    r0: T,
}

impl<T: Float> Harmonic<T> {
    pub fn new(k: T, r0: T) -> Self {
        Self { k, r0 }
    }
    pub fn k(&self) -> T {
        self.k
    }
    pub fn r0(&self) -> T {
        self.r0
    }
}

impl<T: Float> PairInteraction<T> for Harmonic<T> {
    fn energy(&self, r2: T) -> T {
        if self.r0 == T::zero() {
            return constant::<T>(0.5) * self.k * r2;
        }
        let dr = r2.sqrt() - self.r0;
        constant::<T>(0.5) * self.k * dr * dr
    }
    fn energy_gradient(&self, r2: T) -> (T, T) {
        if self.r0 == T::zero() {
            return (constant::<T>(0.5) * self.k * r2, -self.k);
        }
        let r = r2.sqrt();
        let dr = r - self.r0;
        (constant::<T>(0.5) * self.k * dr * dr, -self.k * dr / r)
    }
}

use num_traits::Float;

use super::PairInteraction;
use crate::utils::computations::constant;

/// Lennard-Jones 12-6 potential, evaluated for every listed pair without cutoff
#[derive(Clone, Copy, Debug)]
pub struct LJ<T> {
    sigma: T,
    epsilon: T,
    c6: T,  // = 4 epsilon * sigma^6
    c12: T, // = 4 epsilon * sigma^12
}

impl<T: Float> LJ<T> {
    pub fn new(sigma: T, epsilon: T) -> Self {
        let sigma6 = sigma.powi(6);
        let four_eps = constant::<T>(4.0) * epsilon;
        Self {
            sigma,
            epsilon,
            c6: four_eps * sigma6,
            c12: four_eps * sigma6 * sigma6,
        }
    }
    pub fn sigma(&self) -> T {
        self.sigma
    }
    pub fn epsilon(&self) -> T {
        self.epsilon
    }
}

impl<T: Float> PairInteraction<T> for LJ<T> {
    // U(r) = 4 eps ((sig/r)^12 - (sig/r)^6)
    #[inline]
    fn energy(&self, r2: T) -> T {
        let ir2 = r2.recip();
        let ir6 = ir2 * ir2 * ir2;
        (self.c12 * ir6 - self.c6) * ir6
    }

    // -dU/dr / r = (12 c12 / r^12 - 6 c6 / r^6) / r^2
    #[inline]
    fn energy_gradient(&self, r2: T) -> (T, T) {
        let ir2 = r2.recip();
        let ir6 = ir2 * ir2 * ir2;
        let e = (self.c12 * ir6 - self.c6) * ir6;
        let g = (constant::<T>(12.0) * self.c12 * ir6 - constant::<T>(6.0) * self.c6) * ir6 * ir2;
        (e, g)
    }
}

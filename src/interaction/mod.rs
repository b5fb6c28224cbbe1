pub mod harmonic;
pub mod lj;
pub mod none;

pub use harmonic::Harmonic;
pub use lj::LJ;
pub use none::NoInteraction;

use num_traits::Float;

/// Trait for pairwise interactions that depend only on the squared separation
pub trait PairInteraction<T: Float> {
    /// Energy of a pair at squared separation `r2`
    fn energy(&self, r2: T) -> T;

    /// Energy and derivative coefficient `g = -(dE/dr) / r`.
    ///
    /// The gradient contribution on the first particle of a pair is
    /// `-g * dr` and on the second `+g * dr`, where `dr = r1 - r2`.
    fn energy_gradient(&self, r2: T) -> (T, T);
}

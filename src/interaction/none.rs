use num_traits::Float;

use super::PairInteraction;

/// Pair law with no energy and no force
#[derive(Clone, Copy, Debug, Default)]
pub struct NoInteraction;

impl<T: Float> PairInteraction<T> for NoInteraction {
    fn energy(&self, _r2: T) -> T {
        T::zero()
    }
    fn energy_gradient(&self, _r2: T) -> (T, T) {
        (T::zero(), T::zero())
    }
}

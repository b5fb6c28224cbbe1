use num_traits::Float;

use crate::{
    distance::DistancePolicy, ilist::SimplePairwiseInteractionList, interaction::PairInteraction,
    utils::computations::constant,
};

/// Trait for anything that maps a flat `3N` coordinate buffer to an energy
pub trait Potential<T: Float> {
    fn energy(&self, x: &[T]) -> T;

    /// Energy of `x`; `grad` is overwritten with dE/dx
    fn energy_gradient(&self, x: &[T], grad: &mut [T]) -> T;

    /// Central finite-difference gradient, used to check analytic gradients
    fn numerical_gradient(&self, x: &[T], eps: T) -> Vec<T> {
        let two = constant::<T>(2.0);
        let mut xp = x.to_vec();
        let mut grad = vec![T::zero(); x.len()];
        for i in 0..x.len() {
            xp[i] = x[i] + eps;
            let eplus = self.energy(&xp);
            xp[i] = x[i] - eps;
            let eminus = self.energy(&xp);
            xp[i] = x[i];
            grad[i] = (eplus - eminus) / (two * eps);
        }
        grad
    }
}

impl<T, I, D> Potential<T> for SimplePairwiseInteractionList<T, I, D>
where
    T: Float,
    I: PairInteraction<T>,
    D: DistancePolicy<T>,
{
    fn energy(&self, x: &[T]) -> T {
        SimplePairwiseInteractionList::energy(self, x)
    }
    fn energy_gradient(&self, x: &[T], grad: &mut [T]) -> T {
        SimplePairwiseInteractionList::energy_gradient(self, x, grad)
    }
}

/// Sum of several potentials over the same coordinates, e.g. a bonded and
/// a non-bonded interaction list
pub struct CombinedPotential<T> {
    potentials: Vec<Box<dyn Potential<T>>>,
}

impl<T: Float> CombinedPotential<T> {
    pub fn new() -> Self {
        Self {
            potentials: Vec::new(),
        }
    }
    pub fn add_potential(&mut self, potential: Box<dyn Potential<T>>) {
        self.potentials.push(potential);
    }
    pub fn len(&self) -> usize {
        self.potentials.len()
    }
    pub fn is_empty(&self) -> bool {
        self.potentials.is_empty()
    }
}

impl<T: Float> Default for CombinedPotential<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Potential<T> for CombinedPotential<T> {
    fn energy(&self, x: &[T]) -> T {
        self.potentials
            .iter()
            .fold(T::zero(), |e, pot| e + pot.energy(x))
    }
    fn energy_gradient(&self, x: &[T], grad: &mut [T]) -> T {
        grad.fill(T::zero());
        let mut part = vec![T::zero(); grad.len()];
        let mut e = T::zero();
        for pot in &self.potentials {
            e = e + pot.energy_gradient(x, &mut part);
            for (g, p) in grad.iter_mut().zip(&part) {
                *g = *g + *p;
            }
        }
        e
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Harmonic, LJ};
    use approx::assert_relative_eq;

    fn triangle() -> Vec<f64> {
        vec![0.0, 0.0, 0.0, 1.1, 0.1, 0.0, 0.4, 1.0, 0.3]
    }

    #[test]
    fn numerical_gradient_matches_lj() {
        let pot: SimplePairwiseInteractionList<f64, _> =
            SimplePairwiseInteractionList::new(LJ::new(1.0, 1.0), &[0, 1, 0, 2, 1, 2]);
        let x = triangle();
        let mut grad = vec![0.0; 9];
        Potential::energy_gradient(&pot, &x, &mut grad);
        let numerical = pot.numerical_gradient(&x, 1e-6);
        for k in 0..9 {
            assert_relative_eq!(grad[k], numerical[k], epsilon = 1e-6, max_relative = 1e-5);
        }
    }

    #[test]
    fn combined_sums_components() {
        let x = triangle();
        let bonds: SimplePairwiseInteractionList<f64, _> =
            SimplePairwiseInteractionList::new(Harmonic::new(5.0, 1.0), &[0, 1, 1, 2]);
        let nonbonded: SimplePairwiseInteractionList<f64, _> =
            SimplePairwiseInteractionList::new(LJ::new(0.9, 0.2), &[0, 2]);

        let mut g_bonds = vec![0.0; 9];
        let mut g_nonbonded = vec![0.0; 9];
        let e_bonds = bonds.energy_gradient(&x, &mut g_bonds);
        let e_nonbonded = nonbonded.energy_gradient(&x, &mut g_nonbonded);

        let mut combined: CombinedPotential<f64> = CombinedPotential::new();
        combined.add_potential(Box::new(bonds));
        combined.add_potential(Box::new(nonbonded));
        assert_eq!(combined.len(), 2);

        let mut grad = vec![3.0; 9];
        let e = combined.energy_gradient(&x, &mut grad);
        assert_relative_eq!(e, e_bonds + e_nonbonded);
        assert_relative_eq!(combined.energy(&x), e);
        for k in 0..9 {
            assert_relative_eq!(grad[k], g_bonds[k] + g_nonbonded[k]);
        }
    }

    #[test]
    fn empty_combination() {
        let combined: CombinedPotential<f64> = CombinedPotential::default();
        let mut grad = vec![1.0; 3];
        assert!(combined.is_empty());
        assert_eq!(combined.energy_gradient(&[0.0; 3], &mut grad), 0.0);
        assert_eq!(grad, vec![0.0; 3]);
    }
}

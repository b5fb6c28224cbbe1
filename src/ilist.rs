use std::marker::PhantomData;

use log::{debug, trace};
use num_traits::Float;

use crate::{
    distance::{CartesianDistance, DistancePolicy},
    interaction::PairInteraction,
    settings::Validation,
    utils::norm2,
    Error,
};

/// Potential built from a fixed list of interacting particle pairs.
///
/// The list is read in consecutive pairs `(ilist[0], ilist[1])`,
/// `(ilist[2], ilist[3])`, ... and each pair contributes the energy of the
/// interaction law at the squared separation given by the distance policy.
/// Pairs are never added, removed or reordered after construction.
///
/// Particle indices are only validated according to [`Validation`]. On the
/// default setting an optimized build performs no index pass at all, so an
/// index past the end of the coordinate buffer is reported by a slice
/// panic rather than an [`Error`]. Use [`Self::checked_energy`] and
/// [`Self::checked_energy_gradient`] when the list comes from untrusted
/// input.
///
/// The list is not inspected at construction. An odd trailing index is
/// ignored by evaluation and reported by [`Self::validate`].
///
/// ```rust
/// use pairlist::{Harmonic, SimplePairwiseInteractionList};
///
/// let pot: SimplePairwiseInteractionList<f64, _> =
///     SimplePairwiseInteractionList::new(Harmonic::new(1.0, 0.0), &[0, 1]);
/// let x = [0.0, 0.0, 0.0, 2.0, 0.0, 0.0];
/// assert_eq!(pot.energy(&x), 2.0);
/// ```
#[derive(Clone, Debug)]
pub struct SimplePairwiseInteractionList<T, I, D = CartesianDistance> {
    interaction: I,
    dist: D,
    ilist: Vec<usize>,
    validation: Validation,
    _scalar: PhantomData<T>,
}

impl<T, I, D> SimplePairwiseInteractionList<T, I, D>
where
    T: Float,
    I: PairInteraction<T>,
    D: DistancePolicy<T>,
{
    /// Create a list with a default-constructed distance policy
    pub fn new(interaction: I, ilist: &[usize]) -> Self
    where
        D: Default,
    {
        Self::with_distance(interaction, ilist, D::default())
    }

    pub fn with_distance(interaction: I, ilist: &[usize], dist: D) -> Self {
        debug!(
            "Pairwise interaction list with {} pairs ({})",
            ilist.len() / 2,
            std::any::type_name::<D>()
        );
        Self {
            interaction,
            dist,
            ilist: ilist.to_vec(),
            validation: Validation::default(),
            _scalar: PhantomData,
        }
    }

    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    // Getters
    pub fn interaction(&self) -> &I {
        &self.interaction
    }
    pub fn distance(&self) -> &D {
        &self.dist
    }
    pub fn ilist(&self) -> &[usize] {
        &self.ilist
    }
    pub fn validation(&self) -> Validation {
        self.validation
    }
    pub fn num_pairs(&self) -> usize {
        self.ilist.len() / 2
    }
    /// Iterate over the interacting pairs in list order
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.ilist.chunks_exact(2).map(|p| (p[0], p[1]))
    }

    /// Check that the list is usable with a coordinate buffer of `num_coords` values
    pub fn validate(&self, num_coords: usize) -> Result<(), Error> {
        if num_coords % 3 != 0 {
            return Err(Error::BadCoordinateLength(num_coords));
        }
        if self.ilist.len() % 2 != 0 {
            return Err(Error::OddInteractionList(self.ilist.len()));
        }
        let num_atoms = num_coords / 3;
        match self.ilist.iter().find(|&&index| index >= num_atoms) {
            Some(&index) => {
                trace!("index {} rejected for {} atoms", index, num_atoms);
                Err(Error::IndexOutOfRange { index, num_atoms })
            }
            None => Ok(()),
        }
    }

    fn check_indices(&self, num_coords: usize) {
        if !self.validation.enabled() {
            return;
        }
        if let Err(e) = self.validate(num_coords) {
            panic!("{}", e);
        }
    }

    #[inline]
    fn separation(&self, x: &[T], i: usize, j: usize) -> [T; 3] {
        self.dist.get_rij(&x[3 * i..3 * i + 3], &x[3 * j..3 * j + 3])
    }

    /// Total energy of the configuration `x`
    pub fn energy(&self, x: &[T]) -> T {
        self.check_indices(x.len());

        self.pairs().fold(T::zero(), |e, (i, j)| {
            let dr = self.separation(x, i, j);
            e + self.interaction.energy(norm2(&dr))
        })
    }

    /// Total energy of `x`; `grad` is overwritten with dE/dx
    pub fn energy_gradient(&self, x: &[T], grad: &mut [T]) -> T {
        assert_eq!(
            x.len(),
            grad.len(),
            "Coordinate and gradient buffers should have equal length"
        );
        grad.fill(T::zero());
        self.check_indices(x.len());

        let mut e = T::zero();
        for (i, j) in self.pairs() {
            let dr = self.separation(x, i, j);
            let (eij, gij) = self.interaction.energy_gradient(norm2(&dr));
            e = e + eij;

            let (i1, i2) = (3 * i, 3 * j);
            for k in 0..3 {
                grad[i1 + k] = grad[i1 + k] - gij * dr[k];
            }
            for k in 0..3 {
                grad[i2 + k] = grad[i2 + k] + gij * dr[k];
            }
        }

        e
    }

    /// Validating counterpart of [`Self::energy`]
    pub fn checked_energy(&self, x: &[T]) -> Result<T, Error> {
        self.validate(x.len())?;
        Ok(self.energy(x))
    }

    /// Validating counterpart of [`Self::energy_gradient`]
    pub fn checked_energy_gradient(&self, x: &[T], grad: &mut [T]) -> Result<T, Error> {
        if x.len() != grad.len() {
            return Err(Error::LengthMismatch {
                coords: x.len(),
                grad: grad.len(),
            });
        }
        self.validate(x.len())?;
        Ok(self.energy_gradient(x, grad))
    }
}

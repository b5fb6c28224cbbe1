use num_traits::Float;

/// Convention for the separation vector between two particles
pub trait DistancePolicy<T: Float> {
    /// Separation `r1 - r2` of two 3-component positions
    fn get_rij(&self, r1: &[T], r2: &[T]) -> [T; 3];
}

/// Plain Cartesian subtraction, no boundary conditions
#[derive(Clone, Copy, Debug, Default)]
pub struct CartesianDistance;

impl<T: Float> DistancePolicy<T> for CartesianDistance {
    #[inline]
    fn get_rij(&self, r1: &[T], r2: &[T]) -> [T; 3] {
        [r1[0] - r2[0], r1[1] - r2[1], r1[2] - r2[2]]
    }
}

/// Minimum-image separation in an orthorhombic box, periodic along all axes
#[derive(Clone, Copy, Debug)]
pub struct PeriodicDistance<T> {
    box_lengths: [T; 3],
    inv_lengths: [T; 3],
}

impl<T: Float + std::fmt::Debug> PeriodicDistance<T> {
    pub fn new(box_lengths: [T; 3]) -> Self {
        assert!(
            box_lengths.iter().all(|&l| l > T::zero()),
            "Box lengths should be positive, found {:?}",
            box_lengths
        );
        Self {
            box_lengths,
            inv_lengths: box_lengths.map(|l| l.recip()),
        }
    }
    pub fn box_lengths(&self) -> [T; 3] {
        self.box_lengths
    }
}

impl<T: Float> DistancePolicy<T> for PeriodicDistance<T> {
    #[inline]
    fn get_rij(&self, r1: &[T], r2: &[T]) -> [T; 3] {
        let mut dr = [T::zero(); 3];
        for k in 0..3 {
            let d = r1[k] - r2[k];
            dr[k] = d - self.box_lengths[k] * (d * self.inv_lengths[k]).round();
        }
        dr
    }
}

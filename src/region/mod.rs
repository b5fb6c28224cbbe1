pub mod rect;
pub use rect::Rect;

use rand::Rng;

/// Volume that configurations are drawn from.
///
/// Regions work in `f64` only; convert the buffer when evaluating in another
/// precision.
pub trait Region {
    fn contains(&self, coord: &[f64]) -> bool;
    /// Flat `3 * num_atoms` buffer of positions drawn uniformly from the region
    fn random_coords<R: Rng + ?Sized>(&self, num_atoms: usize, rng: &mut R) -> Vec<f64>;
}

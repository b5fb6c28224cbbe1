use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::Error;

/// Displaces every coordinate by an independent Gaussian step.
///
/// `stddev` must be finite and non-negative. Works on `f64` buffers only.
///
/// ```rust
/// use rand::{rngs::StdRng, SeedableRng};
/// use pairlist::utils::perturb;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut coords = vec![0.0; 6];
/// perturb(&mut coords, 0.1, &mut rng).unwrap();
/// assert!(coords.iter().any(|&x| x != 0.0));
/// assert!(perturb(&mut coords, -1.0, &mut rng).is_err());
/// ```
pub fn perturb<R: Rng + ?Sized>(coords: &mut [f64], stddev: f64, rng: &mut R) -> Result<(), Error> {
    if !(stddev >= 0.0 && stddev.is_finite()) {
        return Err(Error::InvalidStepSize(stddev));
    }
    let dist = Normal::new(0.0, stddev).map_err(|_| Error::InvalidStepSize(stddev))?;
    for (x, dx) in coords.iter_mut().zip(dist.sample_iter(rng)) {
        *x += dx;
    }
    Ok(())
}

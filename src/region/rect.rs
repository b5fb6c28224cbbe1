use rand::Rng;

use super::Region;

/// Axis-aligned rectangular box
#[derive(Clone, Copy, Debug)]
pub struct Rect {
    lo: [f64; 3],
    hi: [f64; 3],
}
impl Rect {
    pub fn new(xlo: f64, xhi: f64, ylo: f64, yhi: f64, zlo: f64, zhi: f64) -> Self {
        let lo = [xlo, ylo, zlo];
        let hi = [xhi, yhi, zhi];
        assert!(
            lo.iter().zip(&hi).all(|(l, h)| l < h),
            "Lower bounds {:?} should be less than upper bounds {:?}",
            lo,
            hi
        );
        Self { lo, hi }
    }
    /// Cube `[0, length)^3`, matching the cell of a periodic box
    pub fn cube(length: f64) -> Self {
        Self::new(0.0, length, 0.0, length, 0.0, length)
    }
    pub fn lo(&self) -> [f64; 3] {
        self.lo
    }
    pub fn hi(&self) -> [f64; 3] {
        self.hi
    }
    pub fn lengths(&self) -> [f64; 3] {
        [
            self.hi[0] - self.lo[0],
            self.hi[1] - self.lo[1],
            self.hi[2] - self.lo[2],
        ]
    }
}
impl Region for Rect {
    fn contains(&self, coord: &[f64]) -> bool {
        (0..3).all(|k| self.lo[k] <= coord[k] && coord[k] <= self.hi[k])
    }
    fn random_coords<R: Rng + ?Sized>(&self, num_atoms: usize, rng: &mut R) -> Vec<f64> {
        let mut coords = Vec::with_capacity(3 * num_atoms);
        for _i in 0..num_atoms {
            for k in 0..3 {
                coords.push(rng.gen_range(self.lo[k]..self.hi[k]));
            }
        }
        coords
    }
}

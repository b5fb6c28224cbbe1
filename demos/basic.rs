use pairlist::prelude::*;
use pairlist::utils::perturb;
use rand::{rngs::StdRng, SeedableRng};

fn main() -> Result<(), Error> {
    let num_atoms = 10;
    let r0 = 1.1;

    // Straight chain along x, slightly shaken
    let mut x: Vec<f64> = (0..num_atoms).flat_map(|i| [r0 * i as f64, 0.0, 0.0]).collect();
    let mut rng = StdRng::seed_from_u64(2024);
    perturb(&mut x, 0.05, &mut rng)?;

    // Springs between neighbors along the chain, LJ between next-nearest neighbors
    let bonds: Vec<usize> = (0..num_atoms - 1).flat_map(|i| [i, i + 1]).collect();
    let angles: Vec<usize> = (0..num_atoms - 2).flat_map(|i| [i, i + 2]).collect();

    let springs: SimplePairwiseInteractionList<f64, _> =
        SimplePairwiseInteractionList::new(Harmonic::new(100.0, r0), &bonds);
    let lj: SimplePairwiseInteractionList<f64, _> =
        SimplePairwiseInteractionList::new(LJ::new(1.0, 0.5), &angles);

    let mut chain: CombinedPotential<f64> = CombinedPotential::new();
    chain.add_potential(Box::new(springs));
    chain.add_potential(Box::new(lj.with_validation(Validation::Always)));

    let mut grad = vec![0.0; x.len()];
    let energy = chain.energy_gradient(&x, &mut grad);
    let rms = (grad.iter().map(|g| g * g).sum::<f64>() / grad.len() as f64).sqrt();

    println!("Atoms: {}", num_atoms);
    println!("Bonds: {}  LJ pairs: {}", bonds.len() / 2, angles.len() / 2);
    println!("Energy: {:.6}", energy);
    println!("RMS gradient: {:.6}", rms);
    Ok(())
}

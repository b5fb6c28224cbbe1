use approx::assert_relative_eq;
use pairlist::prelude::*;
use pairlist::utils::perturb;
use rand::{rngs::StdRng, Rng, SeedableRng};

const NUM_ATOMS: usize = 12;

fn configuration(seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    // Loose cluster: keep LJ pairs away from the repulsive wall
    let lattice: Vec<f64> = (0..NUM_ATOMS)
        .flat_map(|i| [1.2 * (i % 3) as f64, 1.2 * ((i / 3) % 2) as f64, 1.2 * (i / 6) as f64])
        .collect();
    let mut x = lattice;
    perturb(&mut x, 0.05, &mut rng).unwrap();
    x
}

fn random_ilist(seed: u64, num_pairs: usize) -> Vec<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut ilist = Vec::with_capacity(2 * num_pairs);
    while ilist.len() < 2 * num_pairs {
        let i = rng.gen_range(0..NUM_ATOMS);
        let j = rng.gen_range(0..NUM_ATOMS);
        if i != j {
            ilist.extend([i, j]);
        }
    }
    ilist
}

fn lj_list(ilist: &[usize]) -> SimplePairwiseInteractionList<f64, LJ<f64>> {
    SimplePairwiseInteractionList::new(LJ::new(1.0, 1.0), ilist)
}

#[test]
fn energy_paths_agree() {
    let x = configuration(1);
    let pot = lj_list(&random_ilist(2, 20));
    let mut grad = vec![0.0; x.len()];
    assert_eq!(pot.energy(&x), pot.energy_gradient(&x, &mut grad));
}

#[test]
fn repeated_evaluation_is_bit_identical() {
    let x = configuration(3);
    let pot = lj_list(&random_ilist(4, 30));
    let mut g1 = vec![0.0; x.len()];
    let mut g2 = vec![0.0; x.len()];
    let e1 = pot.energy_gradient(&x, &mut g1);
    let e2 = pot.energy_gradient(&x, &mut g2);
    let e3 = pot.energy_gradient(&x, &mut g2);
    assert_eq!(e1.to_bits(), e2.to_bits());
    assert_eq!(e2.to_bits(), e3.to_bits());
    assert_eq!(g1, g2);
}

#[test]
fn energy_decomposes_into_pairs() {
    let x = configuration(5);
    let ilist = random_ilist(6, 15);
    let total = lj_list(&ilist).energy(&x);
    let sum: f64 = ilist.chunks_exact(2).map(|p| lj_list(p).energy(&x)).sum();
    assert_relative_eq!(total, sum, max_relative = 1e-12);
}

#[test]
fn swapping_pair_order_preserves_gradient() {
    let x = configuration(7);
    let forward = lj_list(&[2, 9]);
    let backward = lj_list(&[9, 2]);
    let mut gf = vec![0.0; x.len()];
    let mut gb = vec![0.0; x.len()];
    let ef = forward.energy_gradient(&x, &mut gf);
    let eb = backward.energy_gradient(&x, &mut gb);
    assert_eq!(ef, eb);
    // each particle still receives dE/dx, so the buffers agree
    for k in 0..x.len() {
        assert_relative_eq!(gf[k], gb[k], epsilon = 1e-12);
    }
    // contribution on the first listed particle flips to the second slot
    assert_relative_eq!(gf[6], -gf[27], epsilon = 1e-12);
}

#[test]
fn gradient_matches_finite_differences() {
    let x = configuration(8);
    let pot = lj_list(&random_ilist(9, 25));
    let mut grad = vec![0.0; x.len()];
    pot.energy_gradient(&x, &mut grad);
    let numerical = pot.numerical_gradient(&x, 1e-6);
    for k in 0..x.len() {
        assert_relative_eq!(grad[k], numerical[k], epsilon = 1e-5, max_relative = 1e-4);
    }
}

#[test]
fn gradient_sums_to_zero() {
    let x = configuration(10);
    let pot = lj_list(&random_ilist(11, 25));
    let mut grad = vec![0.0; x.len()];
    pot.energy_gradient(&x, &mut grad);
    for k in 0..3 {
        let total: f64 = grad.iter().skip(k).step_by(3).sum();
        assert_relative_eq!(total, 0.0, epsilon = 1e-9);
    }
}

#[test]
fn periodic_images_are_equivalent() {
    let mut x = configuration(12);
    let pot = SimplePairwiseInteractionList::with_distance(
        LJ::new(1.0, 1.0),
        &random_ilist(13, 20),
        PeriodicDistance::new([8.0, 8.0, 8.0]),
    );
    let e = pot.energy(&x);
    x[4] += 8.0;
    x[18] -= 16.0;
    assert_relative_eq!(pot.energy(&x), e, max_relative = 1e-10);
}

#[test]
fn checked_path_rejects_bad_lists() {
    let x = configuration(14);
    let pot = lj_list(&[0, NUM_ATOMS]);
    assert_eq!(
        pot.checked_energy(&x),
        Err(Error::IndexOutOfRange {
            index: NUM_ATOMS,
            num_atoms: NUM_ATOMS
        })
    );
}

#[test]
fn random_region_configuration() {
    let mut rng = StdRng::seed_from_u64(15);
    let rect = Rect::cube(6.0);
    let x = rect.random_coords(NUM_ATOMS, &mut rng);
    let pot = lj_list(&random_ilist(16, 10));
    assert!(pot.checked_energy(&x).unwrap().is_finite());
}

//! Energies and gradients of particle systems restricted to a fixed list of
//! interacting pairs.

pub mod distance;
pub mod error;
pub mod ilist;
pub mod interaction;
pub mod potential;
pub mod prelude;
pub mod region;
pub mod settings;
pub mod utils;

pub use distance::{CartesianDistance, DistancePolicy, PeriodicDistance};
pub use error::Error;
pub use ilist::SimplePairwiseInteractionList;
pub use interaction::*;
pub use potential::{CombinedPotential, Potential};
pub use region::{Rect, Region};
pub use settings::Validation;

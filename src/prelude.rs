pub use super::distance::{CartesianDistance, DistancePolicy, PeriodicDistance};
pub use super::ilist::SimplePairwiseInteractionList;
pub use super::interaction::{Harmonic, NoInteraction, PairInteraction, LJ};
pub use super::potential::{CombinedPotential, Potential};
pub use super::region::{Rect, Region};
pub use super::settings::Validation;
pub use super::Error;

/// Group of useful computations
pub mod computations;
/// Random displacement of configurations
pub mod perturb;

pub use computations::norm2;
pub use perturb::perturb;

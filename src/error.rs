use thiserror::Error;

/// Error types
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum Error {
    #[error("interaction list has odd length {0}")]
    OddInteractionList(usize),
    #[error("particle index {index} out of range for {num_atoms} atoms")]
    IndexOutOfRange { index: usize, num_atoms: usize },
    #[error("coordinate buffer length {0} is not a multiple of 3")]
    BadCoordinateLength(usize),
    #[error("gradient buffer length {grad} does not match coordinate buffer length {coords}")]
    LengthMismatch { coords: usize, grad: usize },
    #[error("invalid displacement standard deviation {0}")]
    InvalidStepSize(f64),
}

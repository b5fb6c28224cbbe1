/// When particle indices are checked against the coordinate buffer.
///
/// Index checks are an O(list length) pass before each evaluation. The
/// default skips them in optimized builds and trusts the caller; an index
/// that is out of range then still panics on slice access instead of
/// producing a descriptive error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Validation {
    /// Check only when debug assertions are enabled
    #[default]
    Debug,
    /// Check on every evaluation
    Always,
    /// Never check, also in debug builds
    Never,
}

impl Validation {
    pub fn enabled(&self) -> bool {
        match self {
            Validation::Debug => cfg!(debug_assertions),
            Validation::Always => true,
            Validation::Never => false,
        }
    }
}

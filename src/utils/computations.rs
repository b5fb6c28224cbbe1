use num_traits::Float;

/// Squared length of a separation vector
pub fn norm2<T: Float>(dr: &[T; 3]) -> T {
    dr[0] * dr[0] + dr[1] * dr[1] + dr[2] * dr[2]
}

/// Converts an `f64` literal into the scalar type, NaN if unrepresentable
pub(crate) fn constant<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

//! Shared lattice math helpers.

/// Floor a coordinate toward negative infinity, returning the lattice cell.
///
/// Plain `as i32` truncates toward zero, which would make negative
/// coordinates share a lattice cell with their positive mirror and produce a
/// visible seam at the origin. Subtracting one whenever truncation overshot
/// the real value gives consistent cells on both sides.
#[inline]
#[must_use]
pub fn floor(value: f64) -> i32 {
    let truncated = value as i32;
    if value < f64::from(truncated) {
        truncated - 1
    } else {
        truncated
    }
}

#[cfg(test)]
mod tests {
    use super::floor;

    #[test]
    fn test_floor_negative_coordinates() {
        assert_eq!(floor(2.7), 2);
        assert_eq!(floor(2.0), 2);
        assert_eq!(floor(0.0), 0);
        assert_eq!(floor(-0.1), -1);
        assert_eq!(floor(-2.0), -2);
        assert_eq!(floor(-2.7), -3);
    }
}

//! Constant-time equality for secret-dependent byte strings.

/// Constant-time comparison utilities.
///
/// This trait provides the equality test used for authentication tags and
/// signature challenges. Implementations must not return early on the
/// first differing byte, so the running time depends only on the lengths
/// of the inputs and never on their contents.
pub trait ConstantTimeEq {
    /// Returns `true` if `self == other`, in constant time.
    fn ct_eq(&self, other: &Self) -> bool;
}

impl ConstantTimeEq for [u8] {
    /// Constant-time equality test for byte slices.
    ///
    /// Slices of different lengths compare unequal; lengths are public.
    /// Otherwise all bytes are XORed and accumulated before the single
    /// final comparison.
    #[inline(never)]
    fn ct_eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        self.iter()
            .zip(other)
            .map(|(a, b)| a ^ b)
            .fold(0, |acc, v| acc | v)
            == 0
    }
}

impl<const N: usize> ConstantTimeEq for [u8; N] {
    #[inline(always)]
    fn ct_eq(&self, other: &Self) -> bool {
        self[..].ct_eq(&other[..])
    }
}

#[cfg(test)]
mod tests {
    use super::ConstantTimeEq;

    #[test]
    fn equal_and_unequal_slices() {
        assert!([1u8, 2, 3][..].ct_eq(&[1, 2, 3][..]));
        assert!(![1u8, 2, 3][..].ct_eq(&[1, 2, 4][..]));
        assert!(![1u8, 2, 3][..].ct_eq(&[1, 2][..]));
        assert!([0u8; 64].ct_eq(&[0u8; 64]));
    }
}

use rand::TryCryptoRng;

use crate::errors::Error;

/// A fallible source of cryptographically secure random bytes.
///
/// Every [`TryCryptoRng`] is a random source, which covers both infallible
/// generators such as `StdRng` and fallible ones such as `OsRng`. The trait is
/// object safe so callers can hand over `&mut dyn RandomSource`.
pub trait RandomSource {
    /// Fills `dest` entirely, or reports why it could not.
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), Error>;
}

impl<R: TryCryptoRng + ?Sized> RandomSource for R {
    #[inline]
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.try_fill_bytes(dest)
            .map_err(|err| Error::RandomSource(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_std_rng_is_a_source() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        rng.fill(&mut a).unwrap();
        rng.fill(&mut b).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_dyn_source() {
        let mut rng = StdRng::seed_from_u64(7);
        let source: &mut dyn RandomSource = &mut rng;
        let mut buf = [0u8; 16];
        source.fill(&mut buf).unwrap();
        assert_ne!(buf, [0u8; 16]);
    }
}

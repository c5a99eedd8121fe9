//! Randomness capability injected into engines

use crate::types::DrbgSeed;
use crate::Result;

/// Something that can hand out random bytes.
///
/// One request is one unit of state advance: a deterministic source must give
/// identical output for identical sequences of request lengths, which is not
/// the same as identical total lengths.
pub trait RandomSource {
    /// Fill `dest` with the next `dest.len()` bytes.
    fn fill(&mut self, dest: &mut [u8]) -> Result<()>;

    /// Return the next `n` bytes.
    fn random_bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        let mut out = vec![0u8; n];
        self.fill(&mut out)?;
        Ok(out)
    }
}

/// A source whose state can be reset from a seed.
pub trait Reseed: RandomSource {
    /// Reset state as if freshly constructed from `seed`.
    fn reseed(&mut self, seed: &DrbgSeed);
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        (**self).fill(dest)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        (**self).fill(dest)
    }
}

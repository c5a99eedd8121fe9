//! Swappable randomness for engines
//!
//! Engines start on operating-system entropy and are switched to a
//! deterministic [`CtrDrbg`] the first time a seed is injected.

use rand::rngs::OsRng;
use rand::RngCore;

use kyberkat_api::{DrbgSeed, Error, RandomSource, Reseed, Result};

use crate::ctr::CtrDrbg;

/// Operating-system entropy
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEntropy;

impl RandomSource for SystemEntropy {
    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| Error::RandomGenerationError {
                context: "SystemEntropy::fill",
                message: e.to_string(),
            })
    }
}

/// Randomness source held by an engine
#[derive(Debug)]
pub enum Randomness {
    /// Fresh OS entropy on every request
    System(SystemEntropy),
    /// Reproducible output from a seeded DRBG
    Deterministic(CtrDrbg),
}

impl Randomness {
    /// Start on a DRBG seeded with `seed`.
    pub fn seeded(seed: &DrbgSeed) -> Self {
        Self::Deterministic(CtrDrbg::new(seed))
    }

    /// True once a seed has been injected.
    pub fn is_deterministic(&self) -> bool {
        matches!(self, Self::Deterministic(_))
    }
}

impl Default for Randomness {
    fn default() -> Self {
        Self::System(SystemEntropy)
    }
}

impl RandomSource for Randomness {
    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        match self {
            Self::System(os) => os.fill(dest),
            Self::Deterministic(drbg) => drbg.fill(dest),
        }
    }
}

impl Reseed for Randomness {
    fn reseed(&mut self, seed: &DrbgSeed) {
        match self {
            Self::Deterministic(drbg) => drbg.reseed(seed),
            Self::System(_) => {
                tracing::debug!("switching randomness from system entropy to CTR DRBG");
                *self = Self::seeded(seed);
            }
        }
    }
}

//! Randomness sources for the kyberkat harness
//!
//! [`CtrDrbg`] is the deterministic random-bit generator used by the NIST PQC
//! Known-Answer-Test generator: AES-256 in counter mode, no derivation function,
//! seeded from 48 bytes. [`SystemEntropy`] wraps the operating system RNG.
//! [`Randomness`] is the swappable source engines own by default: system
//! entropy until a seed is injected, the DRBG afterwards.

mod ctr;
mod entropy;

pub use ctr::{CtrDrbg, SeedStream, MAX_REDERIVE_INDEX, RESEED_INTERVAL};
pub use entropy::{Randomness, SystemEntropy};

pub use kyberkat_api::{DrbgSeed, RandomSource, Reseed, DRBG_SEED_BYTES};

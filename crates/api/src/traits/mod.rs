//! Traits implemented by KEM engines and their randomness sources

pub mod kem;
pub mod rng;

pub use kem::{KemEngine, SeedableEngine, SymmetricPrimitives};
pub use rng::{RandomSource, Reseed};

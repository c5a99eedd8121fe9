//! Public API traits and types for the kyberkat harness
//!
//! This crate provides the contracts every other kyberkat crate is written
//! against: the error type, the byte containers exchanged with a KEM engine,
//! the 48-byte DRBG seed, and the traits an engine and its randomness source
//! must implement.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::*;

// Re-export all traits from the traits module
pub use traits::{KemEngine, RandomSource, Reseed, SeedableEngine, SymmetricPrimitives};

// Re-export trait modules for direct access
pub use traits::{kem, rng};

//! Kyber / ML-KEM engine adapter
//!
//! This crate wraps an ML-KEM implementation behind the engine contract of
//! `kyberkat-api`: one [`KyberEngine`] per parameter set, each owning the
//! randomness source it draws key-generation and encapsulation coins from.

pub mod error;
pub mod kyber;

// Re-exports
pub use error::{Error, Result};
pub use kyber::{KyberEngine, ParameterSet};
pub use kyberkat_drbg::Randomness;

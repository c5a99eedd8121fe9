//! Kyber Key Encapsulation Mechanism (KEM).
//!
//! The lattice arithmetic comes from the RustCrypto `ml-kem` crate (FIPS 203).
//! This module binds it to a parameter set, routes its randomness through an
//! injectable source and exposes its symmetric primitives for validation
//! tests.

mod kem; // KyberEngine and the KemEngine implementation
mod params; // Parameter sets and byte sizes
pub mod symmetric; // XOF and PRF wrappers

pub use self::kem::KyberEngine;
pub use self::params::{ParameterSet, KYBER_SS_BYTES, KYBER_SYM_BYTES};

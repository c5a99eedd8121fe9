//! Engine contract for Key Encapsulation Mechanisms under test
//!
//! The harness never looks inside an engine. It only drives these three
//! operations, injects seeds, and compares the bytes that come back.

use crate::types::{Ciphertext, DrbgSeed, PublicKey, SecretKey, SharedSecret};
use crate::Result;

/// A KEM engine bound to one parameter set.
///
/// Key generation and encapsulation take `&mut self` because they consume
/// the engine's randomness source; decapsulation is deterministic.
pub trait KemEngine {
    /// Returns the engine's algorithm name, e.g. `"Kyber-512"`.
    fn name(&self) -> &'static str;

    /// Generate a new keypair.
    ///
    /// # Requirements
    /// - Must draw all randomness from the engine's injected source.
    fn keygen(&mut self) -> Result<(PublicKey, SecretKey)>;

    /// Encapsulate a shared secret using the recipient's public key.
    ///
    /// # Requirements
    /// - Must validate the public key length.
    /// - Must draw all randomness from the engine's injected source.
    fn encaps(&mut self, public_key: &PublicKey) -> Result<(Ciphertext, SharedSecret)>;

    /// Decapsulate a shared secret using the secret key.
    ///
    /// # Requirements
    /// - A well-sized but invalid ciphertext must not fail: implicit
    ///   rejection returns a pseudorandom shared secret instead.
    fn decaps(&self, secret_key: &SecretKey, ciphertext: &Ciphertext) -> Result<SharedSecret>;
}

/// An engine whose randomness can be pinned to a deterministic DRBG.
pub trait SeedableEngine: KemEngine {
    /// Reset the engine's randomness to a DRBG freshly seeded with `seed`.
    ///
    /// Every subsequent `keygen`/`encaps` is a pure function of the seed and
    /// the sequence of calls made since.
    fn set_drbg_seed(&mut self, seed: &DrbgSeed);
}

/// Hash-based helpers an engine exposes, each with strict input validation.
///
/// Malformed input must be rejected with a value error
/// ([`crate::Error::InvalidLength`]), never hashed.
pub trait SymmetricPrimitives {
    /// Extendable-output function over `seed || i || j`.
    fn xof(&self, seed: &[u8], i: &[u8], j: &[u8], output_len: usize) -> Result<Vec<u8>>;

    /// Pseudo-random function over `seed || nonce`.
    fn prf(&self, seed: &[u8], nonce: &[u8], output_len: usize) -> Result<Vec<u8>>;
}

//! Core types exchanged between the harness and a KEM engine
//!
//! Keys, ciphertexts and shared secrets are opaque byte strings here: their
//! layout is fixed by the engine's parameter set, and checking that layout
//! against recorded vectors is exactly what the harness does. Secret material
//! is zeroized on drop and compared in constant time.

use core::fmt;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{Error, Result};

/// Size in bytes of the seed accepted by the AES-256 CTR DRBG
pub const DRBG_SEED_BYTES: usize = 48;

/// Number of leading bytes shown when a byte string is logged or debugged
const PREVIEW_BYTES: usize = 8;

fn preview(bytes: &[u8]) -> String {
    let shown = bytes.len().min(PREVIEW_BYTES);
    let mut out = hex::encode(&bytes[..shown]);
    if bytes.len() > shown {
        out.push_str("..");
    }
    out
}

/// Engine public key (encapsulation key)
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey(Vec<u8>);

/// Engine secret key (decapsulation key)
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey(Vec<u8>);

/// Engine ciphertext
#[derive(Clone, PartialEq, Eq)]
pub struct Ciphertext(Vec<u8>);

/// Shared secret produced by encapsulation or decapsulation
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret(Vec<u8>);

macro_rules! impl_bytes {
    ($name:ident) => {
        impl $name {
            /// Wrap raw bytes
            pub fn new(bytes: Vec<u8>) -> Self {
                Self(bytes)
            }

            /// Copy a slice into a new value
            pub fn from_slice(bytes: &[u8]) -> Self {
                Self(bytes.to_vec())
            }

            /// Length in bytes
            pub fn len(&self) -> usize {
                self.0.len()
            }

            /// True when the value holds no bytes
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl AsMut<[u8]> for $name {
            fn as_mut(&mut self) -> &mut [u8] {
                &mut self.0
            }
        }
    };
}

impl_bytes!(PublicKey);
impl_bytes!(SecretKey);
impl_bytes!(Ciphertext);
impl_bytes!(SharedSecret);

impl Ciphertext {
    /// An all-zero ciphertext of `len` bytes, the canonical tampered input
    pub fn zeroed(len: usize) -> Self {
        Self(vec![0u8; len])
    }
}

impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl Eq for SecretKey {}

impl PartialEq for SharedSecret {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl Eq for SharedSecret {}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({} bytes, {})", self.0.len(), preview(&self.0))
    }
}

impl fmt::Debug for Ciphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ciphertext({} bytes, {})", self.0.len(), preview(&self.0))
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey({} bytes, [REDACTED])", self.0.len())
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedSecret({} bytes, [REDACTED])", self.0.len())
    }
}

/// A 48-byte DRBG seed
///
/// Seeds are not secret in this harness: they are published in KAT files and
/// printed in failure reports, so the type is `Copy` and displays as hex.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrbgSeed([u8; DRBG_SEED_BYTES]);

impl DrbgSeed {
    /// Create a seed from an existing array
    pub const fn new(bytes: [u8; DRBG_SEED_BYTES]) -> Self {
        Self(bytes)
    }

    /// Create from a slice, if it has the correct length
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        if slice.len() != DRBG_SEED_BYTES {
            return Err(Error::InvalidLength {
                context: "DrbgSeed::from_slice",
                expected: DRBG_SEED_BYTES,
                actual: slice.len(),
            });
        }
        let mut bytes = [0u8; DRBG_SEED_BYTES];
        bytes.copy_from_slice(slice);
        Ok(Self(bytes))
    }

    /// Parse a seed from 96 hexadecimal characters
    pub fn from_hex(text: &str) -> Result<Self> {
        let bytes = hex::decode(text.trim())?;
        Self::from_slice(&bytes)
    }

    /// The bytes `0x00, 0x01, ..., 0x2F`
    ///
    /// This is the entropy input the NIST PQC KAT generator seeds its DRBG
    /// with before drawing one seed per vector.
    pub fn incrementing() -> Self {
        let mut bytes = [0u8; DRBG_SEED_BYTES];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8;
        }
        Self(bytes)
    }

    /// Draw a fresh seed from a cryptographic RNG
    pub fn random<R: rand::RngCore + rand::CryptoRng>(rng: &mut R) -> Self {
        let mut bytes = [0u8; DRBG_SEED_BYTES];
        rng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Copy of this seed with bit `bit` (0 = LSB of byte 0) inverted
    pub fn with_bit_flipped(&self, bit: usize) -> Self {
        let mut bytes = self.0;
        bytes[(bit / 8) % DRBG_SEED_BYTES] ^= 1 << (bit % 8);
        Self(bytes)
    }

    /// Borrow the raw bytes
    pub fn as_bytes(&self) -> &[u8; DRBG_SEED_BYTES] {
        &self.0
    }
}

impl AsRef<[u8]> for DrbgSeed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for DrbgSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode_upper(self.0))
    }
}

impl fmt::Debug for DrbgSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DrbgSeed({})", self)
    }
}

//! Kyber parameter sets and their byte sizes.

use core::fmt;
use core::str::FromStr;

use crate::error::{Error, Result};

/// Shared secret size for all Kyber variants.
pub const KYBER_SS_BYTES: usize = 32;
/// Size of the seeds and coins the scheme draws (`SYMBYTES`).
pub const KYBER_SYM_BYTES: usize = 32;

/// One of the three standardised Kyber / ML-KEM parameter sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParameterSet {
    /// k = 2
    Kyber512,
    /// k = 3
    Kyber768,
    /// k = 4
    Kyber1024,
}

impl ParameterSet {
    /// Every parameter set, in ascending security order.
    pub const ALL: [ParameterSet; 3] = [
        ParameterSet::Kyber512,
        ParameterSet::Kyber768,
        ParameterSet::Kyber1024,
    ];

    /// Security parameter k (module rank).
    pub const fn k(self) -> usize {
        match self {
            ParameterSet::Kyber512 => 2,
            ParameterSet::Kyber768 => 3,
            ParameterSet::Kyber1024 => 4,
        }
    }

    /// Algorithm name string.
    pub const fn name(self) -> &'static str {
        match self {
            ParameterSet::Kyber512 => "Kyber-512",
            ParameterSet::Kyber768 => "Kyber-768",
            ParameterSet::Kyber1024 => "Kyber-1024",
        }
    }

    /// Size of the public key in bytes.
    pub const fn public_key_bytes(self) -> usize {
        384 * self.k() + KYBER_SYM_BYTES
    }

    /// Size of the secret key in bytes.
    pub const fn secret_key_bytes(self) -> usize {
        384 * self.k() + self.public_key_bytes() + 2 * KYBER_SYM_BYTES
    }

    /// Size of the ciphertext in bytes.
    pub const fn ciphertext_bytes(self) -> usize {
        match self {
            // du = 10, dv = 4
            ParameterSet::Kyber512 | ParameterSet::Kyber768 => 320 * self.k() + 128,
            // du = 11, dv = 5
            ParameterSet::Kyber1024 => 352 * self.k() + 160,
        }
    }

    /// Size of the shared secret in bytes.
    pub const fn shared_secret_bytes(self) -> usize {
        KYBER_SS_BYTES
    }

    /// Parameter set for module rank `k`.
    pub fn from_k(k: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.k() == k)
    }

    /// Parameter set whose secret key is `len` bytes.
    ///
    /// NIST KAT files are named after this size (`PQCkemKAT_1632.rsp`).
    pub fn from_secret_key_len(len: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.secret_key_bytes() == len)
    }

    /// Resolve a user-supplied identifier.
    ///
    /// Accepts `2|3|4`, `kyber512|kyber768|kyber1024` and
    /// `ml-kem-512|ml-kem-768|ml-kem-1024`, case-insensitively, with `-`
    /// and `_` ignored.
    pub fn from_identifier(identifier: &str) -> Result<Self> {
        let normalized: String = identifier
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        let found = match normalized.as_str() {
            "2" | "kyber512" | "mlkem512" => Some(ParameterSet::Kyber512),
            "3" | "kyber768" | "mlkem768" => Some(ParameterSet::Kyber768),
            "4" | "kyber1024" | "mlkem1024" => Some(ParameterSet::Kyber1024),
            _ => None,
        };

        found.ok_or_else(|| Error::UnknownParameterSet {
            identifier: identifier.to_string(),
        })
    }
}

impl FromStr for ParameterSet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_identifier(s)
    }
}

impl fmt::Display for ParameterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

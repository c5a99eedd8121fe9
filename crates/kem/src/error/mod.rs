//! Error handling for the KEM engine adapter

use core::fmt;
use kyberkat_api::error::Error as CoreError;

/// Error type for engine operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Error raised by shared infrastructure (validation, randomness)
    Core(CoreError),

    /// KEM-specific errors
    KeyGeneration {
        algorithm: &'static str,
        details: &'static str,
    },

    Encapsulation {
        algorithm: &'static str,
        details: &'static str,
    },

    Decapsulation {
        algorithm: &'static str,
        details: &'static str,
    },

    /// Invalid key format
    InvalidKey {
        key_type: &'static str,
        reason: &'static str,
    },

    /// Invalid ciphertext format
    InvalidCiphertext {
        algorithm: &'static str,
        reason: &'static str,
    },

    /// Identifier that names none of the supported parameter sets
    UnknownParameterSet { identifier: String },
}

/// Result type for engine operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Core(e) => write!(f, "{}", e),
            Error::KeyGeneration { algorithm, details } => {
                write!(f, "Key generation error for {}: {}", algorithm, details)
            }
            Error::Encapsulation { algorithm, details } => {
                write!(f, "Encapsulation error for {}: {}", algorithm, details)
            }
            Error::Decapsulation { algorithm, details } => {
                write!(f, "Decapsulation error for {}: {}", algorithm, details)
            }
            Error::InvalidKey { key_type, reason } => {
                write!(f, "Invalid {} key: {}", key_type, reason)
            }
            Error::InvalidCiphertext { algorithm, reason } => {
                write!(f, "Invalid {} ciphertext: {}", algorithm, reason)
            }
            Error::UnknownParameterSet { identifier } => {
                write!(
                    f,
                    "unknown parameter set '{}' (expected 2, 3, 4, kyber512, kyber768, kyber1024 or ml-kem-512/768/1024)",
                    identifier
                )
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Core(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CoreError> for Error {
    fn from(err: CoreError) -> Self {
        Error::Core(err)
    }
}

// From Error to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Core(e) => e,
            Error::KeyGeneration { algorithm, details } => CoreError::Other {
                context: algorithm,
                message: format!("key generation failed: {}", details),
            },
            Error::Encapsulation { algorithm, details } => CoreError::Other {
                context: algorithm,
                message: format!("encapsulation failed: {}", details),
            },
            Error::Decapsulation { algorithm, details } => CoreError::Other {
                context: algorithm,
                message: format!("decapsulation failed: {}", details),
            },
            Error::InvalidKey { key_type, reason } => CoreError::InvalidKey {
                context: key_type,
                message: reason.to_string(),
            },
            Error::InvalidCiphertext { algorithm, reason } => CoreError::InvalidCiphertext {
                context: algorithm,
                message: reason.to_string(),
            },
            Error::UnknownParameterSet { identifier } => CoreError::InvalidParameter {
                context: "parameter set",
                message: format!("unknown parameter set '{}'", identifier),
            },
        }
    }
}

// Include validation submodule
pub mod validate;

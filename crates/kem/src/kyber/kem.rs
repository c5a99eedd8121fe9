//! Kyber engine adapter.
//!
//! Key generation and encapsulation randomness is drawn from the engine's
//! [`RandomSource`] in exactly the requests the NIST reference
//! implementation makes (64 bytes for a keypair, 32 bytes for an
//! encapsulation), then handed to the deterministic ML-KEM entry points.
//! Seeding the source therefore reproduces reference KAT vectors.

use ml_kem::kem::Decapsulate;
use ml_kem::{
    Ciphertext as MlKemCiphertext, EncapsulateDeterministic, Encoded, EncodedSizeUser, KemCore,
    MlKem1024, MlKem512, MlKem768,
};
use zeroize::Zeroizing;

use kyberkat_api::{
    Ciphertext, DrbgSeed, KemEngine, PublicKey, RandomSource, Reseed, Result, SecretKey,
    SeedableEngine, SharedSecret, SymmetricPrimitives,
};
use kyberkat_drbg::Randomness;

use super::params::{ParameterSet, KYBER_SYM_BYTES};
use super::symmetric;
use crate::error::{validate, Error as KemError, Result as KemResult};

macro_rules! with_kem {
    ($params:expr, $func:ident ( $($arg:expr),* $(,)? )) => {
        match $params {
            ParameterSet::Kyber512 => $func::<MlKem512>($($arg),*),
            ParameterSet::Kyber768 => $func::<MlKem768>($($arg),*),
            ParameterSet::Kyber1024 => $func::<MlKem1024>($($arg),*),
        }
    };
}

fn generate<K: KemCore>(d: &[u8; KYBER_SYM_BYTES], z: &[u8; KYBER_SYM_BYTES]) -> (Vec<u8>, Vec<u8>) {
    let (dk, ek) = K::generate_deterministic(&(*d).into(), &(*z).into());
    (ek.as_bytes().to_vec(), dk.as_bytes().to_vec())
}

fn encapsulate<K: KemCore>(
    algorithm: &'static str,
    public_key: &[u8],
    m: &[u8; KYBER_SYM_BYTES],
) -> KemResult<(Vec<u8>, Vec<u8>)> {
    let encoded = Encoded::<K::EncapsulationKey>::try_from(public_key).map_err(|_| {
        KemError::InvalidKey {
            key_type: "encapsulation",
            reason: "encoded key has the wrong size",
        }
    })?;
    let ek = K::EncapsulationKey::from_bytes(&encoded);
    let (ct, ss) = ek
        .encapsulate_deterministic(&(*m).into())
        .map_err(|_| KemError::Encapsulation {
            algorithm,
            details: "deterministic encapsulation failed",
        })?;
    Ok((ct.to_vec(), ss.to_vec()))
}

fn decapsulate<K: KemCore>(
    algorithm: &'static str,
    secret_key: &[u8],
    ciphertext: &[u8],
) -> KemResult<Vec<u8>> {
    let encoded = Encoded::<K::DecapsulationKey>::try_from(secret_key).map_err(|_| {
        KemError::InvalidKey {
            key_type: "decapsulation",
            reason: "encoded key has the wrong size",
        }
    })?;
    let dk = K::DecapsulationKey::from_bytes(&encoded);
    let ct = MlKemCiphertext::<K>::try_from(ciphertext).map_err(|_| {
        KemError::InvalidCiphertext {
            algorithm,
            reason: "ciphertext has the wrong size",
        }
    })?;
    let ss = dk.decapsulate(&ct).map_err(|_| KemError::Decapsulation {
        algorithm,
        details: "decapsulation failed",
    })?;
    Ok(ss.to_vec())
}

/// A Kyber engine bound to one parameter set and owning its randomness.
///
/// Instances are independent: two engines never share a randomness stream.
#[derive(Debug)]
pub struct KyberEngine<R = Randomness> {
    params: ParameterSet,
    rng: R,
}

impl KyberEngine<Randomness> {
    /// Engine on operating-system entropy until a seed is injected.
    pub fn new(params: ParameterSet) -> Self {
        Self::with_rng(params, Randomness::default())
    }

    /// Engine whose randomness starts as a DRBG seeded with `seed`.
    pub fn seeded(params: ParameterSet, seed: &DrbgSeed) -> Self {
        Self::with_rng(params, Randomness::seeded(seed))
    }
}

impl<R: RandomSource> KyberEngine<R> {
    /// Engine drawing all of its randomness from `rng`.
    pub fn with_rng(params: ParameterSet, rng: R) -> Self {
        Self { params, rng }
    }

    /// Parameter set this engine is bound to.
    pub fn parameter_set(&self) -> ParameterSet {
        self.params
    }

    /// Borrow the randomness source.
    pub fn rng(&self) -> &R {
        &self.rng
    }
}

impl<R: RandomSource> KemEngine for KyberEngine<R> {
    fn name(&self) -> &'static str {
        self.params.name()
    }

    fn keygen(&mut self) -> Result<(PublicKey, SecretKey)> {
        let algorithm = self.params.name();

        // One 64-byte request: d || z
        let mut coins = Zeroizing::new([0u8; 2 * KYBER_SYM_BYTES]);
        self.rng.fill(&mut coins[..])?;
        let mut d = Zeroizing::new([0u8; KYBER_SYM_BYTES]);
        let mut z = Zeroizing::new([0u8; KYBER_SYM_BYTES]);
        d.copy_from_slice(&coins[..KYBER_SYM_BYTES]);
        z.copy_from_slice(&coins[KYBER_SYM_BYTES..]);

        let (pk, sk) = with_kem!(self.params, generate(&d, &z));
        let (pk, sk) = (PublicKey::new(pk), SecretKey::new(sk));

        validate::key_generation(
            pk.len() == self.params.public_key_bytes() && sk.len() == self.params.secret_key_bytes(),
            algorithm,
            "engine produced keys of unexpected size",
        )?;
        tracing::trace!(algorithm, public_key = ?pk, "generated keypair");
        Ok((pk, sk))
    }

    fn encaps(&mut self, public_key: &PublicKey) -> Result<(Ciphertext, SharedSecret)> {
        let algorithm = self.params.name();
        validate::length(
            "KyberEngine::encaps public key",
            public_key.len(),
            self.params.public_key_bytes(),
        )?;

        let mut m = Zeroizing::new([0u8; KYBER_SYM_BYTES]);
        self.rng.fill(&mut m[..])?;

        let (ct, ss) = with_kem!(self.params, encapsulate(algorithm, public_key.as_ref(), &m))?;
        let (ct, ss) = (Ciphertext::new(ct), SharedSecret::new(ss));

        validate::encapsulation(
            ct.len() == self.params.ciphertext_bytes(),
            algorithm,
            "engine produced a ciphertext of unexpected size",
        )?;
        tracing::trace!(algorithm, ciphertext = ?ct, "encapsulated");
        Ok((ct, ss))
    }

    fn decaps(&self, secret_key: &SecretKey, ciphertext: &Ciphertext) -> Result<SharedSecret> {
        let algorithm = self.params.name();
        validate::key(
            secret_key.len() == self.params.secret_key_bytes(),
            algorithm,
            "secret key has the wrong length",
        )?;
        validate::ciphertext(
            ciphertext.len() == self.params.ciphertext_bytes(),
            algorithm,
            "ciphertext has the wrong length",
        )?;

        let ss = with_kem!(
            self.params,
            decapsulate(algorithm, secret_key.as_ref(), ciphertext.as_ref())
        )?;
        Ok(SharedSecret::new(ss))
    }
}

impl<R: Reseed> SeedableEngine for KyberEngine<R> {
    fn set_drbg_seed(&mut self, seed: &DrbgSeed) {
        tracing::trace!(algorithm = self.params.name(), seed = %seed, "injecting DRBG seed");
        self.rng.reseed(seed);
    }
}

impl<R: RandomSource> SymmetricPrimitives for KyberEngine<R> {
    fn xof(&self, seed: &[u8], i: &[u8], j: &[u8], output_len: usize) -> Result<Vec<u8>> {
        symmetric::xof(seed, i, j, output_len)
    }

    fn prf(&self, seed: &[u8], nonce: &[u8], output_len: usize) -> Result<Vec<u8>> {
        symmetric::prf(seed, nonce, output_len)
    }
}

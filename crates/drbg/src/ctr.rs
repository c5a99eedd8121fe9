//! AES-256 CTR DRBG (NIST SP 800-90A, no derivation function)
//!
//! This is the construction the NIST PQC reference `rng.c` uses to generate
//! Known-Answer-Test files, reproduced so that an engine driven through it
//! emits byte-identical vectors. It is for reproducibility only.

use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockEncrypt, KeyInit};
use aes::{Aes256, Block};
use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use kyberkat_api::{DrbgSeed, Error, RandomSource, Reseed, Result, DRBG_SEED_BYTES};

/// Maximum number of generate requests between reseeds (SP 800-90A, table 3)
pub const RESEED_INTERVAL: u64 = 1 << 48;

/// Highest index [`SeedStream::seed_at`] will walk to
pub const MAX_REDERIVE_INDEX: u64 = 1 << 20;

/// Deterministic random-bit generator state.
///
/// Not `Clone`: two consumers sharing one stream would break the
/// byte-identical output guarantee. Build a second instance from the same
/// seed instead.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct CtrDrbg {
    key: [u8; 32],
    v: [u8; 16],
    reseed_counter: u64,
}

impl CtrDrbg {
    /// Instantiate from a 48-byte entropy input.
    pub fn new(seed: &DrbgSeed) -> Self {
        Self::with_personalization(seed, None)
    }

    /// Instantiate with an optional personalization string XORed into the
    /// seed material.
    pub fn with_personalization(
        seed: &DrbgSeed,
        personalization: Option<&[u8; DRBG_SEED_BYTES]>,
    ) -> Self {
        let mut material = *seed.as_bytes();
        if let Some(ps) = personalization {
            for (m, p) in material.iter_mut().zip(ps.iter()) {
                *m ^= p;
            }
        }

        let mut drbg = Self {
            key: [0u8; 32],
            v: [0u8; 16],
            reseed_counter: 1,
        };
        drbg.update(Some(&material));
        material.zeroize();
        drbg
    }

    /// Number of generate requests served since instantiation, plus one.
    pub fn reseed_counter(&self) -> u64 {
        self.reseed_counter
    }

    // Big-endian increment of V
    fn increment_v(&mut self) {
        for byte in self.v.iter_mut().rev() {
            if *byte == 0xff {
                *byte = 0x00;
            } else {
                *byte += 1;
                break;
            }
        }
    }

    fn cipher(&self) -> Aes256 {
        Aes256::new(GenericArray::from_slice(&self.key))
    }

    fn update(&mut self, provided_data: Option<&[u8; DRBG_SEED_BYTES]>) {
        let cipher = self.cipher();
        let mut temp = [0u8; DRBG_SEED_BYTES];
        for chunk in temp.chunks_exact_mut(16) {
            self.increment_v();
            let mut block = Block::clone_from_slice(&self.v);
            cipher.encrypt_block(&mut block);
            chunk.copy_from_slice(&block);
        }
        if let Some(data) = provided_data {
            for (t, d) in temp.iter_mut().zip(data.iter()) {
                *t ^= d;
            }
        }
        self.key.copy_from_slice(&temp[..32]);
        self.v.copy_from_slice(&temp[32..]);
        temp.zeroize();
    }

    /// One SP 800-90A generate call: fill `dest`, then update the state.
    pub fn generate(&mut self, dest: &mut [u8]) -> Result<()> {
        if self.reseed_counter > RESEED_INTERVAL {
            return Err(Error::RandomGenerationError {
                context: "CtrDrbg::generate",
                message: "reseed interval exhausted, reseed the DRBG".into(),
            });
        }

        let cipher = self.cipher();
        for chunk in dest.chunks_mut(16) {
            self.increment_v();
            let mut block = Block::clone_from_slice(&self.v);
            cipher.encrypt_block(&mut block);
            chunk.copy_from_slice(&block[..chunk.len()]);
        }
        self.update(None);
        self.reseed_counter += 1;
        Ok(())
    }
}

impl RandomSource for CtrDrbg {
    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        self.generate(dest)
    }
}

impl Reseed for CtrDrbg {
    fn reseed(&mut self, seed: &DrbgSeed) {
        tracing::trace!(seed = %seed, "reseeding CTR DRBG");
        *self = Self::new(seed);
    }
}

impl rand::RngCore for CtrDrbg {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        u64::from_le_bytes(buf)
    }

    /// # Panics
    /// Panics if the reseed interval is exhausted, like every `RngCore`
    /// whose `try_fill_bytes` can fail.
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        if let Err(e) = self.generate(dest) {
            panic!("CtrDrbg: {}", e);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> core::result::Result<(), rand::Error> {
        self.generate(dest).map_err(rand::Error::new)
    }
}

impl rand::CryptoRng for CtrDrbg {}

impl fmt::Debug for CtrDrbg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CtrDrbg")
            .field("reseed_counter", &self.reseed_counter)
            .finish_non_exhaustive()
    }
}

/// The seed sequence a KAT file producer derives from its entropy input.
///
/// Vector `i` of a NIST-style KAT file is seeded with the `i`-th 48-byte
/// draw of a DRBG instantiated from the entropy input.
#[derive(Debug)]
pub struct SeedStream {
    drbg: CtrDrbg,
    position: u64,
}

impl SeedStream {
    /// Start a stream from an entropy input.
    pub fn new(entropy: &DrbgSeed) -> Self {
        Self {
            drbg: CtrDrbg::new(entropy),
            position: 0,
        }
    }

    /// Index of the next seed this stream will hand out.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Draw the next seed.
    pub fn next_seed(&mut self) -> Result<DrbgSeed> {
        let mut bytes = [0u8; DRBG_SEED_BYTES];
        self.drbg.generate(&mut bytes)?;
        self.position += 1;
        Ok(DrbgSeed::new(bytes))
    }

    /// Advance to `index` and return the seed for it.
    ///
    /// Indices must be requested in increasing order; gaps are skipped over.
    /// Indices above [`MAX_REDERIVE_INDEX`] are refused without drawing.
    pub fn seed_at(&mut self, index: u64) -> Result<DrbgSeed> {
        if index > MAX_REDERIVE_INDEX {
            return Err(Error::InvalidParameter {
                context: "SeedStream::seed_at",
                message: format!(
                    "seed {} is beyond the re-derivable range (max {})",
                    index, MAX_REDERIVE_INDEX
                ),
            });
        }
        if index < self.position {
            return Err(Error::InvalidParameter {
                context: "SeedStream::seed_at",
                message: format!(
                    "seed {} already consumed (stream is at {})",
                    index, self.position
                ),
            });
        }
        while self.position < index {
            self.next_seed()?;
        }
        self.next_seed()
    }
}

impl Iterator for SeedStream {
    type Item = Result<DrbgSeed>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_seed())
    }
}

//! Symmetric primitives of the scheme, exposed for input-validation tests.
//!
//! `XOF(rho, i, j) = SHAKE128(rho || i || j)` and
//! `PRF(s, b) = SHAKE256(s || b)`. Inputs of the wrong size are rejected
//! before anything is absorbed.

use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{Shake128, Shake256};

use kyberkat_api::Result;

use super::params::KYBER_SYM_BYTES;
use crate::error::validate;

fn squeeze<X: ExtendableOutput>(xof: X, output_len: usize) -> Vec<u8> {
    let mut out = vec![0u8; output_len];
    xof.finalize_xof().read(&mut out);
    out
}

/// `SHAKE128(rho || i || j)` with `rho` 32 bytes and `i`, `j` one byte each.
pub fn xof(rho: &[u8], i: &[u8], j: &[u8], output_len: usize) -> Result<Vec<u8>> {
    validate::length("XOF seed", rho.len(), KYBER_SYM_BYTES)?;
    validate::length("XOF index i", i.len(), 1)?;
    validate::length("XOF index j", j.len(), 1)?;

    let mut shake = Shake128::default();
    shake.update(rho);
    shake.update(i);
    shake.update(j);
    Ok(squeeze(shake, output_len))
}

/// `SHAKE256(s || b)` with `s` 32 bytes and `b` one byte.
pub fn prf(s: &[u8], b: &[u8], output_len: usize) -> Result<Vec<u8>> {
    validate::length("PRF seed", s.len(), KYBER_SYM_BYTES)?;
    validate::length("PRF nonce", b.len(), 1)?;

    let mut shake = Shake256::default();
    shake.update(s);
    shake.update(b);
    Ok(squeeze(shake, output_len))
}

//! Per-operation timing plus a human-readable dump of one KEM exchange.


use core::fmt;

use kyberkat_api::{Ciphertext, KemEngine, PublicKey, SecretKey, SharedSecret};
use kyberkat_kem::ParameterSet;

pub use observer::{LogProgress, NoProgress, ProgressObserver};
pub use timer::{BenchmarkTimer, SampleSet};

use crate::report::{Suite, SuiteReport};

/// One keypair, one encapsulation against it and the timings of each step.
#[derive(Debug, Clone)]
pub struct BenchReport {
    pub parameter_set: ParameterSet,
    pub keygen: SampleSet,
    pub encaps: SampleSet,
    pub decaps: SampleSet,
    pub public_key: PublicKey,
    pub secret_key: SecretKey,
    pub ciphertext: Ciphertext,
    /// Secret returned by encapsulation
    pub shared_secret_a: SharedSecret,
    /// Secret recovered by decapsulation
    pub shared_secret_b: SharedSecret,
}

impl BenchReport {
    /// Whether both parties derived the same secret.
    pub fn check(&self) -> SuiteReport {
        let mut report = SuiteReport::new(Suite::Bench, self.parameter_set);
        report.check_bytes(
            None,
            "ss",
            self.shared_secret_a.as_ref(),
            self.shared_secret_b.as_ref(),
        );
        report
    }
}

/// Public key bytes read as UTF-8, invalid sequences dropped.
fn lossy_chars(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .chars()
        .filter(|c| *c != char::REPLACEMENT_CHARACTER)
        .collect()
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<---------- {} ---------->", self.parameter_set)?;
        writeln!(f)?;
        writeln!(f, "keygen time: {} milliseconds", self.keygen.formatted_mean())?;
        writeln!(f, "encaps time: {} milliseconds", self.encaps.formatted_mean())?;
        writeln!(f, "decaps time: {} milliseconds", self.decaps.formatted_mean())?;

        writeln!(f, "\nPublic Key char:\n{}", lossy_chars(self.public_key.as_ref()))?;
        writeln!(f, "len pk char= {}", self.public_key.len())?;

        let dumps: [(&str, &str, &[u8]); 5] = [
            ("Public Key", "pk", self.public_key.as_ref()),
            ("Secret Key", "sk", self.secret_key.as_ref()),
            ("Ciphertext", "ct", self.ciphertext.as_ref()),
            ("Shared Secret A", "ssa", self.shared_secret_a.as_ref()),
            ("Shared Secret B", "ssb", self.shared_secret_b.as_ref()),
        ];
        for (title, short, bytes) in dumps {
            writeln!(f, "\n{}:\n{}", title, hex::encode_upper(bytes))?;
            writeln!(f, "len {}= {}", short, bytes.len())?;
        }

        write!(f, "\nThe End")
    }
}

/// Run one exchange for display, then time each operation against it.
pub fn run_benchmark<E, O>(
    engine: &mut E,
    parameter_set: ParameterSet,
    timer: &mut BenchmarkTimer<O>,
) -> kyberkat_api::Result<BenchReport>
where
    E: KemEngine,
    O: ProgressObserver,
{
    tracing::info!(
        algorithm = engine.name(),
        trials = timer.trials(),
        "running benchmark"
    );

    let (public_key, secret_key) = engine.keygen()?;
    let (ciphertext, shared_secret_a) = engine.encaps(&public_key)?;
    let shared_secret_b = engine.decaps(&secret_key, &ciphertext)?;

    let keygen = timer.keygen(engine)?;
    let encaps = timer.encaps(engine, &public_key)?;
    let decaps = timer.decaps(engine, &secret_key, &ciphertext)?;

    tracing::info!(
        keygen_ms = %keygen.formatted_mean(),
        encaps_ms = %encaps.formatted_mean(),
        decaps_ms = %decaps.formatted_mean(),
        "benchmark finished"
    );
    tracing::debug!(
        keygen_sd_ms = keygen.std_dev_ms(),
        encaps_sd_ms = encaps.std_dev_ms(),
        decaps_sd_ms = decaps.std_dev_ms(),
        "benchmark spread"
    );

    Ok(BenchReport {
        parameter_set,
        keygen,
        encaps,
        decaps,
        public_key,
        secret_key,
        ciphertext,
        shared_secret_a,
        shared_secret_b,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lossy_chars_drops_invalid_sequences() {
        assert_eq!(lossy_chars(b"ab\xffc"), "abc");
        assert_eq!(lossy_chars(&[0xC3, 0xA9]), "\u{e9}");
    }
}

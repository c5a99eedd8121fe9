//! Locates and loads KAT files.

use std::fs;
use std::path::{Path, PathBuf};

use kyberkat_kem::ParameterSet;

use super::model::KatCorpus;
use super::parser::parse_corpus;
use super::writer::render_corpus;
use crate::error::{HarnessError, Result};

/// ----------------------------------------------------------------
/// Directory holding the `PQCkemKAT_<sk bytes>.rsp` files
/// ----------------------------------------------------------------
pub fn default_kat_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("vectors")
        .join("kat")
}

/// NIST file name for a parameter set, e.g. `PQCkemKAT_1632.rsp`.
pub fn kat_file_name(parameter_set: ParameterSet) -> String {
    format!("PQCkemKAT_{}.rsp", parameter_set.secret_key_bytes())
}

pub fn kat_path(dir: &Path, parameter_set: ParameterSet) -> PathBuf {
    dir.join(kat_file_name(parameter_set))
}

/// Read and parse one file.
///
/// When `expected` is given, the file's declared or implied parameter set
/// must agree with it; the corpus is tagged with `expected` either way.
pub fn load_corpus(path: &Path, expected: Option<ParameterSet>) -> Result<KatCorpus> {
    let text = fs::read_to_string(path).map_err(|e| HarnessError::io(path, e))?;
    let mut corpus = parse_corpus(&text)?;

    match (corpus.infer_parameter_set(), expected) {
        (Some(found), Some(wanted)) if found != wanted => {
            return Err(HarnessError::config(format!(
                "{} holds {} vectors, expected {}",
                path.display(),
                found,
                wanted
            )));
        }
        (found, wanted) => corpus.parameter_set = wanted.or(found),
    }

    tracing::info!(
        path = %path.display(),
        records = corpus.len(),
        parameter_set = ?corpus.parameter_set,
        "loaded KAT corpus"
    );
    Ok(corpus)
}

/// Write a corpus, creating parent directories as needed.
pub fn write_corpus(path: &Path, corpus: &KatCorpus) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| HarnessError::io(parent, e))?;
    }
    fs::write(path, render_corpus(corpus)).map_err(|e| HarnessError::io(path, e))?;
    tracing::info!(path = %path.display(), records = corpus.len(), "wrote KAT corpus");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_follow_secret_key_size() {
        assert_eq!(kat_file_name(ParameterSet::Kyber512), "PQCkemKAT_1632.rsp");
        assert_eq!(kat_file_name(ParameterSet::Kyber768), "PQCkemKAT_2400.rsp");
        assert_eq!(kat_file_name(ParameterSet::Kyber1024), "PQCkemKAT_3168.rsp");
        assert!(kat_path(&default_kat_dir(), ParameterSet::Kyber512).ends_with("vectors/kat/PQCkemKAT_1632.rsp"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_corpus(Path::new("/nonexistent/PQCkemKAT_1632.rsp"), None).unwrap_err();
        assert!(matches!(err, HarnessError::Io { .. }));
    }
}

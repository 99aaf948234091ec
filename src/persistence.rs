// File: src/persistence.rs
use crate::core::lexicon::Lexicon;
use crate::error::{EngineError, Result};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Lexicon file encodings, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexiconFormat {
    /// Human-editable `.json`.
    Json,
    /// Compact bincode snapshot, `.bin`.
    Binary,
}

impl LexiconFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(LexiconFormat::Json),
            Some(ext) if ext.eq_ignore_ascii_case("bin") => Ok(LexiconFormat::Binary),
            _ => Err(EngineError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Writes the lexicon through a temp file in the target directory, so a
/// crash never leaves a half-written file behind.
pub fn save_lexicon(lexicon: &Lexicon, path: &Path) -> Result<()> {
    let format = LexiconFormat::from_path(path)?;
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        match format {
            LexiconFormat::Json => serde_json::to_writer_pretty(&mut writer, lexicon)?,
            LexiconFormat::Binary => bincode::serialize_into(&mut writer, lexicon)?,
        }
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    debug!(path = %path.display(), ?format, "lexicon saved");
    Ok(())
}

/// Reads and validates a lexicon.
pub fn load_lexicon(path: &Path) -> Result<Lexicon> {
    let format = LexiconFormat::from_path(path)?;
    let reader = BufReader::new(File::open(path)?);
    let lexicon: Lexicon = match format {
        LexiconFormat::Json => serde_json::from_reader(reader)?,
        LexiconFormat::Binary => bincode::deserialize_from(reader)?,
    };
    debug!(path = %path.display(), ?format, "lexicon loaded");
    Ok(lexicon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(LexiconFormat::from_path(Path::new("a.json")).unwrap(), LexiconFormat::Json);
        assert_eq!(LexiconFormat::from_path(Path::new("a.BIN")).unwrap(), LexiconFormat::Binary);
        assert!(matches!(
            LexiconFormat::from_path(Path::new("a.txt")),
            Err(EngineError::UnsupportedFormat(_))
        ));
        assert!(LexiconFormat::from_path(Path::new("lexicon")).is_err());
    }

    #[test]
    fn test_round_trip_both_formats() {
        let dir = tempfile::tempdir().unwrap();
        let lexicon = Lexicon::builtin();
        for name in ["lexicon.json", "nested/lexicon.bin"] {
            let path = dir.path().join(name);
            save_lexicon(&lexicon, &path).unwrap();
            assert_eq!(load_lexicon(&path).unwrap(), lexicon);
        }
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chained.json");
        fs::write(&path, r#"{"corrections": {"a": "b", "b": "c"}}"#).unwrap();
        assert!(matches!(load_lexicon(&path), Err(EngineError::Json(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_lexicon(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, EngineError::Io(_)));
    }
}

//! Translation dictionary loading.
//!
//! One JSON file per language in the translations directory; the file stem
//! is the language code, exactly as written on disk:
//!
//! ```text
//! site/translations/
//! ├── en.json
//! ├── fr.json
//! └── pt-br.json
//! ```
//!
//! Each file must parse to a JSON object. Values may nest arbitrarily; the
//! renderer exposes them to templates with dotted access (`{{ nav.home }}`).
//!
//! Entries are returned sorted by code so every downstream consumer (the
//! render loop, alternate-link sets, the redirect page) sees the same order
//! regardless of filesystem enumeration. Duplicate codes are kept as-is;
//! the loader does not police them, `check` reports them as warnings.

use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslationError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("translation file must contain a JSON object: {0}")]
    NotAnObject(PathBuf),
}

/// One language's parsed dictionary plus its identifying code.
///
/// Created once at load time and immutable afterwards. The code is the
/// translation file's stem, case preserved.
#[derive(Debug, Clone)]
pub struct Language {
    pub code: String,
    pub data: Map<String, Value>,
}

/// Load every `*.json` file in `dir` into a [`Language`], sorted by code.
///
/// A missing directory or an unparsable file is fatal; there is no partial
/// recovery. Files with other extensions are ignored.
pub fn load(dir: &Path) -> Result<Vec<Language>, TranslationError> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .map(|e| e.eq_ignore_ascii_case("json"))
                    .unwrap_or(false)
        })
        .collect();
    files.sort();

    let mut languages = Vec::with_capacity(files.len());
    for path in &files {
        let code = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        let text = fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&text).map_err(|source| TranslationError::Parse {
            path: path.clone(),
            source,
        })?;
        let Value::Object(data) = value else {
            return Err(TranslationError::NotAnObject(path.clone()));
        };

        languages.push(Language { code, data });
    }

    languages.sort_by(|a, b| a.code.cmp(&b.code));
    Ok(languages)
}

/// Language codes in loaded order, duplicates included.
pub fn codes(languages: &[Language]) -> Vec<String> {
    languages.iter().map(|l| l.code.clone()).collect()
}

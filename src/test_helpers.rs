//! Shared test utilities for the polysite test suite.
//!
//! Two ways to get a site to build against:
//!
//! - [`setup_fixtures`] copies `fixtures/site/` into a temp directory for
//!   tests that want the full multi-language, multi-page, assets-bearing
//!   site and may mutate it.
//! - [`write_site`] writes a minimal site inline from `(code, json)` and
//!   `(name, template)` pairs, for tests that only care about one behavior.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::assets::copy_tree;

/// Copy `fixtures/site/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other
/// tests or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/site");
    copy_tree(&fixtures, tmp.path()).unwrap();
    tmp
}

/// Write a minimal site at `root`: one translation file per `(code, json)`
/// pair and one page template per `(name, template)` pair. No assets, no
/// config file.
pub fn write_site(root: &Path, languages: &[(&str, &str)], pages: &[(&str, &str)]) {
    let translations = root.join("translations");
    fs::create_dir_all(&translations).unwrap();
    for (code, json) in languages {
        fs::write(translations.join(format!("{code}.json")), json).unwrap();
    }

    let pages_dir = root.join("pages");
    fs::create_dir_all(&pages_dir).unwrap();
    for (name, template) in pages {
        fs::write(pages_dir.join(format!("{name}.html")), template).unwrap();
    }
}

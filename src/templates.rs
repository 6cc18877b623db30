//! Page template enumeration.
//!
//! Every `.html` file in the pages directory is one page of the site. The
//! file stem is the page name; `index.html` becomes each language's root
//! page, any other `name.html` is published at `<code>/<name>/index.html`.
//!
//! Templates are raw MiniJinja source, loaded once and rendered once per
//! language by [`crate::render`].

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("pages directory not found: {0}")]
    MissingDir(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One page template: name plus raw template source.
///
/// Loaded once, read-only, reused across all languages.
#[derive(Debug, Clone)]
pub struct PageTemplate {
    /// Page name, the file stem (`index`, `about`, ...).
    pub name: String,
    /// Raw MiniJinja template source.
    pub content: String,
}

impl PageTemplate {
    /// The name the template is registered under in the render environment.
    ///
    /// Keeps the `.html` suffix so HTML auto-escaping applies.
    pub fn template_name(&self) -> String {
        format!("{}.html", self.name)
    }
}

/// Load every `*.html` file in `dir`, sorted by page name.
///
/// A missing pages directory is fatal: a site with no pages is a broken
/// site, unlike a site with no assets.
pub fn load(dir: &Path) -> Result<Vec<PageTemplate>, TemplateError> {
    if !dir.is_dir() {
        return Err(TemplateError::MissingDir(dir.to_path_buf()));
    }

    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .map(|e| e.eq_ignore_ascii_case("html"))
                    .unwrap_or(false)
        })
        .collect();
    files.sort();

    let mut pages = Vec::with_capacity(files.len());
    for path in &files {
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let content = fs::read_to_string(path)?;
        pages.push(PageTemplate { name, content });
    }

    Ok(pages)
}

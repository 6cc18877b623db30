//! Build orchestration.
//!
//! Runs the whole pipeline for one site:
//!
//! ```text
//! 1. Load translations        site/translations/*.json   (fatal on parse error)
//! 2. Load page templates      site/pages/*.html          (fatal if missing)
//! 3. Stage                    <output>.staging/          (fresh directory)
//! 4. Copy assets              staging/assets/
//! 5. Render language × page   staging/<code>/.../index.html   (rayon fan-out)
//!    + per-language assets    staging/<code>/assets/
//! 6. Redirect page            staging/index.html
//! 7. Swap                     staging → <output>
//! ```
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html             # language-detection redirect
//! ├── assets/                # site-wide asset copy
//! ├── en/
//! │   ├── index.html         # the "index" page
//! │   ├── about/index.html   # every other page
//! │   └── assets/            # per-language asset copy
//! └── fr/
//!     └── ...
//! ```
//!
//! ## Snapshot Semantics
//!
//! Nothing is written into the output directory itself until the entire
//! build has succeeded in the staging directory next to it. On success the
//! old output is deleted and staging renamed into place; on failure the
//! previous build stays untouched and staging is removed best-effort. A
//! rebuild therefore always publishes a complete snapshot, and removing a
//! translation file drops that language's whole subtree on the next run.
//!
//! ## Parallel Rendering
//!
//! Every (language, page) pair writes a distinct path, so the cross
//! product renders on the rayon pool with no shared mutable state. The
//! first error aborts the build.

use crate::assets;
use crate::redirect;
use crate::render::{RenderError, Renderer};
use crate::templates::{self, PageTemplate, TemplateError};
use crate::translations::{self, Language, TranslationError};
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Translations(#[from] TranslationError),
    #[error(transparent)]
    Templates(#[from] TemplateError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// What a successful build produced, for CLI reporting.
#[derive(Debug)]
pub struct BuildSummary {
    /// Language codes in processed order, duplicates kept.
    pub languages: Vec<String>,
    /// Page names in rendered order.
    pub pages: Vec<String>,
    /// Whether an asset tree existed and was copied.
    pub assets_copied: bool,
}

/// What `check` found without writing anything.
#[derive(Debug)]
pub struct CheckReport {
    pub languages: Vec<String>,
    pub pages: Vec<String>,
    /// Conditions `build` tolerates on purpose but worth knowing about.
    pub warnings: Vec<String>,
}

/// Run the full build: load, stage, render, swap.
pub fn generate(
    source: &Path,
    output: &Path,
    base_url: &str,
    default_language: &str,
) -> Result<BuildSummary, GenerateError> {
    let languages = translations::load(&source.join("translations"))?;
    let pages = templates::load(&source.join("pages"))?;
    let renderer = Renderer::new(&pages)?;

    let staging = staging_dir(output);
    if staging.exists() {
        fs::remove_dir_all(&staging)?;
    }
    fs::create_dir_all(&staging)?;

    let populated = populate(
        &staging,
        source,
        &languages,
        &pages,
        &renderer,
        base_url,
        default_language,
    );
    if let Err(err) = populated {
        let _ = fs::remove_dir_all(&staging);
        return Err(err);
    }

    if output.exists() {
        fs::remove_dir_all(output)?;
    }
    fs::rename(&staging, output)?;

    Ok(BuildSummary {
        languages: translations::codes(&languages),
        pages: pages.iter().map(|p| p.name.clone()).collect(),
        assets_copied: source.join("assets").exists(),
    })
}

/// Load and validate inputs without touching the output.
///
/// Surfaces as warnings what `build` deliberately lets pass: duplicate
/// language codes and a redirect fallback no dictionary exists for.
pub fn check(source: &Path, default_language: &str) -> Result<CheckReport, GenerateError> {
    let languages = translations::load(&source.join("translations"))?;
    let pages = templates::load(&source.join("pages"))?;
    // Compiling surfaces template syntax errors before any build runs.
    Renderer::new(&pages)?;

    let codes = translations::codes(&languages);
    let mut warnings = Vec::new();

    let duplicates: BTreeSet<&str> = codes
        .windows(2)
        .filter(|pair| pair[0] == pair[1])
        .map(|pair| pair[0].as_str())
        .collect();
    for code in duplicates {
        warnings.push(format!(
            "duplicate language code '{code}': later files overwrite earlier output"
        ));
    }

    if !codes.iter().any(|c| c == default_language) {
        warnings.push(format!(
            "default language '{default_language}' has no translation file: \
             the redirect page will send unmatched visitors to a missing page"
        ));
    }

    Ok(CheckReport {
        languages: codes,
        pages: pages.iter().map(|p| p.name.clone()).collect(),
        warnings,
    })
}

/// Write the complete site into the staging directory.
fn populate(
    staging: &Path,
    source: &Path,
    languages: &[Language],
    pages: &[PageTemplate],
    renderer: &Renderer,
    base_url: &str,
    default_language: &str,
) -> Result<(), GenerateError> {
    let assets_src = source.join("assets");
    assets::copy_tree(&assets_src, &staging.join("assets"))?;

    for lang in languages {
        let lang_dir = staging.join(&lang.code);
        fs::create_dir_all(&lang_dir)?;
        assets::copy_tree(&assets_src, &lang_dir.join("assets"))?;
    }

    let jobs: Vec<(&Language, &PageTemplate)> = languages
        .iter()
        .flat_map(|lang| pages.iter().map(move |page| (lang, page)))
        .collect();

    jobs.par_iter()
        .try_for_each(|&(lang, page)| -> Result<(), GenerateError> {
            let html = renderer.render_page(page, lang, languages, base_url)?;
            let out_dir = page_dir(staging, &lang.code, &page.name);
            fs::create_dir_all(&out_dir)?;
            fs::write(out_dir.join("index.html"), html)?;
            Ok(())
        })?;

    let redirect_html = redirect::redirect_page(&translations::codes(languages), default_language)?;
    fs::write(staging.join("index.html"), redirect_html)?;
    Ok(())
}

/// Output directory for one rendered page. The page named `index` is the
/// language root; every other page gets its own directory.
fn page_dir(root: &Path, code: &str, page_name: &str) -> PathBuf {
    if page_name == "index" {
        root.join(code)
    } else {
        root.join(code).join(page_name)
    }
}

/// The staging directory lives next to the output so the final rename
/// stays on one filesystem.
fn staging_dir(output: &Path) -> PathBuf {
    let name = output
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "dist".to_string());
    output.with_file_name(format!("{name}.staging"))
}

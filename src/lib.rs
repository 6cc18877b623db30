//! # Polysite
//!
//! A minimal static site generator for multilingual websites. Your
//! translation files are the data source: one JSON dictionary per language,
//! one MiniJinja template per page, and every (language, page) pair becomes
//! a published `index.html`.
//!
//! # Architecture: One Pass, One Snapshot
//!
//! A build is a single linear pipeline into a staging directory that is
//! swapped into place only when everything succeeded:
//!
//! ```text
//! 1. Load      translations/*.json  →  Vec<Language>   (sorted by code)
//! 2. Load      pages/*.html         →  Vec<PageTemplate>
//! 3. Render    language × page      →  staging/<code>/.../index.html
//! 4. Copy      assets/              →  staging/assets/ + staging/<code>/assets/
//! 5. Redirect                       →  staging/index.html
//! 6. Swap      staging              →  dist/
//! ```
//!
//! Rendering fans out across the rayon pool: every pair writes a distinct
//! path and reads only immutable data, so the cross product is an
//! embarrassingly parallel batch. Language order is pinned by sorting codes
//! at load time, which keeps alternate-link sets and the redirect page
//! byte-stable across runs.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`translations`] | loads per-language JSON dictionaries, derives codes from file stems |
//! | [`templates`] | enumerates page templates in the pages directory |
//! | [`render`] | builds the per-render view and drives MiniJinja |
//! | [`urls`] | canonical/alternate URL construction and slash normalization |
//! | [`redirect`] | the root language-detection page, generated with maud |
//! | [`assets`] | recursive, idempotent asset tree copying |
//! | [`generate`] | the orchestrator: staging, fan-out, swap; also `check` |
//! | [`config`] | `config.toml` loading and base URL resolution |
//! | [`output`] | CLI reporting, pure `format_*` functions |
//!
//! # Design Decisions
//!
//! ## MiniJinja for Pages, Maud for the Redirect
//!
//! Page templates are user-authored files, so they need a runtime engine;
//! [MiniJinja](https://docs.rs/minijinja) gives auto-escaped interpolation,
//! `| safe` for trusted fragments, and `{% if %}`/`{% for %}` sections.
//! The redirect page is the opposite case: fixed markup users never edit,
//! so it is compiled in with [Maud](https://maud.lambda.xyz/) and cannot
//! drift out of sync with the generator.
//!
//! ## The View Merge Contract
//!
//! Each render sees the language's dictionary shallow-merged with three
//! derived keys (`lang`, `alternates`, `canonical`), inserted last. On a
//! name collision the derived value wins. This is a documented precedence
//! rule, not an accident of merge order: a dictionary cannot redefine what
//! `lang` means to a template.
//!
//! ## Snapshot Swap Instead of Clean-Then-Write
//!
//! Deleting the output before rebuilding leaves a half-written tree when a
//! build dies midway. Polysite instead builds into `<output>.staging` and
//! renames it over the output at the end, so the published site is always
//! a complete snapshot of some successful build.
//!
//! ## Permissive Where the Data Is
//!
//! Duplicate language codes and a redirect fallback with no dictionary are
//! tolerated at build time; `polysite check` reports them as warnings.
//! Rejecting them outright would turn odd-but-harmless inputs into hard
//! failures.

pub mod assets;
pub mod config;
pub mod generate;
pub mod output;
pub mod redirect;
pub mod render;
pub mod templates;
pub mod translations;
pub mod urls;

#[cfg(test)]
pub(crate) mod test_helpers;

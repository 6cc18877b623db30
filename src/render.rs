//! Page rendering against MiniJinja templates.
//!
//! Each (language, page) pair renders the page's template against a view
//! built from that language's dictionary plus three derived keys:
//!
//! | Key          | Value                                                |
//! |--------------|------------------------------------------------------|
//! | `lang`       | current language code                                |
//! | `alternates` | `[{ lang, url }]`, one per language, loaded order    |
//! | `canonical`  | this page's authoritative URL in this language       |
//!
//! The merge order is a contract, not an accident: derived keys are
//! inserted after the translation data, so on a name collision the derived
//! value wins. A dictionary cannot shadow `lang` with prose.
//!
//! Templates are plain MiniJinja. Interpolation is HTML-escaped because
//! templates are registered under their `.html` file names; `| safe` opts a
//! trusted fragment out, `{% if %}`/`{% for %}` give conditional and
//! iterated sections. Undefined keys render empty, MiniJinja's default.

use crate::templates::PageTemplate;
use crate::translations::Language;
use crate::urls::build_url;
use minijinja::Environment;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("template '{name}': {source}")]
    Template {
        name: String,
        #[source]
        source: minijinja::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A cross-language link for one page: the other language's code and the
/// same page's URL there. Feeds hreflang link sets and language switchers.
#[derive(Debug, Clone, Serialize)]
pub struct Alternate {
    pub lang: String,
    pub url: String,
}

/// Owns the MiniJinja environment with every page template registered.
///
/// Built once per run and shared read-only across render workers.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Compile all page templates into a fresh environment.
    ///
    /// A syntax error in any template is fatal and names the template.
    pub fn new(pages: &[PageTemplate]) -> Result<Self, RenderError> {
        let mut env = Environment::new();
        for page in pages {
            env.add_template_owned(page.template_name(), page.content.clone())
                .map_err(|source| RenderError::Template {
                    name: page.template_name(),
                    source,
                })?;
        }
        Ok(Self { env })
    }

    /// Render one page in one language.
    pub fn render_page(
        &self,
        page: &PageTemplate,
        language: &Language,
        languages: &[Language],
        base: &str,
    ) -> Result<String, RenderError> {
        let view = build_view(page, language, languages, base)?;
        let name = page.template_name();
        let template = self
            .env
            .get_template(&name)
            .map_err(|source| RenderError::Template {
                name: name.clone(),
                source,
            })?;
        template
            .render(&view)
            .map_err(|source| RenderError::Template { name, source })
    }
}

/// One [`Alternate`] per loaded language, current language included, in
/// loaded order.
pub fn alternates(languages: &[Language], page_name: &str, base: &str) -> Vec<Alternate> {
    languages
        .iter()
        .map(|l| Alternate {
            lang: l.code.clone(),
            url: build_url(base, &l.code, page_name),
        })
        .collect()
}

/// Shallow-merge the language dictionary with the derived keys.
///
/// Derived keys go in last and therefore win on collision.
fn build_view(
    page: &PageTemplate,
    language: &Language,
    languages: &[Language],
    base: &str,
) -> Result<Map<String, Value>, RenderError> {
    let mut view = language.data.clone();
    let alts = alternates(languages, &page.name, base);

    view.insert("lang".to_string(), Value::String(language.code.clone()));
    view.insert("alternates".to_string(), serde_json::to_value(&alts)?);
    view.insert(
        "canonical".to_string(),
        Value::String(build_url(base, &language.code, &page.name)),
    );
    Ok(view)
}

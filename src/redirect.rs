//! Root redirect page.
//!
//! The document at the output root negotiates the visitor's language on the
//! client: a small inline script reads the browser's reported language,
//! keeps its primary two-letter subtag, lower-cases it, and replaces the
//! location with `/<code>/` when the site speaks it, else with the
//! configured fallback. A `<noscript>` list links every language for
//! visitors without JavaScript.
//!
//! The supported list mirrors the loaded languages exactly: same order,
//! duplicates kept. The fallback is emitted as configured even when no
//! dictionary for it exists; `check` warns about that instead.
//!
//! Markup comes from maud, compiled into the binary. The redirect page is
//! the one document users never template.

use maud::{DOCTYPE, PreEscaped, html};

/// Build the standalone redirect document for the given language codes.
pub fn redirect_page(codes: &[String], fallback: &str) -> Result<String, serde_json::Error> {
    let supported = serde_json::to_string(codes)?;
    let fallback_js = serde_json::to_string(fallback)?;

    let script = format!(
        "(function() {{\n  \
           var supported = {supported};\n  \
           var lang = (navigator.language || navigator.userLanguage || {fallback_js}).slice(0, 2).toLowerCase();\n  \
           if (!supported.includes(lang)) lang = {fallback_js};\n  \
           window.location.replace('/' + lang + '/');\n\
         }})();"
    );

    let markup = html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Redirecting..." }
            }
            body {
                script { (PreEscaped(script)) }
                noscript {
                    h1 { "Choose your language" }
                    ul {
                        @for code in codes {
                            li {
                                a href={ "/" (code) "/" } { (code.to_uppercase()) }
                            }
                        }
                    }
                }
            }
        }
    };

    Ok(markup.into_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn embeds_supported_codes_in_loaded_order() {
        let html = redirect_page(&codes(&["de", "en", "fr"]), "en").unwrap();
        assert!(html.contains(r#"var supported = ["de","en","fr"];"#));
    }

    #[test]
    fn keeps_duplicate_codes() {
        let html = redirect_page(&codes(&["en", "en", "fr"]), "en").unwrap();
        assert!(html.contains(r#"["en","en","fr"]"#));
    }

    #[test]
    fn uses_configured_fallback() {
        let html = redirect_page(&codes(&["de", "fr"]), "de").unwrap();
        assert!(html.contains(r#"lang = "de";"#));
        // The fallback is emitted even though nothing checks it is supported.
        let html = redirect_page(&codes(&["de", "fr"]), "xx").unwrap();
        assert!(html.contains(r#"lang = "xx";"#));
    }

    #[test]
    fn noscript_lists_links_with_uppercase_labels() {
        let html = redirect_page(&codes(&["en", "pt-br"]), "en").unwrap();
        assert!(html.contains(r#"<a href="/en/">EN</a>"#));
        assert!(html.contains(r#"<a href="/pt-br/">PT-BR</a>"#));
    }

    #[test]
    fn is_a_complete_document() {
        let html = redirect_page(&codes(&["en"]), "en").unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("window.location.replace('/' + lang + '/');"));
        assert!(html.contains("<noscript>"));
    }

    #[test]
    fn truncates_and_lowercases_browser_language() {
        let html = redirect_page(&codes(&["en"]), "en").unwrap();
        assert!(html.contains(".slice(0, 2).toLowerCase()"));
    }
}

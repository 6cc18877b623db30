//! Canonical and alternate URL construction.
//!
//! Every rendered page has exactly one authoritative URL per language:
//!
//! ```text
//! build_url("https://example.com", "fr", "about")  →  "https://example.com/fr/about/"
//! build_url("https://example.com", "fr", "index")  →  "https://example.com/fr/"
//! build_url("", "en", "index")                     →  "/en/"
//! ```
//!
//! The same function produces the canonical URL of the current page and the
//! alternate-language URLs of that page (same page name, varying code), so
//! hreflang link sets and `rel=canonical` can never disagree on shape.

/// Compose a page URL from a site base, a language code, and a page name.
///
/// The page named `index` is the language root and gets no path segment of
/// its own. All other pages end in a trailing slash. An empty `base`
/// produces a root-relative URL.
pub fn build_url(base: &str, code: &str, page: &str) -> String {
    let tail = if page == "index" {
        String::new()
    } else {
        format!("{page}/")
    };
    normalize(&format!("{base}/{code}/{tail}"))
}

/// Collapse every run of consecutive slashes into a single slash, keeping
/// the two slashes of a `scheme://` separator intact.
///
/// Idempotent: `normalize(normalize(u)) == normalize(u)`.
pub fn normalize(url: &str) -> String {
    let (head, rest) = match url.find("://") {
        Some(pos) if is_scheme(&url[..pos]) => url.split_at(pos + 3),
        _ => ("", url),
    };

    let mut out = String::with_capacity(url.len());
    out.push_str(head);
    // The separator already ends in a slash, so a run continuing past it
    // folds into the two the scheme keeps.
    let mut prev_slash = !head.is_empty();
    for c in rest.chars() {
        if c == '/' {
            if !prev_slash {
                out.push(c);
            }
            prev_slash = true;
        } else {
            prev_slash = false;
            out.push(c);
        }
    }
    out
}

/// A URI scheme: one ASCII letter followed by letters, digits, `+`, `-`, `.`.
fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

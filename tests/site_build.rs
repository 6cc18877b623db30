//! End-to-end build tests over the `fixtures/site` tree: three languages
//! (de, en, fr), two pages (index, about), an asset tree, and a config
//! file. Each test builds into a fresh temp directory.

use polysite::assets::copy_tree;
use polysite::generate::generate;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

const LANGS: &[&str] = &["de", "en", "fr"];

fn setup_site() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/site");
    let site = tmp.path().join("site");
    copy_tree(&fixtures, &site).unwrap();
    (tmp, site)
}

fn read_page(dist: &Path, lang: &str, page: &str) -> String {
    let path = if page == "index" {
        dist.join(lang).join("index.html")
    } else {
        dist.join(lang).join(page).join("index.html")
    };
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("missing {}: {e}", path.display()))
}

#[test]
fn build_renders_every_language_page_pair() {
    let (tmp, site) = setup_site();
    let dist = tmp.path().join("dist");
    let summary = generate(&site, &dist, "", "en").unwrap();

    assert_eq!(summary.languages, LANGS);
    assert_eq!(summary.pages, vec!["about", "index"]);

    for lang in LANGS {
        for page in ["index", "about"] {
            let html = read_page(&dist, lang, page);
            assert!(
                !html.contains("{{") && !html.contains("{%"),
                "unresolved placeholder in {lang}/{page}"
            );
            assert!(html.contains(&format!(r#"<html lang="{lang}">"#)));
        }
    }

    assert!(read_page(&dist, "en", "index").contains("Acme Coffee Roasters"));
    assert!(read_page(&dist, "fr", "index").contains("Torréfaction Acme"));
    assert!(read_page(&dist, "de", "index").contains("Acme Kaffeerösterei"));
}

#[test]
fn canonical_and_alternates_use_the_base_url() {
    let (tmp, site) = setup_site();
    let dist = tmp.path().join("dist");
    generate(&site, &dist, "https://example.com", "en").unwrap();

    let html = read_page(&dist, "fr", "about");
    assert!(html.contains(r#"<link rel="canonical" href="https://example.com/fr/about/">"#));
    for lang in LANGS {
        assert!(html.contains(&format!(
            r#"<link rel="alternate" hreflang="{lang}" href="https://example.com/{lang}/about/">"#
        )));
    }
}

#[test]
fn urls_are_root_relative_without_a_base() {
    let (tmp, site) = setup_site();
    let dist = tmp.path().join("dist");
    generate(&site, &dist, "", "en").unwrap();

    let html = read_page(&dist, "en", "index");
    assert!(html.contains(r#"<link rel="canonical" href="/en/">"#));
    assert!(html.contains(r#"hreflang="fr" href="/fr/""#));
}

#[test]
fn trusted_html_fragments_pass_through_unescaped() {
    let (tmp, site) = setup_site();
    let dist = tmp.path().join("dist");
    generate(&site, &dist, "", "en").unwrap();

    let html = read_page(&dist, "en", "index");
    assert!(html.contains("<strong>every Tuesday</strong>"));
}

#[test]
fn root_redirect_covers_all_languages() {
    let (tmp, site) = setup_site();
    let dist = tmp.path().join("dist");
    generate(&site, &dist, "", "en").unwrap();

    let html = fs::read_to_string(dist.join("index.html")).unwrap();
    assert!(html.contains(r#"var supported = ["de","en","fr"];"#));
    assert!(html.contains(r#"lang = "en";"#));
    for lang in LANGS {
        assert!(html.contains(&format!(
            r#"<a href="/{lang}/">{}</a>"#,
            lang.to_uppercase()
        )));
    }
}

#[test]
fn assets_land_at_root_and_under_each_language() {
    let (tmp, site) = setup_site();
    let dist = tmp.path().join("dist");
    generate(&site, &dist, "", "en").unwrap();

    assert!(dist.join("assets/css/style.css").exists());
    assert!(dist.join("assets/img/logo.svg").exists());
    for lang in LANGS {
        assert!(dist.join(lang).join("assets/css/style.css").exists());
    }
}

#[test]
fn rebuilds_are_byte_identical() {
    let (tmp, site) = setup_site();

    let first = tmp.path().join("dist-a");
    let second = tmp.path().join("dist-b");
    generate(&site, &first, "https://example.com", "en").unwrap();
    generate(&site, &second, "https://example.com", "en").unwrap();

    assert_eq!(tree_snapshot(&first), tree_snapshot(&second));
}

fn tree_snapshot(root: &Path) -> Vec<(String, Vec<u8>)> {
    let mut entries = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.unwrap();
        if entry.file_type().is_file() {
            let rel = entry.path().strip_prefix(root).unwrap();
            entries.push((
                rel.to_string_lossy().to_string(),
                fs::read(entry.path()).unwrap(),
            ));
        }
    }
    entries
}

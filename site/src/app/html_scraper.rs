//! Regex-based HTML metadata extraction
//!
//! Best-effort and non-validating: the first match wins, attribute values are
//! taken verbatim (no entity decoding), and markup is never parsed as a tree.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

static TITLE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<title[^>]*>([^<]+)</title>").expect("title regex should compile")
});

static DESCRIPTION_REGEXES: LazyLock<[Regex; 2]> =
    LazyLock::new(|| meta_regexes("name", "description"));

static OG_IMAGE_REGEXES: LazyLock<[Regex; 2]> =
    LazyLock::new(|| meta_regexes("property", "og:image"));

/// Both attribute orders for `<meta {attr}="{value}" content="...">`
fn meta_regexes(attr: &str, value: &str) -> [Regex; 2] {
    let value = regex::escape(value);
    let key_first = format!(
        r#"(?i)<meta[^>]*{attr}=['"]{value}['"][^>]*content=['"]([^'"]*)['"][^>]*>"#
    );
    let content_first = format!(
        r#"(?i)<meta[^>]*content=['"]([^'"]*)['"][^>]*{attr}=['"]{value}['"][^>]*>"#
    );
    [
        Regex::new(&key_first).expect("meta regex should compile"),
        Regex::new(&content_first).expect("meta regex should compile"),
    ]
}

/// Metadata found in a page; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Extract title, meta description and `og:image` from raw HTML
pub fn scrape(html: &str) -> PageMetadata {
    PageMetadata {
        title: first_capture(std::slice::from_ref(&*TITLE_REGEX), html),
        description: first_capture(&*DESCRIPTION_REGEXES, html),
        image: first_capture(&*OG_IMAGE_REGEXES, html),
    }
}

fn first_capture(patterns: &[Regex], html: &str) -> Option<String> {
    patterns.iter().find_map(|re| {
        re.captures(html)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
    })
}

/// Make a scraped image reference absolute against the page it came from.
///
/// Anything already starting with `http` is left alone; otherwise it is
/// joined to `scheme://host[:port]`, inserting a `/` when missing.
pub fn resolve_image(image: &str, page: &Url) -> String {
    if image.is_empty() || image.starts_with("http") {
        return image.to_string();
    }

    let origin = page.origin().ascii_serialization();
    if image.starts_with('/') {
        format!("{}{}", origin, image)
    } else {
        format!("{}/{}", origin, image)
    }
}

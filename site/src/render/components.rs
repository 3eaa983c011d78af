//! Shared HTML components for the site.
//!
//! These are maud functions that return `Markup` fragments for composition
//! into the page.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use super::assets::{PAGE_CSS, PAGE_JS};
use crate::app::{CardKind, ProjectCard};

pub const SITE_NAME: &str = "Shypt Solution";
pub const PRIMARY_TITLE: &str = "Shypt Solution | Indie Software Studio by Raunit Verma";
pub const PRIMARY_DESCRIPTION: &str = "Discover Shypt Solution by Raunit Verma\u{2014}indie software products, developer tools, and cross-platform experiences trusted by 50k+ users worldwide.";
pub const KEYWORDS: &[&str] = &[
    "Shypt Solution",
    "Raunit Verma",
    "Shypt Solution projects",
    "Raunit Verma software",
    "indie software studio",
    "developer tools",
    "SaaS products",
    "web apps",
    "mobile apps",
];
const THEME_COLOR: &str = "#2563eb";
const OG_IMAGE_PATH: &str = "/opengraph-image.png";
const OG_IMAGE_ALT: &str = "Shypt Solution | Indie Software Projects by Raunit Verma";

/// Render the document shell: `<head>` metadata plus `body_content`.
pub fn page_shell(site_url: &str, body_content: Markup) -> Markup {
    let canonical = format!("{}/", site_url);
    let og_image = format!("{}{}", site_url, OG_IMAGE_PATH);

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="theme-color" content=(THEME_COLOR);
                title { (PRIMARY_TITLE) }
                meta name="description" content=(PRIMARY_DESCRIPTION);
                meta name="keywords" content=(KEYWORDS.join(", "));
                meta name="author" content="Raunit Verma";
                meta name="robots" content="index, follow, max-image-preview:large, max-snippet:-1, max-video-preview:-1";
                link rel="canonical" href=(canonical);

                // Open Graph
                meta property="og:title" content=(PRIMARY_TITLE);
                meta property="og:description" content=(PRIMARY_DESCRIPTION);
                meta property="og:url" content=(site_url);
                meta property="og:site_name" content=(SITE_NAME);
                meta property="og:locale" content="en_US";
                meta property="og:type" content="website";
                meta property="og:image" content=(og_image);
                meta property="og:image:width" content="1200";
                meta property="og:image:height" content="630";
                meta property="og:image:alt" content=(OG_IMAGE_ALT);

                // Twitter Card
                meta name="twitter:card" content="summary_large_image";
                meta name="twitter:title" content=(PRIMARY_TITLE);
                meta name="twitter:description" content=(PRIMARY_DESCRIPTION);
                meta name="twitter:image" content=(og_image);

                script type="application/ld+json" { (PreEscaped(structured_data(site_url))) }
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                div class="backdrop" {
                    div class="blob blob-purple" {}
                    div class="blob blob-blue" {}
                    div class="blob blob-pink" {}
                }
                (body_content)
                script { (PreEscaped(PAGE_JS)) }
            }
        }
    }
}

/// schema.org Organization description, safe to embed in a `<script>` tag
pub fn structured_data(site_url: &str) -> String {
    let data = serde_json::json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": SITE_NAME,
        "alternateName": "Raunit Verma",
        "url": site_url,
        "description": PRIMARY_DESCRIPTION,
        "founder": {
            "@type": "Person",
            "name": "Raunit Verma",
            "url": "https://raunit.dev",
            "jobTitle": "Indie Software Developer",
        },
        "sameAs": [
            "https://www.linkedin.com/in/iraunit",
            "https://github.com/iraunit",
            "https://x.com/iraunit",
        ],
        "brand": {
            "@type": "Brand",
            "name": SITE_NAME,
        },
    });

    data.to_string().replace("</", "<\\/")
}

/// Render one showcase card
pub fn project_card(card: &ProjectCard) -> Markup {
    let initial = card
        .title
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();

    html! {
        article class="card" data-kind=(card.kind.to_string()) {
            div class="card-media" {
                @match card.image.as_deref().filter(|src| is_safe_url(src)) {
                    Some(src) => {
                        img src=(src) alt=(card.title) loading="lazy";
                    }
                    None => {
                        div class="card-initial" { (initial) }
                    }
                }
                span class="card-badge" { (kind_label(card.kind)) }
            }
            div class="card-body" {
                h3 class="card-title" { (card.title) }
                p class="card-description" { (truncate(&card.description, 180)) }
                @if !card.tech.is_empty() {
                    ul class="card-tech" {
                        @for tech in &card.tech {
                            li { (tech) }
                        }
                    }
                }
                @if card.stars.is_some() || card.forks.is_some() {
                    div class="card-stats" {
                        @if let Some(stars) = card.stars {
                            span title="Stars" { "\u{2605} " (format_count(stars)) }
                        }
                        @if let Some(forks) = card.forks {
                            span title="Forks" { "\u{2442} " (format_count(forks)) }
                        }
                    }
                }
                a class="card-link" href=(card.url) target="_blank" rel="noopener noreferrer" {
                    "Explore project \u{2197}"
                }
            }
        }
    }
}

fn kind_label(kind: CardKind) -> &'static str {
    match kind {
        CardKind::Github => "Open Source",
        CardKind::Website | CardKind::Project => "Project",
    }
}

/// Check if a URL is safe to use in `src` or `href` attributes.
pub fn is_safe_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

/// Format a large number with K/M suffixes for display.
pub fn format_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Truncate a string to a maximum length, appending "..." if truncated.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let mut end = max_len;
        while !s.is_char_boundary(end) && end > 0 {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

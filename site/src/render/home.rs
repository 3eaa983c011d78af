//! Home page: hero, stats, project showcase, features and contact form.

use maud::{html, Markup};

use super::components::{page_shell, project_card, SITE_NAME};
use crate::app::ProjectCard;

pub const CONTACT_EMAIL: &str = "raunit@raunit.dev";
const LINKEDIN_URL: &str = "https://www.linkedin.com/in/iraunit";

/// Animated counter in the stats section
struct Stat {
    label: &'static str,
    icon: &'static str,
    /// Final value the counter animates to
    count: u64,
    /// Divisor applied while animating (`50000 / 1000` renders `50`)
    scale: u64,
    suffix: &'static str,
}

const STATS: &[Stat] = &[
    Stat {
        label: "Active Products",
        icon: "\u{26A1}",
        count: 10,
        scale: 1,
        suffix: "+",
    },
    Stat {
        label: "Users Reached",
        icon: "\u{1F465}",
        count: 50_000,
        scale: 1_000,
        suffix: "k+",
    },
];

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: "\u{1F6E1}",
        title: "Developer Communities",
        description: "CodingKaro\u{2019}s web platform, Android app, and Chrome extension keep devs plugged into contests, jobs, and curated resources.",
    },
    Feature {
        icon: "\u{26A1}",
        title: "Cross-Device Sharing",
        description: "Get Link apps, extensions, and backend power fast, secure messaging and file transfer between phones, tablets, and desktop.",
    },
    Feature {
        icon: "\u{1F465}",
        title: "Productivity Extensions",
        description: "ConnectEngage utilities automate email validation and lead capture, while Zoho Mail CRM handles outreach workflows in one click.",
    },
    Feature {
        icon: "\u{1F4C8}",
        title: "Data & Insight Utilities",
        description: "Google Play Scraper Live and Leetcode Compensation surface real-time metrics engineers and researchers rely on.",
    },
    Feature {
        icon: "\u{1F310}",
        title: "Learning & Campus Tools",
        description: "Attendance systems, resource hubs, and classroom apps streamline how students and teachers collaborate every day.",
    },
    Feature {
        icon: "\u{2728}",
        title: "Mobile Problem-Solving",
        description: "Android builds like MDM Calculator and Text & Sticker Bomber solve niche challenges with lightweight, offline-first design.",
    },
];

/// Render the full home page around the resolved showcase cards.
pub fn home_page(cards: &[ProjectCard], site_url: &str) -> Markup {
    let body = html! {
        (nav())
        main {
            (hero())
            (stats())
            (showcase(cards))
            (features())
            (contact())
        }
        (footer())
    };

    page_shell(site_url, body)
}

fn nav() -> Markup {
    html! {
        nav class="nav" {
            div class="container nav-inner" {
                div {
                    div class="brand-name" { (SITE_NAME) }
                    p class="brand-tag" { "Indie Software Projects by Raunit Verma" }
                }
                div class="nav-links" {
                    a href="#products" data-scroll { "Projects" }
                    a href="#features" data-scroll { "Features" }
                    a href="#contact" data-scroll { "Contact" }
                }
                a class="btn btn-primary" href="#contact" data-scroll { "Say Hello" }
            }
        }
    }
}

fn hero() -> Markup {
    html! {
        section id="hero" class="hero" {
            div class="container" {
                h1 {
                    span { (SITE_NAME) }
                    br;
                    span class="gradient-text" { "Projects Built" }
                    br;
                    span { "For Everyone" }
                }
                p {
                    "I\u{2019}m an independent software developer who loves turning ideas into products people "
                    "actually use. From developer tooling and cross-device sharing to education platforms "
                    "and data utilities, every project under Shypt Solution is crafted for real-world "
                    "impact, and already trusted by 50k+ users."
                }
                div class="hero-actions" {
                    a class="btn btn-primary" href="#products" data-scroll { "Browse Projects \u{2192}" }
                    a class="btn btn-ghost" href=(LINKEDIN_URL) target="_blank" rel="noopener noreferrer" {
                        "About Raunit"
                    }
                }
            }
        }
    }
}

fn stats() -> Markup {
    html! {
        section id="stats-section" class="stats" {
            div class="container stats-grid" {
                @for stat in STATS {
                    div class="stat" {
                        div class="feature-icon" { (stat.icon) }
                        div class="stat-value"
                            data-count=(stat.count)
                            data-scale=(stat.scale)
                            data-suffix=(stat.suffix) {
                            (stat.count / stat.scale) (stat.suffix)
                        }
                        div class="stat-label" { (stat.label) }
                    }
                }
            }
        }
    }
}

fn showcase(cards: &[ProjectCard]) -> Markup {
    html! {
        section id="products" {
            div class="container" {
                div class="section-head" {
                    h2 class="gradient-text" { "Projects Under Shypt Solution" }
                    p {
                        "A collection spanning web, mobile, browser, and backend, each built to solve real problems "
                        "for communities, creators, and teams."
                    }
                }
                @if cards.is_empty() {
                    p class="empty" { "No projects found right now. Check back soon!" }
                } @else {
                    div class="cards" {
                        @for card in cards {
                            (project_card(card))
                        }
                    }
                }
            }
        }
    }
}

fn features() -> Markup {
    html! {
        section id="features" {
            div class="container" {
                div class="section-head" {
                    h2 class="gradient-text" { "My Project Features" }
                    p { "Highlights drawn from the products live today across web, mobile, browser, and backend." }
                }
                div class="features" {
                    @for feature in FEATURES {
                        div class="feature" {
                            div class="feature-icon" { (feature.icon) }
                            h3 { (feature.title) }
                            p { (feature.description) }
                        }
                    }
                }
            }
        }
    }
}

fn contact() -> Markup {
    html! {
        section id="contact" {
            div class="container contact-grid" {
                div {
                    h2 {
                        span { "Ready to" }
                        span class="gradient-text" { "Collaborate" }
                        span { "or Say Hello?" }
                    }
                    p class="contact-intro" {
                        "Whether you\u{2019}re a community organizer, indie maker, or team looking for a collaborator, "
                        "let\u{2019}s chat about how these projects, or something new, can help."
                    }
                    div class="contact-item" {
                        div class="feature-icon" { "\u{2709}" }
                        div {
                            div class="contact-item-title" { "Email Me" }
                            div class="contact-item-info" { (CONTACT_EMAIL) }
                        }
                    }
                }
                form id="contact-form" class="form" {
                    div class="form-row" {
                        div {
                            label for="fullname" { "Full Name" }
                            input type="text" id="fullname" name="fullname" required placeholder="Your name";
                        }
                        div {
                            label for="email" { "Email Address" }
                            input type="email" id="email" name="email" required placeholder="your@email.com";
                        }
                    }
                    div {
                        label for="subject" { "Subject" }
                        input type="text" id="subject" name="subject" required placeholder="How can we help you?";
                    }
                    div {
                        label for="message" { "Message" }
                        textarea id="message" name="message" rows="6" required
                            placeholder="Tell us about your project and goals..." {}
                    }
                    button type="submit" class="btn btn-primary" { "Send Message \u{2192}" }
                }
            }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer class="footer" {
            div class="container" {
                div class="brand-name" { (SITE_NAME) }
                div class="brand-tag" { "Indie Software Projects by Raunit Verma" }
                p { "\u{00A9} 2025 Shypt Solution. Crafted by Raunit Verma." }
            }
        }
    }
}

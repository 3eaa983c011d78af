use std::env;
use std::time::Duration;

/// Production GitHub REST API root
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Notification webhook that forwards contact messages onward
pub const NOTIFICATION_WEBHOOK_URL: &str = "https://codingkaro.in/api/notification/telegram";

const DEFAULT_SITE_URL: &str = "https://shyptsolution.com";

/// Projects featured on the home page, in display order
pub const PROJECT_LINKS: &[&str] = &[
    "https://codingkaro.in",
    "https://raunit.dev",
    "https://joblistings.fyi",
    "https://play.google.com/store/apps/details?id=com.shyptsolution.mdmbiharcalculator&hl=en-US",
    "https://play.google.com/store/apps/details?id=com.shyptsolution.codingkaro&hl=en_IN",
    "https://chromewebstore.google.com/detail/codingkaro/ndnbpbolkacjjcjhmgfoleilolocmnhg?hl=en",
    "https://chromewebstore.google.com/detail/connectengage-email-link/gcfniighledpnfglhdljbmilonamdlle",
    "https://connectengage.shyptsolution.com/",
    "https://chromewebstore.google.com/detail/get-link-connecting-you/pcphjmlofajahcidbgfgphicmmdfkdif?hl=en&authuser=0",
    "https://play.google.com/store/apps/details?id=com.shyptsolution.quicklink&hl=en",
    "https://raunit.dev/project/google-play-scraper-live",
    "https://www.codingkaro.in/jobs-internships/leetcode-compensation",
    "https://www.codingkaro.in/blog/text-sticker-bomber-whatsapp-telegram-whatsapp-bomber-unlimited-message-prank-with-friends",
    "https://play.google.com/store/apps/details?id=com.shyptsolution.classproject&hl=en_IN",
    "https://zohocrm.shyptsolution.com/",
    "https://interviewexperiences.in",
];

/// Caching rules for previews shown in the project showcase.
///
/// The metadata endpoint never consults this; only the rendered page does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryCachePolicy {
    /// A cached preview younger than this is served without refetching
    pub stale_after: Duration,
    /// Entries nobody has read for this long are evicted
    pub retain_for: Duration,
    /// Extra attempts after a failed resolve
    pub retries: u32,
}

impl Default for QueryCachePolicy {
    fn default() -> Self {
        Self {
            stale_after: Duration::from_secs(5 * 60),
            retain_for: Duration::from_secs(30 * 60),
            retries: 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Public base URL of the site, only used in page metadata
    pub site_url: String,
    pub github_api_url: String,
    pub webhook_url: String,
    /// Links resolved into showcase cards on the home page
    pub project_links: Vec<String>,
    pub query_cache: QueryCachePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            site_url: DEFAULT_SITE_URL.to_string(),
            github_api_url: GITHUB_API_URL.to_string(),
            webhook_url: NOTIFICATION_WEBHOOK_URL.to_string(),
            project_links: PROJECT_LINKS.iter().map(|link| link.to_string()).collect(),
            query_cache: QueryCachePolicy::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            site_url: normalize_site_url(env::var("SITE_URL").ok()),
            ..defaults
        }
    }
}

/// Apply the `SITE_URL` override, dropping one trailing slash
fn normalize_site_url(raw: Option<String>) -> String {
    match raw {
        Some(url) if !url.trim().is_empty() => url
            .strip_suffix('/')
            .map(str::to_string)
            .unwrap_or(url),
        _ => DEFAULT_SITE_URL.to_string(),
    }
}

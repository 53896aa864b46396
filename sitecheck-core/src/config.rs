use url::Url;

/// Production site the auditor targets by default.
pub const DEFAULT_BASE: &str = "https://www.voiceover-captions-ai.com/";

/// Pages audited on every run.
pub const DEFAULT_PAGES: [&str; 11] = [
    "/",
    "/en/",
    "/blog.html",
    "/en/blog.html",
    "/blog-elevenlabs.html",
    "/en/blog-elevenlabs.html",
    "/mentions-legales",
    "/politique-de-confidentialite",
    "/legal-notice",
    "/privacy-policy",
    "/404.html",
];

/// Byte budgets for the built asset bundles.
pub const CSS_BUDGET: u64 = 120 * 1024;
pub const JS_BUDGET: u64 = 80 * 1024;

pub const CSS_ASSET: &str = "assets/styles.min.css";
pub const JS_ASSET: &str = "assets/main.min.js";

/// Parameters for one audit run.
#[derive(Debug, Clone)]
pub struct AuditConfig {
    pub base: Url,
    /// Absolute HTTPS prefix canonicals and sitemap references must live
    /// under. Follows `base` when it is HTTPS, otherwise stays at the
    /// production origin so HTTP staging bases still flag http canonicals.
    pub expected_origin: String,
    pub pages: Vec<String>,
    /// Path robots.txt must never disallow.
    pub secondary_language_path: String,
    pub css_asset: String,
    pub js_asset: String,
    pub css_budget: u64,
    pub js_budget: u64,
    /// Concurrency cap for the per-page link checks.
    pub link_workers: usize,
    pub show_progress_bars: bool,
}

impl AuditConfig {
    pub fn new(base: Url) -> Self {
        let base = ensure_trailing_slash(base);
        let expected_origin = if base.scheme() == "https" {
            base.to_string()
        } else {
            DEFAULT_BASE.to_string()
        };

        Self {
            base,
            expected_origin,
            pages: DEFAULT_PAGES.iter().map(|p| p.to_string()).collect(),
            secondary_language_path: "/en/".to_string(),
            css_asset: CSS_ASSET.to_string(),
            js_asset: JS_ASSET.to_string(),
            css_budget: CSS_BUDGET,
            js_budget: JS_BUDGET,
            link_workers: 10,
            show_progress_bars: false,
        }
    }

    pub fn with_pages(mut self, pages: Vec<String>) -> Self {
        self.pages = pages;
        self
    }

    pub fn with_link_workers(mut self, workers: usize) -> Self {
        self.link_workers = workers;
        self
    }

    pub fn with_progress_bars(mut self, show: bool) -> Self {
        self.show_progress_bars = show;
        self
    }

    /// Absolute URL robots.txt must declare for the sitemap index.
    pub fn expected_sitemap(&self) -> String {
        format!("{}sitemap.xml", self.expected_origin)
    }
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self::new(Url::parse(DEFAULT_BASE).expect("default base URL is valid"))
    }
}

/// Normalize a base URL so joining page paths keeps the full prefix.
pub fn ensure_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

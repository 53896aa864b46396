use scraper::{Html, Selector};
use std::collections::HashSet;
use tracing::debug;
use url::Url;

/// SEO-relevant metadata extracted from a page's HTML.
///
/// Extraction is mechanical: it records what the document declares and
/// nothing more. Judging the values against site policy happens in
/// sitecheck-core.
#[derive(Debug, Clone, Default)]
pub struct PageMeta {
    /// First `link[rel="canonical"]` href, verbatim.
    pub canonical: Option<String>,
    /// Every `link[rel="alternate"]` with an hreflang, as (lang, href).
    pub hreflangs: Vec<(String, String)>,
    pub og_title: bool,
    pub og_description: bool,
    pub og_image: bool,
    pub twitter_card: bool,
    pub twitter_title: bool,
}

impl PageMeta {
    /// Extract metadata from an HTML document. Malformed or empty input
    /// yields an empty `PageMeta`, never an error.
    pub fn parse(html: &str) -> Self {
        if html.is_empty() {
            return Self::default();
        }

        let document = Html::parse_document(html);

        let canonical_selector = Selector::parse(r#"link[rel="canonical"]"#).unwrap();
        let canonical = document
            .select(&canonical_selector)
            .filter_map(|el| el.value().attr("href"))
            .map(str::to_string)
            .next();

        let alternate_selector = Selector::parse(r#"link[rel="alternate"][hreflang]"#).unwrap();
        let hreflangs = document
            .select(&alternate_selector)
            .filter_map(|el| {
                let lang = el.value().attr("hreflang")?;
                let href = el.value().attr("href")?;
                Some((lang.to_string(), href.to_string()))
            })
            .collect();

        Self {
            canonical,
            hreflangs,
            og_title: meta_present(&document, r#"meta[property="og:title"]"#),
            og_description: meta_present(&document, r#"meta[property="og:description"]"#),
            og_image: meta_present(&document, r#"meta[property="og:image"]"#),
            twitter_card: meta_present(&document, r#"meta[name="twitter:card"]"#),
            twitter_title: meta_present(&document, r#"meta[name="twitter:title"]"#),
        }
    }

    pub fn has_hreflang(&self, lang: &str) -> bool {
        self.hreflangs
            .iter()
            .any(|(l, _)| l.eq_ignore_ascii_case(lang))
    }
}

fn meta_present(document: &Html, selector: &str) -> bool {
    let selector = Selector::parse(selector).unwrap();
    document
        .select(&selector)
        .any(|el| el.value().attr("content").is_some_and(|c| !c.trim().is_empty()))
}

/// Collect every `href` and `src` reference in the document, resolved
/// against the page URL. Anchors, `javascript:`, `mailto:` and `tel:`
/// references are dropped before resolution; fragments are stripped; only
/// http(s) results are kept, deduplicated in first-seen order.
pub fn extract_links(html: &str, page_url: &str) -> Vec<String> {
    if html.is_empty() {
        return Vec::new();
    }
    let Ok(base) = Url::parse(page_url) else {
        return Vec::new();
    };

    let document = Html::parse_document(html);
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for (selector, attr) in [("[href]", "href"), ("[src]", "src")] {
        let selector = Selector::parse(selector).unwrap();
        for element in document.select(&selector) {
            if let Some(raw) = element.value().attr(attr)
                && let Some(resolved) = resolve_ref(&base, raw)
                && seen.insert(resolved.clone())
            {
                links.push(resolved);
            }
        }
    }

    debug!("extracted {} links from {}", links.len(), page_url);
    links
}

fn resolve_ref(base: &Url, href: &str) -> Option<String> {
    if href.is_empty()
        || href.starts_with('#')
        || href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
    {
        return None;
    }

    let mut resolved = base.join(href).ok()?;
    resolved.set_fragment(None);

    match resolved.scheme() {
        "http" | "https" => Some(resolved.to_string()),
        _ => None,
    }
}

// SEO policy checks over extracted page metadata

use serde::{Deserialize, Serialize};
use sitecheck_scanner::PageMeta;

/// Per-page SEO judgment, one report line per group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeoAudit {
    pub canonical: Option<String>,
    pub canonical_ok: bool,
    pub hreflang_fr: bool,
    pub hreflang_en: bool,
    pub hreflang_x_default: bool,
    pub og_title: bool,
    pub og_description: bool,
    pub og_image: bool,
    pub twitter_card: bool,
    pub twitter_title: bool,
}

/// Judge extracted metadata against the expected canonical origin.
///
/// A canonical is accepted iff it is present and starts with the expected
/// origin, which is an absolute HTTPS prefix by construction. Relative,
/// http-only and foreign-host canonicals all fail.
pub fn judge_page_meta(meta: &PageMeta, expected_origin: &str) -> SeoAudit {
    let canonical_ok = meta
        .canonical
        .as_deref()
        .is_some_and(|canonical| canonical.starts_with(expected_origin));

    SeoAudit {
        canonical: meta.canonical.clone(),
        canonical_ok,
        hreflang_fr: meta.has_hreflang("fr"),
        hreflang_en: meta.has_hreflang("en"),
        hreflang_x_default: meta.has_hreflang("x-default"),
        og_title: meta.og_title,
        og_description: meta.og_description,
        og_image: meta.og_image,
        twitter_card: meta.twitter_card,
        twitter_title: meta.twitter_title,
    }
}

// Tests for SEO policy judgments

use sitecheck_core::seo::judge_page_meta;
use sitecheck_scanner::PageMeta;

const EXPECTED_ORIGIN: &str = "https://www.voiceover-captions-ai.com/";

fn meta_with_canonical(canonical: Option<&str>) -> PageMeta {
    PageMeta {
        canonical: canonical.map(str::to_string),
        ..PageMeta::default()
    }
}

fn meta_with_hreflangs(langs: &[&str]) -> PageMeta {
    PageMeta {
        hreflangs: langs
            .iter()
            .map(|l| (l.to_string(), format!("{}{}", EXPECTED_ORIGIN, l)))
            .collect(),
        ..PageMeta::default()
    }
}

// ============================================================================
// Canonical Tests
// ============================================================================

#[test]
fn test_canonical_accepted_when_under_expected_origin() {
    let meta = meta_with_canonical(Some("https://www.voiceover-captions-ai.com/"));
    let audit = judge_page_meta(&meta, EXPECTED_ORIGIN);
    assert!(audit.canonical_ok);
}

#[test]
fn test_canonical_accepted_for_deep_page() {
    let meta = meta_with_canonical(Some("https://www.voiceover-captions-ai.com/en/blog.html"));
    let audit = judge_page_meta(&meta, EXPECTED_ORIGIN);
    assert!(audit.canonical_ok);
}

#[test]
fn test_canonical_rejected_when_missing() {
    let meta = meta_with_canonical(None);
    let audit = judge_page_meta(&meta, EXPECTED_ORIGIN);
    assert!(!audit.canonical_ok);
    assert!(audit.canonical.is_none());
}

#[test]
fn test_canonical_rejected_when_relative() {
    let meta = meta_with_canonical(Some("/en/blog.html"));
    let audit = judge_page_meta(&meta, EXPECTED_ORIGIN);
    assert!(!audit.canonical_ok);
}

#[test]
fn test_canonical_rejected_when_http() {
    let meta = meta_with_canonical(Some("http://www.voiceover-captions-ai.com/"));
    let audit = judge_page_meta(&meta, EXPECTED_ORIGIN);
    assert!(!audit.canonical_ok);
}

#[test]
fn test_canonical_rejected_when_foreign_host() {
    let meta = meta_with_canonical(Some("https://voiceover-captions-ai.netlify.app/"));
    let audit = judge_page_meta(&meta, EXPECTED_ORIGIN);
    assert!(!audit.canonical_ok);
}

#[test]
fn test_canonical_value_is_echoed() {
    let meta = meta_with_canonical(Some("https://www.voiceover-captions-ai.com/blog.html"));
    let audit = judge_page_meta(&meta, EXPECTED_ORIGIN);
    assert_eq!(
        audit.canonical.as_deref(),
        Some("https://www.voiceover-captions-ai.com/blog.html")
    );
}

// ============================================================================
// hreflang Coverage Tests
// ============================================================================

#[test]
fn test_hreflang_full_coverage() {
    let meta = meta_with_hreflangs(&["fr", "en", "x-default"]);
    let audit = judge_page_meta(&meta, EXPECTED_ORIGIN);
    assert!(audit.hreflang_fr);
    assert!(audit.hreflang_en);
    assert!(audit.hreflang_x_default);
}

#[test]
fn test_hreflang_missing_fr_flips_only_fr() {
    let meta = meta_with_hreflangs(&["en", "x-default"]);
    let audit = judge_page_meta(&meta, EXPECTED_ORIGIN);
    assert!(!audit.hreflang_fr);
    assert!(audit.hreflang_en);
    assert!(audit.hreflang_x_default);
}

#[test]
fn test_hreflang_missing_en_flips_only_en() {
    let meta = meta_with_hreflangs(&["fr", "x-default"]);
    let audit = judge_page_meta(&meta, EXPECTED_ORIGIN);
    assert!(audit.hreflang_fr);
    assert!(!audit.hreflang_en);
    assert!(audit.hreflang_x_default);
}

#[test]
fn test_hreflang_missing_x_default_flips_only_x_default() {
    let meta = meta_with_hreflangs(&["fr", "en"]);
    let audit = judge_page_meta(&meta, EXPECTED_ORIGIN);
    assert!(audit.hreflang_fr);
    assert!(audit.hreflang_en);
    assert!(!audit.hreflang_x_default);
}

#[test]
fn test_hreflang_case_insensitive() {
    let meta = meta_with_hreflangs(&["FR", "EN", "X-DEFAULT"]);
    let audit = judge_page_meta(&meta, EXPECTED_ORIGIN);
    assert!(audit.hreflang_fr);
    assert!(audit.hreflang_en);
    assert!(audit.hreflang_x_default);
}

// ============================================================================
// Social Card Tests
// ============================================================================

#[test]
fn test_social_flags_pass_through() {
    let meta = PageMeta {
        og_title: true,
        og_description: false,
        og_image: true,
        twitter_card: false,
        twitter_title: true,
        ..PageMeta::default()
    };
    let audit = judge_page_meta(&meta, EXPECTED_ORIGIN);
    assert!(audit.og_title);
    assert!(!audit.og_description);
    assert!(audit.og_image);
    assert!(!audit.twitter_card);
    assert!(audit.twitter_title);
}

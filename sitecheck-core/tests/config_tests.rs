// Tests for audit configuration defaults and normalization

use sitecheck_core::config::{AuditConfig, DEFAULT_BASE, DEFAULT_PAGES, ensure_trailing_slash};
use url::Url;

#[test]
fn test_default_config_targets_production() {
    let config = AuditConfig::default();
    assert_eq!(config.base.as_str(), DEFAULT_BASE);
    assert_eq!(config.expected_origin, DEFAULT_BASE);
    assert_eq!(config.pages.len(), DEFAULT_PAGES.len());
    assert_eq!(config.secondary_language_path, "/en/");
    assert_eq!(config.css_budget, 120 * 1024);
    assert_eq!(config.js_budget, 80 * 1024);
}

#[test]
fn test_expected_origin_follows_https_base() {
    let base = Url::parse("https://deploy-preview-42.example.app/").unwrap();
    let config = AuditConfig::new(base);
    assert_eq!(
        config.expected_origin,
        "https://deploy-preview-42.example.app/"
    );
}

#[test]
fn test_expected_origin_stays_production_for_http_base() {
    let base = Url::parse("http://localhost:8080/").unwrap();
    let config = AuditConfig::new(base);
    assert_eq!(config.expected_origin, DEFAULT_BASE);
}

#[test]
fn test_base_gets_trailing_slash() {
    let base = Url::parse("https://www.example.com/site").unwrap();
    let config = AuditConfig::new(base);
    assert_eq!(config.base.path(), "/site/");
}

#[test]
fn test_ensure_trailing_slash_is_idempotent() {
    let url = Url::parse("https://www.example.com/a/").unwrap();
    assert_eq!(ensure_trailing_slash(url).path(), "/a/");
}

#[test]
fn test_expected_sitemap_url() {
    let config = AuditConfig::default();
    assert_eq!(
        config.expected_sitemap(),
        "https://www.voiceover-captions-ai.com/sitemap.xml"
    );
}

#[test]
fn test_builder_overrides() {
    let config = AuditConfig::default()
        .with_pages(vec!["/".to_string(), "/en/".to_string()])
        .with_link_workers(4)
        .with_progress_bars(true);

    assert_eq!(config.pages.len(), 2);
    assert_eq!(config.link_workers, 4);
    assert!(config.show_progress_bars);
}

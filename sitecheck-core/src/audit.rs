use crate::config::AuditConfig;
use crate::headers::{BudgetAudit, HeaderAudit, audit_asset_budget, audit_security_headers};
use crate::report::{AuditReport, PageAudit, SectionAudit};
use crate::seo::judge_page_meta;
use crate::site::{validate_robots, validate_sitemap_index};
use indicatif::{ProgressBar, ProgressStyle};
use sitecheck_scanner::{PageMeta, SiteClient, check_links, extract_links};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;
use url::Url;

/// Callback for reporting audit progress
pub type AuditProgressCallback = Arc<dyn Fn(String) + Send + Sync>;

/// Run the full audit pipeline: pages, robots.txt, sitemaps, security
/// headers and asset budgets.
///
/// Individual fetch failures degrade into report findings; nothing here
/// aborts the run early.
pub async fn execute_audit(
    config: &AuditConfig,
    client: &SiteClient,
    progress_callback: Option<AuditProgressCallback>,
) -> AuditReport {
    info!("Starting audit of {}", config.base);

    let progress_bar = if config.show_progress_bars {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.set_message("Starting audit...");
        Some(pb)
    } else {
        None
    };

    // Phase-level messages go to the callback; the spinner tracks pages.
    let notify = |msg: String| {
        if let Some(ref callback) = progress_callback {
            callback(msg);
        }
    };

    notify(format!("Auditing {} pages", config.pages.len()));
    let mut pages = Vec::with_capacity(config.pages.len());
    for (idx, page) in config.pages.iter().enumerate() {
        if let Some(ref pb) = progress_bar {
            pb.set_message(format!(
                "Auditing {} ({}/{})",
                page,
                idx + 1,
                config.pages.len()
            ));
            pb.tick();
        }
        pages.push(audit_page(config, client, page).await);
    }

    notify("Checking robots.txt".to_string());
    let robots = audit_robots(config, client).await;

    notify("Checking sitemaps".to_string());
    let sitemaps = audit_sitemaps(config, client).await;

    notify("Checking security headers".to_string());
    let security_headers = audit_headers(config, client).await;

    notify("Checking asset budgets".to_string());
    let budgets = audit_budgets(config, client).await;

    if let Some(ref pb) = progress_bar {
        pb.finish_with_message(format!("Audit complete! {} pages checked", pages.len()));
    }
    info!("Audit complete. {} pages checked", pages.len());

    AuditReport {
        generated_at: current_timestamp(),
        base: config.base.to_string(),
        expected_origin: config.expected_origin.clone(),
        pages,
        robots,
        sitemaps,
        security_headers,
        budgets,
    }
}

/// Audit one page: fetch it, judge its SEO metadata, then probe every link
/// and asset reference it carries.
async fn audit_page(config: &AuditConfig, client: &SiteClient, page: &str) -> PageAudit {
    let Some(url) = resolve_page(&config.base, page) else {
        return PageAudit {
            page: page.to_string(),
            url: page.to_string(),
            status: 0,
            ok: false,
            seo: None,
            links_checked: 0,
            bad_links: Vec::new(),
        };
    };

    let fetch = client.get_page(url.as_str()).await;
    let status = fetch.as_ref().map(|f| f.status).unwrap_or(0);
    let ok = status > 0 && status < 400;

    let body = fetch.map(|f| f.body).unwrap_or_default();

    let seo = if body.is_empty() {
        None
    } else {
        Some(judge_page_meta(
            &PageMeta::parse(&body),
            &config.expected_origin,
        ))
    };

    let links = extract_links(&body, url.as_str());
    let links_checked = links.len();
    let bad_links = check_links(client, links, config.link_workers)
        .await
        .into_iter()
        .filter(|check| !check.is_ok())
        .collect();

    PageAudit {
        page: page.to_string(),
        url: url.to_string(),
        status,
        ok,
        seo,
        links_checked,
        bad_links,
    }
}

async fn audit_robots(config: &AuditConfig, client: &SiteClient) -> SectionAudit {
    fetch_section(config, client, "robots.txt", |body| {
        validate_robots(
            body,
            &config.expected_sitemap(),
            &config.secondary_language_path,
        )
    })
    .await
}

async fn audit_sitemaps(config: &AuditConfig, client: &SiteClient) -> SectionAudit {
    fetch_section(config, client, "sitemap.xml", |body| {
        validate_sitemap_index(body, &config.expected_origin)
    })
    .await
}

/// Shared fetch-then-validate shape for robots.txt and the sitemap index:
/// an error status or no response becomes a single warning naming the file.
async fn fetch_section<F>(
    config: &AuditConfig,
    client: &SiteClient,
    file: &str,
    validate: F,
) -> SectionAudit
where
    F: Fn(&str) -> Vec<String>,
{
    let Some(url) = resolve_page(&config.base, file) else {
        return SectionAudit {
            status: None,
            warnings: vec![format!("{} HTTP ERR", file)],
        };
    };

    match client.get_page(url.as_str()).await {
        Some(fetch) if fetch.status < 400 => SectionAudit {
            status: Some(fetch.status),
            warnings: validate(&fetch.body),
        },
        Some(fetch) => SectionAudit {
            status: Some(fetch.status),
            warnings: vec![format!("{} HTTP {}", file, fetch.status)],
        },
        None => SectionAudit {
            status: None,
            warnings: vec![format!("{} HTTP ERR", file)],
        },
    }
}

async fn audit_headers(config: &AuditConfig, client: &SiteClient) -> Vec<HeaderAudit> {
    let mut audits = Vec::new();
    for target in ["/", config.secondary_language_path.as_str()] {
        let head = match resolve_page(&config.base, target) {
            Some(url) => client.head(url.as_str()).await,
            None => None,
        };
        audits.push(audit_security_headers(target, head.as_ref()));
    }
    audits
}

async fn audit_budgets(config: &AuditConfig, client: &SiteClient) -> Vec<BudgetAudit> {
    let assets = [
        (config.css_asset.as_str(), config.css_budget),
        (config.js_asset.as_str(), config.js_budget),
    ];

    let mut audits = Vec::new();
    for (asset, budget) in assets {
        let head = match resolve_page(&config.base, asset) {
            Some(url) => client.head(url.as_str()).await,
            None => None,
        };
        audits.push(audit_asset_budget(asset, head.as_ref(), budget));
    }
    audits
}

fn resolve_page(base: &Url, page: &str) -> Option<Url> {
    base.join(page.trim_start_matches('/')).ok()
}

fn current_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

// Report model and rendering

use crate::headers::{BudgetAudit, HeaderAudit, format_size};
use crate::seo::SeoAudit;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sitecheck_scanner::LinkCheck;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ReportFormat {
    Markdown,
    Json,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Some(ReportFormat::Markdown),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

/// Everything observed about a single audited page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageAudit {
    pub page: String,
    pub url: String,
    /// HTTP status, 0 when the page could not be fetched at all.
    pub status: u16,
    pub ok: bool,
    /// `None` when no HTML was obtained.
    pub seo: Option<SeoAudit>,
    pub links_checked: usize,
    pub bad_links: Vec<LinkCheck>,
}

/// robots.txt / sitemap-index findings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionAudit {
    pub status: Option<u16>,
    pub warnings: Vec<String>,
}

/// The full outcome of one audit run. Built once, written once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    pub generated_at: i64,
    pub base: String,
    pub expected_origin: String,
    pub pages: Vec<PageAudit>,
    pub robots: SectionAudit,
    pub sitemaps: SectionAudit,
    pub security_headers: Vec<HeaderAudit>,
    pub budgets: Vec<BudgetAudit>,
}

impl AuditReport {
    pub fn total_bad_links(&self) -> usize {
        self.pages.iter().map(|p| p.bad_links.len()).sum()
    }

    pub fn failing_pages(&self) -> usize {
        self.pages.iter().filter(|p| !p.ok).count()
    }

    pub fn total_warnings(&self) -> usize {
        let header_warnings: usize = self
            .security_headers
            .iter()
            .map(|h| if h.reachable { h.missing.len() } else { 1 })
            .sum();
        let budget_failures = self.budgets.iter().filter(|b| !b.is_ok()).count();

        self.robots.warnings.len()
            + self.sitemaps.warnings.len()
            + header_warnings
            + budget_failures
    }
}

fn mark(ok: bool) -> &'static str {
    if ok { "✓" } else { "✗" }
}

fn status_label(status: u16) -> String {
    if status == 0 {
        "ERR".to_string()
    } else {
        status.to_string()
    }
}

pub fn render_markdown(report: &AuditReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# QA report — {}\n",
        format_timestamp(report.generated_at)
    ));
    out.push_str(&format!("\n# Base: {}\n", report.base));

    for page in &report.pages {
        out.push_str(&format!(
            "\n## Page: {} — HTTP {}\n",
            page.page,
            status_label(page.status)
        ));

        match page.seo {
            Some(ref seo) => {
                let canonical_verdict = if seo.canonical_ok {
                    "✓".to_string()
                } else {
                    format!(
                        "✗ (must be an absolute https URL under {})",
                        report.expected_origin
                    )
                };
                out.push_str(&format!(
                    "- Canonical: {} {}\n",
                    seo.canonical.as_deref().unwrap_or("missing"),
                    canonical_verdict
                ));
                out.push_str(&format!(
                    "- hreflang: FR={} EN={} x-default={}\n",
                    mark(seo.hreflang_fr),
                    mark(seo.hreflang_en),
                    mark(seo.hreflang_x_default)
                ));
                out.push_str(&format!(
                    "- OpenGraph: title={} description={} image={}\n",
                    mark(seo.og_title),
                    mark(seo.og_description),
                    mark(seo.og_image)
                ));
                out.push_str(&format!(
                    "- Twitter: card={} title={}\n",
                    mark(seo.twitter_card),
                    mark(seo.twitter_title)
                ));
            }
            None => out.push_str("- Unable to load HTML. ✗\n"),
        }

        out.push_str("\n**Links (4xx/5xx)**\n");
        if page.bad_links.is_empty() {
            out.push_str("- No broken links. ✓\n");
        } else {
            for link in &page.bad_links {
                out.push_str(&format!("- {} → {}\n", link.url, status_label(link.status)));
            }
        }
    }

    out.push_str("\n## robots.txt\n");
    push_warnings(&mut out, &report.robots.warnings);

    out.push_str("\n## Sitemaps\n");
    push_warnings(&mut out, &report.sitemaps.warnings);

    out.push_str("\n## Security headers (HEAD)\n");
    for audit in &report.security_headers {
        if !audit.reachable {
            out.push_str(&format!("- {} (HEAD failed) ✗\n", audit.target));
            continue;
        }
        if audit.missing.is_empty() {
            out.push_str(&format!(
                "- {} : all required headers present ✓\n",
                audit.target
            ));
        } else {
            out.push_str(&format!(
                "- {} : missing → {} ✗\n",
                audit.target,
                audit.missing.join(", ")
            ));
        }
        for (name, value) in &audit.present {
            out.push_str(&format!("  - {}: {}\n", name, value));
        }
    }

    out.push_str("\n## Asset budgets\n");
    for budget in &report.budgets {
        let verdict = match budget.size {
            Some(size) if size <= budget.budget => "✓ OK".to_string(),
            Some(_) => format!("✗ over {}", format_size(Some(budget.budget))),
            None => "✗ no content-length".to_string(),
        };
        out.push_str(&format!(
            "- {} : {} ({})\n",
            budget.asset,
            format_size(budget.size),
            verdict
        ));
    }

    out.push_str("\n## HTTP summary\n");
    for page in &report.pages {
        out.push_str(&format!(
            "- {} → {} {}\n",
            page.page,
            status_label(page.status),
            mark(page.ok)
        ));
    }

    out
}

fn push_warnings(out: &mut String, warnings: &[String]) {
    if warnings.is_empty() {
        out.push_str("- No problems detected. ✓\n");
    } else {
        for warning in warnings {
            out.push_str(&format!("- {}\n", warning));
        }
    }
}

pub fn render_json(report: &AuditReport) -> Result<String, serde_json::Error> {
    let budgets: Vec<_> = report
        .budgets
        .iter()
        .map(|b| {
            serde_json::json!({
                "asset": b.asset,
                "size": b.size,
                "budget": b.budget,
                "ok": b.is_ok(),
            })
        })
        .collect();

    let json_report = serde_json::json!({
        "report": {
            "metadata": {
                "generator": "sitecheck",
                "version": env!("CARGO_PKG_VERSION"),
                "generated_at": format_timestamp(report.generated_at),
                "format": "json",
            },
            "base": report.base,
            "expected_origin": report.expected_origin,
            "summary": {
                "pages_audited": report.pages.len(),
                "pages_failing": report.failing_pages(),
                "bad_links": report.total_bad_links(),
                "warnings": report.total_warnings(),
            },
            "pages": report.pages,
            "robots": report.robots,
            "sitemaps": report.sitemaps,
            "security_headers": report.security_headers,
            "budgets": budgets,
        }
    });

    serde_json::to_string_pretty(&json_report)
}

/// Write the rendered report, creating parent directories as needed. The
/// single write here is the only persisted side effect of a run.
pub fn save_report(content: &str, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
}

fn format_timestamp(timestamp: i64) -> String {
    DateTime::<Utc>::from_timestamp(timestamp, 0)
        .unwrap_or_else(|| Utc::now())
        .to_rfc3339()
}

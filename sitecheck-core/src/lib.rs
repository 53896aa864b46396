pub mod audit;
pub mod config;
pub mod headers;
pub mod report;
pub mod seo;
pub mod site;

pub use audit::{AuditProgressCallback, execute_audit};
pub use config::AuditConfig;
pub use report::{AuditReport, ReportFormat, render_json, render_markdown, save_report};

/// Print the startup banner.
pub fn print_banner() {
    println!("{}", "═".repeat(60));
    println!(
        "  SITECHECK v{}  -  deployment QA for static sites",
        env!("CARGO_PKG_VERSION")
    );
    println!("{}", "═".repeat(60));
}

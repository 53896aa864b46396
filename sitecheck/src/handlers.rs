use clap::ArgMatches;
use colored::Colorize;
use sitecheck_core::audit::{AuditProgressCallback, execute_audit};
use sitecheck_core::config::AuditConfig;
use sitecheck_core::report::{ReportFormat, render_json, render_markdown, save_report};
use sitecheck_scanner::SiteClient;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;
use url::Url;

/// Load and parse page paths from a newline-delimited file. Blank lines and
/// `#` comments are skipped.
pub fn load_pages_from_file(path: &PathBuf) -> Result<Vec<String>, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read pages file {}: {}", path.display(), e))?;

    let pages: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !line.starts_with('#'))
        .map(parse_page_line)
        .collect();

    if pages.is_empty() {
        return Err(format!("No page paths found in {}", path.display()));
    }

    Ok(pages)
}

/// Normalize a page line to a leading-slash path.
pub fn parse_page_line(line: &str) -> String {
    let line = line.trim();
    if line.starts_with('/') {
        line.to_string()
    } else {
        format!("/{}", line)
    }
}

pub async fn handle_run(args: &ArgMatches, quiet: bool) {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let base = args.get_one::<Url>("base").unwrap();
    let out = args.get_one::<String>("out").unwrap();
    let format = args
        .get_one::<String>("format")
        .and_then(|f| ReportFormat::from_str(f))
        .unwrap_or(ReportFormat::Markdown);
    let threads = *args.get_one::<usize>("threads").unwrap_or(&10);
    let pages_file = args.get_one::<PathBuf>("pages-file");

    let expanded_out = shellexpand::tilde(out);
    let out_path = PathBuf::from(expanded_out.as_ref());

    let mut config = AuditConfig::new(base.clone())
        .with_link_workers(threads)
        .with_progress_bars(!quiet);

    if let Some(path) = pages_file {
        match load_pages_from_file(path) {
            Ok(pages) => config = config.with_pages(pages),
            Err(e) => {
                eprintln!("{} {}", "✗".red().bold(), e);
                std::process::exit(1);
            }
        }
    }

    let client = match SiteClient::new() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{} Failed to build HTTP client: {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    };

    if !quiet {
        println!("\n🔍 Auditing {}", config.base);
        println!("Pages: {}", config.pages.len());
        println!("Link workers: {}", config.link_workers);
        println!("Report: {}\n", out_path.display());
    }
    info!("Auditing {} pages of {}", config.pages.len(), config.base);

    let started = Instant::now();

    let progress_callback: Option<AuditProgressCallback> = if quiet {
        None
    } else {
        Some(Arc::new(|msg: String| println!("{}", msg)))
    };

    let report = execute_audit(&config, &client, progress_callback).await;

    let rendered = match format {
        ReportFormat::Markdown => render_markdown(&report),
        ReportFormat::Json => match render_json(&report) {
            Ok(rendered) => rendered,
            Err(e) => {
                eprintln!("{} Failed to encode report: {}", "✗".red().bold(), e);
                std::process::exit(1);
            }
        },
    };

    if let Err(e) = save_report(&rendered, &out_path) {
        eprintln!(
            "{} Failed to write report {}: {}",
            "✗".red().bold(),
            out_path.display(),
            e
        );
        std::process::exit(1);
    }

    // Findings never fail the run; a completed audit always exits 0.
    println!("\n{} Audit complete!", "✓".green().bold());
    println!(
        "{} Pages: {} audited, {} failing",
        "→".blue(),
        report.pages.len(),
        report.failing_pages()
    );
    println!("{} Broken links: {}", "→".blue(), report.total_bad_links());
    println!("{} Warnings: {}", "→".blue(), report.total_warnings());
    println!(
        "{} Report written: {}",
        "✓".green().bold(),
        out_path.display().to_string().bright_white()
    );
    println!("{} Elapsed: {}s", "→".blue(), started.elapsed().as_secs());
}

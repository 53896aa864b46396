use clap::{arg, command};
use sitecheck_core::config::DEFAULT_BASE;
use url::Url;

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("sitecheck")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("sitecheck")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .subcommand_required(false)
        .subcommand(
            command!("run")
                .about(
                    "Audit the deployed site: SEO metadata, link reachability, robots.txt, \
                sitemaps, security headers and asset budgets. Writes a single report.",
                )
                .arg(
                    arg!(-b --"base" <URL>)
                        .required(false)
                        .help("Base URL of the deployed site")
                        .value_parser(clap::value_parser!(Url))
                        .default_value(DEFAULT_BASE),
                )
                .arg(
                    arg!(-o --"out" <PATH>)
                        .required(false)
                        .help("Where to write the report")
                        .default_value("report.md"),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Report format: markdown, json")
                        .value_parser(["markdown", "md", "json"])
                        .default_value("markdown"),
                )
                .arg(
                    arg!(-t --"threads" <NUM_WORKERS>)
                        .required(false)
                        .help("The number of concurrent link checks per page.")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("10"),
                )
                .arg(
                    arg!(-P --"pages-file" <PATH>)
                        .required(false)
                        .help("Path to a newline-delimited file of page paths overriding the built-in audit list")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                ),
        )
}

use clap::{CommandFactory, Parser};
use siteaudit::config::{CliConfig, Config, SiteConfig};
use siteaudit::core::{Audit, AuditReport};
use siteaudit::duplicates::{DuplicateReport, ImageReferenceScanner};
use siteaudit::reporting::logging;
use siteaudit::ui::completion::print_completions;
use siteaudit::ui::output::{self, CombinedReport};
use siteaudit::ui::{Cli, Commands, cli_to_config};
use siteaudit::validation::{LinkExistenceChecker, LinkReport};

use std::time::Instant;

fn main() {
    let cli = Cli::parse();

    // Handle completion commands first
    if let Some(exit_code) = handle_completion_commands(&cli) {
        std::process::exit(exit_code);
    }

    match run_siteaudit_logic(&cli) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle completion commands and return exit code if a completion command was processed
pub fn handle_completion_commands(cli: &Cli) -> Option<i32> {
    match cli.command {
        Commands::CompletionGenerate { shell } => {
            let mut app = Cli::command();
            print_completions(shell, &mut app);
            Some(0)
        }
        _ => None,
    }
}

/// Main audit logic extracted from main() for testing
pub fn run_siteaudit_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli);
    let config = load_and_merge_config(&cli_config)?;

    logging::init_logger(config.verbose.unwrap_or(false), cli_config.quiet);

    let site = config.site()?;
    logging::log_site_info(&site);

    let json = output::is_json(config.output_format());
    let show_progress = !cli_config.quiet && !json;

    let (duplicates, links) = match cli.command {
        Commands::Duplicates => (Some(run_duplicates(&site)?), None),
        Commands::Links => (None, Some(run_links(&site)?)),
        Commands::All => (Some(run_duplicates(&site)?), Some(run_links(&site)?)),
        Commands::CompletionGenerate { .. } => return Ok(0),
    };

    let rendered = render(duplicates.as_ref(), links.as_ref(), json, show_progress)?;
    print!("{rendered}");

    Ok(determine_exit_code(
        duplicates.as_ref(),
        links.as_ref(),
        cli_config.fail_on_duplicates,
    ))
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file)?
    } else {
        Config::load_from_standard_locations()?
    };

    // CLI takes precedence
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}

fn run_duplicates(site: &SiteConfig) -> siteaudit::Result<DuplicateReport> {
    timed("duplicates", || ImageReferenceScanner::new(site).run())
}

fn run_links(site: &SiteConfig) -> siteaudit::Result<LinkReport> {
    timed("links", || LinkExistenceChecker::new(site)?.run())
}

fn timed<R, F>(audit: &str, run: F) -> siteaudit::Result<R>
where
    R: AuditReport,
    F: FnOnce() -> siteaudit::Result<R>,
{
    let start = Instant::now();
    let report = run()?;
    logging::log_audit_complete(audit, &report, start.elapsed().as_millis());
    Ok(report)
}

/// Render whichever reports were produced, in text or JSON
pub fn render(
    duplicates: Option<&DuplicateReport>,
    links: Option<&LinkReport>,
    json: bool,
    show_progress: bool,
) -> siteaudit::Result<String> {
    if json {
        return match (duplicates, links) {
            (Some(duplicates), Some(links)) => {
                output::render_json(&CombinedReport { duplicates, links })
            }
            (Some(duplicates), None) => output::render_json(duplicates),
            (None, Some(links)) => output::render_json(links),
            (None, None) => Ok(String::new()),
        };
    }

    let mut out = String::new();
    if let Some(report) = duplicates {
        out.push_str(&output::render_duplicates(report, show_progress));
    }
    if let Some(report) = links {
        if duplicates.is_some() {
            out.push('\n');
        }
        out.push_str(&output::render_links(report, show_progress));
    }
    Ok(out)
}

pub fn determine_exit_code(
    duplicates: Option<&DuplicateReport>,
    links: Option<&LinkReport>,
    fail_on_duplicates: bool,
) -> i32 {
    let broken = links.is_some_and(|report| report.has_findings());
    let duplicated = fail_on_duplicates && duplicates.is_some_and(|report| report.has_findings());

    if broken || duplicated { 1 } else { 0 }
}

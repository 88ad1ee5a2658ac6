// Command-line interface definitions and parsing for siteaudit

use crate::config::CliConfig;
use crate::core::constants::output_formats;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub options: GlobalOptions,
}

#[derive(Args, Debug, Default)]
pub struct GlobalOptions {
    // Site
    /// Site root directory (default: current directory)
    #[arg(
        short = 'r',
        long,
        global = true,
        value_name = "DIR",
        help_heading = "Site"
    )]
    pub root: Option<PathBuf>,

    /// Page to scan, relative to the root (repeatable; replaces the manifest)
    #[arg(
        short = 'p',
        long = "page",
        global = true,
        value_name = "PATH",
        help_heading = "Site"
    )]
    pub pages: Vec<String>,

    /// Filenames to leave out of duplicate reports (comma-separated)
    #[arg(long, global = true, value_name = "NAMES", help_heading = "Site")]
    pub ignore: Option<String>,

    /// Asset that must resolve wherever it is referenced (repeatable)
    #[arg(
        long = "known-asset",
        global = true,
        value_name = "NAME",
        help_heading = "Site"
    )]
    pub known_assets: Vec<String>,

    // Output & Verbosity
    /// Output format
    #[arg(long, global = true, value_name = "FORMAT", value_parser = output_formats::ALL, help_heading = "Output & Verbosity")]
    pub format: Option<String>,

    /// Exit with status 1 when duplicate images are found
    #[arg(long, global = true, help_heading = "Output & Verbosity")]
    pub fail_on_duplicates: bool,

    /// Hide progress lines
    #[arg(short = 'q', long, global = true, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, global = true, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, global = true, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, global = true, help_heading = "Configuration")]
    pub no_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Report images used on more than one page or more than once on a page
    Duplicates,
    /// Report src/href references that do not exist on disk
    Links,
    /// Run both audits
    All,
    /// Generate shell completions
    #[command(name = "completion-generate", arg_required_else_help = true)]
    CompletionGenerate {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Convert clap CLI struct to CliConfig
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    let options = &cli.options;

    CliConfig {
        root_dir: options.root.clone(),
        pages: non_empty(&options.pages),
        ignored_filenames: options.ignore.as_deref().map(split_list),
        known_assets: non_empty(&options.known_assets),
        quiet: options.quiet,
        verbose: options.verbose,
        output_format: options.format.clone(),
        fail_on_duplicates: options.fail_on_duplicates,
        config_file: options.config.clone(),
        no_config: options.no_config,
    }
}

fn non_empty(values: &[String]) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values.to_vec())
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_links_with_options() {
        let cli = Cli::parse_from([
            "siteaudit",
            "links",
            "--root",
            "/srv/site",
            "--page",
            "index.html",
            "-p",
            "es/index.html",
            "--format",
            "json",
        ]);

        assert_eq!(cli.command, Commands::Links);
        let config = cli_to_config(&cli);
        assert_eq!(config.root_dir, Some(PathBuf::from("/srv/site")));
        assert_eq!(
            config.pages,
            Some(vec!["index.html".to_string(), "es/index.html".to_string()])
        );
        assert_eq!(config.output_format, Some("json".to_string()));
        assert_eq!(config.known_assets, None);
    }

    #[test]
    fn test_global_options_before_subcommand() {
        let cli = Cli::parse_from(["siteaudit", "-q", "--ignore", "a.png, b.jpg,,", "duplicates"]);

        assert_eq!(cli.command, Commands::Duplicates);
        let config = cli_to_config(&cli);
        assert!(config.quiet);
        assert_eq!(
            config.ignored_filenames,
            Some(vec!["a.png".to_string(), "b.jpg".to_string()])
        );
    }

    #[test]
    fn test_rejects_unknown_format() {
        let result = Cli::try_parse_from(["siteaudit", "all", "--format", "yaml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_requires_subcommand() {
        assert!(Cli::try_parse_from(["siteaudit"]).is_err());
    }

    #[test]
    fn test_known_assets_repeatable() {
        let cli = Cli::parse_from([
            "siteaudit",
            "links",
            "--known-asset",
            "T1.png",
            "--known-asset",
            "hero.webp",
        ]);

        assert_eq!(
            cli_to_config(&cli).known_assets,
            Some(vec!["T1.png".to_string(), "hero.webp".to_string()])
        );
    }
}

//! CLI argument definitions
//!
//! All Clap derive structs for `Folio` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::site::SiteSources;

// ============================================================================
// Root CLI
// ============================================================================

/// Config-driven portfolio gallery server.
#[derive(Parser, Debug)]
#[command(name = "folio", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "FOLIO_COLOR")]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(long, default_value = "human", global = true, env = "FOLIO_LOG_FORMAT")]
    pub log_format: LogFormatArg,
}

// ============================================================================
// Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the portfolio over HTTP.
    Serve(ServeArgs),

    /// Check projects.json, experiences.json and site.yaml.
    Validate(ValidateArgs),

    /// Render the portfolio to a static site directory.
    Build(BuildArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

/// Where the site's files live.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Site root; relative source paths resolve against it.
    #[arg(long, default_value = ".", env = "FOLIO_ROOT")]
    pub root: PathBuf,

    /// Project list.
    #[arg(long, default_value = "projects.json", env = "FOLIO_PROJECTS")]
    pub projects: PathBuf,

    /// Asset directory holding images and the résumé.
    #[arg(long, default_value = "assets", env = "FOLIO_ASSETS")]
    pub assets: PathBuf,

    /// Optional experience list.
    #[arg(long, default_value = "experiences.json", env = "FOLIO_EXPERIENCES")]
    pub experiences: PathBuf,

    /// Optional site settings.
    #[arg(long, default_value = "site.yaml", env = "FOLIO_SITE")]
    pub site: PathBuf,

    /// Grid columns, overriding site.yaml.
    #[arg(long, env = "FOLIO_COLUMNS", value_parser = clap::value_parser!(u8).range(1..=6))]
    pub columns: Option<u8>,
}

impl SourceArgs {
    /// Resolves the arguments into absolute-or-root-relative paths.
    #[must_use]
    pub fn sources(&self) -> SiteSources {
        SiteSources {
            projects: self.root.join(&self.projects),
            assets: self.root.join(&self.assets),
            experiences: self.root.join(&self.experiences),
            site: self.root.join(&self.site),
            root: self.root.clone(),
            columns: self.columns.map(usize::from),
        }
    }
}

/// Arguments for `serve`.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Bind address, `[host:]port`.
    #[arg(long, default_value = "127.0.0.1:8501", env = "FOLIO_BIND")]
    pub bind: String,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Arguments for `validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Enable strict validation (warnings become errors).
    #[arg(long)]
    pub strict: bool,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Arguments for `build`.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Output directory.
    #[arg(short, long, default_value = "dist", env = "FOLIO_OUT")]
    pub out: PathBuf,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormatArg {
    /// Human-readable lines.
    #[default]
    Human,
    /// Newline-delimited JSON.
    Json,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["folio", "serve"]).unwrap();
        let Commands::Serve(args) = cli.command else {
            panic!("Expected ServeArgs");
        };
        assert_eq!(args.bind, "127.0.0.1:8501");
        assert_eq!(args.source.projects, Path::new("projects.json"));
        assert_eq!(args.source.columns, None);
    }

    #[test]
    fn test_sources_resolve_against_root() {
        let cli =
            Cli::try_parse_from(["folio", "serve", "--root", "/srv/site", "--columns", "2"]).unwrap();
        let Commands::Serve(args) = cli.command else {
            panic!("Expected ServeArgs");
        };
        let sources = args.source.sources();
        assert_eq!(sources.projects, Path::new("/srv/site/projects.json"));
        assert_eq!(sources.assets, Path::new("/srv/site/assets"));
        assert_eq!(sources.columns, Some(2));
    }

    #[test]
    fn test_columns_range() {
        assert!(Cli::try_parse_from(["folio", "serve", "--columns", "0"]).is_err());
        assert!(Cli::try_parse_from(["folio", "serve", "--columns", "7"]).is_err());
        assert!(Cli::try_parse_from(["folio", "serve", "--columns", "6"]).is_ok());
    }

    #[test]
    fn test_help_output() {
        let err = Cli::try_parse_from(["folio", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_output() {
        let err = Cli::try_parse_from(["folio", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_color_choices_parse() {
        for variant in ["auto", "always", "never"] {
            let cli = Cli::try_parse_from(["folio", "--color", variant, "validate"]);
            assert!(cli.is_ok(), "Failed to parse color={variant}");
        }
    }

    #[test]
    fn test_validate_strict_json() {
        let cli = Cli::try_parse_from(["folio", "validate", "--strict", "--format", "json"]).unwrap();
        let Commands::Validate(args) = cli.command else {
            panic!("Expected ValidateArgs");
        };
        assert!(args.strict);
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn test_build_out() {
        let cli = Cli::try_parse_from(["folio", "build", "--out", "site"]).unwrap();
        let Commands::Build(args) = cli.command else {
            panic!("Expected BuildArgs");
        };
        assert_eq!(args.out, Path::new("site"));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["folio", "validate", "-vv", "--log-format", "json"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.log_format, LogFormatArg::Json);
    }
}

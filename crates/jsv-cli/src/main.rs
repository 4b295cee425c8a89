//! # jsv CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use jsv_cli::syntax::{run_syntax, SyntaxArgs};
use jsv_cli::validate::{run_validate, ValidateArgs};
use jsv_cli::{ReportStyle, RetCode, Session};

/// Validate JSON and YAML documents against JSON schemas.
#[derive(Parser, Debug)]
#[command(name = "jsv", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a validation configuration file (YAML or JSON).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print one line per file.
    #[arg(long, global = true, conflicts_with = "quiet")]
    brief: bool,

    /// Print nothing; report through the exit code only.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn style(&self) -> ReportStyle {
        if self.quiet {
            ReportStyle::Quiet
        } else if self.brief {
            ReportStyle::Brief
        } else {
            ReportStyle::Default
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check schemas for syntax errors.
    Syntax(SyntaxArgs),

    /// Validate instances against a schema.
    Validate(ValidateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("jsv CLI starting");

    let session = match Session::new(cli.config.as_deref(), cli.style()) {
        Ok(session) => session,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(RetCode::CmdError.code());
        }
    };

    let mut stdout = std::io::stdout().lock();
    let result = match &cli.command {
        Commands::Syntax(args) => run_syntax(args, &session, &mut stdout),
        Commands::Validate(args) => run_validate(args, &session, &mut stdout),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(RetCode::ExecutionError.code())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_syntax() {
        let cli = Cli::try_parse_from(["jsv", "syntax", "a.json", "b.yaml"]).unwrap();
        assert_eq!(cli.style(), ReportStyle::Default);
        if let Commands::Syntax(args) = cli.command {
            assert_eq!(args.schemas.len(), 2);
        } else {
            panic!("expected syntax subcommand");
        }
    }

    #[test]
    fn cli_parse_validate_with_globals() {
        let cli = Cli::try_parse_from([
            "jsv", "-vv", "--brief", "--config", "jsv.yaml", "validate", "s.json", "i1.json",
            "i2.json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.style(), ReportStyle::Brief);
        assert_eq!(cli.config, Some(PathBuf::from("jsv.yaml")));
        if let Commands::Validate(args) = cli.command {
            assert_eq!(args.schema, PathBuf::from("s.json"));
            assert_eq!(args.instances.len(), 2);
        } else {
            panic!("expected validate subcommand");
        }
    }

    #[test]
    fn cli_validate_requires_an_instance() {
        assert!(Cli::try_parse_from(["jsv", "validate", "s.json"]).is_err());
    }

    #[test]
    fn cli_brief_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["jsv", "--brief", "--quiet", "syntax", "s.json"]).is_err());
    }

    #[test]
    fn cli_quiet_after_subcommand() {
        let cli = Cli::try_parse_from(["jsv", "syntax", "-q", "s.json"]).unwrap();
        assert_eq!(cli.style(), ReportStyle::Quiet);
    }
}

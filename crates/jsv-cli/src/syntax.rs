//! # Syntax Subcommand
//!
//! Checks that each given file is a well-formed schema. The exit code is
//! the worst over all files.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::document::load_document;
use crate::{missing_inputs, Outcome, RetCode, Session};

/// Arguments for `jsv syntax`.
#[derive(Args, Debug)]
pub struct SyntaxArgs {
    /// Schema files to check (JSON, or YAML by extension).
    #[arg(value_name = "SCHEMA", required = true)]
    pub schemas: Vec<PathBuf>,
}

/// Execute the syntax subcommand.
pub fn run_syntax(args: &SyntaxArgs, session: &Session, out: &mut dyn Write) -> Result<u8> {
    if missing_inputs(args.schemas.iter().map(PathBuf::as_path)) > 0 {
        return Ok(RetCode::CmdError.code());
    }

    let mut worst = RetCode::AllOk;
    for path in &args.schemas {
        let schema = load_document(path)?;
        let report = session.validator().validate_schema(&schema);
        let file = path.display().to_string();
        tracing::info!(file = %file, success = report.is_success(), "schema checked");
        let code = session.emit(
            &Outcome::SchemaChecked {
                file: &file,
                report: &report,
            },
            out,
        )?;
        worst = worst.max(code);
    }
    Ok(worst.code())
}

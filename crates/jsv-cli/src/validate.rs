//! # Validate Subcommand
//!
//! Validates instance files against one schema. The schema is syntax-checked
//! first; if it is malformed its report is printed and no instance is
//! looked at.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::document::load_document;
use crate::{missing_inputs, Outcome, RetCode, Session};

/// Arguments for `jsv validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Schema to validate against.
    #[arg(value_name = "SCHEMA")]
    pub schema: PathBuf,

    /// Instance files to validate (JSON, or YAML by extension).
    #[arg(value_name = "INSTANCE", required = true)]
    pub instances: Vec<PathBuf>,
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs, session: &Session, out: &mut dyn Write) -> Result<u8> {
    let inputs = std::iter::once(args.schema.as_path())
        .chain(args.instances.iter().map(PathBuf::as_path));
    if missing_inputs(inputs) > 0 {
        return Ok(RetCode::CmdError.code());
    }

    let validator = session.validator();
    let schema = load_document(&args.schema)?;
    let syntax = validator.validate_schema(&schema);
    if !syntax.is_success() {
        let file = args.schema.display().to_string();
        tracing::warn!(file = %file, "schema has syntax errors; instances not validated");
        let code = session.emit(
            &Outcome::SchemaChecked {
                file: &file,
                report: &syntax,
            },
            out,
        )?;
        return Ok(code.code());
    }

    let mut worst = RetCode::AllOk;
    for path in &args.instances {
        let instance = load_document(path)?;
        let mut report = syntax.clone();
        report.merge(validator.validate_unchecked(&schema, &instance));
        let file = path.display().to_string();
        tracing::info!(file = %file, success = report.is_success(), "instance validated");
        let code = session.emit(
            &Outcome::InstanceChecked {
                file: &file,
                report: &report,
            },
            out,
        )?;
        worst = worst.max(code);
    }
    Ok(worst.code())
}

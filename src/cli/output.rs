//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::{CorrigeArgs, OutputFormat};
use crate::engine::PropositionMap;
use crate::error::Result;
use crate::evaluation::{EvaluationReport, format_correction_line};

/// Result structure for index building.
#[derive(Debug, Serialize, Deserialize)]
pub struct IndexBuildResult {
    pub path: String,
    pub codes: usize,
    pub words: usize,
    pub duration_ms: u64,
}

/// Write propositions, one `word\tc1\tc2...` line per word or one JSON object.
pub fn write_propositions<W: Write>(
    out: &mut W,
    propositions: &PropositionMap,
    args: &CorrigeArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Tsv => {
            for (word, candidates) in propositions {
                writeln!(out, "{}", format_correction_line(word, candidates))?;
            }
        }
        OutputFormat::Json => write_json(out, propositions, args)?,
    }
    Ok(())
}

/// Write an evaluation report: the mean score, or the full report as JSON.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &EvaluationReport,
    args: &CorrigeArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Tsv => {
            if args.verbosity() > 1 {
                for (word, score) in &report.scores {
                    writeln!(out, "{word}\t{score:.4}")?;
                }
            }
            writeln!(out, "{}", report.mean)?;
        }
        OutputFormat::Json => write_json(out, report, args)?,
    }
    Ok(())
}

/// Write a command summary.
pub fn write_result<W: Write, T: Serialize>(
    out: &mut W,
    message: &str,
    result: &T,
    args: &CorrigeArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Tsv => {
            if args.verbosity() > 0 {
                writeln!(out, "{message}")?;
            }
            let value = serde_json::to_value(result)?;
            if let Some(obj) = value.as_object() {
                for (key, value) in obj {
                    writeln!(out, "{key}\t{value}")?;
                }
            }
        }
        OutputFormat::Json => write_json(out, result, args)?,
    }
    Ok(())
}

fn write_json<W: Write, T: Serialize>(out: &mut W, result: &T, args: &CorrigeArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    writeln!(out, "{json}")?;
    Ok(())
}

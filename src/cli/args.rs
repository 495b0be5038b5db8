//! Command line argument parsing for the Corrige CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::distance::{DEFAULT_NGRAM_SIZE, DistanceMetric};
use crate::engine::{DEFAULT_INDEX_NAME, DEFAULT_MAX_PROPOSITION};
use crate::error::Result;
use crate::evaluation::DEFAULT_POWER;
use crate::selector::SelectionMethod;

const DEFAULT_METRIC: &str = "ngram";
const DEFAULT_SELECTION: &str = "exact";

/// Corrige - propose corrections for words missing from a glossary
#[derive(Parser, Debug, Clone)]
#[command(name = "corrige")]
#[command(about = "Propose likely spellings for words missing from a glossary")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct CorrigeArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "tsv")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl CorrigeArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Propose corrections for words read from stdin or a file
    Correct(CorrectArgs),

    /// Score correction output against an evaluation file
    Evaluate(EvaluateArgs),

    /// Build a Soundex index for a glossary and persist it
    #[command(name = "build-index")]
    BuildIndex(BuildIndexArgs),
}

/// Arguments for proposing corrections
#[derive(Parser, Debug, Clone)]
pub struct CorrectArgs {
    /// Glossary file with "<frequency> <word>" lines
    #[arg(value_name = "GLOSSARY")]
    pub glossary: PathBuf,

    /// Read words from this file instead of stdin
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Engine configuration file (JSON); other engine options are ignored
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Distance metric (null, hamming, ngram, levenshtein, soundex, jaro, jaro-winkler)
    #[arg(short, long, default_value = DEFAULT_METRIC)]
    pub metric: String,

    /// N-gram size for the ngram metric
    #[arg(long, default_value_t = DEFAULT_NGRAM_SIZE)]
    pub ngram_size: usize,

    /// Metric applied to Soundex codes instead of plain equality
    #[arg(long, value_name = "METRIC")]
    pub soundex_inner: Option<String>,

    /// Selection method, by name or id (0, 1, 2)
    #[arg(short, long, default_value = DEFAULT_SELECTION)]
    pub selection: String,

    /// Maximum number of propositions per word
    #[arg(short = 'k', long, default_value_t = DEFAULT_MAX_PROPOSITION)]
    pub max_proposition: usize,

    /// Directory holding a persisted Soundex index
    #[arg(long, value_name = "INDEX_DIR")]
    pub index_dir: Option<PathBuf>,

    /// Name of the persisted Soundex index
    #[arg(long, default_value = DEFAULT_INDEX_NAME)]
    pub index_name: String,

    /// Rebuild and save the index if it cannot be loaded
    #[arg(long)]
    pub rebuild_index: bool,
}

impl CorrectArgs {
    /// Resolve the metric named on the command line with its parameters.
    pub fn distance_metric(&self) -> Result<DistanceMetric> {
        let metric = self.resolve_metric(&self.metric)?;
        match (metric, &self.soundex_inner) {
            (DistanceMetric::Soundex { .. }, Some(inner)) => {
                Ok(DistanceMetric::soundex_with(self.resolve_metric(inner)?))
            }
            (metric, _) => Ok(metric),
        }
    }

    fn resolve_metric(&self, name: &str) -> Result<DistanceMetric> {
        match DistanceMetric::parse_str(name)? {
            DistanceMetric::NGram { .. } => Ok(DistanceMetric::NGram {
                n: self.ngram_size,
            }),
            metric => Ok(metric),
        }
    }

    pub fn selection_method(&self) -> Result<SelectionMethod> {
        SelectionMethod::parse_str(&self.selection)
    }

    /// Engine options set away from their defaults. A config file replaces
    /// all of them.
    pub fn overridden_engine_options(&self) -> Vec<&'static str> {
        let mut options = Vec::new();
        if self.metric != DEFAULT_METRIC {
            options.push("--metric");
        }
        if self.ngram_size != DEFAULT_NGRAM_SIZE {
            options.push("--ngram-size");
        }
        if self.soundex_inner.is_some() {
            options.push("--soundex-inner");
        }
        if self.selection != DEFAULT_SELECTION {
            options.push("--selection");
        }
        if self.max_proposition != DEFAULT_MAX_PROPOSITION {
            options.push("--max-proposition");
        }
        options
    }
}

/// Arguments for scoring correction output
#[derive(Parser, Debug, Clone)]
pub struct EvaluateArgs {
    /// Evaluation file with "<word>\t<expected>" lines
    #[arg(value_name = "EVAL_FILE")]
    pub eval_file: PathBuf,

    /// Read correction lines from this file instead of stdin
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Exponent of the rank penalty
    #[arg(short, long, default_value_t = DEFAULT_POWER)]
    pub power: i32,
}

/// Arguments for building a persisted Soundex index
#[derive(Parser, Debug, Clone)]
pub struct BuildIndexArgs {
    /// Glossary file with "<frequency> <word>" lines
    #[arg(value_name = "GLOSSARY")]
    pub glossary: PathBuf,

    /// Directory to store the index in
    #[arg(value_name = "INDEX_DIR")]
    pub index_dir: PathBuf,

    /// Name of the index file
    #[arg(short, long, default_value = DEFAULT_INDEX_NAME)]
    pub name: String,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated lines
    Tsv,
    /// JSON output
    Json,
}

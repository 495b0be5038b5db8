//! Command implementations for the Corrige CLI.

use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::Context;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::engine::{EngineConfig, PropositionEngine, SoundexIndexSource};
use crate::error::Result;
use crate::evaluation::{EvaluationSet, evaluate};
use crate::glossary::Glossary;
use crate::soundex_index::SoundexIndex;
use crate::storage::FileStorage;

/// Execute a CLI command.
pub fn execute_command(args: CorrigeArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match &args.command {
        Command::Correct(correct_args) => correct(correct_args, &args, &mut out)?,
        Command::Evaluate(evaluate_args) => evaluate_propositions(evaluate_args, &args, &mut out)?,
        Command::BuildIndex(build_args) => build_index(build_args, &args, &mut out)?,
    }

    out.flush()?;
    Ok(())
}

/// Read the whole input, from a file if given, else from stdin.
fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => Ok(fs::read_to_string(path)
            .with_context(|| format!("reading input {}", path.display()))?),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("reading input from stdin")?;
            Ok(text)
        }
    }
}

fn load_glossary(path: &Path) -> Result<Glossary> {
    Ok(Glossary::load_from_file(path)
        .with_context(|| format!("loading glossary {}", path.display()))?)
}

/// Build the engine configuration from a config file or the CLI options.
pub fn engine_config(args: &CorrectArgs) -> Result<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let ignored = args.overridden_engine_options();
            if !ignored.is_empty() {
                log::warn!(
                    "--config {} takes precedence, ignoring {}",
                    path.display(),
                    ignored.join(", ")
                );
            }
            EngineConfig::from_json_file(path)
                .with_context(|| format!("loading engine config {}", path.display()))?
        }
        None => EngineConfig::new(args.distance_metric()?)
            .with_selection(args.selection_method()?)
            .with_max_proposition(args.max_proposition),
    };

    if args.index_dir.is_some() {
        let name = args.index_name.clone();
        config.soundex_index = if args.rebuild_index {
            SoundexIndexSource::LoadOrBuild { name }
        } else {
            SoundexIndexSource::Load { name }
        };
    }

    config.validate()?;
    Ok(config)
}

/// Propose corrections for every input word.
pub fn correct<W: Write>(args: &CorrectArgs, cli_args: &CorrigeArgs, out: &mut W) -> Result<()> {
    let glossary = load_glossary(&args.glossary)?;
    let config = engine_config(args)?;
    log::info!(
        "glossary {} ({} words), metric {}, selection {}, k={}",
        args.glossary.display(),
        glossary.len(),
        config.metric.name(),
        config.selection.name(),
        config.max_proposition
    );

    let engine = match &args.index_dir {
        Some(dir) if config.metric.uses_soundex_index() => {
            let storage = FileStorage::new(dir)?;
            PropositionEngine::with_storage(glossary, config, &storage)?
        }
        Some(dir) => {
            log::warn!(
                "metric {} does not use a soundex index, ignoring --index-dir {}",
                config.metric.name(),
                dir.display()
            );
            PropositionEngine::new(glossary, config)?
        }
        None => PropositionEngine::new(glossary, config)?,
    };

    let text = read_input(args.input.as_deref())?;
    let words: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .collect();

    let start_time = Instant::now();
    let propositions = engine.propose_batch(&words);
    log::info!(
        "proposed corrections for {} words in {}ms",
        propositions.len(),
        start_time.elapsed().as_millis()
    );

    write_propositions(out, &propositions, cli_args)
}

/// Score correction output against an evaluation file.
pub fn evaluate_propositions<W: Write>(
    args: &EvaluateArgs,
    cli_args: &CorrigeArgs,
    out: &mut W,
) -> Result<()> {
    let set = EvaluationSet::load_from_file(&args.eval_file)
        .with_context(|| format!("loading evaluation file {}", args.eval_file.display()))?;
    let text = read_input(args.input.as_deref())?;
    let report = evaluate(text.lines(), &set, args.power)?;
    log::info!("scored {} words", report.len());

    write_report(out, &report, cli_args)
}

/// Build and persist a Soundex index.
pub fn build_index<W: Write>(
    args: &BuildIndexArgs,
    cli_args: &CorrigeArgs,
    out: &mut W,
) -> Result<()> {
    let start_time = Instant::now();
    let glossary = load_glossary(&args.glossary)?;
    let storage = FileStorage::new(&args.index_dir)?;

    let index = SoundexIndex::build(&glossary);
    index.save(&storage, &args.name)?;

    write_result(
        out,
        "Index built successfully",
        &IndexBuildResult {
            path: args.index_dir.join(&args.name).display().to_string(),
            codes: index.len(),
            words: index.word_count(),
            duration_ms: start_time.elapsed().as_millis() as u64,
        },
        cli_args,
    )
}

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::organize::{self, Organizer, RunConfig, RunSummary};
use crate::tree::DirTree;

mod cli;
mod logging;
mod settings;

use cli::Cli;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init(cli.debug);

    let settings = settings::load_settings(&cli)?;
    let output = settings::output_dir(&settings)?;
    let config = settings::run_config(&settings, &output);

    tracing::debug!(
        output = %output.display(),
        extensions = ?config.extensions,
        overrides = ?config.overrides,
        "starting"
    );

    let summary = organize_inputs(&cli.inputs, &config, &output)?;
    tracing::info!(
        inputs = cli.inputs.len(),
        copied = summary.copied,
        retagged = summary.retagged,
        "done"
    );

    Ok(())
}

/// Organize each input directory into `output`, one after another.
///
/// The first failing input stops the whole batch; earlier inputs stay
/// organized.
pub fn organize_inputs(
    inputs: &[PathBuf],
    config: &RunConfig,
    output: &Path,
) -> Result<RunSummary, organize::Error> {
    let destination = DirTree::new(output);
    let mut total = RunSummary::default();

    for input in inputs {
        let source = DirTree::new(input);
        let summary = Organizer::new(config, &source, &destination)?.run()?;
        tracing::info!(
            input = %input.display(),
            copied = summary.copied,
            retagged = summary.retagged,
            "organized"
        );
        total.copied += summary.copied;
        total.retagged += summary.retagged;
    }

    Ok(total)
}

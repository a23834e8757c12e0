use anyhow::Result;
use tracing::info_span;

use recipe_cli::pipeline::{PipelineOptions, RunResult, run_pipeline};
use recipe_output::WriteOptions;

use crate::cli::Cli;

pub fn run(cli: &Cli) -> Result<RunResult> {
    let options = PipelineOptions {
        input: cli.input.clone(),
        output: cli.output.clone(),
        write: WriteOptions { pretty: cli.pretty },
    };
    let span = info_span!("run");
    let _guard = span.enter();
    run_pipeline(&options)
}

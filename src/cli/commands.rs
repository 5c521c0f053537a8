//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::path::Path;

use crate::config::GeneratorConfig;
use crate::driver::Generator;
use crate::error::GenError;

use super::{CliError, CliResult, ExitCode};

/// Generate the spec test file at `output` from the default spec tree.
pub fn generate(output: &Path) -> CliResult<ExitCode> {
    let config = GeneratorConfig::default().with_output(output);
    generate_with(config)
}

/// Generate with a fully specified configuration.
pub fn generate_with(config: GeneratorConfig) -> CliResult<ExitCode> {
    Generator::new(config).run().map_err(report)?;
    Ok(ExitCode::SUCCESS)
}

/// Render a generator error through miette's report handler.
fn report(err: GenError) -> CliError {
    CliError::failure(format!("{:?}", miette::Report::new(err)))
}

pub mod cli;
pub mod config;
pub mod output;

use crate::generator::{BindingsGenerator, RunSummary};

pub use cli::*;
pub use config::*;
pub use output::*;

/// Run a full generate pass for the given configuration.
pub fn generate_from_config(config: &config::GenerateConfig) -> Result<RunSummary, ConfigError> {
    config.validate()?;

    let logger = output::Logger::new(config.is_verbose(), false);

    if config.is_verbose() {
        logger.info(&format!(
            "🔍 Scanning for Camel components in: {}",
            config.project_path
        ));
    }

    let mut reporter = output::ProgressReporter::new(logger.clone());
    reporter.start("Generating Spring Boot bindings");

    let summary = BindingsGenerator::with_logger(config.clone(), logger).run();

    if summary.has_failures() {
        let discovered = summary.components + summary.skipped + summary.failures.len();
        reporter.fail(&format!(
            "{} of {} components failed",
            summary.failures.len(),
            discovered
        ));
    } else {
        reporter.finish();
    }

    Ok(summary)
}

//! # Run Command Module / 运行命令模块
//!
//! Wires the pieces together: resolve the configuration, load the manifest,
//! hand the cases to the execution driver, and turn the outcome into a
//! [`RunStatus`].
//!
//! 将各部分连接起来：解析配置、加载清单、把用例交给执行驱动，并将结果转换为 [`RunStatus`]。

use anyhow::Result;
use tracing::debug;

use crate::{
    cli::CliArgs,
    core::{
        config::{ConfigFile, RunConfiguration},
        execution, manifest,
        models::RunStatus,
    },
    reporting::console,
};

/// Executes the run command with the provided arguments.
///
/// # Returns
/// The status of the run. Manifest failures are reported here and come back
/// as [`RunStatus::ManifestError`]; configuration problems are returned as
/// errors.
pub async fn execute(args: CliArgs) -> Result<RunStatus> {
    let config = resolve_configuration(args)?;
    crate::set_language(&config.language);
    debug!(?config, "resolved run configuration");

    let cases = match manifest::load(&config.manifest_path, &config.name_filter, &config.exact_test) {
        Ok(cases) => cases,
        Err(err) => {
            console::print_manifest_error(&err);
            return Ok(RunStatus::ManifestError);
        }
    };

    Ok(execution::run(cases, &config).await)
}

/// Builds the immutable configuration from the command line and the
/// optional defaults file.
pub fn resolve_configuration(args: CliArgs) -> Result<RunConfiguration> {
    let file = ConfigFile::discover(args.config.as_deref())?;
    RunConfiguration::resolve(args.overrides, file, &crate::detect_locale())
}

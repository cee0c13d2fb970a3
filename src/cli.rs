// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{env, ffi::OsString, path::PathBuf};
use tracing_subscriber::EnvFilter;

use crate::{commands, core::config::CliOverrides, core::models::RunStatus, infra::t};

/// Arguments after parsing, ready for the `run` command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub overrides: CliOverrides,
    /// Explicit defaults file given with `--config`.
    pub config: Option<PathBuf>,
    pub verbose: bool,
}

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for `--lang <VALUE>` or `--lang=<VALUE>`. Arguments that are not
/// valid UTF-8 are skipped here and left for clap to report.
fn pre_parse_language() -> Option<String> {
    language_from_args(env::args_os())
}

fn language_from_args<I>(args: I) -> Option<String>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let Some(arg) = arg.to_str() else {
            continue;
        };
        if arg == "--lang" {
            return args.next().and_then(|value| value.into_string().ok());
        }
        if let Some(value) = arg.strip_prefix("--lang=") {
            return Some(value.to_string());
        }
    }
    None
}

pub fn build_cli(locale: &str) -> Command {
    Command::new("romtest-runner")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("xml")
                .long("xml")
                .visible_alias("manifest")
                .help(t!("arg_xml", locale = locale).to_string())
                .value_name("PATH")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("rom-root")
                .long("rom-root")
                .help(t!("arg_rom_root", locale = locale).to_string())
                .value_name("DIR")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("buffer")
                .long("buffer")
                .help(t!("arg_buffer", locale = locale).to_string())
                .value_name("FRAMES")
                .value_parser(clap::value_parser!(u32))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("frames")
                .long("frames")
                .help(t!("arg_frames", locale = locale).to_string())
                .value_name("FRAMES")
                .value_parser(clap::value_parser!(i64))
                .allow_negative_numbers(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("filter")
                .long("filter")
                .help(t!("arg_filter", locale = locale).to_string())
                .value_name("SUBSTRING")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("test")
                .long("test")
                .help(t!("arg_test", locale = locale).to_string())
                .value_name("FILENAME")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("limit")
                .long("limit")
                .help(t!("arg_limit", locale = locale).to_string())
                .value_name("COUNT")
                .value_parser(clap::value_parser!(i64))
                .allow_negative_numbers(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help(t!("arg_dry_run", locale = locale).to_string())
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("build-tool")
                .long("build-tool")
                .help(t!("arg_build_tool", locale = locale).to_string())
                .value_name("COMMAND")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help(t!("arg_config", locale = locale).to_string())
                .value_name("CONFIG")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help(t!("arg_verbose", locale = locale).to_string())
                .action(ArgAction::SetTrue),
        )
}

fn args_from_matches(matches: &ArgMatches) -> CliArgs {
    let string = |id: &str| matches.get_one::<String>(id).cloned();

    CliArgs {
        overrides: CliOverrides {
            manifest: string("xml"),
            rom_root: string("rom-root"),
            buffer: matches.get_one::<u32>("buffer").copied(),
            frames: matches.get_one::<i64>("frames").copied(),
            filter: string("filter"),
            test: string("test"),
            limit: matches.get_one::<i64>("limit").copied(),
            dry_run: matches.get_flag("dry-run"),
            build_tool: string("build-tool"),
            language: string("lang"),
        },
        config: matches.get_one::<PathBuf>("config").cloned(),
        verbose: matches.get_flag("verbose"),
    }
}

/// Parses an explicit argument list (the first item is the program name).
pub fn parse_args_from<I, T>(args: I) -> Result<CliArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = build_cli("en").try_get_matches_from(args)?;
    Ok(args_from_matches(&matches))
}

/// Installs a stderr tracing subscriber when `--verbose` is given or
/// `RUST_LOG` is set. Without either, nothing is logged.
fn install_subscriber(verbose: bool) {
    if !verbose && env::var_os("RUST_LOG").is_none() {
        return;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("romtest_runner=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub async fn run() -> Result<RunStatus> {
    // Pre-parse language and initialize i18n first.
    let language = pre_parse_language().unwrap_or_else(crate::detect_locale);
    let locale = crate::select_locale(&language);
    rust_i18n::set_locale(locale);

    let matches = build_cli(locale).get_matches();
    let args = args_from_matches(&matches);
    install_subscriber(args.verbose);

    commands::run::execute(args).await
}

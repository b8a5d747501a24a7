// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

use crate::infra::t;

/// The options a test binary accepts on its command line. Parsed once at
/// environment creation; the core treats the result as opaque configuration.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub lang: Option<String>,
    pub config: Option<PathBuf>,
    pub html: Option<PathBuf>,
    pub json: Option<PathBuf>,
    pub no_color: bool,
}

/// Pre-parses the command line arguments to find the language setting.
/// This allows the CLI help text to be localized before the full CLI is
/// built. It looks for a `--lang <VALUE>` argument.
fn pre_parse_language(args: &[String]) -> String {
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        if let Some(lang) = args.get(pos + 1) {
            return lang.clone();
        }
    }
    // Fallback to system language detection
    sys_locale::get_locale().unwrap_or_else(|| "en".to_string())
}

fn build_cli(locale: &str) -> Command {
    Command::new("unit-runner")
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
            Arg::new("config")
                .short('c')
                .long("config")
                .help(t!("arg_config", locale = locale).to_string())
                .value_name("CONFIG")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("html")
                .long("html")
                .help(t!("arg_html", locale = locale).to_string())
                .value_name("HTML")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help(t!("arg_json", locale = locale).to_string())
                .value_name("JSON")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help(t!("arg_no_color", locale = locale).to_string())
                .action(ArgAction::SetTrue),
        )
}

/// Parses raw process arguments (the first item is the binary name) into
/// [`RunOptions`]. Errors are returned rather than printed, since the
/// parser runs inside a library constructor.
pub fn parse_args<I>(args: I) -> Result<RunOptions>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    let language = pre_parse_language(&args);
    let matches = build_cli(&language).try_get_matches_from(args)?;

    Ok(RunOptions {
        lang: matches.get_one::<String>("lang").cloned(),
        config: matches.get_one::<PathBuf>("config").cloned(),
        html: matches.get_one::<PathBuf>("html").cloned(),
        json: matches.get_one::<PathBuf>("json").cloned(),
        no_color: matches.get_flag("no-color"),
    })
}

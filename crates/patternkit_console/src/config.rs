use std::env;

use patternkit_core::error::{CoreError, Result};
use patternkit_core::state::switch::SwitchKind;
use tracing::warn;

use crate::error::log_core_error;

pub const DEFAULT_INITIAL: SwitchKind = SwitchKind::Active;

pub struct Config {
    pub initial: SwitchKind,
    pub quiet: bool,
    /// Positional signal tokens; empty means "read stdin".
    pub signals: Vec<String>,
}

impl Config {
    pub fn from_args() -> Self {
        Self::from_args_iter(env::args())
    }

    pub fn from_args_iter<I, S>(iter: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut initial = env::var("PATTERNKIT_INITIAL")
            .ok()
            .and_then(|value| initial_or_log(&value))
            .unwrap_or(DEFAULT_INITIAL);
        let mut quiet = env::var("PATTERNKIT_QUIET")
            .ok()
            .and_then(parse_bool)
            .unwrap_or(false);
        let mut signals = Vec::new();

        let mut args = iter.into_iter();
        let _ = args.next();
        while let Some(arg) = args.next() {
            let arg = arg.as_ref();
            match arg {
                "-h" | "--help" => {
                    print_usage();
                    std::process::exit(0);
                }
                "--initial" => {
                    if let Some(value) = args.next() {
                        if let Some(kind) = initial_or_log(value.as_ref()) {
                            initial = kind;
                        }
                    }
                }
                "-q" | "--quiet" => {
                    quiet = true;
                }
                _ if arg.starts_with("--initial=") => {
                    if let Some(kind) = initial_or_log(&arg["--initial=".len()..]) {
                        initial = kind;
                    }
                }
                _ if arg.starts_with("--") => {
                    warn!("ignoring unknown option {arg}");
                }
                _ => signals.push(arg.to_string()),
            }
        }

        Self {
            initial,
            quiet,
            signals,
        }
    }
}

fn print_usage() {
    println!("patternkit_console [--initial active|inactive] [--quiet] [SIGNAL ...]");
    println!("  SIGNAL: on | off | destroy | <raw id>; read from stdin when omitted");
}

/// Parse an initial switch state: `active` or `inactive`.
///
/// Destroyed is terminal, so it is not accepted as a starting point.
pub fn parse_initial(value: &str) -> Result<SwitchKind> {
    match SwitchKind::from_label(value) {
        Some(SwitchKind::Destroyed) | None => {
            Err(CoreError::invalid_config("initial", value.to_string()))
        }
        Some(kind) => Ok(kind),
    }
}

fn initial_or_log(value: &str) -> Option<SwitchKind> {
    parse_initial(value).map_err(|err| log_core_error(&err)).ok()
}

fn parse_bool(value: String) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

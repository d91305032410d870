use std::io::{self, BufRead};

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use patternkit_console::config::Config;
use patternkit_console::error::log_core_error;
use patternkit_console::session::Session;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = Config::from_args();
    let mut session = Session::start(config.initial).context("start switch session")?;

    if config.signals.is_empty() {
        info!("reading signals from stdin");
        for line in io::stdin().lock().lines() {
            let line = line.context("read signal from stdin")?;
            if line.trim().is_empty() {
                continue;
            }
            step(&mut session, &line, config.quiet)?;
        }
    } else {
        for token in &config.signals {
            step(&mut session, token, config.quiet)?;
        }
    }

    let status = session.status().context("read final status")?;
    println!("{status}");
    Ok(())
}

fn step(session: &mut Session, token: &str, quiet: bool) -> Result<()> {
    if let Err(err) = session.feed(token) {
        log_core_error(&err);
        return Err(err).with_context(|| format!("apply signal {token:?}"));
    }
    if !quiet {
        println!("{}", session.status().context("read status")?);
    }
    Ok(())
}

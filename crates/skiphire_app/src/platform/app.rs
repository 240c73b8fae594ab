use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use log::LevelFilter;
use skiphire_core::{update, AppState, Msg};
use skiphire_logging::{skiphire_info, skiphire_warn};

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::logging;
use super::ui::commands::{self, Command, HELP};
use super::ui::render;

/// How long to wait for input before checking on the engine again.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub fn run_app() -> anyhow::Result<()> {
    let config = AppConfig::load().context("loading configuration")?;
    let level = config.log_level();
    logging::initialize(config.log_destination, level.unwrap_or(LevelFilter::Info));
    if level.is_none() {
        skiphire_warn!("Unknown log level {:?}; using info", config.log_level);
    }
    skiphire_info!("Starting skip-hire wizard against {}", config.base_url);

    let default_location = config
        .default_location()
        .context("default location in configuration")?;
    let runner = EffectRunner::new(config.listing_settings()).context("starting engine")?;

    let (input_tx, input_rx) = mpsc::channel::<Command>();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if input_tx.send(commands::parse(&line)).is_err() {
                break;
            }
        }
    });

    let mut out = io::stdout();
    let mut state = dispatch(AppState::new(default_location), Msg::Mounted, &runner, &mut out)?;
    writeln!(out, "{HELP}")?;

    loop {
        for msg in runner.poll() {
            state = dispatch(state, msg, &runner, &mut out)?;
        }
        match input_rx.recv_timeout(POLL_INTERVAL) {
            Ok(Command::Dispatch(msg)) => state = dispatch(state, msg, &runner, &mut out)?,
            Ok(Command::Help) => writeln!(out, "{HELP}")?,
            Ok(Command::Invalid(reason)) => writeln!(out, "{reason}")?,
            Ok(Command::Empty) => {}
            Ok(Command::Quit) | Err(mpsc::RecvTimeoutError::Disconnected) => break,
            Err(mpsc::RecvTimeoutError::Timeout) => {}
        }
        out.flush()?;
    }

    skiphire_info!("Leaving at step {:?}", state.wizard().current_step());
    Ok(())
}

/// Runs one message through `update`, starts its effects and redraws if needed.
fn dispatch(
    state: AppState,
    msg: Msg,
    runner: &EffectRunner,
    out: &mut impl Write,
) -> io::Result<AppState> {
    let (mut state, effects) = update(state, msg);
    runner.enqueue(effects);
    if state.consume_dirty() {
        write!(out, "{}", render::render(&state.view()))?;
        out.flush()?;
    }
    Ok(state)
}

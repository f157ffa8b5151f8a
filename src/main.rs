//! Terminal runner (default binary).
//!
//! Sets up logging and the terminal, then plays sessions until the player
//! quits. After a crash the game-over banner stays up until `r` or a quit key.

mod cli;

use std::fs::File;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use tui_runner::core::GameConfig;
use tui_runner::engine::{await_restart, run_session, SessionOutcome, ThreadSleeper};
use tui_runner::input::TerminalKeys;
use tui_runner::term::TerminalRenderer;
use tui_runner::types::EndCause;

use cli::{parse_args, USAGE};

/// How often the game-over screen checks for a key.
const RESTART_POLL_MS: u64 = 20;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_args(&args).with_context(|| format!("\n{}", USAGE))?;
    if cli.help {
        println!("{}", USAGE);
        return Ok(());
    }

    init_logging(cli.log_file.as_deref())?;

    let terminal_size = crossterm::terminal::size().unwrap_or((80, 24));
    let env_seed = std::env::var("RUNNER_SEED").ok();
    let config = cli.to_config(terminal_size, env_seed.as_deref(), clock_seed())?;
    // Refuse bad settings before the screen is taken over.
    config.validate().context("cannot start")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = play(&mut term, config);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        log::warn!("terminal restore failed: {:#}", err);
    }

    let (last, best) = result?;
    println!(
        "{} with score {} (best {})",
        match last.cause {
            EndCause::Collision => "crashed",
            EndCause::Quit => "quit",
        },
        last.score,
        best
    );
    Ok(())
}

fn play(term: &mut TerminalRenderer, mut config: GameConfig) -> Result<(SessionOutcome, u32)> {
    let mut keys = TerminalKeys::default();
    let mut best = 0;

    loop {
        let outcome = run_session(config.clone(), &mut keys, &mut *term, ThreadSleeper)?;
        best = best.max(outcome.score);

        if outcome.cause == EndCause::Quit
            || !await_restart(&mut keys, ThreadSleeper, RESTART_POLL_MS)?
        {
            return Ok((outcome, best));
        }

        config.seed = clock_seed() ^ config.seed.rotate_left(7);
        term.invalidate();
    }
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("open log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.try_init().context("init logger")?;
    Ok(())
}

fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    (nanos as u32) ^ ((nanos >> 32) as u32)
}

//! Command-line flags for the runner binary.

use std::path::PathBuf;

use anyhow::{anyhow, Result};

use tui_runner::core::GameConfig;

/// Largest viewport picked automatically from the terminal size.
pub const AUTO_MAX_WIDTH: u16 = 100;
pub const AUTO_MAX_HEIGHT: u16 = 32;

pub const USAGE: &str = "\
usage: tui-runner [--width N] [--height N] [--delay MS] [--seed N] [--log-file PATH]

keys: space/up/w/k jump, r restart after a crash, q/esc/ctrl-c quit
env:  RUNNER_SEED overrides the time-derived seed, RUST_LOG sets the log filter";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub width: Option<u16>,
    pub height: Option<u16>,
    pub delay_ms: Option<u64>,
    pub seed: Option<u32>,
    pub log_file: Option<PathBuf>,
    pub help: bool,
}

pub fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut cli = CliArgs::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--width" => cli.width = Some(parse_value(args, &mut i)?),
            "--height" => cli.height = Some(parse_value(args, &mut i)?),
            "--delay" => cli.delay_ms = Some(parse_value(args, &mut i)?),
            "--seed" => cli.seed = Some(parse_value(args, &mut i)?),
            "--log-file" => {
                let v: String = parse_value(args, &mut i)?;
                cli.log_file = Some(PathBuf::from(v));
            }
            "-h" | "--help" => cli.help = true,
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
        i += 1;
    }
    Ok(cli)
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: &mut usize) -> Result<T> {
    let flag = &args[*i];
    *i += 1;
    let v = args
        .get(*i)
        .ok_or_else(|| anyhow!("missing value for {}", flag))?;
    v.parse()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, v))
}

impl CliArgs {
    /// Build the session config.
    ///
    /// Seed precedence: `--seed`, then `RUNNER_SEED`, then the clock.
    pub fn to_config(
        &self,
        terminal_size: (u16, u16),
        env_seed: Option<&str>,
        clock_seed: u32,
    ) -> Result<GameConfig> {
        let (term_w, term_h) = terminal_size;
        let width = self.width.unwrap_or(term_w.min(AUTO_MAX_WIDTH));
        let height = self.height.unwrap_or(term_h.min(AUTO_MAX_HEIGHT));
        if width > term_w || height > term_h {
            log::warn!(
                "viewport {}x{} exceeds terminal {}x{}; output will wrap",
                width,
                height,
                term_w,
                term_h
            );
        }

        let seed = match (self.seed, env_seed) {
            (Some(seed), _) => seed,
            (None, Some(v)) => v
                .trim()
                .parse()
                .map_err(|_| anyhow!("invalid RUNNER_SEED value: {}", v))?,
            (None, None) => clock_seed,
        };

        let mut config = GameConfig::new(width, height, seed);
        if let Some(delay) = self.delay_ms {
            config = config.with_frame_delay_ms(delay);
        }
        Ok(config)
    }
}

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use marquee::config::MarqueeConfig;
use marquee::ui::runtime;

/// Kinetic text animations for the terminal.
#[derive(Debug, Parser)]
#[command(name = "marquee", version, about)]
struct Cli {
    /// Path to an alternate config file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the tick interval in milliseconds.
    #[arg(long, value_name = "MS")]
    tick_ms: Option<u64>,

    /// Skip animations and render final frames immediately.
    #[arg(long)]
    reduce_motion: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the resolved reveal schedule and scene table as JSON.
    Schedule,
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => MarqueeConfig::load_from(path)?,
        None => MarqueeConfig::load()?,
    };
    if let Some(tick_ms) = cli.tick_ms {
        config.tick_ms = tick_ms;
        config.validate()?;
    }

    match cli.command {
        Some(Command::Schedule) => print_schedule(&config),
        None => runtime::run(config, cli.reduce_motion),
    }
}

/// Log to a file when `MARQUEE_LOG` is set; stdout belongs to the
/// alternate screen.
fn init_logging() -> anyhow::Result<()> {
    let Ok(filter) = std::env::var("MARQUEE_LOG") else {
        return Ok(());
    };
    let file = File::create("marquee.log").context("failed to create marquee.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn print_schedule(config: &MarqueeConfig) -> anyhow::Result<()> {
    use serde::Serialize;

    #[derive(Serialize)]
    struct Item {
        text: String,
        delay_ms: u64,
    }

    #[derive(Serialize)]
    struct Scene {
        index: usize,
        title: String,
        start: f32,
        end: f32,
    }

    #[derive(Serialize)]
    struct Dump {
        headline: Vec<Item>,
        scenes: Vec<Scene>,
    }

    let schedule = config.stagger.headline_schedule();
    let headline = schedule
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| Item {
            text: item.clone(),
            delay_ms: schedule.delay(i).as_millis() as u64,
        })
        .collect();

    let set = config.scenes.scene_set()?;
    let scenes = set
        .ranges()
        .iter()
        .enumerate()
        .map(|(i, range)| Scene {
            index: i,
            title: config.scenes.panels[i].title.clone(),
            start: range.start,
            end: range.end,
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&Dump { headline, scenes })?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn reduce_motion_flag_parses() {
        let cli = Cli::try_parse_from(["marquee", "--reduce-motion"]).unwrap();
        assert!(cli.reduce_motion);
    }

    #[test]
    fn schedule_subcommand_parses() {
        let cli = Cli::try_parse_from(["marquee", "schedule"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Schedule)));
    }
}

//! Pico Platformer headless host
//!
//! Runs the game without a display: inputs come from a tape file (one byte of
//! held buttons per tick), output is a run summary and optionally the final
//! frame as a PPM image.
//!
//! Usage:
//!   pico-platformer --tape run.tape --frame-out last.ppm
//!   RUST_LOG=debug pico-platformer --level two --difficulty easy

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use pico_platformer::renderer::Framebuffer;
use pico_platformer::sim::parse_tape;
use pico_platformer::{Difficulty, Game, GameConfig, LevelLayout, Session};

#[derive(Parser)]
#[command(name = "pico-platformer")]
#[command(about = "Run the platformer headless from an input tape")]
struct Args {
    /// Built-in level (`one`, `two`) or a path to a JSON layout
    #[arg(long, default_value = "one")]
    level: String,

    /// Physics preset applied on top of the config
    #[arg(long)]
    difficulty: Option<String>,

    /// JSON config file (missing fields use defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Input tape; without one the game idles until the tick limit
    #[arg(long)]
    tape: Option<PathBuf>,

    /// Override the auto-exit tick limit
    #[arg(long, conflicts_with = "no_max_ticks")]
    max_ticks: Option<u64>,

    /// Disable the auto-exit tick limit
    #[arg(long)]
    no_max_ticks: bool,

    /// Write the final frame as a binary PPM
    #[arg(long)]
    frame_out: Option<PathBuf>,

    /// Print the effective config as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

fn build_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path),
        None => GameConfig::default(),
    };

    if let Some(name) = &args.difficulty {
        let Some(difficulty) = Difficulty::from_str(name) else {
            bail!("unknown difficulty '{name}' (expected easy, normal or hard)");
        };
        log::info!("Difficulty: {}", difficulty.as_str());
        config.apply_difficulty(difficulty);
    }

    if args.no_max_ticks {
        config.max_ticks = None;
    } else if let Some(max) = args.max_ticks {
        config.max_ticks = Some(max);
    }

    Ok(config)
}

fn load_layout(level: &str) -> Result<LevelLayout> {
    if let Some(layout) = LevelLayout::builtin(level) {
        return Ok(layout);
    }
    LevelLayout::load(level).with_context(|| format!("failed to load level '{level}'"))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = build_config(&args)?;
    if args.dump_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let layout = load_layout(&args.level)?;
    let (width, height) = (config.screen_width as usize, config.screen_height as usize);
    let game = Game::from_layout(config, &layout)?;
    let mut session = Session::new(game);

    let summary = match &args.tape {
        Some(path) => {
            let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
            let tape = parse_tape(&bytes).with_context(|| format!("bad tape {}", path.display()))?;
            log::info!("Loaded tape: {} ticks", tape.len());
            session.run_tape(&tape)
        }
        None => match session.run_idle() {
            Some(summary) => summary,
            None => bail!("no tape and no tick limit: nothing would ever stop the run"),
        },
    };

    if let Some(path) = &args.frame_out {
        let mut frame = Framebuffer::new(width, height);
        session.render(&mut frame);
        let file = fs::File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
        frame.write_ppm(std::io::BufWriter::new(file))?;
        for line in frame.text() {
            println!("[frame text @ {},{}] {}", line.x, line.y, line.text);
        }
    }

    println!("=== RUN SUMMARY ===");
    println!("  Level:      {}", summary.level);
    println!("  Ticks:      {}", summary.ticks);
    println!("  Score:      {}", summary.score);
    println!("  Collected:  {}", summary.collected);
    println!("  Phase:      {:?}", summary.phase);
    match summary.completed_at {
        Some(tick) => println!("  Completed:  tick {tick}"),
        None => println!("  Completed:  no"),
    }
    println!("  Restarts:   {}", summary.restarts);
    if summary.hit_tick_limit {
        println!("  (stopped by tick limit)");
    }

    Ok(())
}

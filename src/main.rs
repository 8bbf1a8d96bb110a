mod app;
mod confetti;
mod config;
mod message;
mod terminal;

use clap::Parser;
use config::AppConfig;
use std::io;

#[derive(Parser)]
#[command(name = "termfetti")]
#[command(author = "Terminal Art Generator")]
#[command(version = "0.1.0")]
#[command(about = "Terminal celebration effect: deployment success banner with confetti", long_about = None)]
struct Cli {
    /// Animation speed (seconds per frame)
    #[arg(short, long, default_value = "0.03")]
    time: f32,

    /// Random seed for reproducibility
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig {
        time_step: cli.time,
        seed: cli.seed,
    };
    app::run(config)
}

//! typeanim binary entry point.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use commands::play::PlayArgs;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so stdout only carries animation output.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("warn,typeanim={}", level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    if cli.list_colors {
        return commands::list::handle_colors();
    }

    if cli.list_speeds {
        return commands::list::handle_speeds();
    }

    if let Some(shell) = cli.completions {
        commands::completions::handle(shell);
        return Ok(());
    }

    commands::play::handle_play(PlayArgs {
        text: cli.text,
        speed: cli.speed,
        mode: cli.mode,
        no_delay: cli.no_delay,
        plain: cli.plain,
    })
}

mod cli;
mod config;
mod solve;

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("slidealign=info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    match cli.command {
        cli::Command::Solve {
            foreground,
            background,
            offset,
            output,
            config,
            json,
            tuning,
        } => {
            let search = config::resolve(config.as_deref(), &tuning)?;
            let args = solve::SolveArgs {
                foreground,
                background,
                offset,
                output,
                json,
            };
            solve::solve(args, search)?;
        }
    }

    Ok(())
}

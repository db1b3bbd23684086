mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so JSON on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Summarize { day, out, history } => {
            commands::summarize::run(&day, out.as_deref(), history.as_deref())
        }
        Commands::Report { day } => commands::report::run(&day),
        Commands::History { path, stats, limit } => commands::history::run(&path, stats, limit),
        Commands::Version => commands::version::run(),
    }
}

mod config;
mod menu;

use anyhow::Context;
use clap::Parser;
use listkeeper_core::utils::Terminal;
use tracing::info;

use config::Cli;
use menu::Menu;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Prompts own stdout, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut terminal = Terminal::stdio();
    if let Some(title) = cli.header() {
        terminal.header(title).context("failed to print the banner")?;
    }

    let mut menu = Menu::new()?;
    menu.run(&mut terminal).context("menu session ended before quitting")?;

    info!(items = menu.items().len(), "session finished");
    Ok(())
}

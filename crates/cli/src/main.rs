use clap::Parser;

mod cli;
mod commands;

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();
    let cli = cli::Cli::parse();
    commands::run_command(cli)
}

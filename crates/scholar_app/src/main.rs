mod cli;
mod site;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    site::run(cli)
}

#![forbid(unsafe_code)]
#![allow(unreachable_pub)]

use clap::{Parser, Subcommand};

mod check;
mod plan;
mod total;

#[derive(Parser, Debug)]
#[command(name = "tsender")]
#[command(about = "Batch ERC-20 transfer preparation tools", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Total(total::Cli),
    Check(check::Cli),
    Plan(plan::Cli),
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Total(args) => total::run(args)?,
        Commands::Check(args) => check::run(args)?,
        Commands::Plan(args) => plan::run(&args)?,
    }

    Ok(())
}

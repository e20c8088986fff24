use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use tsender::{aggregate, read_text_input};

#[derive(Parser, Debug)]
#[command(name = "total")]
#[command(about = "Sum the valid amounts in an amounts list", long_about = None)]
pub struct Cli {
    /// Input file containing amounts (comma or newline separated), or "-" for stdin
    #[arg(short, long)]
    input: PathBuf,
}

pub fn run(args: Cli) -> Result<()> {
    let raw = read_text_input(&args.input)?;
    log::debug!("read {} bytes of amounts input", raw.len());

    let result = aggregate(&raw);

    println!("Valid amounts: {}", result.count);
    println!("Total: {}", result.total);

    Ok(())
}

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use tsender::{aggregate, parse_recipients, read_text_input, resolve_recipients};

#[derive(Parser, Debug)]
#[command(name = "check")]
#[command(about = "Validate recipient and amount lists before submission", long_about = None)]
pub struct Cli {
    /// Input file containing recipient addresses (comma or newline separated), or "-" for stdin
    #[arg(short, long)]
    recipients: PathBuf,

    /// Input file containing amounts (comma or newline separated), or "-" for stdin
    #[arg(short, long)]
    amounts: PathBuf,
}

pub fn run(args: Cli) -> Result<()> {
    let recipients_raw = read_text_input(&args.recipients)?;
    let amounts_raw = read_text_input(&args.amounts)?;

    let recipients = parse_recipients(&recipients_raw);
    let result = aggregate(&amounts_raw);

    println!("{} recipient(s) detected", recipients.len());
    println!("{} amount(s) specified", result.count);

    resolve_recipients(&recipients_raw)?;

    if recipients.is_empty() {
        anyhow::bail!("No recipients entered");
    }
    if result.count != recipients.len() {
        anyhow::bail!(
            "Recipient/amount mismatch: {} recipient(s) but {} valid amount(s)",
            recipients.len(),
            result.count
        );
    }

    println!("Total: {}", result.total);
    println!("OK");

    Ok(())
}

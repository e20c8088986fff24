use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;

use tsender::{
    checksum_address, parse_address, parse_amounts, read_text_input, resolve_recipients,
    write_file_atomic,
};

#[derive(Parser, Debug)]
#[command(name = "plan")]
#[command(about = "Prepare a batch transfer plan for submission", long_about = None)]
pub struct Cli {
    /// ERC-20 token contract address (with or without 0x prefix)
    #[arg(short, long)]
    token: String,

    /// Input file containing recipient addresses, or "-" for stdin
    #[arg(short, long)]
    recipients: PathBuf,

    /// Input file containing amounts, or "-" for stdin
    #[arg(short, long)]
    amounts: PathBuf,

    /// Output JSON file for the transfer plan
    #[arg(short, long)]
    output: PathBuf,

    /// Submission mode recorded in the plan
    #[arg(short, long, value_enum, default_value = "safe")]
    mode: Mode,
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Each transfer is executed individually
    Safe,
    /// All transfers are batched in a single call
    Unsafe,
}

#[derive(Debug, Serialize)]
struct TransferPlan {
    token: String,
    mode: Mode,
    recipients: Vec<String>,
    amounts: Vec<f64>,
    total: f64,
    count: usize,
}

fn build_plan(
    token: &str,
    recipients_raw: &str,
    amounts_raw: &str,
    mode: Mode,
) -> Result<TransferPlan> {
    let token = parse_address(token).context("Invalid token address")?;
    let recipients = resolve_recipients(recipients_raw)?;
    let amounts = parse_amounts(amounts_raw);

    if recipients.is_empty() {
        anyhow::bail!("No recipients entered");
    }
    if amounts.len() != recipients.len() {
        anyhow::bail!(
            "Recipient/amount mismatch: {} recipient(s) but {} valid amount(s)",
            recipients.len(),
            amounts.len()
        );
    }

    let total = amounts.iter().sum();
    let count = amounts.len();

    Ok(TransferPlan {
        token: checksum_address(&token),
        mode,
        recipients: recipients.iter().map(checksum_address).collect(),
        amounts,
        total,
        count,
    })
}

pub fn run(args: &Cli) -> Result<()> {
    println!("Reading recipients from {:?}...", args.recipients);
    let recipients_raw = read_text_input(&args.recipients)?;

    println!("Reading amounts from {:?}...", args.amounts);
    let amounts_raw = read_text_input(&args.amounts)?;

    let plan = build_plan(&args.token, &recipients_raw, &amounts_raw, args.mode)?;
    log::info!("planned {} transfer(s) totalling {}", plan.count, plan.total);

    println!("Writing transfer plan to {:?}...", args.output);
    let json_output = serde_json::to_string_pretty(&plan).context("Failed to serialize plan")?;
    write_file_atomic(&args.output, &json_output).context("Failed to write plan file")?;

    println!("\nTransfer plan generated successfully!");
    println!("Token: {}", plan.token);
    println!("Recipients: {}", plan.count);
    println!("Total: {}", plan.total);

    Ok(())
}

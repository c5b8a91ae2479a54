use anyhow::Context;
use clap::Parser;
use electrolyte_normalizer::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();
    let input = args.command.input().clone();

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime
        .block_on(commands::run(args))
        .with_context(|| format!("Failed to process {}", input.display()));

    if let Err(error) = result {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}

// src/main.rs
use anyhow::Result;
use clap::Parser as _;
use std::io;
use xlsx_replace::{Args, run, telemetry};

fn main() -> Result<()> {
    let args = Args::parse();
    telemetry::initialise()?;

    run(&args, io::stdin().lock(), io::stdout())?;
    Ok(())
}

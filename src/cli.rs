use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(name = "snmprec")]
#[command(about = "Poll a remote device for SNMP v2c data and record it as timestamped CSV lines")]
pub struct Cli {
    /// Settings file (default is $HOME/.snmprec.json)
    #[arg(short, long, global = true)]
    pub settings: Option<PathBuf>,

    /// Remote host to query
    #[arg(short, long, global = true)]
    pub ip: Option<String>,

    /// Community string for the remote host
    #[arg(short, long, global = true)]
    pub community: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scheduled polling runs
    #[command(subcommand)]
    Cron(CronCommands),
}

#[derive(Subcommand)]
pub enum CronCommands {
    /// Execute the daily polling run; schedule with @daily or "0 0 * * *"
    Day,
}

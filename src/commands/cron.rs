use chrono::Utc;
use tracing::{debug, info};

use crate::cli::{Cli, CronCommands};
use crate::config::Config;
use crate::error::Result;
use crate::line::format_line;
use crate::output::{OutputSink, Sink};
use crate::rows::aligned_rows;
use crate::snmp::{is_sys_name, SnmpClient, Transport, Variable};

/// GETBULK page size, for bounded bulk queries and walk pages alike.
const MAX_REPETITIONS: u32 = 100;

pub fn handle_cron_command(cmd: &CronCommands, cli: &Cli) -> Result<()> {
    match cmd {
        CronCommands::Day => run_day(cli),
    }
}

/// One daily run: settings, sink, and session first, then the query phases.
fn run_day(cli: &Cli) -> Result<()> {
    let mut config = Config::load(cli.settings.as_deref())?;
    if let Some(ip) = &cli.ip {
        config.ip = ip.clone();
    }
    if let Some(community) = &cli.community {
        config.community = community.clone();
    }

    let selection = config.sink()?;
    let mut client = SnmpClient::connect(&config.ip, config.community.as_bytes())?;
    let mut sink = OutputSink::open(&selection)?;

    poll_day(&mut client, &config, &mut sink)
}

/// Single fetches, then bounded bulk fetches, then subtree walks aligned
/// into rows. Transport and sink errors in the first two phases abort the
/// run; a walk degrades to a partial sequence instead.
fn poll_day(client: &mut dyn Transport, config: &Config, sink: &mut dyn Sink) -> Result<()> {
    // Hostname is learned from sysName.0 on the way through the single
    // fetches and attached to every later line; never re-queried.
    let mut hostname: Option<String> = None;

    for oid in &config.cron.day.get {
        let variable = client.get_one(oid)?;
        let line = format_line(Utc::now(), &config.ip, hostname.as_deref(), &[&variable]);
        sink.append(&line)?;

        if hostname.is_none() && is_sys_name(oid) {
            hostname = Some(variable.value.to_string());
        }
    }

    for oid in &config.cron.day.getbulk {
        let variables = client.get_bulk(oid, MAX_REPETITIONS)?;
        let fields: Vec<&Variable> = variables.iter().collect();
        let line = format_line(Utc::now(), &config.ip, hostname.as_deref(), &fields);
        sink.append(&line)?;
    }

    let mut walks: Vec<(String, Vec<Variable>)> = Vec::new();
    for oid in &config.cron.day.bulkwalk {
        let sequence = client.walk_subtree(oid, MAX_REPETITIONS);
        debug!(oid = %oid, entries = sequence.len(), "walk finished");
        walks.push((oid.clone(), sequence));
    }

    for row in aligned_rows(&walks) {
        let line = format_line(Utc::now(), &config.ip, hostname.as_deref(), &row);
        sink.append(&line)?;
    }

    info!(host = %config.ip, "daily run complete");
    Ok(())
}

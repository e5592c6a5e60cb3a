use std::fs::{File, OpenOptions};
use std::io::Write;

use syslog::{Facility, Formatter3164, LoggerBackend};

use crate::config::SinkSelection;
use crate::error::{Error, Result};

/// Process tag attached to every syslog record.
const SYSLOG_TAG: &str = "snmprec";

/// Append-only, exactly-once line writer capability.
pub trait Sink {
    fn append(&mut self, line: &str) -> Result<()>;
}

/// Destination for result lines, selected once per run. Every append is one
/// synchronous commit; nothing is buffered, so a line either made it out or
/// the run aborts.
pub enum OutputSink {
    Stdout,
    File(File),
    Syslog(syslog::Logger<LoggerBackend, Formatter3164>),
}

impl OutputSink {
    /// Open the configured backend. File and syslog failures here are fatal.
    pub fn open(selection: &SinkSelection) -> Result<Self> {
        match selection {
            SinkSelection::Stdout => Ok(OutputSink::Stdout),
            SinkSelection::File(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| Error::Write(format!("cannot open {}: {}", path.display(), e)))?;
                Ok(OutputSink::File(file))
            }
            SinkSelection::Syslog => {
                let formatter = Formatter3164 {
                    facility: Facility::LOG_USER,
                    hostname: None,
                    process: SYSLOG_TAG.into(),
                    pid: 0,
                };
                let logger = syslog::unix(formatter)
                    .map_err(|e| Error::Write(format!("cannot open syslog: {}", e)))?;
                Ok(OutputSink::Syslog(logger))
            }
        }
    }
}

impl Sink for OutputSink {
    /// Commit one line. `line` arrives newline-terminated from the formatter.
    fn append(&mut self, line: &str) -> Result<()> {
        match self {
            OutputSink::Stdout => {
                print!("{}", line);
                Ok(())
            }
            OutputSink::File(file) => file
                .write_all(line.as_bytes())
                .map_err(|e| Error::Write(format!("file write failed: {}", e))),
            OutputSink::Syslog(logger) => logger
                .info(line.trim_end_matches('\n'))
                .map_err(|e| Error::Write(format!("syslog write failed: {}", e))),
        }
    }
}

pub fn print_error(message: &str) {
    eprintln!("\x1b[31m❌ Error: {}\x1b[0m", message);
}

use chrono::{DateTime, SecondsFormat, Utc};

use crate::snmp::Variable;

/// Render one row: `timestamp,address[,hostname](,identifier,value)*` plus a
/// trailing newline. The hostname field is omitted entirely while unknown,
/// not left empty. Values pass through the scalar rendering rule unescaped;
/// a value containing a comma will shift the columns of that line.
pub fn format_line(
    timestamp: DateTime<Utc>,
    target: &str,
    hostname: Option<&str>,
    fields: &[&Variable],
) -> String {
    let mut line = timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true);
    line.push(',');
    line.push_str(target);

    if let Some(hostname) = hostname {
        line.push(',');
        line.push_str(hostname);
    }

    for field in fields {
        line.push(',');
        line.push_str(&field.name);
        line.push(',');
        line.push_str(&field.value.to_string());
    }

    line.push('\n');
    line
}

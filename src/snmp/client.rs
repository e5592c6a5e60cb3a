use std::time::Duration;

use snmp2::{SyncSession, Value};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::snmp::oid::parse_oid;
use crate::snmp::value::{ScalarValue, Variable};
use crate::snmp::Transport;

const SNMP_PORT: u16 = 161;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Blocking SNMP v2c session against a single target, held for the whole run.
pub struct SnmpClient {
    session: SyncSession,
}

impl SnmpClient {
    /// Open a session against `target`, appending the default port when the
    /// address does not carry one.
    pub fn connect(target: &str, community: &[u8]) -> Result<Self> {
        let addr = if target.contains(':') {
            target.to_string()
        } else {
            format!("{}:{}", target, SNMP_PORT)
        };

        let session = SyncSession::new_v2c(addr.as_str(), community, Some(REQUEST_TIMEOUT), 0)
            .map_err(|e| Error::Transport(format!("cannot open session to {}: {}", addr, e)))?;

        Ok(Self { session })
    }
}

impl Transport for SnmpClient {
    fn get_one(&mut self, oid: &str) -> Result<Variable> {
        let parsed = parse_oid(oid)?;
        debug!(oid = %oid, "get");

        let pdu = self
            .session
            .get(&parsed)
            .map_err(|e| Error::Transport(format!("get {} failed: {}", oid, e)))?;

        let (name, value) = pdu
            .varbinds
            .into_iter()
            .next()
            .ok_or_else(|| Error::Transport(format!("get {}: empty response", oid)))?;

        if matches!(
            value,
            Value::NoSuchObject | Value::NoSuchInstance | Value::EndOfMibView
        ) {
            return Err(Error::Transport(format!("get {}: no such object", oid)));
        }

        Ok(Variable::new(name.to_string(), ScalarValue::from(&value)))
    }

    fn get_bulk(&mut self, oid: &str, max_repetitions: u32) -> Result<Vec<Variable>> {
        let parsed = parse_oid(oid)?;
        debug!(oid = %oid, max_repetitions, "getbulk");

        let pdu = self
            .session
            .getbulk(&[&parsed], 0, max_repetitions)
            .map_err(|e| Error::Transport(format!("getbulk {} failed: {}", oid, e)))?;

        let mut variables = Vec::new();
        for (name, value) in pdu.varbinds {
            if matches!(value, Value::EndOfMibView) {
                break;
            }
            variables.push(Variable::new(name.to_string(), ScalarValue::from(&value)));
        }

        Ok(variables)
    }

    fn walk_subtree(&mut self, root: &str, max_repetitions: u32) -> Vec<Variable> {
        let root_oid = match parse_oid(root) {
            Ok(oid) => oid,
            Err(e) => {
                warn!(oid = %root, error = %e, "walk skipped");
                return Vec::new();
            }
        };

        let mut variables = Vec::new();
        let mut current = root_oid.clone();

        loop {
            let pdu = match self.session.getbulk(&[&current], 0, max_repetitions) {
                Ok(pdu) => pdu,
                Err(e) => {
                    warn!(oid = %root, error = %e, "walk page failed, keeping partial result");
                    return variables;
                }
            };

            let mut page_end = None;
            for (name, value) in pdu.varbinds {
                if !name.starts_with(&root_oid) || matches!(value, Value::EndOfMibView) {
                    return variables;
                }
                variables.push(Variable::new(name.to_string(), ScalarValue::from(&value)));
                page_end = Some(name.to_owned());
            }

            match page_end {
                Some(next) if next != current => current = next,
                Some(_) => {
                    // An agent answering the same OID twice would page forever.
                    warn!(oid = %root, "response OID not increasing, stopping walk");
                    return variables;
                }
                None => return variables,
            }
        }
    }
}

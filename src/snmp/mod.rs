// SNMP v2c transport modules
pub mod client;
pub mod oid;
pub mod value;

pub use client::SnmpClient;
pub use oid::{is_sys_name, parse_oid};
pub use value::{ScalarValue, Variable};

use crate::error::Result;

/// The three query operations a polling run needs from the wire client.
pub trait Transport {
    /// Fetch the single variable addressed by `oid`.
    fn get_one(&mut self, oid: &str) -> Result<Variable>;

    /// Fetch up to `max_repetitions` successors of `oid` in one request.
    fn get_bulk(&mut self, oid: &str, max_repetitions: u32) -> Result<Vec<Variable>>;

    /// Enumerate every variable below `root`. Never fails: errors end the
    /// walk early and whatever was gathered so far is returned.
    fn walk_subtree(&mut self, root: &str, max_repetitions: u32) -> Vec<Variable>;
}

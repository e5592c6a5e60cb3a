use snmp2::Oid;

use crate::error::{Error, Result};

/// sysName.0 — the well-known identifier whose value names the device.
pub const SYS_NAME_OID: &str = "1.3.6.1.2.1.1.5.0";

/// Parse a dotted-decimal OID string into an owned `Oid`. A leading dot is
/// accepted; many tools print identifiers with one.
pub fn parse_oid(s: &str) -> Result<Oid<'static>> {
    let parts: std::result::Result<Vec<u64>, _> = s
        .trim()
        .trim_start_matches('.')
        .split('.')
        .filter(|p| !p.is_empty())
        .map(|p| p.parse::<u64>())
        .collect();

    let parts = parts.map_err(|_| Error::Config(format!("invalid OID: {}", s)))?;
    if parts.is_empty() {
        return Err(Error::Config(format!("invalid OID: {}", s)));
    }

    Oid::from(&parts).map_err(|e| Error::Config(format!("invalid OID {}: {:?}", s, e)))
}

/// True when `s` addresses sysName.0, whatever the dot style.
pub fn is_sys_name(s: &str) -> bool {
    s.trim().trim_start_matches('.') == SYS_NAME_OID
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dotted_oid() {
        let oid = parse_oid("1.3.6.1.2.1.1.5.0").unwrap();
        assert_eq!(oid.to_string(), "1.3.6.1.2.1.1.5.0");
    }

    #[test]
    fn accepts_leading_dot() {
        assert!(parse_oid(".1.3.6.1.2.1.1.5.0").is_ok());
    }

    #[test]
    fn rejects_junk() {
        assert!(parse_oid("interfaces").is_err());
        assert!(parse_oid("").is_err());
        assert!(parse_oid("1.3.six.1").is_err());
    }

    #[test]
    fn subtree_prefix_matches() {
        let root = parse_oid("1.3.6.1.2.1.2.2.1.10").unwrap();
        let child = parse_oid("1.3.6.1.2.1.2.2.1.10.1").unwrap();
        let sibling = parse_oid("1.3.6.1.2.1.2.2.1.16.1").unwrap();

        assert!(child.starts_with(&root));
        assert!(!sibling.starts_with(&root));
    }

    #[test]
    fn detects_sys_name() {
        assert!(is_sys_name("1.3.6.1.2.1.1.5.0"));
        assert!(is_sys_name(".1.3.6.1.2.1.1.5.0"));
        assert!(!is_sys_name("1.3.6.1.2.1.1.1.0"));
    }
}

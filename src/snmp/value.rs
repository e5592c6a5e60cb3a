use std::fmt;

use snmp2::Value;

/// Dynamically-typed scalar returned by the protocol, reduced to a closed
/// set of owned shapes so rendering stays total.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    Int(i64),
    Uint(u64),
    Text(String),
    Bool(bool),
    /// Anything without a natural scalar shape, kept in textual form
    Other(String),
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Int(v) => write!(f, "{}", v),
            ScalarValue::Uint(v) => write!(f, "{}", v),
            ScalarValue::Text(v) => write!(f, "{}", v),
            ScalarValue::Bool(v) => write!(f, "{}", v),
            ScalarValue::Other(v) => write!(f, "{}", v),
        }
    }
}

impl From<&Value<'_>> for ScalarValue {
    fn from(value: &Value<'_>) -> Self {
        match value {
            Value::Integer(n) => ScalarValue::Int(*n),
            Value::Counter32(n) | Value::Unsigned32(n) | Value::Timeticks(n) => {
                ScalarValue::Uint(u64::from(*n))
            }
            Value::Counter64(n) => ScalarValue::Uint(*n),
            Value::OctetString(bytes) => {
                ScalarValue::Text(String::from_utf8_lossy(bytes).into_owned())
            }
            Value::IpAddress(octets) => ScalarValue::Text(format!(
                "{}.{}.{}.{}",
                octets[0], octets[1], octets[2], octets[3]
            )),
            Value::Boolean(b) => ScalarValue::Bool(*b),
            Value::ObjectIdentifier(oid) => ScalarValue::Other(oid.to_string()),
            Value::Null => ScalarValue::Other("null".to_string()),
            Value::NoSuchObject => ScalarValue::Other("noSuchObject".to_string()),
            Value::NoSuchInstance => ScalarValue::Other("noSuchInstance".to_string()),
            Value::EndOfMibView => ScalarValue::Other("endOfMibView".to_string()),
            other => ScalarValue::Other(format!("{:?}", other)),
        }
    }
}

/// One (identifier, value) pair returned by a query.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    pub value: ScalarValue,
}

impl Variable {
    pub fn new(name: impl Into<String>, value: ScalarValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_numbers_as_decimal() {
        assert_eq!(ScalarValue::Int(-42).to_string(), "-42");
        assert_eq!(ScalarValue::Uint(1553).to_string(), "1553");
    }

    #[test]
    fn renders_text_verbatim() {
        assert_eq!(ScalarValue::Text("eth0".into()).to_string(), "eth0");
    }

    #[test]
    fn renders_booleans_and_others() {
        assert_eq!(ScalarValue::Bool(true).to_string(), "true");
        assert_eq!(ScalarValue::Other("null".into()).to_string(), "null");
    }

    #[test]
    fn converts_protocol_values() {
        assert_eq!(ScalarValue::from(&Value::Integer(-3)), ScalarValue::Int(-3));
        assert_eq!(
            ScalarValue::from(&Value::Counter32(10)),
            ScalarValue::Uint(10)
        );
        assert_eq!(
            ScalarValue::from(&Value::Counter64(u64::MAX)),
            ScalarValue::Uint(u64::MAX)
        );
        assert_eq!(
            ScalarValue::from(&Value::OctetString(b"core-sw")),
            ScalarValue::Text("core-sw".into())
        );
        assert_eq!(
            ScalarValue::from(&Value::IpAddress([192, 0, 2, 7])),
            ScalarValue::Text("192.0.2.7".into())
        );
        assert_eq!(
            ScalarValue::from(&Value::Null),
            ScalarValue::Other("null".into())
        );
    }
}

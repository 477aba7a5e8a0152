use std::fmt;
use std::io;

/// Reasons the opcode dataset can be rejected. Every variant names the
/// collection and key it came from so a bad dataset can be fixed without
/// extra instrumentation.
#[derive(Debug)]
pub enum TableError {
    Io(io::Error),
    /// The document itself is not valid JSON or lacks a collection.
    Json(serde_json::Error),
    /// An entry exists but its fields do not have the expected types.
    InvalidEntry {
        table: &'static str,
        key: String,
        source: serde_json::Error,
    },
    InvalidKey {
        table: &'static str,
        key: String,
    },
    DuplicateOpcode {
        table: &'static str,
        key: String,
    },
    InvalidCycles {
        table: &'static str,
        key: String,
        cycles: Vec<u8>,
    },
    InvalidLength {
        table: &'static str,
        key: String,
        bytes: u8,
    },
    InvalidFlag {
        table: &'static str,
        key: String,
        flag: String,
        value: String,
    },
    /// The declared length disagrees with what the bound family consumes.
    LengthMismatch {
        table: &'static str,
        key: String,
        declared: u8,
        expected: u8,
    },
    /// A conditional branch must declare both a taken and a not-taken cost.
    MissingBranchCycles {
        table: &'static str,
        key: String,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Io(err) => write!(f, "I/O error: {}", err),
            TableError::Json(err) => write!(f, "Invalid opcode JSON: {}", err),
            TableError::InvalidEntry { table, key, source } => {
                write!(f, "{}[{}]: malformed entry: {}", table, key, source)
            }
            TableError::InvalidKey { table, key } => write!(
                f,
                "{}[{}]: key is not a '0x' prefixed two digit hex opcode",
                table, key
            ),
            TableError::DuplicateOpcode { table, key } => {
                write!(f, "{}[{}]: opcode is declared more than once", table, key)
            }
            TableError::InvalidCycles { table, key, cycles } => write!(
                f,
                "{}[{}]: expected one or two non-zero cycle costs, found {:?}",
                table, key, cycles
            ),
            TableError::InvalidLength { table, key, bytes } => {
                write!(f, "{}[{}]: invalid byte length {}", table, key, bytes)
            }
            TableError::InvalidFlag {
                table,
                key,
                flag,
                value,
            } => write!(
                f,
                "{}[{}]: invalid flag hint {}='{}'",
                table, key, flag, value
            ),
            TableError::LengthMismatch {
                table,
                key,
                declared,
                expected,
            } => write!(
                f,
                "{}[{}]: declares {} bytes but its operands need {}",
                table, key, declared, expected
            ),
            TableError::MissingBranchCycles { table, key } => write!(
                f,
                "{}[{}]: conditional instruction needs taken and not-taken cycle costs",
                table, key
            ),
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TableError::Io(err) => Some(err),
            TableError::Json(err) => Some(err),
            TableError::InvalidEntry { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for TableError {
    fn from(err: io::Error) -> Self {
        TableError::Io(err)
    }
}

impl From<serde_json::Error> for TableError {
    fn from(err: serde_json::Error) -> Self {
        TableError::Json(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_key() {
        let err = TableError::InvalidKey {
            table: "unprefixed",
            key: "3E".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unprefixed[3E]: key is not a '0x' prefixed two digit hex opcode"
        );
    }

    #[test]
    fn test_display_length_mismatch() {
        let err = TableError::LengthMismatch {
            table: "cbprefixed",
            key: "0x46".to_string(),
            declared: 1,
            expected: 2,
        };
        assert_eq!(
            err.to_string(),
            "cbprefixed[0x46]: declares 1 bytes but its operands need 2"
        );
    }

    #[test]
    fn test_display_io_error() {
        let io_err = io::Error::new(io::ErrorKind::Other, "oh no");
        let err = TableError::from(io_err);
        assert!(err.to_string().contains("I/O error: oh no"));
    }
}

//! Error types for registry lookups.

use std::fmt;

use crate::types::PacketType;
use crate::version::ProtocolVersion;

/// Result type for registry lookups.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors that can occur while resolving packet ids and types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// The numeric packet id has no known type under this version.
    UnknownId {
        /// The unresolved packet id.
        id: i32,
        /// The version whose table was consulted.
        version: ProtocolVersion,
    },

    /// The packet type has no id under this version (e.g. it did not exist yet).
    UnknownType {
        /// The unresolved packet type.
        packet_type: PacketType,
        /// The version whose table was consulted.
        version: ProtocolVersion,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownId { id, version } => {
                write!(f, "packet id {id:#04x} is not registered for version {version}")
            }
            Self::UnknownType {
                packet_type,
                version,
            } => {
                write!(f, "packet type {packet_type} has no id for version {version}")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

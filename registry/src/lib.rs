//! Protocol versions and packet-type id mappings for the mcwire codec.
//!
//! This crate defines the identity side of the protocol:
//! - [`ProtocolVersion`], an ordered token for every supported release
//! - [`PacketType`], the logical tag a packet body codec keys on
//! - [`PacketTypeRegistry`], the per-version bidirectional id ↔ type mapping
//!
//! # Design Principles
//!
//! - **Comparisons, not dispatch** - Version gates are explicit `at_least` /
//!   `at_most` checks against named thresholds, never per-version types.
//! - **Static tables** - Id mappings are `&'static` data; registries are
//!   `Copy` values.
//! - **Explicit errors** - Unknown ids and types are structured errors,
//!   never panics.

mod error;
mod registry;
mod types;
mod version;

pub use error::{RegistryError, RegistryResult};
pub use registry::PacketTypeRegistry;
pub use types::PacketType;
pub use version::ProtocolVersion;

//! Version-aware packet container and body codecs for the mcwire codec.
//!
//! This is the main protocol crate. It ties together `buffer` and `registry`
//! to provide the [`Packet`] container with its scoped [`Reader`] / [`Writer`]
//! cursor views, the bit-packed [`position`] codec, the version-era [`nbt`]
//! framing, and concrete packet body codecs under [`packets`].
//!
//! # Design Principles
//!
//! - **Version gates are comparisons** - Every era-dependent layout is an
//!   explicit `at_least` / `at_most` check against a named threshold, so each
//!   codec stays a pure function of `(version, bytes)`.
//! - **Readers are peeks** - A reader restores the packet's read cursor on
//!   every exit path, including errors.
//! - **Exact wire fidelity** - Layouts are reproduced to the bit across eras;
//!   malformed input is a structured error, never a panic.
//!
//! # Example
//!
//! ```
//! use protocol::{Packet, Position};
//! use registry::{PacketType, PacketTypeRegistry, ProtocolVersion};
//!
//! let registry = PacketTypeRegistry::new(ProtocolVersion::V1_14);
//! let mut packet = Packet::new(registry, PacketType::SpawnPosition).unwrap();
//!
//! let pos = Position::new(8, 64, -8);
//! {
//!     let mut writer = packet.overwrite();
//!     writer.write_position(pos);
//! }
//! let mut reader = packet.reader();
//! assert_eq!(reader.read_position().unwrap(), pos);
//! ```

mod error;
mod packet;

pub mod nbt;
pub mod packets;
pub mod position;

pub use error::{LightKind, ProtocolError, ProtocolResult};
pub use packet::{Packet, Reader, Writer};
pub use packets::{LightSection, PacketUpdateLight, LIGHT_SECTIONS, SECTION_BYTES};
pub use position::Position;

//! Version-scoped packet id tables.

use crate::error::{RegistryError, RegistryResult};
use crate::types::PacketType;
use crate::version::ProtocolVersion;

type IdTable = &'static [(i32, PacketType)];

// Clientbound play-state ids per layout era. A table applies from its listed
// version until the next era begins.
const TABLE_V1_7_6: IdTable = &[
    (0x00, PacketType::KeepAlive),
    (0x01, PacketType::JoinGame),
    (0x05, PacketType::SpawnPosition),
    (0x21, PacketType::ChunkData),
];

const TABLE_V1_9: IdTable = &[
    (0x1D, PacketType::UnloadChunk),
    (0x1F, PacketType::KeepAlive),
    (0x20, PacketType::ChunkData),
    (0x23, PacketType::JoinGame),
    (0x43, PacketType::SpawnPosition),
];

const TABLE_V1_14: IdTable = &[
    (0x1D, PacketType::UnloadChunk),
    (0x20, PacketType::KeepAlive),
    (0x21, PacketType::ChunkData),
    (0x24, PacketType::UpdateLight),
    (0x25, PacketType::JoinGame),
    (0x4D, PacketType::SpawnPosition),
];

const TABLE_V1_15: IdTable = &[
    (0x1E, PacketType::UnloadChunk),
    (0x21, PacketType::KeepAlive),
    (0x22, PacketType::ChunkData),
    (0x25, PacketType::UpdateLight),
    (0x26, PacketType::JoinGame),
    (0x4E, PacketType::SpawnPosition),
];

const TABLE_V1_16: IdTable = &[
    (0x1C, PacketType::UnloadChunk),
    (0x1F, PacketType::KeepAlive),
    (0x20, PacketType::ChunkData),
    (0x23, PacketType::UpdateLight),
    (0x24, PacketType::JoinGame),
    (0x42, PacketType::SpawnPosition),
];

const TABLE_V1_17: IdTable = &[
    (0x1D, PacketType::UnloadChunk),
    (0x21, PacketType::KeepAlive),
    (0x22, PacketType::ChunkData),
    (0x25, PacketType::UpdateLight),
    (0x26, PacketType::JoinGame),
    (0x4B, PacketType::SpawnPosition),
];

const ERAS: &[(ProtocolVersion, IdTable)] = &[
    (ProtocolVersion::V1_7_6, TABLE_V1_7_6),
    (ProtocolVersion::V1_9, TABLE_V1_9),
    (ProtocolVersion::V1_14, TABLE_V1_14),
    (ProtocolVersion::V1_15, TABLE_V1_15),
    (ProtocolVersion::V1_16, TABLE_V1_16),
    (ProtocolVersion::V1_17, TABLE_V1_17),
];

/// A bidirectional packet id ↔ type mapping scoped to one protocol version.
///
/// Registries are cheap values: the tables are static and the registry itself
/// is `Copy`. Two registries are equal exactly when their versions are equal,
/// since the table is a function of the version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacketTypeRegistry {
    version: ProtocolVersion,
    table: IdTable,
}

impl PacketTypeRegistry {
    /// Creates the registry for a protocol version.
    #[must_use]
    pub fn new(version: ProtocolVersion) -> Self {
        let mut table = ERAS[0].1;
        for (era, era_table) in ERAS {
            if version.at_least(*era) {
                table = era_table;
            }
        }
        Self { version, table }
    }

    /// Returns the protocol version this registry is scoped to.
    #[must_use]
    pub const fn version(&self) -> ProtocolVersion {
        self.version
    }

    /// Returns `true` if this registry's version is the given version or later.
    #[must_use]
    pub fn at_least(&self, version: ProtocolVersion) -> bool {
        self.version.at_least(version)
    }

    /// Returns `true` if this registry's version is the given version or earlier.
    #[must_use]
    pub fn at_most(&self, version: ProtocolVersion) -> bool {
        self.version.at_most(version)
    }

    /// Resolves a packet type to its numeric id under this version.
    pub fn id_for(&self, packet_type: PacketType) -> RegistryResult<i32> {
        self.table
            .iter()
            .find(|(_, entry)| *entry == packet_type)
            .map(|(id, _)| *id)
            .ok_or(RegistryError::UnknownType {
                packet_type,
                version: self.version,
            })
    }

    /// Resolves a numeric id to its packet type under this version.
    pub fn type_for(&self, id: i32) -> RegistryResult<PacketType> {
        self.table
            .iter()
            .find(|(entry, _)| *entry == id)
            .map(|(_, packet_type)| *packet_type)
            .ok_or(RegistryError::UnknownId {
                id,
                version: self.version,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_are_bidirectional() {
        let registry = PacketTypeRegistry::new(ProtocolVersion::V1_14);
        let id = registry.id_for(PacketType::UpdateLight).unwrap();
        assert_eq!(registry.type_for(id).unwrap(), PacketType::UpdateLight);
    }

    #[test]
    fn ids_shift_between_eras() {
        let v14 = PacketTypeRegistry::new(ProtocolVersion::V1_14);
        let v15 = PacketTypeRegistry::new(ProtocolVersion::V1_15);
        assert_eq!(v14.id_for(PacketType::UpdateLight).unwrap(), 0x24);
        assert_eq!(v15.id_for(PacketType::UpdateLight).unwrap(), 0x25);
    }

    #[test]
    fn era_covers_later_versions_until_next_era() {
        let v14_4 = PacketTypeRegistry::new(ProtocolVersion::V1_14_4);
        assert_eq!(v14_4.id_for(PacketType::UpdateLight).unwrap(), 0x24);
        let v16_4 = PacketTypeRegistry::new(ProtocolVersion::V1_16_4);
        assert_eq!(v16_4.id_for(PacketType::UpdateLight).unwrap(), 0x23);
    }

    #[test]
    fn update_light_missing_before_1_14() {
        let registry = PacketTypeRegistry::new(ProtocolVersion::V1_12_2);
        let result = registry.id_for(PacketType::UpdateLight);
        assert!(matches!(result, Err(RegistryError::UnknownType { .. })));
    }

    #[test]
    fn unknown_id_is_an_error() {
        let registry = PacketTypeRegistry::new(ProtocolVersion::V1_8);
        let result = registry.type_for(0x7F);
        assert!(matches!(result, Err(RegistryError::UnknownId { .. })));
    }

    #[test]
    fn version_passthroughs() {
        let registry = PacketTypeRegistry::new(ProtocolVersion::V1_15);
        assert!(registry.at_least(ProtocolVersion::V1_14));
        assert!(registry.at_most(ProtocolVersion::V1_16));
        assert_eq!(registry.version(), ProtocolVersion::V1_15);
    }

    #[test]
    fn equality_follows_version() {
        let a = PacketTypeRegistry::new(ProtocolVersion::V1_14);
        let b = PacketTypeRegistry::new(ProtocolVersion::V1_14);
        let c = PacketTypeRegistry::new(ProtocolVersion::V1_15);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}

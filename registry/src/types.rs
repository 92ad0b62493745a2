//! Logical packet-type tags.

use std::fmt;

/// A logical clientbound packet type, independent of its per-version id.
///
/// This is a working set, not the full catalogue; types are added as codecs
/// for them land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum PacketType {
    KeepAlive,
    JoinGame,
    SpawnPosition,
    ChunkData,
    UnloadChunk,
    UpdateLight,
}

impl fmt::Display for PacketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::KeepAlive => "KeepAlive",
            Self::JoinGame => "JoinGame",
            Self::SpawnPosition => "SpawnPosition",
            Self::ChunkData => "ChunkData",
            Self::UnloadChunk => "UnloadChunk",
            Self::UpdateLight => "UpdateLight",
        };
        f.write_str(name)
    }
}

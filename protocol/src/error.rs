//! Error types for packet encoding/decoding.

use std::fmt;
use std::io;

use registry::PacketType;

/// Result type for packet encoding/decoding.
pub type ProtocolResult<T> = Result<T, ProtocolError>;

/// Which of the two parallel light arrays an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightKind {
    Sky,
    Block,
}

impl fmt::Display for LightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sky => f.write_str("sky"),
            Self::Block => f.write_str("block"),
        }
    }
}

/// Errors that can occur during packet encoding/decoding.
///
/// Validation errors (`WrongPacketType`, `LightArrayLength`) are raised before
/// any bytes are touched and are always the caller's fault. Format errors
/// (`LightDataLength`, `Nbt`, `Io`, and most `Buf` cases) mean the bytes on the
/// wire violate the expected shape; they abort the whole packet decode.
#[derive(Debug)]
pub enum ProtocolError {
    /// Buffer-level read failure.
    Buf(buffer::BufError),

    /// Packet id/type lookup failure.
    Registry(registry::RegistryError),

    /// Tag-tree encoding/decoding failure.
    Nbt(quartz_nbt::io::NbtIoError),

    /// Compression stream failure.
    Io(io::Error),

    /// A type-specific codec was handed a packet of another type.
    WrongPacketType {
        /// The type the codec handles.
        expected: PacketType,
        /// The type the packet declared.
        actual: PacketType,
    },

    /// A light array was constructed with the wrong number of sections.
    LightArrayLength {
        /// Which array had the wrong length.
        kind: LightKind,
        /// The number of sections provided.
        actual: usize,
    },

    /// A light data block declared a length other than the section size.
    LightDataLength {
        /// The declared length.
        declared: i32,
    },

    /// A legacy-framed tag blob does not fit the signed 16-bit length field.
    TagTooLarge {
        /// The compressed blob size in bytes.
        len: usize,
    },
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buf(err) => write!(f, "buffer read failed: {err}"),
            Self::Registry(err) => write!(f, "registry lookup failed: {err}"),
            Self::Nbt(err) => write!(f, "tag codec failed: {err}"),
            Self::Io(err) => write!(f, "compression stream failed: {err}"),
            Self::WrongPacketType { expected, actual } => {
                write!(f, "can only handle packets of type {expected}, got {actual}")
            }
            Self::LightArrayLength { kind, actual } => {
                write!(
                    f,
                    "{kind} light must have exactly 18 sections, got {actual}"
                )
            }
            Self::LightDataLength { declared } => {
                write!(
                    f,
                    "expected light data block of length 2048, got {declared}"
                )
            }
            Self::TagTooLarge { len } => {
                write!(
                    f,
                    "compressed tag of {len} bytes exceeds the legacy 16-bit length field"
                )
            }
        }
    }
}

impl std::error::Error for ProtocolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Buf(err) => Some(err),
            Self::Registry(err) => Some(err),
            Self::Nbt(err) => Some(err),
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<buffer::BufError> for ProtocolError {
    fn from(err: buffer::BufError) -> Self {
        Self::Buf(err)
    }
}

impl From<registry::RegistryError> for ProtocolError {
    fn from(err: registry::RegistryError) -> Self {
        Self::Registry(err)
    }
}

impl From<quartz_nbt::io::NbtIoError> for ProtocolError {
    fn from(err: quartz_nbt::io::NbtIoError) -> Self {
        Self::Nbt(err)
    }
}

impl From<io::Error> for ProtocolError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

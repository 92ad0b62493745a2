//! The bit-packed block position codec.
//!
//! A block position travels as a single 64-bit word with asymmetric field
//! widths: x and z are 26-bit two's-complement, y is an unsigned 12-bit field.
//! The field order changed in 1.14; both layouts are supported and selected by
//! version comparison. Packing and unpacking are total functions; out-of-range
//! coordinates are silently truncated to their field width, matching the wire.

use registry::ProtocolVersion;

/// Bit width of the x and z fields.
pub const XZ_BITS: u32 = 26;

/// Bit width of the y field.
pub const Y_BITS: u32 = 12;

const XZ_MASK: u64 = (1 << XZ_BITS) - 1;
const Y_MASK: u64 = (1 << Y_BITS) - 1;

/// A block position in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

/// Packs a position into its 64-bit wire form for the given version.
#[must_use]
pub fn pack(version: ProtocolVersion, pos: Position) -> u64 {
    let x = (pos.x as i64 as u64) & XZ_MASK;
    let y = (pos.y as i64 as u64) & Y_MASK;
    let z = (pos.z as i64 as u64) & XZ_MASK;
    if version.at_least(ProtocolVersion::V1_14) {
        x << 38 | z << 12 | y
    } else {
        x << 38 | y << 26 | z
    }
}

/// Unpacks a 64-bit wire word into a position for the given version.
#[must_use]
pub fn unpack(version: ProtocolVersion, raw: u64) -> Position {
    let word = raw as i64;
    if version.at_least(ProtocolVersion::V1_14) {
        Position {
            x: sign_extend_xz(word >> 38),
            y: (word & Y_MASK as i64) as i32,
            z: sign_extend_xz(word >> 12),
        }
    } else {
        Position {
            x: sign_extend_xz(word >> 38),
            y: ((word >> 26) & Y_MASK as i64) as i32,
            z: sign_extend_xz(word),
        }
    }
}

/// Sign-extends the low 26 bits of `value`: shift the field to the top of the
/// word, then arithmetic-shift it back down.
const fn sign_extend_xz(value: i64) -> i32 {
    const SHIFT: u32 = 64 - XZ_BITS;
    ((value << SHIFT) >> SHIFT) as i32
}

//! The packet container and its scoped cursor views.

use std::io;

use buffer::PacketBuf;
use quartz_nbt::NbtCompound;
use registry::{PacketType, PacketTypeRegistry, ProtocolVersion};

use crate::error::{ProtocolError, ProtocolResult};
use crate::nbt;
use crate::position::{self, Position};

/// One logical protocol message: identity (registry, id, type) plus its binary
/// payload.
///
/// A packet is either constructed empty for outbound writing or wrapped around
/// received bytes for reading. Its buffer handle can be shared between owners
/// with [`retain`](Self::retain) / [`copy`](Self::copy) /
/// [`release`](Self::release); each handle carries independent cursor state.
#[derive(Debug)]
pub struct Packet {
    registry: PacketTypeRegistry,
    id: i32,
    packet_type: PacketType,
    buf: PacketBuf,
}

impl Packet {
    /// Creates an empty packet of the given type, ready for writing.
    ///
    /// # Errors
    ///
    /// Fails if the type has no id under the registry's version.
    pub fn new(registry: PacketTypeRegistry, packet_type: PacketType) -> ProtocolResult<Self> {
        Self::with_buf(registry, packet_type, PacketBuf::new())
    }

    /// Wraps an existing buffer as a packet of the given type.
    pub fn with_buf(
        registry: PacketTypeRegistry,
        packet_type: PacketType,
        buf: PacketBuf,
    ) -> ProtocolResult<Self> {
        let id = registry.id_for(packet_type)?;
        Ok(Self {
            registry,
            id,
            packet_type,
            buf,
        })
    }

    /// Wraps an existing buffer as a packet identified by its numeric id.
    ///
    /// # Errors
    ///
    /// Fails if the id has no known type under the registry's version.
    pub fn from_id(registry: PacketTypeRegistry, id: i32, buf: PacketBuf) -> ProtocolResult<Self> {
        let packet_type = registry.type_for(id)?;
        Ok(Self {
            registry,
            id,
            packet_type,
            buf,
        })
    }

    /// Returns the registry this packet's identity is scoped to.
    #[must_use]
    pub const fn registry(&self) -> PacketTypeRegistry {
        self.registry
    }

    /// Returns the protocol version of the registry.
    #[must_use]
    pub const fn version(&self) -> ProtocolVersion {
        self.registry.version()
    }

    /// Returns the numeric packet id.
    #[must_use]
    pub const fn id(&self) -> i32 {
        self.id
    }

    /// Returns the logical packet type.
    #[must_use]
    pub const fn packet_type(&self) -> PacketType {
        self.packet_type
    }

    /// Returns a view of the packet's buffer.
    #[must_use]
    pub const fn buf(&self) -> &PacketBuf {
        &self.buf
    }

    /// Returns `true` if the packet's version is the given version or later.
    #[must_use]
    pub fn at_least(&self, version: ProtocolVersion) -> bool {
        self.registry.at_least(version)
    }

    /// Returns `true` if the packet's version is the given version or earlier.
    #[must_use]
    pub fn at_most(&self, version: ProtocolVersion) -> bool {
        self.registry.at_most(version)
    }

    /// Acquires a scoped reader over the buffer at its current read cursor.
    ///
    /// When the reader goes out of scope, on any exit path, the read cursor
    /// is restored to where it was on entry, so readers are non-destructive
    /// peeks from the caller's point of view.
    pub fn reader(&mut self) -> Reader<'_> {
        let entry_index = self.buf.reader_index();
        Reader {
            registry: self.registry,
            buf: &mut self.buf,
            entry_index,
        }
    }

    /// Acquires a scoped writer that starts where reading left off.
    ///
    /// The write cursor is rewound to the current read cursor and everything
    /// beyond it is dropped, which allows rewriting a packet body in place
    /// after its header has been consumed.
    pub fn overwrite(&mut self) -> Writer<'_> {
        self.buf.truncate_to_reader();
        Writer {
            registry: self.registry,
            buf: &mut self.buf,
        }
    }

    /// Creates another owning handle to this packet's bytes.
    ///
    /// The handle shares physical storage but carries its own cursor state.
    #[must_use]
    pub fn retain(&self) -> Self {
        Self {
            registry: self.registry,
            id: self.id,
            packet_type: self.packet_type,
            buf: self.buf.share(),
        }
    }

    /// Creates an independent packet over the same physical bytes.
    ///
    /// Equivalent to [`retain`](Self::retain); the copy and the original move
    /// their cursors independently.
    #[must_use]
    pub fn copy(&self) -> Self {
        self.retain()
    }

    /// Consumes this handle, reporting whether it was the last owner of the
    /// underlying storage.
    #[must_use]
    pub fn release(self) -> bool {
        self.buf.release()
    }
}

/// Packets are equal if they have the same identity and byte-for-byte equal
/// buffer contents.
impl PartialEq for Packet {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.registry == other.registry && self.buf == other.buf
    }
}

impl Eq for Packet {}

/// A scoped, cursor-bound reader over a packet's buffer.
///
/// Restores the read cursor to its entry position when dropped.
#[derive(Debug)]
pub struct Reader<'a> {
    registry: PacketTypeRegistry,
    buf: &'a mut PacketBuf,
    entry_index: usize,
}

impl Reader<'_> {
    /// Returns `true` if the packet's version is the given version or later.
    #[must_use]
    pub fn at_least(&self, version: ProtocolVersion) -> bool {
        self.registry.at_least(version)
    }

    /// Returns `true` if the packet's version is the given version or earlier.
    #[must_use]
    pub fn at_most(&self, version: ProtocolVersion) -> bool {
        self.registry.at_most(version)
    }

    /// Returns the number of unread bytes.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    /// Reads a single byte.
    pub fn read_u8(&mut self) -> ProtocolResult<u8> {
        Ok(self.buf.read_u8()?)
    }

    /// Reads a boolean encoded as one byte.
    pub fn read_bool(&mut self) -> ProtocolResult<bool> {
        Ok(self.buf.read_bool()?)
    }

    /// Reads a big-endian `i16`.
    pub fn read_i16(&mut self) -> ProtocolResult<i16> {
        Ok(self.buf.read_i16()?)
    }

    /// Reads a big-endian `i32`.
    pub fn read_i32(&mut self) -> ProtocolResult<i32> {
        Ok(self.buf.read_i32()?)
    }

    /// Reads a big-endian `u64`.
    pub fn read_u64(&mut self) -> ProtocolResult<u64> {
        Ok(self.buf.read_u64()?)
    }

    /// Reads a big-endian `i64`.
    pub fn read_i64(&mut self) -> ProtocolResult<i64> {
        Ok(self.buf.read_i64()?)
    }

    /// Reads a 32-bit varint.
    pub fn read_varint(&mut self) -> ProtocolResult<i32> {
        Ok(self.buf.read_varint()?)
    }

    /// Reads a 64-bit varint.
    pub fn read_varlong(&mut self) -> ProtocolResult<i64> {
        Ok(self.buf.read_varlong()?)
    }

    /// Reads `count` bytes into a new vector.
    pub fn read_bytes(&mut self, count: usize) -> ProtocolResult<Vec<u8>> {
        Ok(self.buf.read_bytes(count)?)
    }

    /// Reads exactly `dst.len()` bytes into the provided slice.
    pub fn read_into(&mut self, dst: &mut [u8]) -> ProtocolResult<()> {
        Ok(self.buf.read_into(dst)?)
    }

    /// Reads a bit-packed block position under the packet's version.
    pub fn read_position(&mut self) -> ProtocolResult<Position> {
        let raw = self.read_u64()?;
        Ok(position::unpack(self.registry.version(), raw))
    }

    /// Reads an optional tag tree under the packet's version-era framing.
    pub fn read_nbt(&mut self) -> ProtocolResult<Option<NbtCompound>> {
        nbt::read_tag(self)
    }
}

impl Drop for Reader<'_> {
    fn drop(&mut self) {
        self.buf.rewind_reader(self.entry_index);
    }
}

impl io::Read for Reader<'_> {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        let readable = self.buf.readable();
        let count = readable.len().min(out.len());
        out[..count].copy_from_slice(&readable[..count]);
        self.buf
            .advance(count)
            .map_err(|err| io::Error::new(io::ErrorKind::UnexpectedEof, err))?;
        Ok(count)
    }
}

/// A scoped, cursor-bound writer over a packet's buffer.
///
/// Writes are committed as they occur; dropping the writer has no effect.
#[derive(Debug)]
pub struct Writer<'a> {
    registry: PacketTypeRegistry,
    buf: &'a mut PacketBuf,
}

impl Writer<'_> {
    /// Returns `true` if the packet's version is the given version or later.
    #[must_use]
    pub fn at_least(&self, version: ProtocolVersion) -> bool {
        self.registry.at_least(version)
    }

    /// Returns `true` if the packet's version is the given version or earlier.
    #[must_use]
    pub fn at_most(&self, version: ProtocolVersion) -> bool {
        self.registry.at_most(version)
    }

    /// Writes a single byte.
    pub fn write_u8(&mut self, value: u8) {
        self.buf.write_u8(value);
    }

    /// Writes a boolean as one byte.
    pub fn write_bool(&mut self, value: bool) {
        self.buf.write_bool(value);
    }

    /// Writes a big-endian `i16`.
    pub fn write_i16(&mut self, value: i16) {
        self.buf.write_i16(value);
    }

    /// Writes a big-endian `i32`.
    pub fn write_i32(&mut self, value: i32) {
        self.buf.write_i32(value);
    }

    /// Writes a big-endian `u64`.
    pub fn write_u64(&mut self, value: u64) {
        self.buf.write_u64(value);
    }

    /// Writes a big-endian `i64`.
    pub fn write_i64(&mut self, value: i64) {
        self.buf.write_i64(value);
    }

    /// Writes a 32-bit varint.
    pub fn write_varint(&mut self, value: i32) {
        self.buf.write_varint(value);
    }

    /// Writes a 64-bit varint.
    pub fn write_varlong(&mut self, value: i64) {
        self.buf.write_varlong(value);
    }

    /// Writes raw bytes.
    pub fn write_bytes(&mut self, src: &[u8]) {
        self.buf.write_bytes(src);
    }

    /// Writes a bit-packed block position under the packet's version.
    pub fn write_position(&mut self, pos: Position) {
        self.buf
            .write_u64(position::pack(self.registry.version(), pos));
    }

    /// Writes an optional tag tree under the packet's version-era framing.
    pub fn write_nbt(&mut self, tag: Option<&NbtCompound>) -> ProtocolResult<()> {
        nbt::write_tag(self, tag)
    }
}

impl io::Write for Writer<'_> {
    fn write(&mut self, src: &[u8]) -> io::Result<usize> {
        self.buf.write_bytes(src);
        Ok(src.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

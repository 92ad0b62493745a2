//! The UpdateLight packet body codec.
//!
//! Light data for a chunk column travels as two parallel 18-section arrays
//! (sky and block), sparsely encoded through four bitmasks: a data mask and an
//! empty mask per array. A section flagged in the data mask contributes a
//! length-prefixed 2048-byte payload; one flagged in the empty mask is the
//! canonical all-zero payload and contributes no further bytes; one flagged in
//! neither is absent. A section index is never set in both masks of a pair.

use registry::{PacketType, PacketTypeRegistry, ProtocolVersion};

use crate::error::{LightKind, ProtocolError, ProtocolResult};
use crate::packet::{Packet, Reader, Writer};

/// Number of light sections per array: 16 chunk sections plus one below and
/// one above the world.
pub const LIGHT_SECTIONS: usize = 18;

/// Size of one section's light payload: 4096 nibbles.
pub const SECTION_BYTES: usize = 2048;

const EMPTY_PAYLOAD: [u8; SECTION_BYTES] = [0; SECTION_BYTES];

/// Light data for one section: absent, canonically empty, or a full payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightSection {
    /// No data transmitted for this section.
    Absent,
    /// Present with the canonical all-zero payload, transmitted via the empty
    /// mask alone.
    Empty,
    /// Present with an arbitrary payload.
    Data(Box<[u8; SECTION_BYTES]>),
}

impl LightSection {
    /// Returns the payload this section carries, if it is present at all.
    ///
    /// An [`Empty`](Self::Empty) section yields the all-zero sentinel.
    #[must_use]
    pub fn payload(&self) -> Option<&[u8; SECTION_BYTES]> {
        match self {
            Self::Absent => None,
            Self::Empty => Some(&EMPTY_PAYLOAD),
            Self::Data(data) => Some(data),
        }
    }

    /// Returns `true` if this section encodes through the empty mask: either
    /// [`Empty`](Self::Empty) itself or a payload byte-for-byte equal to the
    /// sentinel. Canonicalization happens at encode time, not construction.
    #[must_use]
    pub fn is_canonically_empty(&self) -> bool {
        match self {
            Self::Absent => false,
            Self::Empty => true,
            Self::Data(data) => **data == EMPTY_PAYLOAD,
        }
    }
}

/// The UpdateLight packet body: chunk coordinates plus sky and block light
/// arrays.
///
/// A transient value object: it is materialized from a [`Packet`] by
/// [`read`](Self::read) and flattened back into one by [`write`](Self::write),
/// holding no reference to the packet in between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacketUpdateLight {
    x: i32,
    z: i32,
    sky_light: Vec<LightSection>,
    block_light: Vec<LightSection>,
}

impl PacketUpdateLight {
    /// Creates a body from its fields.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::LightArrayLength`] unless both arrays have
    /// exactly [`LIGHT_SECTIONS`] entries.
    pub fn new(
        x: i32,
        z: i32,
        sky_light: Vec<LightSection>,
        block_light: Vec<LightSection>,
    ) -> ProtocolResult<Self> {
        if sky_light.len() != LIGHT_SECTIONS {
            return Err(ProtocolError::LightArrayLength {
                kind: LightKind::Sky,
                actual: sky_light.len(),
            });
        }
        if block_light.len() != LIGHT_SECTIONS {
            return Err(ProtocolError::LightArrayLength {
                kind: LightKind::Block,
                actual: block_light.len(),
            });
        }
        Ok(Self {
            x,
            z,
            sky_light,
            block_light,
        })
    }

    /// Returns the chunk x coordinate.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Returns the chunk z coordinate.
    #[must_use]
    pub const fn z(&self) -> i32 {
        self.z
    }

    /// Returns the sky light array.
    #[must_use]
    pub fn sky_light(&self) -> &[LightSection] {
        &self.sky_light
    }

    /// Returns the block light array.
    #[must_use]
    pub fn block_light(&self) -> &[LightSection] {
        &self.block_light
    }

    /// Decodes the body from a packet, leaving the packet's read cursor where
    /// it was.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::WrongPacketType`] if the packet is not an
    /// UpdateLight packet, and a format error if the bytes violate the wire
    /// shape.
    pub fn read(packet: &mut Packet) -> ProtocolResult<Self> {
        if packet.packet_type() != PacketType::UpdateLight {
            return Err(ProtocolError::WrongPacketType {
                expected: PacketType::UpdateLight,
                actual: packet.packet_type(),
            });
        }
        let mut reader = packet.reader();
        Self::read_body(&mut reader)
    }

    /// Encodes the body into a fresh packet for the given registry.
    pub fn write(&self, registry: PacketTypeRegistry) -> ProtocolResult<Packet> {
        let mut packet = Packet::new(registry, PacketType::UpdateLight)?;
        {
            let mut writer = packet.overwrite();
            self.write_body(&mut writer);
        }
        Ok(packet)
    }

    fn read_body(reader: &mut Reader<'_>) -> ProtocolResult<Self> {
        let x = reader.read_varint()?;
        let z = reader.read_varint()?;
        if reader.at_least(ProtocolVersion::V1_16) {
            // Opaque since its introduction; consumed and discarded.
            reader.read_bool()?;
        }

        let sky_mask = reader.read_varint()?;
        let block_mask = reader.read_varint()?;
        let empty_sky_mask = reader.read_varint()?;
        let empty_block_mask = reader.read_varint()?;

        let sky_light = read_sections(reader, sky_mask, empty_sky_mask)?;
        let block_light = read_sections(reader, block_mask, empty_block_mask)?;

        Ok(Self {
            x,
            z,
            sky_light,
            block_light,
        })
    }

    fn write_body(&self, writer: &mut Writer<'_>) {
        writer.write_varint(self.x);
        writer.write_varint(self.z);
        if writer.at_least(ProtocolVersion::V1_16) {
            // Meaning unknown upstream; every known encoder sends true.
            writer.write_bool(true);
        }

        let (sky_mask, empty_sky_mask) = classify(&self.sky_light);
        let (block_mask, empty_block_mask) = classify(&self.block_light);

        writer.write_varint(sky_mask);
        writer.write_varint(block_mask);
        writer.write_varint(empty_sky_mask);
        writer.write_varint(empty_block_mask);

        write_sections(writer, &self.sky_light, sky_mask);
        write_sections(writer, &self.block_light, block_mask);
    }
}

/// Splits an array into its (data, empty) mask pair. The masks are disjoint by
/// construction: every section lands in exactly one of data, empty, or absent.
fn classify(sections: &[LightSection]) -> (i32, i32) {
    let mut data_mask = 0i32;
    let mut empty_mask = 0i32;
    for (index, section) in sections.iter().enumerate() {
        match section {
            LightSection::Absent => {}
            section if section.is_canonically_empty() => empty_mask |= 1 << index,
            _ => data_mask |= 1 << index,
        }
    }
    (data_mask, empty_mask)
}

fn read_sections(
    reader: &mut Reader<'_>,
    data_mask: i32,
    empty_mask: i32,
) -> ProtocolResult<Vec<LightSection>> {
    let mut sections = Vec::with_capacity(LIGHT_SECTIONS);
    for index in 0..LIGHT_SECTIONS {
        if data_mask & (1 << index) != 0 {
            let declared = reader.read_varint()?;
            if declared != SECTION_BYTES as i32 {
                return Err(ProtocolError::LightDataLength { declared });
            }
            let mut data = Box::new([0u8; SECTION_BYTES]);
            reader.read_into(&mut data[..])?;
            sections.push(LightSection::Data(data));
        } else if empty_mask & (1 << index) != 0 {
            sections.push(LightSection::Empty);
        } else {
            sections.push(LightSection::Absent);
        }
    }
    Ok(sections)
}

fn write_sections(writer: &mut Writer<'_>, sections: &[LightSection], data_mask: i32) {
    for (index, section) in sections.iter().enumerate() {
        if data_mask & (1 << index) == 0 {
            continue;
        }
        if let LightSection::Data(data) = section {
            writer.write_varint(SECTION_BYTES as i32);
            writer.write_bytes(&data[..]);
        }
    }
}

//! Version-era framing around the tag-tree codec.
//!
//! The tag tree itself is delegated to `quartz_nbt`; this module only decides
//! how an optional root compound is framed on the wire:
//!
//! - **1.8 and later**: one presence byte. Zero means "no tag"; any other
//!   value is the root tag's type byte, followed by the rest of an unframed
//!   tag stream.
//! - **Before 1.8**: a signed 16-bit length (negative means "no tag")
//!   followed by that many bytes of gzip-compressed tag stream.

use std::io::{self, Read, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use quartz_nbt::io::{read_nbt, write_nbt, Flavor};
use quartz_nbt::NbtCompound;
use registry::ProtocolVersion;

use crate::error::{ProtocolError, ProtocolResult};
use crate::packet::{Reader, Writer};

/// Length value meaning "no tag" under the legacy framing.
const LEGACY_ABSENT: i16 = -1;

/// Reads an optional root compound under the version-era framing of the
/// reader's packet.
pub fn read_tag(reader: &mut Reader<'_>) -> ProtocolResult<Option<NbtCompound>> {
    if reader.at_least(ProtocolVersion::V1_8) {
        let type_byte = reader.read_u8()?;
        if type_byte == 0 {
            return Ok(None);
        }
        // The root type byte is already consumed; splice it back in front of
        // the remaining stream so the tree decoder sees an unframed tag.
        let mut stream = io::Cursor::new([type_byte]).chain(&mut *reader);
        let (tag, _root_name) = read_nbt(&mut stream, Flavor::Uncompressed)?;
        Ok(Some(tag))
    } else {
        let length = reader.read_i16()?;
        if length < 0 {
            return Ok(None);
        }
        let compressed = reader.read_bytes(length as usize)?;
        let mut raw = Vec::new();
        GzDecoder::new(compressed.as_slice()).read_to_end(&mut raw)?;
        let (tag, _root_name) = read_nbt(&mut io::Cursor::new(raw), Flavor::Uncompressed)?;
        Ok(Some(tag))
    }
}

/// Writes an optional root compound under the version-era framing of the
/// writer's packet.
pub fn write_tag(writer: &mut Writer<'_>, tag: Option<&NbtCompound>) -> ProtocolResult<()> {
    if writer.at_least(ProtocolVersion::V1_8) {
        match tag {
            None => writer.write_u8(0),
            Some(tag) => write_nbt(writer, None, tag, Flavor::Uncompressed)?,
        }
        Ok(())
    } else {
        let Some(tag) = tag else {
            writer.write_i16(LEGACY_ABSENT);
            return Ok(());
        };
        let mut raw = Vec::new();
        write_nbt(&mut raw, None, tag, Flavor::Uncompressed)?;

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&raw)?;
        let compressed = encoder.finish()?;

        let length = i16::try_from(compressed.len()).map_err(|_| ProtocolError::TagTooLarge {
            len: compressed.len(),
        })?;
        writer.write_i16(length);
        writer.write_bytes(&compressed);
        Ok(())
    }
}

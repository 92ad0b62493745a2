//! The dual-cursor packet buffer.

use std::sync::Arc;

use crate::error::{BufError, BufResult};

/// Maximum encoded size of a 32-bit varint.
pub const VARINT_MAX_BYTES: usize = 5;

/// Maximum encoded size of a 64-bit varint.
pub const VARLONG_MAX_BYTES: usize = 10;

/// A growable byte buffer with independent read and write cursors.
///
/// Physical storage is shared between handles produced by [`share`](Self::share);
/// each handle keeps its own cursor state. A write through a shared handle
/// detaches that handle from its siblings first, so handles never observe each
/// other's mutations. The readable region is the bytes between the read and
/// write cursors.
///
/// All read operations are bounds-checked and return errors on failure.
/// The buffer never panics on malformed input.
#[derive(Debug, Clone, Default)]
pub struct PacketBuf {
    data: Arc<Vec<u8>>,
    reader_index: usize,
    writer_index: usize,
}

impl PacketBuf {
    /// Creates a new empty `PacketBuf`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty `PacketBuf` with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            data: Arc::new(Vec::with_capacity(bytes)),
            reader_index: 0,
            writer_index: 0,
        }
    }

    /// Creates a `PacketBuf` over received bytes, ready for reading.
    ///
    /// The read cursor starts at zero and the write cursor at the end.
    #[must_use]
    pub fn from_vec(data: Vec<u8>) -> Self {
        let writer_index = data.len();
        Self {
            data: Arc::new(data),
            reader_index: 0,
            writer_index,
        }
    }

    /// Returns the current read cursor position.
    #[must_use]
    pub const fn reader_index(&self) -> usize {
        self.reader_index
    }

    /// Returns the current write cursor position.
    #[must_use]
    pub const fn writer_index(&self) -> usize {
        self.writer_index
    }

    /// Returns the number of readable bytes between the cursors.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.writer_index - self.reader_index
    }

    /// Returns `true` if there are no readable bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the readable region as a slice.
    #[must_use]
    pub fn readable(&self) -> &[u8] {
        &self.data[self.reader_index..self.writer_index]
    }

    /// Moves the read cursor to an absolute position.
    ///
    /// # Errors
    ///
    /// Returns [`BufError::ReaderIndexOutOfBounds`] if `index` is beyond the
    /// write cursor.
    pub fn set_reader_index(&mut self, index: usize) -> BufResult<()> {
        if index > self.writer_index {
            return Err(BufError::ReaderIndexOutOfBounds {
                index,
                writer_index: self.writer_index,
            });
        }
        self.reader_index = index;
        Ok(())
    }

    /// Moves the read cursor to an absolute position, clamping to the write
    /// cursor.
    ///
    /// Used to restore a previously recorded cursor unconditionally, e.g. from
    /// a destructor that cannot report errors.
    pub fn rewind_reader(&mut self, index: usize) {
        self.reader_index = index.min(self.writer_index);
    }

    /// Rewinds the write cursor to the read cursor and drops the bytes beyond
    /// it, so subsequent writes start where reading left off.
    pub fn truncate_to_reader(&mut self) {
        self.writer_index = self.reader_index;
        Arc::make_mut(&mut self.data).truncate(self.writer_index);
    }

    /// Creates another handle to the same physical storage.
    ///
    /// The new handle starts with this handle's cursor positions and moves
    /// them independently afterwards.
    #[must_use]
    pub fn share(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
            reader_index: self.reader_index,
            writer_index: self.writer_index,
        }
    }

    /// Returns the number of live handles sharing this storage.
    #[must_use]
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.data)
    }

    /// Consumes this handle, reporting whether it was the last owner of the
    /// storage (and therefore the one that freed it).
    #[must_use]
    pub fn release(self) -> bool {
        Arc::strong_count(&self.data) == 1
    }

    fn ensure_readable(&self, requested: usize) -> BufResult<()> {
        let available = self.remaining();
        if requested > available {
            return Err(BufError::UnexpectedEnd {
                requested,
                available,
            });
        }
        Ok(())
    }

    /// Advances the read cursor by `count` bytes without inspecting them.
    pub fn advance(&mut self, count: usize) -> BufResult<()> {
        self.ensure_readable(count)?;
        self.reader_index += count;
        Ok(())
    }

    /// Reads a single byte.
    pub fn read_u8(&mut self) -> BufResult<u8> {
        self.ensure_readable(1)?;
        let value = self.data[self.reader_index];
        self.reader_index += 1;
        Ok(value)
    }

    /// Reads a single signed byte.
    pub fn read_i8(&mut self) -> BufResult<i8> {
        Ok(self.read_u8()? as i8)
    }

    /// Reads a boolean encoded as one byte, where any non-zero value is `true`.
    pub fn read_bool(&mut self) -> BufResult<bool> {
        Ok(self.read_u8()? != 0)
    }

    /// Reads a big-endian `u16`.
    pub fn read_u16(&mut self) -> BufResult<u16> {
        Ok(u16::from_be_bytes(self.read_array::<2>()?))
    }

    /// Reads a big-endian `i16`.
    pub fn read_i16(&mut self) -> BufResult<i16> {
        Ok(i16::from_be_bytes(self.read_array::<2>()?))
    }

    /// Reads a big-endian `i32`.
    pub fn read_i32(&mut self) -> BufResult<i32> {
        Ok(i32::from_be_bytes(self.read_array::<4>()?))
    }

    /// Reads a big-endian `u64`.
    pub fn read_u64(&mut self) -> BufResult<u64> {
        Ok(u64::from_be_bytes(self.read_array::<8>()?))
    }

    /// Reads a big-endian `i64`.
    pub fn read_i64(&mut self) -> BufResult<i64> {
        Ok(i64::from_be_bytes(self.read_array::<8>()?))
    }

    /// Reads a 32-bit varint: seven data bits per byte, low group first, the
    /// high bit of each byte flagging continuation.
    pub fn read_varint(&mut self) -> BufResult<i32> {
        let mut value = 0u32;
        for shift in (0..VARINT_MAX_BYTES as u32 * 7).step_by(7) {
            let byte = self.read_u8()?;
            value |= u32::from(byte & 0x7F) << shift;
            if byte & 0x80 == 0 {
                return Ok(value as i32);
            }
        }
        Err(BufError::VarIntTooLong {
            max_bytes: VARINT_MAX_BYTES,
        })
    }

    /// Reads a 64-bit varint.
    pub fn read_varlong(&mut self) -> BufResult<i64> {
        let mut value = 0u64;
        for shift in (0..VARLONG_MAX_BYTES as u32 * 7).step_by(7) {
            let byte = self.read_u8()?;
            value |= u64::from(byte & 0x7F) << shift;
            if byte & 0x80 == 0 {
                return Ok(value as i64);
            }
        }
        Err(BufError::VarIntTooLong {
            max_bytes: VARLONG_MAX_BYTES,
        })
    }

    /// Reads `count` bytes into a new vector.
    pub fn read_bytes(&mut self, count: usize) -> BufResult<Vec<u8>> {
        self.ensure_readable(count)?;
        let bytes = self.data[self.reader_index..self.reader_index + count].to_vec();
        self.reader_index += count;
        Ok(bytes)
    }

    /// Reads exactly `dst.len()` bytes into the provided slice.
    pub fn read_into(&mut self, dst: &mut [u8]) -> BufResult<()> {
        self.ensure_readable(dst.len())?;
        dst.copy_from_slice(&self.data[self.reader_index..self.reader_index + dst.len()]);
        self.reader_index += dst.len();
        Ok(())
    }

    fn read_array<const N: usize>(&mut self) -> BufResult<[u8; N]> {
        self.ensure_readable(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[self.reader_index..self.reader_index + N]);
        self.reader_index += N;
        Ok(out)
    }

    /// Writes raw bytes at the write cursor, growing the storage as needed.
    ///
    /// Writing below the current end overwrites in place.
    pub fn write_bytes(&mut self, src: &[u8]) {
        let data = Arc::make_mut(&mut self.data);
        let end = self.writer_index + src.len();
        if data.len() < end {
            data.resize(end, 0);
        }
        data[self.writer_index..end].copy_from_slice(src);
        self.writer_index = end;
    }

    /// Writes a single byte.
    pub fn write_u8(&mut self, value: u8) {
        self.write_bytes(&[value]);
    }

    /// Writes a single signed byte.
    pub fn write_i8(&mut self, value: i8) {
        self.write_u8(value as u8);
    }

    /// Writes a boolean as one byte.
    pub fn write_bool(&mut self, value: bool) {
        self.write_u8(u8::from(value));
    }

    /// Writes a big-endian `u16`.
    pub fn write_u16(&mut self, value: u16) {
        self.write_bytes(&value.to_be_bytes());
    }

    /// Writes a big-endian `i16`.
    pub fn write_i16(&mut self, value: i16) {
        self.write_bytes(&value.to_be_bytes());
    }

    /// Writes a big-endian `i32`.
    pub fn write_i32(&mut self, value: i32) {
        self.write_bytes(&value.to_be_bytes());
    }

    /// Writes a big-endian `u64`.
    pub fn write_u64(&mut self, value: u64) {
        self.write_bytes(&value.to_be_bytes());
    }

    /// Writes a big-endian `i64`.
    pub fn write_i64(&mut self, value: i64) {
        self.write_bytes(&value.to_be_bytes());
    }

    /// Writes a 32-bit varint.
    pub fn write_varint(&mut self, value: i32) {
        let mut value = value as u32;
        loop {
            let mut byte = (value & 0x7F) as u8;
            value >>= 7;
            if value != 0 {
                byte |= 0x80;
            }
            self.write_u8(byte);
            if value == 0 {
                break;
            }
        }
    }

    /// Writes a 64-bit varint.
    pub fn write_varlong(&mut self, value: i64) {
        let mut value = value as u64;
        loop {
            let mut byte = (value & 0x7F) as u8;
            value >>= 7;
            if value != 0 {
                byte |= 0x80;
            }
            self.write_u8(byte);
            if value == 0 {
                break;
            }
        }
    }
}

/// Handles are equal if their readable regions are byte-for-byte equal.
impl PartialEq for PacketBuf {
    fn eq(&self, other: &Self) -> bool {
        self.readable() == other.readable()
    }
}

impl Eq for PacketBuf {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_buffer() {
        let buf = PacketBuf::new();
        assert!(buf.is_empty());
        assert_eq!(buf.remaining(), 0);
        assert_eq!(buf.reader_index(), 0);
        assert_eq!(buf.writer_index(), 0);
    }

    #[test]
    fn read_from_empty_fails() {
        let mut buf = PacketBuf::new();
        let result = buf.read_u8();
        assert!(matches!(result, Err(BufError::UnexpectedEnd { .. })));
    }

    #[test]
    fn primitive_roundtrip() {
        let mut buf = PacketBuf::new();
        buf.write_u8(0xAB);
        buf.write_bool(true);
        buf.write_i16(-2);
        buf.write_u16(0xBEEF);
        buf.write_i32(-123_456);
        buf.write_u64(0x0123_4567_89AB_CDEF);
        buf.write_i64(i64::MIN);

        assert_eq!(buf.read_u8().unwrap(), 0xAB);
        assert!(buf.read_bool().unwrap());
        assert_eq!(buf.read_i16().unwrap(), -2);
        assert_eq!(buf.read_u16().unwrap(), 0xBEEF);
        assert_eq!(buf.read_i32().unwrap(), -123_456);
        assert_eq!(buf.read_u64().unwrap(), 0x0123_4567_89AB_CDEF);
        assert_eq!(buf.read_i64().unwrap(), i64::MIN);
        assert!(buf.is_empty());
    }

    #[test]
    fn big_endian_byte_order() {
        let mut buf = PacketBuf::new();
        buf.write_u16(0x0102);
        assert_eq!(buf.readable(), &[0x01, 0x02]);
    }

    #[test]
    fn varint_known_encodings() {
        // Reference values from the vanilla protocol.
        let cases: [(i32, &[u8]); 6] = [
            (0, &[0x00]),
            (1, &[0x01]),
            (127, &[0x7F]),
            (128, &[0x80, 0x01]),
            (2_147_483_647, &[0xFF, 0xFF, 0xFF, 0xFF, 0x07]),
            (-1, &[0xFF, 0xFF, 0xFF, 0xFF, 0x0F]),
        ];
        for (value, encoded) in cases {
            let mut buf = PacketBuf::new();
            buf.write_varint(value);
            assert_eq!(buf.readable(), encoded, "encoding of {value}");
            assert_eq!(buf.read_varint().unwrap(), value, "roundtrip of {value}");
        }
    }

    #[test]
    fn varint_rejects_six_bytes() {
        let mut buf = PacketBuf::from_vec(vec![0x80, 0x80, 0x80, 0x80, 0x80, 0x01]);
        let result = buf.read_varint();
        assert!(matches!(
            result,
            Err(BufError::VarIntTooLong { max_bytes: 5 })
        ));
    }

    #[test]
    fn varlong_roundtrip_extremes() {
        for value in [0i64, 1, -1, i64::MAX, i64::MIN] {
            let mut buf = PacketBuf::new();
            buf.write_varlong(value);
            assert_eq!(buf.read_varlong().unwrap(), value, "roundtrip of {value}");
        }
    }

    #[test]
    fn varlong_rejects_eleven_bytes() {
        let mut buf = PacketBuf::from_vec(vec![0x80; 11]);
        let result = buf.read_varlong();
        assert!(matches!(
            result,
            Err(BufError::VarIntTooLong { max_bytes: 10 })
        ));
    }

    #[test]
    fn read_bytes_and_into() {
        let mut buf = PacketBuf::from_vec(vec![1, 2, 3, 4, 5]);
        assert_eq!(buf.read_bytes(2).unwrap(), vec![1, 2]);
        let mut rest = [0u8; 3];
        buf.read_into(&mut rest).unwrap();
        assert_eq!(rest, [3, 4, 5]);
        assert!(buf.is_empty());
    }

    #[test]
    fn read_bytes_past_end_fails() {
        let mut buf = PacketBuf::from_vec(vec![1, 2]);
        let result = buf.read_bytes(3);
        assert!(matches!(
            result,
            Err(BufError::UnexpectedEnd {
                requested: 3,
                available: 2,
            })
        ));
        // A failed read consumes nothing.
        assert_eq!(buf.remaining(), 2);
    }

    #[test]
    fn set_reader_index_bounds() {
        let mut buf = PacketBuf::from_vec(vec![0; 4]);
        buf.set_reader_index(4).unwrap();
        assert!(buf.is_empty());
        let result = buf.set_reader_index(5);
        assert!(matches!(
            result,
            Err(BufError::ReaderIndexOutOfBounds { .. })
        ));
    }

    #[test]
    fn rewind_reader_clamps() {
        let mut buf = PacketBuf::from_vec(vec![0; 4]);
        buf.rewind_reader(10);
        assert_eq!(buf.reader_index(), 4);
        buf.rewind_reader(1);
        assert_eq!(buf.reader_index(), 1);
    }

    #[test]
    fn truncate_to_reader_drops_tail() {
        let mut buf = PacketBuf::from_vec(vec![1, 2, 3, 4]);
        buf.advance(2).unwrap();
        buf.truncate_to_reader();
        assert_eq!(buf.writer_index(), 2);
        assert!(buf.is_empty());
        buf.write_u8(9);
        buf.rewind_reader(0);
        assert_eq!(buf.readable(), &[1, 2, 9]);
    }

    #[test]
    fn overwrite_in_place() {
        let mut buf = PacketBuf::from_vec(vec![1, 2, 3, 4]);
        buf.advance(1).unwrap();
        buf.truncate_to_reader();
        buf.write_bytes(&[8, 9]);
        buf.rewind_reader(0);
        assert_eq!(buf.readable(), &[1, 8, 9]);
    }

    #[test]
    fn share_has_independent_cursors() {
        let mut original = PacketBuf::from_vec(vec![1, 2, 3]);
        let mut shared = original.share();
        assert_eq!(original.handle_count(), 2);

        assert_eq!(shared.read_u8().unwrap(), 1);
        assert_eq!(original.reader_index(), 0);
        assert_eq!(original.read_u8().unwrap(), 1);
    }

    #[test]
    fn write_through_shared_handle_detaches() {
        let original = PacketBuf::from_vec(vec![1, 2, 3]);
        let mut shared = original.share();
        shared.write_u8(4);
        assert_eq!(shared.readable(), &[1, 2, 3, 4]);
        assert_eq!(original.readable(), &[1, 2, 3]);
    }

    #[test]
    fn release_reports_last_owner() {
        let original = PacketBuf::from_vec(vec![1]);
        let shared = original.share();
        assert!(!shared.release());
        assert!(original.release());
    }

    #[test]
    fn equality_compares_readable_regions() {
        let mut a = PacketBuf::from_vec(vec![0, 1, 2]);
        let b = PacketBuf::from_vec(vec![1, 2]);
        assert_ne!(a, b);
        a.advance(1).unwrap();
        assert_eq!(a, b);
    }
}

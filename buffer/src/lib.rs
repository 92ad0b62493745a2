//! Growable dual-cursor byte buffer for the mcwire codec.
//!
//! This crate provides [`PacketBuf`], the byte buffer every packet body is
//! read from and written into. It carries independent read and write cursors,
//! big-endian fixed-width primitives, the protocol's variable-length integer
//! coding, and cheap shared-storage handles.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - All reads are bounds-checked.
//! - **No domain knowledge** - This crate knows nothing about packets, versions,
//!   or registries.
//! - **Explicit errors** - All failures return structured errors, never panic.
//!
//! # Example
//!
//! ```
//! use buffer::PacketBuf;
//!
//! let mut buf = PacketBuf::new();
//! buf.write_varint(300);
//! buf.write_bool(true);
//!
//! assert_eq!(buf.read_varint().unwrap(), 300);
//! assert_eq!(buf.read_bool().unwrap(), true);
//! ```

mod buf;
mod error;

pub use buf::{PacketBuf, VARINT_MAX_BYTES, VARLONG_MAX_BYTES};
pub use error::{BufError, BufResult};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        // Verify all expected items are exported
        let _ = PacketBuf::new();
        let _ = VARINT_MAX_BYTES;
        let _ = VARLONG_MAX_BYTES;
        let _: BufResult<()> = Ok(());
    }

    #[test]
    fn doctest_example() {
        let mut buf = PacketBuf::new();
        buf.write_varint(300);
        buf.write_bool(true);

        assert_eq!(buf.read_varint().unwrap(), 300);
        assert!(buf.read_bool().unwrap());
    }
}

//! Protocol version tokens and ordering.

use std::fmt;

/// A named protocol release.
///
/// Versions are totally ordered by release date, which is the only property
/// the codecs rely on: every wire-layout decision is a comparison against a
/// named threshold via [`at_least`](Self::at_least) / [`at_most`](Self::at_most).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum ProtocolVersion {
    V1_7_6,
    V1_8,
    V1_9,
    V1_12_2,
    V1_14,
    V1_14_4,
    V1_15,
    V1_16,
    V1_16_4,
    V1_17,
}

impl ProtocolVersion {
    /// Returns `true` if this version is the given version or later.
    #[must_use]
    pub fn at_least(self, other: Self) -> bool {
        self >= other
    }

    /// Returns `true` if this version is the given version or earlier.
    #[must_use]
    pub fn at_most(self, other: Self) -> bool {
        self <= other
    }

    /// Returns the numeric protocol id sent during handshaking.
    #[must_use]
    pub const fn protocol_id(self) -> i32 {
        match self {
            Self::V1_7_6 => 5,
            Self::V1_8 => 47,
            Self::V1_9 => 107,
            Self::V1_12_2 => 340,
            Self::V1_14 => 477,
            Self::V1_14_4 => 498,
            Self::V1_15 => 573,
            Self::V1_16 => 735,
            Self::V1_16_4 => 754,
            Self::V1_17 => 755,
        }
    }

    /// Returns the release name, e.g. `"1.14.4"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::V1_7_6 => "1.7.6",
            Self::V1_8 => "1.8",
            Self::V1_9 => "1.9",
            Self::V1_12_2 => "1.12.2",
            Self::V1_14 => "1.14",
            Self::V1_14_4 => "1.14.4",
            Self::V1_15 => "1.15",
            Self::V1_16 => "1.16",
            Self::V1_16_4 => "1.16.4",
            Self::V1_17 => "1.17",
        }
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

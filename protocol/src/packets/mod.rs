//! Concrete packet body codecs.

mod update_light;

pub use update_light::{LightSection, PacketUpdateLight, LIGHT_SECTIONS, SECTION_BYTES};

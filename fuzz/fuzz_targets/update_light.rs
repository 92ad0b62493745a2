#![no_main]

use buffer::PacketBuf;
use libfuzzer_sys::fuzz_target;
use protocol::{Packet, PacketUpdateLight};
use registry::{PacketType, PacketTypeRegistry, ProtocolVersion};

const VERSIONS: [ProtocolVersion; 4] = [
    ProtocolVersion::V1_14,
    ProtocolVersion::V1_15,
    ProtocolVersion::V1_16,
    ProtocolVersion::V1_17,
];

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    let version = VERSIONS[data[0] as usize % VERSIONS.len()];
    let registry = PacketTypeRegistry::new(version);

    let buf = PacketBuf::from_vec(data[1..].to_vec());
    let Ok(mut packet) = Packet::with_buf(registry, PacketType::UpdateLight, buf) else {
        return;
    };

    // Whatever the input, decoding must not panic. A successful decode must
    // re-encode, and the encoding must be a fixed point: all-zero data
    // sections canonicalize to the empty mask on the first write, after which
    // encode and decode invert each other exactly.
    if let Ok(body) = PacketUpdateLight::read(&mut packet) {
        let mut first = body.write(registry).unwrap();
        let canonical = PacketUpdateLight::read(&mut first).unwrap();
        let second = canonical.write(registry).unwrap();
        assert_eq!(first.buf().readable(), second.buf().readable());
    }
});

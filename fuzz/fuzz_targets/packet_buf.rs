#![no_main]

use buffer::PacketBuf;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut buf = PacketBuf::from_vec(data.to_vec());
    let mut idx = 0usize;

    // Use input bytes to drive a bounded sequence of operations.
    while idx < data.len() && idx < 1024 {
        let op = data[idx] % 8;
        idx += 1;

        match op {
            0 => {
                let _ = buf.read_u8();
            }
            1 => {
                let _ = buf.read_varint();
            }
            2 => {
                let _ = buf.read_varlong();
            }
            3 => {
                let _ = buf.read_u64();
            }
            4 => {
                let count = data[idx.saturating_sub(1)] as usize;
                let _ = buf.read_bytes(count);
            }
            5 => {
                buf.write_varint(i32::from_le_bytes([
                    data[idx.saturating_sub(1)],
                    0,
                    0,
                    0,
                ]));
            }
            6 => {
                let index = data[idx.saturating_sub(1)] as usize;
                let _ = buf.set_reader_index(index);
            }
            _ => {
                buf.truncate_to_reader();
            }
        }
    }

    // A shared handle must observe the same readable region.
    let shared = buf.share();
    assert_eq!(shared.readable(), buf.readable());
    let _ = shared.release();
});

use buffer::PacketBuf;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    U8(u8),
    I8(i8),
    Bool(bool),
    U16(u16),
    I16(i16),
    I32(i32),
    U64(u64),
    I64(i64),
    VarInt(i32),
    VarLong(i64),
    Bytes(Vec<u8>),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<u8>().prop_map(Op::U8),
        any::<i8>().prop_map(Op::I8),
        any::<bool>().prop_map(Op::Bool),
        any::<u16>().prop_map(Op::U16),
        any::<i16>().prop_map(Op::I16),
        any::<i32>().prop_map(Op::I32),
        any::<u64>().prop_map(Op::U64),
        any::<i64>().prop_map(Op::I64),
        any::<i32>().prop_map(Op::VarInt),
        any::<i64>().prop_map(Op::VarLong),
        prop::collection::vec(any::<u8>(), 0..64).prop_map(Op::Bytes),
    ]
}

proptest! {
    #[test]
    fn prop_roundtrip_ops(ops in prop::collection::vec(op_strategy(), 1..64)) {
        let mut buf = PacketBuf::new();

        for op in &ops {
            match op {
                Op::U8(v) => buf.write_u8(*v),
                Op::I8(v) => buf.write_i8(*v),
                Op::Bool(v) => buf.write_bool(*v),
                Op::U16(v) => buf.write_u16(*v),
                Op::I16(v) => buf.write_i16(*v),
                Op::I32(v) => buf.write_i32(*v),
                Op::U64(v) => buf.write_u64(*v),
                Op::I64(v) => buf.write_i64(*v),
                Op::VarInt(v) => buf.write_varint(*v),
                Op::VarLong(v) => buf.write_varlong(*v),
                Op::Bytes(v) => buf.write_bytes(v),
            }
        }

        for op in &ops {
            match op {
                Op::U8(v) => prop_assert_eq!(buf.read_u8().unwrap(), *v),
                Op::I8(v) => prop_assert_eq!(buf.read_i8().unwrap(), *v),
                Op::Bool(v) => prop_assert_eq!(buf.read_bool().unwrap(), *v),
                Op::U16(v) => prop_assert_eq!(buf.read_u16().unwrap(), *v),
                Op::I16(v) => prop_assert_eq!(buf.read_i16().unwrap(), *v),
                Op::I32(v) => prop_assert_eq!(buf.read_i32().unwrap(), *v),
                Op::U64(v) => prop_assert_eq!(buf.read_u64().unwrap(), *v),
                Op::I64(v) => prop_assert_eq!(buf.read_i64().unwrap(), *v),
                Op::VarInt(v) => prop_assert_eq!(buf.read_varint().unwrap(), *v),
                Op::VarLong(v) => prop_assert_eq!(buf.read_varlong().unwrap(), *v),
                Op::Bytes(v) => prop_assert_eq!(&buf.read_bytes(v.len()).unwrap(), v),
            }
        }

        prop_assert!(buf.is_empty());
    }

    #[test]
    fn prop_varint_length_bounds(value in any::<i32>()) {
        let mut buf = PacketBuf::new();
        buf.write_varint(value);
        prop_assert!(buf.remaining() <= buffer::VARINT_MAX_BYTES);
    }

    #[test]
    fn prop_shared_handle_sees_same_bytes(payload in prop::collection::vec(any::<u8>(), 0..256)) {
        let original = PacketBuf::from_vec(payload);
        let shared = original.share();
        prop_assert_eq!(original.readable(), shared.readable());
        prop_assert!(!shared.release());
        prop_assert!(original.release());
    }
}

//! Behavioural properties of the bit stream across both bit orders.

use oxibit_core::{BitOrder, BitStream, ShiftDirection, StreamConfig};

const ORDERS: [BitOrder; 2] = [BitOrder::Lsb, BitOrder::Msb];

/// Reproducible pseudo-random values (linear congruential generator).
fn sample_values(count: usize) -> Vec<u64> {
    let mut seed: u64 = 0x1234_5678_9ABC_DEF0;
    let mut values = vec![0, 1, u64::MAX, 1 << 63, (1 << 47) - 1, 1 << 23];
    for _ in 0..count {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        values.push(seed);
    }
    values
}

fn stream_for(order: BitOrder) -> BitStream {
    BitStream::with_config(
        StreamConfig::default()
            .with_bit_order(order)
            .with_auto_grow(true),
    )
}

#[test]
fn test_integer_roundtrip_all_widths() {
    for order in ORDERS {
        for start_bit in [0u8, 3, 7] {
            for v in sample_values(32) {
                let mut stream = stream_for(order);
                stream.write_bits(&[0], start_bit as u64).unwrap();

                stream.write_u16(v as u16).unwrap();
                stream.write_i16(v as i16).unwrap();
                stream.write_u24(v as u32 & 0xFF_FFFF).unwrap();
                let i24 = ((v as u32 as i32) << 8) >> 8;
                stream.write_i24(i24).unwrap();
                stream.write_u32(v as u32).unwrap();
                stream.write_i32(v as i32).unwrap();
                stream.write_u48(v & 0xFFFF_FFFF_FFFF).unwrap();
                let i48 = ((v as i64) << 16) >> 16;
                stream.write_i48(i48).unwrap();
                stream.write_u64(v).unwrap();
                stream.write_i64(v as i64).unwrap();

                stream.seek(0, start_bit as i32);
                assert_eq!(stream.read_u16().unwrap(), v as u16);
                assert_eq!(stream.read_i16().unwrap(), v as i16);
                assert_eq!(stream.read_u24().unwrap(), v as u32 & 0xFF_FFFF);
                assert_eq!(stream.read_i24().unwrap(), i24);
                assert_eq!(stream.read_u32().unwrap(), v as u32);
                assert_eq!(stream.read_i32().unwrap(), v as i32);
                assert_eq!(stream.read_u48().unwrap(), v & 0xFFFF_FFFF_FFFF);
                assert_eq!(stream.read_i48().unwrap(), i48);
                assert_eq!(stream.read_u64().unwrap(), v);
                assert_eq!(stream.read_i64().unwrap(), v as i64);
                assert!(stream.is_at_end() || stream.bits_remaining() < 8);
            }
        }
    }
}

#[test]
fn test_bulk_write_then_read() {
    let data = [0xDE, 0xAD, 0xBE, 0xEF, 0x5A];
    for order in ORDERS {
        for count in [8u64, 16, 40, 1, 5, 13, 37] {
            let mut stream = stream_for(order);
            stream.write_bits(&[0xFF], 3).unwrap();
            stream.write_bits(&data, count).unwrap();

            stream.seek(0, 3);
            let read = stream.read_bits(count).unwrap();
            assert_eq!(read.len() as u64, count.div_ceil(8));

            // Whole bytes match exactly; the final partial byte matches on
            // the bits that were written.
            let full = (count / 8) as usize;
            assert_eq!(&read[..full], &data[..full]);
            let tail = (count % 8) as u8;
            if tail > 0 {
                let mask = (0..tail).fold(0u8, |m, p| m | (1 << order.shift(p)));
                assert_eq!(read[full], data[full] & mask);
            }
        }
    }
}

#[test]
fn test_bulk_matches_single_bits() {
    let data = [0b1100_1010, 0b0011_0110];
    for order in ORDERS {
        let config = StreamConfig::default().with_bit_order(order);
        let mut bulk = BitStream::from_bytes_with_config(&data, config);
        let mut single = bulk.clone();

        bulk.seek(0, 2);
        single.seek(0, 2);
        let packed = bulk.read_bits(11).unwrap();
        for i in 0..11u8 {
            let bit = single.read_bit().unwrap();
            let byte = packed[(i / 8) as usize];
            assert_eq!(order.get(byte, i % 8), bit);
        }
        assert_eq!(bulk.position(), single.position());
    }
}

#[test]
fn test_seek_clamping() {
    let mut stream = BitStream::from_bytes(&[0; 6]);
    for k in [1i64, 2, 100, i64::MAX - 6] {
        for b in [0i32, 3, 7, 8, 9, 200] {
            stream.seek(6 + k, b);
            let expected_bit = if b >= 8 { 0 } else { b as u8 };
            assert_eq!(stream.position(), (6, expected_bit));
        }
    }
    stream.seek(-3, -3);
    assert_eq!(stream.position(), (0, 0));
}

#[test]
fn test_growth_gating() {
    for order in ORDERS {
        let config = StreamConfig::default().with_bit_order(order);
        let mut stream = BitStream::from_bytes_with_config(&[1, 2, 3], config);
        stream.seek(3, 0);
        assert!(stream.write_bit(1).unwrap_err().is_out_of_range());
        assert!(stream.write_byte(0xAA).is_err());
        assert_eq!(stream.len(), 3);
        assert_eq!(stream.position(), (3, 0));

        stream.set_auto_grow(true);
        stream.write_bit(1).unwrap();
        assert_eq!(stream.len(), 4);
    }
}

#[test]
fn test_circular_shift_inverts() {
    for order in ORDERS {
        for x in 0..=255u8 {
            for k in 1..=7u32 {
                let config = StreamConfig::default().with_bit_order(order);
                let mut stream = BitStream::from_bytes_with_config(&[x], config);
                stream.circular_shift(k, ShiftDirection::Left).unwrap();
                stream.rewind();
                stream.circular_shift(8 - k, ShiftDirection::Left).unwrap();
                assert_eq!(stream.as_bytes(), &[x], "x={x:#04x} k={k} order={order}");
            }
        }
    }
}

#[test]
fn test_circular_shift_on_bit_inverts() {
    let mut stream = BitStream::from_bytes(&[0x3C, 0xA5, 0x0F]);
    stream.seek(0, 5);
    stream.circular_shift_on_bit(3, ShiftDirection::Right).unwrap();
    stream.seek(0, 5);
    stream.circular_shift_on_bit(3, ShiftDirection::Left).unwrap();
    assert_eq!(stream.as_bytes(), &[0x3C, 0xA5, 0x0F]);
    assert_eq!(stream.position(), (1, 5));
}

#[test]
fn test_not_twice_restores() {
    for order in ORDERS {
        let config = StreamConfig::default().with_bit_order(order);
        let mut stream = BitStream::from_bytes_with_config(&[0x12, 0x34], config);
        stream.seek(0, 6);
        stream.not().unwrap();
        stream.seek(0, 6);
        stream.not().unwrap();
        assert_eq!(stream.as_bytes(), &[0x12, 0x34]);
        assert_eq!(stream.len(), 2);
    }
}

#[test]
fn test_bit_xor_zero_is_identity() {
    let data = [0b1010_0110];
    let mut stream = BitStream::from_bytes(&data);
    for _ in 0..8 {
        stream.bit_xor(0).unwrap();
    }
    assert_eq!(stream.as_bytes(), &data);
    assert_eq!(stream.position(), (1, 0));
}

#[test]
fn test_operators_never_grow() {
    let mut stream = BitStream::from_bytes(&[0xFF]);
    stream.set_auto_grow(true);
    stream.seek(1, 0);
    assert!(stream.and(0).is_err());
    assert!(stream.shift(1, ShiftDirection::Left).is_err());
    assert!(stream.circular_shift_on_bit(1, ShiftDirection::Right).is_err());
    assert!(stream.bit_or(1).is_err());
    assert_eq!(stream.len(), 1);
    assert_eq!(stream.position(), (1, 0));
}

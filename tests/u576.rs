use keccak_e521::primitives::U576;

use core::convert::TryFrom;

#[test]
fn u576_max_const() {
    assert_eq!(U576::MAX, U576::from([255u8; 72]));
    assert_eq!(U576::MAX.bits(), 576);
    assert_eq!(U576::ZERO.bits(), 0);
}

#[test]
fn u576_try_from_u64() {
    let a = U576::from(0x0123_4567_89AB_CDEFu64);
    assert_eq!(u64::try_from(a).unwrap(), 0x0123_4567_89AB_CDEFu64);

    let bad = U576::ONE << 64;
    assert!(u64::try_from(bad).is_err());
}

#[test]
fn u576_add_sub_wrap() {
    let (sum, carry) = U576::MAX.overflowing_add(&U576::ONE);
    assert_eq!(sum, U576::ZERO);
    assert!(carry);

    let (diff, borrow) = U576::ZERO.overflowing_sub(&U576::ONE);
    assert_eq!(diff, U576::MAX);
    assert!(borrow);

    assert_eq!(U576::MAX + U576::from(2u64), U576::ONE);
    assert_eq!(U576::ZERO - U576::MAX, U576::ONE);
}

#[test]
fn u576_carry_propagates_across_limbs() {
    let low = U576::from_limbs([u64::MAX, u64::MAX, 0, 0, 0, 0, 0, 0, 0]);
    let sum = low + U576::ONE;

    assert_eq!(sum, U576::ONE << 128);
    assert_eq!(sum - U576::ONE, low);
}

#[test]
fn u576_shifts() {
    let one = U576::ONE;

    assert_eq!((one << 575).bits(), 576);
    assert_eq!(one << 576, U576::ZERO);
    assert_eq!((one << 300) >> 300, one);
    assert_eq!(U576::MAX >> 575, one);
    assert_eq!(U576::MAX >> 576, U576::ZERO);
    assert!((one << 77).bit(77));
    assert!(!(one << 77).bit(76));
}

#[test]
fn u576_ordering() {
    let small = U576::from(5u64);
    let large = U576::ONE << 500;

    assert!(small < large);
    assert!(large > small);
    assert_eq!(small.max(large), large);
}

#[test]
fn u576_widening_mul() {
    let wide = U576::MAX.widening_mul(&U576::MAX);

    // (2⁵⁷⁶ − 1)² = 2¹¹⁵² − 2⁵⁷⁷ + 1
    assert_eq!(wide[0], 1);
    assert!(wide[1..9].iter().all(|&limb| limb == 0));
    assert_eq!(wide[9], u64::MAX - 1);
    assert!(wide[10..].iter().all(|&limb| limb == u64::MAX));
}

#[test]
fn u576_reduce() {
    let modulus = U576::from(1_000_003u64);
    let value = U576::from(u64::MAX);

    assert_eq!(value.reduce(&modulus), U576::from(u64::MAX % 1_000_003));
    assert_eq!(modulus.reduce(&modulus), U576::ZERO);
}

#[test]
#[should_panic]
fn u576_reduce_by_zero_panics() {
    let _ = U576::ONE.reduce(&U576::ZERO);
}

#[test]
fn u576_big_endian_bytes() {
    let mut bytes = [0u8; 72];
    bytes[71] = 0x01;
    bytes[0] = 0x80;

    let value = U576::from(bytes);
    assert_eq!(value.to_be_bytes(), bytes);
    assert!(value.bit(575));
    assert!(value.bit(0));

    assert_eq!(U576::from_be_slice(&[0, 0, 0, 7]), Some(U576::from(7u64)));
    assert_eq!(U576::from_be_slice(&[]), Some(U576::ZERO));
    assert_eq!(U576::from_be_slice(&[1u8; 73]), None);

    let mut padded = vec![0u8; 10];
    padded.extend_from_slice(&bytes);
    assert_eq!(U576::from_be_slice(&padded), Some(value));
}

#[test]
fn u576_narrow_big_endian_array() {
    let value = U576::from(0x0102u64);
    let out = value.to_be_array::<66>();

    assert_eq!(out[64], 0x01);
    assert_eq!(out[65], 0x02);
    assert!(out[..64].iter().all(|&b| b == 0));
}

#[test]
fn u576_display_is_colon_hex() {
    let text = U576::from(0xABu64).to_string();

    assert_eq!(text.len(), 72 * 3 - 1);
    assert!(text.starts_with("00:00:"));
    assert!(text.ends_with(":00:AB"));
}

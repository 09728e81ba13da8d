use keccak_e521::Error;
use keccak_e521::hash::cshake::{
    CShake256, bytepad, cshake256, encode_string, left_encode, left_encode_be, right_encode,
    right_encode_be, shake256,
};
use keccak_e521::hash::keccak::{Sponge, permute};
use sha3::Shake256;
use sha3::digest::{ExtendableOutput, Update, XofReader};

fn x4() -> Vec<u8> {
    vec![0x00, 0x01, 0x02, 0x03]
}

fn x200() -> Vec<u8> {
    (0u8..200).collect()
}

fn reference_shake256(data: &[u8], len: usize) -> Vec<u8> {
    let mut hasher = Shake256::default();
    hasher.update(data);

    let mut out = vec![0u8; len];
    hasher.finalize_xof().read(&mut out);
    out
}

#[test]
fn test_cshake256_sample_3() {
    let expected = hex::decode(
        "d008828e2b80ac9d2218ffee1d070c48b8e4c87bff32c9699d5b6896eee0edd1\
         64020e2be0560858d9c00c037e34a96937c561a74c412bb4c746469527281c8c",
    )
    .unwrap();

    assert_eq!(cshake256(&x4(), 512, b"", b"Email Signature"), expected);
}

#[test]
fn test_cshake256_sample_4() {
    let expected = hex::decode(
        "07dc27b11e51fbac75bc7b3c1d983e8b4b85fb1defaf218912ac86430273091\
         727f42b17ed1df63e8ec118f04b23633c1dfb1574c8fb55cb45da8e25afb092bb",
    )
    .unwrap();

    assert_eq!(cshake256(&x200(), 512, b"", b"Email Signature"), expected);
}

#[test]
fn test_shake256_matches_sha3_crate() {
    for len in [0usize, 1, 135, 136, 137, 272, 1000] {
        let data: Vec<u8> = (0..len).map(|i| (i * 7 + 3) as u8).collect();

        assert_eq!(shake256(&data, 8 * 300), reference_shake256(&data, 300));
    }
}

#[test]
fn test_cshake256_without_names_is_shake256() {
    let data = x200();
    assert_eq!(
        cshake256(&data, 1024, b"", b""),
        reference_shake256(&data, 128)
    );
}

#[test]
fn test_zero_length_output() {
    assert!(cshake256(&x4(), 0, b"", b"Email Signature").is_empty());
    assert!(shake256(&x4(), 0).is_empty());
}

#[test]
#[should_panic]
fn test_output_length_must_be_whole_bytes() {
    let _ = cshake256(&x4(), 12, b"", b"S");
}

#[test]
fn test_incremental_matches_one_shot() {
    let data = x200();

    let mut hasher = CShake256::new(b"", b"Email Signature");
    for chunk in data.chunks(17) {
        hasher.update(chunk);
    }

    assert_eq!(
        hasher.finalize(512),
        cshake256(&data, 512, b"", b"Email Signature")
    );
}

#[test]
fn test_output_prefixes_agree() {
    let long = cshake256(&x200(), 4096, b"N", b"S");
    let short = cshake256(&x200(), 256, b"N", b"S");

    assert_eq!(&long[..32], &short[..]);
}

#[test]
fn test_function_name_separates_outputs() {
    assert_ne!(
        cshake256(&x4(), 256, b"A", b"S"),
        cshake256(&x4(), 256, b"B", b"S")
    );
}

#[test]
fn test_left_and_right_encode() {
    assert_eq!(left_encode(0), vec![1, 0]);
    assert_eq!(right_encode(0), vec![0, 1]);
    assert_eq!(left_encode(136), vec![1, 136]);
    assert_eq!(left_encode(256), vec![2, 1, 0]);
    assert_eq!(right_encode(512), vec![2, 0, 2]);
}

#[test]
fn test_encode_be_range() {
    let mut max = vec![0xffu8; 255];
    let encoded = left_encode_be(&max).unwrap();
    assert_eq!(encoded.len(), 256);
    assert_eq!(encoded[0], 255);

    max.insert(0, 0x01);
    assert_eq!(left_encode_be(&max), Err(Error::EncodingOutOfRange));
    assert_eq!(right_encode_be(&max), Err(Error::EncodingOutOfRange));

    // leading zeros do not count
    let mut padded = vec![0u8; 300];
    padded.push(7);
    assert_eq!(right_encode_be(&padded).unwrap(), vec![7, 1]);
}

#[test]
fn test_encode_string_and_bytepad() {
    assert_eq!(encode_string(b""), vec![1, 0]);
    assert_eq!(encode_string(b"KMAC"), vec![1, 32, b'K', b'M', b'A', b'C']);

    let padded = bytepad(&encode_string(b"KMAC"), 136);
    assert_eq!(padded.len(), 136);
    assert_eq!(&padded[..2], &[1, 136]);
    assert!(padded[8..].iter().all(|&b| b == 0));
}

#[test]
fn test_sponge_absorbs_across_block_boundary() {
    let data = x200();

    let mut whole = Sponge::new(136);
    whole.absorb(&data);
    whole.finalize(0x1f);

    let mut split = Sponge::new(136);
    split.absorb(&data[..135]);
    split.absorb(&data[135..]);
    split.finalize(0x1f);

    let mut a = [0u8; 64];
    let mut b = [0u8; 64];
    whole.squeeze(&mut a);
    split.squeeze(&mut b);

    assert_eq!(a, b);
    assert_eq!(a.to_vec(), reference_shake256(&data, 64));
}

#[test]
fn test_permutation_of_zero_state() {
    let mut state = [0u8; 200];
    permute(&mut state);

    assert_eq!(
        &state[..16],
        &hex::decode("e7dde140798f25f18a47c033f9ccd584").unwrap()[..]
    );
}

use keccak_e521::Error;
use keccak_e521::codec::{Decode, Encode, Kind, VERSION};
use keccak_e521::curve::e521::{FieldElement, Point};
use keccak_e521::encryption::{Cryptogram, schnorr};
use keccak_e521::keys::e521::PublicKey;
use keccak_e521::rng::Csprng;
use keccak_e521::signatures::{Signature, schnorr as signing};

fn cryptogram() -> Cryptogram {
    let public = PublicKey::from_passphrase(b"pw");
    let mut rng = Csprng::from_seed(&mut [7u8; 64]);

    schnorr::encrypt_with_rng(b"persist me", &public, &mut rng)
}

fn public_key_encoding(point: &Point) -> Vec<u8> {
    let mut encoded = vec![VERSION, Kind::PublicKey as u8];
    encoded.extend_from_slice(&point.to_bytes());
    encoded
}

#[test]
fn test_public_key_encoding() {
    let public = PublicKey::from_passphrase(b"pw");
    let encoded = public.encode();

    assert_eq!(encoded.len(), 2 + 132);
    assert_eq!(PublicKey::decode(&encoded), Ok(public));
}

#[test]
fn test_cryptogram_encoding_still_decrypts() {
    let original = cryptogram();
    let encoded = original.encode();

    assert_eq!(encoded.len(), 2 + 132 + 4 + 10 + 64);
    assert_eq!(encoded[1], Kind::Cryptogram as u8);

    let decoded = Cryptogram::decode(&encoded).unwrap();
    assert_eq!(decoded, original);
    assert_eq!(schnorr::decrypt(&decoded, b"pw").unwrap(), b"persist me");
}

#[test]
fn test_signature_encoding_still_verifies() {
    let signature = signing::sign(b"m", b"pw");
    let encoded = signature.encode();

    assert_eq!(encoded.len(), 2 + 64 + 66);

    let decoded = Signature::decode(&encoded).unwrap();
    assert!(signing::verify(&decoded, b"m", &PublicKey::from_passphrase(b"pw")));
}

#[test]
fn test_unknown_version_is_rejected() {
    let mut encoded = PublicKey::from_point(Point::generator()).unwrap().encode();
    encoded[0] = VERSION + 1;

    assert_eq!(
        PublicKey::decode(&encoded),
        Err(Error::UnsupportedVersion(VERSION + 1))
    );
}

#[test]
fn test_wrong_kind_is_rejected() {
    let encoded = PublicKey::from_point(Point::generator()).unwrap().encode();

    let result = Signature::decode(&encoded);
    assert!(matches!(result, Err(Error::Malformed(_))));
}

#[test]
fn test_truncation_and_trailing_bytes_are_rejected() {
    let encoded = cryptogram().encode();

    for len in [0, 1, 2, 100, 134, 140, encoded.len() - 1] {
        let result = Cryptogram::decode(&encoded[..len]);
        assert!(matches!(result, Err(Error::Malformed(_))));
    }

    let mut extended = encoded.clone();
    extended.push(0);
    assert_eq!(
        Cryptogram::decode(&extended),
        Err(Error::Malformed("trailing bytes"))
    );
}

#[test]
fn test_off_curve_point_is_rejected() {
    let mut encoded = PublicKey::from_point(Point::generator()).unwrap().encode();
    let last = encoded.len() - 1;
    encoded[last] ^= 0x01;

    assert_eq!(PublicKey::decode(&encoded), Err(Error::NotOnCurve));
}

#[test]
fn test_non_canonical_scalar_is_rejected() {
    let mut encoded = signing::sign(b"m", b"pw").encode();
    for byte in &mut encoded[2 + 64..] {
        *byte = 0xff;
    }

    let result = Signature::decode(&encoded);
    assert!(matches!(result, Err(Error::Malformed(_))));
}

#[test]
fn test_generator_public_key_decodes() {
    let encoded = public_key_encoding(&Point::generator());
    let public = PublicKey::decode(&encoded).unwrap();

    assert_eq!(public.point(), &Point::generator());
}

#[test]
fn test_small_order_public_keys_are_rejected() {
    let order_two = Point::new(FieldElement::ZERO, -FieldElement::ONE).unwrap();
    let order_four = Point::from_x(FieldElement::ONE, false).unwrap();
    let mixed = Point::generator() + order_two;

    for point in [Point::neutral(), order_two, order_four, mixed] {
        assert!(point.is_on_curve());
        assert_eq!(PublicKey::from_point(point), Err(Error::InvalidPublicKey));

        let encoded = public_key_encoding(&point);
        assert_eq!(PublicKey::decode(&encoded), Err(Error::InvalidPublicKey));
    }
}

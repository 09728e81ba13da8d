use keccak_e521::curve::e521::Scalar;
use keccak_e521::keys::e521::{KeyPair, PublicKey};
use keccak_e521::signatures::{Signature, schnorr};

#[test]
fn test_sign_and_verify() {
    let public = PublicKey::from_passphrase(b"signing key");
    let signature = schnorr::sign(b"document", b"signing key");

    assert!(schnorr::verify(&signature, b"document", &public));
}

#[test]
fn test_sign_with_key_matches_passphrase_signing() {
    let pair = KeyPair::from_passphrase(b"k");

    let by_key = schnorr::sign_with_key(b"m", pair.private_key());
    let by_passphrase = schnorr::sign(b"m", b"k");

    assert_eq!(by_key, by_passphrase);
    assert!(schnorr::verify(&by_key, b"m", pair.public_key()));
}

#[test]
fn test_signing_is_deterministic() {
    assert_eq!(schnorr::sign(b"m", b"k"), schnorr::sign(b"m", b"k"));
    assert_ne!(schnorr::sign(b"m", b"k"), schnorr::sign(b"n", b"k"));
}

#[test]
fn test_empty_message() {
    let public = PublicKey::from_passphrase(b"k");
    let signature = schnorr::sign(b"", b"k");

    assert!(schnorr::verify(&signature, b"", &public));
    assert!(!schnorr::verify(&signature, b"\0", &public));
}

#[test]
fn test_altered_message_is_rejected() {
    let public = PublicKey::from_passphrase(b"k");
    let signature = schnorr::sign(b"pay 10", b"k");

    assert!(!schnorr::verify(&signature, b"pay 11", &public));
}

#[test]
fn test_other_public_key_is_rejected() {
    let signature = schnorr::sign(b"m", b"alice");
    let bob = PublicKey::from_passphrase(b"bob");

    assert!(!schnorr::verify(&signature, b"m", &bob));
}

#[test]
fn test_altered_signature_is_rejected() {
    let public = PublicKey::from_passphrase(b"k");
    let signature = schnorr::sign(b"m", b"k");

    let bumped = Signature::from_parts(*signature.h(), *signature.z() + Scalar::ONE);
    assert!(!schnorr::verify(&bumped, b"m", &public));

    let mut h = *signature.h();
    h[0] ^= 0x01;
    let flipped = Signature::from_parts(h, *signature.z());
    assert!(!schnorr::verify(&flipped, b"m", &public));
}

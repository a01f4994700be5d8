//! tests/kdf_tests.rs
//! HKDF-SHA256 expansion against independently generated vectors

use secure_gate::RevealSecret;
use serde::Deserialize;
use wamedia_rs::aliases::ExpandedKey112;
use wamedia_rs::crypto::kdf::hkdf::expand_media_key;
use wamedia_rs::{KeyMaterial, MediaType, RootKey32};

#[derive(Debug, Deserialize)]
struct KdfVector {
    media_type: String,
    root_key_hex: String,
    expanded_hex: String,
}

fn load_vectors() -> Vec<KdfVector> {
    let json = include_str!("test_data/kdf_vectors.json");
    serde_json::from_str(json).expect("kdf_vectors.json")
}

fn root_key(hex_str: &str) -> RootKey32 {
    let bytes: [u8; 32] = hex::decode(hex_str).unwrap().try_into().unwrap();
    RootKey32::new(bytes)
}

#[test]
fn expansion_matches_vectors() {
    let vectors = load_vectors();
    assert_eq!(vectors.len(), 8);

    for v in &vectors {
        let media_type: MediaType = v.media_type.parse().unwrap();
        let mut out = ExpandedKey112::new([0u8; 112]);
        expand_media_key(&root_key(&v.root_key_hex), media_type, &mut out).unwrap();
        assert_eq!(
            hex::encode(out.expose_secret()),
            v.expanded_hex,
            "{} / {}",
            v.media_type,
            v.root_key_hex
        );
    }
}

#[test]
fn key_material_slices_the_expansion() {
    for v in load_vectors() {
        let media_type: MediaType = v.media_type.parse().unwrap();
        let expanded = hex::decode(&v.expanded_hex).unwrap();
        let keys = KeyMaterial::derive(&root_key(&v.root_key_hex), media_type).unwrap();

        assert_eq!(keys.media_type(), media_type);
        assert_eq!(keys.iv(), &expanded[0..16]);
        assert_eq!(keys.cipher_key(), &expanded[16..48]);
        assert_eq!(keys.mac_key(), &expanded[48..80]);
        assert_eq!(keys.ref_key(), &expanded[80..112]);
    }
}

#[test]
fn zero_key_audio_expansion() {
    let mut out = ExpandedKey112::new([0u8; 112]);
    expand_media_key(&RootKey32::new([0u8; 32]), MediaType::Audio, &mut out).unwrap();
    assert_eq!(
        hex::encode(out.expose_secret()),
        "7cd5a674bce4998680c29f06c25bffbaba87493350a24b272d540720a6e9de794c167956b82a5ff8\
         4c3634c328939b8fa7a198e1711194001df31bd566ddbb8d0d8164710351bb913d73a8daed82ea70\
         0909a79f81754ed5525962304942e95ff12839c5e61d86772340891094465ee9"
    );
}

#[test]
fn labels_separate_key_contexts() {
    let root = RootKey32::new([0x5a; 32]);
    let derived: Vec<KeyMaterial> = MediaType::ALL
        .iter()
        .map(|&mt| KeyMaterial::derive(&root, mt).unwrap())
        .collect();

    for (i, a) in derived.iter().enumerate() {
        for b in &derived[i + 1..] {
            assert_ne!(a.iv(), b.iv());
            assert_ne!(a.cipher_key(), b.cipher_key());
            assert_ne!(a.mac_key(), b.mac_key());
        }
    }
}

#[test]
fn derivation_is_deterministic() {
    let root = RootKey32::new([0x11; 32]);
    let a = KeyMaterial::derive(&root, MediaType::Document).unwrap();
    let b = KeyMaterial::derive(&root, MediaType::Document).unwrap();
    assert_eq!(a.iv(), b.iv());
    assert_eq!(a.cipher_key(), b.cipher_key());
    assert_eq!(a.mac_key(), b.mac_key());
    assert_eq!(a.ref_key(), b.ref_key());
}

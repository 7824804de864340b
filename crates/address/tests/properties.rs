use bchaddr::{
    enc::{bases::ALPHABET, EncodingError},
    nets::{LIVENET, NETWORKS, REGTEST, TESTNET},
    prelude::*,
};
use rand::RngCore;

const GOLDEN: &str = "bitcoincash:qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqfnhks603";

const KINDS: [AddressType; 2] = [AddressType::PayToPublicKeyHash, AddressType::PayToScriptHash];

fn random_hash(len: usize) -> Vec<u8> {
    let mut hash = vec![0u8; len];
    rand::thread_rng().fill_bytes(&mut hash);
    hash
}

fn build(hash: &[u8], network: &'static Network, kind: AddressType) -> Address {
    Address::new(AddressData::RawHash(hash), Some(network), Some(kind)).unwrap()
}

#[test]
fn it_round_trips_random_hashes_through_text() {
    for _ in 0..32 {
        let hash = random_hash(20);
        for network in NETWORKS.iter().copied() {
            for kind in KINDS.iter() {
                let address = build(&hash, network, *kind);
                let decoded = Address::from_string(&address.to_string(), None, None).unwrap();
                assert_eq!(decoded.hash(), &hash[..]);
                assert_eq!(decoded.network(), network);
                assert_eq!(decoded.kind(), *kind);
            }
        }
    }
}

#[test]
fn it_round_trips_every_hash_size() {
    for len in [20usize, 24, 28, 32, 40, 48, 56, 64].iter() {
        let hash = random_hash(*len);
        let address = build(&hash, &LIVENET, AddressType::PayToScriptHash);
        let decoded: Address = address.to_string().parse().unwrap();
        assert_eq!(decoded, address);
    }
}

#[test]
fn it_is_case_insensitive() {
    for network in NETWORKS.iter().copied() {
        let address = build(&random_hash(20), network, AddressType::PayToPublicKeyHash);
        let lower = address.to_string();
        let upper = lower.to_uppercase();
        assert_eq!(
            Address::from_string(&lower, None, None).unwrap(),
            Address::from_string(&upper, None, None).unwrap()
        );
    }
}

#[test]
fn it_infers_the_prefix() {
    for network in NETWORKS.iter().copied() {
        for kind in KINDS.iter() {
            let address = build(&random_hash(20), network, *kind);
            let bare = address.to_cash_address(true).unwrap();
            let full = address.to_cash_address(false).unwrap();
            assert_eq!(full, format!("{}:{}", network.prefix, bare));
            assert_eq!(
                Address::from_string(&bare, None, None).unwrap(),
                Address::from_string(&full, None, None).unwrap()
            );
        }
    }
}

#[test]
fn it_agrees_between_binary_and_text() {
    // regtest shares version bytes with testnet, so binary decoding needs the network
    let cases = [(&LIVENET, None), (&TESTNET, None), (&REGTEST, Some(&REGTEST))];
    for case in cases.iter() {
        for kind in KINDS.iter() {
            let address = build(&random_hash(20), case.0, *kind);
            let from_buf = Address::from_buffer(&address.to_buffer().unwrap(), case.1, None).unwrap();
            let from_text =
                Address::from_string(&address.to_cash_address(false).unwrap(), None, None).unwrap();
            assert_eq!(from_buf, address);
            assert_eq!(from_text, address);
        }
    }
}

#[test]
fn it_detects_every_single_character_substitution() {
    let payload = GOLDEN.split(':').nth(1).unwrap();
    for (i, original) in payload.chars().enumerate() {
        for c in ALPHABET.chars() {
            if c == original {
                continue;
            }
            let mut tampered: Vec<char> = payload.chars().collect();
            tampered[i] = c;
            let tampered: String = tampered.into_iter().collect();

            for s in [format!("bitcoincash:{}", tampered), tampered.clone()].iter() {
                match Address::from_string(s, None, None) {
                    Err(AddressError::EncodingError(EncodingError::InvalidChecksum)) => {}
                    other => panic!("expected InvalidChecksum for {}, got {:?}", s, other),
                }
            }
        }
    }
}

#[test]
fn it_rejects_boundary_hash_lengths() {
    for len in [19usize, 21].iter() {
        let hash = vec![0u8; *len];
        assert!(matches!(
            Address::new(AddressData::RawHash(&hash), None, None),
            Err(AddressError::EncodingError(EncodingError::InvalidHashLength(_)))
        ));
        assert!(matches!(
            Address::from_script_hash(&hash, None),
            Err(AddressError::EncodingError(EncodingError::InvalidHashLength(_)))
        ));
    }
    match Address::from_string("bitcoincash:zqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqweyg7usz", None, None) {
        Err(AddressError::EncodingError(EncodingError::InvalidVersionByte(0x10))) => {}
        other => panic!("expected InvalidVersionByte, got {:?}", other),
    }
}

#[test]
fn it_pins_the_zero_hash_golden_value() {
    let address = Address::from_public_key_hash(&[0u8; 20], Some(&LIVENET)).unwrap();
    assert_eq!(address.to_string(), GOLDEN);
    assert_eq!(address.to_cash_address(true).unwrap().len(), 42);

    let decoded = Address::from_string(GOLDEN, None, None).unwrap();
    assert_eq!(decoded.hash(), &[0u8; 20][..]);
    assert_eq!(decoded.kind(), AddressType::PayToPublicKeyHash);
    assert_eq!(decoded.network(), &LIVENET);
}

#[test]
fn it_encodes_scripts_through_the_network_encoders() {
    let hash = random_hash(20);
    let script = Script::p2sh(&hash);

    let address = MainnetEncoder::encode_address(&script).unwrap();
    assert_eq!(MainnetEncoder::decode_address(&address), script);

    let address = RegtestEncoder::encode_address(&script).unwrap();
    assert!(address.to_string().starts_with("bchreg:p"));
    assert_eq!(
        RegtestEncoder::string_to_address(&address.to_string()).unwrap(),
        address
    );
}

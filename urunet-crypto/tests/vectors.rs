///
/// Public API Vector Tests
///
/// Exercises the crate surface the way a binding layer would: the published
/// SHA-0/SHA-1 digests, and RC4 round-trips through two independently keyed
/// ciphers (encrypt with one, decrypt with the other), including the
/// in-place transform and non-ASCII payloads.
///

use rand::RngCore;
use urunet_crypto::{Rc4, derive_stream_key, sha0_hex, sha1_hex};

#[test]
fn sha0_published_vectors() {
    assert_eq!(sha0_hex(b""), "f96cea198ad1dd5617ac084a3d92c6107708c0ef");
    assert_eq!(sha0_hex(b"abc"), "0164b8a914cd2a5e74c4f7ff082c4d97f1edf880");
}

#[test]
fn sha1_published_vectors() {
    assert_eq!(sha1_hex(b""), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    assert_eq!(sha1_hex(b"abc"), "a9993e364706816aba3e25717850c26c9cd0d89d");
}

#[test]
fn rc4_round_trip() {
    let mut key = [0u8; 4];
    rand::thread_rng().fill_bytes(&mut key);

    let mut encrypt = Rc4::new(&key).expect("valid key");
    let mut decrypt = Rc4::new(&key).expect("valid key");
    let mut round_trip = |value: &str| {
        // It's perfectly acceptable to transform in place.
        let mut buf = value.as_bytes().to_vec();
        encrypt.transform_in_place(&mut buf);
        decrypt.transform_in_place(&mut buf);
        String::from_utf8(buf).expect("round trip restored the bytes")
    };

    assert_eq!(round_trip(""), "");
    assert_eq!(round_trip("a"), "a");
    assert_eq!(round_trip("abc"), "abc");
    assert_eq!(round_trip("Боже, Царя храни!"), "Боже, Царя храни!");
}

#[test]
fn rc4_round_trip_long_key() {
    let mut key = [0u8; 200];
    rand::thread_rng().fill_bytes(&mut key);

    let mut encrypt = Rc4::new(&key).expect("valid key");
    let mut decrypt = Rc4::new(&key).expect("valid key");
    let message = b"an arbitrary message of no particular length";
    assert_eq!(decrypt.transform(&encrypt.transform(message)), message);
}

#[test]
fn session_key_drives_the_cipher() {
    // Both peers assemble the same 7-byte key from the handshake seeds and
    // can then speak the same keystream.
    let mut client_seed = [0u8; 64];
    rand::thread_rng().fill_bytes(&mut client_seed);
    let mut server_seed = [0u8; 7];
    rand::thread_rng().fill_bytes(&mut server_seed);

    let key = derive_stream_key(&client_seed, &server_seed);
    let mut client = Rc4::new(&key).expect("valid key");
    let mut server = Rc4::new(&key).expect("valid key");
    let message = "Боже, Царя храни!".as_bytes();
    assert_eq!(server.transform(&client.transform(message)), message);
}

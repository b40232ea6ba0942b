//!
//! Account Authentication Helpers
//!
//! The hashing the auth server expects during login, layered on the digest
//! engine. Two schemes exist:
//!
//! - Challenge accounts (most of them) never send the password hash itself.
//!   The client hashes password and account name with SHA-0, then binds
//!   that hash to a pair of per-connection challenge values with a second
//!   SHA-0 pass.
//! - GameTap and MagiQuest accounts predate the challenge scheme and send a
//!   plain SHA-1 of the UTF-8 password.
//!
//! Also provides the 7-byte RC4 session key assembly both peers perform
//! from their key-exchange seed bytes after the NetCli handshake.
//!

use crate::sha::{Digest, sha0, sha1};

/// Whether `account` uses the SHA-0 challenge scheme.
///
/// True when the name contains an `@` not immediately followed by `gametap`
/// or `magiquest`; those two legacy domains use the plain SHA-1 scheme.
pub fn uses_challenge_hash(account: &str) -> bool {
    account.match_indices('@').any(|(at, _)| {
        let domain = &account[at + 1..];
        !domain.starts_with("gametap") && !domain.starts_with("magiquest")
    })
}

/// Hash `password` for `account` according to the account's scheme.
///
/// Challenge accounts hash the password and the lowercased account name as
/// null-terminated UTF-16LE fields with SHA-0. The trailing character of
/// each field is dropped before hashing, reproducing the original client's
/// fencepost bug; every server implementation expects it.
pub fn password_hash(account: &str, password: &str) -> Digest {
    if uses_challenge_hash(account) {
        let mut buf = Vec::new();
        push_utf16_z(&mut buf, drop_last(password));
        push_utf16_z(&mut buf, &drop_last(account).to_lowercase());
        sha0(&buf)
    } else {
        sha1(password.as_bytes())
    }
}

/// Bind a password hash to the per-connection challenge values.
///
/// SHA-0 over the client challenge, the server challenge (both as
/// little-endian u32s, matching the wire fields), and the password hash's
/// canonical 20 bytes.
pub fn challenge_hash(
    client_challenge: u32,
    server_challenge: u32,
    password_hash: &Digest,
) -> Digest {
    let mut buf = Vec::with_capacity(8 + Digest::SIZE);
    buf.extend_from_slice(&client_challenge.to_le_bytes());
    buf.extend_from_slice(&server_challenge.to_le_bytes());
    buf.extend_from_slice(&password_hash.to_bytes());
    sha0(&buf)
}

/// Assemble the 7-byte RC4 session key from the key-exchange seeds.
///
/// Byte i is `client_seed[i] ^ server_seed[i]` where the client seed covers
/// position i, otherwise `server_seed[i]`. Client seeds are normally 64
/// bytes; shorter seeds are tolerated the same way the original client
/// tolerates them.
pub fn derive_stream_key(client_seed: &[u8], server_seed: &[u8; 7]) -> [u8; 7] {
    let mut key = *server_seed;
    for (slot, &cli) in key.iter_mut().zip(client_seed) {
        *slot ^= cli;
    }
    key
}

/// `value` minus its final character; empty input stays empty.
fn drop_last(value: &str) -> &str {
    let mut chars = value.chars();
    chars.next_back();
    chars.as_str()
}

fn push_utf16_z(buf: &mut Vec<u8>, value: &str) {
    for unit in value.encode_utf16() {
        buf.extend_from_slice(&unit.to_le_bytes());
    }
    buf.extend_from_slice(&[0, 0]);
}

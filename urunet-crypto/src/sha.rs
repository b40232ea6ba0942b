//!
//! SHA-0 and SHA-1 Message Digests
//!
//! One-shot hashing over a byte slice, producing the 160-bit digests the
//! auth protocol exchanges. The two algorithms share their padding,
//! schedule, and compression structure; SHA-1 rotates each expanded
//! schedule word left by one bit and that is the only difference. SHA-0 is
//! kept for compatibility with legacy shards, weaknesses and all.
//!
//! Each algorithm has two variants:
//! - `sha0(data)` / `sha1(data)` — raw `Digest` (five 32-bit words)
//! - `sha0_hex(data)` / `sha1_hex(data)` — 40-char lowercase hex string
//!

use std::fmt;

const BLOCK_SIZE: usize = 64;

const INIT: [u32; 5] = [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0];

/// A 160-bit message digest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Digest([u32; 5]);

impl Digest {
    /// Length of the serialized digest in bytes.
    pub const SIZE: usize = 20;

    /// The five accumulator words.
    pub fn words(&self) -> [u32; 5] {
        self.0
    }

    /// Canonical serialization: each word big-endian, in order.
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        for (chunk, word) in bytes.chunks_exact_mut(4).zip(self.0) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        bytes
    }

    /// Lowercase hex form of the canonical serialization.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in self.0 {
            write!(f, "{word:08x}")?;
        }
        Ok(())
    }
}

/// Compute the SHA-0 digest of `data`.
pub fn sha0(data: &[u8]) -> Digest {
    digest::<false>(data)
}

/// Compute the SHA-1 digest of `data`.
pub fn sha1(data: &[u8]) -> Digest {
    digest::<true>(data)
}

/// SHA-0 digest of `data` as a lowercase hex string.
pub fn sha0_hex(data: &[u8]) -> String {
    sha0(data).to_hex()
}

/// SHA-1 digest of `data` as a lowercase hex string.
pub fn sha1_hex(data: &[u8]) -> String {
    sha1(data).to_hex()
}

/// Shared digest core. `ROTATE_SCHEDULE` selects SHA-1's schedule rotation
/// at compile time; everything else is common to both algorithms.
fn digest<const ROTATE_SCHEDULE: bool>(data: &[u8]) -> Digest {
    // Pad to a whole number of 64-byte blocks: a 0x80 byte, zeros, then the
    // message length in bits as a big-endian u64 in the final eight bytes.
    let padded_len = (data.len() + 1 + 8).div_ceil(BLOCK_SIZE) * BLOCK_SIZE;
    let mut padded = vec![0u8; padded_len];
    padded[..data.len()].copy_from_slice(data);
    padded[data.len()] = 0x80;
    let bit_len = data.len() as u64 * 8;
    padded[padded_len - 8..].copy_from_slice(&bit_len.to_be_bytes());

    let mut hash = INIT;
    for block in padded.chunks_exact(BLOCK_SIZE) {
        let mut w = [0u32; 80];
        for i in 0..16 {
            w[i] = u32::from_be_bytes([
                block[i * 4],
                block[i * 4 + 1],
                block[i * 4 + 2],
                block[i * 4 + 3],
            ]);
        }
        for i in 16..80 {
            let word = w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16];
            w[i] = if ROTATE_SCHEDULE { word.rotate_left(1) } else { word };
        }
        compress(&mut hash, &w);
    }
    Digest(hash)
}

fn compress(hash: &mut [u32; 5], w: &[u32; 80]) {
    let [mut a, mut b, mut c, mut d, mut e] = *hash;
    for (i, &word) in w.iter().enumerate() {
        let (f, k) = match i {
            0..=19 => ((b & c) | (!b & d), 0x5A827999),
            20..=39 => (b ^ c ^ d, 0x6ED9EBA1),
            40..=59 => ((b & c) | (b & d) | (c & d), 0x8F1BBCDC),
            _ => (b ^ c ^ d, 0xCA62C1D6),
        };
        let temp = a
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(k)
            .wrapping_add(word);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }
    hash[0] = hash[0].wrapping_add(a);
    hash[1] = hash[1].wrapping_add(b);
    hash[2] = hash[2].wrapping_add(c);
    hash[3] = hash[3].wrapping_add(d);
    hash[4] = hash[4].wrapping_add(e);
}

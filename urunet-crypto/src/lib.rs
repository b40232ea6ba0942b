//!
//! urunet-crypto - Legacy Cryptographic Primitives
//!
//! This crate provides the cryptographic algorithms the MOULa-era Uru
//! servers speak on the wire:
//!
//! - `sha`: SHA-0 and SHA-1 message digests (raw words + hex string forms)
//! - `rc4`: the RC4 stream cipher used for NetCli connection encryption
//! - `auth`: account password hashing, login challenge hashing, and
//!   session key derivation built on the digests
//! - `error`: the crate error type
//!
//! None of these algorithms are fit for new designs. SHA-0 in particular is
//! implemented exactly as historically defined, weaknesses included,
//! because the protocol demands it. Digest functions are pure and safe to
//! call from any number of threads; an `Rc4` instance is a single-owner
//! mutable resource.
//!

pub mod auth;
pub mod error;
pub mod rc4;
pub mod sha;

pub use auth::*;
pub use error::*;
pub use rc4::*;
pub use sha::*;

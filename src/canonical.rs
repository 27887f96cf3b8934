//! Canonical hashing of serializable parameters.
//!
//! Values are serialized as JSON straight into an xxh64 hasher, so the hash
//! depends only on field order and values. Hashed types must not contain
//! `HashMap`s.

use std::io;

use serde::Serialize;
use xxhash_rust::xxh64::Xxh64;

/// Feeds serialized bytes into the hasher without buffering them.
struct HashWriter(Xxh64);

impl io::Write for HashWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Hash a value's canonical JSON form, as 16 hex digits.
///
/// # Panics
///
/// Panics if `T`'s `Serialize` impl fails, which plain structs and enums of
/// strings and integers never do.
pub(crate) fn canonical_hash_hex<T: Serialize>(value: &T) -> String {
    let mut writer = HashWriter(Xxh64::new(0));
    serde_json::to_writer(&mut writer, value).expect("Canonical serialization failed");
    format!("{:016x}", writer.0.digest())
}

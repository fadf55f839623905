//! Streaming hash computation.

use sha1::{Digest, Sha1};

use crate::oid::DIGEST_LEN;
use crate::ObjectId;

/// Streaming hash computation over object content.
///
/// Data can be fed incrementally with [`update`](Hasher::update) or through
/// the [`std::io::Write`] implementation, then finalised into an
/// [`ObjectId`]. The primitive (SHA-1) is an implementation detail; equal
/// content always yields an equal identifier.
pub struct Hasher {
    inner: Sha1,
}

impl Hasher {
    /// Create a new hasher.
    pub fn new() -> Self {
        Self { inner: Sha1::new() }
    }

    /// Feed data into the hasher.
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Finalize and return the ObjectId.
    pub fn finalize(self) -> ObjectId {
        let result = self.inner.finalize();
        let mut bytes = [0u8; DIGEST_LEN];
        bytes.copy_from_slice(result.as_slice());
        ObjectId::from_digest(bytes)
    }

    /// Convenience: hash data in one call.
    pub fn digest(data: &[u8]) -> ObjectId {
        let mut h = Self::new();
        h.update(data);
        h.finalize()
    }
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::io::Write for Hasher {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_content_digest() {
        // The well-known SHA-1 of zero bytes.
        assert_eq!(
            Hasher::digest(b"").to_hex(),
            "da39a3ee5e6b4b0d3255bfef95601890afd80709"
        );
    }

    #[test]
    fn incremental_equals_oneshot() {
        let mut h = Hasher::new();
        h.update(b"Some ");
        h.update(b"text");
        assert_eq!(h.finalize(), Hasher::digest(b"Some text"));
    }

    proptest! {
        #[test]
        fn equal_content_equal_hash(data: Vec<u8>) {
            prop_assert_eq!(Hasher::digest(&data), Hasher::digest(&data));
        }

        #[test]
        fn hex_roundtrip_via_digest(data: Vec<u8>) {
            let oid = Hasher::digest(&data);
            prop_assert_eq!(ObjectId::from_hex(&oid.to_hex()).unwrap(), oid);
        }
    }
}

//! Canonical byte encoding of filter elements
//!
//! A value is encoded as the element type's name, a zero separator, then every
//! byte its `Hash` implementation feeds to a hasher. Equal values write equal
//! bytes, and the type prefix keeps encodings of different element types apart.
//! A borrowed form `Q` of element type `T` encodes like `T` itself, since
//! `Borrow` requires both to hash identically.

use std::any::type_name;
use std::hash::{Hash, Hasher};

/// `Hasher` that records the bytes written to it instead of mixing them
#[derive(Default)]
struct KeyBytes {
    buf: Vec<u8>,
}

impl Hasher for KeyBytes {
    fn write(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    // Never consulted; digests are computed over the collected bytes.
    fn finish(&self) -> u64 {
        0
    }
}

/// Serialize `value`, an element of type `T` or its borrowed form, to the
/// byte sequence fed to the hash family
pub fn encode_key<T, Q>(value: &Q) -> Vec<u8>
where
    T: ?Sized,
    Q: Hash + ?Sized,
{
    let mut key = KeyBytes::default();
    key.write(type_name::<T>().as_bytes());
    key.write_u8(0);
    value.hash(&mut key);
    key.buf
}

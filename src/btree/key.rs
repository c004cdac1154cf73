//! Fixed-width index keys and the comparator abstraction.

use std::cmp::Ordering;
use std::fmt;

/// Opaque fixed-width index key.
///
/// Keys are stored verbatim in the page's packed array; ordering comes
/// only from the [`Comparator`] the index was configured with, never
/// from the bytes themselves. Each index picks one width at
/// configuration time; 4, 8, 16, 32, and 64 bytes are the widths used
/// in practice, all instantiations of this one generic type.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct GenericKey<const W: usize> {
    bytes: [u8; W],
}

impl<const W: usize> GenericKey<W> {
    /// Width of the key in bytes.
    pub const WIDTH: usize = W;

    /// Builds a key from exactly `W` bytes.
    pub fn from_bytes(bytes: [u8; W]) -> Self {
        Self { bytes }
    }

    /// Builds a key holding `value` big-endian at the front, zero
    /// padded. Numeric order then agrees with [`LexicalComparator`]
    /// order, which the tests and benchmarks rely on. Widths below 8
    /// keep the low bytes of `value`.
    pub fn from_u64(value: u64) -> Self {
        let mut bytes = [0u8; W];
        let raw = value.to_be_bytes();
        let take = W.min(raw.len());
        bytes[..take].copy_from_slice(&raw[raw.len() - take..]);
        Self { bytes }
    }

    /// Borrows the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; W] {
        &self.bytes
    }
}

impl<const W: usize> From<[u8; W]> for GenericKey<W> {
    fn from(bytes: [u8; W]) -> Self {
        Self { bytes }
    }
}

impl<const W: usize> fmt::Debug for GenericKey<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.bytes {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// Total order over keys, supplied by the index configuration.
///
/// Implementations must be strict total orders and must stay
/// consistent across every call made for one tree instance; the pages
/// persist nothing about the order itself.
pub trait Comparator<K> {
    /// Compares `a` against `b`.
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// Byte-lexicographic comparator for order-preserving key encodings.
#[derive(Copy, Clone, Debug, Default)]
pub struct LexicalComparator;

impl<const W: usize> Comparator<GenericKey<W>> for LexicalComparator {
    fn compare(&self, a: &GenericKey<W>, b: &GenericKey<W>) -> Ordering {
        a.as_bytes().cmp(b.as_bytes())
    }
}

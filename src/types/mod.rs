//! Identifier newtypes and the crate-wide error type.

use std::fmt;

/// Identifier of one fixed-size page in the backing file.
///
/// The raw value 0 is reserved: on disk it encodes the "no page"
/// sentinel used by parent and sibling links, so real pages are
/// numbered from 1.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct PageId(pub u64);

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Location of a data record in the record storage outside the index.
///
/// The index copies locators verbatim and never dereferences them.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct RecordId {
    /// Page of the record store holding the record.
    pub page: PageId,
    /// Slot number within that page.
    pub slot: u32,
}

impl RecordId {
    /// Packed on-page width: page id (u64) followed by slot (u32).
    pub const ENCODED_LEN: usize = 12;

    /// Builds a locator from its parts.
    pub fn new(page: PageId, slot: u32) -> Self {
        Self { page, slot }
    }

    /// Writes the packed big-endian form into `dst`, which must be
    /// exactly [`ENCODED_LEN`](Self::ENCODED_LEN) bytes.
    pub fn encode(&self, dst: &mut [u8]) {
        dst[0..8].copy_from_slice(&self.page.0.to_be_bytes());
        dst[8..12].copy_from_slice(&self.slot.to_be_bytes());
    }

    /// Reads the packed form back from `src`.
    pub fn decode(src: &[u8]) -> Self {
        let page = PageId(u64::from_be_bytes(src[0..8].try_into().unwrap()));
        let slot = u32::from_be_bytes(src[8..12].try_into().unwrap());
        Self { page, slot }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.page, self.slot)
    }
}

/// Errors surfaced when attaching to or initializing page memory.
///
/// Operations on an attached page report no recoverable errors at all:
/// contract violations there abort with a panic, and absence of a key
/// is an ordinary return value.
#[derive(thiserror::Error, Debug)]
pub enum TarnError {
    /// On-disk bytes do not describe a well-formed page.
    #[error("corruption: {0}")]
    Corruption(&'static str),
    /// A caller-supplied configuration cannot be represented.
    #[error("invalid argument: {0}")]
    Invalid(&'static str),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, TarnError>;

use super::Reference;

pub const TRAILER: &[u8] = b"trailer";
pub const K_SIZE: &[u8] = b"Size";
pub const K_ROOT: &[u8] = b"Root";

#[derive(Debug, Clone, PartialEq)]
pub struct Trailer {
    /// Number of entries in the xref table, one more than the highest object
    /// number.
    pub size: usize,

    /// Reference to the document catalog.
    pub root: Reference,
}

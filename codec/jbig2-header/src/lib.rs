//! Reader for the fixed-layout header of a JBIG2 embedded page stream.
//!
//! A page stream produced by a JBIG2 encoder in "PDF mode" starts with the
//! page information segment. Its segment header occupies the first 11 bytes,
//! followed by the page width and height as big-endian `u32` values.
//!
//! ```text
//! 0..4    segment number
//! 4       segment header flags (low 6 bits: segment type)
//! 5       referred-to segment count and retention flags
//! 6       page association
//! 7..11   segment data length
//! 11..15  page width in pixels
//! 15..19  page height in pixels
//! ```

use nom::{bytes, number, IResult};
use thiserror::Error;

/// Number of bytes that have to be present to read the page dimensions.
pub const HEADER_LEN: usize = 19;

/// Segment type of a page information segment.
pub const PAGE_INFORMATION: u8 = 48;

const SEGMENT_TYPE_MASK: u8 = 0x3f;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    #[error("page header truncated: need {} bytes, got {len}", HEADER_LEN)]
    Truncated { len: usize },

    #[error("invalid page header: {0:?}")]
    Nom(nom::error::ErrorKind),
}

impl From<nom::Err<nom::error::Error<&[u8]>>> for HeaderError {
    fn from(err: nom::Err<nom::error::Error<&[u8]>>) -> Self {
        match err {
            nom::Err::Error(e) | nom::Err::Failure(e) => HeaderError::Nom(e.code),
            nom::Err::Incomplete(_) => HeaderError::Nom(nom::error::ErrorKind::Eof),
        }
    }
}

/// Values read from the start of a page stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageHeader {
    pub segment_number: u32,
    pub flags: u8,
    pub width: u32,
    pub height: u32,
}

impl PageHeader {
    /// The segment type encoded in the low bits of the flags byte.
    pub fn segment_type(&self) -> u8 {
        self.flags & SEGMENT_TYPE_MASK
    }

    pub fn is_page_information(&self) -> bool {
        self.segment_type() == PAGE_INFORMATION
    }
}

fn page_header(input: &[u8]) -> IResult<&[u8], PageHeader> {
    let (remainder, segment_number) = number::complete::be_u32(input)?;
    let (remainder, flags) = number::complete::u8(remainder)?;
    // referred-to segments, page association and data length
    let (remainder, _) = bytes::complete::take(6usize)(remainder)?;
    let (remainder, width) = number::complete::be_u32(remainder)?;
    let (remainder, height) = number::complete::be_u32(remainder)?;

    Ok((
        remainder,
        PageHeader {
            segment_number,
            flags,
            width,
            height,
        },
    ))
}

/// Parse the page header at the start of `input`.
///
/// The layout is trusted as is: the segment type is not required to be a
/// page information segment, a mismatch is only logged.
pub fn parse(input: &[u8]) -> Result<PageHeader, HeaderError> {
    if input.len() < HEADER_LEN {
        return Err(HeaderError::Truncated { len: input.len() });
    }

    let (_, header) = page_header(input)?;
    if !header.is_page_information() {
        log::debug!(
            "segment {} has type {}, expected page information",
            header.segment_number,
            header.segment_type()
        );
    }

    Ok(header)
}

/// Width and height of the page stored in `input`.
pub fn dimensions(input: &[u8]) -> Result<(u32, u32), HeaderError> {
    parse(input).map(|h| (h.width, h.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(width: u32, height: u32) -> Vec<u8> {
        let mut data = vec![0, 0, 0, 0, 0x30, 0, 1, 0, 0, 0, 19];
        data.extend_from_slice(&width.to_be_bytes());
        data.extend_from_slice(&height.to_be_bytes());
        data.extend_from_slice(b"trailing segment data");
        data
    }

    #[test]
    fn reads_dimensions() {
        assert_eq!(dimensions(&page(2, 3)), Ok((2, 3)));
        assert_eq!(dimensions(&page(2480, 3508)), Ok((2480, 3508)));
    }

    #[test]
    fn reads_segment_header() {
        let header = parse(&page(1, 1)).unwrap();
        assert_eq!(header.segment_number, 0);
        assert_eq!(header.segment_type(), PAGE_INFORMATION);
        assert!(header.is_page_information());
    }

    #[test]
    fn arbitrary_prefix_is_accepted() {
        let mut data = vec![0xffu8; 11];
        data.extend_from_slice(&[0, 0, 0, 2, 0, 0, 0, 3]);
        let header = parse(&data).unwrap();
        assert_eq!((header.width, header.height), (2, 3));
        assert!(!header.is_page_information());
    }

    #[test]
    fn exact_length() {
        let data = &page(7, 9)[..HEADER_LEN];
        assert_eq!(dimensions(data), Ok((7, 9)));
    }

    #[test]
    fn truncated() {
        let data = &page(7, 9)[..HEADER_LEN - 1];
        assert_eq!(dimensions(data), Err(HeaderError::Truncated { len: 18 }));
        assert_eq!(dimensions(&[]), Err(HeaderError::Truncated { len: 0 }));
    }
}

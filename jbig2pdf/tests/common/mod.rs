#![allow(dead_code)]

use std::{fs, path::Path};

use nom::{branch, bytes, character, combinator, multi, sequence, IResult};

/// Page stream with the given dimensions behind an 11 byte segment header.
pub fn page_data(width: u32, height: u32) -> Vec<u8> {
    let mut data = vec![0, 0, 0, 1, 0x30, 0, 1, 0, 0, 0, 19];
    data.extend_from_slice(&width.to_be_bytes());
    data.extend_from_slice(&height.to_be_bytes());
    data.extend_from_slice(&[0x80, 0x00, 0xff, b'\n', b'%']);
    data
}

pub fn write_file(dir: &Path, name: &str, data: &[u8]) {
    fs::write(dir.join(name), data).unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XrefTableEntry {
    pub byte_offset: usize,
    pub generation: u32,
    pub free: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XrefSection {
    pub first: u32,
    pub entries: Vec<XrefTableEntry>,
    pub size: u32,
    pub root: (u32, u32),
}

fn xref_entry(input: &[u8]) -> IResult<&[u8], XrefTableEntry> {
    let (remainder, offset) = character::complete::u64(input)?;
    let (remainder, _) = bytes::complete::tag(b" ")(remainder)?;
    let (remainder, generation) = character::complete::u32(remainder)?;
    let (remainder, _) = bytes::complete::tag(b" ")(remainder)?;
    let (remainder, free) = branch::alt((
        combinator::value(false, bytes::complete::tag(b"n")),
        combinator::value(true, bytes::complete::tag(b"f")),
    ))(remainder)?;
    // entries are exactly 20 bytes: a space and a newline follow the type
    let (remainder, _) = bytes::complete::tag(b" \n")(remainder)?;

    Ok((
        remainder,
        XrefTableEntry {
            byte_offset: offset as usize,
            generation,
            free,
        },
    ))
}

fn xref_section(input: &[u8]) -> IResult<&[u8], XrefSection> {
    let (remainder, _) = bytes::complete::tag(b"xref\n")(input)?;
    let (remainder, (first, _, count, _)) = sequence::tuple((
        character::complete::u32,
        bytes::complete::tag(b" "),
        character::complete::u32,
        character::complete::line_ending,
    ))(remainder)?;
    let (remainder, entries) = multi::count(xref_entry, count as usize)(remainder)?;
    let (remainder, _) = bytes::complete::tag(b"trailer\n<< /Size ")(remainder)?;
    let (remainder, size) = character::complete::u32(remainder)?;
    let (remainder, _) = bytes::complete::tag(b"\n/Root ")(remainder)?;
    let (remainder, root) = character::complete::u32(remainder)?;
    let (remainder, _) = bytes::complete::tag(b" ")(remainder)?;
    let (remainder, root_gen) = character::complete::u32(remainder)?;
    let (remainder, _) = bytes::complete::tag(b" R >>\n")(remainder)?;

    Ok((
        remainder,
        XrefSection {
            first,
            entries,
            size,
            root: (root, root_gen),
        },
    ))
}

fn startxref_tail(input: &[u8]) -> IResult<&[u8], usize> {
    let (remainder, _) = bytes::complete::tag(b"startxref\n")(input)?;
    let (remainder, pos) = character::complete::u64(remainder)?;
    let (remainder, _) = bytes::complete::tag(b"\n%%EOF")(remainder)?;
    let (remainder, _) = combinator::eof(remainder)?;
    Ok((remainder, pos as usize))
}

/// Read the xref section the way a reader would: find `startxref` at the
/// end of the file, jump to the offset it names and parse from there.
pub fn read_xref(pdf: &[u8]) -> XrefSection {
    let tail_start = pdf
        .windows(b"startxref".len())
        .rposition(|w| w == b"startxref")
        .expect("startxref keyword");
    let (_, start) = startxref_tail(&pdf[tail_start..]).expect("valid startxref tail");
    let (remainder, section) = xref_section(&pdf[start..]).expect("valid xref section");
    assert_eq!(&pdf[tail_start..], remainder, "xref section runs into startxref");
    section
}

/// Body of the object `id` as located through the xref table.
pub fn object_at<'a>(pdf: &'a [u8], section: &XrefSection, id: u32) -> &'a [u8] {
    let entry = &section.entries[(id - section.first) as usize];
    assert!(!entry.free);
    let body = &pdf[entry.byte_offset..];
    let header = format!("{} 0 obj\n", id);
    assert!(
        body.starts_with(header.as_bytes()),
        "object {} not found at {}",
        id,
        entry.byte_offset
    );
    let end = body
        .windows(b"endobj\n".len())
        .position(|w| w == b"endobj\n")
        .expect("endobj");
    &body[header.len()..end]
}

/// Value of `/key` in a rendered dictionary, up to the end of the line.
pub fn dict_value(body: &[u8], key: &str) -> Option<String> {
    let text = String::from_utf8_lossy(body);
    let needle = format!("/{} ", key);
    text.lines()
        .find_map(|line| line.strip_prefix("<< ").unwrap_or(line).strip_prefix(needle.as_str()).map(str::to_owned))
}

use crate::{
    pdf::{
        trailer::{K_ROOT, K_SIZE, TRAILER},
        xref::{FreeObject, UsedObject, XrefEntry},
        Document, Name, Trailer, Xref,
    },
    simple_encode::SimpleEncoder,
    writer::{ChunkWriter, Encoder, Writer},
};

pub const HEADER: &[u8] = b"%PDF-1.4";
pub const XREF: &[u8] = b"xref";
pub const STARTXREF: &[u8] = b"startxref";
pub const EOF_MARKER: &[u8] = b"%%EOF";

/// Result of writing a document.
#[derive(Debug, Clone, PartialEq)]
pub struct Written {
    pub xref: Xref,
    /// Position of the `xref` keyword.
    pub start_xref: usize,
}

/// Write header, objects, xref table and trailer as newline separated chunks.
///
/// The xref offsets are the positions the chunk writer reports for the
/// `N 0 obj` lines.
pub(crate) fn write_document(doc: &Document, writer: &mut dyn Writer) -> Written {
    log::trace!("write PDF document with {} objects", doc.len());
    if !doc.has_sequential_ids() {
        log::warn!("object numbers are not 1..={} in order, the xref table will not match", doc.len());
    }

    let mut chunks = ChunkWriter::new(writer);
    chunks.chunk(HEADER);

    let mut entries = Vec::<XrefEntry>::with_capacity(doc.len() + 1);
    entries.push(FreeObject::head().into());
    for obj in doc.objects() {
        let byte_offset = chunks.chunk(format!("{} 0 obj", obj.id()).as_bytes());
        entries.push(
            UsedObject {
                number: obj.id(),
                byte_offset,
                generation: 0,
            }
            .into(),
        );
        chunks.chunk_with(|w| SimpleEncoder::write_to(obj, w));
    }

    let xref = Xref::from(entries);
    let start_xref = chunks.chunk_with(|w| SimpleEncoder::write_to(&xref, w));

    let trailer = Trailer {
        size: xref.len(),
        root: doc.root(),
    };
    chunks.chunk_with(|w| SimpleEncoder::write_to(&trailer, w));
    chunks.chunk(STARTXREF);
    chunks.chunk(start_xref.to_string().as_bytes());
    chunks.chunk(EOF_MARKER);

    Written { xref, start_xref }
}

impl Encoder<Document> for SimpleEncoder {
    fn write_to(doc: &Document, writer: &mut dyn Writer) {
        write_document(doc, writer);
    }
}

fn write_entry(entry: &XrefEntry, writer: &mut dyn Writer) {
    let line = match entry {
        XrefEntry::Free(FreeObject {
            generation, next_free, ..
        }) => format!("{:010} {:05} f ", next_free, generation),
        XrefEntry::Used(UsedObject {
            byte_offset, generation, ..
        }) => format!("{:010} {:05} n ", byte_offset, generation),
    };
    writer.write(line.as_bytes());
}

/// Single subsection starting at object 0. Lines are separated, not
/// terminated, by a newline.
impl Encoder<Xref> for SimpleEncoder {
    fn write_to(xref: &Xref, writer: &mut dyn Writer) {
        log::trace!("write XRef");
        writer.write(XREF);
        writer.write(b"\n0 ");
        writer.write(xref.len().to_string().as_bytes());
        for entry in xref.entries() {
            writer.write(b"\n");
            write_entry(entry, writer);
        }
    }
}

impl Encoder<Trailer> for SimpleEncoder {
    fn write_to(trailer: &Trailer, writer: &mut dyn Writer) {
        log::trace!("write Trailer");
        writer.write(TRAILER);
        writer.write(b"\n<< ");
        Self::write_to(&Name::from(K_SIZE), writer);
        writer.write(b" ");
        writer.write(trailer.size.to_string().as_bytes());
        writer.write(b"\n");
        Self::write_to(&Name::from(K_ROOT), writer);
        writer.write(b" ");
        Self::write_to(&trailer.root, writer);
        writer.write(b" >>");
    }
}

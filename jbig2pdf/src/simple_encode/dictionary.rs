use crate::{
    pdf::Dictionary,
    writer::{Encoder, Writer},
};

use super::SimpleEncoder;

/// Top level dictionary of an object, one entry per line.
impl Encoder<Dictionary> for SimpleEncoder {
    fn write_to(d: &Dictionary, writer: &mut dyn Writer) {
        writer.write(b"<< ");
        for (key, value) in d.iter() {
            Self::write_to(key, writer);
            writer.write(b" ");
            Self::write_to(value, writer);
            writer.write(b"\n");
        }
        writer.write(b">>\n");
    }
}

/// Dictionary used as a value, on a single line.
pub(crate) fn write_inline(d: &Dictionary, writer: &mut dyn Writer) {
    writer.write(b"<<");
    for (key, value) in d.iter() {
        writer.write(b" ");
        SimpleEncoder::write_to(key, writer);
        writer.write(b" ");
        SimpleEncoder::write_to(value, writer);
    }
    writer.write(b" >>");
}

use crate::{
    pdf::Object,
    writer::{Encoder, Writer},
};

use super::SimpleEncoder;

const START_STREAM: &[u8] = b"stream\n";
const END_STREAM: &[u8] = b"\nendstream\n";
const END_OBJECT: &[u8] = b"endobj\n";

/// Body of an indirect object, everything after the `N 0 obj` line.
impl Encoder<Object> for SimpleEncoder {
    fn write_to(o: &Object, writer: &mut dyn Writer) {
        log::trace!("write object {}", o.id());
        Self::write_to(o.attributes(), writer);
        if let Some(data) = o.stream() {
            writer.write(START_STREAM);
            writer.write(data);
            writer.write(END_STREAM);
        }
        writer.write(END_OBJECT);
    }
}

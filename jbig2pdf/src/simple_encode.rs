use crate::{
    pdf::{Reference, Value},
    writer::{Encoder, Writer},
};

pub(crate) mod dictionary;
pub(crate) mod name;
pub(crate) mod object;
pub(crate) mod section;

/// Writes the model types the way they appear in the file.
pub struct SimpleEncoder;

impl Encoder<Reference> for SimpleEncoder {
    fn write_to(r: &Reference, writer: &mut dyn Writer) {
        writer.write(r.index.to_string().as_bytes());
        writer.write(b" ");
        writer.write(r.generation.to_string().as_bytes());
        writer.write(b" R");
    }
}

impl Encoder<[Value]> for SimpleEncoder {
    fn write_to(array: &[Value], writer: &mut dyn Writer) {
        writer.write(b"[");
        for (i, item) in array.iter().enumerate() {
            if i != 0 {
                writer.write(b" ");
            }
            Self::write_to(item, writer);
        }
        writer.write(b"]");
    }
}

impl Encoder<Value> for SimpleEncoder {
    fn write_to(value: &Value, writer: &mut dyn Writer) {
        match value {
            Value::Raw(raw) => writer.write(raw.as_bytes()),
            Value::Integer(i) => writer.write(i.to_string().as_bytes()),
            Value::Name(n) => Self::write_to(n, writer),
            Value::Reference(r) => Self::write_to(r, writer),
            Value::Array(a) => Self::write_to(&a[..], writer),
            Value::Dictionary(d) => dictionary::write_inline(d, writer),
        }
    }
}

use super::{document::K_LENGTH, Bytes, Dictionary, IdAllocator, Name, Reference, Value};
use crate::{simple_encode::SimpleEncoder, writer::Encoder};

/// A numbered PDF object: a dictionary with an optional stream.
///
/// Objects with a stream always carry a `Length` entry equal to the number of
/// stream bytes. It is set whenever the stream is set.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    id: u32,
    attributes: Dictionary,
    stream: Option<Bytes>,
}

impl Object {
    /// Create an object without stream and give it the next number of `ids`.
    pub fn new(ids: &IdAllocator, attributes: Dictionary) -> Self {
        Self {
            id: ids.next_id(),
            attributes,
            stream: None,
        }
    }

    /// Create a stream object and give it the next number of `ids`.
    pub fn with_stream(ids: &IdAllocator, attributes: Dictionary, data: impl Into<Bytes>) -> Self {
        let mut obj = Self::new(ids, attributes);
        obj.set_stream(data);
        obj
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn reference(&self) -> Reference {
        Reference::new(self.id)
    }

    pub fn attributes(&self) -> &Dictionary {
        &self.attributes
    }

    /// Mutable access to the dictionary.
    ///
    /// The `Length` entry of stream objects must be left alone.
    pub fn attributes_mut(&mut self) -> &mut Dictionary {
        &mut self.attributes
    }

    pub fn get(&self, name: &[u8]) -> Option<&Value> {
        self.attributes.get(name)
    }

    pub fn stream(&self) -> Option<&Bytes> {
        self.stream.as_ref()
    }

    /// Replace the stream data and update `Length`.
    pub fn set_stream(&mut self, data: impl Into<Bytes>) {
        let data = data.into();
        self.attributes.set(Name::from(K_LENGTH), data.len());
        self.stream = Some(data);
    }

    /// The object body: dictionary, stream and `endobj`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(SimpleEncoder::encoded_len(self));
        SimpleEncoder::write_to(self, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_construction_order() {
        let ids = IdAllocator::new();
        let a = Object::new(&ids, Dictionary::new());
        let b = Object::with_stream(&ids, Dictionary::new(), b"data".to_vec());
        let c = Object::new(&ids, Dictionary::new());
        assert_eq!((a.id(), b.id(), c.id()), (1, 2, 3));
        assert_eq!(b.reference(), Reference::new(2));
    }

    #[test]
    fn stream_sets_length() {
        let ids = IdAllocator::new();
        let obj = Object::with_stream(&ids, Dictionary::new(), vec![0u8; 10]);
        assert_eq!(obj.get(K_LENGTH), Some(&Value::Integer(10)));
        assert_eq!(obj.stream().map(|s| s.len()), Some(10));
    }

    #[test]
    fn stale_length_is_replaced() {
        let ids = IdAllocator::new();
        let attributes = Dictionary::new().with("Length", 999u32).with("Filter", Name::from("JBIG2Decode"));
        let mut obj = Object::with_stream(&ids, attributes, vec![1u8; 4]);
        assert_eq!(obj.get(K_LENGTH).and_then(Value::integer), Some(4));

        obj.set_stream(Vec::<u8>::new());
        assert_eq!(obj.get(K_LENGTH).and_then(Value::integer), Some(0));
        // position of the original entry is kept
        assert_eq!(obj.attributes().iter().next().map(|(n, _)| n.to_string()), Some("Length".to_owned()));
    }

    #[test]
    fn plain_object_has_no_length() {
        let ids = IdAllocator::new();
        let obj = Object::new(&ids, Dictionary::new().with("Type", Name::from("Outlines")));
        assert!(obj.get(K_LENGTH).is_none());
        assert!(obj.stream().is_none());
    }
}

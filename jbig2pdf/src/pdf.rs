use std::ops::Deref;

pub use self::{
    dictionary::Dictionary,
    document::Document,
    ids::IdAllocator,
    indirect::Reference,
    name::Name,
    object::Object,
    trailer::Trailer,
    xref::{FreeObject, UsedObject, Xref, XrefEntry},
};

pub mod dictionary;
pub mod document;
mod ids;
mod indirect;
mod name;
mod object;
pub mod trailer;
pub mod xref;

/// A value inside a dictionary.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Token text that is already valid PDF syntax. Written as is.
    Raw(String),
    Integer(i64),
    Name(Name),
    Reference(Reference),
    Array(Vec<Value>),
    /// A direct dictionary, written on a single line.
    Dictionary(Dictionary),
}

impl Value {
    pub fn integer(&self) -> Option<i64> {
        if let Value::Integer(i) = self {
            Some(*i)
        } else {
            None
        }
    }

    pub fn reference(&self) -> Option<Reference> {
        if let Value::Reference(r) = self {
            Some(*r)
        } else {
            None
        }
    }

    pub fn array(&self) -> Option<&[Value]> {
        if let Value::Array(a) = self {
            Some(a)
        } else {
            None
        }
    }

    /// Call `f` for every reference contained in this value, nested values
    /// included. Raw token text is not inspected.
    pub(crate) fn visit_references(&self, f: &mut dyn FnMut(Reference)) {
        match self {
            Value::Reference(r) => f(*r),
            Value::Array(a) => {
                for v in a {
                    v.visit_references(f);
                }
            }
            Value::Dictionary(d) => {
                for v in d.values() {
                    v.visit_references(f);
                }
            }
            Value::Raw(_) | Value::Integer(_) | Value::Name(_) => {}
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Integer(v.into())
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        // buffer lengths and counts never exceed isize::MAX
        Self::Integer(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl From<Name> for Value {
    fn from(n: Name) -> Self {
        Self::Name(n)
    }
}

impl From<Reference> for Value {
    fn from(r: Reference) -> Self {
        Self::Reference(r)
    }
}

impl From<Vec<Value>> for Value {
    fn from(a: Vec<Value>) -> Self {
        Self::Array(a)
    }
}

impl From<Dictionary> for Value {
    fn from(d: Dictionary) -> Self {
        Self::Dictionary(d)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Raw(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Raw(s.to_owned())
    }
}

/// Opaque stream payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Bytes(Vec<u8>);

impl From<Vec<u8>> for Bytes {
    fn from(v: Vec<u8>) -> Self {
        Bytes(v)
    }
}

impl From<&[u8]> for Bytes {
    fn from(v: &[u8]) -> Self {
        Bytes(v.to_vec())
    }
}

impl From<Bytes> for Vec<u8> {
    fn from(b: Bytes) -> Self {
        b.0
    }
}

impl Deref for Bytes {
    type Target = Vec<u8>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

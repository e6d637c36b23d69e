use std::collections::BTreeSet;

use super::{Name, Object, Reference, Value};
use crate::{
    simple_encode::{
        section::{write_document, Written},
        SimpleEncoder,
    },
    writer::Encoder,
};

/// Dictionary type names
pub mod dict_types {
    pub const CATALOG: &[u8] = b"Catalog";
    pub const OUTLINES: &[u8] = b"Outlines";
    pub const PAGES: &[u8] = b"Pages";
    pub const PAGE: &[u8] = b"Page";
    pub const XOBJECT: &[u8] = b"XObject";
}

pub const K_TYPE: &[u8] = b"Type";
pub const K_SUBTYPE: &[u8] = b"Subtype";
pub const K_PARENT: &[u8] = b"Parent";
pub const K_KIDS: &[u8] = b"Kids";
pub const K_COUNT: &[u8] = b"Count";
pub const K_PAGES: &[u8] = b"Pages";
pub const K_OUTLINES: &[u8] = b"Outlines";
pub const K_LENGTH: &[u8] = b"Length";

/// Object number the trailer points at when no root was set.
pub const DEFAULT_ROOT: u32 = 1;

/// An ordered set of objects that is written as one PDF file.
///
/// Objects are written in the order they were added. Pages are objects as
/// well, they are additionally tracked so the page tree node can list them.
#[derive(Debug, Clone, Default)]
pub struct Document {
    objects: Vec<Object>,
    /// Indices into `objects`.
    pages: Vec<usize>,
    /// Index of the page tree node in `objects`.
    page_tree: Option<usize>,
    root: Option<Reference>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an object. Nothing is validated.
    pub fn add_object(&mut self, obj: Object) -> &mut Object {
        log::trace!("add object {}", obj.id());
        let index = self.objects.len();
        self.objects.push(obj);
        &mut self.objects[index]
    }

    /// Append the page tree node.
    ///
    /// From now on its `Count` and `Kids` entries follow the registered pages.
    pub fn add_page_tree(&mut self, obj: Object) -> &mut Object {
        let index = self.objects.len();
        self.page_tree = Some(index);
        self.objects.push(obj);
        self.update_page_tree();
        &mut self.objects[index]
    }

    /// Append a page object and list it in the page tree.
    pub fn add_page(&mut self, obj: Object) -> &mut Object {
        log::trace!("add page {}", obj.id());
        let index = self.objects.len();
        let kid = obj.reference();
        self.pages.push(index);
        self.objects.push(obj);
        self.append_to_page_tree(kid);
        &mut self.objects[index]
    }

    fn append_to_page_tree(&mut self, kid: Reference) {
        let count = self.pages.len();
        if let Some(tree) = self.page_tree.and_then(|i| self.objects.get_mut(i)) {
            if let Some(Value::Array(kids)) = tree.attributes_mut().get_mut(K_KIDS) {
                kids.push(Value::Reference(kid));
                tree.attributes_mut().set(Name::from(K_COUNT), count);
            } else {
                // Kids was replaced by something else
                self.update_page_tree();
            }
        }
    }

    fn update_page_tree(&mut self) {
        let kids: Vec<Value> = self
            .pages
            .iter()
            .map(|&i| Value::Reference(self.objects[i].reference()))
            .collect();
        let count = kids.len();

        if let Some(tree) = self.page_tree.and_then(|i| self.objects.get_mut(i)) {
            let attributes = tree.attributes_mut();
            attributes.set(Name::from(K_COUNT), count);
            attributes.set(Name::from(K_KIDS), kids);
        }
    }

    /// The object the trailer names as document catalog.
    pub fn set_root(&mut self, root: Reference) {
        self.root = Some(root);
    }

    pub fn root(&self) -> Reference {
        self.root.unwrap_or_else(|| Reference::new(DEFAULT_ROOT))
    }

    pub fn get(&self, id: u32) -> Option<&Object> {
        self.objects.iter().find(|o| o.id() == id)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut Object> {
        self.objects.iter_mut().find(|o| o.id() == id)
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    pub fn pages(&self) -> impl Iterator<Item = &Object> {
        self.pages.iter().map(move |&i| &self.objects[i])
    }

    pub fn page_tree(&self) -> Option<&Object> {
        self.page_tree.map(|i| &self.objects[i])
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// True if the objects are numbered `1..=len` in the order they were
    /// added. The xref table only describes such documents correctly.
    pub fn has_sequential_ids(&self) -> bool {
        self.objects
            .iter()
            .zip(1u32..)
            .all(|(obj, expected)| obj.id() == expected)
    }

    /// References in attribute values that point at objects missing from this
    /// document. Raw token text is not inspected.
    pub fn unresolved_references(&self) -> Vec<Reference> {
        let known: BTreeSet<u32> = self.objects.iter().map(Object::id).collect();
        let mut missing = BTreeSet::new();
        for obj in &self.objects {
            for value in obj.attributes().values() {
                value.visit_references(&mut |r| {
                    if !known.contains(&r.index()) {
                        missing.insert(r);
                    }
                });
            }
        }
        missing.into_iter().collect()
    }

    /// Serialize the whole document.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        SimpleEncoder::write_to(self, &mut out);
        out
    }

    /// Serialize the whole document and return the cross-reference table
    /// that was written along with it.
    pub fn to_bytes_with_xref(&self) -> (Vec<u8>, Written) {
        let mut out = Vec::new();
        let written = write_document(self, &mut out);
        (out, written)
    }
}

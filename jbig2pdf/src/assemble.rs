use jbig2_header::HeaderError;

use crate::pdf::{
    document::{dict_types, K_COUNT, K_OUTLINES, K_PAGES, K_PARENT, K_SUBTYPE, K_TYPE},
    Bytes, Dictionary, Document, IdAllocator, Name, Object, Reference, Value,
};

/// Name the page image is registered under in the page resources.
pub const IMAGE_NAME: &str = "Im1";

const K_WIDTH: &[u8] = b"Width";
const K_HEIGHT: &[u8] = b"Height";
const K_COLOR_SPACE: &[u8] = b"ColorSpace";
const K_BITS_PER_COMPONENT: &[u8] = b"BitsPerComponent";
const K_FILTER: &[u8] = b"Filter";
const K_DECODE_PARMS: &[u8] = b"DecodeParms";
const K_JBIG2_GLOBALS: &[u8] = b"JBIG2Globals";
const K_PROC_SET: &[u8] = b"ProcSet";
const K_XOBJECT: &[u8] = b"XObject";
const K_MEDIA_BOX: &[u8] = b"MediaBox";
const K_CONTENTS: &[u8] = b"Contents";
const K_RESOURCES: &[u8] = b"Resources";

const IMAGE: &[u8] = b"Image";
const DEVICE_GRAY: &[u8] = b"DeviceGray";
const JBIG2_DECODE: &[u8] = b"JBIG2Decode";
const PROC_SET: [&[u8]; 2] = [b"PDF", b"ImageB"];

/// Builds a document that shows one JBIG2 image per page.
///
/// Creating the assembler adds catalog, outlines, page tree and the shared
/// symbol dictionary. With a fresh [`IdAllocator`] they are objects 1 to 4.
/// Every page then adds four objects: image, content stream, resources and
/// the page itself.
pub struct PageAssembler<'a> {
    ids: &'a IdAllocator,
    document: Document,
    page_tree: Reference,
    symbol_dictionary: Reference,
}

impl<'a> PageAssembler<'a> {
    pub fn new(ids: &'a IdAllocator, symbol_table: impl Into<Bytes>) -> Self {
        let mut document = Document::new();

        let catalog = document
            .add_object(Object::new(
                ids,
                Dictionary::new().with(K_TYPE, Name::from(dict_types::CATALOG)),
            ))
            .reference();
        let outlines = document
            .add_object(Object::new(
                ids,
                Dictionary::new()
                    .with(K_TYPE, Name::from(dict_types::OUTLINES))
                    .with(K_COUNT, 0u32),
            ))
            .reference();
        let page_tree = document
            .add_page_tree(Object::new(
                ids,
                Dictionary::new().with(K_TYPE, Name::from(dict_types::PAGES)),
            ))
            .reference();
        let symbol_dictionary = document
            .add_object(Object::with_stream(ids, Dictionary::new(), symbol_table))
            .reference();

        if let Some(catalog) = document.get_mut(catalog.index()) {
            let attributes = catalog.attributes_mut();
            attributes.set(K_OUTLINES, outlines);
            attributes.set(K_PAGES, page_tree);
        }
        document.set_root(catalog);

        log::debug!(
            "document skeleton: catalog {}, page tree {}, symbol dictionary {}",
            catalog,
            page_tree,
            symbol_dictionary
        );

        Self {
            ids,
            document,
            page_tree,
            symbol_dictionary,
        }
    }

    /// Add a page showing the JBIG2 page stream `data`.
    ///
    /// The page size in points equals the image size in pixels.
    pub fn add_page(&mut self, data: impl Into<Bytes>) -> Result<Reference, HeaderError> {
        let data = data.into();
        let (width, height) = jbig2_header::dimensions(&data)?;
        let ids = self.ids;

        let image = Object::with_stream(
            ids,
            Dictionary::new()
                .with(K_TYPE, Name::from(dict_types::XOBJECT))
                .with(K_SUBTYPE, Name::from(IMAGE))
                .with(K_WIDTH, width)
                .with(K_HEIGHT, height)
                .with(K_COLOR_SPACE, Name::from(DEVICE_GRAY))
                .with(K_BITS_PER_COMPONENT, 1u32)
                .with(K_FILTER, Name::from(JBIG2_DECODE))
                .with(
                    K_DECODE_PARMS,
                    Dictionary::new().with(K_JBIG2_GLOBALS, self.symbol_dictionary),
                ),
            data,
        );
        let contents = Object::with_stream(ids, Dictionary::new(), content_stream(width, height));
        let resources = Object::new(
            ids,
            Dictionary::new()
                .with(
                    K_PROC_SET,
                    PROC_SET.iter().map(|&p| Value::from(Name::from(p))).collect::<Vec<_>>(),
                )
                .with(
                    K_XOBJECT,
                    Dictionary::new().with(IMAGE_NAME, image.reference()),
                ),
        );
        let page = Object::new(
            ids,
            Dictionary::new()
                .with(K_TYPE, Name::from(dict_types::PAGE))
                .with(K_PARENT, self.page_tree)
                .with(K_MEDIA_BOX, media_box(width, height))
                .with(K_CONTENTS, contents.reference())
                .with(K_RESOURCES, resources.reference()),
        );

        log::debug!(
            "page {}: {}x{} px, image {}",
            page.id(),
            width,
            height,
            image.id()
        );

        self.document.add_object(image);
        self.document.add_object(contents);
        self.document.add_object(resources);
        Ok(self.document.add_page(page).reference())
    }

    pub fn page_count(&self) -> usize {
        self.document.page_count()
    }

    pub fn page_tree(&self) -> Reference {
        self.page_tree
    }

    pub fn symbol_dictionary(&self) -> Reference {
        self.symbol_dictionary
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn finish(self) -> Document {
        self.document
    }
}

/// Paint the image over the whole page.
fn content_stream(width: u32, height: u32) -> Vec<u8> {
    format!("q {} 0 0 {} 0 0 cm /{} Do Q", width, height, IMAGE_NAME).into_bytes()
}

fn media_box(width: u32, height: u32) -> Value {
    Value::Array(vec![0u32.into(), 0u32.into(), width.into(), height.into()])
}

//! Wrap JBIG2 encoded pages into a PDF file.
//!
//! The pages and the symbol table they share come from a JBIG2 encoder run in
//! symbol mode. Every page becomes an image object with the `JBIG2Decode`
//! filter that refers to the symbol table as `JBIG2Globals`.
//!
//! ```
//! use jbig2pdf::{IdAllocator, PageAssembler};
//!
//! let ids = IdAllocator::new();
//! let mut assembler = PageAssembler::new(&ids, vec![0u8; 10]);
//!
//! // 11 byte segment header followed by width and height
//! let mut page = vec![0u8; 11];
//! page.extend_from_slice(&[0, 0, 0, 2, 0, 0, 0, 3]);
//! assembler.add_page(page).unwrap();
//!
//! let pdf = assembler.finish().to_bytes();
//! assert!(pdf.starts_with(b"%PDF-1.4\n1 0 obj\n"));
//! assert!(pdf.ends_with(b"%%EOF"));
//! ```

pub use assemble::{PageAssembler, IMAGE_NAME};
pub use error::{AssembleError, PageError};
pub use input::{Assembly, InputSet, PagePolicy};
pub use jbig2_header::HeaderError;
pub use pdf::{Dictionary, Document, IdAllocator, Name, Object, Reference, Value};
pub use simple_encode::{section::Written, SimpleEncoder};

mod assemble;
mod error;
mod input;
pub mod pdf;
pub mod simple_encode;
pub mod writer;

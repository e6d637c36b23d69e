use std::{io, path::PathBuf};

use jbig2_header::HeaderError;
use thiserror::Error;

/// Errors that stop the whole document from being built.
#[derive(Debug, Error)]
pub enum AssembleError {
    #[error("symbol table {} not found!", .0.display())]
    MissingSymbolTable(PathBuf),

    #[error("no pages found!")]
    NoPages,

    #[error("malformed page header in {}: {source}", page.display())]
    MalformedHeader { page: PathBuf, source: HeaderError },

    #[error("i/o error on {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    /// A page problem that was escalated by [`PagePolicy::Fail`](crate::PagePolicy::Fail).
    #[error(transparent)]
    Page(#[from] PageError),
}

impl AssembleError {
    /// Errors caused by the input selection rather than by file contents.
    pub fn is_usage(&self) -> bool {
        matches!(self, AssembleError::MissingSymbolTable(_) | AssembleError::NoPages)
    }
}

/// Errors that only concern a single page. The page can be skipped.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("error reading page file {}: {source}", path.display())]
    Unreadable { path: PathBuf, source: io::Error },
}

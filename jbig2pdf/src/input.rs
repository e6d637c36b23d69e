use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    assemble::PageAssembler,
    error::{AssembleError, PageError},
    pdf::{Document, IdAllocator},
};

pub const DEFAULT_SYMBOL_TABLE: &str = "symboltable";
pub const DEFAULT_PAGE_PREFIX: &str = "page-";
pub const SYMBOL_TABLE_EXTENSION: &str = "sym";

/// What to do with a page file that cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PagePolicy {
    /// Log a warning and leave the page out.
    #[default]
    Skip,
    /// Abort the whole document.
    Fail,
}

/// The files one document is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSet {
    pub symbol_table: PathBuf,
    /// Page files in the order they become pages.
    pub pages: Vec<PathBuf>,
}

/// A finished document and the pages that were left out.
#[derive(Debug)]
pub struct Assembly {
    pub document: Document,
    pub skipped: Vec<PageError>,
}

/// Page files for `basename` are named `<basename>.<digit>...`.
fn is_numbered_page(file_name: &str, prefix: &str) -> bool {
    file_name
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('.'))
        .and_then(|rest| rest.bytes().next())
        .map_or(false, |c| c.is_ascii_digit())
}

/// Files in `dir` whose name satisfies `matches`, sorted by name.
///
/// Names that are not valid UTF-8 are matched in their lossy form, the path
/// itself is kept unchanged.
fn matching_files(dir: &Path, matches: impl Fn(&str) -> bool) -> Result<Vec<PathBuf>, AssembleError> {
    let entries = fs::read_dir(dir).map_err(|source| AssembleError::Io {
        path: dir.to_owned(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| AssembleError::Io {
            path: dir.to_owned(),
            source,
        })?;
        if matches(&entry.file_name().to_string_lossy()) {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

impl InputSet {
    /// Find the symbol table and the pages in `dir`.
    ///
    /// With a basename the symbol table is `<basename>.sym` and the pages are
    /// `<basename>.[0-9]*`. Without one they are `symboltable` and `page-*`.
    /// The basename may contain directories, relative to `dir`. The suffixes
    /// are appended to it as text, so `scans/` names `scans/.sym` and
    /// `scans/.0000`.
    pub fn discover(dir: &Path, basename: Option<&str>) -> Result<Self, AssembleError> {
        let (symbol_table, pages) = match basename {
            Some(basename) => {
                let symbol_table = dir.join(format!("{}.{}", basename, SYMBOL_TABLE_EXTENSION));
                require_file(&symbol_table)?;

                let (parent, prefix) = match basename.rsplit_once('/') {
                    Some((sub, prefix)) => (dir.join(sub), prefix),
                    None => (dir.to_owned(), basename),
                };
                let pages = matching_files(&parent, |name| is_numbered_page(name, prefix))?;
                (symbol_table, pages)
            }
            None => {
                let symbol_table = dir.join(DEFAULT_SYMBOL_TABLE);
                require_file(&symbol_table)?;
                let pages = matching_files(dir, |name| name.starts_with(DEFAULT_PAGE_PREFIX))?;
                (symbol_table, pages)
            }
        };

        if pages.is_empty() {
            return Err(AssembleError::NoPages);
        }
        log::debug!(
            "symbol table {}, {} page files",
            symbol_table.display(),
            pages.len()
        );

        Ok(Self { symbol_table, pages })
    }

    /// Read all files and build the document.
    ///
    /// Unreadable page files are handled according to `policy`. A page with a
    /// malformed header always aborts, as does ending up with no page at all.
    pub fn assemble(&self, ids: &IdAllocator, policy: PagePolicy) -> Result<Assembly, AssembleError> {
        let symbol_table = fs::read(&self.symbol_table).map_err(|source| AssembleError::Io {
            path: self.symbol_table.clone(),
            source,
        })?;
        let mut assembler = PageAssembler::new(ids, symbol_table);
        let mut skipped = Vec::new();

        for path in &self.pages {
            let data = match fs::read(path) {
                Ok(data) => data,
                Err(source) => {
                    let err = PageError::Unreadable {
                        path: path.clone(),
                        source,
                    };
                    match policy {
                        PagePolicy::Fail => return Err(err.into()),
                        PagePolicy::Skip => {
                            log::warn!("{}", err);
                            skipped.push(err);
                            continue;
                        }
                    }
                }
            };

            assembler
                .add_page(data)
                .map_err(|source| AssembleError::MalformedHeader {
                    page: path.clone(),
                    source,
                })?;
        }

        if assembler.page_count() == 0 {
            return Err(AssembleError::NoPages);
        }

        Ok(Assembly {
            document: assembler.finish(),
            skipped,
        })
    }
}

fn require_file(path: &Path) -> Result<(), AssembleError> {
    if path.exists() {
        Ok(())
    } else {
        Err(AssembleError::MissingSymbolTable(path.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_pages() {
        assert!(is_numbered_page("output.0000", "output"));
        assert!(is_numbered_page("output.12abc", "output"));
        assert!(!is_numbered_page("output.sym", "output"));
        assert!(!is_numbered_page("output.", "output"));
        assert!(!is_numbered_page("output0000", "output"));
        assert!(!is_numbered_page("other.0000", "output"));
        assert!(is_numbered_page(".0000", ""));
        assert!(!is_numbered_page(".sym", ""));
    }

    #[test]
    fn default_policy_skips() {
        assert_eq!(PagePolicy::default(), PagePolicy::Skip);
    }
}

/// Byte sink the encoders write into.
pub trait Writer {
    fn write(&mut self, buf: &[u8]);

    /// Number of bytes written so far.
    fn position(&self) -> usize;
}

impl Writer for Vec<u8> {
    fn write(&mut self, buf: &[u8]) {
        self.extend_from_slice(buf);
    }

    fn position(&self) -> usize {
        self.len()
    }
}

/// Only counts the bytes written to it.
#[derive(Debug, Default)]
pub struct LenCounter(usize);

impl Writer for LenCounter {
    fn write(&mut self, buf: &[u8]) {
        self.0 += buf.len();
    }

    fn position(&self) -> usize {
        self.0
    }
}

pub trait Encoder<T: ?Sized> {
    fn write_to(o: &T, writer: &mut dyn Writer);

    fn encoded_len(o: &T) -> usize {
        let mut counter = LenCounter::default();
        Self::write_to(o, &mut counter);
        counter.position()
    }
}

pub const SEPARATOR: &[u8] = b"\n";

/// Writes a file as a sequence of chunks joined by a single newline.
///
/// Every call reports the position of the first byte of the chunk it wrote,
/// taken from the underlying writer after the separator went out. Byte offsets
/// for the xref table come from here and nowhere else.
pub struct ChunkWriter<'w> {
    inner: &'w mut dyn Writer,
    chunks: usize,
}

impl<'w> ChunkWriter<'w> {
    pub fn new(inner: &'w mut dyn Writer) -> Self {
        Self { inner, chunks: 0 }
    }

    /// Write one chunk and return its start position.
    pub fn chunk(&mut self, buf: &[u8]) -> usize {
        self.chunk_with(|w| w.write(buf))
    }

    /// Write one chunk produced by `f` and return its start position.
    pub fn chunk_with(&mut self, f: impl FnOnce(&mut dyn Writer)) -> usize {
        if self.chunks > 0 {
            self.inner.write(SEPARATOR);
        }
        self.chunks += 1;
        let start = self.inner.position();
        f(&mut *self.inner);
        start
    }

    /// Number of chunks written.
    pub fn len(&self) -> usize {
        self.chunks
    }

    pub fn is_empty(&self) -> bool {
        self.chunks == 0
    }

    pub fn position(&self) -> usize {
        self.inner.position()
    }
}

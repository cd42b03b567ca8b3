/// A read-only memory-mapped file.
///
/// Used as the immutable original buffer of a piece table so large files are
/// never copied into the heap.
#[derive(Debug)]
pub struct MmapFile {
    _file: std::fs::File,
    mmap: memmap2::Mmap,
    path: std::path::PathBuf,
}

impl MmapFile {
    /// # Errors
    ///
    /// - `std::io::Error` if the file cannot be opened or mapped.
    pub fn open(path: impl AsRef<std::path::Path>) -> std::io::Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let file = std::fs::File::open(&path_buf)?;

        // SAFETY:
        // - File is opened read-only
        // - The file handle lives as long as the mapping
        // - Callers only ever see immutable `&[u8]`
        let mmap = unsafe { memmap2::Mmap::map(&file)? };

        Ok(Self {
            _file: file,
            mmap,
            path: path_buf,
        })
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.mmap
    }

    /// File length in bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.mmap.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    fn mapped(content: &[u8]) -> (tempfile::NamedTempFile, super::MmapFile) {
        let mut temp = tempfile::NamedTempFile::new().expect("could not create temp file");
        temp.write_all(content).unwrap();
        temp.as_file().sync_all().unwrap();

        let file = super::MmapFile::open(temp.path()).unwrap();

        (temp, file)
    }

    #[test]
    fn maps_whole_file() {
        let (temp, file) = mapped(b"hello world");

        assert_eq!(file.len(), 11);
        assert_eq!(file.as_slice(), b"hello world");
        assert_eq!(file.path(), temp.path());
    }

    #[test]
    fn empty_file_maps_to_empty_slice() {
        let (_temp, file) = mapped(b"");

        assert!(file.is_empty());
        assert_eq!(file.as_slice(), b"");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();

        assert!(super::MmapFile::open(dir.path().join("missing.txt")).is_err());
    }
}

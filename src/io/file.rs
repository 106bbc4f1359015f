use crate::io::{IoError, IoResult, MediaRead, MediaSeek, SeekFrom};
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

/// `ByteSource` over a file on disk.
#[derive(Debug)]
pub struct FileSource {
	inner: File,
}

impl FileSource {
	pub fn open<P: AsRef<Path>>(path: P) -> IoResult<Self> {
		let inner = File::open(path).map_err(IoError::from)?;
		Ok(Self { inner })
	}
}

impl MediaRead for FileSource {
	#[inline]
	fn read(&mut self, buf: &mut [u8]) -> IoResult<usize> {
		self.inner.read(buf).map_err(IoError::from)
	}
}

impl MediaSeek for FileSource {
	#[inline]
	fn seek(&mut self, pos: SeekFrom) -> IoResult<u64> {
		self.inner.seek(pos.into()).map_err(IoError::from)
	}
}

use crate::io::{IoError, IoResult, MediaRead, MediaSeek, SeekFrom};

/// In-memory seekable byte source. Seeking past the end is allowed; reads
/// there return zero bytes.
#[derive(Debug, Clone, Default)]
pub struct Cursor<T> {
	inner: T,
	pos: u64,
}

impl<T> Cursor<T> {
	#[inline]
	pub const fn new(inner: T) -> Self {
		Self { inner, pos: 0 }
	}

	#[inline]
	pub const fn position(&self) -> u64 {
		self.pos
	}
}

impl<T: AsRef<[u8]>> MediaRead for Cursor<T> {
	fn read(&mut self, buf: &mut [u8]) -> IoResult<usize> {
		let data = self.inner.as_ref();
		let start = core::cmp::min(self.pos, data.len() as u64) as usize;
		let remaining = &data[start..];
		let amt = core::cmp::min(remaining.len(), buf.len());
		buf[..amt].copy_from_slice(&remaining[..amt]);
		self.pos += amt as u64;
		Ok(amt)
	}
}

impl<T: AsRef<[u8]>> MediaSeek for Cursor<T> {
	fn seek(&mut self, pos: SeekFrom) -> IoResult<u64> {
		let (base, offset) = match pos {
			SeekFrom::Start(n) => {
				self.pos = n;
				return Ok(n);
			}
			SeekFrom::End(n) => (self.inner.as_ref().len() as u64, n),
			SeekFrom::Current(n) => (self.pos, n),
		};

		match base.checked_add_signed(offset) {
			Some(n) => {
				self.pos = n;
				Ok(n)
			}
			None => Err(IoError::invalid_input("seek to a negative or overflowing position")),
		}
	}
}

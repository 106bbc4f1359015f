use crate::io::IoResult;

/// Seek target, mirrored onto `std::io::SeekFrom` for file-backed sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekFrom {
	Start(u64),
	End(i64),
	Current(i64),
}

impl From<SeekFrom> for std::io::SeekFrom {
	#[inline]
	fn from(pos: SeekFrom) -> Self {
		match pos {
			SeekFrom::Start(n) => std::io::SeekFrom::Start(n),
			SeekFrom::End(n) => std::io::SeekFrom::End(n),
			SeekFrom::Current(n) => std::io::SeekFrom::Current(n),
		}
	}
}

pub trait MediaSeek {
	fn seek(&mut self, pos: SeekFrom) -> IoResult<u64>;

	#[inline]
	fn stream_position(&mut self) -> IoResult<u64> {
		self.seek(SeekFrom::Current(0))
	}

	/// Total length in bytes; the current position is preserved.
	fn stream_len(&mut self) -> IoResult<u64> {
		let current = self.stream_position()?;
		let end = self.seek(SeekFrom::End(0))?;
		if current != end {
			self.seek(SeekFrom::Start(current))?;
		}
		Ok(end)
	}
}

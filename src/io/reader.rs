use crate::io::{IoError, IoErrorKind, IoResult};

pub trait MediaRead {
	fn read(&mut self, buf: &mut [u8]) -> IoResult<usize>;
}

pub trait ReadPrimitives: MediaRead {
	fn read_exact(&mut self, buf: &mut [u8]) -> IoResult<()> {
		match self.read_full(buf)? {
			n if n == buf.len() => Ok(()),
			_ => Err(IoError::unexpected_eof()),
		}
	}

	/// Reads until `buf` is full or the stream ends, returning the byte count.
	/// A short count means end of stream, never an error.
	fn read_full(&mut self, buf: &mut [u8]) -> IoResult<usize> {
		let mut filled = 0;
		while filled < buf.len() {
			match self.read(&mut buf[filled..]) {
				Ok(0) => break,
				Ok(n) => filled += n,
				Err(e) if matches!(e.kind(), IoErrorKind::Interrupted) => continue,
				Err(e) => return Err(e),
			}
		}
		Ok(filled)
	}

	#[inline]
	fn read_u8(&mut self) -> IoResult<u8> {
		let mut buf = [0u8; 1];
		self.read_exact(&mut buf)?;
		Ok(buf[0])
	}

	#[inline]
	fn read_u16_le(&mut self) -> IoResult<u16> {
		let mut buf = [0u8; 2];
		self.read_exact(&mut buf)?;
		Ok(u16::from_le_bytes(buf))
	}

	#[inline]
	fn read_u32_le(&mut self) -> IoResult<u32> {
		let mut buf = [0u8; 4];
		self.read_exact(&mut buf)?;
		Ok(u32::from_le_bytes(buf))
	}

	#[inline]
	fn read_tag(&mut self) -> IoResult<[u8; 4]> {
		let mut buf = [0u8; 4];
		self.read_exact(&mut buf)?;
		Ok(buf)
	}
}

impl<T: MediaRead> ReadPrimitives for T {}

use crate::error::{Result, WavError};
use crate::io::{ByteSource, MediaSeek, ReadPrimitives, SeekFrom};
use log::{debug, error, warn};

pub const RIFF_DESCRIPTOR_SIZE: usize = 12;
pub const CHUNK_HEADER_SIZE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
	pub id: [u8; 4],
	pub size: u32,
}

impl ChunkHeader {
	pub fn from_bytes(buf: &[u8; CHUNK_HEADER_SIZE]) -> Self {
		Self { id: [buf[0], buf[1], buf[2], buf[3]], size: u32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]) }
	}

	#[inline]
	pub fn is(&self, id: &[u8; 4]) -> bool {
		&self.id == id
	}

	pub fn id_lossy(&self) -> String {
		String::from_utf8_lossy(&self.id).into_owned()
	}
}

/// Walks RIFF chunk headers at the current stream position.
pub struct ChunkReader<'a, S> {
	source: &'a mut S,
}

impl<'a, S: ByteSource> ChunkReader<'a, S> {
	pub fn new(source: &'a mut S) -> Self {
		Self { source }
	}

	/// Reads the 12-byte `RIFF....WAVE` descriptor and returns the declared RIFF size.
	pub fn read_descriptor(&mut self) -> Result<u32> {
		let mut buf = [0u8; RIFF_DESCRIPTOR_SIZE];
		if let Err(e) = self.source.read_exact(&mut buf) {
			error!("failed to read RIFF header: {}", e);
			return Err(e.into());
		}

		if &buf[0..4] != b"RIFF" {
			error!("invalid RIFF header id");
			return Err(WavError::MalformedContainer("not a RIFF file"));
		}

		if &buf[8..12] != b"WAVE" {
			error!("invalid RIFF header format");
			return Err(WavError::MalformedContainer("not a WAVE file"));
		}

		Ok(u32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]))
	}

	/// Returns `None` once the stream has no complete chunk header left.
	pub fn next_header(&mut self) -> Result<Option<ChunkHeader>> {
		let mut buf = [0u8; CHUNK_HEADER_SIZE];
		let n = self.source.read_full(&mut buf)?;

		match n {
			0 => Ok(None),
			CHUNK_HEADER_SIZE => Ok(Some(ChunkHeader::from_bytes(&buf))),
			_ => {
				warn!("ignoring {} trailing bytes after last chunk", n);
				Ok(None)
			}
		}
	}

	/// Moves past the body of `header`, including a RIFF pad byte if one is present.
	pub fn skip(&mut self, header: &ChunkHeader) -> Result<()> {
		debug!("skipping '{}' chunk ({} bytes)", header.id_lossy(), header.size);
		self.skip_rest(header, 0)
	}

	/// Like `skip`, for a chunk whose first `consumed` body bytes were already read.
	pub fn skip_rest(&mut self, header: &ChunkHeader, consumed: u32) -> Result<()> {
		let remaining = header.size.saturating_sub(consumed);
		if remaining > 0 {
			self.skip_bytes(remaining as u64)?;
		}
		if header.size % 2 == 1 {
			self.skip_pad_byte()?;
		}
		Ok(())
	}

	fn skip_bytes(&mut self, count: u64) -> Result<()> {
		if let Err(e) = self.source.seek(SeekFrom::Current(count as i64)) {
			error!("failed to seek past sub-chunk: {}", e);
			return Err(e.into());
		}
		Ok(())
	}

	pub fn read_body(&mut self, buf: &mut [u8]) -> Result<()> {
		self.source.read_exact(buf)?;
		Ok(())
	}

	pub fn position(&mut self) -> Result<u64> {
		Ok(self.source.stream_position()?)
	}

	pub fn stream_len(&mut self) -> Result<u64> {
		Ok(self.source.stream_len()?)
	}

	pub fn seek_to(&mut self, offset: u64) -> Result<()> {
		self.source.seek(SeekFrom::Start(offset))?;
		Ok(())
	}

	// A chunk tag never starts with a zero byte, so a non-zero byte here
	// belongs to the next header of a writer that did not pad. Writers that
	// pad with a non-zero byte are not supported: the walk lands one byte early.
	fn skip_pad_byte(&mut self) -> Result<()> {
		let mut pad = [0u8; 1];
		if self.source.read_full(&mut pad)? == 1 && pad[0] != 0 {
			self.source.seek(SeekFrom::Current(-1))?;
		}
		Ok(())
	}
}

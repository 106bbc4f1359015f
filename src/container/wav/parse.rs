use super::chunk::{ChunkHeader, ChunkReader};
use super::format::{FmtChunk, WavFormat};
use crate::error::{Result, WavError};
use crate::io::ByteSource;
use log::{debug, error, warn};

/// Location of the audio samples inside the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataRegion {
	/// Absolute byte offset of the first audio byte.
	pub offset: u64,
	/// Whole frames in the chunk; a trailing partial frame is dropped.
	pub num_frames: u32,
}

impl DataRegion {
	pub fn frame_offset(&self, format: &WavFormat, frame: u32) -> u64 {
		self.offset + frame as u64 * format.bytes_per_frame() as u64
	}

	pub fn end(&self, format: &WavFormat) -> u64 {
		self.frame_offset(format, self.num_frames)
	}
}

/// Walks the chunks of a RIFF/WAVE stream, collecting the format and the data region.
pub struct WavParser<'a, S> {
	chunks: ChunkReader<'a, S>,
	format: Option<WavFormat>,
	data: Option<DataRegion>,
}

impl<'a, S: ByteSource> WavParser<'a, S> {
	pub fn new(source: &'a mut S) -> Self {
		Self { chunks: ChunkReader::new(source), format: None, data: None }
	}

	/// On success the stream is positioned at the first audio byte.
	pub fn parse(mut self) -> Result<(WavFormat, DataRegion)> {
		let riff_size = self.chunks.read_descriptor()?;
		debug!("RIFF/WAVE descriptor, declared size {}", riff_size);

		while let Some(header) = self.chunks.next_header()? {
			if header.is(b"fmt ") {
				self.read_format(&header)?;
			} else if header.is(b"data") {
				self.read_data(&header)?;
			} else {
				self.chunks.skip(&header)?;
			}
		}

		let (format, data) = match (self.format, self.data) {
			(Some(format), Some(data)) => (format, data),
			_ => {
				error!("no data sub-chunk found");
				return Err(WavError::NoDataChunk);
			}
		};

		if let Err(e) = self.chunks.seek_to(data.offset) {
			error!("failed to seek to data: {}", e);
			return Err(e);
		}

		Ok((format, data))
	}

	fn read_format(&mut self, header: &ChunkHeader) -> Result<()> {
		if self.data.is_some() {
			error!("fmt sub-chunk came after data sub-chunk");
			return Err(WavError::FormatAfterData);
		}

		if (header.size as usize) < FmtChunk::SIZE {
			error!("fmt sub-chunk too small ({} bytes)", header.size);
			return Err(WavError::malformed_format(format!("{} byte fmt chunk", header.size)));
		}

		let mut buf = [0u8; FmtChunk::SIZE];
		if let Err(e) = self.chunks.read_body(&mut buf) {
			error!("failed to read fmt sub-chunk data: {}", e);
			return Err(e);
		}

		let format = FmtChunk::from_bytes(&buf).validate()?;
		debug!(
			"format: {} channels, {} Hz, {} bits",
			format.channels, format.sample_rate, format.bit_depth
		);

		self.chunks.skip_rest(header, FmtChunk::SIZE as u32)?;

		self.format = Some(format);
		Ok(())
	}

	fn read_data(&mut self, header: &ChunkHeader) -> Result<()> {
		if self.data.is_some() {
			error!("multiple data sub-chunks");
			return Err(WavError::DuplicateDataChunk);
		}

		let Some(format) = self.format else {
			error!("data sub-chunk came before fmt sub-chunk");
			return Err(WavError::DataBeforeFormat);
		};

		let offset = self.chunks.position()?;
		let num_frames = header.size / format.bytes_per_frame() as u32;
		debug!("data: offset {}, {} bytes, {} frames", offset, header.size, num_frames);

		self.chunks.skip(header)?;

		let available = self.chunks.stream_len()?;
		if offset + header.size as u64 > available {
			warn!(
				"data chunk declares {} bytes but the stream ends {} bytes in",
				header.size,
				available.saturating_sub(offset)
			);
		}

		self.data = Some(DataRegion { offset, num_frames });
		Ok(())
	}
}

pub fn parse<S: ByteSource>(source: &mut S) -> Result<(WavFormat, DataRegion)> {
	WavParser::new(source).parse()
}

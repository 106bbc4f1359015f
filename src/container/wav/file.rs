use super::format::WavFormat;
use super::parse::{DataRegion, WavParser};
use crate::codecs::PcmDecoder;
use crate::core::PcmBuffer;
use crate::error::{Result, WavError};
use crate::io::{ByteSource, FileSource, MediaSeek, ReadPrimitives, SeekFrom};
use log::{debug, warn};
use std::path::Path;

/// Frames pulled from the source per read call.
pub const READ_BATCH_FRAMES: usize = 1024;

/// An open WAV stream positioned somewhere inside its data chunk.
///
/// The handle exclusively owns its source. The read cursor always lies between
/// the first audio byte and the end of the last whole frame.
pub struct WavFile<S: ByteSource = FileSource> {
	source: S,
	format: WavFormat,
	data: DataRegion,
	decoder: PcmDecoder,
	position: u32,
	scratch: Vec<u8>,
}

impl WavFile<FileSource> {
	pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
		let path = path.as_ref();
		let source = FileSource::open(path)
			.map_err(|source| WavError::OpenFailed { path: path.to_path_buf(), source })?;
		debug!("opened {}", path.display());
		Self::from_source(source)
	}
}

impl<S: ByteSource> WavFile<S> {
	/// Parses `source` as RIFF/WAVE. On failure the source is dropped.
	pub fn from_source(mut source: S) -> Result<Self> {
		let (format, data) = WavParser::new(&mut source).parse()?;
		let scratch = vec![0u8; READ_BATCH_FRAMES * format.bytes_per_frame()];

		Ok(Self { source, format, data, decoder: PcmDecoder::new(format), position: 0, scratch })
	}

	pub fn format(&self) -> WavFormat {
		self.format
	}

	pub fn data_region(&self) -> DataRegion {
		self.data
	}

	pub fn num_channels(&self) -> u16 {
		self.format.channels
	}

	pub fn sample_rate(&self) -> u32 {
		self.format.sample_rate
	}

	pub fn bits_per_sample(&self) -> u16 {
		self.format.bit_depth
	}

	pub fn num_frames(&self) -> u32 {
		self.data.num_frames
	}

	/// Index of the next frame `read` will return.
	pub fn position(&self) -> u32 {
		self.position
	}

	/// Length in seconds.
	pub fn duration(&self) -> f64 {
		if self.format.sample_rate == 0 {
			return 0.0;
		}
		self.data.num_frames as f64 / self.format.sample_rate as f64
	}

	/// Seeks to the frame nearest `seconds`, rounding half away from zero.
	pub fn seek_to_time(&mut self, seconds: f64) -> Result<()> {
		if !seconds.is_finite() || seconds < 0.0 {
			return Err(WavError::invalid_param(format!("seek position {}", seconds)));
		}

		let duration = self.duration();
		if seconds > duration {
			return Err(WavError::invalid_param(format!(
				"seek position {}s past duration {}s",
				seconds, duration
			)));
		}

		let frame = (seconds * self.format.sample_rate as f64 + 0.5) as u32;
		self.seek_to_frame(frame.min(self.data.num_frames))
	}

	pub fn seek_to_frame(&mut self, frame: u32) -> Result<()> {
		if frame > self.data.num_frames {
			return Err(WavError::invalid_param(format!(
				"frame {} past end ({} frames)",
				frame, self.data.num_frames
			)));
		}

		let offset = self.data.frame_offset(&self.format, frame);
		self.source.seek(SeekFrom::Start(offset))?;
		self.position = frame;
		debug!("seeked to frame {} (byte {})", frame, offset);
		Ok(())
	}

	/// Decodes up to `max_frames` frames into `out[channel][0..]`.
	///
	/// Returns fewer than `max_frames` only at the end of the data chunk, and
	/// zero once there.
	pub fn read<B: AsMut<[f32]>>(&mut self, out: &mut [B], max_frames: usize) -> Result<usize> {
		let channels = self.format.channels as usize;
		if out.len() < channels {
			return Err(WavError::invalid_param(format!(
				"{} output buffers for {} channels",
				out.len(),
				channels
			)));
		}
		let shortest = out[..channels].iter_mut().map(|b| b.as_mut().len()).min().unwrap_or(0);
		if shortest < max_frames {
			return Err(WavError::invalid_param(format!(
				"output buffer holds {} frames, {} requested",
				shortest, max_frames
			)));
		}

		let bytes_per_frame = self.format.bytes_per_frame();
		let remaining = (self.data.num_frames - self.position) as usize;
		let mut wanted = max_frames.min(remaining);
		let mut decoded = 0;

		while wanted > 0 {
			let batch = wanted.min(READ_BATCH_FRAMES);
			let buf = &mut self.scratch[..batch * bytes_per_frame];
			let filled = match self.source.read_full(buf) {
				Ok(filled) => filled,
				Err(e) => {
					// Bytes of the failed batch are lost; put the stream back on the cursor.
					let offset = self.data.frame_offset(&self.format, self.position);
					if let Err(rewind) = self.source.seek(SeekFrom::Start(offset)) {
						warn!("failed to restore read position after error: {}", rewind);
					}
					return Err(e.into());
				}
			};

			let frames = self.decoder.decode(&buf[..filled], out, decoded, batch);
			decoded += frames;
			wanted -= frames;
			self.position += frames as u32;

			if filled < buf.len() {
				let partial = filled % bytes_per_frame;
				if partial > 0 {
					self.source.seek(SeekFrom::Current(-(partial as i64)))?;
				}
				warn!("data chunk ends early at frame {} of {}", self.position, self.data.num_frames);
				break;
			}
		}

		Ok(decoded)
	}

	/// Reads up to `capacity` frames into a freshly allocated buffer.
	pub fn read_frames(&mut self, capacity: usize) -> Result<PcmBuffer> {
		let mut buffer = PcmBuffer::new(self.format.channels as usize, capacity);
		buffer.frames = self.read(&mut buffer.data, capacity)?;
		Ok(buffer)
	}

	/// Releases the source.
	pub fn close(self) {
		debug!("closing wav file");
		drop(self.source);
	}

	pub fn into_inner(self) -> S {
		self.source
	}
}

impl<S: ByteSource> std::fmt::Debug for WavFile<S> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("WavFile")
			.field("format", &self.format)
			.field("data", &self.data)
			.field("position", &self.position)
			.finish()
	}
}

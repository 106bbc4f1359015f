use crate::error::{Result, WavError};
use log::error;

pub const FORMAT_PCM: u16 = 1;
pub const MIN_CHANNELS: u16 = 1;
pub const MAX_CHANNELS: u16 = 2;
pub const MAX_BYTES_PER_SAMPLE: u16 = 4;

/// Validated PCM stream parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
	pub channels: u16,
	pub sample_rate: u32,
	pub bit_depth: u16,
}

impl WavFormat {
	pub fn bytes_per_sample(&self) -> usize {
		(self.bit_depth / 8) as usize
	}

	pub fn bytes_per_frame(&self) -> usize {
		self.bytes_per_sample() * self.channels as usize
	}

	pub fn byte_rate(&self) -> u64 {
		self.sample_rate as u64 * self.bytes_per_frame() as u64
	}
}

/// The fixed 16-byte body of a `fmt ` chunk, as stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FmtChunk {
	pub format_tag: u16,
	pub channels: u16,
	pub sample_rate: u32,
	pub byte_rate: u32,
	pub block_align: u16,
	pub bits_per_sample: u16,
}

impl FmtChunk {
	pub const SIZE: usize = 16;

	pub fn from_bytes(buf: &[u8; Self::SIZE]) -> Self {
		Self {
			format_tag: u16::from_le_bytes([buf[0], buf[1]]),
			channels: u16::from_le_bytes([buf[2], buf[3]]),
			sample_rate: u32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]),
			byte_rate: u32::from_le_bytes([buf[8], buf[9], buf[10], buf[11]]),
			block_align: u16::from_le_bytes([buf[12], buf[13]]),
			bits_per_sample: u16::from_le_bytes([buf[14], buf[15]]),
		}
	}

	/// Cross-checks the redundant header fields and produces the stream format.
	pub fn validate(&self) -> Result<WavFormat> {
		if self.format_tag != FORMAT_PCM {
			error!("unsupported format ({})", self.format_tag);
			return Err(WavError::unsupported(format!("format tag {:#06x} is not PCM", self.format_tag)));
		}

		if !(MIN_CHANNELS..=MAX_CHANNELS).contains(&self.channels) {
			error!("unsupported number of channels ({})", self.channels);
			return Err(WavError::unsupported(format!("{} channels", self.channels)));
		}

		let bytes_per_sample = self.block_align / self.channels;
		if self.block_align % self.channels != 0
			|| bytes_per_sample == 0
			|| bytes_per_sample > MAX_BYTES_PER_SAMPLE
		{
			error!("invalid bytes per frame ({})", self.block_align);
			return Err(WavError::malformed_format(format!(
				"block align {} for {} channels",
				self.block_align, self.channels
			)));
		}

		let expected_byte_rate =
			self.sample_rate as u64 * self.channels as u64 * self.bits_per_sample as u64 / 8;
		if self.byte_rate as u64 != expected_byte_rate {
			error!(
				"invalid bytes per second (bytes_per_second={}, sample_rate={}, num_channels={}, bits_per_sample={})",
				self.byte_rate, self.sample_rate, self.channels, self.bits_per_sample
			);
			return Err(WavError::malformed_format(format!(
				"byte rate {} does not match {} Hz x {} channels x {} bits",
				self.byte_rate, self.sample_rate, self.channels, self.bits_per_sample
			)));
		}

		if self.sample_rate == 0 {
			error!("invalid sample rate (0)");
			return Err(WavError::malformed_format("sample rate is zero"));
		}

		if self.bits_per_sample != bytes_per_sample * 8 {
			error!(
				"unsupported sample width (bits_per_sample={}, bytes_per_sample={})",
				self.bits_per_sample, bytes_per_sample
			);
			return Err(WavError::unsupported(format!(
				"{}-bit samples in {}-byte containers",
				self.bits_per_sample, bytes_per_sample
			)));
		}

		Ok(WavFormat { channels: self.channels, sample_rate: self.sample_rate, bit_depth: self.bits_per_sample })
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::ErrorKind;

	fn pcm(channels: u16, sample_rate: u32, bits: u16) -> FmtChunk {
		let block_align = channels * bits / 8;
		FmtChunk {
			format_tag: FORMAT_PCM,
			channels,
			sample_rate,
			byte_rate: sample_rate * block_align as u32,
			block_align,
			bits_per_sample: bits,
		}
	}

	#[test]
	fn test_from_bytes() {
		let mut buf = [0u8; FmtChunk::SIZE];
		buf[0..2].copy_from_slice(&1u16.to_le_bytes());
		buf[2..4].copy_from_slice(&2u16.to_le_bytes());
		buf[4..8].copy_from_slice(&44100u32.to_le_bytes());
		buf[8..12].copy_from_slice(&176400u32.to_le_bytes());
		buf[12..14].copy_from_slice(&4u16.to_le_bytes());
		buf[14..16].copy_from_slice(&16u16.to_le_bytes());

		assert_eq!(FmtChunk::from_bytes(&buf), pcm(2, 44100, 16));
	}

	#[test]
	fn test_accepts_supported_layouts() {
		for channels in [1, 2] {
			for bits in [8, 16, 24, 32] {
				let format = pcm(channels, 48000, bits).validate().unwrap();
				assert_eq!(format.channels, channels);
				assert_eq!(format.bit_depth, bits);
				assert_eq!(format.bytes_per_frame(), (channels * bits / 8) as usize);
			}
		}
	}

	#[test]
	fn test_rejects_non_pcm() {
		let mut chunk = pcm(2, 44100, 16);
		chunk.format_tag = 3;
		assert_eq!(chunk.validate().unwrap_err().kind(), ErrorKind::Unsupported);
	}

	#[test]
	fn test_rejects_channel_count() {
		let mut chunk = pcm(2, 44100, 16);
		chunk.channels = 0;
		assert_eq!(chunk.validate().unwrap_err().kind(), ErrorKind::Unsupported);

		let chunk = pcm(3, 44100, 16);
		assert_eq!(chunk.validate().unwrap_err().kind(), ErrorKind::Unsupported);
	}

	#[test]
	fn test_rejects_block_align() {
		let mut chunk = pcm(2, 44100, 16);
		chunk.block_align = 5;
		assert!(matches!(chunk.validate(), Err(WavError::MalformedFormat(_))));

		let mut chunk = pcm(1, 8000, 32);
		chunk.block_align = 8;
		assert!(matches!(chunk.validate(), Err(WavError::MalformedFormat(_))));
	}

	#[test]
	fn test_rejects_byte_rate_mismatch() {
		let mut chunk = pcm(2, 44100, 16);
		chunk.byte_rate += 1;
		let err = chunk.validate().unwrap_err();
		assert!(matches!(err, WavError::MalformedFormat(_)));
		assert_eq!(err.kind(), ErrorKind::FileError);
	}

	#[test]
	fn test_rejects_zero_sample_rate() {
		let chunk = pcm(1, 0, 16);
		assert!(matches!(chunk.validate(), Err(WavError::MalformedFormat(_))));
	}

	#[test]
	fn test_rejects_padded_sample_width() {
		let mut chunk = pcm(1, 44100, 16);
		chunk.bits_per_sample = 12;
		chunk.byte_rate = 44100 * 12 / 8;
		assert_eq!(chunk.validate().unwrap_err().kind(), ErrorKind::Unsupported);
	}
}

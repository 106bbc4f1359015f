use crate::container::WavFormat;

const SCALE: f32 = 1.0 / 2_147_483_648.0;

/// Converts interleaved little-endian signed PCM into per-channel floats in `[-1.0, 1.0)`.
#[derive(Debug, Clone, Copy)]
pub struct PcmDecoder {
	format: WavFormat,
	shift: u32,
}

impl PcmDecoder {
	pub fn new(format: WavFormat) -> Self {
		Self { format, shift: 32 - format.bit_depth as u32 }
	}

	/// Decodes up to `max_frames` whole frames from `raw`, writing frame `i`
	/// of channel `c` to `out[c][offset + i]`. Returns the frames written.
	pub fn decode<B: AsMut<[f32]>>(
		&self,
		raw: &[u8],
		out: &mut [B],
		offset: usize,
		max_frames: usize,
	) -> usize {
		let bytes_per_sample = self.format.bytes_per_sample();
		let bytes_per_frame = self.format.bytes_per_frame();
		let frames = core::cmp::min(raw.len() / bytes_per_frame, max_frames);
		if frames == 0 {
			return 0;
		}
		let raw = &raw[..frames * bytes_per_frame];

		for (channel, dst) in out.iter_mut().take(self.format.channels as usize).enumerate() {
			let dst = &mut dst.as_mut()[offset..offset + frames];
			let first = channel * bytes_per_sample;
			let samples = raw[first..].chunks(bytes_per_frame).map(|frame| &frame[..bytes_per_sample]);
			for (slot, bytes) in dst.iter_mut().zip(samples) {
				*slot = self.normalize(read_sample(bytes));
			}
		}

		frames
	}

	#[inline]
	fn normalize(&self, raw: u32) -> f32 {
		((raw << self.shift) as i32) as f32 * SCALE
	}
}

#[inline]
fn read_sample(bytes: &[u8]) -> u32 {
	match *bytes {
		[b0] => b0 as u32,
		[b0, b1] => u16::from_le_bytes([b0, b1]) as u32,
		[b0, b1, b2] => u32::from_le_bytes([b0, b1, b2, 0]),
		[b0, b1, b2, b3] => u32::from_le_bytes([b0, b1, b2, b3]),
		_ => unreachable!("sample width {} passed format validation", bytes.len()),
	}
}

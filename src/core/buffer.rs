/// Decoded audio, one `Vec<f32>` per channel.
#[derive(Debug, Clone, PartialEq)]
pub struct PcmBuffer {
	pub data: Vec<Vec<f32>>,
	pub frames: usize,
}

impl PcmBuffer {
	pub fn new(channels: usize, capacity: usize) -> Self {
		Self { data: vec![vec![0.0; capacity]; channels], frames: 0 }
	}

	pub fn channels(&self) -> usize {
		self.data.len()
	}

	pub fn capacity(&self) -> usize {
		self.data.first().map_or(0, Vec::len)
	}

	/// The decoded samples of `channel`.
	pub fn channel(&self, channel: usize) -> &[f32] {
		&self.data[channel][..self.frames]
	}

	pub fn is_empty(&self) -> bool {
		self.frames == 0
	}

	pub fn peak(&self, channel: usize) -> f32 {
		self.channel(channel).iter().fold(0.0f32, |peak, s| peak.max(s.abs()))
	}

	pub fn rms(&self, channel: usize) -> f32 {
		let samples = self.channel(channel);
		if samples.is_empty() {
			return 0.0;
		}
		let sum: f64 = samples.iter().map(|&s| s as f64 * s as f64).sum();
		(sum / samples.len() as f64).sqrt() as f32
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_channel_view_is_truncated() {
		let mut buffer = PcmBuffer::new(2, 4);
		buffer.data[0][..2].copy_from_slice(&[0.5, -0.25]);
		buffer.frames = 2;
		assert_eq!(buffer.channels(), 2);
		assert_eq!(buffer.capacity(), 4);
		assert_eq!(buffer.channel(0), &[0.5, -0.25]);
		assert_eq!(buffer.channel(1), &[0.0, 0.0]);
	}

	#[test]
	fn test_levels() {
		let mut buffer = PcmBuffer::new(1, 4);
		buffer.data[0].copy_from_slice(&[0.5, -0.5, 0.5, -0.5]);
		buffer.frames = 4;
		assert_eq!(buffer.peak(0), 0.5);
		assert!((buffer.rms(0) - 0.5).abs() < 1e-6);

		buffer.frames = 0;
		assert!(buffer.is_empty());
		assert_eq!(buffer.rms(0), 0.0);
	}
}

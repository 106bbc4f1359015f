#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeekTarget {
	Time(f64),
	Frame(u32),
}

#[derive(Debug, Clone, Default)]
pub struct ShowOptions {
	pub json: bool,
	pub seek: Option<SeekTarget>,
	pub frame_limit: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChannelLevels {
	pub peak: f32,
	pub rms: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WavInfo {
	pub path: String,
	pub channels: u16,
	pub sample_rate: u32,
	pub bit_depth: u16,
	pub num_frames: u32,
	pub duration: f64,
	pub start_frame: u32,
	pub frames_read: usize,
	pub levels: Vec<ChannelLevels>,
}

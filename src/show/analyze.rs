use super::types::{ChannelLevels, SeekTarget, ShowOptions, WavInfo};
use crate::container::WavFile;
use crate::container::wav::READ_BATCH_FRAMES;
use crate::error::Result;
use crate::io::ByteSource;

pub fn analyze_path(path: &str, opts: &ShowOptions) -> Result<WavInfo> {
	let wav = WavFile::open(path)?;
	analyze_wav(wav, path, opts)
}

pub fn analyze_wav<S: ByteSource>(mut wav: WavFile<S>, path: &str, opts: &ShowOptions) -> Result<WavInfo> {
	match opts.seek {
		Some(SeekTarget::Time(seconds)) => wav.seek_to_time(seconds)?,
		Some(SeekTarget::Frame(frame)) => wav.seek_to_frame(frame)?,
		None => {}
	}
	let start_frame = wav.position();

	let channels = wav.num_channels() as usize;
	let mut peaks = vec![0.0f32; channels];
	let mut squares = vec![0.0f64; channels];
	let mut frames_read = 0usize;
	let limit = opts.frame_limit.unwrap_or(usize::MAX);

	while frames_read < limit {
		let want = (limit - frames_read).min(READ_BATCH_FRAMES);
		let buffer = wav.read_frames(want)?;
		if buffer.is_empty() {
			break;
		}
		for channel in 0..channels {
			peaks[channel] = peaks[channel].max(buffer.peak(channel));
			squares[channel] += buffer.channel(channel).iter().map(|&s| s as f64 * s as f64).sum::<f64>();
		}
		frames_read += buffer.frames;
	}

	let levels = peaks
		.iter()
		.zip(&squares)
		.map(|(&peak, &sum)| ChannelLevels { peak, rms: mean_root(sum, frames_read) })
		.collect();

	let info = WavInfo {
		path: path.to_string(),
		channels: wav.num_channels(),
		sample_rate: wav.sample_rate(),
		bit_depth: wav.bits_per_sample(),
		num_frames: wav.num_frames(),
		duration: wav.duration(),
		start_frame,
		frames_read,
		levels,
	};

	wav.close();
	Ok(info)
}

fn mean_root(sum_of_squares: f64, count: usize) -> f32 {
	if count == 0 {
		return 0.0;
	}
	(sum_of_squares / count as f64).sqrt() as f32
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::ErrorKind;
	use crate::io::Cursor;

	fn stereo_8(frames: &[(i8, i8)]) -> Vec<u8> {
		let data_size = frames.len() as u32 * 2;
		let mut wav = Vec::new();
		wav.extend_from_slice(b"RIFF");
		wav.extend_from_slice(&(36 + data_size).to_le_bytes());
		wav.extend_from_slice(b"WAVE");
		wav.extend_from_slice(b"fmt ");
		wav.extend_from_slice(&16u32.to_le_bytes());
		wav.extend_from_slice(&1u16.to_le_bytes());
		wav.extend_from_slice(&2u16.to_le_bytes());
		wav.extend_from_slice(&100u32.to_le_bytes());
		wav.extend_from_slice(&200u32.to_le_bytes());
		wav.extend_from_slice(&2u16.to_le_bytes());
		wav.extend_from_slice(&8u16.to_le_bytes());
		wav.extend_from_slice(b"data");
		wav.extend_from_slice(&data_size.to_le_bytes());
		for &(l, r) in frames {
			wav.push(l as u8);
			wav.push(r as u8);
		}
		wav
	}

	#[test]
	fn test_levels_per_channel() {
		let wav = WavFile::from_source(Cursor::new(stereo_8(&[(64, -32), (-64, 32)]))).unwrap();
		let info = analyze_wav(wav, "mem.wav", &ShowOptions::default()).unwrap();

		assert_eq!(info.frames_read, 2);
		assert_eq!(info.duration, 0.02);
		assert_eq!(info.levels[0], ChannelLevels { peak: 0.5, rms: 0.5 });
		assert_eq!(info.levels[1], ChannelLevels { peak: 0.25, rms: 0.25 });
	}

	#[test]
	fn test_seek_and_limit() {
		let frames: Vec<(i8, i8)> = (0..50).map(|i| (i as i8, 0)).collect();
		let wav = WavFile::from_source(Cursor::new(stereo_8(&frames))).unwrap();
		let opts = ShowOptions { seek: Some(SeekTarget::Time(0.2)), frame_limit: Some(5), ..Default::default() };
		let info = analyze_wav(wav, "mem.wav", &opts).unwrap();

		assert_eq!(info.start_frame, 20);
		assert_eq!(info.frames_read, 5);
		assert_eq!(info.levels[0].peak, 24.0 / 128.0);
	}

	#[test]
	fn test_seek_past_end() {
		let wav = WavFile::from_source(Cursor::new(stereo_8(&[(0, 0)]))).unwrap();
		let opts = ShowOptions { seek: Some(SeekTarget::Frame(2)), ..Default::default() };
		let err = analyze_wav(wav, "mem.wav", &opts).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::InvalidParam);
	}
}

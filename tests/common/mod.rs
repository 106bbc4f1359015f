#![allow(dead_code)]

pub fn chunk(id: &[u8; 4], body: &[u8]) -> Vec<u8> {
	let mut out = Vec::with_capacity(8 + body.len());
	out.extend_from_slice(id);
	out.extend_from_slice(&(body.len() as u32).to_le_bytes());
	out.extend_from_slice(body);
	out
}

pub fn fmt_body(channels: u16, sample_rate: u32, bits_per_sample: u16) -> Vec<u8> {
	let block_align = channels * bits_per_sample / 8;
	let byte_rate = sample_rate * block_align as u32;
	fmt_body_raw(1, channels, sample_rate, byte_rate, block_align, bits_per_sample)
}

pub fn fmt_body_raw(
	format_tag: u16,
	channels: u16,
	sample_rate: u32,
	byte_rate: u32,
	block_align: u16,
	bits_per_sample: u16,
) -> Vec<u8> {
	let mut body = Vec::with_capacity(16);
	body.extend_from_slice(&format_tag.to_le_bytes());
	body.extend_from_slice(&channels.to_le_bytes());
	body.extend_from_slice(&sample_rate.to_le_bytes());
	body.extend_from_slice(&byte_rate.to_le_bytes());
	body.extend_from_slice(&block_align.to_le_bytes());
	body.extend_from_slice(&bits_per_sample.to_le_bytes());
	body
}

pub fn riff(chunks: &[Vec<u8>]) -> Vec<u8> {
	let body = chunks.concat();
	let mut wav = Vec::with_capacity(12 + body.len());
	wav.extend_from_slice(b"RIFF");
	wav.extend_from_slice(&(4 + body.len() as u32).to_le_bytes());
	wav.extend_from_slice(b"WAVE");
	wav.extend(body);
	wav
}

/// Little-endian two's complement, truncated to the sample width.
pub fn encode_samples(bits_per_sample: u16, samples: &[i32]) -> Vec<u8> {
	let width = (bits_per_sample / 8) as usize;
	let mut out = Vec::with_capacity(samples.len() * width);
	for sample in samples {
		out.extend_from_slice(&sample.to_le_bytes()[..width]);
	}
	out
}

/// Interleaved samples in a minimal `fmt ` + `data` file.
pub fn pcm_wav(channels: u16, sample_rate: u32, bits_per_sample: u16, samples: &[i32]) -> Vec<u8> {
	riff(&[
		chunk(b"fmt ", &fmt_body(channels, sample_rate, bits_per_sample)),
		chunk(b"data", &encode_samples(bits_per_sample, samples)),
	])
}

/// A deterministic pattern touching both extremes of the range.
pub fn sample_pattern(bits_per_sample: u16, count: usize) -> Vec<i32> {
	let max = ((1i64 << (bits_per_sample - 1)) - 1) as i32;
	let min = (-(1i64 << (bits_per_sample - 1))) as i32;
	(0..count)
		.map(|i| match i % 5 {
			0 => max,
			1 => min,
			2 => 0,
			3 => (i as i64 * 7919 % max as i64) as i32,
			_ => -((i as i64 * 104_729 % max as i64) as i32),
		})
		.collect()
}

pub fn expected_sample(bits_per_sample: u16, value: i32) -> f32 {
	(value as f64 / (1u64 << (bits_per_sample - 1)) as f64) as f32
}

pub fn assert_close(actual: f32, expected: f32) {
	assert!((actual - expected).abs() <= 1e-6, "sample {} != expected {}", actual, expected);
}

use super::types::WavInfo;

pub fn render(info: &WavInfo) {
	println!("{}", to_json(info));
}

pub fn to_json(info: &WavInfo) -> String {
	let mut out = format!(
		"{{\"path\":{},\"channels\":{},\"sample_rate\":{},\"bits_per_sample\":{},\"num_frames\":{},\"duration\":{},\"start_frame\":{},\"frames_read\":{},\"levels\":[",
		escape(&info.path),
		info.channels,
		info.sample_rate,
		info.bit_depth,
		info.num_frames,
		info.duration,
		info.start_frame,
		info.frames_read
	);
	for (i, levels) in info.levels.iter().enumerate() {
		if i > 0 {
			out.push(',');
		}
		out.push_str(&format!("{{\"peak\":{},\"rms\":{}}}", levels.peak, levels.rms));
	}
	out.push_str("]}");
	out
}

fn escape(s: &str) -> String {
	let mut out = String::with_capacity(s.len() + 2);
	out.push('"');
	for c in s.chars() {
		match c {
			'"' => out.push_str("\\\""),
			'\\' => out.push_str("\\\\"),
			'\n' => out.push_str("\\n"),
			'\r' => out.push_str("\\r"),
			'\t' => out.push_str("\\t"),
			c if (c as u32) < 0x20 => {
				out.push_str(&format!("\\u{:04x}", c as u32));
			}
			c => out.push(c),
		}
	}
	out.push('"');
	out
}

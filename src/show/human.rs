use super::types::WavInfo;
use prettytable::format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR;
use prettytable::{Cell, Row, Table};

pub fn render(info: &WavInfo) {
	build_table(info).printstd();
}

pub fn build_table(info: &WavInfo) -> Table {
	let mut table = Table::new();
	table.set_format(*FORMAT_NO_BORDER_LINE_SEPARATOR);
	table.set_titles(Row::new(vec![Cell::new("file"), Cell::new(&info.path)]));

	let mut add = |key: &str, value: String| {
		table.add_row(Row::new(vec![Cell::new(key), Cell::new(&value)]));
	};

	add("codec", format!("pcm_s{}le", info.bit_depth));
	add("channels", info.channels.to_string());
	add("sample rate", format!("{} Hz", info.sample_rate));
	add("frames", info.num_frames.to_string());
	add("duration", format!("{:.3} s", info.duration));
	add("start frame", info.start_frame.to_string());
	add("frames read", info.frames_read.to_string());

	for (channel, levels) in info.levels.iter().enumerate() {
		add(
			&format!("channel {}", channel),
			format!("peak {:.4} ({}), rms {:.4}", levels.peak, dbfs(levels.peak), levels.rms),
		);
	}

	table
}

fn dbfs(level: f32) -> String {
	if level <= 0.0 {
		return "-inf dBFS".to_string();
	}
	format!("{:.1} dBFS", 20.0 * level.log10())
}

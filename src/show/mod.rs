mod analyze;
mod human;
mod json;
mod types;

pub use analyze::{analyze_path, analyze_wav};
pub use types::{ChannelLevels, SeekTarget, ShowOptions, WavInfo};

use crate::error::Result;

pub struct Show {
	input_path: String,
	opts: ShowOptions,
}

impl Show {
	pub fn new(input_path: String, opts: ShowOptions) -> Self {
		Self { input_path, opts }
	}

	pub fn run(&self) -> Result<()> {
		let info = analyze_path(&self.input_path, &self.opts)?;
		self.render(&info);
		Ok(())
	}

	fn render(&self, info: &WavInfo) {
		if self.opts.json {
			json::render(info);
			return;
		}

		human::render(info);
	}
}

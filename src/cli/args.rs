use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "pcmwav")]
#[command(about = env!("CARGO_PKG_DESCRIPTION"), long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Args {
	#[arg(short, long, value_name = "FILE", help = "Input WAV file or glob pattern")]
	pub input: String,

	#[arg(long, value_name = "SECONDS", conflicts_with = "offset", help = "Start reading at this time")]
	pub seek: Option<f64>,

	#[arg(long, value_name = "FRAME", help = "Start reading at this frame")]
	pub offset: Option<u32>,

	#[arg(long, value_name = "N", help = "Read at most N frames (default: all)")]
	pub frames: Option<usize>,

	#[arg(long, help = "Print one JSON object per file")]
	pub json: bool,

	#[arg(short, long, help = "Log parser and reader diagnostics")]
	pub verbose: bool,
}

impl Args {
	pub fn parse() -> Self {
		<Self as clap::Parser>::parse()
	}
}

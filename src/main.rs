use pcmwav::cli::{Args, Batch};
use pcmwav::show::{SeekTarget, ShowOptions};

fn main() {
	let args = Args::parse();

	let default_level = if args.verbose { "debug" } else { "warn" };
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

	let seek = match (args.seek, args.offset) {
		(Some(seconds), _) => Some(SeekTarget::Time(seconds)),
		(None, Some(frame)) => Some(SeekTarget::Frame(frame)),
		(None, None) => None,
	};
	let opts = ShowOptions { json: args.json, seek, frame_limit: args.frames };

	match Batch::new(args.input.clone(), opts).run() {
		Ok(0) => {}
		Ok(failures) => {
			eprintln!("{} file(s) failed", failures);
			std::process::exit(1);
		}
		Err(e) => {
			eprintln!("Error: {}", e);
			std::process::exit(1);
		}
	}
}

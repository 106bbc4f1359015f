use crate::show::{Show, ShowOptions};
use std::io::{Error, ErrorKind, Result};

pub struct Batch {
	input_pattern: String,
	opts: ShowOptions,
}

impl Batch {
	pub fn new(input_pattern: String, opts: ShowOptions) -> Self {
		Self { input_pattern, opts }
	}

	/// Shows every matching file, returning how many failed.
	pub fn run(&self) -> Result<usize> {
		let files = self.expand_glob()?;

		if files.is_empty() {
			return Err(Error::new(
				ErrorKind::NotFound,
				format!("no files matching pattern: {}", self.input_pattern),
			));
		}

		let mut failures = 0;
		for input_path in files {
			let show = Show::new(input_path.clone(), self.opts.clone());
			if let Err(e) = show.run() {
				log::error!("{}: {}", input_path, e);
				eprintln!("Error: {}: {}", input_path, e);
				failures += 1;
			}
		}

		Ok(failures)
	}

	fn expand_glob(&self) -> Result<Vec<String>> {
		let mut files = Vec::new();

		if is_batch_pattern(&self.input_pattern) {
			let pattern = &self.input_pattern;
			for entry in glob::glob(pattern).map_err(|e| {
				Error::new(ErrorKind::InvalidInput, format!("invalid glob pattern: {}", e))
			})? {
				match entry {
					Ok(path) => {
						if path.is_file() {
							files.push(path.to_string_lossy().to_string());
						}
					}
					Err(e) => {
						log::warn!("failed to read entry: {}", e);
					}
				}
			}
		} else {
			files.push(self.input_pattern.clone());
		}

		Ok(files)
	}
}

pub fn is_batch_pattern(input: &str) -> bool {
	input.contains('*')
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_expand_glob_filters_files() {
		let dir = tempfile::tempdir().unwrap();
		std::fs::write(dir.path().join("a.wav"), b"").unwrap();
		std::fs::write(dir.path().join("b.wav"), b"").unwrap();
		std::fs::write(dir.path().join("c.txt"), b"").unwrap();
		std::fs::create_dir(dir.path().join("d.wav")).unwrap();

		let pattern = format!("{}/*.wav", dir.path().display());
		let mut files = Batch::new(pattern, ShowOptions::default()).expand_glob().unwrap();
		files.sort();
		assert_eq!(files.len(), 2);
		assert!(files[0].ends_with("a.wav"));
		assert!(files[1].ends_with("b.wav"));
	}

	#[test]
	fn test_plain_path_passes_through() {
		let files = Batch::new("x.wav".to_string(), ShowOptions::default()).expand_glob().unwrap();
		assert_eq!(files, vec!["x.wav".to_string()]);
	}

	#[test]
	fn test_run_counts_failures() {
		let dir = tempfile::tempdir().unwrap();
		std::fs::write(dir.path().join("bad.wav"), b"not a wav").unwrap();
		let pattern = format!("{}/*.wav", dir.path().display());
		assert_eq!(Batch::new(pattern, ShowOptions::default()).run().unwrap(), 1);
	}

	#[test]
	fn test_empty_match_is_not_found() {
		let dir = tempfile::tempdir().unwrap();
		let pattern = format!("{}/*.wav", dir.path().display());
		let err = Batch::new(pattern, ShowOptions::default()).run().unwrap_err();
		assert_eq!(err.kind(), ErrorKind::NotFound);
	}
}

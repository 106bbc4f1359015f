//! Reader for uncompressed PCM audio stored in RIFF/WAVE files.
//!
//! ```no_run
//! use pcmwav::WavFile;
//!
//! let mut wav = WavFile::open("drum.wav")?;
//! wav.seek_to_time(0.6)?;
//! let buffer = wav.read_frames(1024)?;
//! println!("{} frames of {} channels", buffer.frames, buffer.channels());
//! # Ok::<(), pcmwav::WavError>(())
//! ```

pub mod cli;
pub mod codecs;
pub mod container;
pub mod core;
pub mod error;
pub mod io;
pub mod show;

pub use container::{DataRegion, WavFile, WavFormat};
pub use crate::core::PcmBuffer;
pub use error::{ErrorKind, Result, WavError};

pub mod chunk;
pub mod file;
pub mod format;
pub mod parse;

pub use chunk::{ChunkHeader, ChunkReader};
pub use file::{READ_BATCH_FRAMES, WavFile};
pub use format::{FmtChunk, MAX_BYTES_PER_SAMPLE, MAX_CHANNELS, MIN_CHANNELS, WavFormat};
pub use parse::{DataRegion, WavParser, parse};

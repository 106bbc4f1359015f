pub mod buffer;

pub use buffer::PcmBuffer;

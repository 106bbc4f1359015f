pub mod wav;

pub use wav::{DataRegion, WavFile, WavFormat};

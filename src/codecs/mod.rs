pub mod pcm;

pub use pcm::PcmDecoder;

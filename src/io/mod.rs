mod cursor;
mod error;
mod file;
mod reader;
mod seek;

pub use cursor::Cursor;
pub use error::{IoError, IoErrorKind, IoResult};
pub use file::FileSource;
pub use reader::{MediaRead, ReadPrimitives};
pub use seek::{MediaSeek, SeekFrom};

/// A readable, seekable byte stream.
pub trait ByteSource: MediaRead + MediaSeek {}

impl<T: MediaRead + MediaSeek> ByteSource for T {}

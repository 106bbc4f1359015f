use crate::io::IoError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WavError>;

/// Closed set of outcomes callers branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	/// The underlying stream could not be opened.
	OpenFailed,
	/// A read or seek failed, or the container is structurally corrupt.
	FileError,
	/// The container is valid but its encoding is not supported.
	Unsupported,
	/// A caller-supplied argument was out of range. The handle is unchanged.
	InvalidParam,
}

#[derive(Debug, Error)]
pub enum WavError {
	#[error("failed to open {}: {source}", .path.display())]
	OpenFailed {
		path: PathBuf,
		#[source]
		source: IoError,
	},

	#[error("stream error: {0}")]
	Io(#[from] IoError),

	#[error("malformed RIFF container: {0}")]
	MalformedContainer(&'static str),

	#[error("malformed fmt chunk: {0}")]
	MalformedFormat(String),

	#[error("multiple data chunks")]
	DuplicateDataChunk,

	#[error("data chunk came before fmt chunk")]
	DataBeforeFormat,

	#[error("fmt chunk came after data chunk")]
	FormatAfterData,

	#[error("no data chunk found")]
	NoDataChunk,

	#[error("unsupported: {0}")]
	Unsupported(String),

	#[error("invalid parameter: {0}")]
	InvalidParam(String),
}

impl WavError {
	pub fn kind(&self) -> ErrorKind {
		match self {
			WavError::OpenFailed { .. } => ErrorKind::OpenFailed,
			WavError::Unsupported(_) => ErrorKind::Unsupported,
			WavError::InvalidParam(_) => ErrorKind::InvalidParam,
			WavError::Io(_)
			| WavError::MalformedContainer(_)
			| WavError::MalformedFormat(_)
			| WavError::DuplicateDataChunk
			| WavError::DataBeforeFormat
			| WavError::FormatAfterData
			| WavError::NoDataChunk => ErrorKind::FileError,
		}
	}

	pub(crate) fn invalid_param(message: impl Into<String>) -> Self {
		WavError::InvalidParam(message.into())
	}

	pub(crate) fn unsupported(message: impl Into<String>) -> Self {
		WavError::Unsupported(message.into())
	}

	pub(crate) fn malformed_format(message: impl Into<String>) -> Self {
		WavError::MalformedFormat(message.into())
	}
}

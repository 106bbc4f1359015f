use std::fmt;

pub type IoResult<T> = Result<T, IoError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoErrorKind {
	NotFound,
	PermissionDenied,
	UnexpectedEof,
	InvalidData,
	InvalidInput,
	Interrupted,
	Other,
}

impl IoErrorKind {
	fn as_str(&self) -> &'static str {
		match self {
			IoErrorKind::NotFound => "not found",
			IoErrorKind::PermissionDenied => "permission denied",
			IoErrorKind::UnexpectedEof => "unexpected end of stream",
			IoErrorKind::InvalidData => "invalid data",
			IoErrorKind::InvalidInput => "invalid input",
			IoErrorKind::Interrupted => "interrupted",
			IoErrorKind::Other => "i/o error",
		}
	}
}

impl From<std::io::ErrorKind> for IoErrorKind {
	fn from(kind: std::io::ErrorKind) -> Self {
		match kind {
			std::io::ErrorKind::NotFound => IoErrorKind::NotFound,
			std::io::ErrorKind::PermissionDenied => IoErrorKind::PermissionDenied,
			std::io::ErrorKind::UnexpectedEof => IoErrorKind::UnexpectedEof,
			std::io::ErrorKind::InvalidData => IoErrorKind::InvalidData,
			std::io::ErrorKind::InvalidInput => IoErrorKind::InvalidInput,
			std::io::ErrorKind::Interrupted => IoErrorKind::Interrupted,
			_ => IoErrorKind::Other,
		}
	}
}

#[derive(Debug, Clone)]
pub struct IoError {
	kind: IoErrorKind,
	message: String,
}

impl IoError {
	pub fn new(kind: IoErrorKind, message: impl Into<String>) -> Self {
		Self { kind, message: message.into() }
	}

	#[inline]
	pub fn unexpected_eof() -> Self {
		Self::new(IoErrorKind::UnexpectedEof, "")
	}

	#[inline]
	pub fn invalid_input(message: impl Into<String>) -> Self {
		Self::new(IoErrorKind::InvalidInput, message)
	}

	#[inline]
	pub fn kind(&self) -> IoErrorKind {
		self.kind
	}
}

impl fmt::Display for IoError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.message.is_empty() {
			write!(f, "{}", self.kind.as_str())
		} else {
			write!(f, "{}: {}", self.kind.as_str(), self.message)
		}
	}
}

impl std::error::Error for IoError {}

impl From<std::io::Error> for IoError {
	fn from(err: std::io::Error) -> Self {
		Self::new(err.kind().into(), err.to_string())
	}
}

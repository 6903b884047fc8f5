//! Contains the errors that can arise within dsfinfo
//!
//! The primary error is [`DsfError`]. The type of error is determined by
//! [`ErrorKind`], which can be extended at any time.

use std::fmt::{Debug, Display, Formatter};

/// Alias for `Result<T, DsfError>`
pub type Result<T> = std::result::Result<T, DsfError>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	/// The stream does not begin with a `DSD ` chunk
	///
	/// Either the magic tag is absent or the stream is shorter than the
	/// 28-byte chunk. The input is not recognizable as DSF at all; callers
	/// probing multiple formats can treat this as a cue to try a different
	/// reader.
	HeaderNotFound,
	/// The `DSD ` chunk was recognized, but the header is malformed
	///
	/// A mis-tagged or truncated `fmt ` chunk, or a declared sample rate of
	/// zero. The stream is DSF, just not a usable instance of it, so trying
	/// another reader won't help.
	InvalidHeader(&'static str),
	/// Represents all cases of [`std::io::Error`].
	Io(std::io::Error),
}

/// Errors that could occur within dsfinfo
pub struct DsfError {
	pub(crate) kind: ErrorKind,
}

impl DsfError {
	/// Create a `DsfError` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use dsfinfo::error::{DsfError, ErrorKind};
	///
	/// let header_not_found = DsfError::new(ErrorKind::HeaderNotFound);
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use dsfinfo::error::{DsfError, ErrorKind};
	///
	/// let header_not_found = DsfError::new(ErrorKind::HeaderNotFound);
	/// if let ErrorKind::HeaderNotFound = header_not_found.kind() {
	/// 	println!("Not a DSF stream, try something else");
	/// }
	/// ```
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}
}

impl std::error::Error for DsfError {}

impl Debug for DsfError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl From<std::io::Error> for DsfError {
	fn from(input: std::io::Error) -> Self {
		Self {
			kind: ErrorKind::Io(input),
		}
	}
}

impl Display for DsfError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			// Conversions
			ErrorKind::Io(ref err) => write!(f, "{err}"),

			ErrorKind::HeaderNotFound => write!(f, "DSD header not found"),
			ErrorKind::InvalidHeader(description) => {
				write!(f, "Invalid DSF header: {description}")
			},
		}
	}
}

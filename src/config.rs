//! Options to control how dsfinfo parses a stream

/// Options to control how dsfinfo parses a stream
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct ParseOptions {
	pub(crate) read_properties: bool,
}

impl Default for ParseOptions {
	/// The default implementation for `ParseOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// ParseOptions {
	/// 	read_properties: true,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}

impl ParseOptions {
	/// Creates a new `ParseOptions`, alias for `Default` implementation
	///
	/// See also: [`ParseOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use dsfinfo::config::ParseOptions;
	///
	/// let parsing_options = ParseOptions::new();
	/// ```
	#[must_use]
	pub const fn new() -> Self {
		Self {
			read_properties: true,
		}
	}

	/// Whether or not to decode the audio properties
	///
	/// When disabled, the container is still validated (both magic tags and
	/// both full-size chunks must be present) and the file size and tag
	/// offset are still read, but the audio fields of the result are zeroed.
	/// Useful when only the tag block location is of interest.
	///
	/// # Examples
	///
	/// ```rust
	/// use dsfinfo::config::ParseOptions;
	///
	/// // By default, `read_properties` is enabled. Here, we only want the tag offset.
	/// let parsing_options = ParseOptions::new().read_properties(false);
	/// ```
	pub fn read_properties(&mut self, read_properties: bool) -> Self {
		self.read_properties = read_properties;
		*self
	}
}

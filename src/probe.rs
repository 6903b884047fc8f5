//! File-type detection for DSF streams

use crate::config::ParseOptions;
use crate::error::Result;
use crate::properties::DsfProperties;
use crate::read::{DSD_MAGIC, read_from};

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// The file extension associated with DSF, without the '.'
pub const EXTENSION: &str = "dsf";

/// The MIME type associated with DSF
pub const MIME_TYPE: &str = "audio/dsf";

/// Score a candidate file for being DSF
///
/// A pure heuristic for file-type registries that rank competing format
/// handlers: 2 points if `header` starts with the `DSD ` magic tag, plus 1
/// if `filename` ends with `.dsf` (case-insensitive). Higher scores win.
///
/// This performs no validation beyond the prefix check; it is not a
/// substitute for [`read_from`].
///
/// # Examples
///
/// ```rust
/// use dsfinfo::probe;
///
/// assert_eq!(probe::score("album.dsf", b"DSD "), 3);
/// assert_eq!(probe::score("album.flac", b"fLaC"), 0);
/// ```
pub fn score(filename: &str, header: &[u8]) -> u8 {
	let mut score = 0;

	if header.starts_with(DSD_MAGIC) {
		score += 2;
	}

	if filename.to_ascii_lowercase().ends_with(".dsf") {
		score += 1;
	}

	score
}

/// Check whether a buffer begins with the DSF magic tag
///
/// # Examples
///
/// ```rust
/// use dsfinfo::probe;
///
/// assert!(probe::is_dsf(b"DSD \x1C\x00\x00\x00"));
/// assert!(!probe::is_dsf(b"RIFF"));
/// ```
pub fn is_dsf(buf: &[u8]) -> bool {
	buf.starts_with(DSD_MAGIC)
}

/// Read DSF stream information from a path
///
/// # Errors
///
/// * `path` does not exist
/// * See [`read_from`]
///
/// # Examples
///
/// ```rust,no_run
/// # fn main() -> dsfinfo::error::Result<()> {
/// let properties = dsfinfo::read_from_path("path/to/my.dsf")?;
///
/// assert!(properties.sample_rate() > 0);
/// # Ok(())
/// # }
/// ```
pub fn read_from_path<P>(path: P) -> Result<DsfProperties>
where
	P: AsRef<Path>,
{
	let path = path.as_ref();
	log::debug!("Opening `{}` for reading", path.display());

	let mut reader = BufReader::new(File::open(path)?);
	read_from(&mut reader, ParseOptions::default())
}

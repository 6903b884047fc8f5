//! Stream information declared by a DSF header

use crate::util::math::RoundedDivision;

use std::fmt::{Display, Formatter};
use std::time::Duration;

/// DSF audio properties
///
/// The immutable result of a successful [`read_from`](crate::read_from).
/// Every field is a pass-through of what the header declares; nothing is
/// verified against the actual audio data, and the channel and format
/// descriptors are not interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DsfProperties {
	pub(crate) file_size: u64,
	pub(crate) tag_offset: u64,
	pub(crate) format_version: u32,
	pub(crate) format_id: u32,
	pub(crate) channel_type: u32,
	pub(crate) channel_count: u32,
	pub(crate) sample_rate: u32,
	pub(crate) bits_per_sample: u32,
	pub(crate) sample_count: u64,
}

impl DsfProperties {
	/// Total container size in bytes, as declared by the header
	pub fn file_size(&self) -> u64 {
		self.file_size
	}

	/// Byte offset of the embedded tag block
	///
	/// This is whatever the header declares; it may point past
	/// [`file_size`](Self::file_size) when no tag block is present. Reading
	/// and writing the block itself is left to a tagging library.
	pub fn tag_offset(&self) -> u64 {
		self.tag_offset
	}

	/// Declared format version
	pub fn format_version(&self) -> u32 {
		self.format_version
	}

	/// Declared format ID
	pub fn format_id(&self) -> u32 {
		self.format_id
	}

	/// Channel layout descriptor
	pub fn channel_type(&self) -> u32 {
		self.channel_type
	}

	/// Number of channels
	pub fn channel_count(&self) -> u32 {
		self.channel_count
	}

	/// Sample rate (2822400 for DSD64, etc.)
	///
	/// Non-zero for any fully parsed stream.
	pub fn sample_rate(&self) -> u32 {
		self.sample_rate
	}

	/// Bits per sample (1 or 8 in practice)
	pub fn bits_per_sample(&self) -> u32 {
		self.bits_per_sample
	}

	/// Total samples per channel
	pub fn sample_count(&self) -> u64 {
		self.sample_count
	}

	/// Audio length, in seconds
	///
	/// Derived as `sample_count / sample_rate`. Zeroed properties (see
	/// [`ParseOptions::read_properties`](crate::config::ParseOptions::read_properties))
	/// report a length of `0.0`.
	pub fn length_seconds(&self) -> f64 {
		if self.sample_rate == 0 {
			return 0.0;
		}

		self.sample_count as f64 / f64::from(self.sample_rate)
	}

	/// Duration
	pub fn duration(&self) -> Duration {
		Duration::from_secs_f64(self.length_seconds())
	}

	/// Audio bitrate (kbps)
	pub fn bitrate(&self) -> u32 {
		(u64::from(self.sample_rate) * u64::from(self.channel_count) * u64::from(self.bits_per_sample))
			.div_round(1000) as u32
	}
}

/// The diagnostic summary line, ex. `DSF, 2.00 seconds, 2822400 Hz.`
impl Display for DsfProperties {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"DSF, {:.2} seconds, {} Hz.",
			self.length_seconds(),
			self.sample_rate
		)
	}
}

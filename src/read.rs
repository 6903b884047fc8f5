use crate::config::ParseOptions;
use crate::error::Result;
use crate::macros::err;
use crate::properties::DsfProperties;

use std::io::{Read, Seek};

use byteorder::{ByteOrder, LittleEndian};

// DSF stream structure constants
pub(crate) const DSD_MAGIC: &[u8; 4] = b"DSD ";
pub(crate) const FMT_MAGIC: &[u8; 4] = b"fmt ";

pub(crate) const DSD_CHUNK_SIZE: usize = 28;
pub(crate) const FMT_CHUNK_SIZE: usize = 52;

/// Read DSF stream information from a reader
///
/// The reader is unconditionally seeked to the start of the stream. On
/// success its position will have advanced by exactly 80 bytes; after a
/// failure the position is unspecified, so reseek before reusing the reader.
///
/// # Errors
///
/// * [`ErrorKind::HeaderNotFound`](crate::error::ErrorKind::HeaderNotFound)
///   if the stream does not begin with a full `DSD ` chunk
/// * [`ErrorKind::InvalidHeader`](crate::error::ErrorKind::InvalidHeader)
///   if the `fmt ` chunk is mis-tagged or truncated, or the declared sample
///   rate is zero
/// * [`ErrorKind::Io`](crate::error::ErrorKind::Io) if reading fails for any
///   other reason
pub fn read_from<R>(reader: &mut R, parse_options: ParseOptions) -> Result<DsfProperties>
where
	R: Read + Seek,
{
	reader.rewind()?;

	let dsd_chunk = read_dsd_chunk(reader)?;

	// Bytes [4..12] are the chunk's own size field, not validated
	let file_size = LittleEndian::read_u64(&dsd_chunk[12..20]);
	let tag_offset = LittleEndian::read_u64(&dsd_chunk[20..28]);

	let fmt_chunk = read_fmt_chunk(reader)?;

	if !parse_options.read_properties {
		log::debug!("DSF: Container validated, skipping property decoding");

		return Ok(DsfProperties {
			file_size,
			tag_offset,
			..DsfProperties::default()
		});
	}

	let sample_rate = LittleEndian::read_u32(&fmt_chunk[28..32]);

	// The length is derived as `sample_count / sample_rate`
	if sample_rate == 0 {
		err!(InvalidHeader("Sample rate must be non-zero"));
	}

	let properties = DsfProperties {
		file_size,
		tag_offset,
		format_version: LittleEndian::read_u32(&fmt_chunk[12..16]),
		format_id: LittleEndian::read_u32(&fmt_chunk[16..20]),
		channel_type: LittleEndian::read_u32(&fmt_chunk[20..24]),
		channel_count: LittleEndian::read_u32(&fmt_chunk[24..28]),
		sample_rate,
		bits_per_sample: LittleEndian::read_u32(&fmt_chunk[32..36]),
		sample_count: LittleEndian::read_u64(&fmt_chunk[36..44]),
	};

	log::debug!(
		"DSF: {} Hz, {} channel(s), {} bit(s) per sample",
		properties.sample_rate,
		properties.channel_count,
		properties.bits_per_sample
	);

	Ok(properties)
}

/// Read the 28-byte `DSD ` chunk that opens every DSF stream
///
/// A short read is classified the same as a missing magic tag: the input is
/// simply not DSF.
fn read_dsd_chunk<R: Read>(reader: &mut R) -> Result<[u8; DSD_CHUNK_SIZE]> {
	let mut dsd_chunk = [0; DSD_CHUNK_SIZE];
	match reader.read_exact(&mut dsd_chunk) {
		Ok(()) => {},
		Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => err!(HeaderNotFound),
		Err(e) => return Err(e.into()),
	}

	if &dsd_chunk[..4] != DSD_MAGIC {
		err!(HeaderNotFound);
	}

	Ok(dsd_chunk)
}

/// Read the 52-byte `fmt ` chunk immediately following the `DSD ` chunk
///
/// At this point the container has been recognized, so a short read or a
/// magic mismatch means a malformed stream rather than a non-match.
fn read_fmt_chunk<R: Read>(reader: &mut R) -> Result<[u8; FMT_CHUNK_SIZE]> {
	let mut fmt_chunk = [0; FMT_CHUNK_SIZE];
	match reader.read_exact(&mut fmt_chunk) {
		Ok(()) => {},
		Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
			err!(InvalidHeader("fmt chunk truncated"))
		},
		Err(e) => return Err(e.into()),
	}

	if &fmt_chunk[..4] != FMT_MAGIC {
		err!(InvalidHeader("Expected fmt chunk"));
	}

	Ok(fmt_chunk)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::ErrorKind;

	use std::io::Cursor;

	fn valid_header() -> Vec<u8> {
		let mut data = Vec::with_capacity(80);

		data.extend_from_slice(b"DSD ");
		data.extend_from_slice(&[0; 8]); // Chunk size, ignored
		data.extend_from_slice(&1000u64.to_le_bytes()); // File size
		data.extend_from_slice(&200u64.to_le_bytes()); // Tag offset

		data.extend_from_slice(b"fmt ");
		data.extend_from_slice(&[0; 8]); // Chunk size, ignored
		data.extend_from_slice(&1u32.to_le_bytes()); // Format version
		data.extend_from_slice(&2u32.to_le_bytes()); // Format ID
		data.extend_from_slice(&0u32.to_le_bytes()); // Channel type
		data.extend_from_slice(&2u32.to_le_bytes()); // Channel count
		data.extend_from_slice(&44100u32.to_le_bytes()); // Sample rate
		data.extend_from_slice(&24u32.to_le_bytes()); // Bits per sample
		data.extend_from_slice(&88200u64.to_le_bytes()); // Sample count
		data.extend_from_slice(&[0; 8]); // Block size and reserved, ignored

		data
	}

	#[test_log::test]
	fn read_valid_header() {
		let data = valid_header();
		assert_eq!(data.len(), 80);

		let properties = read_from(&mut Cursor::new(data), ParseOptions::new()).unwrap();

		assert_eq!(properties.file_size(), 1000);
		assert_eq!(properties.tag_offset(), 200);
		assert_eq!(properties.format_version(), 1);
		assert_eq!(properties.format_id(), 2);
		assert_eq!(properties.channel_type(), 0);
		assert_eq!(properties.channel_count(), 2);
		assert_eq!(properties.sample_rate(), 44100);
		assert_eq!(properties.bits_per_sample(), 24);
		assert_eq!(properties.sample_count(), 88200);
		assert_eq!(properties.length_seconds(), 2.0);
	}

	#[test_log::test]
	fn reader_position_advances_by_header_size() {
		let mut cursor = Cursor::new(valid_header());
		read_from(&mut cursor, ParseOptions::new()).unwrap();

		assert_eq!(cursor.position(), 80);
	}

	#[test_log::test]
	fn dsd_magic_mismatch() {
		let mut data = valid_header();
		data[..4].copy_from_slice(b"RIFF");

		let err = read_from(&mut Cursor::new(data), ParseOptions::new()).unwrap_err();
		assert!(matches!(err.kind(), ErrorKind::HeaderNotFound));
	}

	#[test_log::test]
	fn empty_input() {
		let err = read_from(&mut Cursor::new(Vec::new()), ParseOptions::new()).unwrap_err();
		assert!(matches!(err.kind(), ErrorKind::HeaderNotFound));
	}

	#[test_log::test]
	fn input_shorter_than_dsd_chunk() {
		// Correct magic, but only 20 of the 28 bytes
		let data = &valid_header()[..20];

		let err = read_from(&mut Cursor::new(data.to_vec()), ParseOptions::new()).unwrap_err();
		assert!(matches!(err.kind(), ErrorKind::HeaderNotFound));
	}

	#[test_log::test]
	fn fmt_magic_mismatch() {
		let mut data = valid_header();
		data[28..32].copy_from_slice(b"data");

		let err = read_from(&mut Cursor::new(data), ParseOptions::new()).unwrap_err();
		assert!(matches!(err.kind(), ErrorKind::InvalidHeader(_)));
	}

	#[test_log::test]
	fn fmt_chunk_truncated() {
		// A valid DSD chunk followed by a partial fmt chunk
		let data = &valid_header()[..40];

		let err = read_from(&mut Cursor::new(data.to_vec()), ParseOptions::new()).unwrap_err();
		assert!(matches!(err.kind(), ErrorKind::InvalidHeader(_)));
	}

	#[test_log::test]
	fn zero_sample_rate() {
		let mut data = valid_header();
		data[56..60].copy_from_slice(&0u32.to_le_bytes());

		let err = read_from(&mut Cursor::new(data), ParseOptions::new()).unwrap_err();
		assert!(matches!(err.kind(), ErrorKind::InvalidHeader(_)));
	}

	#[test_log::test]
	fn skip_properties() {
		let properties = read_from(
			&mut Cursor::new(valid_header()),
			ParseOptions::new().read_properties(false),
		)
		.unwrap();

		assert_eq!(properties.file_size(), 1000);
		assert_eq!(properties.tag_offset(), 200);
		assert_eq!(properties.sample_rate(), 0);
		assert_eq!(properties.length_seconds(), 0.0);
	}

	#[test_log::test]
	fn skip_properties_still_validates_the_container() {
		let mut data = valid_header();
		data[28..32].copy_from_slice(b"data");

		let err = read_from(
			&mut Cursor::new(data),
			ParseOptions::new().read_properties(false),
		)
		.unwrap_err();
		assert!(matches!(err.kind(), ErrorKind::InvalidHeader(_)));
	}

	#[test_log::test]
	fn parser_rewinds_before_reading() {
		let mut cursor = Cursor::new(valid_header());
		cursor.set_position(40);

		let properties = read_from(&mut cursor, ParseOptions::new()).unwrap();
		assert_eq!(properties.sample_rate(), 44100);
	}
}

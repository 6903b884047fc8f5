use crate::error::Result;
use crate::macros::err;
use crate::read::DSD_MAGIC;

use std::io::{Read, Seek, SeekFrom, Write};

/// Update a DSF header's file size and tag offset in place
///
/// Tagging libraries appending or removing a tag block at the end of a DSF
/// file must keep the `DSD ` chunk's declared file size and tag offset in
/// sync. This rewrites both fields and touches nothing else; `tag_offset`
/// should be 0 when no tag block remains.
///
/// # Errors
///
/// * [`ErrorKind::HeaderNotFound`](crate::error::ErrorKind::HeaderNotFound)
///   if the writer does not start with the `DSD ` magic tag
/// * [`ErrorKind::Io`](crate::error::ErrorKind::Io) if seeking or writing
///   fails
pub fn update_header<F>(file: &mut F, file_size: u64, tag_offset: u64) -> Result<()>
where
	F: Read + Write + Seek,
{
	// DSD chunk layout:
	// Offset 0-3: Magic "DSD "
	// Offset 4-11: Chunk size
	// Offset 12-19: Total file size
	// Offset 20-27: Tag offset (0 if no tag)
	file.rewind()?;

	let mut magic = [0u8; 4];
	match file.read_exact(&mut magic) {
		Ok(()) => {},
		Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => err!(HeaderNotFound),
		Err(e) => return Err(e.into()),
	}

	if &magic != DSD_MAGIC {
		err!(HeaderNotFound);
	}

	file.seek(SeekFrom::Start(12))?;
	file.write_all(&file_size.to_le_bytes())?;
	file.write_all(&tag_offset.to_le_bytes())?;

	Ok(())
}
